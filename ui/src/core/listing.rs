//! Listing creation wizard state.

use crate::core::catalog::PropertyType;

pub const SUBMIT_DELAY_MS: u64 = 2_000;

pub const LISTING_AMENITIES: [&str; 10] = [
    "Parking",
    "Swimming Pool",
    "Gym",
    "WiFi",
    "Air Conditioning",
    "Security",
    "Garden",
    "Balcony",
    "Elevator",
    "Laundry",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStep {
    Details,
    Photos,
    Review,
}

impl ListingStep {
    pub const ALL: [ListingStep; 3] = [ListingStep::Details, ListingStep::Photos, ListingStep::Review];

    pub fn index(self) -> usize {
        match self {
            ListingStep::Details => 0,
            ListingStep::Photos => 1,
            ListingStep::Review => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ListingStep::Details => "Property Details",
            ListingStep::Photos => "Photos & Media",
            ListingStep::Review => "Review & Publish",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ListingStep::Details => ListingStep::Photos,
            ListingStep::Photos | ListingStep::Review => ListingStep::Review,
        }
    }

    pub fn back(self) -> Self {
        match self {
            ListingStep::Details | ListingStep::Photos => ListingStep::Details,
            ListingStep::Review => ListingStep::Photos,
        }
    }

    pub fn is_last(self) -> bool {
        self == ListingStep::Review
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub property_type: Option<PropertyType>,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub location: String,
    pub amenities: Vec<String>,
    /// Picked file names; the bytes never leave the device.
    pub images: Vec<String>,
}

impl ListingDraft {
    pub fn is_step_valid(&self, step: ListingStep) -> bool {
        match step {
            ListingStep::Details => {
                filled(&self.title)
                    && filled(&self.price)
                    && self.property_type.is_some()
                    && filled(&self.location)
            }
            ListingStep::Photos => !self.images.is_empty(),
            ListingStep::Review => true,
        }
    }

    pub fn is_ready_to_publish(&self) -> bool {
        ListingStep::ALL.iter().all(|step| self.is_step_valid(*step))
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity.to_string());
        }
    }

    pub fn add_images<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images.extend(names.into_iter().map(Into::into));
    }

    /// Out-of-range indices are ignored.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ListingDraft {
        ListingDraft {
            title: "Terrace in Surulere".into(),
            price: "₦4,000,000/yr".into(),
            property_type: Some(PropertyType::Townhouse),
            location: "Surulere, Lagos".into(),
            ..Default::default()
        }
    }

    #[test]
    fn details_step_needs_required_fields() {
        assert!(!ListingDraft::default().is_step_valid(ListingStep::Details));
        assert!(details().is_step_valid(ListingStep::Details));

        let mut missing_type = details();
        missing_type.property_type = None;
        assert!(!missing_type.is_step_valid(ListingStep::Details));

        let mut blank_title = details();
        blank_title.title = "   ".into();
        assert!(!blank_title.is_step_valid(ListingStep::Details));
    }

    #[test]
    fn photos_step_needs_an_image() {
        let mut draft = details();
        assert!(!draft.is_step_valid(ListingStep::Photos));
        draft.add_images(["front.jpg", "kitchen.jpg"]);
        assert!(draft.is_step_valid(ListingStep::Photos));
        assert!(draft.is_ready_to_publish());

        draft.remove_image(0);
        assert_eq!(draft.images, vec!["kitchen.jpg".to_string()]);
        draft.remove_image(5);
        assert_eq!(draft.images.len(), 1);
    }

    #[test]
    fn review_step_is_always_valid() {
        assert!(ListingDraft::default().is_step_valid(ListingStep::Review));
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        assert_eq!(ListingStep::Details.back(), ListingStep::Details);
        assert_eq!(ListingStep::Details.next(), ListingStep::Photos);
        assert_eq!(ListingStep::Review.next(), ListingStep::Review);
        assert_eq!(ListingStep::Review.back(), ListingStep::Photos);
        assert!(ListingStep::Review.is_last());
    }

    #[test]
    fn amenity_toggle_adds_and_removes() {
        let mut draft = ListingDraft::default();
        draft.toggle_amenity("WiFi");
        draft.toggle_amenity("Gym");
        draft.toggle_amenity("WiFi");
        assert_eq!(draft.amenities, vec!["Gym".to_string()]);
    }
}
