//! Property search / filter evaluation for the browse screen.
//!
//! Policy
//! ------
//! Every active criterion narrows the candidate list and all of them combine
//! with logical AND:
//!
//! - query: case-insensitive substring of the title *or* the location
//! - property types: candidate type is one of the selected types
//! - bedrooms / bathrooms: exact count, except the top bucket (`5+` beds,
//!   `4+` baths) which matches anything at or above the threshold
//! - amenities: the candidate must offer *every* selected amenity
//! - region: the state name appears in the candidate's location
//! - status: exact match
//!
//! The output is always an ordered subsequence of the input. With no active
//! criteria it equals the input.
//!
//! Chips
//! -----
//! [`FilterCriteria::chips`] describes each non-default criterion as a
//! removable [`FilterChip`]. [`FilterCriteria::clear`] resets exactly the
//! criterion a chip stands for.
//!
//! [`BrowseState`] ties the two together the way the browse screen uses them:
//! applying criteria recomputes both the visible results and the chips.

use std::collections::BTreeSet;

use crate::core::catalog::{ListingStatus, Property, PropertyType};

/// Bedroom selections at or above this value mean "at least this many".
pub const BEDROOM_BUCKET: u8 = 5;
/// Bathroom selections at or above this value mean "at least this many".
pub const BATHROOM_BUCKET: u8 = 4;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub property_types: BTreeSet<PropertyType>,
    pub bedrooms: Option<u8>,
    pub bathrooms: Option<u8>,
    pub amenities: BTreeSet<String>,
    pub region: Option<String>,
    pub status: Option<ListingStatus>,
}

/// Removal key of a filter chip; one per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Query,
    PropertyType,
    Bedrooms,
    Bathrooms,
    Amenities,
    Region,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub key: FilterKey,
    pub label: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.active_query().is_none()
            && self.property_types.is_empty()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.amenities.is_empty()
            && self.region.is_none()
            && self.status.is_none()
    }

    fn active_query(&self) -> Option<&str> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Whether a single candidate satisfies every active criterion.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(query) = self.active_query() {
            let needle = query.to_lowercase();
            let in_title = property.title.to_lowercase().contains(&needle);
            let in_location = property.location.to_lowercase().contains(&needle);
            if !in_title && !in_location {
                return false;
            }
        }

        if !self.property_types.is_empty() && !self.property_types.contains(&property.property_type)
        {
            return false;
        }

        if let Some(selected) = self.bedrooms {
            if !room_count_matches(selected, BEDROOM_BUCKET, property.bedrooms) {
                return false;
            }
        }

        if let Some(selected) = self.bathrooms {
            if !room_count_matches(selected, BATHROOM_BUCKET, property.bathrooms) {
                return false;
            }
        }

        if !self
            .amenities
            .iter()
            .all(|amenity| property.has_amenity(amenity))
        {
            return false;
        }

        if let Some(region) = self.region.as_deref() {
            if !property.location.contains(region) {
                return false;
            }
        }

        if let Some(status) = self.status {
            if property.status != status {
                return false;
            }
        }

        true
    }

    /// Ordered subsequence of `candidates` satisfying every active criterion.
    pub fn apply(&self, candidates: &[Property]) -> Vec<Property> {
        candidates
            .iter()
            .filter(|property| self.matches(property))
            .cloned()
            .collect()
    }

    /// One chip per non-default criterion, in drawer order.
    pub fn chips(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();

        if let Some(query) = self.active_query() {
            chips.push(FilterChip {
                key: FilterKey::Query,
                label: format!("Search: \"{query}\""),
            });
        }

        match self.property_types.len() {
            0 => {}
            1 => {
                if let Some(kind) = self.property_types.iter().next() {
                    chips.push(FilterChip {
                        key: FilterKey::PropertyType,
                        label: kind.label().to_string(),
                    });
                }
            }
            n => chips.push(FilterChip {
                key: FilterKey::PropertyType,
                label: format!("{n} Types"),
            }),
        }

        if let Some(beds) = self.bedrooms {
            chips.push(FilterChip {
                key: FilterKey::Bedrooms,
                label: format!("{} Beds", room_label(beds, BEDROOM_BUCKET)),
            });
        }

        if let Some(baths) = self.bathrooms {
            chips.push(FilterChip {
                key: FilterKey::Bathrooms,
                label: format!("{} Baths", room_label(baths, BATHROOM_BUCKET)),
            });
        }

        match self.amenities.len() {
            0 => {}
            1 => chips.push(FilterChip {
                key: FilterKey::Amenities,
                label: "1 Amenity".to_string(),
            }),
            n => chips.push(FilterChip {
                key: FilterKey::Amenities,
                label: format!("{n} Amenities"),
            }),
        }

        if let Some(region) = self.region.as_ref() {
            chips.push(FilterChip {
                key: FilterKey::Region,
                label: region.clone(),
            });
        }

        if let Some(status) = self.status {
            chips.push(FilterChip {
                key: FilterKey::Status,
                label: status.label().to_string(),
            });
        }

        chips
    }

    /// Reset exactly one criterion to its default.
    pub fn clear(&mut self, key: FilterKey) {
        match key {
            FilterKey::Query => self.query.clear(),
            FilterKey::PropertyType => self.property_types.clear(),
            FilterKey::Bedrooms => self.bedrooms = None,
            FilterKey::Bathrooms => self.bathrooms = None,
            FilterKey::Amenities => self.amenities.clear(),
            FilterKey::Region => self.region = None,
            FilterKey::Status => self.status = None,
        }
    }

    pub fn toggle_property_type(&mut self, kind: PropertyType) {
        if !self.property_types.remove(&kind) {
            self.property_types.insert(kind);
        }
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        if !self.amenities.remove(amenity) {
            self.amenities.insert(amenity.to_string());
        }
    }

    /// Select a bedroom chip; selecting the active chip again deselects it.
    pub fn toggle_bedrooms(&mut self, beds: u8) {
        self.bedrooms = toggled(self.bedrooms, beds);
    }

    pub fn toggle_bathrooms(&mut self, baths: u8) {
        self.bathrooms = toggled(self.bathrooms, baths);
    }

    pub fn toggle_status(&mut self, status: ListingStatus) {
        self.status = if self.status == Some(status) {
            None
        } else {
            Some(status)
        };
    }

    /// Empty or whitespace-only input clears the region.
    pub fn set_region(&mut self, region: &str) {
        let region = region.trim();
        self.region = (!region.is_empty()).then(|| region.to_string());
    }
}

fn toggled(current: Option<u8>, picked: u8) -> Option<u8> {
    if current == Some(picked) {
        None
    } else {
        Some(picked)
    }
}

/// `selected >= bucket` means "at least `bucket`"; anything lower is exact.
pub fn room_count_matches(selected: u8, bucket: u8, actual: u8) -> bool {
    if selected >= bucket {
        actual >= bucket
    } else {
        actual == selected
    }
}

/// Chip / button label for a room selection, e.g. `3` or `5+`.
pub fn room_label(selected: u8, bucket: u8) -> String {
    if selected >= bucket {
        format!("{bucket}+")
    } else {
        selected.to_string()
    }
}

/// Browse screen state: the fixed candidates, the committed criteria and the
/// derived view (results + chips).
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    candidates: Vec<Property>,
    criteria: FilterCriteria,
    results: Vec<Property>,
    chips: Vec<FilterChip>,
}

impl BrowseState {
    pub fn new(candidates: Vec<Property>) -> Self {
        Self {
            results: candidates.clone(),
            candidates,
            criteria: FilterCriteria::default(),
            chips: Vec::new(),
        }
    }

    pub fn candidates(&self) -> &[Property] {
        &self.candidates
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn results(&self) -> &[Property] {
        &self.results
    }

    pub fn chips(&self) -> &[FilterChip] {
        &self.chips
    }

    /// Commit `criteria` and recompute results and chips.
    pub fn apply(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    /// Update only the search text, keeping the other criteria.
    pub fn search(&mut self, query: &str) {
        self.criteria.query = query.to_string();
        self.refresh();
    }

    pub fn remove_chip(&mut self, key: FilterKey) {
        self.criteria.clear(key);
        self.refresh();
    }

    pub fn clear_all(&mut self) {
        self.criteria = FilterCriteria::default();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.results = self.criteria.apply(&self.candidates);
        self.chips = self.criteria.chips();
        tracing::debug!(
            matched = self.results.len(),
            total = self.candidates.len(),
            chips = self.chips.len(),
            "browse filters applied"
        );
    }
}
