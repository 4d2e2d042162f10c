//! Onboarding slides and the user-type step.

use crate::core::catalog::FALLBACK_IMAGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Tenant,
    Landlord,
    Both,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Tenant, UserType::Landlord, UserType::Both];

    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Tenant => "tenant",
            UserType::Landlord => "landlord",
            UserType::Both => "both",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw.trim())
    }

    pub fn title(self) -> &'static str {
        match self {
            UserType::Tenant => "I'm looking for a property",
            UserType::Landlord => "I'm a landlord or seller",
            UserType::Both => "Both",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            UserType::Tenant => "Browse rentals and homes for sale, save favorites and message owners.",
            UserType::Landlord => "List properties, manage enquiries and reach qualified tenants.",
            UserType::Both => "Search for your next home while managing your own listings.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingSlide {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

pub const SLIDES: [OnboardingSlide; 4] = [
    OnboardingSlide {
        title: "Find Your Perfect Property",
        description: "Discover thousands of properties for rent and sale. Filter by location, price, and amenities to find exactly what you're looking for.",
        image_url: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?auto=format&fit=crop&w=1600&q=80",
    },
    OnboardingSlide {
        title: "List & Manage Properties",
        description: "Easily create property listings with photos and detailed descriptions. Manage inquiries and connect with potential tenants or buyers.",
        image_url: "https://images.unsplash.com/photo-1582407947304-fd86f028f716?auto=format&fit=crop&w=1600&q=80",
    },
    OnboardingSlide {
        title: "Connect & Communicate",
        description: "Chat directly with property owners and seekers. Schedule viewings, negotiate prices, and close deals seamlessly.",
        image_url: "https://images.unsplash.com/photo-1556761175-b413da4baf72?auto=format&fit=crop&w=1600&q=80",
    },
    OnboardingSlide {
        title: "Save & Compare Favorites",
        description: "Bookmark properties you love and compare them side by side. Never lose track of your dream home or investment opportunity.",
        image_url: FALLBACK_IMAGE,
    },
];

/// Slides plus the final user-type step.
pub const TOTAL_STEPS: usize = SLIDES.len() + 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnboardingState {
    pub step: usize,
    pub user_type: Option<UserType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved,
    Complete,
    Blocked,
}

impl OnboardingState {
    pub fn is_user_type_step(&self) -> bool {
        self.step >= SLIDES.len()
    }

    pub fn slide(&self) -> Option<&'static OnboardingSlide> {
        SLIDES.get(self.step)
    }

    pub fn can_proceed(&self) -> bool {
        !self.is_user_type_step() || self.user_type.is_some()
    }

    pub fn can_go_back(&self) -> bool {
        self.step > 0
    }

    pub fn next(&mut self) -> Advance {
        if !self.can_proceed() {
            return Advance::Blocked;
        }
        if self.step + 1 < TOTAL_STEPS {
            self.step += 1;
            Advance::Moved
        } else {
            Advance::Complete
        }
    }

    pub fn back(&mut self) {
        self.step = self.step.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_slides_then_requires_user_type() {
        let mut state = OnboardingState::default();
        for _ in 0..SLIDES.len() {
            assert_eq!(state.next(), Advance::Moved);
        }
        assert!(state.is_user_type_step());
        assert_eq!(state.next(), Advance::Blocked);

        state.user_type = Some(UserType::Both);
        assert_eq!(state.next(), Advance::Complete);
    }

    #[test]
    fn back_stops_at_first_step() {
        let mut state = OnboardingState::default();
        assert!(!state.can_go_back());
        state.back();
        assert_eq!(state.step, 0);
        state.next();
        assert!(state.can_go_back());
        state.back();
        assert_eq!(state.step, 0);
    }

    #[test]
    fn user_type_parses_stored_values() {
        assert_eq!(UserType::parse("landlord"), Some(UserType::Landlord));
        assert_eq!(UserType::parse(" tenant "), Some(UserType::Tenant));
        assert_eq!(UserType::parse("owner"), None);
    }
}
