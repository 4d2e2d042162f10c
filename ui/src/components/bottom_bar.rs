use dioxus::prelude::*;

use crate::core::onboarding::UserType;
use crate::core::storage::Settings;
use crate::routes::Route;
use crate::t;

/// Which tab set the bottom bar shows, chosen from the stored user type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomBarVariant {
    Standard,
    Landlord,
    Seeker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomTab {
    Home,
    Browse,
    Favorites,
    MyProperties,
    AddListing,
    Messages,
    Profile,
}

impl BottomBarVariant {
    pub fn for_user(user_type: Option<UserType>) -> Self {
        match user_type {
            Some(UserType::Landlord) => Self::Landlord,
            Some(UserType::Tenant) => Self::Seeker,
            Some(UserType::Both) | None => Self::Standard,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Standard => "bottom-bar--standard",
            Self::Landlord => "bottom-bar--landlord",
            Self::Seeker => "bottom-bar--seeker",
        }
    }

    pub fn tabs(self) -> &'static [BottomTab] {
        match self {
            Self::Standard => &[
                BottomTab::Home,
                BottomTab::Browse,
                BottomTab::AddListing,
                BottomTab::Messages,
                BottomTab::Profile,
            ],
            Self::Landlord => &[
                BottomTab::Home,
                BottomTab::MyProperties,
                BottomTab::AddListing,
                BottomTab::Messages,
                BottomTab::Profile,
            ],
            Self::Seeker => &[
                BottomTab::Home,
                BottomTab::Browse,
                BottomTab::Favorites,
                BottomTab::Messages,
                BottomTab::Profile,
            ],
        }
    }
}

impl BottomTab {
    pub fn route(self) -> Route {
        match self {
            BottomTab::Home => Route::Home {},
            BottomTab::Browse => Route::Browse {},
            BottomTab::Favorites => Route::Favorites {},
            BottomTab::MyProperties => Route::MyProperties {},
            BottomTab::AddListing => Route::CreateListing {},
            BottomTab::Messages => Route::Messages {},
            BottomTab::Profile => Route::Profile {},
        }
    }

    fn icon(self) -> &'static str {
        match self {
            BottomTab::Home => "⌂",
            BottomTab::Browse => "⌕",
            BottomTab::Favorites => "♥",
            BottomTab::MyProperties => "▦",
            BottomTab::AddListing => "+",
            BottomTab::Messages => "✉",
            BottomTab::Profile => "☺",
        }
    }

    fn label(self) -> String {
        match self {
            BottomTab::Home => t!("nav-home"),
            BottomTab::Browse => t!("nav-browse"),
            BottomTab::Favorites => t!("nav-favorites"),
            BottomTab::MyProperties => t!("nav-my-properties"),
            BottomTab::AddListing => t!("nav-add-listing"),
            BottomTab::Messages => t!("nav-messages"),
            BottomTab::Profile => t!("nav-profile"),
        }
    }
}

fn stored_user_type() -> Option<UserType> {
    match Settings::device().and_then(|settings| settings.user_type()) {
        Ok(user_type) => user_type,
        Err(err) => {
            tracing::warn!(%err, "could not read stored user type");
            None
        }
    }
}

#[component]
pub fn BottomBar() -> Element {
    let variant = use_hook(|| BottomBarVariant::for_user(stored_user_type()));
    let bar_class = format!("bottom-bar {}", variant.css_class());

    rsx! {
        nav { class: "{bar_class}",
            for tab in variant.tabs().iter().copied() {
                {
                    let icon = tab.icon();
                    let label = tab.label();
                    rsx! {
                        Link {
                            key: "{label}",
                            class: "bottom-bar__tab",
                            active_class: "bottom-bar__tab--active",
                            to: tab.route(),
                            span { class: "bottom-bar__icon", aria_hidden: "true", "{icon}" }
                            span { class: "bottom-bar__label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_follows_user_type() {
        assert_eq!(
            BottomBarVariant::for_user(Some(UserType::Landlord)),
            BottomBarVariant::Landlord
        );
        assert_eq!(
            BottomBarVariant::for_user(Some(UserType::Tenant)),
            BottomBarVariant::Seeker
        );
        assert_eq!(
            BottomBarVariant::for_user(Some(UserType::Both)),
            BottomBarVariant::Standard
        );
        assert_eq!(BottomBarVariant::for_user(None), BottomBarVariant::Standard);
    }

    #[test]
    fn landlord_tabs_manage_listings() {
        let tabs = BottomBarVariant::Landlord.tabs();
        assert!(tabs.contains(&BottomTab::MyProperties));
        assert!(!tabs.contains(&BottomTab::Favorites));
        assert_eq!(BottomTab::AddListing.route(), Route::CreateListing {});
    }
}
