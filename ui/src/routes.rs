//! Application routes.
//!
//! The enum lives in the shared crate so screens can navigate with typed
//! routes. Launchers only mount `Router::<Route> {}`.

use dioxus::prelude::*;

use crate::components::AppShell;
use crate::views::{
    Browse, CreateListing, Favorites, History, Home, LiveChat, Login, Messages, MyProperties,
    NotFound, Notifications, Onboarding, Profile, ProfileEdit, ProfileLanguage,
    ProfileNotifications, ProfilePayments, ProfileSecurity, ProfileSettings, PropertyDetail,
    Splash, Support,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Full-screen flows, no navbar.
    #[route("/splash")]
    Splash {},
    #[route("/onboarding")]
    Onboarding {},
    #[route("/login")]
    Login {},

    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/browse")]
        Browse {},
        #[route("/property/:id")]
        PropertyDetail { id: String },
        #[route("/create-listing")]
        CreateListing {},
        #[route("/profile")]
        Profile {},
        #[route("/profile/edit")]
        ProfileEdit {},
        #[route("/profile/payments")]
        ProfilePayments {},
        #[route("/profile/notifications")]
        ProfileNotifications {},
        #[route("/profile/security")]
        ProfileSecurity {},
        #[route("/profile/language")]
        ProfileLanguage {},
        #[route("/profile/settings")]
        ProfileSettings {},
        #[route("/messages")]
        Messages {},
        #[route("/notifications")]
        Notifications {},
        #[route("/support")]
        Support {},
        #[route("/support/chat")]
        LiveChat {},
        #[route("/my-properties")]
        MyProperties {},
        #[route("/favorites")]
        Favorites {},
        #[route("/history")]
        History {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Resolve a notification action target. Targets that are not real
    /// screens yield `None`.
    pub fn from_action(target: &str) -> Option<Route> {
        match target.parse::<Route>() {
            Ok(Route::NotFound { .. }) | Err(_) => None,
            Ok(route) => Some(route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> Route {
        match path.parse::<Route>() {
            Ok(route) => route,
            Err(err) => panic!("{path} failed to parse: {err}"),
        }
    }

    #[test]
    fn every_screen_path_resolves() {
        let table = [
            ("/", Route::Home {}),
            ("/splash", Route::Splash {}),
            ("/onboarding", Route::Onboarding {}),
            ("/login", Route::Login {}),
            ("/browse", Route::Browse {}),
            ("/create-listing", Route::CreateListing {}),
            ("/profile", Route::Profile {}),
            ("/profile/edit", Route::ProfileEdit {}),
            ("/profile/payments", Route::ProfilePayments {}),
            ("/profile/notifications", Route::ProfileNotifications {}),
            ("/profile/security", Route::ProfileSecurity {}),
            ("/profile/language", Route::ProfileLanguage {}),
            ("/profile/settings", Route::ProfileSettings {}),
            ("/messages", Route::Messages {}),
            ("/notifications", Route::Notifications {}),
            ("/support", Route::Support {}),
            ("/support/chat", Route::LiveChat {}),
            ("/my-properties", Route::MyProperties {}),
            ("/favorites", Route::Favorites {}),
            ("/history", Route::History {}),
        ];
        for (path, expected) in table {
            assert_eq!(parse(path), expected, "{path}");
        }
    }

    #[test]
    fn property_route_carries_id() {
        assert_eq!(
            parse("/property/mp2"),
            Route::PropertyDetail { id: "mp2".into() }
        );
        assert_eq!(
            Route::PropertyDetail { id: "3".into() }.to_string(),
            "/property/3"
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert!(matches!(parse("/nowhere/at/all"), Route::NotFound { .. }));
    }

    #[test]
    fn action_targets_only_resolve_known_screens() {
        assert_eq!(Route::from_action("/messages"), Some(Route::Messages {}));
        assert_eq!(
            Route::from_action("/property/1"),
            Some(Route::PropertyDetail { id: "1".into() })
        );
        assert_eq!(Route::from_action("/calendar"), None);
        assert_eq!(Route::from_action("/reports"), None);
    }
}
