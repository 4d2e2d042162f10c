//! Shared UI crate for Findmyhome. Domain logic, screens, routing and i18n
//! live here; the platform crates only launch it.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod routes;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub mod app_shell;
    pub mod bottom_bar;
    pub mod property_card;

    pub use app_navbar::AppNavbar;
    pub use app_shell::AppShell;
    pub use bottom_bar::{BottomBar, BottomBarVariant};
    pub use property_card::PropertyCard;
}

pub use routes::Route;

use crate::core::catalog::{browse_catalog, owned_catalog};
use crate::core::favorites::FavoriteSet;

/// Shared theme for every platform.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Install app-wide context at the root component: the active language code
/// and the favorites store. Returns the language signal so launchers can key
/// the routed subtree on it.
pub fn use_app_state() -> Signal<String> {
    i18n::init();

    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    let favorites = use_signal(|| {
        let browse = browse_catalog();
        let owned = owned_catalog();
        FavoriteSet::seeded_from(browse.iter().chain(owned.iter()))
    });
    use_context_provider(|| favorites);

    lang_code
}

/// Root component shared by the launchers.
#[component]
pub fn App() -> Element {
    let lang_code = use_app_state();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }

        // Keyed on the language so the whole routed tree re-renders after a switch.
        div {
            key: "{lang_code()}",
            class: "app-root",
            Router::<Route> {}
        }
    }
}
