use dioxus::prelude::*;

use crate::components::PropertyCard;
use crate::core::catalog::{browse_catalog, owned_catalog};
use crate::core::favorites::FavoriteSet;
use crate::routes::Route;
use crate::t;

#[component]
pub fn Favorites() -> Element {
    let favorites = use_context::<Signal<FavoriteSet>>();
    let catalog = use_hook(|| {
        let mut all = browse_catalog();
        all.extend(owned_catalog());
        all
    });
    let saved = favorites.read().select(&catalog);

    rsx! {
        section { class: "page page-favorites",
            h1 { {t!("favorites-title")} }
            if saved.is_empty() {
                div { class: "empty-state",
                    span { class: "empty-state__icon", aria_hidden: "true", "♡" }
                    h2 { {t!("favorites-empty-title")} }
                    p { {t!("favorites-empty-body")} }
                    Link { class: "button button--primary", to: Route::Browse {}, {t!("home-cta-browse")} }
                }
            } else {
                div { class: "property-grid",
                    for property in saved {
                        PropertyCard { key: "{property.id}", property: property.clone() }
                    }
                }
            }
        }
    }
}
