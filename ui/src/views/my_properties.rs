use dioxus::prelude::*;

use crate::components::PropertyCard;
use crate::core::catalog::owned_catalog;
use crate::routes::Route;
use crate::t;

#[component]
pub fn MyProperties() -> Element {
    let listings = use_hook(owned_catalog);
    let count = listings.len() as i64;

    rsx! {
        section { class: "page page-my-properties",
            header { class: "page__header",
                h1 { {t!("my-properties-title")} }
                span { class: "badge", {t!("my-properties-count", count = count)} }
                Link { class: "button button--primary", to: Route::CreateListing {}, {t!("nav-add-listing")} }
            }
            if listings.is_empty() {
                div { class: "empty-state",
                    h2 { {t!("my-properties-empty-title")} }
                    p { {t!("my-properties-empty-body")} }
                }
            } else {
                div { class: "property-grid",
                    for property in listings {
                        PropertyCard { key: "{property.id}", property: property.clone() }
                    }
                }
            }
        }
    }
}
