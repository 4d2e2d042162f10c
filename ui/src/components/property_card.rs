use dioxus::prelude::*;

use crate::core::catalog::{Property, FALLBACK_IMAGE};
use crate::core::favorites::FavoriteSet;
use crate::core::format::{format_area, format_rooms};
use crate::routes::Route;
use crate::t;

/// Listing card used by browse, home, favorites and my-properties.
///
/// The heart reads and writes the app-wide [`FavoriteSet`] from context.
#[component]
pub fn PropertyCard(property: Property) -> Element {
    let mut favorites = use_context::<Signal<FavoriteSet>>();
    let mut image = use_signal(|| property.cover_image().to_string());

    let id = property.id.clone();
    let is_favorite = favorites.read().contains(&id);
    let heart_label = if is_favorite {
        t!("card-unfavorite")
    } else {
        t!("card-favorite")
    };
    let rooms = format_rooms(property.bedrooms, property.bathrooms);
    let area = format_area(property.area);
    let status_class = format!("property-card__status {}", property.status.css_class());
    let heart_class = if is_favorite {
        "property-card__heart property-card__heart--on"
    } else {
        "property-card__heart"
    };

    rsx! {
        article { class: "property-card",
            div { class: "property-card__media",
                Link { to: Route::PropertyDetail { id: property.id.clone() },
                    img {
                        class: "property-card__image",
                        src: "{image}",
                        alt: "{property.title}",
                        onerror: move |_| {
                            if image() != FALLBACK_IMAGE {
                                image.set(FALLBACK_IMAGE.to_string());
                            }
                        },
                    }
                }
                span { class: "{status_class}",
                    "{property.status}"
                }
                button {
                    class: "{heart_class}",
                    aria_label: "{heart_label}",
                    aria_pressed: "{is_favorite}",
                    onclick: move |_| {
                        let now = favorites.write().toggle(&id);
                        tracing::debug!(favorite = now, "favorite toggled");
                    },
                    if is_favorite { "♥" } else { "♡" }
                }
            }
            Link { class: "property-card__body", to: Route::PropertyDetail { id: property.id.clone() },
                h3 { class: "property-card__title", "{property.title}" }
                p { class: "property-card__location", "{property.location}" }
                p { class: "property-card__price", "{property.price}" }
                p { class: "property-card__facts",
                    span { "{rooms}" }
                    span { "{area}" }
                    span { "{property.property_type}" }
                }
            }
        }
    }
}
