use dioxus::prelude::*;

use crate::core::catalog::{find_property, DEFAULT_LANDLORD, FALLBACK_IMAGE};
use crate::core::favorites::FavoriteSet;
use crate::core::format::format_area;
use crate::core::gallery::Gallery;
use crate::core::share::{copy_to_clipboard, current_origin, share_text};
use crate::core::timing::{self, TOAST_MS};
use crate::routes::Route;
use crate::t;

#[component]
pub fn PropertyDetail(id: String) -> Element {
    let mut favorites = use_context::<Signal<FavoriteSet>>();
    let mut broken = use_signal(Vec::<usize>::new);
    let mut gallery = use_signal(Gallery::default);
    let mut toast = use_signal(|| None::<String>);

    let Some(property) = find_property(&id) else {
        tracing::debug!(%id, "unknown property");
        return rsx! {
            section { class: "page empty-state",
                h1 { {t!("detail-not-found-title")} }
                p { {t!("detail-not-found-body")} }
                Link { class: "button button--primary", to: Route::Browse {}, {t!("detail-back-to-browse")} }
            }
        };
    };

    let images = property.images.clone();
    let count = images.len();
    let index = gallery.read().selected(count);
    let fullscreen = gallery.read().is_fullscreen();
    let main_image = if broken.read().contains(&index) {
        FALLBACK_IMAGE.to_string()
    } else {
        images
            .get(index)
            .cloned()
            .unwrap_or_else(|| FALLBACK_IMAGE.to_string())
    };
    let multiple = count > 1;
    let is_favorite = favorites.read().contains(&property.id);
    let area = format_area(property.area);
    let tel = format!("tel:{}", DEFAULT_LANDLORD.phone);
    let mailto = format!(
        "mailto:{}?subject={}",
        DEFAULT_LANDLORD.email,
        property.title.replace(' ', "%20")
    );

    let share_payload = share_text(&property, &current_origin());
    let share = move |_: MouseEvent| {
        let message = match copy_to_clipboard(&share_payload) {
            Ok(()) => t!("detail-share-copied"),
            Err(err) => {
                tracing::warn!(%err, "share failed");
                t!("detail-share-failed")
            }
        };
        toast.set(Some(message));
        spawn(async move {
            timing::sleep_ms(TOAST_MS).await;
            toast.set(None);
        });
    };

    let favorite_id = property.id.clone();

    rsx! {
        section { class: "page page-detail",
            div { class: "gallery",
                img {
                    class: "gallery__main",
                    src: "{main_image}",
                    alt: "{property.title}",
                    onclick: move |_| gallery.write().open(count),
                    onerror: move |_| {
                        if !broken.read().contains(&index) {
                            broken.write().push(index);
                        }
                    },
                }
                if multiple {
                    div { class: "gallery__thumbs",
                        for (i, url) in images.iter().cloned().enumerate() {
                            button {
                                key: "{i}",
                                class: if i == index { "gallery__thumb gallery__thumb--active" } else { "gallery__thumb" },
                                onclick: move |_| gallery.write().select(i, count),
                                img { src: "{url}", alt: "" }
                            }
                        }
                    }
                }
            }

            if fullscreen {
                div {
                    class: "lightbox",
                    role: "dialog",
                    aria_modal: "true",
                    aria_label: "{property.title}",
                    tabindex: "0",
                    onmounted: move |evt| async move {
                        let _ = evt.set_focus(true).await;
                    },
                    onclick: move |_| gallery.write().close(),
                    onkeydown: move |evt: KeyboardEvent| match evt.key() {
                        Key::Escape => gallery.write().close(),
                        Key::ArrowRight => gallery.write().next(count),
                        Key::ArrowLeft => gallery.write().prev(count),
                        _ => {}
                    },
                    button {
                        class: "lightbox__close",
                        aria_label: t!("detail-close-gallery"),
                        onclick: move |evt| {
                            evt.stop_propagation();
                            gallery.write().close();
                        },
                        "×"
                    }
                    if multiple {
                        button {
                            class: "lightbox__nav lightbox__nav--prev",
                            aria_label: t!("detail-prev-photo"),
                            onclick: move |evt| {
                                evt.stop_propagation();
                                gallery.write().prev(count);
                            },
                            "‹"
                        }
                    }
                    img {
                        class: "lightbox__image",
                        src: "{main_image}",
                        alt: "{property.title}",
                        onclick: move |evt| evt.stop_propagation(),
                    }
                    if multiple {
                        button {
                            class: "lightbox__nav lightbox__nav--next",
                            aria_label: t!("detail-next-photo"),
                            onclick: move |evt| {
                                evt.stop_propagation();
                                gallery.write().next(count);
                            },
                            "›"
                        }
                    }
                }
            }

            div { class: "page-detail__header",
                div {
                    h1 { "{property.title}" }
                    p { class: "page-detail__location", "{property.location}" }
                }
                div { class: "page-detail__actions",
                    button {
                        class: if is_favorite { "button button--accent" } else { "button button--ghost" },
                        onclick: move |_| {
                            favorites.write().toggle(&favorite_id);
                        },
                        if is_favorite { {t!("detail-saved")} } else { {t!("detail-save")} }
                    }
                    button { class: "button button--ghost", onclick: share, {t!("detail-share")} }
                }
            }

            if let Some(message) = toast() {
                p { class: "toast", role: "status", "{message}" }
            }

            p { class: "page-detail__price", "{property.price}" }

            ul { class: "facts",
                li { class: "facts__item",
                    span { class: "facts__label", {t!("detail-bedrooms")} }
                    span { class: "facts__value", "{property.bedrooms}" }
                }
                li { class: "facts__item",
                    span { class: "facts__label", {t!("detail-bathrooms")} }
                    span { class: "facts__value", "{property.bathrooms}" }
                }
                li { class: "facts__item",
                    span { class: "facts__label", {t!("detail-area")} }
                    span { class: "facts__value", "{area}" }
                }
                li { class: "facts__item",
                    span { class: "facts__label", {t!("detail-type")} }
                    span { class: "facts__value", "{property.property_type}" }
                }
                li { class: "facts__item",
                    span { class: "facts__label", {t!("detail-status")} }
                    span { class: "facts__value", "{property.status}" }
                }
            }

            section { class: "page-detail__section",
                h2 { {t!("detail-description")} }
                p { "{property.description}" }
            }

            if !property.amenities.is_empty() {
                section { class: "page-detail__section",
                    h2 { {t!("detail-amenities")} }
                    ul { class: "amenity-list",
                        for amenity in property.amenities.iter() {
                            li { key: "{amenity}", class: "amenity-list__item", "{amenity}" }
                        }
                    }
                }
            }

            section { class: "page-detail__section contact-card",
                img { class: "contact-card__avatar", src: "{DEFAULT_LANDLORD.avatar}", alt: "" }
                div { class: "contact-card__info",
                    h3 { "{DEFAULT_LANDLORD.name}" }
                    p { {t!("detail-landlord-stats", rating = DEFAULT_LANDLORD.rating.to_string(), listings = DEFAULT_LANDLORD.listings)} }
                }
                div { class: "contact-card__actions",
                    a { class: "button button--primary", href: "{tel}", {t!("detail-call")} }
                    a { class: "button button--ghost", href: "{mailto}", {t!("detail-email")} }
                    Link { class: "button button--ghost", to: Route::Messages {}, {t!("detail-message")} }
                }
            }
        }
    }
}
