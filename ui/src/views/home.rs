use dioxus::prelude::*;

use crate::components::PropertyCard;
use crate::core::carousel::{Carousel, CAROUSEL_INTERVAL_MS, HERO_SLIDES};
use crate::core::catalog::{browse_catalog, PropertyType};
use crate::core::timing;
use crate::routes::Route;
use crate::t;

const FEATURED_COUNT: usize = 3;

#[component]
pub fn Home() -> Element {
    let mut carousel = use_signal(Carousel::default);
    let featured = use_hook(|| {
        browse_catalog()
            .into_iter()
            .take(FEATURED_COUNT)
            .collect::<Vec<_>>()
    });

    // Auto-advance; the future is dropped with the component.
    use_future(move || async move {
        loop {
            timing::sleep_ms(CAROUSEL_INTERVAL_MS).await;
            carousel.write().next();
        }
    });

    let slide = carousel.read().current();
    let active = carousel.read().index();
    let hero_style = format!("background-image: url('{}')", slide.image_url);

    rsx! {
        section { class: "page page-home",
            div { class: "hero", style: "{hero_style}",
                div { class: "hero__overlay",
                    h1 { class: "hero__title", "{slide.title}" }
                    p { class: "hero__subtitle", "{slide.subtitle}" }
                    Link { class: "button button--primary", to: Route::Browse {}, {t!("home-cta-browse")} }
                }
                button {
                    class: "hero__nav hero__nav--prev",
                    aria_label: t!("home-carousel-prev"),
                    onclick: move |_| carousel.write().prev(),
                    "‹"
                }
                button {
                    class: "hero__nav hero__nav--next",
                    aria_label: t!("home-carousel-next"),
                    onclick: move |_| carousel.write().next(),
                    "›"
                }
                div { class: "hero__dots",
                    for index in 0..HERO_SLIDES.len() {
                        button {
                            key: "{index}",
                            class: if index == active { "hero__dot hero__dot--active" } else { "hero__dot" },
                            onclick: move |_| carousel.write().go_to(index),
                        }
                    }
                }
            }

            section { class: "page-home__categories",
                h2 { {t!("home-categories-title")} }
                div { class: "category-grid",
                    for kind in PropertyType::FILTERABLE {
                        Link {
                            key: "{kind}",
                            class: "category-grid__item",
                            to: Route::Browse {},
                            "{kind}"
                        }
                    }
                }
            }

            section { class: "page-home__featured",
                div { class: "section-header",
                    h2 { {t!("home-featured-title")} }
                    Link { class: "button button--ghost", to: Route::Browse {}, {t!("home-view-all")} }
                }
                div { class: "property-grid",
                    for property in featured {
                        PropertyCard { key: "{property.id}", property: property.clone() }
                    }
                }
            }

            section { class: "page-home__features",
                h2 { {t!("home-why-title")} }
                ul { class: "feature-list",
                    li { class: "feature-list__item",
                        h3 { {t!("home-feature-verified-title")} }
                        p { {t!("home-feature-verified-body")} }
                    }
                    li { class: "feature-list__item",
                        h3 { {t!("home-feature-chat-title")} }
                        p { {t!("home-feature-chat-body")} }
                    }
                    li { class: "feature-list__item",
                        h3 { {t!("home-feature-list-title")} }
                        p { {t!("home-feature-list-body")} }
                    }
                }
                Link { class: "button button--accent", to: Route::CreateListing {}, {t!("home-cta-list")} }
            }
        }
    }
}
