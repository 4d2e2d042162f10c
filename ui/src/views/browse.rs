use dioxus::prelude::*;

use crate::components::PropertyCard;
use crate::core::catalog::{
    browse_catalog, ListingStatus, PropertyType, FILTER_AMENITIES, NIGERIAN_STATES,
};
use crate::core::filter::{
    room_label, BrowseState, FilterCriteria, FilterKey, BATHROOM_BUCKET, BEDROOM_BUCKET,
};
use crate::t;

#[component]
pub fn Browse() -> Element {
    let mut browse = use_signal(|| BrowseState::new(browse_catalog()));
    let mut query = use_signal(String::new);
    let mut drawer_open = use_signal(|| false);
    let mut draft = use_signal(FilterCriteria::default);

    let results = browse.read().results().to_vec();
    let chips = browse.read().chips().to_vec();
    let count = results.len() as i64;

    let open_drawer = move |_: MouseEvent| {
        draft.set(browse.read().criteria().clone());
        drawer_open.set(true);
    };

    let apply_filters = move |_: MouseEvent| {
        let mut criteria = draft();
        criteria.query = query();
        browse.write().apply(criteria);
        drawer_open.set(false);
    };

    let clear_all = move |_: MouseEvent| {
        browse.write().clear_all();
        query.set(String::new());
        draft.set(FilterCriteria::default());
    };

    rsx! {
        section { class: "page page-browse",
            header { class: "page-browse__header",
                h1 { {t!("browse-title")} }
                div { class: "search-bar",
                    input {
                        r#type: "search",
                        class: "search-bar__input",
                        placeholder: t!("browse-search-placeholder"),
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                browse.write().search(&query());
                            }
                        },
                    }
                    button { class: "button button--ghost", onclick: open_drawer, {t!("browse-filters")} }
                }
            }

            if !chips.is_empty() {
                div { class: "chip-row",
                    for chip in chips {
                        span { key: "{chip.label}", class: "chip",
                            "{chip.label}"
                            button {
                                class: "chip__remove",
                                aria_label: t!("browse-remove-filter"),
                                onclick: move |_| {
                                    if chip.key == FilterKey::Query {
                                        query.set(String::new());
                                    }
                                    browse.write().remove_chip(chip.key);
                                },
                                "×"
                            }
                        }
                    }
                    button { class: "button button--ghost chip-row__clear", onclick: clear_all, {t!("browse-clear-all")} }
                }
            }

            p { class: "page-browse__count", {t!("browse-results-count", count = count)} }

            if results.is_empty() {
                div { class: "empty-state",
                    h2 { {t!("browse-empty-title")} }
                    p { {t!("browse-empty-body")} }
                    button { class: "button button--primary", onclick: clear_all, {t!("browse-clear-all")} }
                }
            } else {
                div { class: "property-grid",
                    for property in results {
                        PropertyCard { key: "{property.id}", property: property.clone() }
                    }
                }
            }

            if drawer_open() {
                div { class: "drawer-backdrop", onclick: move |_| drawer_open.set(false) }
                aside { class: "drawer", role: "dialog", aria_label: t!("browse-filters"),
                    header { class: "drawer__header",
                        h2 { {t!("browse-filters")} }
                        button { class: "button button--ghost", onclick: move |_| drawer_open.set(false), "×" }
                    }

                    FilterGroup { title: t!("filter-status"),
                        div { class: "toggle-row",
                            for status in ListingStatus::ALL {
                                button {
                                    key: "{status}",
                                    class: if draft.read().status == Some(status) { "toggle toggle--on" } else { "toggle" },
                                    onclick: move |_| draft.write().toggle_status(status),
                                    "{status}"
                                }
                            }
                        }
                    }

                    FilterGroup { title: t!("filter-type"),
                        for kind in PropertyType::FILTERABLE {
                            label { key: "{kind}", class: "checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: draft.read().property_types.contains(&kind),
                                    onchange: move |_| draft.write().toggle_property_type(kind),
                                }
                                "{kind}"
                            }
                        }
                    }

                    FilterGroup { title: t!("filter-region"),
                        select {
                            class: "select",
                            value: draft.read().region.clone().unwrap_or_default(),
                            onchange: move |evt| draft.write().set_region(&evt.value()),
                            option { value: "", {t!("filter-any-region")} }
                            for state in NIGERIAN_STATES {
                                option { key: "{state}", value: "{state}", "{state}" }
                            }
                        }
                    }

                    FilterGroup { title: t!("filter-bedrooms"),
                        div { class: "toggle-row",
                            for beds in 1..=BEDROOM_BUCKET {
                                button {
                                    key: "{beds}",
                                    class: if draft.read().bedrooms == Some(beds) { "toggle toggle--on" } else { "toggle" },
                                    onclick: move |_| draft.write().toggle_bedrooms(beds),
                                    {room_label(beds, BEDROOM_BUCKET)}
                                }
                            }
                        }
                    }

                    FilterGroup { title: t!("filter-bathrooms"),
                        div { class: "toggle-row",
                            for baths in 1..=BATHROOM_BUCKET {
                                button {
                                    key: "{baths}",
                                    class: if draft.read().bathrooms == Some(baths) { "toggle toggle--on" } else { "toggle" },
                                    onclick: move |_| draft.write().toggle_bathrooms(baths),
                                    {room_label(baths, BATHROOM_BUCKET)}
                                }
                            }
                        }
                    }

                    FilterGroup { title: t!("filter-amenities"),
                        for amenity in FILTER_AMENITIES {
                            label { key: "{amenity}", class: "checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: draft.read().amenities.contains(amenity),
                                    onchange: move |_| draft.write().toggle_amenity(amenity),
                                }
                                "{amenity}"
                            }
                        }
                    }

                    footer { class: "drawer__footer",
                        button {
                            class: "button button--ghost",
                            onclick: move |_| draft.set(FilterCriteria::default()),
                            {t!("filter-reset")}
                        }
                        button { class: "button button--primary", onclick: apply_filters, {t!("filter-apply")} }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterGroup(title: String, children: Element) -> Element {
    rsx! {
        fieldset { class: "filter-group",
            legend { class: "filter-group__title", "{title}" }
            {children}
        }
    }
}
