use dioxus::prelude::*;

use crate::core::catalog::PropertyType;
use crate::core::listing::{ListingDraft, ListingStep, LISTING_AMENITIES, SUBMIT_DELAY_MS};
use crate::core::timing;
use crate::routes::Route;
use crate::t;

fn stepper_class(step: ListingStep, current: ListingStep) -> &'static str {
    if step == current {
        "stepper__item stepper__item--active"
    } else if step.index() < current.index() {
        "stepper__item stepper__item--done"
    } else {
        "stepper__item"
    }
}

#[component]
pub fn CreateListing() -> Element {
    let nav = navigator();
    let mut draft = use_signal(ListingDraft::default);
    let mut step = use_signal(|| ListingStep::Details);
    let mut submitting = use_signal(|| false);
    let mut published = use_signal(|| false);

    let current = step();
    let step_valid = draft.read().is_step_valid(current);
    let ready = draft.read().is_ready_to_publish();

    let publish = move |_: MouseEvent| {
        if submitting() || !draft.read().is_ready_to_publish() {
            return;
        }
        submitting.set(true);
        spawn(async move {
            timing::sleep_ms(SUBMIT_DELAY_MS).await;
            tracing::info!(title = %draft.read().title, images = draft.read().images.len(), "listing published");
            submitting.set(false);
            published.set(true);
            timing::sleep_ms(timing::TOAST_MS).await;
            nav.push(Route::Browse {});
        });
    };

    rsx! {
        section { class: "page page-listing",
            h1 { {t!("listing-title")} }

            ol { class: "stepper",
                for s in ListingStep::ALL {
                    li {
                        key: "{s:?}",
                        class: stepper_class(s, current),
                        span { class: "stepper__number", {(s.index() + 1).to_string()} }
                        span { class: "stepper__label", {s.title()} }
                    }
                }
            }

            if published() {
                div { class: "banner banner--success", role: "status",
                    h2 { {t!("listing-published-title")} }
                    p { {t!("listing-published-body")} }
                }
            }

            {match current {
                ListingStep::Details => rsx! { DetailsStep { draft } },
                ListingStep::Photos => rsx! { PhotosStep { draft } },
                ListingStep::Review => rsx! { ReviewStep { draft } },
            }}

            footer { class: "page-listing__footer",
                button {
                    class: "button button--ghost",
                    disabled: current == ListingStep::Details || submitting(),
                    onclick: move |_| step.set(current.back()),
                    {t!("common-back")}
                }
                if current.is_last() {
                    button {
                        class: "button button--primary",
                        disabled: !ready || submitting() || published(),
                        onclick: publish,
                        if submitting() { {t!("listing-publishing")} } else { {t!("listing-publish")} }
                    }
                } else {
                    button {
                        class: "button button--primary",
                        disabled: !step_valid,
                        onclick: move |_| step.set(current.next()),
                        {t!("common-next")}
                    }
                }
            }
        }
    }
}

#[component]
fn DetailsStep(mut draft: Signal<ListingDraft>) -> Element {
    let values = draft();
    let selected_type = values
        .property_type
        .map(|kind| kind.label().to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "form",
            label { class: "form__field",
                span { {t!("listing-field-title")} " *" }
                input {
                    value: "{values.title}",
                    oninput: move |evt| draft.write().title = evt.value(),
                }
            }
            label { class: "form__field",
                span { {t!("listing-field-description")} }
                textarea {
                    rows: "4",
                    value: "{values.description}",
                    oninput: move |evt| draft.write().description = evt.value(),
                }
            }
            div { class: "form__row",
                label { class: "form__field",
                    span { {t!("listing-field-price")} " *" }
                    input {
                        placeholder: "₦2,500,000/yr",
                        value: "{values.price}",
                        oninput: move |evt| draft.write().price = evt.value(),
                    }
                }
                label { class: "form__field",
                    span { {t!("listing-field-type")} " *" }
                    select {
                        value: "{selected_type}",
                        onchange: move |evt| draft.write().property_type = PropertyType::from_label(&evt.value()),
                        option { value: "", {t!("listing-select-type")} }
                        for kind in PropertyType::LISTABLE {
                            option { key: "{kind}", value: "{kind}", "{kind}" }
                        }
                    }
                }
            }
            div { class: "form__row",
                label { class: "form__field",
                    span { {t!("listing-field-bedrooms")} }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{values.bedrooms}",
                        oninput: move |evt| draft.write().bedrooms = evt.value(),
                    }
                }
                label { class: "form__field",
                    span { {t!("listing-field-bathrooms")} }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{values.bathrooms}",
                        oninput: move |evt| draft.write().bathrooms = evt.value(),
                    }
                }
                label { class: "form__field",
                    span { {t!("listing-field-area")} }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{values.area}",
                        oninput: move |evt| draft.write().area = evt.value(),
                    }
                }
            }
            label { class: "form__field",
                span { {t!("listing-field-location")} " *" }
                input {
                    value: "{values.location}",
                    oninput: move |evt| draft.write().location = evt.value(),
                }
            }
            fieldset { class: "filter-group",
                legend { class: "filter-group__title", {t!("listing-field-amenities")} }
                div { class: "checkbox-grid",
                    for amenity in LISTING_AMENITIES {
                        label { key: "{amenity}", class: "checkbox",
                            input {
                                r#type: "checkbox",
                                checked: values.amenities.iter().any(|a| a == amenity),
                                onchange: move |_| draft.write().toggle_amenity(amenity),
                            }
                            "{amenity}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PhotosStep(mut draft: Signal<ListingDraft>) -> Element {
    let images = draft.read().images.clone();

    let on_pick = move |evt: FormEvent| {
        if let Some(engine) = evt.files() {
            let names = engine.files();
            tracing::debug!(count = names.len(), "images picked");
            draft.write().add_images(names);
        }
    };

    rsx! {
        div { class: "photos",
            label { class: "upload",
                span { class: "upload__title", {t!("listing-photos-add")} }
                span { class: "upload__hint", {t!("listing-photos-hint")} }
                input {
                    r#type: "file",
                    accept: "image/*",
                    multiple: true,
                    onchange: on_pick,
                }
            }
            if images.is_empty() {
                p { class: "form__hint", {t!("listing-photos-required")} }
            } else {
                ul { class: "photo-list",
                    for (index, name) in images.into_iter().enumerate() {
                        li { key: "{index}-{name}", class: "photo-list__item",
                            span { "{name}" }
                            button {
                                class: "button button--ghost",
                                onclick: move |_| draft.write().remove_image(index),
                                {t!("listing-photos-remove")}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewStep(draft: Signal<ListingDraft>) -> Element {
    let values = draft();
    let kind = values
        .property_type
        .map(|kind| kind.label())
        .unwrap_or("-");
    let amenities = if values.amenities.is_empty() {
        "-".to_string()
    } else {
        values.amenities.join(", ")
    };
    let photo_count = values.images.len() as i64;

    rsx! {
        dl { class: "review",
            dt { {t!("listing-field-title")} }
            dd { "{values.title}" }
            dt { {t!("listing-field-price")} }
            dd { "{values.price}" }
            dt { {t!("listing-field-type")} }
            dd { "{kind}" }
            dt { {t!("listing-field-location")} }
            dd { "{values.location}" }
            dt { {t!("listing-field-bedrooms")} }
            dd { "{values.bedrooms}" }
            dt { {t!("listing-field-bathrooms")} }
            dd { "{values.bathrooms}" }
            dt { {t!("listing-field-area")} }
            dd { "{values.area}" }
            dt { {t!("listing-field-amenities")} }
            dd { "{amenities}" }
            dt { {t!("listing-field-description")} }
            dd { "{values.description}" }
            dt { {t!("listing-photos-title")} }
            dd { {t!("listing-photo-count", count = photo_count)} }
        }
    }
}
