//! `/profile` and its subsections.

use dioxus::prelude::*;

use crate::core::catalog::owned_catalog;
use crate::core::favorites::FavoriteSet;
use crate::core::storage::{ProfileRecord, Settings, StorageError};
use crate::core::timing::{self, TOAST_MS};
use crate::i18n;
use crate::routes::Route;
use crate::t;

const MIN_PASSWORD_LEN: usize = 8;

fn load_profile() -> ProfileRecord {
    match Settings::device().and_then(|settings| settings.load_profile()) {
        Ok(profile) => profile,
        Err(err) => {
            tracing::warn!(%err, "profile unreadable, showing defaults");
            ProfileRecord::default()
        }
    }
}

fn save_profile(profile: &ProfileRecord) -> Result<(), StorageError> {
    Settings::device()?.save_profile(profile)
}

#[component]
fn SubpageHeader(title: String) -> Element {
    rsx! {
        header { class: "subpage-header",
            Link { class: "button button--ghost", to: Route::Profile {}, "‹" }
            h1 { "{title}" }
        }
    }
}

#[component]
fn Switch(label: String, description: String, on: Signal<bool>) -> Element {
    let mut on = on;
    rsx! {
        label { class: "switch",
            div { class: "switch__text",
                strong { "{label}" }
                span { "{description}" }
            }
            input {
                r#type: "checkbox",
                role: "switch",
                checked: on(),
                onchange: move |evt| on.set(evt.checked()),
            }
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let nav = navigator();
    let favorites = use_context::<Signal<FavoriteSet>>();
    let profile = use_hook(load_profile);
    let listed = use_hook(|| owned_catalog().len());
    let favorite_count = favorites.read().len();

    let logout = move |_: MouseEvent| {
        match Settings::device().and_then(|mut settings| settings.clear()) {
            Ok(()) => tracing::info!("signed out"),
            Err(err) => tracing::warn!(%err, "could not clear local settings"),
        }
        nav.replace(Route::Login {});
    };

    rsx! {
        section { class: "page page-profile",
            div { class: "profile-card",
                div { class: "profile-card__avatar", aria_hidden: "true", "☺" }
                div {
                    h1 { "{profile.name}" }
                    p { "{profile.email}" }
                    p { class: "profile-card__location", "{profile.location}" }
                }
                Link { class: "button button--ghost", to: Route::ProfileEdit {}, {t!("profile-edit")} }
            }

            ul { class: "stats",
                li { class: "stats__item",
                    strong { "{listed}" }
                    span { {t!("profile-stat-listed")} }
                }
                li { class: "stats__item",
                    strong { "{favorite_count}" }
                    span { {t!("profile-stat-favorites")} }
                }
            }

            nav { class: "menu",
                h2 { class: "menu__heading", {t!("profile-section-properties")} }
                Link { class: "menu__item", to: Route::MyProperties {}, {t!("nav-my-properties")} }
                Link { class: "menu__item", to: Route::Favorites {}, {t!("nav-favorites")} }
                Link { class: "menu__item", to: Route::History {}, {t!("profile-history")} }
                Link { class: "menu__item", to: Route::CreateListing {}, {t!("nav-add-listing")} }

                h2 { class: "menu__heading", {t!("profile-section-account")} }
                Link { class: "menu__item", to: Route::ProfileEdit {}, {t!("profile-edit")} }
                Link { class: "menu__item", to: Route::ProfilePayments {}, {t!("profile-payments")} }
                Link { class: "menu__item", to: Route::ProfileNotifications {}, {t!("profile-notifications")} }
                Link { class: "menu__item", to: Route::ProfileSecurity {}, {t!("profile-security")} }

                h2 { class: "menu__heading", {t!("profile-section-preferences")} }
                Link { class: "menu__item", to: Route::ProfileLanguage {}, {t!("profile-language")} }
                Link { class: "menu__item", to: Route::ProfileSettings {}, {t!("profile-settings")} }
                Link { class: "menu__item", to: Route::Support {}, {t!("profile-support")} }
            }

            button { class: "button button--danger", onclick: logout, {t!("profile-logout")} }
        }
    }
}

#[component]
pub fn ProfileEdit() -> Element {
    let mut form = use_signal(load_profile);
    let mut status = use_signal(|| None::<Result<(), String>>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = save_profile(&form.read()).map_err(|err| {
            tracing::warn!(%err, "profile save failed");
            err.to_string()
        });
        status.set(Some(result));
        spawn(async move {
            timing::sleep_ms(TOAST_MS).await;
            status.set(None);
        });
    };

    let values = form();

    rsx! {
        section { class: "page page-profile-edit",
            SubpageHeader { title: t!("profile-edit") }
            form { class: "form", onsubmit: submit,
                label { class: "form__field",
                    span { {t!("profile-field-name")} }
                    input { value: "{values.name}", oninput: move |evt| form.write().name = evt.value() }
                }
                label { class: "form__field",
                    span { {t!("profile-field-email")} }
                    input { r#type: "email", value: "{values.email}", oninput: move |evt| form.write().email = evt.value() }
                }
                label { class: "form__field",
                    span { {t!("profile-field-phone")} }
                    input { r#type: "tel", value: "{values.phone}", oninput: move |evt| form.write().phone = evt.value() }
                }
                label { class: "form__field",
                    span { {t!("profile-field-location")} }
                    input { value: "{values.location}", oninput: move |evt| form.write().location = evt.value() }
                }
                button { r#type: "submit", class: "button button--primary", {t!("common-save")} }

                {match status() {
                    Some(Ok(())) => rsx! { p { class: "toast", role: "status", {t!("profile-saved")} } },
                    Some(Err(reason)) => rsx! { p { class: "form__error", role: "alert", "{reason}" } },
                    None => rsx! {},
                }}
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PaymentCard {
    brand: String,
    last4: String,
    is_default: bool,
}

/// Brand must be non-blank and `last4` exactly four digits.
fn validate_card(brand: &str, last4: &str) -> bool {
    !brand.trim().is_empty()
        && last4.trim().len() == 4
        && last4.trim().chars().all(|c| c.is_ascii_digit())
}

#[component]
pub fn ProfilePayments() -> Element {
    let mut cards = use_signal(|| {
        vec![
            PaymentCard {
                brand: "Visa".into(),
                last4: "4242".into(),
                is_default: true,
            },
            PaymentCard {
                brand: "Mastercard".into(),
                last4: "8888".into(),
                is_default: false,
            },
        ]
    });
    let mut adding = use_signal(|| false);
    let mut brand = use_signal(String::new);
    let mut last4 = use_signal(String::new);

    let can_add = validate_card(&brand(), &last4());

    let add = move |_: MouseEvent| {
        if !validate_card(&brand(), &last4()) {
            return;
        }
        cards.write().push(PaymentCard {
            brand: brand().trim().to_string(),
            last4: last4().trim().to_string(),
            is_default: false,
        });
        brand.set(String::new());
        last4.set(String::new());
        adding.set(false);
    };

    rsx! {
        section { class: "page page-payments",
            SubpageHeader { title: t!("profile-payments") }
            ul { class: "card-list",
                for (index, card) in cards().into_iter().enumerate() {
                    li { key: "{index}", class: "card-list__item",
                        span { class: "card-list__brand", "{card.brand}" }
                        span { "•••• {card.last4}" }
                        if card.is_default {
                            span { class: "badge", {t!("payments-default")} }
                        } else {
                            button {
                                class: "button button--ghost",
                                onclick: move |_| {
                                    for (i, c) in cards.write().iter_mut().enumerate() {
                                        c.is_default = i == index;
                                    }
                                },
                                {t!("payments-make-default")}
                            }
                            button {
                                class: "button button--ghost",
                                onclick: move |_| {
                                    cards.write().remove(index);
                                },
                                {t!("payments-remove")}
                            }
                        }
                    }
                }
            }
            button { class: "button button--primary", onclick: move |_| adding.set(true), {t!("payments-add")} }

            if adding() {
                div { class: "dialog", role: "dialog",
                    h2 { {t!("payments-add")} }
                    label { class: "form__field",
                        span { {t!("payments-brand")} }
                        input { value: "{brand}", oninput: move |evt| brand.set(evt.value()) }
                    }
                    label { class: "form__field",
                        span { {t!("payments-last4")} }
                        input { inputmode: "numeric", maxlength: "4", value: "{last4}", oninput: move |evt| last4.set(evt.value()) }
                    }
                    div { class: "dialog__actions",
                        button { class: "button button--ghost", onclick: move |_| adding.set(false), {t!("common-cancel")} }
                        button { class: "button button--primary", disabled: !can_add, onclick: add, {t!("common-save")} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProfileNotifications() -> Element {
    let email = use_signal(|| true);
    let push = use_signal(|| true);
    let sms = use_signal(|| false);

    rsx! {
        section { class: "page page-settings",
            SubpageHeader { title: t!("profile-notifications") }
            Switch { label: t!("notify-email"), description: t!("notify-email-body"), on: email }
            Switch { label: t!("notify-push"), description: t!("notify-push-body"), on: push }
            Switch { label: t!("notify-sms"), description: t!("notify-sms-body"), on: sms }
        }
    }
}

/// Checks for the change-password form, in the order the form reports them.
fn password_problem(current: &str, new: &str, confirm: &str) -> Option<String> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        Some(t!("security-missing-fields"))
    } else if new.chars().count() < MIN_PASSWORD_LEN {
        Some(t!("security-too-short", min = (MIN_PASSWORD_LEN as i64)))
    } else if new != confirm {
        Some(t!("security-mismatch"))
    } else {
        None
    }
}

#[component]
pub fn ProfileSecurity() -> Element {
    let mut current = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut outcome = use_signal(|| None::<Result<(), String>>);
    let two_factor = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match password_problem(&current(), &new_password(), &confirm()) {
            Some(problem) => outcome.set(Some(Err(problem))),
            None => {
                tracing::info!("password changed");
                current.set(String::new());
                new_password.set(String::new());
                confirm.set(String::new());
                outcome.set(Some(Ok(())));
            }
        }
    };

    rsx! {
        section { class: "page page-settings",
            SubpageHeader { title: t!("profile-security") }
            form { class: "form", onsubmit: submit,
                h2 { {t!("security-change-password")} }
                label { class: "form__field",
                    span { {t!("security-current")} }
                    input { r#type: "password", value: "{current}", oninput: move |evt| current.set(evt.value()) }
                }
                label { class: "form__field",
                    span { {t!("security-new")} }
                    input { r#type: "password", value: "{new_password}", oninput: move |evt| new_password.set(evt.value()) }
                }
                label { class: "form__field",
                    span { {t!("security-confirm")} }
                    input { r#type: "password", value: "{confirm}", oninput: move |evt| confirm.set(evt.value()) }
                }
                {match outcome() {
                    Some(Ok(())) => rsx! { p { class: "toast", role: "status", {t!("security-updated")} } },
                    Some(Err(reason)) => rsx! { p { class: "form__error", role: "alert", "{reason}" } },
                    None => rsx! {},
                }}
                button { r#type: "submit", class: "button button--primary", {t!("security-update")} }
            }
            Switch { label: t!("security-2fa"), description: t!("security-2fa-body"), on: two_factor }
        }
    }
}

#[component]
pub fn ProfileLanguage() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let langs = use_hook(i18n::available_languages);
    let current = lang_code
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(i18n::current_language);

    rsx! {
        section { class: "page page-settings",
            SubpageHeader { title: t!("profile-language") }
            ul { class: "choice-list",
                for tag in langs {
                    {
                        let selected = tag == current;
                        let name = i18n::language_name(&tag).to_string();
                        let picked = tag.clone();
                        rsx! {
                            li { key: "{tag}",
                                button {
                                    class: if selected { "choice choice--selected" } else { "choice" },
                                    aria_pressed: selected,
                                    onclick: move |_| match i18n::set_language(&picked) {
                                        Ok(()) => {
                                            if let Some(mut code) = lang_code {
                                                code.set(picked.clone());
                                            }
                                        }
                                        Err(err) => tracing::warn!(%err, "language switch failed"),
                                    },
                                    strong { "{name}" }
                                    span { class: "choice__tag", "{tag}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProfileSettings() -> Element {
    let dark_mode = use_signal(|| false);
    let data_saver = use_signal(|| false);
    let theme_class = if dark_mode() { "page page-settings theme--dark" } else { "page page-settings" };

    rsx! {
        section { class: "{theme_class}",
            SubpageHeader { title: t!("profile-settings") }
            Switch { label: t!("settings-dark-mode"), description: t!("settings-dark-mode-body"), on: dark_mode }
            Switch { label: t!("settings-data-saver"), description: t!("settings-data-saver-body"), on: data_saver }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_needs_brand_and_four_digits() {
        assert!(validate_card("Visa", "1234"));
        assert!(validate_card(" Amex ", " 0005 "));
        assert!(!validate_card("", "1234"));
        assert!(!validate_card("Visa", "123"));
        assert!(!validate_card("Visa", "12a4"));
    }

    #[test]
    fn password_rules_apply_in_order() {
        crate::i18n::init();
        assert!(password_problem("", "longenough", "longenough").is_some());
        assert!(password_problem("old", "short", "short").is_some());
        assert!(password_problem("old", "longenough", "different1").is_some());
        assert_eq!(password_problem("old", "longenough", "longenough"), None);
    }
}
