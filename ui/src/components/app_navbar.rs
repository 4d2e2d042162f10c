use crate::core::messages::{total_unread, INBOX};
use crate::core::notifications::{sample_feed, unread_count};
use crate::i18n;
use crate::routes::Route;
use crate::t;
use dioxus::prelude::*;

// Navbar stylesheet (inlined as well on release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Top navigation: brand, primary links with unread badges, and the locale
/// switcher. Changing the locale updates the `Signal<String>` language code
/// provided at the root so the routed tree re-renders.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current_lang = lang_code_ctx
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(i18n::current_language);

    let unread_notifications = use_hook(|| unread_count(&sample_feed()));
    let unread_messages = use_hook(|| total_unread(&INBOX));

    tracing::debug!(lang = %current_lang, "navbar render");

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    Link { class: "navbar__brand-link", to: Route::Home {},
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", {t!("app-name")} }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links",
                    Link { class: "navbar__link", active_class: "navbar__link--active", to: Route::Home {}, {t!("nav-home")} }
                    Link { class: "navbar__link", active_class: "navbar__link--active", to: Route::Browse {}, {t!("nav-browse")} }
                    Link { class: "navbar__link", active_class: "navbar__link--active", to: Route::Messages {},
                        {t!("nav-messages")}
                        if unread_messages > 0 {
                            span { class: "navbar__badge", "{unread_messages}" }
                        }
                    }
                    Link { class: "navbar__link", active_class: "navbar__link--active", to: Route::Notifications {},
                        {t!("nav-notifications")}
                        if unread_notifications > 0 {
                            span { class: "navbar__badge", "{unread_notifications}" }
                        }
                    }
                    Link { class: "navbar__link", active_class: "navbar__link--active", to: Route::Profile {}, {t!("nav-profile")} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang}",
                            oninput: on_change,
                            for code in langs() {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == current_lang,
                                    {i18n::language_name(&code).to_string()}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
