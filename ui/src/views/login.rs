use dioxus::prelude::*;

use crate::core::auth::{authenticate, validate_form, LOGIN_DELAY_MS};
use crate::core::timing;
use crate::routes::Route;
use crate::t;

#[component]
pub fn Login() -> Element {
    let nav = navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        if let Err(err) = validate_form(&email(), &password()) {
            error.set(Some(err.to_string()));
            return;
        }
        error.set(None);
        busy.set(true);
        spawn(async move {
            timing::sleep_ms(LOGIN_DELAY_MS).await;
            match authenticate(&email(), &password()) {
                Ok(role) => {
                    tracing::info!(?role, "signed in");
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    tracing::debug!(%err, "sign-in rejected");
                    error.set(Some(err.to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "auth",
            div { class: "auth__card",
                h1 { {t!("login-title")} }
                p { class: "auth__subtitle", {t!("login-subtitle")} }

                form { class: "form", onsubmit: submit,
                    label { class: "form__field",
                        span { {t!("login-email")} }
                        input {
                            r#type: "email",
                            autocomplete: "username",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    label { class: "form__field",
                        span { {t!("login-password")} }
                        div { class: "form__password",
                            input {
                                r#type: if show_password() { "text" } else { "password" },
                                autocomplete: "current-password",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                            button {
                                r#type: "button",
                                class: "button button--ghost",
                                onclick: move |_| show_password.toggle(),
                                if show_password() { {t!("login-hide")} } else { {t!("login-show")} }
                            }
                        }
                    }

                    if let Some(message) = error() {
                        p { class: "form__error", role: "alert", "{message}" }
                    }

                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled: busy(),
                        if busy() { {t!("login-busy")} } else { {t!("login-submit")} }
                    }
                }

                details { class: "auth__demo",
                    summary { {t!("login-demo-accounts")} }
                    ul {
                        li { "landlord@propertyconnect.com / landlord123" }
                        li { "tenant@propertyconnect.com / tenant123" }
                        li { "admin@propertyconnect.com / admin123" }
                    }
                }
                Link { class: "auth__link", to: Route::Onboarding {}, {t!("login-back-to-intro")} }
            }
        }
    }
}
