use dioxus::prelude::*;

use crate::core::catalog::FALLBACK_IMAGE;
use crate::core::onboarding::{Advance, OnboardingState, UserType, TOTAL_STEPS};
use crate::core::storage::Settings;
use crate::routes::Route;
use crate::t;

fn finish(user_type: Option<UserType>) {
    let result = Settings::device().and_then(|mut settings| settings.complete_onboarding(user_type));
    if let Err(err) = result {
        tracing::warn!(%err, "could not persist onboarding state");
    }
}

#[component]
pub fn Onboarding() -> Element {
    let nav = navigator();
    let mut state = use_signal(OnboardingState::default);
    let mut image_failed = use_signal(|| false);

    let current = state();
    let slide = current.slide();
    let image_url = match slide {
        Some(_) if image_failed() => FALLBACK_IMAGE,
        Some(slide) => slide.image_url,
        None => FALLBACK_IMAGE,
    };
    let is_last = current.step + 1 == TOTAL_STEPS;
    let step_label = format!("{} / {}", current.step + 1, TOTAL_STEPS);

    let next = move |_: MouseEvent| {
        let outcome = state.write().next();
        match outcome {
            Advance::Moved => image_failed.set(false),
            Advance::Complete => {
                finish(state().user_type);
                nav.replace(Route::Login {});
            }
            Advance::Blocked => {}
        }
    };

    let skip = move |_: MouseEvent| {
        finish(state().user_type);
        nav.replace(Route::Login {});
    };

    rsx! {
        section { class: "onboarding",
            header { class: "onboarding__header",
                span { class: "onboarding__step", "{step_label}" }
                button { class: "button button--ghost", onclick: skip, {t!("onboarding-skip")} }
            }

            if let Some(slide) = slide {
                div { class: "onboarding__slide",
                    img {
                        class: "onboarding__image",
                        src: "{image_url}",
                        alt: "{slide.title}",
                        onerror: move |_| image_failed.set(true),
                    }
                    h1 { "{slide.title}" }
                    p { "{slide.description}" }
                }
            } else {
                div { class: "onboarding__user-type",
                    h1 { {t!("onboarding-user-type-title")} }
                    p { {t!("onboarding-user-type-body")} }
                    div { class: "choice-list",
                        for kind in UserType::ALL {
                            button {
                                key: "{kind:?}",
                                class: if current.user_type == Some(kind) { "choice choice--selected" } else { "choice" },
                                onclick: move |_| state.write().user_type = Some(kind),
                                strong { {kind.title()} }
                                span { {kind.blurb()} }
                            }
                        }
                    }
                }
            }

            div { class: "onboarding__dots",
                for index in 0..TOTAL_STEPS {
                    span {
                        key: "{index}",
                        class: if index == current.step { "dot dot--active" } else { "dot" },
                    }
                }
            }

            footer { class: "onboarding__footer",
                button {
                    class: "button button--ghost",
                    disabled: !current.can_go_back(),
                    onclick: move |_| {
                        state.write().back();
                        image_failed.set(false);
                    },
                    {t!("common-back")}
                }
                button {
                    class: "button button--primary",
                    disabled: !current.can_proceed(),
                    onclick: next,
                    if is_last { {t!("onboarding-get-started")} } else { {t!("common-next")} }
                }
            }
        }
    }
}
