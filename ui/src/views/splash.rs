use dioxus::prelude::*;
use futures_util::future::join4;

use crate::core::onboarding::UserType;
use crate::core::storage::{Settings, StorageError};
use crate::core::timing::{self, SPLASH_MIN_DISPLAY_MS, SPLASH_STEP_DELAYS_MS};
use crate::routes::Route;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Loading,
    Ready,
    Failed(String),
}

async fn load_preferences(delay_ms: u64) -> Result<Option<UserType>, StorageError> {
    timing::sleep_ms(delay_ms).await;
    let settings = Settings::device()?;
    let onboarded = settings.onboarding_completed()?;
    let user_type = settings.user_type()?;
    tracing::debug!(onboarded, ?user_type, "preferences loaded");
    Ok(user_type)
}

async fn step(delay_ms: u64, mut done: Signal<usize>) {
    timing::sleep_ms(delay_ms).await;
    done += 1;
}

#[component]
pub fn Splash() -> Element {
    let nav = navigator();
    let mut phase = use_signal(|| Phase::Loading);
    let mut completed = use_signal(|| 0_usize);
    let mut attempt = use_signal(|| 0_u32);
    let total = SPLASH_STEP_DELAYS_MS.len() + 1;

    // Re-runs whenever `attempt` changes (Retry).
    let _init = use_resource(move || async move {
        let run = attempt();
        phase.set(Phase::Loading);
        completed.set(0);
        tracing::info!(attempt = run, "initializing");

        let [prefs_ms, config_ms, services_ms, finalize_ms] = SPLASH_STEP_DELAYS_MS;
        let (prefs, (), (), ()) = join4(
            load_preferences(prefs_ms),
            step(config_ms, completed),
            step(services_ms, completed),
            step(finalize_ms, completed),
        )
        .await;

        match prefs {
            Ok(_) => {
                completed += 1;
                phase.set(Phase::Ready);
                timing::sleep_ms(SPLASH_MIN_DISPLAY_MS).await;
                nav.replace(Route::Home {});
            }
            Err(err) => {
                tracing::warn!(%err, "initialization failed");
                phase.set(Phase::Failed(err.to_string()));
            }
        }
    });

    let progress = completed() * 100 / total;
    let progress_style = format!("width: {progress}%");

    rsx! {
        section { class: "splash",
            div { class: "splash__brand",
                span { class: "splash__logo", aria_hidden: "true", "⌂" }
                h1 { {t!("app-name")} }
                p { class: "splash__tagline", {t!("tagline")} }
            }

            {match phase() {
                Phase::Loading => rsx! {
                    div { class: "splash__progress",
                        div { class: "splash__progress-bar", style: "{progress_style}" }
                    }
                    p { class: "splash__status", {t!("splash-loading")} }
                },
                Phase::Ready => rsx! {
                    p { class: "splash__status splash__status--ready", {t!("splash-ready")} }
                },
                Phase::Failed(reason) => rsx! {
                    div { class: "dialog", role: "alertdialog",
                        h2 { {t!("splash-error-title")} }
                        p { {t!("splash-error-body")} }
                        p { class: "dialog__detail", "{reason}" }
                        button {
                            class: "button button--primary",
                            onclick: move |_| attempt += 1,
                            {t!("splash-retry")}
                        }
                    }
                },
            }}
        }
    }
}
