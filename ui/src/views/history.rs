use dioxus::prelude::*;

use crate::routes::Route;
use crate::t;

/// Viewing history is not recorded yet, so this is always the empty state.
#[component]
pub fn History() -> Element {
    rsx! {
        section { class: "page page-history",
            h1 { {t!("history-title")} }
            div { class: "empty-state",
                h2 { {t!("history-empty-title")} }
                p { {t!("history-empty-body")} }
                Link { class: "button button--primary", to: Route::Browse {}, {t!("home-cta-browse")} }
            }
        }
    }
}
