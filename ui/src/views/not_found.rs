use dioxus::prelude::*;

use crate::routes::Route;
use crate::t;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        section { class: "page empty-state",
            h1 { "404" }
            p { {t!("not-found-body")} }
            code { "{path}" }
            Link { class: "button button--primary", to: Route::Home {}, {t!("not-found-home")} }
        }
    }
}
