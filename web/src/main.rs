use dioxus::prelude::*;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(WebApp);
}

#[component]
fn WebApp() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        ui::App {}
    }
}
