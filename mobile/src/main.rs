use dioxus::prelude::*;

fn main() {
    dioxus::launch(MobileApp);
}

#[component]
fn MobileApp() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1, viewport-fit=cover" }
        ui::App {}
    }
}
