use dioxus::prelude::*;

use crate::components::{AppNavbar, BottomBar};
use crate::routes::Route;

/// Layout for every screen except the full-screen splash, onboarding and
/// login flows.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        AppNavbar {}
        main { class: "app-main",
            Outlet::<Route> {}
        }
        BottomBar {}
    }
}
