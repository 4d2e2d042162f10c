#![cfg(test)]
//! Each launcher ships a `Dioxus.toml` naming the app and, for the web, the
//! page title. `dx` reads these; nothing else checks them.

const WEB: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/Dioxus.toml"));
const DESKTOP: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Dioxus.toml"));
const MOBILE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../mobile/Dioxus.toml"));

fn assert_launcher(config: &str, crate_name: &str, platform: &str) {
    assert!(
        config.contains(&format!("name = \"{crate_name}\"")),
        "{crate_name}: application name missing"
    );
    assert!(
        config.contains(&format!("default_platform = \"{platform}\"")),
        "{crate_name}: expected default_platform {platform}"
    );
    assert!(
        config.contains("title = \"Findmyhome\""),
        "{crate_name}: window title missing"
    );
}

#[test]
fn web_launcher_config() {
    assert_launcher(WEB, "findmyhome-web", "web");
    assert!(WEB.contains("asset_dir = \"assets\""), "favicon lives in web/assets");
}

#[test]
fn desktop_launcher_config() {
    assert_launcher(DESKTOP, "findmyhome-desktop", "desktop");
}

#[test]
fn mobile_launcher_config() {
    assert_launcher(MOBILE, "findmyhome-mobile", "mobile");
}
