#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Screens in `ui` rely on these selectors existing in the shared theme at
`ui/assets/theme/main.css`. Packaged desktop builds inline that file, so a
dropped or renamed class would otherwise surface only as broken layout.

This is a substring check, not a CSS parser. When a component renames a class,
update `REQUIRED_SELECTORS` alongside it.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Selectors the shared screens depend on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".app-main",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    ".badge",
    ".toast",
    ".empty-state",
    // Splash & onboarding
    ".splash__progress",
    ".dialog__actions",
    ".onboarding__slide",
    ".choice--selected",
    // Home carousel
    ".hero__overlay",
    ".hero__dot--active",
    // Property cards
    ".property-grid",
    ".property-card",
    ".property-card__heart--on",
    ".status-badge--rent",
    ".status-badge--sale",
    // Browse filters
    ".search-bar__input",
    ".chip-row",
    ".chip__remove",
    ".drawer",
    ".drawer-backdrop",
    ".filter-group__title",
    ".toggle--on",
    // Detail & listing wizard
    ".gallery__thumb--active",
    ".lightbox {",
    ".lightbox__image",
    ".lightbox__close",
    ".lightbox__nav--next",
    ".facts__item",
    ".contact-card__actions",
    ".stepper__item--active",
    ".stepper__item--done",
    ".upload",
    // Messaging
    ".conversation__online",
    ".notification--unread",
    ".priority--high",
    ".tabs__tab--active",
    ".bubble--user",
    ".bubble--agent",
    ".bubble--system",
    ".bubble--typing",
    ".chat-input__field",
    // Profile
    ".menu__item",
    ".switch",
    ".theme--dark",
    // Bottom bar
    ".bottom-bar",
    ".bottom-bar__tab--active",
    ".bottom-bar--landlord",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Theme is missing {} selector(s): {:?}",
        missing.len(),
        missing
    );
}

#[test]
fn navbar_stylesheet_covers_navbar_markup() {
    for sel in [
        ".navbar {",
        ".navbar__inner",
        ".navbar__brand-link",
        ".navbar__link--active",
        ".navbar__badge",
        ".navbar__locale",
    ] {
        assert!(NAVBAR_CSS.contains(sel), "navbar.css is missing `{sel}`");
    }
}

#[test]
fn bottom_bar_clears_page_content() {
    // The fixed bottom bar overlaps content unless the main column reserves its height.
    let main_block = THEME_CSS
        .split(".app-main {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .unwrap_or_default();
    assert!(
        main_block.contains("--bottom-bar-height"),
        "`.app-main` padding should account for the bottom bar"
    );
}
