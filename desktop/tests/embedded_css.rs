#![cfg(test)]
//! The desktop build inlines `ui/assets/theme/main.css` in release mode, so a
//! missing or truncated theme would only show up as an unstyled window.
//!
//! If the theme moves, update this path and `THEME_CSS_INLINE` in `ui/src/lib.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded theme is empty. If this is intentional, remove the test."
    );
    assert!(!NAVBAR_CSS.trim().is_empty(), "Navbar stylesheet is empty");
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = [
        "--color-bg",
        "--color-primary",
        "--bottom-bar-height",
        "body {",
        ".button--primary",
        ".property-card",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn braces_are_balanced() {
    for (name, css) in [("theme", EMBEDDED_CSS), ("navbar", NAVBAR_CSS)] {
        let open = css.matches('{').count();
        let close = css.matches('}').count();
        assert_eq!(open, close, "{name} stylesheet has unbalanced braces");
    }
}
