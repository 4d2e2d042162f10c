//! Localized strings for the Findmyhome screens.
//!
//! Fluent bundles live in `ui/i18n/<locale>/findmyhome-ui.ftl` and are
//! embedded with `rust-embed`, so every platform ships all locales. `en-US`
//! is the fallback and the reference for message IDs; `fl!` checks IDs and
//! arguments against it at compile time.
//!
//! ```ignore
//! crate::i18n::init();
//! let label = crate::t!("nav-browse");
//! ```
//!
//! The initial language comes from the OS locale list on desktop and mobile
//! and from `navigator.languages` on the web.
use std::collections::BTreeSet;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("key")` or `t!("key", arg = value)`, looked up through [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the bundle file name.
const DOMAIN: &str = "findmyhome-ui";
const FALLBACK_TAG: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Bundles;

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("`{0}` is not a language tag")]
    InvalidTag(String),
    #[error(transparent)]
    Load(#[from] I18nEmbedError),
}

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_TAG.parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the user's preferred languages. Safe to call from
/// every component; only the first call does work.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Bundles, &requested) {
            Ok(loaded) => tracing::debug!(?loaded, "languages selected"),
            Err(err) => tracing::warn!(%err, "language selection failed, using {FALLBACK_TAG}"),
        }
    });
}

/// Switch the active language. Tags without an embedded bundle resolve to
/// the fallback.
pub fn set_language(tag: &str) -> Result<(), LanguageError> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| LanguageError::InvalidTag(tag.to_string()))?;
    i18n_embed::select(&*LOADER, &Bundles, &[lang])?;
    tracing::info!(lang = %tag, "language switched");
    Ok(())
}

/// Locale folders embedded in the binary, sorted.
pub fn available_languages() -> Vec<String> {
    Bundles::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_TAG.to_string())
}

/// Native name for the language picker.
pub fn language_name(tag: &str) -> &str {
    match tag {
        "en-US" => "English",
        "es-ES" => "Español",
        "fr-FR" => "Français",
        other => other,
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ships_the_three_bundled_locales() {
        assert_eq!(available_languages(), ["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn fallback_lookup() {
        init();
        set_language("en-US").unwrap();
        assert_eq!(crate::t!("nav-home"), "Home");
        assert_eq!(current_language(), "en-US");
    }

    #[test]
    fn unknown_locale_keeps_english_strings() {
        init();
        set_language("en-US").unwrap();
        let _ = set_language("zz-ZZ");
        assert_eq!(crate::t!("nav-home"), "Home");
    }

    #[test]
    fn garbage_tag_is_rejected() {
        assert!(matches!(
            set_language("not a tag!"),
            Err(LanguageError::InvalidTag(_))
        ));
    }

    #[test]
    fn every_embedded_language_has_a_name() {
        for tag in available_languages() {
            assert_ne!(language_name(&tag), tag, "no display name for {tag}");
        }
    }
}
