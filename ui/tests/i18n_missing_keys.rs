use std::collections::{BTreeMap, BTreeSet, HashSet};

const EN_US: &str = include_str!("../i18n/en-US/findmyhome-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/findmyhome-ui.ftl");
const FR_FR: &str = include_str!("../i18n/fr-FR/findmyhome-ui.ftl");

/// Every shipped locale must define at least the keys of `en-US`.
///
/// Keys are read line by line: `key =` starts a message, comments and
/// indented selector or attribute lines are skipped. A new locale needs a
/// `ui/i18n/<locale>/findmyhome-ui.ftl` and an entry in `locales` below.
#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);

    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[
        ("es-ES", ES_ES),
        ("fr-FR", FR_FR),
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let mut missing: BTreeSet<String> = BTreeSet::new();

        for k in &fallback_keys {
            if !keys.contains(k) {
                missing.insert(k.clone());
            }
        }

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Message keys defined in a Fluent file.
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Panics when a key is defined twice in one file.
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

/// Placeholders must line up across locales, since `fl!` checks them
/// against the fallback only.
#[test]
fn placeholders_match_fallback() {
    let fallback = placeholders(EN_US);
    for (locale, src) in [("es-ES", ES_ES), ("fr-FR", FR_FR)] {
        let translated = placeholders(src);
        for (key, vars) in &fallback {
            let other = translated.get(key).cloned().unwrap_or_default();
            assert_eq!(&other, vars, "{locale}: placeholders differ for `{key}`");
        }
    }
}

/// Variables referenced by each message, including those inside selectors.
fn placeholders(src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for raw in src.lines() {
        if raw.trim_start().starts_with('#') || raw.trim().is_empty() {
            continue;
        }
        let body = if raw.starts_with(char::is_whitespace) || raw.starts_with('}') {
            raw
        } else if let Some((key, rest)) = raw.split_once('=') {
            let key = key.trim().to_string();
            map.entry(key.clone()).or_default();
            current = Some(key);
            rest
        } else {
            continue;
        };

        let Some(key) = current.as_ref() else {
            continue;
        };
        let vars = map.entry(key.clone()).or_default();
        for piece in body.split('$').skip(1) {
            let name: String = piece
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect();
            if !name.is_empty() {
                vars.insert(name);
            }
        }
    }
    map
}
