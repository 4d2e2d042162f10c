//! Every `t!("...")` key used under `src/` must exist in the fallback bundle.
//!
//! Locale-to-locale parity lives in `i18n_missing_keys.rs`; this file only
//! looks at what the screens actually ask for.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FALLBACK_FTL: &str = include_str!("../i18n/en-US/findmyhome-ui.ftl");

fn is_key_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

/// Message IDs defined at the start of a line. Terms (`-brand`) are skipped.
fn defined_keys(ftl: &str) -> BTreeSet<&str> {
    ftl.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.starts_with('-') && id.chars().all(is_key_char))
        .collect()
}

/// Literal first arguments of `t!`. Computed IDs are invisible here.
fn referenced_keys(source: &str) -> Vec<String> {
    source
        .split("t!(\"")
        .skip(1)
        .filter_map(|rest| rest.split_once('"').map(|(key, _)| key))
        .filter(|key| !key.is_empty() && key.chars().all(is_key_char))
        .map(str::to_string)
        .collect()
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn every_referenced_key_is_translated() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    rust_sources(&src_root, &mut files);
    assert!(!files.is_empty(), "no sources found under {src_root:?}");

    let defined = defined_keys(FALLBACK_FTL);
    let mut used = BTreeSet::new();
    let mut missing = Vec::new();

    for file in &files {
        let source = fs::read_to_string(file).unwrap_or_default();
        for key in referenced_keys(&source) {
            if !defined.contains(key.as_str()) {
                missing.push(format!("{key}  ({})", file.display()));
            }
            used.insert(key);
        }
    }

    assert!(
        missing.is_empty(),
        "keys used in source but missing from en-US:\n  {}",
        missing.join("\n  ")
    );

    let unused: Vec<_> = defined.iter().filter(|k| !used.contains(**k)).collect();
    if !unused.is_empty() {
        eprintln!("[i18n] {} fallback keys are not referenced: {:?}", unused.len(), unused);
    }
}

#[test]
fn key_scanner_reads_literal_first_arguments() {
    let source = r#"rsx! { {t!("nav-home")} p { {t!("browse-results-count", count = n)} } }
        let label = format!("{n} Types");"#;
    assert_eq!(referenced_keys(source), vec!["nav-home", "browse-results-count"]);
}
