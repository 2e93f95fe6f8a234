use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::phrasebook::domain::phrasebook::Phrasebook;
use crate::shared::constants::PHRASEBOOK_FORMAT_VERSION;

const BUNDLED_PHRASEBOOK: &str = include_str!("../../../assets/phrasebook.json");

#[derive(Error, Debug)]
pub enum PhrasebookError {
    #[error("failed to read phrasebook {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid phrasebook JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported phrasebook version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("phrasebook category '{0}' is defined more than once")]
    DuplicateCategory(String),
}

/// Parses and validates a phrasebook document.
pub fn load_from_str(json: &str) -> Result<Phrasebook, PhrasebookError> {
    let book: Phrasebook = serde_json::from_str(json)?;
    if book.version != PHRASEBOOK_FORMAT_VERSION {
        return Err(PhrasebookError::UnsupportedVersion {
            found: book.version,
            expected: PHRASEBOOK_FORMAT_VERSION,
        });
    }

    let mut seen = HashSet::new();
    for category in &book.categories {
        if !seen.insert(category.id.as_str()) {
            return Err(PhrasebookError::DuplicateCategory(category.id.clone()));
        }
    }
    Ok(book)
}

pub fn load_from_path(path: &Path) -> Result<Phrasebook, PhrasebookError> {
    let json = fs::read_to_string(path).map_err(|source| PhrasebookError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&json)
}

/// The phrasebook compiled into the binary.
pub fn bundled() -> Phrasebook {
    load_or_empty(load_from_str(BUNDLED_PHRASEBOOK))
}

/// Loads `path` if given, else the bundled catalog. A catalog that cannot be
/// loaded is logged and replaced by an empty one; suggestions then come back
/// empty instead of failing the session.
pub fn load(path: Option<&Path>) -> Phrasebook {
    match path {
        Some(path) => load_or_empty(load_from_path(path)),
        None => bundled(),
    }
}

fn load_or_empty(result: Result<Phrasebook, PhrasebookError>) -> Phrasebook {
    match result {
        Ok(book) => {
            log::info!("Loaded phrasebook with {} categories", book.len());
            book
        }
        Err(e) => {
            log::error!("Phrasebook unavailable: {e}");
            Phrasebook::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrasebook::domain::phrasebook::ReplyStyle;
    use crate::shared::constants::DEFAULT_REPLY_CATEGORY_IDS;
    use crate::shared::language::Language;
    use std::io::Write;

    const MINIMAL: &str = r#"{
        "version": 1,
        "categories": [
            {"id": "THANKS", "phrases": [{"style": "polite", "ja_hint": "ありがとう", "en": "Thank you."}]}
        ]
    }"#;

    #[test]
    fn test_bundled_catalog_is_valid() {
        let book = load_from_str(BUNDLED_PHRASEBOOK).unwrap();
        assert!(!book.is_empty());
        for id in DEFAULT_REPLY_CATEGORY_IDS {
            assert!(book.category(id).is_some(), "missing default category {id}");
        }
    }

    #[test]
    fn test_bundled_catalog_has_every_style_and_language() {
        let book = bundled();
        for category in &book.categories {
            for style in ReplyStyle::ALL {
                let phrase = category.phrase_for(*style).unwrap();
                assert_eq!(phrase.style, *style, "{} {style}", category.id);
                for language in [Language::En, Language::Fr, Language::De, Language::Es, Language::It] {
                    assert!(
                        phrase.text_for(language).is_some(),
                        "{} {style} has no {language} text",
                        category.id
                    );
                }
                assert!(!phrase.hint_text.is_empty());
            }
            assert!(!category.keywords.en.is_empty(), "{} has no keywords", category.id);
        }
    }

    #[test]
    fn test_load_minimal_catalog() {
        let book = load_from_str(MINIMAL).unwrap();
        assert_eq!(book.len(), 1);
        assert!(book.category("THANKS").unwrap().keywords.en.is_empty());
    }

    #[test]
    fn test_rejects_unknown_version() {
        let json = MINIMAL.replace("\"version\": 1", "\"version\": 7");
        let err = load_from_str(&json).unwrap_err();
        assert!(matches!(
            err,
            PhrasebookError::UnsupportedVersion { found: 7, expected: 1 }
        ));
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let json = r#"{
            "version": 1,
            "categories": [
                {"id": "THANKS", "phrases": []},
                {"id": "THANKS", "phrases": []}
            ]
        }"#;
        let err = load_from_str(json).unwrap_err();
        assert!(matches!(err, PhrasebookError::DuplicateCategory(id) if id == "THANKS"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            load_from_str("{ not json").unwrap_err(),
            PhrasebookError::Parse(_)
        ));
    }

    #[test]
    fn test_rejects_phrase_without_english() {
        let json = r#"{"version": 1, "categories": [
            {"id": "X", "phrases": [{"style": "polite", "ja_hint": "x", "fr": "Merci"}]}
        ]}"#;
        assert!(matches!(load_from_str(json).unwrap_err(), PhrasebookError::Parse(_)));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let book = load_from_path(file.path()).unwrap();
        assert!(book.category("THANKS").is_some());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, PhrasebookError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_falls_back_to_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[]").unwrap();
        assert!(load(Some(&path)).is_empty());
    }

    #[test]
    fn test_load_without_path_uses_bundled() {
        assert_eq!(load(None), bundled());
    }
}
