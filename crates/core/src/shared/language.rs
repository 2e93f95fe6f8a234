use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the assistant can translate between.
///
/// `Auto` means "let the recognizer/translator decide"; Japanese is the
/// traveller's own language and always the translation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Auto,
    Ja,
    En,
    Fr,
    De,
    Es,
    It,
    Pt,
    Nl,
}

impl Language {
    pub const ALL: &[Language] = &[
        Language::Auto,
        Language::Ja,
        Language::En,
        Language::Fr,
        Language::De,
        Language::Es,
        Language::It,
        Language::Pt,
        Language::Nl,
    ];

    /// Languages selectable as the spoken/source side (Japanese is the target).
    pub const SOURCES: &[Language] = &[
        Language::Auto,
        Language::En,
        Language::Fr,
        Language::De,
        Language::Es,
        Language::It,
        Language::Pt,
        Language::Nl,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::Auto => "auto",
            Language::Ja => "ja",
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Nl => "nl",
        }
    }

    pub fn locale_identifier(self) -> &'static str {
        match self {
            Language::Auto => "en",
            Language::Ja => "ja-JP",
            Language::En => "en-US",
            Language::Fr => "fr-FR",
            Language::De => "de-DE",
            Language::Es => "es-ES",
            Language::It => "it-IT",
            Language::Pt => "pt-PT",
            Language::Nl => "nl-NL",
        }
    }

    /// The language whose phrasebook keywords and texts apply.
    ///
    /// Auto-detected and Japanese conversations fall back to English.
    pub fn phrasebook_language(self) -> Language {
        match self {
            Language::Auto | Language::Ja => Language::En,
            other => other,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.code() == lower)
            .ok_or_else(|| format!("unknown language code '{s}'"))
    }
}
