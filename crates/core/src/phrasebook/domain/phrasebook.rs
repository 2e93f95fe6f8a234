use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::constants::PHRASEBOOK_FORMAT_VERSION;
use crate::shared::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStyle {
    Polite,
    Casual,
}

impl ReplyStyle {
    pub const ALL: &[ReplyStyle] = &[ReplyStyle::Polite, ReplyStyle::Casual];
}

impl fmt::Display for ReplyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyStyle::Polite => write!(f, "polite"),
            ReplyStyle::Casual => write!(f, "casual"),
        }
    }
}

impl FromStr for ReplyStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "polite" => Ok(ReplyStyle::Polite),
            "casual" => Ok(ReplyStyle::Casual),
            _ => Err(format!("reply style must be 'polite' or 'casual', got '{s}'")),
        }
    }
}

/// One reply in one register, with its translations.
///
/// English is mandatory; the other phrasebook languages are optional and
/// fall back to English when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub style: ReplyStyle,
    /// Japanese gloss shown under the reply so the traveller knows what
    /// they are saying.
    #[serde(rename = "ja_hint")]
    pub hint_text: String,
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub de: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub es: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub it: Option<String>,
}

impl Phrase {
    pub fn text_for(&self, language: Language) -> Option<&str> {
        match language {
            Language::En => Some(&self.en),
            Language::Fr => self.fr.as_deref(),
            Language::De => self.de.as_deref(),
            Language::Es => self.es.as_deref(),
            Language::It => self.it.as_deref(),
            Language::Auto | Language::Ja | Language::Pt | Language::Nl => None,
        }
    }
}

/// Trigger words per phrasebook language, matched as lowercase substrings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTable {
    pub en: Vec<String>,
    pub fr: Vec<String>,
    pub de: Vec<String>,
    pub es: Vec<String>,
    pub it: Vec<String>,
}

impl KeywordTable {
    pub fn for_language(&self, language: Language) -> &[String] {
        match language {
            Language::En => &self.en,
            Language::Fr => &self.fr,
            Language::De => &self.de,
            Language::Es => &self.es,
            Language::It => &self.it,
            Language::Auto | Language::Ja | Language::Pt | Language::Nl => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseCategory {
    pub id: String,
    #[serde(default)]
    pub label_ja: String,
    pub phrases: Vec<Phrase>,
    #[serde(default)]
    pub keywords: KeywordTable,
}

impl PhraseCategory {
    /// The phrase in `style`, or the first phrase when that style is missing.
    pub fn phrase_for(&self, style: ReplyStyle) -> Option<&Phrase> {
        self.phrases
            .iter()
            .find(|p| p.style == style)
            .or_else(|| self.phrases.first())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrasebook {
    pub version: u32,
    pub categories: Vec<PhraseCategory>,
}

impl Phrasebook {
    pub fn empty() -> Self {
        Self {
            version: PHRASEBOOK_FORMAT_VERSION,
            categories: Vec::new(),
        }
    }

    pub fn category(&self, id: &str) -> Option<&PhraseCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(style: ReplyStyle, en: &str, fr: Option<&str>) -> Phrase {
        Phrase {
            style,
            hint_text: "ヒント".to_string(),
            en: en.to_string(),
            fr: fr.map(str::to_string),
            de: None,
            es: None,
            it: None,
        }
    }

    #[test]
    fn test_text_for_falls_back_to_none_for_missing_language() {
        let p = phrase(ReplyStyle::Polite, "Thank you.", Some("Merci."));
        assert_eq!(p.text_for(Language::En), Some("Thank you."));
        assert_eq!(p.text_for(Language::Fr), Some("Merci."));
        assert_eq!(p.text_for(Language::De), None);
        assert_eq!(p.text_for(Language::Pt), None);
    }

    #[test]
    fn test_phrase_for_prefers_requested_style() {
        let category = PhraseCategory {
            id: "THANKS".to_string(),
            label_ja: "お礼".to_string(),
            phrases: vec![
                phrase(ReplyStyle::Polite, "Thank you very much.", None),
                phrase(ReplyStyle::Casual, "Thanks!", None),
            ],
            keywords: KeywordTable::default(),
        };
        assert_eq!(category.phrase_for(ReplyStyle::Casual).unwrap().en, "Thanks!");
    }

    #[test]
    fn test_phrase_for_falls_back_to_first_phrase() {
        let category = PhraseCategory {
            id: "THANKS".to_string(),
            label_ja: String::new(),
            phrases: vec![phrase(ReplyStyle::Polite, "Thank you very much.", None)],
            keywords: KeywordTable::default(),
        };
        let p = category.phrase_for(ReplyStyle::Casual).unwrap();
        assert_eq!(p.style, ReplyStyle::Polite);
    }

    #[test]
    fn test_phrase_for_empty_category() {
        let category = PhraseCategory {
            id: "EMPTY".to_string(),
            label_ja: String::new(),
            phrases: Vec::new(),
            keywords: KeywordTable::default(),
        };
        assert!(category.phrase_for(ReplyStyle::Polite).is_none());
    }

    #[test]
    fn test_keywords_for_unsupported_language_are_empty() {
        let table = KeywordTable {
            en: vec!["price".to_string()],
            ..KeywordTable::default()
        };
        assert_eq!(table.for_language(Language::En).len(), 1);
        assert!(table.for_language(Language::Nl).is_empty());
    }

    #[test]
    fn test_deserializes_catalog_json() {
        let json = r#"{
            "version": 1,
            "categories": [{
                "id": "PRICE",
                "label_ja": "値段",
                "phrases": [{"style": "casual", "ja_hint": "いくら？", "en": "How much?", "fr": "C'est combien ?"}],
                "keywords": {"en": ["price"], "fr": ["prix"]}
            }]
        }"#;
        let book: Phrasebook = serde_json::from_str(json).unwrap();
        let category = book.category("PRICE").unwrap();
        assert_eq!(category.phrases[0].style, ReplyStyle::Casual);
        assert_eq!(category.phrases[0].hint_text, "いくら？");
        assert_eq!(category.keywords.for_language(Language::Fr), ["prix".to_string()]);
        assert!(category.keywords.de.is_empty());
    }

    #[test]
    fn test_reply_style_parse() {
        assert_eq!("Casual".parse::<ReplyStyle>().unwrap(), ReplyStyle::Casual);
        assert!("formal".parse::<ReplyStyle>().is_err());
    }
}
