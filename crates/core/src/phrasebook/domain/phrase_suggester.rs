use std::sync::Arc;

use super::phrasebook::{PhraseCategory, Phrasebook, ReplyStyle};
use crate::shared::constants::{DEFAULT_REPLY_CATEGORY_IDS, MAX_REPLY_SUGGESTIONS};
use crate::shared::language::Language;

const ENGLISH_KEYWORD_WEIGHT: u32 = 2;
const SOURCE_KEYWORD_WEIGHT: u32 = 3;

/// A canned reply the traveller can show or read out.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplySuggestion {
    pub category_id: String,
    /// Text in the other party's language (English when not translated).
    pub local_text: String,
    pub english_text: String,
    pub hint_text: String,
    pub style: ReplyStyle,
}

/// Ranks phrasebook categories against what was just said and returns the
/// best replies.
pub struct PhraseSuggester {
    phrasebook: Arc<Phrasebook>,
}

impl PhraseSuggester {
    pub fn new(phrasebook: Arc<Phrasebook>) -> Self {
        Self { phrasebook }
    }

    pub fn phrasebook(&self) -> &Phrasebook {
        &self.phrasebook
    }

    /// Returns up to three replies for the heard text and its translation.
    ///
    /// When no category keyword matches, the gratitude / clarification /
    /// repeat categories are offered instead. Categories missing from the
    /// catalog are skipped, so a broken catalog yields fewer (or no) replies.
    pub fn suggest(
        &self,
        source_text: &str,
        translated_text: &str,
        source_language: Language,
        style: ReplyStyle,
    ) -> Vec<ReplySuggestion> {
        let language = source_language.phrasebook_language();
        let heard = format!("{source_text} {translated_text}").to_lowercase();

        let mut scored: Vec<(&PhraseCategory, u32)> = self
            .phrasebook
            .categories
            .iter()
            .map(|c| (c, score(c, &heard, language)))
            .collect();
        // Stable sort: equal scores keep catalog order.
        scored.sort_by(|(_, a), (_, b)| b.cmp(a));

        let top: Vec<&str> = scored
            .iter()
            .take(MAX_REPLY_SUGGESTIONS)
            .filter(|(_, s)| *s > 0)
            .map(|(c, _)| c.id.as_str())
            .collect();

        let ids = if top.is_empty() {
            log::debug!("No keyword matched, offering default replies");
            DEFAULT_REPLY_CATEGORY_IDS.to_vec()
        } else {
            top
        };

        ids.into_iter()
            .filter_map(|id| self.reply(id, language, style))
            .collect()
    }

    fn reply(&self, id: &str, language: Language, style: ReplyStyle) -> Option<ReplySuggestion> {
        let Some(category) = self.phrasebook.category(id) else {
            log::warn!("Phrasebook has no category '{id}'");
            return None;
        };
        let phrase = category.phrase_for(style)?;
        let local_text = phrase.text_for(language).unwrap_or(&phrase.en);

        Some(ReplySuggestion {
            category_id: category.id.clone(),
            local_text: local_text.to_string(),
            english_text: phrase.en.clone(),
            hint_text: phrase.hint_text.clone(),
            style,
        })
    }
}

/// English keywords always count; the conversation language's own keywords
/// count extra, unless that language is English.
fn score(category: &PhraseCategory, heard: &str, language: Language) -> u32 {
    let hits = |keywords: &[String]| {
        keywords
            .iter()
            .filter(|k| heard.contains(k.to_lowercase().as_str()))
            .count() as u32
    };

    let mut total = hits(category.keywords.for_language(Language::En)) * ENGLISH_KEYWORD_WEIGHT;
    if language != Language::En {
        total += hits(category.keywords.for_language(language)) * SOURCE_KEYWORD_WEIGHT;
    }
    total
}
