use std::sync::Arc;

use crate::phrasebook::domain::phrase_suggester::{PhraseSuggester, ReplySuggestion};
use crate::phrasebook::domain::phrasebook::ReplyStyle;
use crate::shared::language::Language;
use crate::transcript::domain::recognized_fragment::RecognizedFragment;
use crate::transcript::domain::segment_deduplicator::SegmentDeduplicator;
use crate::translation::domain::translator::{TranslateError, Translator};

/// One accepted utterance with its translation and reply candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub segment: String,
    pub translation: String,
    pub replies: Vec<ReplySuggestion>,
}

/// Listening pipeline: fragment → dedupe → translate → suggest replies.
pub struct ConversationUseCase {
    deduplicator: Arc<SegmentDeduplicator>,
    translator: Box<dyn Translator>,
    suggester: PhraseSuggester,
    source: Language,
    target: Language,
    style: ReplyStyle,
}

impl ConversationUseCase {
    pub fn new(
        deduplicator: Arc<SegmentDeduplicator>,
        translator: Box<dyn Translator>,
        suggester: PhraseSuggester,
        source: Language,
        target: Language,
        style: ReplyStyle,
    ) -> Self {
        Self {
            deduplicator,
            translator,
            suggester,
            source,
            target,
            style,
        }
    }

    /// Clears duplicate tracking so the first segment of a new session is
    /// always accepted.
    pub fn start_session(&self) {
        log::debug!("Starting conversation session ({} → {})", self.source, self.target);
        self.deduplicator.reset();
    }

    pub fn set_style(&mut self, style: ReplyStyle) {
        self.style = style;
    }

    /// Returns `Ok(None)` for partials, noise and repeated segments.
    pub fn on_fragment(
        &self,
        fragment: &RecognizedFragment,
    ) -> Result<Option<ConversationTurn>, TranslateError> {
        let Some(segment) = self.deduplicator.process(fragment) else {
            return Ok(None);
        };

        let translation = self.translator.translate(&segment, self.source, self.target)?;
        let replies = self
            .suggester
            .suggest(&segment, &translation, self.source, self.style);

        Ok(Some(ConversationTurn {
            segment,
            translation,
            replies,
        }))
    }
}
