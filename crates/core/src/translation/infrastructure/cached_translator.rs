use std::sync::Arc;

use crate::shared::language::Language;
use crate::translation::domain::cache_key::CacheKey;
use crate::translation::domain::translator::{TranslateError, Translator};
use crate::translation::infrastructure::translation_memo::TranslationMemo;

/// Decorator that serves repeated translations from a shared memo and
/// records every fresh result in it. Failures are never cached.
pub struct CachedTranslator {
    inner: Box<dyn Translator>,
    memo: Arc<TranslationMemo>,
}

impl CachedTranslator {
    pub fn new(inner: Box<dyn Translator>, memo: Arc<TranslationMemo>) -> Self {
        Self { inner, memo }
    }

    pub fn memo(&self) -> &Arc<TranslationMemo> {
        &self.memo
    }
}

impl Translator for CachedTranslator {
    fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        let key = CacheKey::new(source, target, text);
        if let Some(cached) = self.memo.get(&key) {
            log::debug!("Cache hit: {}", preview(text));
            return Ok(cached);
        }

        let translated = self.inner.translate(text, source, target)?;
        self.memo.set(key, translated.clone());
        log::info!("Translated: {} → {}", preview(text), preview(&translated));
        Ok(translated)
    }
}

fn preview(text: &str) -> String {
    text.chars().take(30).collect()
}
