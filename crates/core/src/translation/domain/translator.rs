use thiserror::Error;

use crate::shared::language::Language;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    #[error("translation from {from} to {to} is not supported")]
    Unsupported { from: Language, to: Language },
    #[error("translation failed: {0}")]
    Failed(String),
}

/// Domain interface for the external translation engine.
pub trait Translator: Send + Sync {
    fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError>;
}
