use crate::shared::language::Language;

/// Identifies one translation request: the same text translated into a
/// different language (or from a different source) is a different entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub source: Language,
    pub target: Language,
    pub text: String,
}

impl CacheKey {
    pub fn new(source: Language, target: Language, text: impl Into<String>) -> Self {
        Self {
            source,
            target,
            text: text.into(),
        }
    }
}
