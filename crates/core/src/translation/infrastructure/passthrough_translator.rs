use crate::shared::language::Language;
use crate::translation::domain::translator::{TranslateError, Translator};

/// Returns the text unchanged. Stands in for the on-device engine when none
/// is available, so the rest of the pipeline still runs.
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(
        &self,
        text: &str,
        _source: Language,
        _target: Language,
    ) -> Result<String, TranslateError> {
        Ok(text.to_string())
    }
}
