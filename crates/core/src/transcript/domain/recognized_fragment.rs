/// One event from a live speech or text recognizer.
///
/// Recognizers emit many partial (`is_final == false`) hypotheses before
/// settling on a final one.
#[derive(Clone, Debug, PartialEq)]
pub struct RecognizedFragment {
    pub text: String,
    pub is_final: bool,
    pub confidence: Option<f32>,
    pub locale: String,
}

impl RecognizedFragment {
    pub fn partial(text: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
            confidence: None,
            locale: locale.into(),
        }
    }

    pub fn finalized(text: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
            confidence: None,
            locale: locale.into(),
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }
}
