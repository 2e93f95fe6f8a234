use super::expense_category::ExpenseCategory;

/// Which signals contributed to a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    TimeOnly,
    PlaceOnly,
    Combined,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySuggestion {
    pub category: ExpenseCategory,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub source: SuggestionSource,
}

impl CategorySuggestion {
    pub fn new(category: ExpenseCategory, confidence: f64, source: SuggestionSource) -> Self {
        Self {
            category,
            confidence: confidence.clamp(0.0, 1.0),
            source,
        }
    }
}
