use chrono::Timelike;

use super::category_suggestion::{CategorySuggestion, SuggestionSource};
use super::expense_category::ExpenseCategory;
use super::nearby_place::NearbyPlaceSignal;

/// A place suggestion at or above this confidence overrides a disagreeing
/// time-of-day suggestion.
pub const PLACE_OVERRIDE_THRESHOLD: f64 = 0.5;

/// Added to the place confidence when both signals agree.
pub const AGREEMENT_BOOST: f64 = 0.1;

/// Suggests an expense category from the time of day and, when available,
/// the nearest point of interest.
pub struct CategoryClassifier;

impl CategoryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Meal windows (breakfast, lunch, dinner) suggest food; anything else
    /// is a weak "other".
    pub fn classify_by_hour(&self, hour: u32) -> CategorySuggestion {
        let (category, confidence) = match hour {
            7..=9 => (ExpenseCategory::Food, 0.5),
            11..=13 => (ExpenseCategory::Food, 0.6),
            17..=20 => (ExpenseCategory::Food, 0.6),
            _ => (ExpenseCategory::Other, 0.2),
        };
        CategorySuggestion::new(category, confidence, SuggestionSource::TimeOnly)
    }

    /// Uses the local wall-clock hour of `at`.
    pub fn classify_by_time<T: Timelike>(&self, at: &T) -> CategorySuggestion {
        self.classify_by_hour(at.hour())
    }

    /// Passes the place category through, trusting it less the further away
    /// the place is.
    pub fn classify_by_place(&self, signal: &NearbyPlaceSignal) -> CategorySuggestion {
        let confidence = match signal.distance_meters {
            d if d < 50.0 => 0.9,
            d if d < 100.0 => 0.7,
            d if d < 200.0 => 0.5,
            _ => 0.3,
        };
        CategorySuggestion::new(signal.category, confidence, SuggestionSource::PlaceOnly)
    }

    pub fn classify<T: Timelike>(
        &self,
        at: &T,
        place: Option<&NearbyPlaceSignal>,
    ) -> CategorySuggestion {
        let time = self.classify_by_time(at);
        match place {
            Some(signal) => self.combine(&time, &self.classify_by_place(signal)),
            None => time,
        }
    }

    /// Fuses a time suggestion with a place suggestion.
    ///
    /// Agreement boosts the place confidence (capped at 1.0). On disagreement
    /// the place wins when its confidence reaches
    /// [`PLACE_OVERRIDE_THRESHOLD`], otherwise the time suggestion stands.
    pub fn combine(
        &self,
        time: &CategorySuggestion,
        place: &CategorySuggestion,
    ) -> CategorySuggestion {
        let (category, confidence) = if time.category == place.category {
            (
                place.category,
                (place.confidence + AGREEMENT_BOOST).min(1.0),
            )
        } else if place.confidence >= PLACE_OVERRIDE_THRESHOLD {
            (place.category, place.confidence)
        } else {
            (time.category, time.confidence)
        };
        CategorySuggestion::new(category, confidence, SuggestionSource::Combined)
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}
