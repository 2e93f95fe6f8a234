use std::sync::Mutex;

use super::recognized_fragment::RecognizedFragment;
use crate::shared::constants::MIN_SEGMENT_CHARS;

/// Turns a recognizer's event stream into distinct, cleaned-up segments.
///
/// Only the most recently accepted segment is remembered, so a phrase said
/// twice in a row is emitted once, but the same phrase after something else
/// is emitted again. Shared between the stream producer and whoever resets
/// it at session start.
#[derive(Debug, Default)]
pub struct SegmentDeduplicator {
    last_accepted: Mutex<Option<String>>,
}

impl SegmentDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the normalized text of a new final fragment, or `None` for
    /// partials, noise, and repeats of the previous segment.
    pub fn process(&self, fragment: &RecognizedFragment) -> Option<String> {
        if !fragment.is_final {
            return None;
        }

        let cleaned = normalize(&fragment.text);
        if cleaned.chars().count() < MIN_SEGMENT_CHARS {
            return None;
        }

        let mut last = self
            .last_accepted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if last.as_deref() == Some(cleaned.as_str()) {
            return None;
        }
        *last = Some(cleaned.clone());
        Some(cleaned)
    }

    /// Forgets the last segment so it can be emitted again.
    pub fn reset(&self) {
        *self
            .last_accepted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

/// Trims the text and collapses every whitespace run to a single space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn final_fragment(text: &str) -> RecognizedFragment {
        RecognizedFragment::finalized(text, "en-US").with_confidence(0.9)
    }

    #[test]
    fn test_accepts_final_text() {
        let d = SegmentDeduplicator::new();
        assert_eq!(d.process(&final_fragment("Hello world")).as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_ignores_partial_results() {
        let d = SegmentDeduplicator::new();
        assert!(d.process(&RecognizedFragment::partial("Hello world", "en-US")).is_none());
    }

    #[test]
    fn test_partial_does_not_affect_duplicate_tracking() {
        let d = SegmentDeduplicator::new();
        d.process(&RecognizedFragment::partial("Hello world", "en-US"));
        assert!(d.process(&final_fragment("Hello world")).is_some());
    }

    #[test]
    fn test_rejects_consecutive_duplicate() {
        let d = SegmentDeduplicator::new();
        assert!(d.process(&final_fragment("Hello world")).is_some());
        assert!(d.process(&final_fragment("Hello world")).is_none());
    }

    #[test]
    fn test_duplicate_detection_uses_normalized_text() {
        let d = SegmentDeduplicator::new();
        assert!(d.process(&final_fragment("Hello world")).is_some());
        assert!(d.process(&final_fragment("  Hello \n world ")).is_none());
    }

    #[test]
    fn test_rejects_short_text() {
        let d = SegmentDeduplicator::new();
        assert!(d.process(&final_fragment("Hi")).is_none());
        assert!(d.process(&final_fragment("  a  b ")).is_some());
    }

    #[test]
    fn test_short_text_counts_characters_not_bytes() {
        let d = SegmentDeduplicator::new();
        assert!(d.process(&final_fragment("はい")).is_none());
        assert_eq!(d.process(&final_fragment("はいはい")).as_deref(), Some("はいはい"));
    }

    #[test]
    fn test_rejects_blank_text() {
        let d = SegmentDeduplicator::new();
        assert!(d.process(&final_fragment("   \n\t ")).is_none());
    }

    #[test]
    fn test_normalizes_whitespace() {
        let d = SegmentDeduplicator::new();
        assert_eq!(
            d.process(&final_fragment("  Hello \t  world\n ")).as_deref(),
            Some("Hello world")
        );
    }

    #[test]
    fn test_reset_allows_same_text_again() {
        let d = SegmentDeduplicator::new();
        assert!(d.process(&final_fragment("Hello world")).is_some());
        d.reset();
        assert_eq!(d.process(&final_fragment("Hello world")).as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_only_most_recent_segment_is_remembered() {
        let d = SegmentDeduplicator::new();
        assert!(d.process(&final_fragment("Hello world")).is_some());
        assert!(d.process(&final_fragment("Goodbye world")).is_some());
        assert!(d.process(&final_fragment("Hello world")).is_some());
    }

    #[test]
    fn test_concurrent_duplicates_emit_once() {
        let d = Arc::new(SegmentDeduplicator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let d = Arc::clone(&d);
                thread::spawn(move || d.process(&final_fragment("Où est la gare ?")).is_some())
            })
            .collect();
        let emitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|emitted| *emitted)
            .count();
        assert_eq!(emitted, 1);
    }
}
