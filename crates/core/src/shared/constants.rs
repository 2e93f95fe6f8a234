/// Fallback EUR→JPY rate used until the user configures one.
pub const DEFAULT_EUR_TO_JPY_RATE: f64 = 160.0;

pub const DEFAULT_TRANSLATION_CACHE_CAPACITY: usize = 500;

/// Finalized segments shorter than this (in characters) are treated as noise.
pub const MIN_SEGMENT_CHARS: usize = 3;

pub const MAX_REPLY_SUGGESTIONS: usize = 3;

/// Categories offered when nothing in the conversation matches a keyword:
/// gratitude, clarification request, repeat request.
pub const DEFAULT_REPLY_CATEGORY_IDS: &[&str] = &["THANKS", "UNDERSTAND", "REPEAT"];

pub const PHRASEBOOK_FORMAT_VERSION: u32 = 1;
