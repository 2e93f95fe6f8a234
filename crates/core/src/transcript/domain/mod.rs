pub mod recognized_fragment;
pub mod segment_deduplicator;
