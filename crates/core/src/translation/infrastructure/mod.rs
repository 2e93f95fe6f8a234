pub mod cached_translator;
pub mod passthrough_translator;
pub mod translation_memo;
