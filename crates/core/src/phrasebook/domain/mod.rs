pub mod phrase_suggester;
pub mod phrasebook;
