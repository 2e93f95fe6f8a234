pub mod constants;
pub mod language;
