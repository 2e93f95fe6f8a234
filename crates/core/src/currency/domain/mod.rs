pub mod amount_detector;
pub mod amount_input;
pub mod monetary_match;
pub mod yen_format;
