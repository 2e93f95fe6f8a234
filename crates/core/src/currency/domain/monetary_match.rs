use super::yen_format::format_yen;

/// A monetary amount located in a piece of text.
///
/// Offsets are character positions (not bytes) into the scanned text,
/// half-open: `start_offset..end_offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct MonetaryMatch {
    pub original_text: String,
    pub amount: f64,
    pub converted_amount: f64,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl MonetaryMatch {
    pub fn overlaps(&self, other: &MonetaryMatch) -> bool {
        self.start_offset < other.end_offset && other.start_offset < self.end_offset
    }

    /// Converted amount as shown to the traveller, e.g. `¥2,480`.
    pub fn formatted_converted(&self) -> String {
        format_yen(self.converted_amount)
    }
}
