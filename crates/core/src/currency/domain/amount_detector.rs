use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::monetary_match::MonetaryMatch;

/// 1–6 integer digits with an optional 1–2 digit fraction (`.` or `,`).
const AMOUNT: &str = r"(\d{1,6}(?:[.,]\d{1,2})?)";

/// Surface grammars in evaluation order. When two matches overlap, the one
/// found by the earlier grammar is kept.
static GRAMMARS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("symbol-prefix", format!(r"€\s?{AMOUNT}")),
        ("symbol-suffix", format!(r"{AMOUNT}\s?€")),
        ("iso-code", format!(r"EUR\s?{AMOUNT}|{AMOUNT}\s?EUR")),
        ("word-suffix", format!(r"{AMOUNT}\s?(?i:euros?)")),
        ("script-suffix", format!(r"{AMOUNT}\s?ユーロ")),
    ]
    .into_iter()
    .map(|(name, pattern)| {
        let regex = Regex::new(&pattern).expect("amount grammar must compile");
        (name, regex)
    })
    .collect()
});

/// Finds euro amounts in free text and converts them to yen.
pub struct AmountDetector;

impl AmountDetector {
    /// Returns every recognised amount, non-overlapping and ordered by
    /// start offset. Unrecognisable or unparseable amounts are skipped.
    pub fn detect(text: &str, rate: f64) -> Vec<MonetaryMatch> {
        let mut matches: Vec<MonetaryMatch> = Vec::new();

        for (grammar, regex) in GRAMMARS.iter() {
            for caps in regex.captures_iter(text) {
                let Some(found) = to_match(text, &caps, rate) else {
                    continue;
                };
                if let Some(existing) = matches.iter().find(|m| m.overlaps(&found)) {
                    log::trace!(
                        "{grammar}: dropping '{}' overlapping '{}'",
                        found.original_text,
                        existing.original_text
                    );
                    continue;
                }
                matches.push(found);
            }
        }

        matches.sort_by_key(|m| m.start_offset);
        matches
    }

    /// Copies `text`, inserting ` (¥…)` after every detected amount.
    pub fn annotate(text: &str, rate: f64) -> String {
        let matches = Self::detect(text, rate);
        if matches.is_empty() {
            return text.to_string();
        }

        let mut annotated = text.to_string();
        for m in matches.iter().rev() {
            let at = byte_offset(text, m.end_offset);
            annotated.insert_str(at, &format!(" ({})", m.formatted_converted()));
        }
        annotated
    }
}

fn to_match(text: &str, caps: &Captures<'_>, rate: f64) -> Option<MonetaryMatch> {
    let whole = caps.get(0)?;
    let amount_token = caps.iter().skip(1).flatten().next()?;

    if is_glued_to_digits(text, amount_token.start(), amount_token.end()) {
        return None;
    }

    let amount: f64 = amount_token.as_str().replace(',', ".").parse().ok()?;
    let start_offset = text[..whole.start()].chars().count();
    let end_offset = start_offset + whole.as_str().chars().count();

    Some(MonetaryMatch {
        original_text: whole.as_str().to_string(),
        amount,
        converted_amount: amount * rate,
        start_offset,
        end_offset,
    })
}

/// An amount token is only valid when it is the whole number: no digit right
/// after it, and no digit (or digit + group separator) right before it.
/// This is what rejects `€1234567` and `1,234 €`.
fn is_glued_to_digits(text: &str, start: usize, end: usize) -> bool {
    if text[end..].chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return true;
    }
    let mut before = text[..start].chars().rev();
    match before.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') | Some(',') => before.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
