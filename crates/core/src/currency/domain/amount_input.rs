const MAX_INPUT_CHARS: usize = 9;
const MAX_DECIMALS: usize = 2;

/// Keypad entry buffer for a euro amount, with live conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct AmountInput {
    text: String,
    rate: f64,
}

impl AmountInput {
    pub fn new(rate: f64) -> Self {
        Self {
            text: String::new(),
            rate,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends a single ASCII digit. Ignored when the buffer is full, when
    /// two decimals are already present, or when it would add a leading zero.
    pub fn append_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() || self.text.chars().count() >= MAX_INPUT_CHARS {
            return;
        }
        if self.text == "0" {
            if digit != '0' {
                self.text = digit.to_string();
            }
            return;
        }
        if let Some((_, decimals)) = self.text.split_once('.') {
            if decimals.len() >= MAX_DECIMALS {
                return;
            }
        }
        self.text.push(digit);
    }

    pub fn append_dot(&mut self) {
        if self.text.is_empty() {
            self.text.push_str("0.");
        } else if !self.text.contains('.') {
            self.text.push('.');
        }
    }

    pub fn delete_last(&mut self) {
        self.text.pop();
    }

    /// Replaces the buffer with a preset amount (whole amounts without decimals).
    pub fn set_amount(&mut self, amount: f64) {
        self.text = if amount >= 0.0 && amount == amount.round() {
            format!("{}", amount as u64)
        } else {
            format!("{amount:.2}")
        };
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The entered euro amount; 0 while the buffer is empty or unparseable.
    pub fn source_amount(&self) -> f64 {
        self.text.parse().unwrap_or(0.0)
    }

    pub fn converted_amount(&self) -> f64 {
        self.source_amount() * self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn typed(keys: &str) -> AmountInput {
        let mut input = AmountInput::new(160.0);
        for key in keys.chars() {
            if key == '.' {
                input.append_dot();
            } else {
                input.append_digit(key);
            }
        }
        input
    }

    #[test]
    fn test_append_digits_builds_amount() {
        let input = typed("20");
        assert_eq!(input.text(), "20");
        assert_relative_eq!(input.source_amount(), 20.0);
        assert_relative_eq!(input.converted_amount(), 3200.0);
    }

    #[test]
    fn test_append_dot_adds_decimal_point() {
        let input = typed("5.50");
        assert_eq!(input.text(), "5.50");
        assert_relative_eq!(input.source_amount(), 5.5);
    }

    #[test]
    fn test_cannot_append_two_dots() {
        assert_eq!(typed("5..").text(), "5.");
    }

    #[test]
    fn test_dot_on_empty_inserts_leading_zero() {
        assert_eq!(typed(".5").text(), "0.5");
    }

    #[test]
    fn test_limits_decimal_places() {
        assert_eq!(typed("1.234").text(), "1.23");
    }

    #[test]
    fn test_rejects_repeated_leading_zero() {
        assert_eq!(typed("00").text(), "0");
    }

    #[test]
    fn test_leading_zero_replaced_by_digit() {
        assert_eq!(typed("07").text(), "7");
    }

    #[test]
    fn test_limits_total_length() {
        assert_eq!(typed("1234567890").text(), "123456789");
    }

    #[test]
    fn test_ignores_non_digits() {
        let mut input = AmountInput::new(160.0);
        input.append_digit('x');
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_delete_last() {
        let mut input = typed("12");
        input.delete_last();
        assert_eq!(input.text(), "1");
        assert_relative_eq!(input.source_amount(), 1.0);
    }

    #[test]
    fn test_delete_on_empty_does_nothing() {
        let mut input = AmountInput::new(160.0);
        input.delete_last();
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_set_amount_whole_and_fractional() {
        let mut input = AmountInput::new(160.0);
        input.set_amount(50.0);
        assert_eq!(input.text(), "50");
        input.set_amount(2.5);
        assert_eq!(input.text(), "2.50");
    }

    #[test]
    fn test_clear_resets_amounts() {
        let mut input = typed("42");
        input.clear();
        assert_eq!(input.text(), "");
        assert_relative_eq!(input.source_amount(), 0.0);
        assert_relative_eq!(input.converted_amount(), 0.0);
    }

    #[test]
    fn test_converts_with_given_rate() {
        let mut input = AmountInput::new(150.0);
        input.set_amount(10.0);
        assert_relative_eq!(input.converted_amount(), 1500.0);
    }

    #[test]
    fn test_trailing_dot_parses() {
        assert_relative_eq!(typed("5.").source_amount(), 5.0);
    }
}
