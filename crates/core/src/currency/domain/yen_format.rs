/// Formats a yen amount rounded to whole yen with `,` thousands grouping.
pub fn format_yen(amount: f64) -> String {
    format!("¥{}", group_thousands(amount.round() as i64))
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0.0, "¥0")]
    #[case::hundreds(480.0, "¥480")]
    #[case::thousands(1600.0, "¥1,600")]
    #[case::millions(159_999_840.0, "¥159,999,840")]
    #[case::rounds_half_up(2480.5, "¥2,481")]
    #[case::rounds_down(2480.4, "¥2,480")]
    #[case::negative(-1234.0, "¥-1,234")]
    fn test_format_yen(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_yen(amount), expected);
    }
}
