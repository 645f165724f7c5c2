// src/format.rs
//
// Display-side formatting. The model stores raw values only; these helpers
// are a pure, optional collaborator for any presentation layer.

/// Group the integer part of a plain decimal string with thousands commas,
/// preserving the sign and the decimal tail. Non-numeric text is returned
/// unchanged.
pub fn thousands(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let (int_part, dec_part) = match value.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (value, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return value.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match dec_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Fixed-decimal number with thousands grouping.
pub fn thousands_fixed(value: f64, decimals: usize) -> String {
    thousands(&format!("{value:.decimals$}"))
}

/// Percent display; `None` ("no data") renders as a dash.
pub fn pct_or_dash(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}%"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_digits_in_threes() {
        assert_eq!(thousands("1234567"), "1,234,567");
        assert_eq!(thousands("123"), "123");
        assert_eq!(thousands("1000"), "1,000");
    }

    #[test]
    fn preserves_decimal_tail_and_sign() {
        assert_eq!(thousands("1234.5678"), "1,234.5678");
        assert_eq!(thousands("-1234567.8"), "-1,234,567.8");
    }

    #[test]
    fn passes_through_empty_and_non_numeric_text() {
        assert_eq!(thousands(""), "");
        assert_eq!(thousands("abc"), "abc");
        assert_eq!(thousands("-"), "-");
    }

    #[test]
    fn fixed_decimal_formatting() {
        assert_eq!(thousands_fixed(1610.51, 0), "1,611");
        assert_eq!(thousands_fixed(-2500.0, 2), "-2,500.00");
    }

    #[test]
    fn no_data_renders_as_dash() {
        assert_eq!(pct_or_dash(Some(12.345), 1), "12.3%");
        assert_eq!(pct_or_dash(None, 1), "-");
    }
}
