//! Amount-string cleanup shared by the layout parsers.

/// Strip thousands-separator commas and parse the result as a decimal.
///
/// Returns `None` when the cleaned string is not a finite number.
/// An explicit leading minus is kept.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_thousands_separators() {
        assert_eq!(parse_amount("1,250.00"), Some(1250.0));
        assert_eq!(parse_amount("18,420.50"), Some(18420.5));
    }

    #[test]
    fn test_keeps_explicit_sign() {
        assert_eq!(parse_amount("-420.00"), Some(-420.0));
        assert_eq!(parse_amount("420.00"), Some(420.0));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        // These all match the loose extraction patterns but are not numbers
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount(",,"), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount(""), None);
    }
}
