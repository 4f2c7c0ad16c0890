//! Snippet preprocessing.

/// Split raw text into trimmed, non-empty lines, preserving order.
///
/// Total over all inputs: empty or whitespace-only text yields an
/// empty vec, which the pipeline treats as "no layout detected".
pub fn snippet_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_drops_blank_lines() {
        let lines = snippet_lines("  Uber Ride  \n\n   \n12/11/2025 debited\n");
        assert_eq!(lines, vec!["Uber Ride", "12/11/2025 debited"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(snippet_lines("").is_empty());
        assert!(snippet_lines("   \n\t\n  ").is_empty());
    }

    #[test]
    fn test_preserves_order() {
        let lines = snippet_lines("first\nsecond\nthird");
        assert_eq!(lines, vec!["first", "second", "third"]);
    }
}
