//! Labeled field export parser.
//!
//! Expected shape:
//!   Date: 11 Dec 2025
//!   Description: STARBUCKS COFFEE MUMBAI
//!   Amount: -420.00
//!   Balance after transaction: 18,420.50

use anyhow::Result;
use ledgerclip_core::{SnippetTransaction, dates, money};
use regex::Regex;

use crate::layout::Layout;

/// Classifier predicate: both field labels present in the raw text.
pub(crate) fn matches(text: &str) -> bool {
    text.contains("Description:") && text.contains("Amount:")
}

/// Extract via independent field patterns over the full raw text.
///
/// All three fields are mandatory; the amount sign is taken verbatim
/// from the matched string.
pub fn parse(text: &str) -> Result<Option<SnippetTransaction>> {
    let date_re = Regex::new(r"Date:\s*(.+)")?;
    let desc_re = Regex::new(r"Description:\s*(.+)")?;
    let amount_re = Regex::new(r"Amount:\s*(-?[\d,.]+)")?;

    let (Some(date_caps), Some(desc_caps), Some(amount_caps)) = (
        date_re.captures(text),
        desc_re.captures(text),
        amount_re.captures(text),
    ) else {
        log::debug!("labeled snippet missing a required field");
        return Ok(None);
    };

    let Some(date) = dates::parse_labeled_date(&date_caps[1]) else {
        log::debug!("labeled snippet has unparseable date {:?}", &date_caps[1]);
        return Ok(None);
    };
    let Some(amount) = money::parse_amount(&amount_caps[1]) else {
        log::debug!("labeled snippet has unparseable amount {:?}", &amount_caps[1]);
        return Ok(None);
    };

    Ok(Some(SnippetTransaction {
        date,
        amount,
        description: desc_caps[1].trim().to_string(),
        original_text: text.to_string(),
        confidence: Layout::Labeled.confidence(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_statement_export() {
        let text = "Date: 11 Dec 2025\n\
                    Description: STARBUCKS COFFEE MUMBAI\n\
                    Amount: -420.00\n\
                    Balance after transaction: 18,420.50";

        let record = parse(text).unwrap().expect("should extract");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 12, 11).unwrap());
        assert_eq!(record.amount, -420.00);
        assert_eq!(record.description, "STARBUCKS COFFEE MUMBAI");
        assert_eq!(record.original_text, text);
        assert_eq!(record.confidence, 0.95);
    }

    #[test]
    fn test_positive_amount_stays_positive() {
        let text = "Date: 1 Jan 2026\nDescription: SALARY\nAmount: 85,000.00";
        let record = parse(text).unwrap().unwrap();
        assert_eq!(record.amount, 85000.00);
        assert!(record.is_income());
    }

    #[test]
    fn test_missing_date_label_fails() {
        let text = "Description: STARBUCKS\nAmount: -420.00";
        assert_eq!(parse(text).unwrap(), None);
    }

    #[test]
    fn test_unparseable_date_fails() {
        let text = "Date: sometime soon\nDescription: STARBUCKS\nAmount: -420.00";
        assert_eq!(parse(text).unwrap(), None);
    }

    #[test]
    fn test_malformed_amount_fails() {
        // Matches the loose amount pattern but is not a number
        let text = "Date: 11 Dec 2025\nDescription: STARBUCKS\nAmount: 1.2.3";
        assert_eq!(parse(text).unwrap(), None);
    }
}
