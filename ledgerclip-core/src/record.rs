//! Canonical output record shared by every snippet layout

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A financial transaction extracted from one pasted statement snippet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnippetTransaction {
    /// Date of the transaction (no time-of-day)
    pub date: NaiveDate,
    /// Positive = credit/income, negative = debit/expense
    pub amount: f64,
    /// Human-readable description, trimmed
    pub description: String,
    /// The text the record was derived from, kept for audit/debugging
    pub original_text: String,
    /// Fixed per-layout reliability constant in (0, 1]
    pub confidence: f64,
}

impl SnippetTransaction {
    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SnippetTransaction {
        SnippetTransaction {
            date: NaiveDate::from_ymd_opt(2025, 12, 11).unwrap(),
            amount: -420.0,
            description: "STARBUCKS COFFEE MUMBAI".to_string(),
            original_text: "Amount: -420.00".to_string(),
            confidence: 0.95,
        }
    }

    #[test]
    fn test_expense_and_income_helpers() {
        let record = sample();
        assert!(record.is_expense());
        assert!(!record.is_income());
        assert_eq!(record.abs_amount(), 420.0);
    }

    #[test]
    fn test_serializes_date_as_iso() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"2025-12-11\""));
        assert!(json.contains("\"confidence\":0.95"));
    }
}
