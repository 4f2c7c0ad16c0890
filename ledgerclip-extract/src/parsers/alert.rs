//! Plaintext alert parser (SMS/notification line pair).
//!
//! Expected shape:
//!   Uber Ride Airport Drop
//!   12/11/2025 ₹1,250.00 debited
//!   Available Balance

use anyhow::Result;
use ledgerclip_core::{SnippetTransaction, dates, money};
use regex::Regex;

use crate::layout::Layout;

/// Classifier predicate: some line mentions "debited" or "credit".
pub(crate) fn matches(lines: &[&str]) -> bool {
    lines
        .iter()
        .any(|line| line.contains("debited") || line.contains("credit"))
}

/// Extract from the trimmed line sequence.
///
/// The first line is taken as the description verbatim; there is no
/// corroborating check. Date and amount come from the first line
/// carrying a day-first slash date.
pub fn parse(lines: &[&str]) -> Result<Option<SnippetTransaction>> {
    let date_re = Regex::new(r"(\d{1,2}/\d{1,2}/\d{4})")?;
    let amount_re = Regex::new(r"[₹$]((?:[\d,]+)(?:\.\d+)?)")?;

    let Some(details) = lines.iter().find(|line| date_re.is_match(line)) else {
        log::debug!("alert snippet has no slash-date details line");
        return Ok(None);
    };

    let (Some(date_caps), Some(amount_caps)) =
        (date_re.captures(details), amount_re.captures(details))
    else {
        log::debug!("alert details line is missing date or amount");
        return Ok(None);
    };

    let Some(date) = dates::parse_slash_date_dmy(&date_caps[1]) else {
        log::debug!("alert snippet has impossible date {:?}", &date_caps[1]);
        return Ok(None);
    };
    let Some(mut amount) = money::parse_amount(&amount_caps[1]) else {
        log::debug!("alert snippet has unparseable amount {:?}", &amount_caps[1]);
        return Ok(None);
    };
    if details.to_lowercase().contains("debited") {
        amount = -amount;
    }

    let description = match lines.first() {
        Some(first) if !first.is_empty() => (*first).to_string(),
        _ => "Unknown description".to_string(),
    };

    Ok(Some(SnippetTransaction {
        date,
        amount,
        description,
        original_text: lines.join("\n"),
        confidence: Layout::Alert.confidence(),
    }))
}
