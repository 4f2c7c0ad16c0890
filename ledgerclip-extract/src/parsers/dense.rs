//! Dense single-line parser.
//!
//! Expected shape, one long line mixing ids, date, free text, amount,
//! and a Dr/Cr marker:
//!   txn123 2025-12-10 Amazon.in Order #403-1234567-8901234 ₹2,999.00 Dr Bal 14171.50 Shopping

use anyhow::Result;
use ledgerclip_core::{SnippetTransaction, dates, money};
use regex::Regex;

use crate::layout::Layout;

/// First line carrying an ISO date plus a Dr/Cr marker or a currency
/// symbol. Doubles as the classifier predicate for this layout.
pub(crate) fn qualifying_line<'a>(lines: &[&'a str]) -> Result<Option<&'a str>> {
    let iso_re = Regex::new(r"\d{4}-\d{2}-\d{2}")?;
    Ok(lines.iter().copied().find(|line| {
        iso_re.is_match(line)
            && (line.contains("Dr") || line.contains("Cr") || line.contains('₹'))
    }))
}

/// Extract from the qualifying line; the full snippet text backs the
/// description fallback.
///
/// The description is the span strictly between the date token and the
/// currency symbol, and only when the amount follows the date. When
/// that ordering does not hold, the first 50 characters of the full
/// text stand in.
pub fn parse(text: &str, lines: &[&str]) -> Result<Option<SnippetTransaction>> {
    let Some(line) = qualifying_line(lines)? else {
        return Ok(None);
    };

    let date_re = Regex::new(r"\d{4}-\d{2}-\d{2}")?;
    let amount_re = Regex::new(r"[₹$]((?:[\d,]+)(?:\.\d+)?)")?;

    let Some(date_m) = date_re.find(line) else {
        return Ok(None);
    };
    let Some(amount_caps) = amount_re.captures(line) else {
        log::debug!("dense line has no currency-prefixed amount");
        return Ok(None);
    };
    let (Some(amount_m), Some(amount_val)) = (amount_caps.get(0), amount_caps.get(1)) else {
        return Ok(None);
    };

    let Some(date) = dates::parse_iso_date(date_m.as_str()) else {
        log::debug!("dense line has impossible date {:?}", date_m.as_str());
        return Ok(None);
    };
    let Some(mut amount) = money::parse_amount(amount_val.as_str()) else {
        log::debug!("dense line has unparseable amount {:?}", amount_val.as_str());
        return Ok(None);
    };
    if line.contains(" Dr") {
        amount = -amount;
    }

    let description = if amount_m.start() >= date_m.end() {
        line[date_m.end()..amount_m.start()].trim().to_string()
    } else {
        text.chars().take(50).collect()
    };

    Ok(Some(SnippetTransaction {
        date,
        amount,
        description,
        original_text: text.to_string(),
        confidence: Layout::Dense.confidence(),
    }))
}
