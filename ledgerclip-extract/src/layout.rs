//! Layout classification: decide which snippet shape applies before any
//! field extraction runs.

use anyhow::Result;

use crate::parsers;

/// The three snippet layouts the engine recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Labeled field export: `Date:` / `Description:` / `Amount:` lines
    Labeled,
    /// Plaintext alert pair: description line plus a details line
    /// mentioning "debited" or "credit"
    Alert,
    /// Dense single line: ISO date plus a Dr/Cr marker or currency symbol
    Dense,
}

impl Layout {
    /// Fixed reliability constant for records produced from this layout.
    ///
    /// Encodes how trustworthy the layout's heuristics are, never the
    /// quality of a specific match.
    pub fn confidence(self) -> f64 {
        match self {
            Layout::Labeled => 0.95,
            Layout::Alert => 0.85,
            Layout::Dense => 0.80,
        }
    }
}

/// Decide which layout applies to a snippet.
///
/// Predicates run in a fixed priority order and the first hit wins:
/// Labeled, then Alert, then Dense. The order is load-bearing: labels
/// are unambiguous and preempt the looser heuristics, while the dense
/// single-line check is the most permissive and must run last so it
/// cannot shadow an alert that also carries a date-like token.
pub fn detect_layout(text: &str, lines: &[&str]) -> Result<Option<Layout>> {
    if parsers::labeled::matches(text) {
        return Ok(Some(Layout::Labeled));
    }
    if parsers::alert::matches(lines) {
        return Ok(Some(Layout::Alert));
    }
    if parsers::dense::qualifying_line(lines)?.is_some() {
        return Ok(Some(Layout::Dense));
    }
    Ok(None)
}
