//! ledgerclip-extract: layout detection and field extraction for pasted
//! bank-statement snippets (emailed alerts, SMS notifications, exports).

pub mod layout;
pub mod parsers;
pub mod preprocess;

pub use layout::{Layout, detect_layout};

use anyhow::Result;
use ledgerclip_core::SnippetTransaction;

/// Run the full pipeline on one pasted snippet.
///
/// Preprocess into trimmed lines, classify the layout, then hand the
/// text to that layout's parser. `Ok(None)` covers every non-match:
/// no layout detected, a required field missing, or a token that does
/// not parse. Once a layout has matched, the pipeline never falls
/// through to try another one.
pub fn extract_transaction(text: &str) -> Result<Option<SnippetTransaction>> {
    let lines = preprocess::snippet_lines(text);
    if lines.is_empty() {
        return Ok(None);
    }

    let Some(layout) = detect_layout(text, &lines)? else {
        log::debug!("no layout matched");
        return Ok(None);
    };
    log::debug!("classified snippet as {layout:?}");

    match layout {
        Layout::Labeled => parsers::labeled::parse(text),
        Layout::Alert => parsers::alert::parse(&lines),
        Layout::Dense => parsers::dense::parse(text, &lines),
    }
}
