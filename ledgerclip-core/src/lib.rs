//! ledgerclip-core: canonical transaction record and shared normalization primitives

pub mod dates;
pub mod money;
pub mod record;

pub use dates::{parse_iso_date, parse_labeled_date, parse_slash_date_dmy};
pub use money::parse_amount;
pub use record::SnippetTransaction;
