//! Score records and ranking.
//!
//! - **Record**: one completed play plus the keys used to look it up
//! - **Rank**: best-first ordering and grouping of a chart set by version

mod rank;
mod record;

pub use rank::*;
pub use record::*;
