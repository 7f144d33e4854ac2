//! Prelude module for convenient imports
//!
//! ```ignore
//! use tally_core::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Store: `ScoreStore`, `StoreConfig`
//! - Records: `ScoreRecord`, `ChartKey`, `ChartSetKey`
//! - Grading: `Grade`, `GameMod`
//! - Error handling: `Error`, `Result`, `ErrorReporter`, `TracingReporter`

pub use crate::error::{Error, Result};
pub use crate::export::ExportFormat;
pub use crate::grade::Grade;
pub use crate::mods::GameMod;
pub use crate::report::{ErrorReporter, TracingReporter};
pub use crate::score::{ChartKey, ChartSetKey, ScoreRecord};
pub use crate::store::{ScoreStore, StoreConfig};
