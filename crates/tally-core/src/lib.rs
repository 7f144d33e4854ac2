//! # tally-core
//!
//! Local score storage for a rhythm-game client.
//!
//! This crate provides:
//! - The score record model (hit counts, score, combo, mods) and chart keys
//! - A SQLite-backed score store with an explicit initialize/shutdown lifecycle
//! - Best-first ranking and per-version grouping of chart set results
//! - Letter grade rules and mod mask decoding
//! - TSV/JSON/text export of score listings

pub mod error;
pub mod export;
pub mod grade;
pub mod mods;
pub mod prelude;
pub mod report;
pub mod score;
pub mod store;

pub use error::{Error, Result};
pub use export::{ExportFormat, JsonExporter, TextExporter, TsvExporter};
pub use grade::{Grade, grade};
pub use mods::{GameMod, format_mods};
pub use report::{ErrorReporter, RecordingReporter, Report, TracingReporter};
pub use score::{
    ChartKey, ChartSetKey, ScoreRecord, group_by_version, rank_cmp, sort_by_rank,
};
pub use store::{ScoreStore, StoreConfig, StoreConfigBuilder};
