//! Export formats for score listings.
//!
//! - **TSV**: header plus one tab-separated row per score
//! - **JSON**: one object per line (NDJSON)
//! - **Text**: the record's one-line summary

mod format;
mod json;
mod text;
mod tsv;

pub use format::ExportFormat;
pub use json::{JsonExporter, format_json_entry};
pub use text::TextExporter;
pub use tsv::{TsvExporter, format_tsv_header, format_tsv_row};
