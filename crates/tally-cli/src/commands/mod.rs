//! CLI command implementations.

pub mod add;
pub mod chart;
pub mod dump;
pub mod set;

use clap::Args;
use tally_core::{ExportFormat, JsonExporter, ScoreRecord, TextExporter, TsvExporter};

use crate::cli::OutputFormat;

/// Song metadata shared by chart and chart set lookups
#[derive(Debug, Clone, Args)]
pub struct SongArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub artist: String,
    #[arg(long)]
    pub creator: String,
}

/// Render a score listing in the requested format
pub fn render(records: &[ScoreRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => TextExporter.format_rows(records),
        OutputFormat::Tsv => TsvExporter.format_rows(records),
        OutputFormat::Json => JsonExporter.format_rows(records),
    }
}
