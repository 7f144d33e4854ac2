//! TSV export format implementation

use crate::mods::format_mods;
use crate::score::ScoreRecord;

use super::format::ExportFormat;

/// TSV (Tab-Separated Values) exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

impl ExportFormat for TsvExporter {
    fn header(&self) -> Option<String> {
        Some(format_tsv_header())
    }

    fn format_row(&self, record: &ScoreRecord) -> String {
        format_tsv_row(record)
    }
}

pub fn format_tsv_header() -> String {
    [
        "Timestamp",
        "ChartID",
        "SetID",
        "Artist",
        "Title",
        "Version",
        "Creator",
        "Score",
        "Grade",
        "Combo",
        "FC",
        "300",
        "100",
        "50",
        "Geki",
        "Katu",
        "Miss",
        "Mods",
    ]
    .join("\t")
}

/// Tabs and newlines inside text fields would break the row layout
fn sanitize(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}

pub fn format_tsv_row(record: &ScoreRecord) -> String {
    let timestamp = record
        .datetime()
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| record.timestamp.to_string());

    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        timestamp,
        record.chart_id,
        record.chart_set_id,
        sanitize(&record.artist),
        sanitize(&record.title),
        sanitize(&record.version),
        sanitize(&record.creator),
        record.score,
        record.grade().short_name(),
        record.combo,
        if record.perfect { "FC" } else { "" },
        record.count300,
        record.count100,
        record.count50,
        record.count_geki,
        record.count_katu,
        record.count_miss,
        format_mods(record.mods)
    )
}
