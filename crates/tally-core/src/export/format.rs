//! ExportFormat trait definition

use crate::score::ScoreRecord;

/// Trait for export format implementations
///
/// Provides a common interface for different export formats (TSV, JSON, etc.)
pub trait ExportFormat {
    /// Returns the header line for the format (empty for formats without headers)
    fn header(&self) -> Option<String>;

    /// Format a single score
    fn format_row(&self, record: &ScoreRecord) -> String;

    /// Format multiple scores
    fn format_rows(&self, records: &[ScoreRecord]) -> String {
        let mut output = String::new();
        if let Some(header) = self.header() {
            output.push_str(&header);
            output.push('\n');
        }
        for record in records {
            output.push_str(&self.format_row(record));
            output.push('\n');
        }
        output
    }
}
