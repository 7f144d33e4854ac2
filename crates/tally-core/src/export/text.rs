use crate::score::ScoreRecord;

use super::format::ExportFormat;

/// Plain-text exporter using the record summary line
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl ExportFormat for TextExporter {
    fn header(&self) -> Option<String> {
        None
    }

    fn format_row(&self, record: &ScoreRecord) -> String {
        record.to_string()
    }
}
