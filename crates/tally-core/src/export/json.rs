//! JSON export format implementation

use serde_json::{Value as JsonValue, json};

use crate::mods::GameMod;
use crate::score::ScoreRecord;

use super::format::ExportFormat;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn header(&self) -> Option<String> {
        None // JSON doesn't need a header
    }

    fn format_row(&self, record: &ScoreRecord) -> String {
        format_json_entry(record).to_string()
    }
}

/// Record fields plus the derived grade and mod acronyms
pub fn format_json_entry(record: &ScoreRecord) -> JsonValue {
    let mod_names: Vec<&str> = GameMod::from_mask(record.mods)
        .iter()
        .map(GameMod::short_name)
        .collect();

    json!({
        "timestamp": record.timestamp,
        "chart_id": record.chart_id,
        "chart_set_id": record.chart_set_id,
        "title": record.title,
        "artist": record.artist,
        "creator": record.creator,
        "version": record.version,
        "count300": record.count300,
        "count100": record.count100,
        "count50": record.count50,
        "count_geki": record.count_geki,
        "count_katu": record.count_katu,
        "count_miss": record.count_miss,
        "score": record.score,
        "combo": record.combo,
        "perfect": record.perfect,
        "mods": record.mods,
        "grade": record.grade().short_name(),
        "mod_names": mod_names
    })
}
