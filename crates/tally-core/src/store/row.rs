use rusqlite::types::Type;
use rusqlite::{Row, ToSql};

use crate::score::ScoreRecord;

/// Score column index
const SCORE_COLUMN: usize = 13;

/// Build a record from a `SELECT *` row.
///
/// Negative counts fail the unsigned conversion and surface as an error
/// instead of wrapping.
pub(crate) fn record_from_row(row: &Row<'_>) -> rusqlite::Result<ScoreRecord> {
    let score: i64 = row.get(SCORE_COLUMN)?;
    let score = u64::try_from(score).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(SCORE_COLUMN, Type::Integer, Box::new(e))
    })?;

    Ok(ScoreRecord {
        timestamp: row.get(0)?,
        chart_id: row.get(1)?,
        chart_set_id: row.get(2)?,
        title: row.get(3)?,
        artist: row.get(4)?,
        creator: row.get(5)?,
        version: row.get(6)?,
        count300: row.get(7)?,
        count100: row.get(8)?,
        count50: row.get(9)?,
        count_geki: row.get(10)?,
        count_katu: row.get(11)?,
        count_miss: row.get(12)?,
        score,
        combo: row.get(14)?,
        perfect: row.get(15)?,
        mods: row.get(16)?,
    })
}

/// Score as a SQLite integer. Fails for scores beyond `i64::MAX`.
pub(crate) fn score_param(record: &ScoreRecord) -> Result<i64, std::num::TryFromIntError> {
    i64::try_from(record.score)
}

/// Insert parameters in column order
pub(crate) fn insert_params<'a>(record: &'a ScoreRecord, score: &'a i64) -> [&'a dyn ToSql; 17] {
    [
        &record.timestamp,
        &record.chart_id,
        &record.chart_set_id,
        &record.title,
        &record.artist,
        &record.creator,
        &record.version,
        &record.count300,
        &record.count100,
        &record.count50,
        &record.count_geki,
        &record.count_katu,
        &record.count_miss,
        score,
        &record.combo,
        &record.perfect,
        &record.mods,
    ]
}
