//! Table layout and SQL for the score database.
//!
//! Column order is part of the file format: databases written by older
//! builds must keep loading, so columns are only ever appended, never
//! reordered or renamed.

/// Columns of the `scores` table, in storage order
pub const COLUMNS: [&str; 17] = [
    "timestamp",
    "MID",
    "MSID",
    "title",
    "artist",
    "creator",
    "version",
    "hit300",
    "hit100",
    "hit50",
    "geki",
    "katu",
    "miss",
    "score",
    "combo",
    "perfect",
    "mods",
];

pub const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS scores (
    timestamp INTEGER PRIMARY KEY,
    MID INTEGER, MSID INTEGER,
    title TEXT, artist TEXT, creator TEXT, version TEXT,
    hit300 INTEGER, hit100 INTEGER, hit50 INTEGER,
    geki INTEGER, katu INTEGER, miss INTEGER,
    score INTEGER,
    combo INTEGER,
    perfect BOOLEAN,
    mods INTEGER
)
"#;

pub const TABLE_INFO: &str = "SELECT name FROM pragma_table_info('scores') ORDER BY cid";

pub const INSERT_SCORE: &str = "INSERT INTO scores VALUES \
     (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)";

pub const SELECT_CHART: &str = "SELECT * FROM scores WHERE \
     MID = ?1 AND title = ?2 AND artist = ?3 AND creator = ?4 AND version = ?5";

pub const SELECT_CHART_SET: &str = "SELECT * FROM scores WHERE \
     MSID = ?1 AND title = ?2 AND artist = ?3 AND creator = ?4 ORDER BY version DESC";

pub const SELECT_ALL: &str = "SELECT * FROM scores ORDER BY timestamp ASC";

/// Statements prepared up front by `initialize`
pub const PREPARED: [&str; 3] = [INSERT_SCORE, SELECT_CHART, SELECT_CHART_SET];
