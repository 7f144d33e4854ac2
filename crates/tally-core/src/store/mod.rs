//! Durable score storage.
//!
//! Scores live in a single SQLite file with one `scores` table keyed by
//! play timestamp. A [`ScoreStore`] owns the connection for its whole
//! lifetime:
//!
//! - **initialize**: open the file, create the table if missing, check its
//!   columns, and prepare the statements the other operations use
//! - **add_score**: insert one finished play
//! - **chart_scores** / **chart_set_scores**: rank-ordered lookups
//! - **shutdown**: drop the prepared statements and close the file
//!
//! Every failure is handed to the store's [`ErrorReporter`] before it is
//! returned. Only initialization failures are reported as fatal.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tally_core::{ScoreStore, StoreConfig, TracingReporter};
//!
//! let mut store = ScoreStore::open(&StoreConfig::new("scores.db"), Arc::new(TracingReporter))?;
//! store.add_score(&record)?;
//! let best_first = store.chart_scores(&record.chart_key()).unwrap_or_default();
//! store.shutdown()?;
//! ```

mod config;
mod row;
pub mod schema;

pub use config::*;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use rusqlite::{Connection, Params, params};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::report::ErrorReporter;
use crate::score::{ChartKey, ChartSetKey, ScoreRecord, group_by_version, sort_by_rank};

/// Owned handle to the score database
pub struct ScoreStore {
    conn: Option<Connection>,
    path: Option<PathBuf>,
    reporter: Arc<dyn ErrorReporter>,
}

impl ScoreStore {
    /// Create a store that is not yet connected to any file
    pub fn new(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            conn: None,
            path: None,
            reporter,
        }
    }

    /// Create and initialize a store in one step
    pub fn open(config: &StoreConfig, reporter: Arc<dyn ErrorReporter>) -> Result<Self> {
        let mut store = Self::new(reporter);
        store.initialize(config)?;
        Ok(store)
    }

    /// Open (or create) the database described by `config`.
    ///
    /// Safe to call against an existing file: the table is only created when
    /// missing and existing rows are kept. An already open connection is
    /// shut down first.
    pub fn initialize(&mut self, config: &StoreConfig) -> Result<()> {
        if self.conn.is_some() && self.shutdown().is_err() {
            debug!("Previous score database connection closed with errors");
        }

        match connect(config) {
            Ok(conn) => {
                info!(path = %config.path.display(), "Score database opened");
                self.conn = Some(conn);
                self.path = Some(config.path.clone());
                Ok(())
            }
            Err(e) => {
                self.reporter
                    .report("Could not initialize score database", &e, true);
                Err(e)
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.conn.is_some()
    }

    /// Path of the open database, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Insert one play.
    ///
    /// A second play with the same timestamp is rejected with
    /// [`Error::ConstraintViolation`] and nothing is written.
    pub fn add_score(&self, record: &ScoreRecord) -> Result<()> {
        let result = self.connection().and_then(|conn| {
            let score = row::score_param(record).map_err(|e| {
                Error::StorageFault(format!("score {} out of range: {}", record.score, e))
            })?;
            let mut stmt = conn
                .prepare_cached(schema::INSERT_SCORE)
                .map_err(Error::from_sqlite)?;
            stmt.execute(&row::insert_params(record, &score))
                .map_err(Error::from_sqlite)?;
            Ok(())
        });

        match result {
            Ok(()) => {
                debug!(
                    timestamp = record.timestamp,
                    chart_id = record.chart_id,
                    score = record.score,
                    "Score saved"
                );
                Ok(())
            }
            Err(e) => {
                self.reporter
                    .report("Failed to save score to database", &e, false);
                Err(e)
            }
        }
    }

    /// All scores for one chart, best first
    pub fn chart_scores(&self, key: &ChartKey) -> Result<Vec<ScoreRecord>> {
        let mut scores = self.read(
            schema::SELECT_CHART,
            params![key.chart_id, key.title, key.artist, key.creator, key.version],
        )?;
        sort_by_rank(&mut scores);
        debug!(chart_id = key.chart_id, count = scores.len(), "Loaded chart scores");
        Ok(scores)
    }

    /// Scores for every version of a chart set, each version best first
    pub fn chart_set_scores(
        &self,
        key: &ChartSetKey,
    ) -> Result<HashMap<String, Vec<ScoreRecord>>> {
        let rows = self.read(
            schema::SELECT_CHART_SET,
            params![key.chart_set_id, key.title, key.artist, key.creator],
        )?;
        let groups = group_by_version(rows);
        debug!(
            chart_set_id = key.chart_set_id,
            versions = groups.len(),
            "Loaded chart set scores"
        );
        Ok(groups)
    }

    /// Every stored score, oldest first
    pub fn all_scores(&self) -> Result<Vec<ScoreRecord>> {
        self.read(schema::SELECT_ALL, [])
    }

    /// Release prepared statements and close the database.
    ///
    /// Does nothing when the store was never initialized or is already shut
    /// down. The store is closed afterwards even if closing reports an error.
    pub fn shutdown(&mut self) -> Result<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };
        let path = self.path.take();

        conn.flush_prepared_statement_cache();
        match conn.close() {
            Ok(()) => {
                if let Some(path) = path {
                    info!(path = %path.display(), "Score database closed");
                }
                Ok(())
            }
            Err((_, e)) => {
                let err = Error::ShutdownFailure(e.to_string());
                self.reporter
                    .report("Failed to close score database", &err, false);
                Err(err)
            }
        }
    }

    fn connection(&self) -> Result<&Connection> {
        self.conn
            .as_ref()
            .ok_or_else(|| Error::StorageFault("score store is not initialized".to_string()))
    }

    fn read<P: Params>(&self, sql: &str, params: P) -> Result<Vec<ScoreRecord>> {
        let result = self.connection().and_then(|conn| {
            let mut stmt = conn.prepare_cached(sql).map_err(Error::from_sqlite)?;
            let rows = stmt
                .query_map(params, row::record_from_row)
                .map_err(Error::from_sqlite)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(Error::from_sqlite)?;
            Ok(rows)
        });

        if let Err(e) = &result {
            self.reporter
                .report("Failed to read scores from database", e, false);
        }
        result
    }
}

impl Drop for ScoreStore {
    fn drop(&mut self) {
        if self.conn.is_some() {
            let _ = self.shutdown();
        }
    }
}

fn connect(config: &StoreConfig) -> Result<Connection> {
    config
        .validate()
        .map_err(|e| Error::InitializationFailure(e.to_string()))?;

    if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| Error::init("could not create database directory", e))?;
    }

    let conn = Connection::open(&config.path)
        .map_err(|e| Error::init("could not connect to score database", e))?;
    conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(|e| Error::init("could not set busy timeout", e))?;
    conn.set_prepared_statement_cache_capacity(config.statement_cache_capacity);

    conn.execute_batch(schema::CREATE_TABLE)
        .map_err(|e| Error::init("could not create score table", e))?;
    verify_columns(&conn)?;

    for sql in schema::PREPARED {
        conn.prepare_cached(sql)
            .map_err(|e| Error::init("failed to prepare score statement", e))?;
    }

    Ok(conn)
}

/// The table must start with the known columns in order; extra trailing
/// columns from newer builds are tolerated.
fn verify_columns(conn: &Connection) -> Result<()> {
    let mut stmt = conn
        .prepare(schema::TABLE_INFO)
        .map_err(|e| Error::init("could not read score table layout", e))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .map_err(|e| Error::init("could not read score table layout", e))?;

    let matches = columns.len() >= schema::COLUMNS.len()
        && schema::COLUMNS
            .iter()
            .zip(&columns)
            .all(|(expected, actual)| expected.eq_ignore_ascii_case(actual));
    if !matches {
        return Err(Error::InitializationFailure(format!(
            "scores table has unexpected columns: [{}]",
            columns.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;
    use tempfile::TempDir;

    fn record(timestamp: i64, version: &str, score: u64) -> ScoreRecord {
        ScoreRecord {
            timestamp,
            chart_id: 129891,
            chart_set_id: 39804,
            title: "FREEDOM DiVE".to_string(),
            artist: "xi".to_string(),
            creator: "Nakagawa-Kanon".to_string(),
            version: version.to_string(),
            count300: 1800,
            count100: 150,
            count50: 10,
            count_geki: 300,
            count_katu: 90,
            count_miss: 3,
            score,
            combo: 1200,
            perfect: false,
            mods: 24,
        }
    }

    fn open_store(dir: &TempDir) -> (ScoreStore, Arc<RecordingReporter>) {
        let reporter = Arc::new(RecordingReporter::new());
        let config = StoreConfig::new(dir.path().join("scores.db"));
        let store = ScoreStore::open(&config, reporter.clone()).unwrap();
        (store, reporter)
    }

    fn order(records: &[ScoreRecord]) -> Vec<(u64, i64)> {
        records.iter().map(|r| (r.score, r.timestamp)).collect()
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let (store, reporter) = open_store(&dir);

        let mut saved = record(1_700_000_000, "FOUR DIMENSIONS", 9_876_543);
        saved.perfect = true;
        saved.count_miss = 0;
        store.add_score(&saved).unwrap();

        let scores = store.chart_scores(&saved.chart_key()).unwrap();
        assert_eq!(scores, vec![saved]);
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_duplicate_timestamp_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (store, reporter) = open_store(&dir);

        store.add_score(&record(42, "Hard", 100)).unwrap();
        let err = store.add_score(&record(42, "Insane", 999)).unwrap_err();

        assert!(err.is_constraint_violation());
        assert_eq!(store.all_scores().unwrap().len(), 1);

        let reports = reporter.reports();
        assert_eq!(reports.len(), 1);
        assert!(!reports[0].fatal);
    }

    #[test]
    fn test_chart_scores_rank_order() {
        let dir = TempDir::new().unwrap();
        let (store, _) = open_store(&dir);

        store.add_score(&record(10, "Hard", 100)).unwrap();
        store.add_score(&record(20, "Hard", 500)).unwrap();
        store.add_score(&record(5, "Hard", 500)).unwrap();

        let scores = store.chart_scores(&record(0, "Hard", 0).chart_key()).unwrap();
        assert_eq!(order(&scores), vec![(500, 20), (500, 5), (100, 10)]);
    }

    #[test]
    fn test_chart_scores_match_exact_identity() {
        let dir = TempDir::new().unwrap();
        let (store, _) = open_store(&dir);

        store.add_score(&record(1, "Hard", 100)).unwrap();
        store.add_score(&record(2, "Insane", 200)).unwrap();
        let mut other_creator = record(3, "Hard", 300);
        other_creator.creator = "someone else".to_string();
        store.add_score(&other_creator).unwrap();

        let scores = store.chart_scores(&record(0, "Hard", 0).chart_key()).unwrap();
        assert_eq!(order(&scores), vec![(100, 1)]);
    }

    #[test]
    fn test_identity_strings_are_not_interpolated() {
        let dir = TempDir::new().unwrap();
        let (store, _) = open_store(&dir);

        let mut quoted = record(7, "Hard' OR '1'='1", 700);
        quoted.title = "Don't Stop".to_string();
        store.add_score(&quoted).unwrap();
        store.add_score(&record(8, "Hard", 800)).unwrap();

        let scores = store.chart_scores(&quoted.chart_key()).unwrap();
        assert_eq!(scores, vec![quoted]);
    }

    #[test]
    fn test_chart_set_grouping() {
        let dir = TempDir::new().unwrap();
        let (store, _) = open_store(&dir);

        let mut timestamp = 100;
        for version in ["Easy", "Normal", "Hard"] {
            for score in [1_000, 2_000] {
                timestamp += 1;
                store.add_score(&record(timestamp, version, score)).unwrap();
            }
        }
        let mut other_set = record(500, "Hard", 5_000);
        other_set.chart_set_id = 1;
        store.add_score(&other_set).unwrap();

        let groups = store
            .chart_set_scores(&record(0, "", 0).chart_set_key())
            .unwrap();

        assert_eq!(groups.len(), 3);
        assert_eq!(order(&groups["Easy"]), vec![(2_000, 102), (1_000, 101)]);
        assert_eq!(order(&groups["Normal"]), vec![(2_000, 104), (1_000, 103)]);
        assert_eq!(order(&groups["Hard"]), vec![(2_000, 106), (1_000, 105)]);
    }

    #[test]
    fn test_empty_results() {
        let dir = TempDir::new().unwrap();
        let (store, reporter) = open_store(&dir);

        let key = record(0, "Hard", 0);
        assert!(store.chart_scores(&key.chart_key()).unwrap().is_empty());
        assert!(store.chart_set_scores(&key.chart_set_key()).unwrap().is_empty());
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_initialize_twice_keeps_rows() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::new(dir.path().join("scores.db"));
        let reporter = Arc::new(RecordingReporter::new());

        let mut store = ScoreStore::open(&config, reporter.clone()).unwrap();
        store.add_score(&record(1, "Hard", 100)).unwrap();

        store.initialize(&config).unwrap();
        assert_eq!(store.all_scores().unwrap().len(), 1);
        store.shutdown().unwrap();

        let reopened = ScoreStore::open(&config, reporter.clone()).unwrap();
        assert_eq!(reopened.all_scores().unwrap().len(), 1);
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_initialize_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("scores.db");
        let reporter = Arc::new(RecordingReporter::new());

        let store = ScoreStore::open(&StoreConfig::new(&path), reporter).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), Some(path.as_path()));
    }

    #[test]
    fn test_initialize_rejects_unknown_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch("CREATE TABLE scores (id TEXT PRIMARY KEY, points INTEGER)")
                .unwrap();
        }

        let reporter = Arc::new(RecordingReporter::new());
        let err = ScoreStore::open(&StoreConfig::new(&path), reporter.clone())
            .err()
            .unwrap();

        assert!(err.is_fatal());
        assert!(reporter.has_fatal());
    }

    #[test]
    fn test_initialize_fails_on_directory_path() {
        let dir = TempDir::new().unwrap();
        let reporter = Arc::new(RecordingReporter::new());
        let mut store = ScoreStore::new(reporter.clone());

        let err = store.initialize(&StoreConfig::new(dir.path())).unwrap_err();
        assert!(matches!(err, Error::InitializationFailure(_)));
        assert!(!store.is_initialized());
        assert!(reporter.has_fatal());
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let reporter = Arc::new(RecordingReporter::new());
        let mut never_opened = ScoreStore::new(reporter.clone());
        never_opened.shutdown().unwrap();

        let dir = TempDir::new().unwrap();
        let (mut store, _) = open_store(&dir);
        store.shutdown().unwrap();
        store.shutdown().unwrap();
        assert!(!store.is_initialized());
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_operations_after_shutdown_fault() {
        let dir = TempDir::new().unwrap();
        let (mut store, reporter) = open_store(&dir);
        store.shutdown().unwrap();

        let key = record(0, "Hard", 0);
        assert!(matches!(
            store.add_score(&key),
            Err(Error::StorageFault(_))
        ));
        assert!(matches!(
            store.chart_scores(&key.chart_key()),
            Err(Error::StorageFault(_))
        ));
        assert!(store.chart_scores(&key.chart_key()).unwrap_or_default().is_empty());

        assert_eq!(reporter.len(), 3);
        assert!(!reporter.has_fatal());
    }

    #[test]
    fn test_negative_stored_score_is_a_storage_fault() {
        let dir = TempDir::new().unwrap();
        let (store, reporter) = open_store(&dir);
        {
            let conn = Connection::open(dir.path().join("scores.db")).unwrap();
            conn.execute(
                "INSERT INTO scores VALUES (1, 129891, 39804, 'FREEDOM DiVE', 'xi', \
                 'Nakagawa-Kanon', 'Hard', 0, 0, 0, 0, 0, 0, -5, 0, 0, 0)",
                [],
            )
            .unwrap();
        }

        let err = store
            .chart_scores(&record(0, "Hard", 0).chart_key())
            .unwrap_err();
        assert!(matches!(err, Error::StorageFault(_)));
        assert_eq!(reporter.len(), 1);
    }

    #[test]
    fn test_score_beyond_i64_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (store, _) = open_store(&dir);

        let err = store.add_score(&record(1, "Hard", u64::MAX)).unwrap_err();
        assert!(matches!(err, Error::StorageFault(_)));
        assert!(store.all_scores().unwrap().is_empty());
    }

    #[test]
    fn test_all_scores_oldest_first() {
        let dir = TempDir::new().unwrap();
        let (store, _) = open_store(&dir);

        store.add_score(&record(30, "Hard", 1)).unwrap();
        store.add_score(&record(10, "Easy", 3)).unwrap();
        store.add_score(&record(20, "Normal", 2)).unwrap();

        let timestamps: Vec<i64> = store
            .all_scores()
            .unwrap()
            .iter()
            .map(|r| r.timestamp)
            .collect();
        assert_eq!(timestamps, vec![10, 20, 30]);
    }
}
