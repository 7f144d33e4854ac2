//! Rank ordering and chart-set grouping

use std::cmp::Ordering;
use std::collections::HashMap;

use super::ScoreRecord;

/// Compare two records for rank, best first.
///
/// Higher score wins; on equal score the more recent play wins.
pub fn rank_cmp(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.timestamp.cmp(&a.timestamp))
}

pub fn sort_by_rank(records: &mut [ScoreRecord]) {
    records.sort_by(rank_cmp);
}

/// Partition rows by version, rank-sorting each partition.
///
/// Rows are expected to arrive ordered by version so that equal versions
/// form one run. A version appearing in more than one run is still
/// collected into a single group.
pub fn group_by_version(rows: Vec<ScoreRecord>) -> HashMap<String, Vec<ScoreRecord>> {
    let mut groups: HashMap<String, Vec<ScoreRecord>> = HashMap::new();
    let mut run: Vec<ScoreRecord> = Vec::new();

    for row in rows {
        if run.last().is_some_and(|last| last.version != row.version) {
            flush_run(&mut groups, &mut run);
        }
        run.push(row);
    }
    flush_run(&mut groups, &mut run);

    for records in groups.values_mut() {
        sort_by_rank(records);
    }
    groups
}

fn flush_run(groups: &mut HashMap<String, Vec<ScoreRecord>>, run: &mut Vec<ScoreRecord>) {
    let Some(first) = run.first() else {
        return;
    };
    let version = first.version.clone();
    groups.entry(version).or_default().append(run);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(version: &str, score: u64, timestamp: i64) -> ScoreRecord {
        ScoreRecord {
            timestamp,
            version: version.to_string(),
            score,
            ..Default::default()
        }
    }

    fn order(records: &[ScoreRecord]) -> Vec<(u64, i64)> {
        records.iter().map(|r| (r.score, r.timestamp)).collect()
    }

    #[test]
    fn test_sort_by_rank_breaks_ties_by_recency() {
        let mut records = vec![
            record("Hard", 100, 10),
            record("Hard", 500, 20),
            record("Hard", 500, 5),
        ];
        sort_by_rank(&mut records);
        assert_eq!(order(&records), vec![(500, 20), (500, 5), (100, 10)]);
    }

    #[test]
    fn test_rank_cmp_is_consistent() {
        let high = record("Hard", 900, 1);
        let low = record("Hard", 800, 2);
        assert_eq!(rank_cmp(&high, &low), Ordering::Less);
        assert_eq!(rank_cmp(&low, &high), Ordering::Greater);
        assert_eq!(rank_cmp(&high, &high.clone()), Ordering::Equal);
    }

    #[test]
    fn test_group_by_version() {
        let rows = vec![
            record("Normal", 300, 1),
            record("Normal", 700, 2),
            record("Hard", 200, 3),
            record("Hard", 900, 4),
            record("Easy", 100, 5),
            record("Easy", 100, 6),
        ];
        let groups = group_by_version(rows);

        assert_eq!(groups.len(), 3);
        assert_eq!(order(&groups["Normal"]), vec![(700, 2), (300, 1)]);
        assert_eq!(order(&groups["Hard"]), vec![(900, 4), (200, 3)]);
        assert_eq!(order(&groups["Easy"]), vec![(100, 6), (100, 5)]);
    }

    #[test]
    fn test_group_by_version_merges_split_runs() {
        let rows = vec![
            record("Hard", 100, 1),
            record("Easy", 50, 2),
            record("Hard", 400, 3),
        ];
        let groups = group_by_version(rows);

        assert_eq!(groups.len(), 2);
        assert_eq!(order(&groups["Hard"]), vec![(400, 3), (100, 1)]);
    }

    #[test]
    fn test_group_by_version_empty() {
        assert!(group_by_version(Vec::new()).is_empty());
    }
}
