use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::grade::{Grade, grade};

/// Display format for play timestamps, e.g. "1/2/2015 3:04:05 PM"
const TIME_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// A single completed play
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// When the play finished (Unix seconds). Unique per record.
    pub timestamp: i64,
    pub chart_id: i32,
    pub chart_set_id: i32,
    pub title: String,
    pub artist: String,
    pub creator: String,
    /// Difficulty name within the chart set
    pub version: String,
    pub count300: u32,
    pub count100: u32,
    pub count50: u32,
    pub count_geki: u32,
    pub count_katu: u32,
    pub count_miss: u32,
    pub score: u64,
    /// Longest combo reached
    pub combo: u32,
    /// Full combo
    pub perfect: bool,
    /// Modifier bitmask, see [`crate::mods::GameMod`]
    pub mods: u32,
}

impl ScoreRecord {
    /// Play time as a UTC date, `None` if the timestamp is out of range
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    /// Timestamp formatted in the local time zone
    pub fn time_string(&self) -> String {
        self.time_string_in(&Local)
    }

    /// Timestamp formatted in an explicit time zone
    pub fn time_string_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self.datetime() {
            Some(utc) => utc.with_timezone(tz).format(TIME_FORMAT).to_string(),
            None => self.timestamp.to_string(),
        }
    }

    pub fn grade(&self) -> Grade {
        grade(self.count300, self.count100, self.count50, self.count_miss)
    }

    pub fn chart_key(&self) -> ChartKey {
        ChartKey {
            chart_id: self.chart_id,
            title: self.title.clone(),
            artist: self.artist.clone(),
            creator: self.creator.clone(),
            version: self.version.clone(),
        }
    }

    pub fn chart_set_key(&self) -> ChartSetKey {
        ChartSetKey {
            chart_set_id: self.chart_set_id,
            title: self.title.clone(),
            artist: self.artist.clone(),
            creator: self.creator.clone(),
        }
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | ID: ({}, {}) | {} - {} [{}] (by {}) | Hits: ({}, {}, {}, {}, {}, {}) | Score: {} ({} combo{}) | Mods: {}",
            self.time_string(),
            self.chart_id,
            self.chart_set_id,
            self.artist,
            self.title,
            self.version,
            self.creator,
            self.count300,
            self.count100,
            self.count50,
            self.count_geki,
            self.count_katu,
            self.count_miss,
            self.score,
            self.combo,
            if self.perfect { ", FC" } else { "" },
            self.mods
        )
    }
}

/// Identity of a single chart. All fields must match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartKey {
    pub chart_id: i32,
    pub title: String,
    pub artist: String,
    pub creator: String,
    pub version: String,
}

/// Identity of a chart set, covering every version in it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartSetKey {
    pub chart_set_id: i32,
    pub title: String,
    pub artist: String,
    pub creator: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScoreRecord {
        ScoreRecord {
            timestamp: 1_420_211_045, // 2015-01-02 15:04:05 UTC
            chart_id: 75,
            chart_set_id: 1,
            title: "DISCO PRINCE".to_string(),
            artist: "Kenji Ninuma".to_string(),
            creator: "peppy".to_string(),
            version: "Normal".to_string(),
            count300: 300,
            count100: 12,
            count50: 1,
            count_geki: 40,
            count_katu: 8,
            count_miss: 0,
            score: 1_234_567,
            combo: 314,
            perfect: true,
            mods: 8,
        }
    }

    #[test]
    fn test_time_string_format() {
        let record = sample();
        assert_eq!(record.time_string_in(&Utc), "1/2/2015 3:04:05 PM");

        let midnight = ScoreRecord {
            timestamp: 0,
            ..Default::default()
        };
        assert_eq!(midnight.time_string_in(&Utc), "1/1/1970 12:00:00 AM");
    }

    #[test]
    fn test_time_string_out_of_range_falls_back_to_seconds() {
        let record = ScoreRecord {
            timestamp: i64::MAX,
            ..Default::default()
        };
        assert_eq!(record.time_string_in(&Utc), i64::MAX.to_string());
    }

    #[test]
    fn test_display_summary() {
        let record = sample();
        let summary = record.to_string();
        assert!(summary.ends_with(
            "| ID: (75, 1) | Kenji Ninuma - DISCO PRINCE [Normal] (by peppy) | \
             Hits: (300, 12, 1, 40, 8, 0) | Score: 1234567 (314 combo, FC) | Mods: 8"
        ));

        let no_fc = ScoreRecord {
            perfect: false,
            ..record
        };
        assert!(no_fc.to_string().contains("(314 combo) |"));
    }

    #[test]
    fn test_grade_forwards_counts() {
        assert_eq!(ScoreRecord::default().grade(), Grade::NoData);
        let all_perfect = ScoreRecord {
            count300: 500,
            ..Default::default()
        };
        assert_eq!(all_perfect.grade(), Grade::Ss);
    }

    #[test]
    fn test_keys_from_record() {
        let record = sample();
        let chart = record.chart_key();
        assert_eq!(chart.chart_id, 75);
        assert_eq!(chart.version, "Normal");

        let set = record.chart_set_key();
        assert_eq!(set.chart_set_id, 1);
        assert_eq!(set.creator, "peppy");
    }
}
