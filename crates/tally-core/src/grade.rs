//! Grading rules.
//!
//! Letter grades are derived purely from the four judgement counts. The
//! score store never grades anything itself; it only forwards counts here.

use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum Grade {
    /// No objects were judged
    #[default]
    #[strum(serialize = "-")]
    #[serde(rename = "-")]
    NoData = 0,
    D = 1,
    C = 2,
    B = 3,
    A = 4,
    S = 5,
    #[strum(serialize = "SS")]
    #[serde(rename = "SS")]
    Ss = 6,
}

impl Grade {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

/// Derive the grade for a play from its judgement counts.
///
/// Percentages are taken over `300s + 100s + 50s + misses`. Comparisons are
/// done in integers, so `> 90%` means `300s * 10 > total * 9`.
pub fn grade(count300: u32, count100: u32, count50: u32, count_miss: u32) -> Grade {
    let hit300 = u64::from(count300);
    let hit50 = u64::from(count50);
    let total = hit300 + u64::from(count100) + hit50 + u64::from(count_miss);
    if total == 0 {
        return Grade::NoData;
    }

    // 300% > n/10  <=>  hit300 * 10 > total * n
    let above = |tenths: u64| hit300 * 10 > total * tenths;
    let no_miss = count_miss == 0;

    if hit300 == total {
        Grade::Ss
    } else if above(9) && hit50 * 100 < total && no_miss {
        Grade::S
    } else if (above(8) && no_miss) || above(9) {
        Grade::A
    } else if (above(7) && no_miss) || above(8) {
        Grade::B
    } else if above(6) {
        Grade::C
    } else {
        Grade::D
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_no_data() {
        assert_eq!(grade(0, 0, 0, 0), Grade::NoData);
        assert_eq!(Grade::NoData.short_name(), "-");
    }

    #[test]
    fn test_grade_all_300s() {
        assert_eq!(grade(1, 0, 0, 0), Grade::Ss);
        assert_eq!(grade(500, 0, 0, 0), Grade::Ss);
    }

    #[test]
    fn test_grade_s_requires_few_50s_and_no_miss() {
        // 95% 300s, no misses, no 50s
        assert_eq!(grade(95, 5, 0, 0), Grade::S);
        // 50s at exactly 1% are too many for S
        assert_eq!(grade(95, 4, 1, 0), Grade::A);
        // a single miss drops to A while 300s stay above 90%
        assert_eq!(grade(95, 4, 0, 1), Grade::A);
    }

    #[test]
    fn test_grade_boundaries_are_strict() {
        // exactly 90% 300s is not above 90%
        assert_eq!(grade(90, 10, 0, 0), Grade::A);
        // exactly 80% with a miss is neither A nor B
        assert_eq!(grade(80, 19, 0, 1), Grade::C);
        // exactly 70% with no miss is not above 70%
        assert_eq!(grade(70, 30, 0, 0), Grade::C);
        // exactly 60% is D
        assert_eq!(grade(60, 40, 0, 0), Grade::D);
    }

    #[test]
    fn test_grade_miss_tolerance() {
        assert_eq!(grade(85, 10, 0, 5), Grade::B);
        assert_eq!(grade(75, 20, 0, 5), Grade::C);
        assert_eq!(grade(10, 0, 0, 90), Grade::D);
    }

    #[test]
    fn test_grade_serializes_as_short_name() {
        for grade in [Grade::NoData, Grade::A, Grade::Ss] {
            let json = serde_json::to_string(&grade).unwrap();
            assert_eq!(json, format!("\"{}\"", grade.short_name()));
            assert_eq!(serde_json::from_str::<Grade>(&json).unwrap(), grade);
        }
    }

    #[test]
    fn test_grade_ordering() {
        assert!(Grade::Ss > Grade::S);
        assert!(Grade::S > Grade::A);
        assert!(Grade::D > Grade::NoData);
        assert_eq!(Grade::from_u8(6), Some(Grade::Ss));
        assert_eq!(Grade::from_u8(7), None);
    }
}
