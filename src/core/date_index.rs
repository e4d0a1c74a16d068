//! Column keys for the visible weeks.
//!
//! Weeks start on Monday. Labels look like `6/10 (화)`: month and day
//! without padding, then the weekday name from [`WEEKDAY_NAMES`].

use chrono::{Datelike, Duration, NaiveDate};

/// Weekday names indexed from Sunday = 0.
pub const WEEKDAY_NAMES: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

pub const DAYS_PER_WEEK: usize = 7;

/// One row of columns on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRange {
    pub keys: Vec<String>,
    /// Read-only ranges get no add, delete, edit or drag affordances.
    pub interactive: bool,
}

/// Which weeks the board shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardLayout {
    /// Current week plus the read-only previous week.
    #[default]
    TwoWeek,
    SingleWeek,
}

impl BoardLayout {
    pub fn ranges(&self, today: NaiveDate) -> Vec<WeekRange> {
        let current_start = week_start(today);
        let current = WeekRange {
            keys: week_keys(current_start),
            interactive: true,
        };
        match self {
            BoardLayout::SingleWeek => vec![current],
            BoardLayout::TwoWeek => vec![
                current,
                WeekRange {
                    keys: week_keys(current_start - Duration::days(DAYS_PER_WEEK as i64)),
                    interactive: false,
                },
            ],
        }
    }
}

/// Monday of the week containing `today`.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    let days_since_monday = today.weekday().num_days_from_monday();
    today - Duration::days(i64::from(days_since_monday))
}

pub fn column_key(date: NaiveDate) -> String {
    let weekday = WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize];
    format!("{}/{} ({})", date.month(), date.day(), weekday)
}

pub fn week_keys(start: NaiveDate) -> Vec<String> {
    (0..DAYS_PER_WEEK as i64)
        .map(|offset| column_key(start + Duration::days(offset)))
        .collect()
}

/// Keys in view for the sample data: older weeks first, like the board
/// file the loader would otherwise read.
pub fn sample_keys(ranges: &[WeekRange]) -> Vec<&str> {
    ranges
        .iter()
        .rev()
        .flat_map(|range| range.keys.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_is_monday_for_every_weekday() {
        // 2025-06-09 is a Monday
        for offset in 0..7 {
            let today = date(2025, 6, 9) + Duration::days(offset);
            let start = week_start(today);
            assert_eq!(start.weekday(), Weekday::Mon);
            assert_eq!(start, date(2025, 6, 9));
        }
    }

    #[test]
    fn sunday_belongs_to_the_preceding_monday() {
        assert_eq!(week_start(date(2025, 6, 15)), date(2025, 6, 9));
    }

    #[test]
    fn label_format() {
        assert_eq!(column_key(date(2025, 6, 10)), "6/10 (화)");
        assert_eq!(column_key(date(2025, 1, 5)), "1/5 (일)");
    }

    #[test]
    fn week_keys_are_seven_consecutive_days() {
        let keys = week_keys(date(2025, 6, 9));
        assert_eq!(
            keys,
            vec![
                "6/9 (월)",
                "6/10 (화)",
                "6/11 (수)",
                "6/12 (목)",
                "6/13 (금)",
                "6/14 (토)",
                "6/15 (일)",
            ]
        );
    }

    #[test]
    fn week_keys_cross_month_and_year_boundaries() {
        let keys = week_keys(week_start(date(2025, 1, 1)));
        assert_eq!(keys.first().map(String::as_str), Some("12/30 (월)"));
        assert_eq!(keys.last().map(String::as_str), Some("1/5 (일)"));
    }

    #[test]
    fn two_week_layout_has_read_only_previous_week() {
        let ranges = BoardLayout::TwoWeek.ranges(date(2025, 6, 11));
        assert_eq!(ranges.len(), 2);
        assert!(ranges[0].interactive);
        assert!(!ranges[1].interactive);
        assert_eq!(ranges[0].keys[0], "6/9 (월)");
        assert_eq!(ranges[1].keys[0], "6/2 (월)");
        assert_eq!(ranges[1].keys[6], "6/8 (일)");
    }

    #[test]
    fn single_week_layout() {
        let ranges = BoardLayout::SingleWeek.ranges(date(2025, 6, 11));
        assert_eq!(ranges.len(), 1);
        assert!(ranges[0].interactive);
    }

    #[test]
    fn sample_keys_list_previous_week_first() {
        let ranges = BoardLayout::TwoWeek.ranges(date(2025, 6, 11));
        let keys = sample_keys(&ranges);
        assert_eq!(keys.len(), 14);
        assert_eq!(keys[0], "6/2 (월)");
        assert_eq!(keys[7], "6/9 (월)");
    }
}
