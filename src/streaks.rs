// ABOUTME: Consecutive-day activity streak tracking from workout dates
// ABOUTME: Walks deduplicated sorted dates; a day-delta of exactly 1 extends, anything else resets
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Streak tracking.
//!
//! A streak is a run of consecutive calendar days with at least one
//! qualifying record. The walk operates on deduplicated dates because the
//! workout log may hold several records per day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current and longest consecutive-day streaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Running streak at the end of the date walk
    pub current: u32,
    /// Longest streak seen anywhere in the history
    pub longest: u32,
}

/// Compute current and longest streaks from a set of activity dates.
///
/// Dates may arrive in any order and with duplicates; they are deduplicated
/// and sorted ascending before the walk. A consecutive pair extends the
/// running streak iff the day-delta is exactly 1; any other delta resets it
/// to 1. Empty input yields `(0, 0)`; a single date yields `(1, 1)`.
#[must_use]
pub fn calculate_streaks(dates: &[NaiveDate]) -> StreakSummary {
    let mut days = dates.to_vec();
    days.sort_unstable();
    days.dedup();

    if days.is_empty() {
        return StreakSummary {
            current: 0,
            longest: 0,
        };
    }

    let mut current = 1u32;
    let mut longest = 1u32;

    for pair in days.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }

    StreakSummary { current, longest }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn empty_input_has_no_streak() {
        assert_eq!(
            calculate_streaks(&[]),
            StreakSummary {
                current: 0,
                longest: 0
            }
        );
    }

    #[test]
    fn single_date_is_a_streak_of_one() {
        assert_eq!(
            calculate_streaks(&[d(2024, 1, 1)]),
            StreakSummary {
                current: 1,
                longest: 1
            }
        );
    }

    #[test]
    fn gap_resets_current_but_keeps_longest() {
        let dates = [d(2024, 1, 1), d(2024, 1, 2), d(2024, 1, 3), d(2024, 1, 5)];
        assert_eq!(
            calculate_streaks(&dates),
            StreakSummary {
                current: 1,
                longest: 3
            }
        );
    }

    #[test]
    fn same_day_duplicates_do_not_break_the_walk() {
        let dates = [
            d(2024, 1, 1),
            d(2024, 1, 2),
            d(2024, 1, 2),
            d(2024, 1, 3),
        ];
        assert_eq!(
            calculate_streaks(&dates),
            StreakSummary {
                current: 3,
                longest: 3
            }
        );
    }

    #[test]
    fn unordered_input_is_sorted_first() {
        let dates = [d(2024, 1, 3), d(2024, 1, 1), d(2024, 1, 2)];
        assert_eq!(
            calculate_streaks(&dates),
            StreakSummary {
                current: 3,
                longest: 3
            }
        );
    }
}
