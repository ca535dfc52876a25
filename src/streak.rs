//! Streak arithmetic over a [`StreakRecord`].
//!
//! Both functions are pure: they return `Some(updated)` when the record has to
//! change and `None` when the caller can keep what it has.

use crate::clock::add_days;
use crate::models::{ActivityEntry, ActivityType, StreakRecord};
use chrono::NaiveDate;

/// Most recent ledger entries kept per user.
pub const HISTORY_LIMIT: usize = 30;

/// Records the first activity of `today`. Later activities on the same day
/// leave the record untouched.
pub fn record_activity(
    record: &StreakRecord,
    today: NaiveDate,
    activity: &str,
    kind: ActivityType,
) -> Option<StreakRecord> {
    if record.has_activity_on(today) {
        return None;
    }

    let current_streak = if record.last_activity_date == Some(add_days(today, -1)) {
        record.current_streak.saturating_add(1)
    } else {
        1
    };

    let mut streak_history = record.streak_history.clone();
    streak_history.push(ActivityEntry {
        date: today,
        activity: activity.to_string(),
        kind,
    });
    if streak_history.len() > HISTORY_LIMIT {
        let overflow = streak_history.len() - HISTORY_LIMIT;
        streak_history.drain(..overflow);
    }

    Some(StreakRecord {
        current_streak,
        longest_streak: current_streak.max(record.longest_streak),
        last_activity_date: Some(today),
        streak_history,
    })
}

/// Ages out a streak whose last activity is older than yesterday and seeds a
/// brand-new record with day one.
pub fn revalidate(record: &StreakRecord, today: NaiveDate) -> Option<StreakRecord> {
    match record.last_activity_date {
        None if record.current_streak == 0 => Some(StreakRecord {
            current_streak: 1,
            longest_streak: record.longest_streak.max(1),
            ..record.clone()
        }),
        Some(last)
            if last != today && last != add_days(today, -1) && record.current_streak != 1 =>
        {
            Some(StreakRecord {
                current_streak: 1,
                longest_streak: record.longest_streak.max(1),
                ..record.clone()
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: i64) -> NaiveDate {
        add_days(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), n)
    }

    fn add(record: &StreakRecord, today: NaiveDate) -> StreakRecord {
        record_activity(record, today, "Added contact", ActivityType::Contact)
            .unwrap_or_else(|| record.clone())
    }

    #[test]
    fn first_activity_starts_streak_at_one() {
        let record = add(&StreakRecord::default(), day(0));
        assert_eq!(record.current_streak, 1);
        assert_eq!(record.longest_streak, 1);
        assert_eq!(record.last_activity_date, Some(day(0)));
        assert_eq!(record.streak_history.len(), 1);
        assert_eq!(record.streak_history[0].kind, ActivityType::Contact);
    }

    #[test]
    fn consecutive_days_count_up() {
        let mut record = StreakRecord::default();
        for n in 0..12 {
            record = add(&record, day(n));
            assert_eq!(record.current_streak as i64, n + 1);
            assert_eq!(record.longest_streak as i64, n + 1);
        }
    }

    #[test]
    fn gap_restarts_streak_and_keeps_longest() {
        let mut record = StreakRecord::default();
        for n in 0..4 {
            record = add(&record, day(n));
        }
        let record = add(&record, day(6));
        assert_eq!(record.current_streak, 1);
        assert_eq!(record.longest_streak, 4);
    }

    #[test]
    fn same_day_repeat_is_a_no_op() {
        let record = add(&StreakRecord::default(), day(0));
        assert!(record_activity(&record, day(0), "Scheduled", ActivityType::Meeting).is_none());
    }

    #[test]
    fn history_keeps_most_recent_thirty_days() {
        let mut record = StreakRecord::default();
        for n in 0..40 {
            record = add(&record, day(n));
        }
        assert_eq!(record.streak_history.len(), HISTORY_LIMIT);
        let dates: Vec<_> = record.streak_history.iter().map(|entry| entry.date).collect();
        let expected: Vec<_> = (10..40).map(day).collect();
        assert_eq!(dates, expected);
        assert_eq!(record.current_streak, 40);
    }

    #[test]
    fn longest_never_decreases() {
        let mut record = StreakRecord::default();
        let mut longest = 0;
        for n in [0, 1, 2, 5, 6, 9, 10, 11, 12, 20] {
            record = add(&record, day(n));
            assert!(record.longest_streak >= longest);
            assert!(record.longest_streak >= record.current_streak);
            longest = record.longest_streak;
            if let Some(next) = revalidate(&record, day(n + 3)) {
                assert_eq!(next.longest_streak, record.longest_streak);
            }
        }
        assert_eq!(longest, 4);
    }

    #[test]
    fn revalidate_seeds_fresh_record() {
        let record = revalidate(&StreakRecord::default(), day(0)).unwrap();
        assert_eq!(record.current_streak, 1);
        assert_eq!(record.longest_streak, 1);
        assert_eq!(record.last_activity_date, None);
        assert!(record.streak_history.is_empty());
    }

    #[test]
    fn revalidate_keeps_today_and_yesterday() {
        let mut record = StreakRecord::default();
        for n in 0..3 {
            record = add(&record, day(n));
        }
        assert!(revalidate(&record, day(2)).is_none());
        assert!(revalidate(&record, day(3)).is_none());
    }

    #[test]
    fn revalidate_resets_after_missed_day() {
        let mut record = StreakRecord::default();
        for n in 0..3 {
            record = add(&record, day(n));
        }
        let reset = revalidate(&record, day(4)).unwrap();
        assert_eq!(reset.current_streak, 1);
        assert_eq!(reset.longest_streak, 3);
        assert_eq!(reset.last_activity_date, Some(day(2)));
        assert_eq!(reset.streak_history, record.streak_history);

        assert!(revalidate(&reset, day(5)).is_none());
    }
}
