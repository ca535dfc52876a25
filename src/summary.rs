use crate::clock::add_days;
use crate::models::{
    ActivityCounts, ActivityEntry, ActivityType, DayActivity, StreakAchievement, StreakRecord,
    StreakSummary, WeeklyGoalProgress,
};
use chrono::NaiveDate;

pub const WEEKLY_GOAL_DAYS: u32 = 7;
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

pub fn build_summary_at(today: NaiveDate, record: &StreakRecord) -> StreakSummary {
    StreakSummary {
        current_streak: record.current_streak,
        longest_streak: record.longest_streak,
        weekly_goal: weekly_goal(record.current_streak),
        recent_activity: recent_activity(record),
        last_7_days: last_7_days(today, record),
        activity_counts: activity_counts(record),
        week_warrior: StreakAchievement {
            title: "Week Warrior".to_string(),
            progress: record.current_streak,
            target: WEEKLY_GOAL_DAYS,
            earned: record.current_streak >= WEEKLY_GOAL_DAYS,
        },
    }
}

fn weekly_goal(current_streak: u32) -> WeeklyGoalProgress {
    let completed = current_streak.min(WEEKLY_GOAL_DAYS);
    let percent = (f64::from(completed) / f64::from(WEEKLY_GOAL_DAYS) * 100.0).round() as u8;
    WeeklyGoalProgress {
        completed,
        target: WEEKLY_GOAL_DAYS,
        percent,
    }
}

fn recent_activity(record: &StreakRecord) -> Vec<ActivityEntry> {
    record
        .streak_history
        .iter()
        .rev()
        .take(RECENT_ACTIVITY_LIMIT)
        .cloned()
        .collect()
}

fn last_7_days(today: NaiveDate, record: &StreakRecord) -> Vec<DayActivity> {
    (0..7)
        .rev()
        .map(|offset| {
            let date = add_days(today, -offset);
            let entry = record.entry_on(date);
            DayActivity {
                date,
                active: entry.is_some(),
                activity: entry.map(|entry| entry.activity.clone()),
                kind: entry.map(|entry| entry.kind),
            }
        })
        .collect()
}

fn activity_counts(record: &StreakRecord) -> ActivityCounts {
    let count = |kind: ActivityType| {
        record
            .streak_history
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    };
    ActivityCounts {
        contact: count(ActivityType::Contact),
        meeting: count(ActivityType::Meeting),
        goal: count(ActivityType::Goal),
    }
}
