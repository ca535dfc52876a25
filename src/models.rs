use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::errors::StreakError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Contact,
    Meeting,
    Goal,
}

impl ActivityType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Meeting => "meeting",
            Self::Goal => "goal",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = StreakError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "contact" => Ok(Self::Contact),
            "meeting" => Ok(Self::Meeting),
            "goal" => Ok(Self::Goal),
            other => Err(StreakError::InvalidActivityType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub date: NaiveDate,
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    pub current_streak: u32,
    pub longest_streak: u32,
    #[serde(default)]
    pub last_activity_date: Option<NaiveDate>,
    #[serde(default)]
    pub streak_history: Vec<ActivityEntry>,
}

impl StreakRecord {
    pub fn has_activity_on(&self, date: NaiveDate) -> bool {
        self.streak_history.iter().any(|entry| entry.date == date)
    }

    pub fn entry_on(&self, date: NaiveDate) -> Option<&ActivityEntry> {
        self.streak_history.iter().find(|entry| entry.date == date)
    }
}

/// On-disk layout of the JSON file backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StreakFile {
    #[serde(default)]
    pub users: BTreeMap<String, StreakRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ActivityRequest {
    #[serde(default)]
    pub activity: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakView {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub streak_history: Vec<ActivityEntry>,
}

impl From<StreakRecord> for StreakView {
    fn from(record: StreakRecord) -> Self {
        Self {
            current_streak: record.current_streak,
            longest_streak: record.longest_streak,
            streak_history: record.streak_history,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyGoalProgress {
    pub completed: u32,
    pub target: u32,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub active: bool,
    pub activity: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ActivityType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCounts {
    pub contact: usize,
    pub meeting: usize,
    pub goal: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakAchievement {
    pub title: String,
    pub progress: u32,
    pub target: u32,
    pub earned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub weekly_goal: WeeklyGoalProgress,
    pub recent_activity: Vec<ActivityEntry>,
    pub last_7_days: Vec<DayActivity>,
    pub activity_counts: ActivityCounts,
    pub week_warrior: StreakAchievement,
}
