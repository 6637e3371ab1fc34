use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub commit_count: u32,
    /// Display intensity in `0..=4`.
    pub level: u8,
}

/// Fixed-length daily series, oldest first, one entry per calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct ContributionCalendar {
    days: Vec<ContributionDay>,
}

impl ContributionCalendar {
    pub(crate) fn from_days(days: Vec<ContributionDay>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[ContributionDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }

    pub fn total_commits(&self) -> u32 {
        self.days.iter().map(|d| d.commit_count).sum()
    }

    /// Number of days with at least one commit.
    pub fn active_days(&self) -> u32 {
        self.days.iter().filter(|d| d.commit_count > 0).count() as u32
    }

    /// The trailing `n` days, oldest first.
    pub fn last_days(&self, n: usize) -> &[ContributionDay] {
        let start = self.days.len().saturating_sub(n);
        &self.days[start..]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContributionSummary {
    pub calendar: ContributionCalendar,
    pub total_contributions: u32,
    pub contribution_days: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyActivityDay {
    pub date: NaiveDate,
    pub weekday: String,
    pub commits: u32,
    pub contributed: bool,
}
