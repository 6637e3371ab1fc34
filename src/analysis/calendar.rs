use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::config::{DEFAULT_CALENDAR_DAYS, MAX_CALENDAR_DAYS};
use crate::models::{ContributionCalendar, ContributionDay, PushEvent, WeeklyActivityDay};

/// Maps a day's commit count to its display intensity.
pub fn contribution_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=3 => 1,
        4..=6 => 2,
        7..=9 => 3,
        _ => 4,
    }
}

/// Builds the trailing daily calendar ending at an injected reference date.
pub struct CalendarBuilder {
    window_days: u32,
}

impl CalendarBuilder {
    /// Windows longer than [`MAX_CALENDAR_DAYS`] are capped.
    pub fn new(window_days: u32) -> Self {
        Self {
            window_days: window_days.min(MAX_CALENDAR_DAYS),
        }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Commit totals per UTC calendar day.
    pub fn daily_counts(&self, pushes: &[PushEvent]) -> HashMap<NaiveDate, u32> {
        let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
        for push in pushes {
            *counts.entry(push.timestamp_utc.date_naive()).or_insert(0) += push.commit_count;
        }
        counts
    }

    /// One entry per day in `[today - (N-1), today]`, oldest first. Days
    /// without pushes are present with a zero count. Days before the earliest
    /// representable date are left out.
    pub fn build(&self, pushes: &[PushEvent], today: NaiveDate) -> ContributionCalendar {
        let counts = self.daily_counts(pushes);
        tracing::debug!(
            "Building {}-day calendar ending {} from {} active days",
            self.window_days,
            today,
            counts.len()
        );

        let days = (0..self.window_days as i64)
            .rev()
            .filter_map(|offset| today.checked_sub_signed(Duration::days(offset)))
            .map(|date| {
                let commit_count = counts.get(&date).copied().unwrap_or(0);
                ContributionDay {
                    date,
                    commit_count,
                    level: contribution_level(commit_count),
                }
            })
            .collect();

        ContributionCalendar::from_days(days)
    }
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CALENDAR_DAYS)
    }
}

/// The last seven calendar days with weekday labels.
pub fn weekly_activity(calendar: &ContributionCalendar) -> Vec<WeeklyActivityDay> {
    calendar
        .last_days(7)
        .iter()
        .map(|day| WeeklyActivityDay {
            date: day.date,
            weekday: day.date.format("%a").to_string(),
            commits: day.commit_count,
            contributed: day.commit_count > 0,
        })
        .collect()
}
