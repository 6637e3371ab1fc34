use crate::models::{ContributionCalendar, ContributionDay, StreakResult};

/// Longest run of consecutive days with at least one commit.
pub fn longest_streak(days: &[ContributionDay]) -> u32 {
    let mut longest = 0;
    let mut running = 0;

    for day in days {
        if day.commit_count > 0 {
            running += 1;
            longest = longest.max(running);
        } else {
            running = 0;
        }
    }

    longest
}

/// Run of active days ending at the last entry; zero when the last day is idle.
pub fn current_streak(days: &[ContributionDay]) -> u32 {
    days.iter()
        .rev()
        .take_while(|day| day.commit_count > 0)
        .count() as u32
}

pub fn calculate_streaks(calendar: &ContributionCalendar) -> StreakResult {
    StreakResult {
        current_streak: current_streak(calendar.days()),
        longest_streak: longest_streak(calendar.days()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::calendar::contribution_level;
    use chrono::{Duration, NaiveDate};

    fn days(counts: &[u32]) -> Vec<ContributionDay> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        counts
            .iter()
            .enumerate()
            .map(|(i, &commit_count)| ContributionDay {
                date: start + Duration::days(i as i64),
                commit_count,
                level: contribution_level(commit_count),
            })
            .collect()
    }

    #[test]
    fn test_mixed_runs() {
        let calendar = days(&[1, 0, 2, 3, 0, 5, 1]);
        assert_eq!(longest_streak(&calendar), 2);
        assert_eq!(current_streak(&calendar), 2);
    }

    #[test]
    fn test_idle_last_day_resets_current() {
        let calendar = days(&[4, 4, 4, 4, 0]);
        assert_eq!(longest_streak(&calendar), 4);
        assert_eq!(current_streak(&calendar), 0);
    }

    #[test]
    fn test_current_can_exceed_earlier_longest_only_through_trailing_run() {
        let calendar = days(&[1, 0, 1, 1, 1]);
        assert_eq!(longest_streak(&calendar), 3);
        assert_eq!(current_streak(&calendar), 3);
    }

    #[test]
    fn test_fully_active_and_empty() {
        let active = days(&[1; 10]);
        assert_eq!(longest_streak(&active), 10);
        assert_eq!(current_streak(&active), 10);

        assert_eq!(longest_streak(&[]), 0);
        assert_eq!(current_streak(&[]), 0);
    }

    #[test]
    fn test_current_never_exceeds_length() {
        let calendar = days(&[3, 0, 0, 9, 9]);
        assert!(current_streak(&calendar) as usize <= calendar.len());
    }
}
