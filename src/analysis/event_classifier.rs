use std::collections::HashSet;

use crate::models::{PushEvent, RawEvent, RecentCommit, SearchCommit};

/// Push events considered when building the recent commit list.
pub const RECENT_PUSH_EVENTS: usize = 20;
/// Search results considered when building the recent commit list.
pub const RECENT_SEARCH_COMMITS: usize = 30;
pub const MAX_RECENT_COMMITS: usize = 100;

/// Maps a raw event to a normalized push. Non-push events, events without a
/// timestamp and pushes without commits yield `None`.
pub fn push_event_from_raw(event: &RawEvent) -> Option<PushEvent> {
    if !event.is_push() {
        return None;
    }
    let timestamp_utc = event.created_at?;
    let commit_count = event.payload.commits.as_ref().map_or(0, Vec::len);
    if commit_count == 0 {
        return None;
    }

    Some(PushEvent {
        timestamp_utc,
        repository_name: event.repo.name.clone(),
        commit_count: commit_count as u32,
    })
}

/// Filters an event feed down to push events, preserving feed order.
pub fn classify_events(events: &[RawEvent]) -> Vec<PushEvent> {
    events.iter().filter_map(push_event_from_raw).collect()
}

/// Commits bundled in a push event, each stamped with the push time.
pub fn commits_from_event(event: &RawEvent) -> Vec<RecentCommit> {
    if !event.is_push() {
        return Vec::new();
    }
    let Some(timestamp) = event.created_at else {
        return Vec::new();
    };

    event
        .payload
        .commits
        .iter()
        .flatten()
        .map(|c| RecentCommit {
            sha: c.sha.clone(),
            repository: event.repo.name.clone(),
            message: c.message.clone(),
            timestamp,
        })
        .collect()
}

pub fn commit_from_search(item: &SearchCommit) -> Option<RecentCommit> {
    let timestamp = item.commit.author.as_ref().and_then(|a| a.date)?;

    Some(RecentCommit {
        sha: item.sha.clone(),
        repository: item
            .repository
            .as_ref()
            .map(|r| r.full_name.clone())
            .unwrap_or_default(),
        message: item.commit.message.clone(),
        timestamp,
    })
}

/// Merges event-derived and search-derived commits, keeping the first record
/// for each sha, newest first, capped at [`MAX_RECENT_COMMITS`].
pub fn merge_recent_commits(events: &[RawEvent], search: &[SearchCommit]) -> Vec<RecentCommit> {
    let from_events = events
        .iter()
        .filter(|e| e.is_push())
        .take(RECENT_PUSH_EVENTS)
        .flat_map(commits_from_event);
    let from_search = search
        .iter()
        .take(RECENT_SEARCH_COMMITS)
        .filter_map(commit_from_search);

    let mut seen = HashSet::new();
    let mut commits: Vec<RecentCommit> = from_events
        .chain(from_search)
        .filter(|c| c.sha.is_empty() || seen.insert(c.sha.clone()))
        .collect();

    // Stable sort keeps feed order for equal timestamps.
    commits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    commits.truncate(MAX_RECENT_COMMITS);
    commits
}

/// Sum of commits across every push event in the feed.
pub fn total_pushed_commits(events: &[RawEvent]) -> u32 {
    classify_events(events).iter().map(|p| p.commit_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CommitAuthor, EventPayload, EventRepository, PushedCommit, SearchCommitDetails,
        SearchRepository,
    };
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
    }

    fn push(day: u32, shas: &[&str]) -> RawEvent {
        RawEvent {
            id: format!("push-{}", day),
            kind: "PushEvent".to_string(),
            created_at: Some(at(day, 9)),
            repo: EventRepository {
                name: "octo/gitpulse".to_string(),
            },
            payload: EventPayload {
                commits: Some(
                    shas.iter()
                        .map(|s| PushedCommit {
                            sha: s.to_string(),
                            message: format!("commit {}", s),
                            author: None,
                        })
                        .collect(),
                ),
            },
        }
    }

    fn search(sha: &str, day: u32) -> SearchCommit {
        SearchCommit {
            sha: sha.to_string(),
            commit: SearchCommitDetails {
                message: "from search".to_string(),
                author: Some(CommitAuthor {
                    name: None,
                    email: None,
                    date: Some(at(day, 12)),
                }),
            },
            repository: Some(SearchRepository {
                full_name: "octo/other".to_string(),
            }),
        }
    }

    #[test]
    fn test_only_push_events_survive() {
        let watch = RawEvent {
            kind: "WatchEvent".to_string(),
            created_at: Some(at(3, 1)),
            ..Default::default()
        };
        let events = vec![push(4, &["a", "b", "c"]), watch, push(2, &["d"])];

        let pushes = classify_events(&events);
        assert_eq!(pushes.len(), 2);
        assert_eq!(pushes[0].commit_count, 3);
        assert_eq!(pushes[0].timestamp_utc, at(4, 9));
        assert_eq!(pushes[1].commit_count, 1);
    }

    #[test]
    fn test_missing_or_empty_commit_list_yields_nothing() {
        let mut missing = push(1, &[]);
        missing.payload.commits = None;
        let empty = push(1, &[]);
        let mut undated = push(1, &["x"]);
        undated.created_at = None;

        assert!(classify_events(&[missing, empty, undated]).is_empty());
    }

    #[test]
    fn test_merge_dedupes_by_sha_and_sorts_newest_first() {
        let events = vec![push(5, &["a", "b"]), push(3, &["c"])];
        let found = vec![search("b", 6), search("z", 4)];

        let merged = merge_recent_commits(&events, &found);
        let shas: Vec<_> = merged.iter().map(|c| c.sha.as_str()).collect();
        assert_eq!(shas, vec!["a", "b", "z", "c"]);
        assert_eq!(merged[1].repository, "octo/gitpulse");
    }

    #[test]
    fn test_merge_caps_push_events() {
        let events: Vec<_> = (0..25)
            .map(|i| {
                let sha = format!("sha{}", i);
                push(1 + (i % 28), &[sha.as_str()])
            })
            .collect();

        assert_eq!(merge_recent_commits(&events, &[]).len(), RECENT_PUSH_EVENTS);
    }

    #[test]
    fn test_total_pushed_commits() {
        let events = vec![push(1, &["a", "b"]), push(2, &["c"])];
        assert_eq!(total_pushed_commits(&events), 3);
        assert_eq!(total_pushed_commits(&[]), 0);
    }
}
