use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::{lenient_opt_vec, lenient_vec, null_as_default};

pub const PUSH_EVENT_KIND: &str = "PushEvent";

/// An entry from the public events feed. Only push events carry commits.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo: EventRepository,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload: EventPayload,
}

impl RawEvent {
    pub fn is_push(&self) -> bool {
        self.kind == PUSH_EVENT_KIND
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventRepository {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventPayload {
    #[serde(default, deserialize_with = "lenient_opt_vec")]
    pub commits: Option<Vec<PushedCommit>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PushedCommit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sha: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CommitAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// Response envelope of the commit search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchCommitsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: u64,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub items: Vec<SearchCommit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchCommit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sha: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commit: SearchCommitDetails,
    pub repository: Option<SearchRepository>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchCommitDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchRepository {
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
}

/// Normalized push: every commit in it is attributed to the push timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PushEvent {
    pub timestamp_utc: DateTime<Utc>,
    pub repository_name: String,
    pub commit_count: u32,
}

/// Normalized commit record shared by the events feed and commit search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentCommit {
    pub sha: String,
    pub repository: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::serde_helpers::decode_each;
    use serde_json::{json, Value};

    #[test]
    fn test_push_event_decodes_commits() {
        let event: RawEvent = serde_json::from_value(json!({
            "id": "1",
            "type": "PushEvent",
            "created_at": "2024-05-04T10:00:00Z",
            "repo": { "name": "octo/gitpulse" },
            "payload": {
                "commits": [
                    { "sha": "a1", "message": "init", "author": { "name": "Octo", "email": "o@x.io" } }
                ]
            }
        }))
        .unwrap();

        assert!(event.is_push());
        assert_eq!(event.payload.commits.map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_null_payload_is_tolerated() {
        let event: RawEvent = serde_json::from_value(json!({
            "type": "WatchEvent",
            "created_at": "2024-05-04T10:00:00Z",
            "payload": null
        }))
        .unwrap();

        assert!(!event.is_push());
        assert!(event.payload.commits.is_none());
        assert_eq!(event.repo.name, "");
    }

    #[test]
    fn test_null_commit_entries_are_skipped() {
        let event: RawEvent = serde_json::from_value(json!({
            "type": "PushEvent",
            "created_at": "2024-05-04T10:00:00Z",
            "repo": { "name": "octo/gitpulse" },
            "payload": { "commits": [null, { "sha": "b2", "message": "fix" }] }
        }))
        .unwrap();

        let commits = event.payload.commits.unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].sha, "b2");
    }

    #[test]
    fn test_mixed_event_feed_keeps_good_events() {
        let feed: Vec<Value> = serde_json::from_value(json!([
            {
                "type": "PushEvent",
                "created_at": "2024-05-04T10:00:00Z",
                "payload": { "commits": [{ "sha": "a1" }] }
            },
            {
                "type": "PushEvent",
                "created_at": "yesterday",
                "payload": { "commits": [{ "sha": "a2" }] }
            },
            {
                "type": "PushEvent",
                "created_at": "2024-05-05T10:00:00Z",
                "payload": { "commits": [null] }
            }
        ]))
        .unwrap();

        let events: Vec<RawEvent> = decode_each(feed, "event");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].payload.commits.as_ref().map(Vec::len), Some(1));
        assert_eq!(events[1].payload.commits.as_ref().map(Vec::len), Some(0));
    }

    #[test]
    fn test_search_response_skips_bad_items() {
        let response: SearchCommitsResponse = serde_json::from_value(json!({
            "total_count": 2,
            "items": [
                { "sha": "c3", "commit": { "message": "ok", "author": { "date": "2024-05-01T00:00:00Z" } } },
                { "sha": "c4", "commit": { "author": { "date": 17 } } }
            ]
        }))
        .unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].sha, "c3");
    }
}
