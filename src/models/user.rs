use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::null_as_default;

/// Snapshot of the authenticated account at fetch time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(rename = "login")]
    pub handle: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub following: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_gists: u32,
}

impl Account {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            id: 0,
            handle: handle.into(),
            name: None,
            email: None,
            avatar_url: None,
            followers: 0,
            following: 0,
            public_gists: 0,
        }
    }
}

/// A repository as listed for the account. Numeric counters missing from the
/// payload (or sent as `null`) decode as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Repository {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: RepositoryOwner,
    pub language: Option<String>,
    #[serde(rename = "private", default, deserialize_with = "null_as_default")]
    pub is_private: bool,
    #[serde(rename = "fork", default, deserialize_with = "null_as_default")]
    pub is_fork: bool,
    #[serde(rename = "stargazers_count", default, deserialize_with = "null_as_default")]
    pub star_count: u64,
    #[serde(rename = "forks_count", default, deserialize_with = "null_as_default")]
    pub fork_count: u64,
    #[serde(rename = "watchers_count", default, deserialize_with = "null_as_default")]
    pub watcher_count: u64,
    #[serde(rename = "size", default, deserialize_with = "null_as_default")]
    pub size_kb: u64,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RepositoryOwner {
    #[serde(default, deserialize_with = "null_as_default")]
    pub login: String,
}

impl Repository {
    pub fn owner_handle(&self) -> &str {
        &self.owner.login
    }

    pub fn is_owned_by(&self, account: &Account) -> bool {
        self.owner_handle() == account.handle
    }

    /// The detected language, ignoring blank values.
    pub fn detected_language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::serde_helpers::decode_each;
    use serde_json::{json, Value};

    #[test]
    fn test_repository_missing_counters_default_to_zero() {
        let repo: Repository = serde_json::from_value(json!({
            "id": 7,
            "name": "dotfiles",
            "owner": { "login": "octo" },
            "stargazers_count": null,
            "private": false
        }))
        .unwrap();

        assert_eq!(repo.star_count, 0);
        assert_eq!(repo.fork_count, 0);
        assert_eq!(repo.watcher_count, 0);
        assert_eq!(repo.size_kb, 0);
        assert_eq!(repo.updated_at, None);
        assert_eq!(repo.owner_handle(), "octo");
    }

    #[test]
    fn test_repository_wire_names() {
        let repo: Repository = serde_json::from_value(json!({
            "id": 1,
            "name": "gitpulse",
            "full_name": "octo/gitpulse",
            "owner": { "login": "octo" },
            "language": "Rust",
            "private": true,
            "fork": true,
            "stargazers_count": 12,
            "forks_count": 3,
            "watchers_count": 12,
            "size": 2048,
            "updated_at": "2024-03-01T12:00:00Z"
        }))
        .unwrap();

        assert!(repo.is_private);
        assert!(repo.is_fork);
        assert_eq!(repo.star_count, 12);
        assert_eq!(repo.size_kb, 2048);
        assert_eq!(repo.detected_language(), Some("Rust"));
        assert!(repo.updated_at.is_some());
    }

    #[test]
    fn test_blank_language_is_absent() {
        let repo = Repository {
            language: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.detected_language(), None);
    }

    #[test]
    fn test_account_login_maps_to_handle() {
        let account: Account = serde_json::from_value(json!({
            "login": "octo",
            "id": 42,
            "followers": 10
        }))
        .unwrap();

        assert_eq!(account.handle, "octo");
        assert_eq!(account.followers, 10);
        assert_eq!(account.public_gists, 0);
    }

    #[test]
    fn test_malformed_repository_does_not_drop_the_rest() {
        let page: Vec<Value> = serde_json::from_value(json!([
            { "id": 1, "name": "good", "owner": { "login": "octo" }, "stargazers_count": 5 },
            { "id": 2, "name": "bad-date", "owner": { "login": "octo" }, "updated_at": "not-a-date" },
            { "id": 3, "name": "bad-stars", "owner": { "login": "octo" }, "stargazers_count": "many" },
            { "id": 4, "name": "negative", "owner": { "login": "octo" }, "forks_count": -1 },
            { "id": 5, "name": "also-good", "owner": { "login": "octo" } }
        ]))
        .unwrap();

        let repos: Vec<Repository> = decode_each(page, "repository");
        let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["good", "also-good"]);
        assert_eq!(repos[0].star_count, 5);
    }
}
