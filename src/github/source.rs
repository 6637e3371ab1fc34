use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Account, RawEvent, Repository, SearchCommit};

/// Supplies the raw records the metrics pipeline consumes.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    async fn fetch_account(&self) -> Result<Account>;
    async fn fetch_repositories(&self) -> Result<Vec<Repository>>;
    /// Public events for `handle`, most recent first, at most `limit` entries.
    async fn fetch_public_events(&self, handle: &str, limit: u32) -> Result<Vec<RawEvent>>;
    async fn search_commits(&self, handle: &str, limit: u32) -> Result<Vec<SearchCommit>>;
    fn name(&self) -> &str;
}
