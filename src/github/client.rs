use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};

use crate::config::DEFAULT_API_URL;
use crate::error::{Error, Result};
use crate::github::paginator::Paginator;
use crate::github::source::ActivitySource;
use crate::models::{Account, RawEvent, Repository, SearchCommit, SearchCommitsResponse};

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitpulse/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_authenticated_user(&self) -> Result<Account> {
        let url = format!("{}/user", self.base_url);
        tracing::info!("Fetching authenticated user");

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND || response.status() == StatusCode::UNAUTHORIZED {
            return Err(Error::UserNotFound("authenticated user".to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch user: {} - {}",
                status, body
            )));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Every repository the token can see, including ones owned by others.
    pub async fn get_repositories(&self) -> Result<Vec<Repository>> {
        let url = format!("{}/user/repos?type=all&sort=updated", self.base_url);
        tracing::info!("Fetching repositories");
        Paginator::new(&self.client).fetch_all(&url, 100).await
    }

    pub async fn get_public_events(&self, handle: &str, limit: u32) -> Result<Vec<RawEvent>> {
        let url = format!("{}/users/{}/events/public", self.base_url, handle);
        tracing::info!("Fetching public events for: {}", handle);
        Paginator::new(&self.client).fetch_limited(&url, 100, limit).await
    }

    pub async fn search_commits_by_author(
        &self,
        handle: &str,
        limit: u32,
    ) -> Result<Vec<SearchCommit>> {
        let url = format!(
            "{}/search/commits?q=author:{}&sort=author-date&order=desc&per_page={}",
            self.base_url,
            handle,
            limit.clamp(1, 100)
        );
        tracing::debug!("Searching commits: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::GitHubApi(format!(
                "Commit search unavailable for {}: {}",
                handle, status
            )));
        }

        let body = response.text().await?;
        let mut items = serde_json::from_str::<SearchCommitsResponse>(&body)?.items;
        items.truncate(limit as usize);
        Ok(items)
    }

}

#[async_trait]
impl ActivitySource for GitHubClient {
    async fn fetch_account(&self) -> Result<Account> {
        self.get_authenticated_user().await
    }

    async fn fetch_repositories(&self) -> Result<Vec<Repository>> {
        self.get_repositories().await
    }

    async fn fetch_public_events(&self, handle: &str, limit: u32) -> Result<Vec<RawEvent>> {
        self.get_public_events(handle, limit).await
    }

    async fn search_commits(&self, handle: &str, limit: u32) -> Result<Vec<SearchCommit>> {
        self.search_commits_by_author(handle, limit).await
    }

    fn name(&self) -> &str {
        "github"
    }
}
