use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::serde_helpers::{decode_each, short_type_name};

struct Page<T> {
    items: Vec<T>,
    received: usize,
    has_next: bool,
}

pub struct Paginator<'a> {
    client: &'a Client,
}

fn has_next_page(response: &Response) -> bool {
    response
        .headers()
        .get("link")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("rel=\"next\""))
        .unwrap_or(false)
}

/// A page must be a JSON array; elements that fail to decode are skipped.
fn decode_page<T: DeserializeOwned>(body: &str, has_next: bool) -> Result<Page<T>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let received = values.len();

    Ok(Page {
        items: decode_each(values, short_type_name::<T>()),
        received,
        has_next,
    })
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        base_url: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Page<T>> {
        let separator = if base_url.contains('?') { "&" } else { "?" };
        let url = format!("{}{}per_page={}&page={}", base_url, separator, per_page, page);

        tracing::debug!("Fetching: {}", url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch {}: {} - {}",
                url, status, body
            )));
        }

        let has_next = has_next_page(&response);
        let body = response.text().await?;
        decode_page(&body, has_next)
    }

    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        base_url: &str,
        per_page: u32,
    ) -> Result<Vec<T>> {
        self.fetch_limited(base_url, per_page, u32::MAX).await
    }

    pub async fn fetch_limited<T: DeserializeOwned>(
        &self,
        base_url: &str,
        per_page: u32,
        max_items: u32,
    ) -> Result<Vec<T>> {
        let per_page = per_page.min(max_items).max(1);
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let page_result = self.fetch_page::<T>(base_url, per_page, page).await?;
            all_items.extend(page_result.items);

            // Short pages end the listing; count what arrived, not what decoded.
            if all_items.len() >= max_items as usize
                || !page_result.has_next
                || page_result.received < per_page as usize
            {
                break;
            }

            page += 1;
        }

        all_items.truncate(max_items as usize);
        Ok(all_items)
    }
}
