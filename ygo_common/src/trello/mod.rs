//! Trello API client for the tracking board.
//!
//! Lookups of boards and lists by name, reading and archiving cards, card
//! creation with label colours, and the label-id cache.

mod boards;
mod cards;
mod labels;

pub use labels::LabelCache;

use std::time::Duration;

use log::debug;
use reqwest::{Client, Method, Response};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::rate_limit::RateLimiter;

const TRELLO_API_URL: &str = "https://api.trello.com/1";

/// Trello allows 100 requests per 10 seconds per token
const MAX_CALLS: usize = 100;
const PERIOD: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Deserialize)]
pub struct TrelloBoard {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrelloList {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrelloCard {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrelloLabel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Rate-limited Trello REST client
pub struct TrelloClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    key: String,
    token: String,
    limiter: RateLimiter,
}

impl TrelloClient {
    pub fn new(key: String, token: String) -> Self {
        log::info!("Creating Trello API client");
        Self {
            client: Client::new(),
            base_url: TRELLO_API_URL.to_string(),
            key,
            token,
            limiter: RateLimiter::new(MAX_CALLS, PERIOD),
        }
    }

    /// Point the client at another API root (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Send an authenticated request after acquiring a rate-limit permit.
    ///
    /// Non-success statuses become `Error::HttpStatus`; the request is
    /// described without credentials.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Response> {
        self.limiter.acquire().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("Trello request: {} {}", method, describe(path, params));

        let response = self
            .client
            .request(method, &url)
            .query(&[("key", self.key.as_str()), ("token", self.token.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                status: response.status(),
                request: describe(path, params),
            });
        }

        Ok(response)
    }
}

fn describe(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{}?{}", path, query.join("&"))
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
