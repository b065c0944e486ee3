//! Path of Exile stash API client
//!
//! Fetches one stash tab per request through a local token bucket. Responses
//! are classified into [`ApiError`] variants so the caller can tell a
//! throttled or flaky request from a dead session.

mod error;
mod limiter;

pub use error::ApiError;
pub use limiter::RateLimiter;

use anyhow::Context;
use reqwest::header::{COOKIE, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::normalize::RawItem;

pub const POE_BASE_URL: &str = "https://www.pathofexile.com";
const STASH_ITEMS_PATH: &str = "/character-window/get-stash-items";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Whose stash to read
#[derive(Debug, Clone)]
pub struct StashLocation {
    pub account_name: String,
    pub league: String,
    pub realm: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StashResponse {
    #[serde(default)]
    pub num_tabs: u32,
    #[serde(default)]
    pub items: Vec<RawItem>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: i64,
    #[serde(default)]
    message: String,
}

pub struct PoeClient {
    http: reqwest::Client,
    base_url: String,
    session_id: String,
    location: StashLocation,
    limiter: RateLimiter,
}

impl PoeClient {
    pub fn new(session_id: &str, location: StashLocation, limiter: RateLimiter) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: POE_BASE_URL.to_string(),
            session_id: session_id.to_string(),
            location,
            limiter,
        })
    }

    /// Point the client at another host (local mirrors, tests)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn location(&self) -> &StashLocation {
        &self.location
    }

    /// Fetch the items of one stash tab
    pub async fn get_stash_items(&self, tab_index: u32) -> Result<StashResponse, ApiError> {
        if !self.limiter.try_acquire() {
            debug!(tab = tab_index, "local rate limit exceeded");
            return Err(ApiError::RateLimited);
        }

        let tab = tab_index.to_string();
        let url = format!("{}{}", self.base_url, STASH_ITEMS_PATH);
        info!(
            account = %self.location.account_name,
            league = %self.location.league,
            tab = tab_index,
            "requesting stash items"
        );

        let response = self
            .http
            .get(&url)
            .header(COOKIE, format!("POESESSID={}", self.session_id))
            .header(USER_AGENT, concat!("stashvision/", env!("CARGO_PKG_VERSION")))
            .query(&[
                ("accountName", self.location.account_name.as_str()),
                ("league", self.location.league.as_str()),
                ("tabIndex", tab.as_str()),
                ("tabs", "0"),
                ("realm", self.location.realm.as_str()),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, length = body.len(), "request complete");

        parse_stash_response(status, &body).inspect_err(|err| {
            warn!(tab = tab_index, error = %err, "stash request failed");
        })
    }
}

/// Decode a stash response body, classifying API and HTTP failures
pub fn parse_stash_response(status: u16, body: &[u8]) -> Result<StashResponse, ApiError> {
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
        return Err(ApiError::from_code(envelope.error.code, envelope.error.message));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status));
    }
    serde_json::from_slice(body).map_err(|err| ApiError::Decode(err.to_string()))
}
