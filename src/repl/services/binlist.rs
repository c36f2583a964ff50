//! binlist-style HTTP lookup backend
//!
//! Talks to any service speaking the binlist API: `GET {endpoint}/{bin}`
//! returning card metadata as JSON, 404 for unknown BINs.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::LookupProfile;
use crate::repl::models::CardInfo;
use crate::repl::services::lookup::{CardLookup, LookupError};

/// HTTP client for a binlist-compatible BIN metadata service
pub struct BinlistClient {
    http: reqwest::Client,
    endpoint: String,
}

impl BinlistClient {
    /// Build a client from a lookup profile
    pub fn new(profile: &LookupProfile) -> Result<Self> {
        tracing::debug!("Creating BinlistClient for '{}'", profile.endpoint());
        let http = reqwest::Client::builder()
            .timeout(profile.timeout())
            .user_agent(concat!("binlook/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: profile.endpoint().trim_end_matches('/').to_string(),
        })
    }
}

/// Map a response status onto the error taxonomy; `None` means usable
fn classify_status(status: StatusCode) -> Option<LookupError> {
    if status == StatusCode::NOT_FOUND {
        Some(LookupError::NoData)
    } else if !status.is_success() {
        Some(LookupError::Server {
            status: Some(status.as_u16()),
        })
    } else {
        None
    }
}

/// Map a transport-level failure onto the error taxonomy
fn classify_transport(err: &reqwest::Error) -> LookupError {
    if err.is_connect() || err.is_timeout() {
        LookupError::NoInternet
    } else {
        LookupError::Server {
            status: err.status().map(|s| s.as_u16()),
        }
    }
}

#[async_trait]
impl CardLookup for BinlistClient {
    async fn find(&self, bin: &str) -> Result<CardInfo, LookupError> {
        let url = format!("{}/{}", self.endpoint, bin);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Accept-Version", "3")
            .send()
            .await
            .map_err(|err| {
                tracing::debug!("Lookup transport failure: {}", err);
                classify_transport(&err)
            })?;

        if let Some(err) = classify_status(response.status()) {
            tracing::debug!("Lookup for '{}' failed: {}", bin, err);
            return Err(err);
        }

        let card: CardInfo = response.json().await.map_err(|err| {
            tracing::warn!("Undecodable lookup response: {}", err);
            LookupError::Server { status: None }
        })?;

        // A 200 with nothing in it is "no data", not content
        if card.is_empty() {
            return Err(LookupError::NoData);
        }

        Ok(card)
    }
}
