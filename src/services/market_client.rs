//! CoinGecko markets endpoint client
//!
//! Issues a single best-effort GET for the tracked coins and decodes the
//! JSON array leniently. No retries; a failure is surfaced once and the
//! caller decides what to do with it.

use crate::constants::{COIN_IDS, DEFAULT_BASE_URL, VS_CURRENCY};
use crate::models::{decode_market_coins, CoinRecord};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error as ThisError;
use tracing::{debug, warn};

/// Errors from a single fetch attempt
#[derive(ThisError, Debug)]
pub enum FetchError {
    /// Transport-level failure (connect, DNS, timeout, non-2xx status)
    #[error("Network error: {0}")]
    Transport(String),

    /// Body was not a JSON array of records
    #[error("Unexpected response shape")]
    Decode,
}

/// Client for the coin markets endpoint
pub struct MarketClient {
    client: Client,
    base_url: String,
}

impl MarketClient {
    /// Create a client against an explicit base URL (tests point this at a
    /// local stub)
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();

        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Create a client against the production endpoint
    pub fn with_default_endpoint() -> Result<Self, FetchError> {
        Self::new(DEFAULT_BASE_URL)
    }

    fn markets_url(&self) -> String {
        format!(
            "{}/api/v3/coins/markets?vs_currency={}&ids={}",
            self.base_url,
            VS_CURRENCY,
            COIN_IDS.join(",")
        )
    }

    /// Fetch the tracked coins once
    ///
    /// An empty decoded result is success, not an error; malformed records
    /// are dropped individually per the decode policy.
    pub async fn fetch_coins(&self) -> Result<Vec<CoinRecord>, FetchError> {
        let url = self.markets_url();
        debug!("Fetching coin markets from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let value: Value = serde_json::from_str(&body).map_err(|_| FetchError::Decode)?;
        let entries = value.as_array().ok_or(FetchError::Decode)?;

        let coins = decode_market_coins(entries);
        if coins.len() < entries.len() {
            warn!(
                "Dropped {} malformed records out of {}",
                entries.len() - coins.len(),
                entries.len()
            );
        }

        Ok(coins)
    }
}
