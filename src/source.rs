//! Source abstraction for fetching market data from the upstream API
//!
//! A source performs exactly one request per call; retry and backoff
//! live in [`crate::client::MarketDataClient`].

use crate::error::SourceError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// One raw row of the upstream markets listing, prior to normalization.
///
/// Every field may be absent; the client decides what to do about that.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketRow {
    /// Upstream market cap rank
    #[serde(default, rename = "market_cap_rank")]
    pub rank: Option<u32>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Ticker symbol, as sent (usually lowercase)
    #[serde(default)]
    pub symbol: Option<String>,

    /// Current price in the quote currency
    #[serde(default, rename = "current_price")]
    pub price: Option<f64>,

    /// Market capitalization in the quote currency
    #[serde(default)]
    pub market_cap: Option<f64>,

    /// 24h price change percentage
    #[serde(default, rename = "price_change_percentage_24h")]
    pub change_24h: Option<f64>,
}

/// Trait for upstream market data sources
///
/// Each method issues a single request and surfaces every failure
/// immediately; callers own any retry policy.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetches the global aggregate market capitalization in USD
    async fn fetch_global_market_cap(&self) -> Result<f64, SourceError>;

    /// Fetches the ranked markets listing (market-cap descending)
    async fn fetch_markets(&self) -> Result<Vec<MarketRow>, SourceError>;

    /// Returns the name of this source
    fn source_name(&self) -> &'static str;
}

/// Trait for inserting delays between retry attempts
///
/// Injected into the client so tests can observe the backoff schedule
/// without real sleeps.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production delay backed by the tokio timer
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
