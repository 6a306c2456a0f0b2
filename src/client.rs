//! Market data client with retry and backoff
//!
//! Wraps a [`MarketDataSource`] and owns the retry policy: the global
//! market cap is fetched in a single attempt, while the markets listing
//! gets a bounded retry budget with linear backoff. Every failure mode
//! (rate limit, HTTP error, transport error, malformed or empty payload)
//! is retried the same way until the budget runs out.

use crate::{
    config::Config,
    constants::TOP_N,
    error::{RunError, SourceError},
    source::{Delay, MarketDataSource, MarketRow, TokioDelay},
    sources::CoinGeckoSource,
    types::AssetRecord,
};
use std::sync::Arc;
use std::time::Duration;

/// Client for retrieving normalized market data
pub struct MarketDataClient {
    source: Arc<dyn MarketDataSource>,
    delay: Arc<dyn Delay>,
    max_attempts: u32,
    backoff_base: Duration,
}

impl MarketDataClient {
    /// Creates a client backed by the live CoinGecko API
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        Ok(Self {
            source: Arc::new(CoinGeckoSource::new(config)?),
            delay: Arc::new(TokioDelay),
            max_attempts: config.max_fetch_attempts,
            backoff_base: config.backoff_base,
        })
    }

    /// Creates a client with a custom source and delay, using the default
    /// retry budget
    ///
    /// This is primarily for testing with mock sources.
    pub fn with_source(source: Arc<dyn MarketDataSource>, delay: Arc<dyn Delay>) -> Self {
        let config = Config::default();
        Self {
            source,
            delay,
            max_attempts: config.max_fetch_attempts,
            backoff_base: config.backoff_base,
        }
    }

    /// Fetches the global aggregate market capitalization in USD
    ///
    /// Single attempt: any failure surfaces immediately without retry.
    pub async fn fetch_global_market_cap(&self) -> Result<f64, RunError> {
        let global_cap = self.source.fetch_global_market_cap().await?;
        tracing::debug!(global_cap, "Fetched global market cap");
        Ok(global_cap)
    }

    /// Fetches the top-10 assets by market cap, in upstream order
    ///
    /// Retries any failure up to the attempt budget, sleeping
    /// `attempt * base` seconds between attempts. On exhaustion, returns
    /// [`RunError::Fetch`] wrapping the last error observed.
    pub async fn fetch_top10(&self) -> Result<Vec<AssetRecord>, RunError> {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            match self.fetch_markets_once().await {
                Ok(rows) => {
                    tracing::debug!(
                        count = rows.len(),
                        source = self.source.source_name(),
                        attempt,
                        "Fetched top assets"
                    );
                    return Ok(rows.into_iter().take(TOP_N).map(normalize_row).collect());
                }
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "Markets fetch failed"
                    );

                    if attempt < self.max_attempts {
                        self.delay.sleep(self.backoff_base * attempt).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(RunError::Fetch {
            attempts: self.max_attempts,
            source: last_error
                .unwrap_or_else(|| SourceError::Upstream("no attempts were made".to_string())),
        })
    }

    /// One markets request plus shape validation; an empty listing is a
    /// failure and gets retried like any other error
    async fn fetch_markets_once(&self) -> Result<Vec<MarketRow>, SourceError> {
        let rows = self.source.fetch_markets().await?;
        if rows.is_empty() {
            return Err(SourceError::Upstream("Empty markets response".to_string()));
        }
        Ok(rows)
    }
}

/// Normalizes a raw upstream row into an asset record
///
/// A missing symbol defaults to the empty string before uppercasing;
/// every other field passes through as-is. Dominance is filled in later
/// by [`crate::dominance::enrich_records`].
fn normalize_row(row: MarketRow) -> AssetRecord {
    AssetRecord {
        rank: row.rank,
        name: row.name,
        symbol: row.symbol.unwrap_or_default().to_uppercase(),
        price_usd: row.price,
        market_cap_usd: row.market_cap,
        change_24h: row.change_24h,
        dominance_pct: 0.0,
    }
}
