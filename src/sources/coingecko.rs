//! CoinGecko market data source implementation

use crate::{
    config::Config,
    constants::{TOP_N, VS_CURRENCY},
    error::SourceError,
    source::{MarketDataSource, MarketRow},
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::collections::HashMap;

/// CoinGecko response for the /global endpoint
#[derive(Debug, Deserialize)]
struct GlobalResponse {
    data: GlobalData,
}

#[derive(Debug, Deserialize)]
struct GlobalData {
    /// Total market cap keyed by quote currency
    total_market_cap: HashMap<String, f64>,
}

/// CoinGecko market data source
pub struct CoinGeckoSource {
    client: Client,
    global_url: String,
    markets_url: String,
}

impl CoinGeckoSource {
    /// Creates a new CoinGecko source from the run configuration
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(SourceError::Network)?;

        Ok(Self {
            client,
            global_url: config.global_url.clone(),
            markets_url: config.markets_url.clone(),
        })
    }

    /// Maps a non-success status into a source error, draining the body
    /// into the message for diagnostics
    async fn check_status(response: Response) -> Result<Response, SourceError> {
        if response.status().as_u16() == 429 {
            return Err(SourceError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            return Err(SourceError::Upstream(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoSource {
    async fn fetch_global_market_cap(&self) -> Result<f64, SourceError> {
        tracing::debug!(url = %self.global_url, "Fetching global market data");

        let response = self
            .client
            .get(&self.global_url)
            .send()
            .await
            .map_err(SourceError::Network)?;
        let response = Self::check_status(response).await?;

        let global: GlobalResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Upstream(format!("Failed to parse global response: {e}")))?;

        global
            .data
            .total_market_cap
            .get(VS_CURRENCY)
            .copied()
            .ok_or_else(|| {
                SourceError::Upstream(format!(
                    "Global response missing total_market_cap.{VS_CURRENCY}"
                ))
            })
    }

    async fn fetch_markets(&self) -> Result<Vec<MarketRow>, SourceError> {
        tracing::debug!(url = %self.markets_url, "Fetching markets listing");

        let per_page = TOP_N.to_string();
        let response = self
            .client
            .get(&self.markets_url)
            .query(&[
                ("vs_currency", VS_CURRENCY),
                ("order", "market_cap_desc"),
                ("per_page", per_page.as_str()),
                ("page", "1"),
                ("sparkline", "false"),
                ("price_change_percentage", "24h"),
            ])
            .send()
            .await
            .map_err(SourceError::Network)?;
        let response = Self::check_status(response).await?;

        let rows: Vec<MarketRow> = response
            .json()
            .await
            .map_err(|e| SourceError::Upstream(format!("Failed to parse markets response: {e}")))?;

        tracing::debug!(count = rows.len(), "Fetched markets listing");

        Ok(rows)
    }

    fn source_name(&self) -> &'static str {
        "coingecko"
    }
}
