//! # Crypto Dominance Reporter
//!
//! One-shot tool that fetches the ten largest cryptocurrencies by market
//! capitalization from CoinGecko, computes each asset's dominance (its
//! share of the global market cap), prints a column-aligned report to
//! stdout and writes the result to an .xlsx spreadsheet on the desktop.
//!
//! ## Usage
//!
//! ```no_run
//! use crypto_dominance::{dominance::enrich_records, Config, MarketDataClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MarketDataClient::new(&Config::default())?;
//! let global_cap = client.fetch_global_market_cap().await?;
//! let mut records = client.fetch_top10().await?;
//! enrich_records(&mut records, global_cap)?;
//!
//! for record in &records {
//!     println!("{}: {:.2}%", record.symbol, record.dominance_pct);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod dominance;
pub mod error;
pub mod report;
pub mod source;
pub mod sources;
pub mod spreadsheet;
pub mod types;

// Re-export commonly used types
pub use client::MarketDataClient;
pub use config::Config;
pub use error::{RunError, SourceError};
pub use types::AssetRecord;
