//! Immutable run configuration
//!
//! Bundles the endpoint, retry and output settings so the client and the
//! spreadsheet writer receive them at construction instead of reaching
//! for shared state. Defaults come from [`crate::constants`].

use crate::constants::{
    BACKOFF_BASE_SECS, COINGECKO_GLOBAL_URL, COINGECKO_MARKETS_URL, MAX_FETCH_ATTEMPTS,
    REQUEST_TIMEOUT_SECS, SHEET_NAME, USER_AGENT, XLSX_FILENAME,
};
use std::time::Duration;

/// Configuration for one reporting run
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint for global aggregate market data
    pub global_url: String,

    /// Endpoint for the ranked markets listing
    pub markets_url: String,

    /// Identifying client header sent with every request
    pub user_agent: String,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// Attempt budget for the markets fetch
    pub max_fetch_attempts: u32,

    /// Base backoff; the delay after failed attempt N is `N * base`
    pub backoff_base: Duration,

    /// Output spreadsheet filename
    pub xlsx_filename: String,

    /// Sheet name inside the output workbook
    pub sheet_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global_url: COINGECKO_GLOBAL_URL.to_string(),
            markets_url: COINGECKO_MARKETS_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            max_fetch_attempts: MAX_FETCH_ATTEMPTS,
            backoff_base: Duration::from_secs(BACKOFF_BASE_SECS),
            xlsx_filename: XLSX_FILENAME.to_string(),
            sheet_name: SHEET_NAME.to_string(),
        }
    }
}
