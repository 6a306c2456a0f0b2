//! Constants for the dominance reporter
//!
//! All configuration is centralized here. The tool takes no runtime
//! configuration - it operates with these compile-time constants.

/// CoinGecko API endpoint for global aggregate market data
pub const COINGECKO_GLOBAL_URL: &str = "https://api.coingecko.com/api/v3/global";

/// CoinGecko API endpoint for ranked per-asset market data
pub const COINGECKO_MARKETS_URL: &str = "https://api.coingecko.com/api/v3/coins/markets";

/// Quote currency for all requests
pub const VS_CURRENCY: &str = "usd";

/// Number of assets to fetch and report
pub const TOP_N: usize = 10;

/// HTTP request timeout when fetching market data (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of attempts when fetching the markets list
pub const MAX_FETCH_ATTEMPTS: u32 = 3;

/// Base backoff delay between attempts (in seconds); the delay after
/// failed attempt N is `N * BACKOFF_BASE_SECS`
pub const BACKOFF_BASE_SECS: u64 = 2;

/// User agent for HTTP requests
pub const USER_AGENT: &str = "crypto-dominance/1.0";

/// Output spreadsheet filename
pub const XLSX_FILENAME: &str = "top10_crypto_usd.xlsx";

/// Sheet name inside the output workbook
pub const SHEET_NAME: &str = "Top10_Crypto_USD";

/// Maximum auto-sized column width in the output workbook
pub const MAX_COLUMN_WIDTH: f64 = 30.0;
