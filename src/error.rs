//! Error types for the dominance reporter

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur on a single request to the upstream source
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network request failed (connectivity or timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Unexpected response shape, status, or missing field
    #[error("Upstream error: {0}")]
    Upstream(String),
}

/// Errors that terminate a reporting run
#[derive(Debug, Error)]
pub enum RunError {
    /// HTTP client initialization failed
    #[error("Failed to initialize HTTP client: {0}")]
    Init(SourceError),

    /// Retry budget exhausted fetching the markets list; wraps the last cause
    #[error("Failed to fetch market data after {attempts} attempts: {source}")]
    Fetch {
        attempts: u32,
        #[source]
        source: SourceError,
    },

    /// Global market cap fetch failed (single attempt, no retry)
    #[error("Failed to fetch global market cap: {0}")]
    Global(#[from] SourceError),

    /// Invariant violation in fetched data
    #[error("Data error: {0}")]
    Data(String),

    /// Output file exists and cannot be removed (likely open elsewhere)
    #[error("Output file is busy, close it and retry: {path}")]
    ResourceBusy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Spreadsheet serialization failed
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// Filesystem error while writing the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RunError {
    /// Creates a Data error
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
