//! Error types for the scraper.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that can occur while building, fetching or parsing result pages.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Country code has no entry in the domain table.
    #[error("country ({0}) is currently not supported")]
    UnsupportedCountry(String),

    /// The search endpoint answered with something other than 200 OK.
    #[error("scraper received a non-200 status code ({0}) suggesting a ban")]
    BannedOrBlocked(StatusCode),

    /// Network-level failure (DNS, connection, TLS, body read).
    #[error("HTTP request failed: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// Failed to parse the result page.
    #[error("Failed to parse response: {0}")]
    ParseFailure(String),

    /// The identity pool was configured without any entries.
    #[error("identity pool is empty; at least one user agent is required")]
    EmptyIdentityPool,

    /// Proxy endpoint could not be parsed (strict mode only).
    #[error("Invalid proxy endpoint: {0}")]
    InvalidProxy(String),

    /// Invalid query parameters.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}
