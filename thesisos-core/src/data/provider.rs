//! Data provider trait and the fetch error type.
//!
//! The DataProvider trait abstracts over where company info comes from
//! (Yahoo Finance, a fixture directory) so the session can be driven by a
//! mock in tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{InfoMap, Ticker};

/// The one message users see when a fetch fails, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please check the ticker.";

/// Raised when the provider call fails or returns nothing usable.
///
/// Variants record the cause for logs and the error history; the dashboard
/// collapses all of them into [`FETCH_FAILED_MESSAGE`].
#[derive(Debug, Error)]
pub enum DataFetchError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("authentication required: {0}")]
    AuthenticationRequired(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("provider returned nothing usable for {symbol}")]
    EmptyResponse { symbol: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("invalid ticker '{input}': {reason}")]
    InvalidTicker { input: String, reason: String },

    #[error("data error: {0}")]
    Other(String),
}

impl DataFetchError {
    /// Message safe to show in the main view.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// Short category tag for the error history.
    pub fn category(&self) -> &'static str {
        match self {
            DataFetchError::NetworkUnreachable(_) | DataFetchError::RateLimited { .. } => "NET",
            DataFetchError::AuthenticationRequired(_) => "AUTH",
            DataFetchError::SymbolNotFound { .. }
            | DataFetchError::EmptyResponse { .. }
            | DataFetchError::InvalidTicker { .. } => "TICKER",
            DataFetchError::ResponseFormatChanged(_) | DataFetchError::Other(_) => "DATA",
        }
    }
}

/// Where the info came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    YahooFinance,
    Fixture,
}

impl DataSource {
    pub fn label(self) -> &'static str {
        match self {
            DataSource::YahooFinance => "Yahoo Finance",
            DataSource::Fixture => "fixture",
        }
    }
}

/// Result of a successful lookup for a single ticker.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub ticker: Ticker,
    pub info: InfoMap,
    pub source: DataSource,
}

/// Trait for company-info providers.
///
/// One call per submission, blocking, no retries at this layer.
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the info map for a ticker.
    fn fetch_info(&self, ticker: &Ticker) -> Result<FetchResult, DataFetchError>;
}
