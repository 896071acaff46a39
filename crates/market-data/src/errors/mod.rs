//! Error types for the market data crate.
//!
//! The `Display` output of [`MarketDataError`] is part of the wire
//! contract: the dispatcher copies it verbatim into the response
//! envelope's `error` field.

use thiserror::Error;

/// Errors that can occur while fetching a report from the provider.
///
/// Two failure classes, deliberately coarse: the protocol makes no
/// distinction between transient and permanent failures, and nothing
/// retries.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider answered with a well-formed payload that carries
    /// no usable data for the symbol (missing or empty top-level key).
    /// Semantically "valid call, no data".
    #[error("{0}")]
    NotFound(String),

    /// Network failure, non-2xx status, or an unparsable payload.
    /// The single transport failure class.
    #[error("Error fetching {report}: {message}")]
    Fetch {
        /// Human name of the report being fetched ("stock price", "news", ...)
        report: &'static str,
        /// Underlying cause
        message: String,
    },
}

impl MarketDataError {
    /// Shorthand for a transport-class failure on the given report.
    pub fn fetch(report: &'static str, message: impl Into<String>) -> Self {
        Self::Fetch {
            report,
            message: message.into(),
        }
    }

    /// Shorthand for a domain-level "no data" failure.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}
