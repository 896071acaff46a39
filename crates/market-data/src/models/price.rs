use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest trade price for a symbol.
///
/// The timestamp is the capture time (wall clock), not anything the
/// provider reported; two identical requests differ only in `time`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Symbol as requested by the caller
    pub symbol: String,

    /// Latest trade price
    pub price: f64,

    /// Quote currency, always "USD" for this provider
    pub currency: String,

    /// Capture timestamp, RFC 3339
    pub time: String,
}

impl PriceQuote {
    /// Build a quote stamped with the given capture instant.
    pub fn at(symbol: impl Into<String>, price: f64, captured: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            currency: "USD".to_string(),
            time: captured.to_rfc3339(),
        }
    }
}
