use serde::{Deserialize, Serialize};

/// Insider transaction listing for a symbol.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InsiderActivity {
    pub success: bool,
    pub symbol: String,

    /// Number of transactions returned, equals `transactions.len()`
    pub count: usize,

    pub transactions: Vec<InsiderTransaction>,
}

impl InsiderActivity {
    pub fn new(symbol: impl Into<String>, transactions: Vec<InsiderTransaction>) -> Self {
        Self {
            success: true,
            symbol: symbol.into(),
            count: transactions.len(),
            transactions,
        }
    }
}

/// One insider transaction row.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsiderTransaction {
    pub transaction_date: String,

    /// Ticker the transaction applies to (may differ from the request
    /// symbol for multi-listed executives)
    pub symbol: String,

    pub executive_name: String,
    pub executive_title: String,
    pub security_type: String,

    /// "A" for acquisition, "D" for disposal
    pub acquisition_or_disposal: String,

    pub shares: f64,
    pub share_price: f64,
}
