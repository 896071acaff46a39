use serde::{Deserialize, Serialize};

/// Analyst earnings estimates for a symbol.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsEstimates {
    pub success: bool,
    pub symbol: String,

    /// Number of estimates returned, equals `earnings_estimates.len()`
    pub count: usize,

    pub earnings_estimates: Vec<EarningsEstimate>,
}

impl EarningsEstimates {
    pub fn new(symbol: impl Into<String>, earnings_estimates: Vec<EarningsEstimate>) -> Self {
        Self {
            success: true,
            symbol: symbol.into(),
            count: earnings_estimates.len(),
            earnings_estimates,
        }
    }
}

/// One earnings estimate row.
///
/// "Date" is capitalized and the revenue analyst count is a float on
/// the wire; both are published output keys.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EarningsEstimate {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "estimateAverageEPS")]
    pub estimate_average_eps: f64,
    #[serde(rename = "estimateHighEPS")]
    pub estimate_high_eps: f64,
    #[serde(rename = "estimateLowEPS")]
    pub estimate_low_eps: f64,

    #[serde(rename = "numberOfAnalysts")]
    pub number_of_analysts: i64,

    #[serde(rename = "estimateAverageRevenue")]
    pub estimate_average_revenue: f64,
    #[serde(rename = "numberOfAnalystsRevenue")]
    pub number_of_analysts_revenue: f64,
}
