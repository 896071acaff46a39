use serde::{Deserialize, Serialize};

/// Flat company profile from the OVERVIEW report.
///
/// Every field defaults to an empty string when the provider omits it;
/// a sparse overview is still a successful result.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOverview {
    /// Symbol as requested by the caller
    pub symbol: String,

    /// Asset type (e.g., "Common Stock")
    pub asset_type: String,

    /// Business description
    pub description: String,

    /// Country of domicile
    pub country: String,

    /// Industry within sector
    pub industry: String,

    /// Fiscal date of the latest reported quarter
    pub latest_quarter: String,
}
