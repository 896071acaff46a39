//! Report provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{
    BalanceSheets, CompanyOverview, EarningsEstimates, IncomeStatements, InsiderActivity,
    NewsFeed, PriceQuote,
};

/// Trait for financial report providers.
///
/// One method per report type. Each call performs at most one remote
/// fetch and returns either the normalized result or a
/// [`MarketDataError`] whose display string is the wire-visible error
/// message. `limit` caps the length of list results; `None` means take
/// everything the provider returned.
///
/// The dispatcher is generic over this trait so tests can substitute
/// a canned in-process provider.
#[async_trait]
pub trait ReportProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Latest trade price for a symbol, stamped with the capture time.
    async fn stock_price(&self, symbol: &str) -> Result<PriceQuote, MarketDataError>;

    /// Latest news articles for one or more ticker symbols.
    async fn stock_news(
        &self,
        symbols: &str,
        limit: Option<usize>,
    ) -> Result<NewsFeed, MarketDataError>;

    /// Flat company profile.
    async fn company_overview(&self, symbol: &str) -> Result<CompanyOverview, MarketDataError>;

    /// Recent insider transactions.
    async fn insider_transactions(
        &self,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<InsiderActivity, MarketDataError>;

    /// Annual income statements.
    async fn income_statement(
        &self,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<IncomeStatements, MarketDataError>;

    /// Analyst earnings estimates.
    async fn earnings_estimates(
        &self,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<EarningsEstimates, MarketDataError>;

    /// Annual balance sheets. Not currently exposed as a dispatched
    /// method, but part of the gateway surface.
    async fn balance_sheet(
        &self,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<BalanceSheets, MarketDataError>;
}
