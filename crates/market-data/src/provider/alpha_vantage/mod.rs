//! Alpha Vantage report provider implementation.
//!
//! This module fetches financial reports from the Alpha Vantage API:
//! - Latest price via GLOBAL_QUOTE
//! - News via NEWS_SENTIMENT
//! - Company profile via OVERVIEW
//! - Insider transactions via INSIDER_TRANSACTIONS
//! - Income statements via INCOME_STATEMENT
//! - Earnings estimates via EARNINGS_ESTIMATES
//! - Balance sheets via BALANCE_SHEET
//!
//! Note: Alpha Vantage free tier is limited to 5 API calls per minute.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{
    BalanceSheet, BalanceSheets, CompanyOverview, EarningsEstimate, EarningsEstimates,
    IncomeStatement, IncomeStatements, InsiderActivity, InsiderTransaction, NewsArticle, NewsFeed,
    PriceQuote,
};
use crate::provider::ReportProvider;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";

/// Alpha Vantage report provider.
///
/// Holds the single long-lived HTTP client; constructed once at
/// startup and reused for every request.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

// ============================================================================
// Field helpers
// ============================================================================

/// Text field with the "missing -> empty string" default.
fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Numeric field with the "missing/null/unparsable -> 0.0" default.
/// Alpha Vantage reports numbers as strings, but a bare number is
/// accepted too; neither a missing field nor a bad value fails the row.
fn num(value: &Option<Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Integer field, same defaulting rules as [`num`].
fn int(value: &Option<Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Apply the caller-supplied cap to a provider list. `None` means take
/// the entire list.
fn capped<T>(rows: Vec<T>, limit: Option<usize>) -> Vec<T> {
    match limit {
        Some(n) => rows.into_iter().take(n).collect(),
        None => rows,
    }
}

// ============================================================================
// Response structures for the Alpha Vantage API
// ============================================================================

/// GLOBAL_QUOTE response
#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
}

#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: Option<Value>,
}

impl GlobalQuoteResponse {
    fn into_price(self, symbol: &str, captured: DateTime<Utc>) -> Result<PriceQuote, MarketDataError> {
        let price = self
            .global_quote
            .and_then(|q| q.price)
            .ok_or_else(|| {
                MarketDataError::not_found(format!("No data found for symbol: {}", symbol))
            })?;

        Ok(PriceQuote::at(symbol, num(&Some(price)), captured))
    }
}

/// NEWS_SENTIMENT response
#[derive(Debug, Deserialize)]
struct NewsResponse {
    feed: Option<Vec<FeedArticle>>,
}

#[derive(Debug, Deserialize)]
struct FeedArticle {
    title: Option<String>,
    url: Option<String>,
    summary: Option<String>,
    time_published: Option<String>,
    overall_sentiment_label: Option<String>,
    source: Option<String>,
    ticker_sentiment: Option<Vec<TickerSentiment>>,
}

#[derive(Debug, Deserialize)]
struct TickerSentiment {
    ticker: Option<String>,
}

impl FeedArticle {
    fn simplify(self) -> NewsArticle {
        let tickers = self
            .ticker_sentiment
            .unwrap_or_default()
            .into_iter()
            .filter_map(|t| t.ticker)
            .collect();

        NewsArticle {
            title: text(&self.title),
            url: text(&self.url),
            summary: text(&self.summary),
            time: text(&self.time_published),
            sentiment: text(&self.overall_sentiment_label),
            source: text(&self.source),
            tickers,
        }
    }
}

impl NewsResponse {
    fn into_feed(self, symbols: &str, limit: Option<usize>) -> Result<NewsFeed, MarketDataError> {
        let feed = self.feed.ok_or_else(|| {
            MarketDataError::not_found(format!("No news found for symbol: {}", symbols))
        })?;

        let articles = capped(feed, limit)
            .into_iter()
            .map(FeedArticle::simplify)
            .collect();

        Ok(NewsFeed::new(symbols, articles))
    }
}

/// OVERVIEW response
#[derive(Debug, Deserialize)]
struct OverviewResponse {
    #[serde(rename = "Symbol")]
    symbol: Option<String>,
    #[serde(rename = "AssetType")]
    asset_type: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "Country")]
    country: Option<String>,
    #[serde(rename = "Industry")]
    industry: Option<String>,
    #[serde(rename = "LatestQuarter")]
    latest_quarter: Option<String>,
}

impl OverviewResponse {
    fn into_overview(self, symbol: &str) -> Result<CompanyOverview, MarketDataError> {
        // Unknown symbols come back as an empty object
        if self.symbol.is_none() {
            return Err(MarketDataError::not_found(format!(
                "No company overview found for symbol: {}",
                symbol
            )));
        }

        Ok(CompanyOverview {
            symbol: symbol.to_string(),
            asset_type: text(&self.asset_type),
            description: text(&self.description),
            country: text(&self.country),
            industry: text(&self.industry),
            latest_quarter: text(&self.latest_quarter),
        })
    }
}

/// INSIDER_TRANSACTIONS response
#[derive(Debug, Deserialize)]
struct InsiderResponse {
    data: Option<Vec<RawInsiderTransaction>>,
}

#[derive(Debug, Deserialize)]
struct RawInsiderTransaction {
    transaction_date: Option<String>,
    ticker: Option<String>,
    executive: Option<String>,
    executive_title: Option<String>,
    security_type: Option<String>,
    acquisition_or_disposal: Option<String>,
    shares: Option<Value>,
    share_price: Option<Value>,
}

impl RawInsiderTransaction {
    fn into_row(self) -> InsiderTransaction {
        InsiderTransaction {
            transaction_date: text(&self.transaction_date),
            symbol: text(&self.ticker),
            executive_name: text(&self.executive),
            executive_title: text(&self.executive_title),
            security_type: text(&self.security_type),
            acquisition_or_disposal: text(&self.acquisition_or_disposal),
            shares: num(&self.shares),
            share_price: num(&self.share_price),
        }
    }
}

impl InsiderResponse {
    fn into_activity(
        self,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<InsiderActivity, MarketDataError> {
        let data = self.data.ok_or_else(|| {
            MarketDataError::not_found(format!(
                "No insider transactions found for symbol: {}",
                symbol
            ))
        })?;

        let transactions = capped(data, limit)
            .into_iter()
            .map(RawInsiderTransaction::into_row)
            .collect();

        Ok(InsiderActivity::new(symbol, transactions))
    }
}

/// INCOME_STATEMENT response (annual reports only)
#[derive(Debug, Deserialize)]
struct IncomeResponse {
    #[serde(rename = "annualReports")]
    annual_reports: Option<Vec<RawIncomeReport>>,
}

#[derive(Debug, Deserialize)]
struct RawIncomeReport {
    #[serde(rename = "fiscalDateEnding")]
    fiscal_date_ending: Option<String>,
    #[serde(rename = "reportedCurrency")]
    reported_currency: Option<String>,
    #[serde(rename = "grossProfit")]
    gross_profit: Option<Value>,
    #[serde(rename = "totalRevenue")]
    total_revenue: Option<Value>,
    #[serde(rename = "costOfRevenue")]
    cost_of_revenue: Option<Value>,
    #[serde(rename = "costOfGoodsAndServicesSold")]
    cost_of_goods_and_services_sold: Option<Value>,
    #[serde(rename = "operatingIncome")]
    operating_income: Option<Value>,
    #[serde(rename = "sellingGeneralAndAdministrative")]
    selling_general_and_administrative: Option<Value>,
    #[serde(rename = "researchAndDevelopment")]
    research_and_development: Option<Value>,
    #[serde(rename = "operatingExpenses")]
    operating_expenses: Option<Value>,
    #[serde(rename = "investmentIncomeNet")]
    investment_income_net: Option<Value>,
    #[serde(rename = "interestIncome")]
    interest_income: Option<Value>,
    #[serde(rename = "interestExpense")]
    interest_expense: Option<Value>,
    #[serde(rename = "nonInterestIncome")]
    non_interest_income: Option<Value>,
    #[serde(rename = "otherNonOperatingIncome")]
    other_non_operating_income: Option<Value>,
    #[serde(rename = "depreciation")]
    depreciation: Option<Value>,
    #[serde(rename = "depreciationAndAmortization")]
    depreciation_and_amortization: Option<Value>,
    #[serde(rename = "incomeBeforeTax")]
    income_before_tax: Option<Value>,
    #[serde(rename = "incomeTaxExpense")]
    income_tax_expense: Option<Value>,
    #[serde(rename = "interestAndDebtExpense")]
    interest_and_debt_expense: Option<Value>,
    #[serde(rename = "netIncomeFromContinuingOperations")]
    net_income_from_continuing_operations: Option<Value>,
    #[serde(rename = "comprehensiveIncomeNetOfTax")]
    comprehensive_income_net_of_tax: Option<Value>,
    ebit: Option<Value>,
    ebitda: Option<Value>,
    #[serde(rename = "netIncome")]
    net_income: Option<Value>,
}

impl RawIncomeReport {
    fn into_row(self) -> IncomeStatement {
        IncomeStatement {
            fiscal_date_ending: text(&self.fiscal_date_ending),
            reported_currency: text(&self.reported_currency),
            gross_profit: num(&self.gross_profit),
            total_revenue: num(&self.total_revenue),
            cost_of_revenue: num(&self.cost_of_revenue),
            cost_of_goods_and_services_sold: num(&self.cost_of_goods_and_services_sold),
            operating_income: num(&self.operating_income),
            selling_general_and_administrative: num(&self.selling_general_and_administrative),
            research_and_development: num(&self.research_and_development),
            operating_expenses: num(&self.operating_expenses),
            investment_income_net: num(&self.investment_income_net),
            interest_income: num(&self.interest_income),
            interest_expense: num(&self.interest_expense),
            non_interest_income: num(&self.non_interest_income),
            other_non_operating_income: num(&self.other_non_operating_income),
            depreciation: num(&self.depreciation),
            depreciation_and_amortization: num(&self.depreciation_and_amortization),
            income_before_tax: num(&self.income_before_tax),
            income_tax_expense: num(&self.income_tax_expense),
            interest_and_debt_expense: num(&self.interest_and_debt_expense),
            net_income_from_continuing_operations: num(&self.net_income_from_continuing_operations),
            comprehensive_income_net_of_tax: num(&self.comprehensive_income_net_of_tax),
            ebit: num(&self.ebit),
            ebitda: num(&self.ebitda),
            net_income: num(&self.net_income),
        }
    }
}

impl IncomeResponse {
    fn into_report(
        self,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<IncomeStatements, MarketDataError> {
        let reports = self.annual_reports.ok_or_else(|| {
            MarketDataError::not_found(format!(
                "No income statement found for symbol: {}",
                symbol
            ))
        })?;

        let statements = capped(reports, limit)
            .into_iter()
            .map(RawIncomeReport::into_row)
            .collect();

        Ok(IncomeStatements::new(symbol, statements))
    }
}

/// EARNINGS_ESTIMATES response
#[derive(Debug, Deserialize)]
struct EstimatesResponse {
    estimates: Option<Vec<RawEstimate>>,
}

#[derive(Debug, Deserialize)]
struct RawEstimate {
    date: Option<String>,
    eps_estimate_average: Option<Value>,
    eps_estimate_high: Option<Value>,
    eps_estimate_low: Option<Value>,
    eps_estimate_analyst_count: Option<Value>,
    revenue_estimate_average: Option<Value>,
    revenue_estimate_analyst_count: Option<Value>,
}

impl RawEstimate {
    fn into_row(self) -> EarningsEstimate {
        EarningsEstimate {
            date: text(&self.date),
            estimate_average_eps: num(&self.eps_estimate_average),
            estimate_high_eps: num(&self.eps_estimate_high),
            estimate_low_eps: num(&self.eps_estimate_low),
            number_of_analysts: int(&self.eps_estimate_analyst_count),
            estimate_average_revenue: num(&self.revenue_estimate_average),
            number_of_analysts_revenue: num(&self.revenue_estimate_analyst_count),
        }
    }
}

impl EstimatesResponse {
    fn into_estimates(
        self,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<EarningsEstimates, MarketDataError> {
        let estimates = self.estimates.ok_or_else(|| {
            MarketDataError::not_found(format!(
                "No earnings estimates found for symbol: {}",
                symbol
            ))
        })?;

        let rows = capped(estimates, limit)
            .into_iter()
            .map(RawEstimate::into_row)
            .collect();

        Ok(EarningsEstimates::new(symbol, rows))
    }
}

/// BALANCE_SHEET response (annual reports only)
#[derive(Debug, Deserialize)]
struct BalanceSheetResponse {
    #[serde(rename = "annualReports")]
    annual_reports: Option<Vec<RawBalanceSheet>>,
}

#[derive(Debug, Deserialize)]
struct RawBalanceSheet {
    #[serde(rename = "fiscalDateEnding")]
    fiscal_date_ending: Option<String>,
    #[serde(rename = "reportedCurrency")]
    reported_currency: Option<String>,
    #[serde(rename = "totalAssets")]
    total_assets: Option<Value>,
    #[serde(rename = "totalCurrentAssets")]
    total_current_assets: Option<Value>,
    #[serde(rename = "cashAndCashEquivalentsAtCarryingValue")]
    cash_and_cash_equivalents: Option<Value>,
    inventory: Option<Value>,
    #[serde(rename = "totalLiabilities")]
    total_liabilities: Option<Value>,
    #[serde(rename = "totalCurrentLiabilities")]
    total_current_liabilities: Option<Value>,
    #[serde(rename = "longTermDebt")]
    long_term_debt: Option<Value>,
    #[serde(rename = "totalShareholderEquity")]
    total_shareholder_equity: Option<Value>,
    #[serde(rename = "retainedEarnings")]
    retained_earnings: Option<Value>,
    #[serde(rename = "commonStockSharesOutstanding")]
    common_stock_shares_outstanding: Option<Value>,
}

impl RawBalanceSheet {
    fn into_row(self) -> BalanceSheet {
        BalanceSheet {
            fiscal_date_ending: text(&self.fiscal_date_ending),
            reported_currency: text(&self.reported_currency),
            total_assets: num(&self.total_assets),
            total_current_assets: num(&self.total_current_assets),
            cash_and_cash_equivalents: num(&self.cash_and_cash_equivalents),
            inventory: num(&self.inventory),
            total_liabilities: num(&self.total_liabilities),
            total_current_liabilities: num(&self.total_current_liabilities),
            long_term_debt: num(&self.long_term_debt),
            total_shareholder_equity: num(&self.total_shareholder_equity),
            retained_earnings: num(&self.retained_earnings),
            common_stock_shares_outstanding: num(&self.common_stock_shares_outstanding),
        }
    }
}

impl BalanceSheetResponse {
    fn into_report(
        self,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<BalanceSheets, MarketDataError> {
        let reports = self.annual_reports.ok_or_else(|| {
            MarketDataError::not_found(format!("No balance sheet found for symbol: {}", symbol))
        })?;

        let sheets = capped(reports, limit)
            .into_iter()
            .map(RawBalanceSheet::into_row)
            .collect();

        Ok(BalanceSheets::new(symbol, sheets))
    }
}

// ============================================================================
// AlphaVantageProvider implementation
// ============================================================================

impl AlphaVantageProvider {
    /// Create a new Alpha Vantage provider with the given API key and
    /// base URL.
    pub fn new(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Make one GET request to the Alpha Vantage API and deserialize
    /// the JSON body. Network failure, non-2xx status, and parse
    /// failure all collapse into the single transport failure class
    /// for the given report.
    async fn fetch<T: DeserializeOwned>(
        &self,
        report: &'static str,
        params: &[(&str, &str)],
    ) -> Result<T, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.api_key));

        let url = reqwest::Url::parse_with_params(&self.base_url, &all_params)
            .map_err(|e| MarketDataError::fetch(report, format!("Failed to build URL: {}", e)))?;

        debug!(
            "Alpha Vantage request: {}",
            url.as_str().replace(&self.api_key, "***")
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MarketDataError::fetch(report, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::fetch(report, format!("HTTP {}", status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| MarketDataError::fetch(report, format!("Failed to parse response: {}", e)))
    }
}

// ============================================================================
// ReportProvider trait implementation
// ============================================================================

#[async_trait]
impl ReportProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn stock_price(&self, symbol: &str) -> Result<PriceQuote, MarketDataError> {
        let params = [("function", "GLOBAL_QUOTE"), ("symbol", symbol)];
        let response: GlobalQuoteResponse = self.fetch("stock price", &params).await?;

        let quote = response.into_price(symbol, Utc::now())?;
        debug!("Alpha Vantage: fetched price {} for {}", quote.price, symbol);
        Ok(quote)
    }

    async fn stock_news(
        &self,
        symbols: &str,
        limit: Option<usize>,
    ) -> Result<NewsFeed, MarketDataError> {
        let params = [("function", "NEWS_SENTIMENT"), ("tickers", symbols)];
        let response: NewsResponse = self.fetch("news", &params).await?;

        let feed = response.into_feed(symbols, limit)?;
        debug!(
            "Alpha Vantage: fetched {} news articles for {}",
            feed.count, symbols
        );
        Ok(feed)
    }

    async fn company_overview(&self, symbol: &str) -> Result<CompanyOverview, MarketDataError> {
        let params = [("function", "OVERVIEW"), ("symbol", symbol)];
        let response: OverviewResponse = self.fetch("company overview", &params).await?;

        debug!("Alpha Vantage: fetched company overview for {}", symbol);
        response.into_overview(symbol)
    }

    async fn insider_transactions(
        &self,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<InsiderActivity, MarketDataError> {
        let params = [("function", "INSIDER_TRANSACTIONS"), ("symbol", symbol)];
        let response: InsiderResponse = self.fetch("insider transactions", &params).await?;

        let activity = response.into_activity(symbol, limit)?;
        debug!(
            "Alpha Vantage: fetched {} insider transactions for {}",
            activity.count, symbol
        );
        Ok(activity)
    }

    async fn income_statement(
        &self,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<IncomeStatements, MarketDataError> {
        let params = [("function", "INCOME_STATEMENT"), ("symbol", symbol)];
        let response: IncomeResponse = self.fetch("income statement", &params).await?;

        let report = response.into_report(symbol, limit)?;
        debug!(
            "Alpha Vantage: fetched {} income statements for {}",
            report.count, symbol
        );
        Ok(report)
    }

    async fn earnings_estimates(
        &self,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<EarningsEstimates, MarketDataError> {
        let params = [("function", "EARNINGS_ESTIMATES"), ("symbol", symbol)];
        let response: EstimatesResponse = self.fetch("earnings estimates", &params).await?;

        let estimates = response.into_estimates(symbol, limit)?;
        debug!(
            "Alpha Vantage: fetched {} earnings estimates for {}",
            estimates.count, symbol
        );
        Ok(estimates)
    }

    async fn balance_sheet(
        &self,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<BalanceSheets, MarketDataError> {
        let params = [("function", "BALANCE_SHEET"), ("symbol", symbol)];
        let response: BalanceSheetResponse = self.fetch("balance sheet", &params).await?;

        let report = response.into_report(symbol, limit)?;
        debug!(
            "Alpha Vantage: fetched {} balance sheets for {}",
            report.count, symbol
        );
        Ok(report)
    }
}
