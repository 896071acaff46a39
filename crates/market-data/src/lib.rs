//! Quotewire Market Data Crate
//!
//! This crate is the provider gateway for the Quotewire stock server:
//! it turns a named report request (price, news, overview, insider
//! transactions, income statement, earnings estimates, balance sheet)
//! into one HTTP call against Alpha Vantage and normalizes the
//! provider's ad-hoc JSON into a stable, predictable shape.
//!
//! # Core Types
//!
//! - [`ReportProvider`] - Trait the dispatcher calls through, one
//!   method per report
//! - [`AlphaVantageProvider`] - The concrete Alpha Vantage gateway
//! - [`MarketDataError`] - Gateway failure classes; the `Display`
//!   strings are the wire-visible error messages
//! - [`models`] - Normalized result shapes, serialized with the exact
//!   wire keys consumers see

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{
    BalanceSheet, BalanceSheets, CompanyOverview, EarningsEstimate, EarningsEstimates,
    IncomeStatement, IncomeStatements, InsiderActivity, InsiderTransaction, NewsArticle, NewsFeed,
    PriceQuote,
};

// Re-export provider types
pub use errors::MarketDataError;
pub use provider::alpha_vantage::AlphaVantageProvider;
pub use provider::ReportProvider;
