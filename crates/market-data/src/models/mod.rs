//! Normalized report models
//!
//! This module contains the stable result shapes the gateway produces:
//! - `price` - Latest trade price snapshot (PriceQuote)
//! - `overview` - Flat company profile (CompanyOverview)
//! - `news` - News digest with per-article ticker lists (NewsFeed)
//! - `insider` - Insider transaction listing (InsiderActivity)
//! - `statements` - Income statement and balance sheet reports
//! - `estimates` - Analyst earnings estimates (EarningsEstimates)
//!
//! Serialized field names are the wire contract consumers see; several
//! of them are irregular on purpose (see the per-type notes).

mod estimates;
mod insider;
mod news;
mod overview;
mod price;
mod statements;

pub use estimates::{EarningsEstimate, EarningsEstimates};
pub use insider::{InsiderActivity, InsiderTransaction};
pub use news::{NewsArticle, NewsFeed};
pub use overview::CompanyOverview;
pub use price::PriceQuote;
pub use statements::{BalanceSheet, BalanceSheets, IncomeStatement, IncomeStatements};
