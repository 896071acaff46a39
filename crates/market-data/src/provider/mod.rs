//! Report provider abstraction and implementations.
//!
//! This module contains:
//! - The `ReportProvider` trait the dispatcher calls through
//! - The Alpha Vantage implementation
//!
//! Providers receive already-validated parameters: the dispatcher has
//! checked the symbol is present before a call is made, so providers
//! only deal with remote-side failures.

mod traits;

pub mod alpha_vantage;

pub use traits::ReportProvider;
