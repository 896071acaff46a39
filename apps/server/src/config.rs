//! Server configuration loaded from the environment.

use anyhow::Context;
use quotewire_market_data::provider::alpha_vantage::DEFAULT_BASE_URL;

#[derive(Clone, Debug)]
pub struct Config {
    /// Alpha Vantage API key, required
    pub api_key: String,
    /// Provider base URL, overridable for testing against a stub
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("ALPHA_VANTAGE_API_KEY")
            .context("ALPHA_VANTAGE_API_KEY is not set")?;
        let base_url = std::env::var("ALPHA_VANTAGE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}
