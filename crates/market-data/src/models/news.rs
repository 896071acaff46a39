use serde::{Deserialize, Serialize};

/// News digest for one or more ticker symbols.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsFeed {
    /// Always true; failed fetches never produce this shape
    pub success: bool,

    /// Symbol(s) as requested by the caller
    pub symbol: String,

    /// Number of articles returned, equals `articles.len()`
    pub count: usize,

    /// Simplified articles, capped at the caller-supplied limit
    pub articles: Vec<NewsArticle>,
}

impl NewsFeed {
    pub fn new(symbol: impl Into<String>, articles: Vec<NewsArticle>) -> Self {
        Self {
            success: true,
            symbol: symbol.into(),
            count: articles.len(),
            articles,
        }
    }
}

/// One simplified news article.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub summary: String,

    /// Publication time as reported by the provider
    pub time: String,

    /// Overall sentiment label (e.g., "Bullish")
    pub sentiment: String,

    /// Publishing outlet
    pub source: String,

    /// Tickers mentioned, derived from the article's sentiment list;
    /// empty when the provider omits that list
    pub tickers: Vec<String>,
}
