//! Request dispatch loop: one JSON-RPC line in, at most one response
//! line out.
//!
//! The dispatcher owns the protocol contract: envelope parsing, method
//! routing, parameter validation, and the success/error response
//! shape. It holds no per-request state; every line is processed
//! independently, in input order, one at a time.

use quotewire_market_data::{MarketDataError, ReportProvider};
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::jsonrpc::{Request, Response};

/// Gateway operation a dispatched method routes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operation {
    StockPrice,
    StockNews,
    CompanyOverview,
    InsiderTransactions,
    IncomeStatement,
    EarningsEstimates,
}

/// Operation descriptor: method name, whether the method accepts a
/// `limit`, and the gateway operation to invoke. Every current method
/// requires a `symbol`.
struct MethodSpec {
    name: &'static str,
    takes_limit: bool,
    op: Operation,
}

/// Fixed dispatch table; never mutated after startup. The gateway also
/// implements a balance sheet report, which is deliberately not listed
/// here.
const METHODS: &[MethodSpec] = &[
    MethodSpec {
        name: "getStockPrice",
        takes_limit: false,
        op: Operation::StockPrice,
    },
    MethodSpec {
        name: "getStockNews",
        takes_limit: true,
        op: Operation::StockNews,
    },
    MethodSpec {
        name: "getCompanyOverview",
        takes_limit: false,
        op: Operation::CompanyOverview,
    },
    MethodSpec {
        name: "getInsiderTransactions",
        takes_limit: true,
        op: Operation::InsiderTransactions,
    },
    MethodSpec {
        name: "getIncomeStatement",
        takes_limit: true,
        op: Operation::IncomeStatement,
    },
    MethodSpec {
        name: "getEarningsEstimates",
        takes_limit: true,
        op: Operation::EarningsEstimates,
    },
];

fn lookup(method: &str) -> Option<&'static MethodSpec> {
    METHODS.iter().find(|spec| spec.name == method)
}

fn to_value<T: Serialize>(value: T) -> Value {
    // Normalized models are plain data; serialization cannot fail
    serde_json::to_value(value).unwrap_or(Value::Null)
}

pub struct Dispatcher<P> {
    provider: P,
}

impl<P: ReportProvider> Dispatcher<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Process one input line into at most one response line.
    ///
    /// Empty and whitespace-only lines produce no output. Every other
    /// line produces exactly one response with either `result` or
    /// `error` set, never both, and never a panic.
    pub async fn process_line(&self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return None;
        }

        tracing::debug!("received: {}", line);

        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                let response = Response::protocol_error(None, format!("Invalid JSON: {}", e));
                return Some(response.into_line());
            }
        };

        let id = request.id_text();

        let Some(method) = request.method.as_deref() else {
            return Some(Response::protocol_error(id, "Missing method").into_line());
        };

        let Some(spec) = lookup(method) else {
            let message = format!("Unknown method: {}", method);
            return Some(Response::protocol_error(id, message).into_line());
        };

        let Some(symbol) = request.param_text("symbol") else {
            return Some(Response::protocol_error(id, "Missing symbol parameter").into_line());
        };

        let limit = if spec.takes_limit {
            request.param_limit()
        } else {
            None
        };

        let response = match self.invoke(spec.op, &symbol, limit).await {
            Ok(result) => Response::result(id, result),
            Err(e) => Response::gateway_error(id, e.to_string()),
        };

        let out = response.into_line();
        tracing::debug!("responded: {}", out);
        Some(out)
    }

    async fn invoke(
        &self,
        op: Operation,
        symbol: &str,
        limit: Option<usize>,
    ) -> Result<Value, MarketDataError> {
        let result = match op {
            Operation::StockPrice => to_value(self.provider.stock_price(symbol).await?),
            Operation::StockNews => to_value(self.provider.stock_news(symbol, limit).await?),
            Operation::CompanyOverview => to_value(self.provider.company_overview(symbol).await?),
            Operation::InsiderTransactions => {
                to_value(self.provider.insider_transactions(symbol, limit).await?)
            }
            Operation::IncomeStatement => {
                to_value(self.provider.income_statement(symbol, limit).await?)
            }
            Operation::EarningsEstimates => {
                to_value(self.provider.earnings_estimates(symbol, limit).await?)
            }
        };

        Ok(result)
    }
}

/// Protocol loop: read lines until EOF, write one response line per
/// request line, in input order. Each gateway call completes before
/// the next line is read, so responses never interleave.
pub async fn serve<P, R, W>(
    dispatcher: &Dispatcher<P>,
    reader: R,
    mut writer: W,
) -> std::io::Result<()>
where
    P: ReportProvider,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if let Some(response) = dispatcher.process_line(&line).await {
            writer.write_all(response.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use quotewire_market_data::models::{
        BalanceSheets, CompanyOverview, EarningsEstimate, EarningsEstimates, IncomeStatement,
        IncomeStatements, InsiderActivity, InsiderTransaction, NewsArticle, NewsFeed, PriceQuote,
    };
    use serde_json::json;

    /// Canned provider: "MISSING" yields a domain not-found, "DOWN" a
    /// transport failure, anything else fixed data honoring `limit`.
    struct MockProvider;

    fn check(symbol: &str, report: &'static str) -> Result<(), MarketDataError> {
        match symbol {
            "MISSING" => Err(MarketDataError::not_found(format!(
                "No data found for symbol: {}",
                symbol
            ))),
            "DOWN" => Err(MarketDataError::fetch(report, "connection refused")),
            _ => Ok(()),
        }
    }

    fn take<T>(rows: Vec<T>, limit: Option<usize>) -> Vec<T> {
        match limit {
            Some(n) => rows.into_iter().take(n).collect(),
            None => rows,
        }
    }

    #[async_trait]
    impl ReportProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn stock_price(&self, symbol: &str) -> Result<PriceQuote, MarketDataError> {
            check(symbol, "stock price")?;
            let captured = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
            Ok(PriceQuote::at(symbol, 123.45, captured))
        }

        async fn stock_news(
            &self,
            symbols: &str,
            limit: Option<usize>,
        ) -> Result<NewsFeed, MarketDataError> {
            check(symbols, "news")?;
            let articles = take(
                vec![
                    NewsArticle {
                        title: "First".to_string(),
                        tickers: vec!["IBM".to_string()],
                        ..Default::default()
                    },
                    NewsArticle {
                        title: "Second".to_string(),
                        ..Default::default()
                    },
                ],
                limit,
            );
            Ok(NewsFeed::new(symbols, articles))
        }

        async fn company_overview(
            &self,
            symbol: &str,
        ) -> Result<CompanyOverview, MarketDataError> {
            check(symbol, "company overview")?;
            Ok(CompanyOverview {
                symbol: symbol.to_string(),
                asset_type: "Common Stock".to_string(),
                ..Default::default()
            })
        }

        async fn insider_transactions(
            &self,
            symbol: &str,
            limit: Option<usize>,
        ) -> Result<InsiderActivity, MarketDataError> {
            check(symbol, "insider transactions")?;
            let rows = take(vec![InsiderTransaction::default()], limit);
            Ok(InsiderActivity::new(symbol, rows))
        }

        async fn income_statement(
            &self,
            symbol: &str,
            limit: Option<usize>,
        ) -> Result<IncomeStatements, MarketDataError> {
            check(symbol, "income statement")?;
            let rows = take(
                vec![IncomeStatement::default(), IncomeStatement::default()],
                limit,
            );
            Ok(IncomeStatements::new(symbol, rows))
        }

        async fn earnings_estimates(
            &self,
            symbol: &str,
            limit: Option<usize>,
        ) -> Result<EarningsEstimates, MarketDataError> {
            check(symbol, "earnings estimates")?;
            let rows = take(vec![EarningsEstimate::default()], limit);
            Ok(EarningsEstimates::new(symbol, rows))
        }

        async fn balance_sheet(
            &self,
            symbol: &str,
            _limit: Option<usize>,
        ) -> Result<BalanceSheets, MarketDataError> {
            check(symbol, "balance sheet")?;
            Ok(BalanceSheets::new(symbol, vec![]))
        }
    }

    fn dispatcher() -> Dispatcher<MockProvider> {
        Dispatcher::new(MockProvider)
    }

    async fn respond(line: &str) -> Value {
        let out = dispatcher().process_line(line).await.unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[tokio::test]
    async fn test_stock_price_end_to_end() {
        let value =
            respond(r#"{"method":"getStockPrice","id":"1","params":{"symbol":"IBM"}}"#).await;

        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], "1");
        assert_eq!(value["result"]["symbol"], "IBM");
        assert_eq!(value["result"]["price"], 123.45);
        assert_eq!(value["result"]["currency"], "USD");
        assert_eq!(value["result"]["time"], "2024-06-01T12:00:00+00:00");
        assert!(value.get("error").is_none());
    }

    #[tokio::test]
    async fn test_news_limit_caps_count() {
        let value =
            respond(r#"{"method":"getStockNews","id":"2","params":{"symbol":"IBM","limit":1}}"#)
                .await;

        assert_eq!(value["result"]["count"], 1);
        assert_eq!(value["result"]["articles"].as_array().unwrap().len(), 1);
        assert_eq!(value["result"]["articles"][0]["title"], "First");
    }

    #[tokio::test]
    async fn test_news_without_limit_takes_all() {
        let value =
            respond(r#"{"method":"getStockNews","id":"2","params":{"symbol":"IBM"}}"#).await;
        assert_eq!(value["result"]["count"], 2);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let value = respond(r#"{"method":"bogus","id":"3","params":{}}"#).await;
        assert_eq!(
            value,
            json!({"jsonrpc":"2.0","id":"3","error":{"message":"Unknown method: bogus"}})
        );
    }

    #[tokio::test]
    async fn test_missing_method() {
        let value = respond(r#"{"id":"4","params":{"symbol":"IBM"}}"#).await;
        assert_eq!(value["error"]["message"], "Missing method");
        assert!(value.get("result").is_none());
    }

    #[tokio::test]
    async fn test_missing_symbol() {
        let value = respond(r#"{"method":"getStockPrice","id":"5","params":{}}"#).await;
        assert_eq!(value["error"]["message"], "Missing symbol parameter");
        assert!(value.get("result").is_none());
    }

    #[tokio::test]
    async fn test_missing_params_counts_as_missing_symbol() {
        let value = respond(r#"{"method":"getIncomeStatement","id":"6"}"#).await;
        assert_eq!(value["error"]["message"], "Missing symbol parameter");
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let value = respond(r#"{"method": oops"#).await;
        assert_eq!(value["id"], Value::Null);
        let message = value["error"]["message"].as_str().unwrap();
        assert!(message.starts_with("Invalid JSON: "));
        assert!(value.get("result").is_none());
    }

    #[tokio::test]
    async fn test_empty_line_produces_no_output() {
        assert!(dispatcher().process_line("").await.is_none());
        assert!(dispatcher().process_line("   \t ").await.is_none());
    }

    #[tokio::test]
    async fn test_domain_error_sets_error_not_result() {
        let value =
            respond(r#"{"method":"getStockPrice","id":"7","params":{"symbol":"MISSING"}}"#).await;
        assert_eq!(value["error"], "No data found for symbol: MISSING");
        assert!(value.get("result").is_none());
    }

    #[tokio::test]
    async fn test_transport_error_sets_error_not_result() {
        let value =
            respond(r#"{"method":"getStockNews","id":"8","params":{"symbol":"DOWN"}}"#).await;
        assert_eq!(value["error"], "Error fetching news: connection refused");
        assert!(value.get("result").is_none());
    }

    #[tokio::test]
    async fn test_numeric_id_is_coerced_to_text() {
        let value = respond(r#"{"method":"getStockPrice","id":7,"params":{"symbol":"IBM"}}"#).await;
        assert_eq!(value["id"], "7");
    }

    #[tokio::test]
    async fn test_absent_id_serializes_as_null() {
        let value = respond(r#"{"method":"getStockPrice","params":{"symbol":"IBM"}}"#).await;
        assert_eq!(value["id"], Value::Null);
        assert!(value.get("result").is_some());
    }

    #[tokio::test]
    async fn test_zero_limit_yields_empty_list() {
        let value =
            respond(r#"{"method":"getIncomeStatement","id":"9","params":{"symbol":"IBM","limit":0}}"#)
                .await;
        assert_eq!(value["result"]["count"], 0);
        assert!(value["result"]["incomeStatements"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_negative_limit_clamps_to_zero() {
        let value =
            respond(r#"{"method":"getStockNews","id":"10","params":{"symbol":"IBM","limit":-2}}"#)
                .await;
        assert_eq!(value["result"]["count"], 0);
    }

    #[tokio::test]
    async fn test_limit_ignored_on_methods_without_one() {
        let value =
            respond(r#"{"method":"getCompanyOverview","id":"11","params":{"symbol":"IBM","limit":1}}"#)
                .await;
        assert_eq!(value["result"]["assetType"], "Common Stock");
    }

    #[tokio::test]
    async fn test_serve_emits_one_line_per_request_in_order() {
        let input = concat!(
            r#"{"method":"getStockPrice","id":"1","params":{"symbol":"IBM"}}"#,
            "\n",
            "\n",
            r#"{"method":"bogus","id":"2","params":{}}"#,
            "\n",
            r#"{"method":"getStockNews","id":"3","params":{"symbol":"IBM","limit":1}}"#,
            "\n",
        );

        let mut output = Vec::new();
        serve(&dispatcher(), input.as_bytes(), &mut output)
            .await
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: Value = serde_json::from_str(lines[0]).unwrap();
        let second: Value = serde_json::from_str(lines[1]).unwrap();
        let third: Value = serde_json::from_str(lines[2]).unwrap();

        assert_eq!(first["id"], "1");
        assert_eq!(second["id"], "2");
        assert_eq!(second["error"]["message"], "Unknown method: bogus");
        assert_eq!(third["id"], "3");
        assert_eq!(third["result"]["count"], 1);
    }

    #[tokio::test]
    async fn test_idempotent_requests_match() {
        let line = r#"{"method":"getIncomeStatement","id":"12","params":{"symbol":"IBM","limit":1}}"#;
        let first = respond(line).await;
        let second = respond(line).await;
        assert_eq!(first, second);
    }
}
