use serde::{Deserialize, Serialize};

/// Annual income statements for a symbol.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatements {
    pub success: bool,
    pub symbol: String,

    /// Number of statements returned, equals `income_statements.len()`
    pub count: usize,

    pub income_statements: Vec<IncomeStatement>,
}

impl IncomeStatements {
    pub fn new(symbol: impl Into<String>, income_statements: Vec<IncomeStatement>) -> Self {
        Self {
            success: true,
            symbol: symbol.into(),
            count: income_statements.len(),
            income_statements,
        }
    }
}

/// One annual income statement row.
///
/// Wire names follow the published tool output, misspellings included
/// ("costofGoodsAndServicesSold", "depriciation"); consumers already
/// key on them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    pub fiscal_date_ending: String,
    pub reported_currency: String,
    pub gross_profit: f64,
    pub total_revenue: f64,
    pub cost_of_revenue: f64,
    #[serde(rename = "costofGoodsAndServicesSold")]
    pub cost_of_goods_and_services_sold: f64,
    pub operating_income: f64,
    pub selling_general_and_administrative: f64,
    pub research_and_development: f64,
    pub operating_expenses: f64,
    pub investment_income_net: f64,
    pub interest_income: f64,
    pub interest_expense: f64,
    pub non_interest_income: f64,
    pub other_non_operating_income: f64,
    #[serde(rename = "depriciation")]
    pub depreciation: f64,
    #[serde(rename = "depriciationAndAmortization")]
    pub depreciation_and_amortization: f64,
    pub income_before_tax: f64,
    pub income_tax_expense: f64,
    pub interest_and_debt_expense: f64,
    pub net_income_from_continuing_operations: f64,
    pub comprehensive_income_net_of_tax: f64,
    pub ebit: f64,
    pub ebitda: f64,
    pub net_income: f64,
}

/// Annual balance sheets for a symbol.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheets {
    pub success: bool,
    pub symbol: String,

    /// Number of sheets returned, equals `balance_sheets.len()`
    pub count: usize,

    pub balance_sheets: Vec<BalanceSheet>,
}

impl BalanceSheets {
    pub fn new(symbol: impl Into<String>, balance_sheets: Vec<BalanceSheet>) -> Self {
        Self {
            success: true,
            symbol: symbol.into(),
            count: balance_sheets.len(),
            balance_sheets,
        }
    }
}

/// One annual balance sheet row.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    pub fiscal_date_ending: String,
    pub reported_currency: String,
    pub total_assets: f64,
    pub total_current_assets: f64,
    pub cash_and_cash_equivalents: f64,
    pub inventory: f64,
    pub total_liabilities: f64,
    pub total_current_liabilities: f64,
    pub long_term_debt: f64,
    pub total_shareholder_equity: f64,
    pub retained_earnings: f64,
    pub common_stock_shares_outstanding: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_statement_irregular_wire_keys() {
        let row = IncomeStatement {
            cost_of_goods_and_services_sold: 1.0,
            depreciation: 2.0,
            depreciation_and_amortization: 3.0,
            ..Default::default()
        };
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["costofGoodsAndServicesSold"], 1.0);
        assert_eq!(json["depriciation"], 2.0);
        assert_eq!(json["depriciationAndAmortization"], 3.0);
        // Regular keys stay camelCase
        assert_eq!(json["fiscalDateEnding"], "");
        assert_eq!(json["netIncome"], 0.0);
    }

    #[test]
    fn test_income_statements_wrapper() {
        let report = IncomeStatements::new("IBM", vec![IncomeStatement::default()]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["incomeStatements"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_balance_sheets_wrapper() {
        let report = BalanceSheets::new("IBM", vec![]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 0);
        assert!(json["balanceSheets"].as_array().unwrap().is_empty());
    }
}
