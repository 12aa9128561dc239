/*
[INPUT]:  JSON bodies returned by the futures REST API
[OUTPUT]: Typed order, exchange metadata and account structs
[POS]:    Data layer - response definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::Side;

/// Response to `POST /fapi/v1/order`.
///
/// Only the fields the CLI reads are typed; everything else the exchange
/// returns is kept in `extra`. Every typed field is optional: a 2xx
/// acknowledgement means the order was accepted even when fields are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub client_order_id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub side: Option<Side>,
    #[serde(rename = "type", default)]
    pub order_type: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub orig_qty: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub executed_qty: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub avg_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub stop_price: Option<Decimal>,
    #[serde(default)]
    pub time_in_force: Option<String>,
    /// Milliseconds since epoch
    #[serde(default)]
    pub update_time: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response to `GET /fapi/v1/exchangeInfo`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub server_time: i64,
    #[serde(default)]
    pub symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub base_asset: String,
    #[serde(default)]
    pub quote_asset: String,
    #[serde(default)]
    pub price_precision: u32,
    #[serde(default)]
    pub quantity_precision: u32,
    #[serde(default)]
    pub filters: Vec<SymbolFilter>,
}

/// One entry of a symbol's `filters` array, e.g. `PRICE_FILTER` or `LOT_SIZE`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolFilter {
    pub filter_type: String,
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl ExchangeInfo {
    pub fn symbol(&self, symbol: &str) -> Option<&SymbolInfo> {
        self.symbols.iter().find(|info| info.symbol == symbol)
    }
}

impl SymbolInfo {
    fn filter_decimal(&self, filter_type: &str, field: &str) -> Option<Decimal> {
        self.filters
            .iter()
            .find(|filter| filter.filter_type == filter_type)
            .and_then(|filter| filter.values.get(field))
            .and_then(Value::as_str)
            .and_then(|raw| raw.parse().ok())
    }

    /// Price increment from `PRICE_FILTER`. Informational only, never enforced.
    pub fn tick_size(&self) -> Option<Decimal> {
        self.filter_decimal("PRICE_FILTER", "tickSize")
    }

    /// Quantity increment from `LOT_SIZE`. Informational only, never enforced.
    pub fn step_size(&self) -> Option<Decimal> {
        self.filter_decimal("LOT_SIZE", "stepSize")
    }
}

/// Response to `GET /fapi/v2/account`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub total_wallet_balance: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub available_balance: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub total_unrealized_profit: Option<Decimal>,
    #[serde(default)]
    pub can_trade: bool,
    #[serde(default)]
    pub assets: Vec<AccountAsset>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAsset {
    pub asset: String,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub wallet_balance: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub available_balance: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub unrealized_profit: Option<Decimal>,
}
