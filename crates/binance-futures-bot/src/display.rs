/*
[INPUT]:  Outgoing ParameterSet, decoded OrderResponse
[OUTPUT]: Boxed plain-text summaries for the terminal
[POS]:    CLI layer - terminal rendering
[UPDATE]: When summary rows change
*/

use binance_futures_adapter::{OrderResponse, ParameterSet};
use chrono::DateTime;
use console::style;
use rust_decimal::Decimal;

const REQUEST_HEADER: &str = "┌─── Order Request Summary ──────────────────┐";
const RESPONSE_HEADER: &str = "┌─── Order Response ─────────────────────────┐";
const FOOTER: &str = "└────────────────────────────────────────────┘";
const NOT_AVAILABLE: &str = "N/A";

/// What will be sent, before confirmation. Shows exactly the built parameters.
pub fn order_summary(params: &ParameterSet) -> String {
    let field = |key: &str| params.get(key).unwrap_or_default().to_string();

    let mut lines = vec![
        style(REQUEST_HEADER).bold().to_string(),
        row("Symbol", field("symbol")),
        row("Side", field("side")),
        row("Type", field("type")),
        row("Quantity", field("quantity")),
    ];
    if let Some(price) = params.get("price") {
        lines.push(row("Price", price));
    }
    if let Some(stop_price) = params.get("stopPrice") {
        lines.push(row("Stop Price", stop_price));
    }
    if let Some(time_in_force) = params.get("timeInForce") {
        lines.push(row("TIF", time_in_force));
    }
    lines.push(style(FOOTER).bold().to_string());
    lines.join("\n")
}

pub fn order_response(response: &OrderResponse) -> String {
    let lines = [
        style(RESPONSE_HEADER).bold().to_string(),
        row(
            "Order ID",
            response
                .order_id
                .map_or_else(|| NOT_AVAILABLE.to_string(), |id| id.to_string()),
        ),
        row("Status", response.status.as_deref().unwrap_or(NOT_AVAILABLE)),
        row(
            "Exec Qty",
            decimal_or(response.executed_qty, "0"),
        ),
        row("Avg Price", decimal_or(response.avg_price, NOT_AVAILABLE)),
        row(
            "Client OID",
            response.client_order_id.as_deref().unwrap_or(NOT_AVAILABLE),
        ),
        row("Time", update_time(response.update_time)),
        style(FOOTER).bold().to_string(),
    ];
    lines.join("\n")
}

fn row(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {label:<11}: {value}")
}

fn decimal_or(value: Option<Decimal>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), |d| d.to_string())
}

fn update_time(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
