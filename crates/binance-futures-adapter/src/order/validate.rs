/*
[INPUT]:  Untrusted strings from the command line
[OUTPUT]: Normalized symbol/side/type/decimal values or a validation error
[POS]:    Order layer - field validators
[UPDATE]: When validation rules or error messages change
*/

use rust_decimal::Decimal;

use crate::http::{ExchangeError, Result};
use crate::types::enums::wire_names;
use crate::types::{OrderType, Side, TimeInForce};

pub fn validate_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_ascii_uppercase();
    if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ExchangeError::validation(format!(
            "Invalid symbol '{raw}'. Use alphanumeric only, e.g. BTCUSDT."
        )));
    }
    Ok(symbol)
}

pub fn validate_side(raw: &str) -> Result<Side> {
    raw.trim().to_ascii_uppercase().parse().map_err(|_| {
        ExchangeError::validation(format!(
            "Invalid side '{raw}'. Must be one of: {}.",
            wire_names(&Side::ALL)
        ))
    })
}

pub fn validate_order_type(raw: &str) -> Result<OrderType> {
    raw.trim().to_ascii_uppercase().parse().map_err(|_| {
        ExchangeError::validation(format!(
            "Invalid order type '{raw}'. Must be one of: {}.",
            wire_names(&OrderType::ALL)
        ))
    })
}

/// Exact decimal parse; precision is never routed through binary floats
pub fn validate_quantity(raw: &str) -> Result<Decimal> {
    let quantity = parse_decimal(raw).ok_or_else(|| {
        ExchangeError::validation(format!(
            "Invalid quantity '{raw}'. Must be a positive number."
        ))
    })?;
    if quantity <= Decimal::ZERO {
        return Err(ExchangeError::validation("Quantity must be greater than 0."));
    }
    Ok(quantity)
}

/// MARKET ignores any price; LIMIT and STOP_MARKET require one
pub fn validate_price(raw: Option<&str>, order_type: OrderType) -> Result<Option<Decimal>> {
    if !order_type.requires_price() {
        return Ok(None);
    }
    let raw = present(raw).ok_or_else(|| {
        ExchangeError::validation(format!("Price is required for {order_type} orders."))
    })?;
    let price = parse_decimal(raw).ok_or_else(|| {
        ExchangeError::validation(format!("Invalid price '{raw}'. Must be a positive number."))
    })?;
    if price <= Decimal::ZERO {
        return Err(ExchangeError::validation("Price must be greater than 0."));
    }
    Ok(Some(price))
}

/// Only STOP_MARKET uses a stop price; other types ignore the input
pub fn validate_stop_price(raw: Option<&str>, order_type: OrderType) -> Result<Option<Decimal>> {
    if !order_type.requires_stop_price() {
        return Ok(None);
    }
    let raw = present(raw).ok_or_else(|| {
        ExchangeError::validation(format!("Stop price is required for {order_type} orders."))
    })?;
    let stop_price = parse_decimal(raw).ok_or_else(|| {
        ExchangeError::validation(format!(
            "Invalid stop price '{raw}'. Must be a positive number."
        ))
    })?;
    if stop_price <= Decimal::ZERO {
        return Err(ExchangeError::validation("Stop price must be greater than 0."));
    }
    Ok(Some(stop_price))
}

/// Defaults to GTC when absent
pub fn validate_time_in_force(raw: Option<&str>) -> Result<TimeInForce> {
    let Some(raw) = present(raw) else {
        return Ok(TimeInForce::default());
    };
    raw.trim().to_ascii_uppercase().parse().map_err(|_| {
        ExchangeError::validation(format!(
            "Invalid time in force '{raw}'. Must be one of: {}.",
            wire_names(&TimeInForce::ALL)
        ))
    })
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.trim().is_empty())
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str_exact(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
