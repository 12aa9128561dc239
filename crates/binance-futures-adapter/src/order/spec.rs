/*
[INPUT]:  RawOrder (untrusted strings)
[OUTPUT]: OrderSpec that is valid by construction
[POS]:    Order layer - validated order value object
[UPDATE]: When OrderSpec gains fields or validation order changes
*/

use rust_decimal::Decimal;

use super::validate::{
    validate_order_type, validate_price, validate_quantity, validate_side, validate_stop_price,
    validate_symbol, validate_time_in_force,
};
use crate::http::Result;
use crate::types::{OrderType, Side, TimeInForce};

/// Order fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOrder {
    pub symbol: String,
    pub side: String,
    pub order_type: String,
    pub quantity: String,
    pub price: Option<String>,
    pub stop_price: Option<String>,
    pub time_in_force: Option<String>,
}

impl RawOrder {
    pub fn new(
        symbol: impl Into<String>,
        side: impl Into<String>,
        order_type: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side: side.into(),
            order_type: order_type.into(),
            quantity: quantity.into(),
            ..Default::default()
        }
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_stop_price(mut self, stop_price: impl Into<String>) -> Self {
        self.stop_price = Some(stop_price.into());
        self
    }

    pub fn with_time_in_force(mut self, time_in_force: impl Into<String>) -> Self {
        self.time_in_force = Some(time_in_force.into());
        self
    }
}

/// A fully validated order. The only constructor is [`OrderSpec::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    symbol: String,
    side: Side,
    order_type: OrderType,
    quantity: Decimal,
    price: Option<Decimal>,
    stop_price: Option<Decimal>,
    time_in_force: TimeInForce,
}

impl OrderSpec {
    /// Validate every field; the first failure wins
    pub fn from_raw(raw: &RawOrder) -> Result<Self> {
        let symbol = validate_symbol(&raw.symbol)?;
        let side = validate_side(&raw.side)?;
        let order_type = validate_order_type(&raw.order_type)?;
        let quantity = validate_quantity(&raw.quantity)?;
        let price = validate_price(raw.price.as_deref(), order_type)?;
        let stop_price = validate_stop_price(raw.stop_price.as_deref(), order_type)?;
        let time_in_force = validate_time_in_force(raw.time_in_force.as_deref())?;

        Ok(Self {
            symbol,
            side,
            order_type,
            quantity,
            price,
            stop_price,
            time_in_force,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Present for LIMIT and STOP_MARKET
    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Present for STOP_MARKET only
    pub fn stop_price(&self) -> Option<Decimal> {
        self.stop_price
    }

    pub fn time_in_force(&self) -> TimeInForce {
        self.time_in_force
    }
}
