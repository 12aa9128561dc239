/*
[INPUT]:  Validated OrderSpec
[OUTPUT]: ParameterSet for POST /fapi/v1/order (unsigned)
[POS]:    Order layer - order-type-specific parameter assembly
[UPDATE]: When order types gain or lose wire parameters
*/

use crate::order::OrderSpec;
use crate::types::{OrderType, ParameterSet};

/// Wire parameters for an order.
///
/// Always `symbol, side, type, quantity`; LIMIT adds `price, timeInForce`,
/// STOP_MARKET adds `stopPrice`. Nothing else.
pub fn build_order_params(order: &OrderSpec) -> ParameterSet {
    let mut params = ParameterSet::new()
        .with("symbol", order.symbol())
        .with("side", order.side())
        .with("type", order.order_type())
        .with("quantity", order.quantity());

    match order.order_type() {
        OrderType::Market => {}
        OrderType::Limit => {
            if let Some(price) = order.price() {
                params.push("price", price);
            }
            params.push("timeInForce", order.time_in_force());
        }
        OrderType::StopMarket => {
            if let Some(stop_price) = order.stop_price() {
                params.push("stopPrice", stop_price);
            }
        }
    }

    params
}
