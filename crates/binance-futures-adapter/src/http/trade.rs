/*
[INPUT]:  Validated OrderSpec
[OUTPUT]: Exchange order acknowledgement
[POS]:    HTTP layer - trading endpoints (require signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;
use tracing::info;

use crate::http::{FuturesClient, RequestAuth, Result};
use crate::order::{OrderSpec, build_order_params};
use crate::types::OrderResponse;

pub const ORDER_ENDPOINT: &str = "/fapi/v1/order";

impl FuturesClient {
    /// Place a single order
    ///
    /// POST /fapi/v1/order (form body, signed)
    pub async fn place_order(&self, order: &OrderSpec) -> Result<OrderResponse> {
        let params = build_order_params(order);

        info!(
            side = %order.side(),
            order_type = %order.order_type(),
            symbol = order.symbol(),
            quantity = %order.quantity(),
            price = ?order.price(),
            stop_price = ?order.stop_price(),
            "placing order"
        );

        let response: OrderResponse = self
            .request(Method::POST, ORDER_ENDPOINT, params, RequestAuth::Signed)
            .await?;

        info!(
            order_id = ?response.order_id,
            status = ?response.status,
            "order placed"
        );
        Ok(response)
    }
}
