/*
[INPUT]:  None (API key header only)
[OUTPUT]: Exchange metadata (symbols, precisions, filters)
[POS]:    HTTP layer - unsigned market metadata endpoints
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{FuturesClient, RequestAuth, Result};
use crate::types::{ExchangeInfo, ParameterSet};

pub const EXCHANGE_INFO_ENDPOINT: &str = "/fapi/v1/exchangeInfo";

impl FuturesClient {
    /// Query exchange metadata
    ///
    /// GET /fapi/v1/exchangeInfo
    pub async fn exchange_info(&self) -> Result<ExchangeInfo> {
        self.request(
            Method::GET,
            EXCHANGE_INFO_ENDPOINT,
            ParameterSet::new(),
            RequestAuth::ApiKey,
        )
        .await
    }
}
