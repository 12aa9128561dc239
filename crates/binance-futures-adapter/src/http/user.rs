/*
[INPUT]:  Signed query (timestamp + signature)
[OUTPUT]: Account balances and trading permissions
[POS]:    HTTP layer - user data endpoints (require signature)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::{FuturesClient, RequestAuth, Result};
use crate::types::{AccountInfo, ParameterSet};

pub const ACCOUNT_ENDPOINT: &str = "/fapi/v2/account";

impl FuturesClient {
    /// Query account information
    ///
    /// GET /fapi/v2/account?timestamp={ms}&signature={hex}
    pub async fn account(&self) -> Result<AccountInfo> {
        self.request(
            Method::GET,
            ACCOUNT_ENDPOINT,
            ParameterSet::new(),
            RequestAuth::Signed,
        )
        .await
    }
}
