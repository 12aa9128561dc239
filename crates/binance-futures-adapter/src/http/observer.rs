/*
[INPUT]:  Request/response events emitted by FuturesClient
[OUTPUT]: Audit log records (tracing by default)
[POS]:    HTTP layer - injectable logging seam for the request pipeline
[UPDATE]: When adding new client events or changing log fields
*/

use std::fmt;

use reqwest::{Method, StatusCode};
use tracing::{debug, error, info};

use crate::http::ExchangeError;
use crate::types::ParameterSet;

/// Receives every request and its outcome.
///
/// Parameters handed to `on_request` never contain the signature.
pub trait RequestObserver: Send + Sync + fmt::Debug {
    fn on_request(&self, method: &Method, endpoint: &str, params: &ParameterSet);

    fn on_response(&self, method: &Method, endpoint: &str, status: StatusCode, body: &str);

    fn on_failure(&self, method: &Method, endpoint: &str, error: &ExchangeError);

    /// The client released its connection pool
    fn on_close(&self) {}
}

/// Default observer: forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, method: &Method, endpoint: &str, params: &ParameterSet) {
        let params: Vec<_> = params.iter().collect();
        info!(%method, endpoint, ?params, "REQUEST");
    }

    fn on_response(&self, method: &Method, endpoint: &str, status: StatusCode, body: &str) {
        info!(%method, endpoint, status = status.as_u16(), body, "RESPONSE");
    }

    fn on_failure(&self, method: &Method, endpoint: &str, error: &ExchangeError) {
        if error.is_timeout() {
            error!(%method, endpoint, "TIMEOUT");
        } else {
            error!(%method, endpoint, error = %error, "REQUEST FAILED");
        }
    }

    fn on_close(&self) {
        debug!("http client closed");
    }
}
