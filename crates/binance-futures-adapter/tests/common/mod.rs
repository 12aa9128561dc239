/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-adapter tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use binance_futures_adapter::{
    ClientConfig, Credentials, ErrorKind, ExchangeError, FuturesClient, ParameterSet,
    RequestObserver,
};
use reqwest::{Method, StatusCode};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET).expect("test credentials")
}

/// Client pointed at the mock server, with a recording observer attached
pub fn client_for(server: &MockServer, timeout: Duration) -> (FuturesClient, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::default());
    let config = ClientConfig {
        timeout,
        ..ClientConfig::default()
    };
    let client = FuturesClient::with_config_and_base_url(test_credentials(), config, &server.uri())
        .expect("client init")
        .with_observer(observer.clone());
    (client, observer)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Request {
        method: String,
        endpoint: String,
        params: Vec<(String, String)>,
    },
    Response {
        status: u16,
        body: String,
    },
    Failure {
        kind: Option<ErrorKind>,
        message: String,
    },
    Close,
}

/// Observer that keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl RequestObserver for RecordingObserver {
    fn on_request(&self, method: &Method, endpoint: &str, params: &ParameterSet) {
        self.record(Event::Request {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
    }

    fn on_response(&self, _method: &Method, _endpoint: &str, status: StatusCode, body: &str) {
        self.record(Event::Response {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    fn on_failure(&self, _method: &Method, _endpoint: &str, error: &ExchangeError) {
        self.record(Event::Failure {
            kind: error.kind(),
            message: error.to_string(),
        });
    }

    fn on_close(&self) {
        self.record(Event::Close);
    }
}

/// Split a signed query/body into (signed part, signature)
pub fn split_signature(encoded: &str) -> (&str, &str) {
    encoded
        .rsplit_once("&signature=")
        .expect("signed payload carries a signature")
}

/// Value of `timestamp` inside an encoded payload
pub fn timestamp_of(encoded: &str) -> u64 {
    encoded
        .split('&')
        .find_map(|pair| pair.strip_prefix("timestamp="))
        .expect("signed payload carries a timestamp")
        .parse()
        .expect("numeric timestamp")
}
