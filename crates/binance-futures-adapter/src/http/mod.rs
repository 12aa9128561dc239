/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod observer;
pub mod public;
pub mod signature;
pub mod trade;
pub mod user;

pub use error::{ApiOutcome, ErrorKind, ExchangeError, NetworkReason, Result};
pub use observer::{RequestObserver, TracingObserver};
pub use signature::{RequestSigner, SignedRequest};

pub use client::{ClientConfig, Credentials, FuturesClient, RequestAuth};
