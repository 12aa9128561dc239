/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public futures adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod order;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiOutcome,
    ClientConfig,
    Credentials,
    ErrorKind,
    ExchangeError,
    FuturesClient,
    NetworkReason,
    RequestAuth,
    RequestObserver,
    RequestSigner,
    Result,
    SignedRequest,
    TracingObserver,
};

// Re-export the order pipeline
pub use order::{OrderSpec, RawOrder, build_order_params};

// Re-export all types
pub use types::*;
