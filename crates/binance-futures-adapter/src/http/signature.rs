/*
[INPUT]:  Ordered request parameters and the account API secret
[OUTPUT]: SignedRequest (timestamp + hex HMAC-SHA256 signature)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter encoding
*/

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use crate::types::ParameterSet;

type HmacSha256 = Hmac<Sha256>;

/// Parameters after signing, ready to go on the wire.
///
/// `params` holds everything that was signed (including `timestamp`) but not
/// the signature itself, so it is safe to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    params: ParameterSet,
    timestamp: u64,
    query: String,
    signature: String,
}

impl SignedRequest {
    /// Signed parameters, signature excluded
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Exact bytes to send: the signed query followed by `signature`
    pub fn encoded(&self) -> String {
        format!("{}&signature={}", self.query, self.signature)
    }
}

/// HMAC-SHA256 signer keyed by the account secret
pub struct RequestSigner {
    secret: SecretString,
}

impl RequestSigner {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Sign `params` as of `timestamp_ms`.
    ///
    /// Appends `timestamp`, encodes everything in insertion order and signs
    /// that exact string.
    pub fn sign(&self, params: ParameterSet, timestamp_ms: u64) -> SignedRequest {
        let params = params.with("timestamp", timestamp_ms);
        let query = params.to_query_string();
        let signature = self.hex_digest(query.as_bytes());

        SignedRequest {
            params,
            timestamp: timestamp_ms,
            query,
            signature,
        }
    }

    /// Sign with the current wall-clock time
    pub fn sign_now(&self, params: ParameterSet) -> SignedRequest {
        self.sign(params, timestamp_ms())
    }

    fn hex_digest(&self, payload: &[u8]) -> String {
        // HMAC accepts keys of any length, so this cannot fail
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"***REDACTED***")
            .finish()
    }
}

/// Milliseconds since the Unix epoch
pub fn timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
