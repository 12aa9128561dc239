/*
[INPUT]:  HTTP configuration (base URL, timeouts) and API credentials
[OUTPUT]: Configured reqwest client and the signed/unsigned request primitive
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request dispatch
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use secrecy::SecretString;
use serde::de::DeserializeOwned;

use crate::http::observer::{RequestObserver, TracingObserver};
use crate::http::signature::RequestSigner;
use crate::http::{ExchangeError, Result};
use crate::types::ParameterSet;

/// Base URL for the USDⓈ-M futures testnet
pub const DEFAULT_BASE_URL: &str = "https://testnet.binancefuture.com";

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-mbx-apikey");
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// API key and secret for one account
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Both values must be non-blank
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into().trim().to_string();
        let api_secret = api_secret.into().trim().to_string();
        if api_key.is_empty() || api_secret.is_empty() {
            return Err(ExchangeError::Config(
                "API key and secret are required.".to_string(),
            ));
        }
        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars: Vec<char> = self.api_key.chars().collect();
        let masked_key = if chars.len() > 8 {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{head}...{tail}")
        } else {
            "***REDACTED***".to_string()
        };

        f.debug_struct("Credentials")
            .field("api_key", &masked_key)
            .field("api_secret", &"***REDACTED***")
            .finish()
    }
}

/// How a request authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAuth {
    /// API key header only
    ApiKey,
    /// API key header plus `timestamp` and `signature` parameters
    Signed,
}

/// Main HTTP client for the futures REST API.
///
/// Owns the connection pool and the account secret. Dropping the client (or
/// calling [`FuturesClient::close`]) releases the pool and notifies the
/// observer.
#[derive(Debug)]
pub struct FuturesClient {
    http_client: Client,
    base_url: Url,
    signer: RequestSigner,
    observer: Arc<dyn RequestObserver>,
}

impl FuturesClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.clone();
        Self::with_config_and_base_url(credentials, config, &base_url)
    }

    /// Create a new client against an explicit base URL (mock servers, mainnet)
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&credentials.api_key)
            .map_err(|e| ExchangeError::Config(format!("API key is not a valid header value: {e}")))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            signer: RequestSigner::new(credentials.api_secret),
            observer: Arc::new(TracingObserver),
        })
    }

    /// Replace the default tracing observer
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Release the connection pool
    pub fn close(self) {
        drop(self);
    }

    /// Send one request and decode a successful JSON body.
    ///
    /// Signed requests get `timestamp` and `signature` appended right before
    /// dispatch. Non-success statuses become `ExchangeError::Api`, timeouts and
    /// connection failures become `ExchangeError::Network`. Nothing is retried.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: ParameterSet,
        auth: RequestAuth,
    ) -> Result<T> {
        let outcome = self.execute(&method, endpoint, params, auth).await;
        if let Err(err) = &outcome {
            self.observer.on_failure(&method, endpoint, err);
        }
        outcome
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: &Method,
        endpoint: &str,
        params: ParameterSet,
        auth: RequestAuth,
    ) -> Result<T> {
        let url = self.base_url.join(endpoint)?;

        let (encoded, logged) = match auth {
            RequestAuth::ApiKey => (params.to_query_string(), params),
            RequestAuth::Signed => {
                let signed = self.signer.sign_now(params);
                (signed.encoded(), signed.params().clone())
            }
        };
        self.observer.on_request(method, endpoint, &logged);

        let (status, body) = self.dispatch(method, url, encoded).await?;
        self.observer.on_response(method, endpoint, status, &body);

        if !status.is_success() {
            return Err(ExchangeError::api_error(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// GET/DELETE carry parameters in the query string, everything else in a
    /// form body. `encoded` goes out byte-for-byte.
    async fn dispatch(
        &self,
        method: &Method,
        mut url: Url,
        encoded: String,
    ) -> Result<(StatusCode, String)> {
        let builder = if *method == Method::GET || *method == Method::DELETE {
            if !encoded.is_empty() {
                url.set_query(Some(&encoded));
            }
            self.http_client.request(method.clone(), url)
        } else {
            self.http_client
                .request(method.clone(), url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(encoded)
        };

        let response = builder.send().await.map_err(ExchangeError::from_transport)?;
        let status = response.status();
        let body = response.text().await.map_err(ExchangeError::from_transport)?;
        Ok((status, body))
    }
}

impl Drop for FuturesClient {
    fn drop(&mut self) {
        self.observer.on_close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("test-api-key-123456", "test-secret").unwrap()
    }

    #[test]
    fn test_credentials_reject_blank_values() {
        assert!(matches!(
            Credentials::new("  ", "secret"),
            Err(ExchangeError::Config(_))
        ));
        assert!(matches!(
            Credentials::new("key", ""),
            Err(ExchangeError::Config(_))
        ));
    }

    #[test]
    fn test_credentials_debug_is_masked() {
        let rendered = format!("{:?}", credentials());
        assert!(rendered.contains("test...3456"));
        assert!(!rendered.contains("test-secret"));
    }

    #[test]
    fn test_credentials_debug_masks_non_ascii_key() {
        let credentials = Credentials::new("aключключ", "s").unwrap();
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("aклю...ключ"));
        assert!(!rendered.contains("\"s\""));
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = FuturesClient::with_config_and_base_url(
            credentials(),
            ClientConfig::default(),
            "not a url",
        )
        .unwrap_err();
        assert!(matches!(err, ExchangeError::UrlParse(_)));
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let client = FuturesClient::new(credentials()).unwrap();
        assert_eq!(client.base_url().as_str(), "https://testnet.binancefuture.com/");
        client.close();
    }
}
