//! HTTP transport for the FTD management API.
//!
//! Resource clients speak to the appliance through the [`Transport`] trait,
//! which deals in raw response bytes; decoding into typed records is the
//! caller's job. [`HttpTransport`] is the reqwest-backed implementation.
//! Each call performs exactly one request: there is no retry or backoff.

use crate::config::FtdClientConfig;
use crate::error::{ApiError, Error, Result};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

const USER_AGENT: &str = concat!("ftd-rust/", env!("CARGO_PKG_VERSION"));

/// Path prefix of the on-box management API, relative to the appliance base
/// URL.
pub const API_PREFIX: &str = "api/fdm/latest/";

/// Authenticated request primitive used by all resource clients.
///
/// Paths are relative to the API prefix (e.g. `object/networks`). Errors are
/// returned as [`Error`], with server-reported structured failures surfaced
/// as [`Error::Api`] so callers can pattern-match on known codes.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET and return the raw response body.
    async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Result<Vec<u8>>;

    /// Issue a POST with a JSON body and return the raw response body.
    async fn post(&self, path: &str, body: serde_json::Value) -> Result<Vec<u8>>;

    /// Issue a PUT with a JSON body and return the raw response body.
    async fn put(&self, path: &str, body: serde_json::Value) -> Result<Vec<u8>>;

    /// Issue a DELETE, discarding any response body.
    async fn delete(&self, path: &str) -> Result<()>;
}

/// Reqwest-backed [`Transport`] implementation.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base: Url,
    token: Option<SecretString>,
}

impl HttpTransport {
    /// Build a transport from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &FtdClientConfig) -> Result<Self> {
        let base = config.parse_base_url()?.join(API_PREFIX)?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .danger_accept_invalid_certs(!config.tls_verify)
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base,
            token: config.token.clone(),
        })
    }

    /// Return the resolved API base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(Error::from)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>> {
        let url = self.endpoint(path)?;
        tracing::debug!(%method, %url, "sending FTD API request");

        let mut request = self
            .http
            .request(method, url)
            .header("Accept", "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(payload) = body {
            request = request.json(&payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?.to_vec();

        if status.is_success() {
            return Ok(bytes);
        }

        if let Some(api) = ApiError::from_body(status.as_u16(), &bytes) {
            tracing::warn!(status = status.as_u16(), error = %api, "FTD API reported an error");
            return Err(Error::Api(api));
        }

        Err(map_status_to_error(
            status,
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Result<Vec<u8>> {
        self.execute(Method::GET, path, query, None).await
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<Vec<u8>> {
        self.execute(Method::POST, path, &[], Some(body)).await
    }

    async fn put(&self, path: &str, body: serde_json::Value) -> Result<Vec<u8>> {
        self.execute(Method::PUT, path, &[], Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, &[], None).await.map(|_| ())
    }
}

fn map_status_to_error(status: StatusCode, text: String) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::NotFound(text),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::Unauthorized(format!("FTD authentication failed: {text}"))
        }
        StatusCode::TOO_MANY_REQUESTS
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => {
            Error::ServiceUnavailable(format!("FTD temporarily unavailable: {text}"))
        }
        status if status.is_server_error() => {
            Error::ServiceUnavailable(format!("FTD server error {status}: {text}"))
        }
        _ => Error::HttpError(format!("FTD error {status}: {text}")),
    }
}
