//! Error types for FTD management API operations.
//!
//! The appliance reports failures through a structured JSON envelope carrying
//! one or more `{code, description}` entries. This module exposes that
//! envelope as [`ApiError`] so callers can pattern-match on a closed set of
//! codes instead of probing opaque strings.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Error code the appliance reports when a create collides with an existing
/// object of the same name.
pub const CODE_DUPLICATE_NAME: &str = "duplicateName";

/// Error code the appliance reports when a create carries an id that already
/// exists.
pub const CODE_DUPLICATE_ID: &str = "newInstanceWithDuplicateId";

/// Main error type for FTD operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Appliance is unreachable or refusing connections
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request timed out
    #[error("Timeout: {0}")]
    Timeout(String),

    /// HTTP request failed for a reason not covered by a more specific variant
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    DecodeError(String),

    /// Structured error reported by the appliance
    #[error("{0}")]
    Api(ApiError),

    /// Duplicate-replace resolution found an unexpected number of matches
    #[error("Ambiguous duplicate for '{name}': found {matches} matching objects")]
    AmbiguousDuplicate {
        /// Name the lookup filtered on
        name: String,
        /// Number of objects the lookup returned
        matches: usize,
    },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication or authorization failure
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Request was rejected before being sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint or base URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Specialized result type for FTD operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A single `{code, description}` entry from the appliance's error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    /// Machine-readable error code (e.g. `duplicateName`)
    pub code: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

/// Structured error reported by the appliance.
///
/// Carries the HTTP status of the failed request and the decoded list of
/// error messages, preserved verbatim so callers can inspect every code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the failed response
    pub status: u16,
    /// Structured error entries from the response body
    pub messages: Vec<ApiMessage>,
}

impl ApiError {
    /// True if any reported code belongs to the duplicate-name set.
    #[must_use]
    pub fn is_duplicate_name(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.code == CODE_DUPLICATE_NAME || m.code == CODE_DUPLICATE_ID)
    }

    /// Attempt to decode the appliance's error envelope from a response body.
    ///
    /// Returns `None` when the body does not carry the structured shape, in
    /// which case the caller falls back to status-based mapping.
    #[must_use]
    pub fn from_body(status: u16, body: &[u8]) -> Option<Self> {
        let envelope: ErrorEnvelope = serde_json::from_slice(body).ok()?;
        let messages = envelope.error.messages;
        if messages.is_empty() {
            return None;
        }
        Some(Self { status, messages })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error ({})", self.status)?;
        for message in &self.messages {
            write!(f, ": [{}] {}", message.code, message.description)?;
        }
        Ok(())
    }
}

/// Wire shape of the appliance's error response body.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    messages: Vec<ApiMessage>,
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Timeout(_) => "TIMEOUT",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::DecodeError(_) => "DECODE_ERROR",
            Self::Api(_) => "API_ERROR",
            Self::AmbiguousDuplicate { .. } => "AMBIGUOUS_DUPLICATE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }

    /// True if this error is a structured duplicate-name report.
    #[must_use]
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, Self::Api(api) if api.is_duplicate_name())
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodeError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
