//! Error types for the API client
//!
//! A closed taxonomy: every transport or protocol failure maps onto one
//! variant, each carrying its typed payload, with the originating HTTP
//! status preserved (`0` for failures that never got a response).

use edudex_core::{Model, ValidationMessage};
use serde_json::Value;
use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, Error>;

/// API client errors.
#[derive(Error, Debug)]
pub enum Error {
    /// No bearer token could be resolved from parameter, configuration,
    /// or environment. Raised at client construction, before any request.
    #[error("bearer token is required")]
    MissingToken,

    /// The API rejected the credentials (401) or the permissions (403).
    #[error("authentication failed ({status}): {message}")]
    Authentication {
        /// HTTP status code (401 or 403).
        status: u16,
        /// Message from the API.
        message: String,
    },

    /// A 400 response carrying structured validation messages.
    #[error("validation failed: {0}")]
    Validation(ValidationFailure),

    /// The requested resource does not exist (404).
    #[error("not found: {message}")]
    NotFound {
        /// Message from the API.
        message: String,
    },

    /// The API reported a request timeout (408).
    #[error("request timeout")]
    Timeout,

    /// The API failed on its side (500-599).
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message from the API.
        message: String,
    },

    /// Any other client error (400-499).
    #[error("client error ({status}): {message}")]
    Client {
        /// HTTP status code.
        status: u16,
        /// Message from the API.
        message: String,
        /// Decoded error response body.
        body: Value,
    },

    /// No HTTP response was received at all (connection, DNS, timeout
    /// before a response). Status code is `0` by convention.
    #[error("network error: {message}")]
    Network {
        /// Underlying transport error text.
        message: String,
    },

    /// The response body was present but not valid JSON.
    #[error("invalid JSON response (status {status})")]
    MalformedResponse {
        /// HTTP status code of the response.
        status: u16,
        /// Raw body text for diagnostics.
        body: String,
    },

    /// A caller-supplied argument failed the presence check. Raised
    /// before any request is issued.
    #[error("required parameter '{name}' is missing")]
    MissingParameter {
        /// Name of the missing parameter.
        name: String,
    },

    /// Invalid configuration, or the HTTP client could not be built.
    #[error("configuration error: {0}")]
    Config(String),

    /// Fallback for a status code no other rule covers.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the API.
        message: String,
        /// Decoded error response body.
        body: Value,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a network error (no HTTP response received).
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
        }
    }

    /// Create a missing-parameter error.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// The HTTP status code behind this error.
    ///
    /// `0` for failures without a response (network, malformed local
    /// state); `401` for a missing token, matching the status the API
    /// would have answered with.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingToken => 401,
            Self::Authentication { status, .. }
            | Self::Server { status, .. }
            | Self::Client { status, .. }
            | Self::Api { status, .. }
            | Self::MalformedResponse { status, .. } => *status,
            Self::Validation(failure) => failure.status,
            Self::NotFound { .. } => 404,
            Self::Timeout => 408,
            Self::Network { .. } | Self::MissingParameter { .. } | Self::Config(_) => 0,
        }
    }

    /// Whether this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Whether this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// Whether retrying later could plausibly succeed (timeout, network
    /// failure, server error). The client itself never retries.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::Network { .. } | Self::Server { .. }
        )
    }
}

/// Payload of [`Error::Validation`]: the structured findings of a 400
/// response with a `messages` array, split by severity on construction.
#[derive(Debug, Clone, Default)]
pub struct ValidationFailure {
    /// Message from the API (the `error`/`message` field, not the
    /// findings).
    pub message: String,
    /// HTTP status code, conventionally 400.
    pub status: u16,
    errors: Vec<ValidationMessage>,
    warnings: Vec<ValidationMessage>,
}

impl ValidationFailure {
    /// Build from the decoded entries of a `messages` array.
    #[must_use]
    pub fn new(message: impl Into<String>, status: u16, raw_messages: &[Value]) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for raw in raw_messages {
            let parsed = ValidationMessage::from_value(raw.clone());
            if parsed.is_error() {
                errors.push(parsed);
            } else {
                warnings.push(parsed);
            }
        }

        Self {
            message: message.into(),
            status,
            errors,
            warnings,
        }
    }

    /// Error-severity findings.
    #[must_use]
    pub fn errors(&self) -> &[ValidationMessage] {
        &self.errors
    }

    /// Findings below error severity.
    #[must_use]
    pub fn warnings(&self) -> &[ValidationMessage] {
        &self.warnings
    }

    /// Whether any error-severity finding is present.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether any warning finding is present.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Error message texts.
    #[must_use]
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|m| m.message.as_str()).collect()
    }

    /// Warning message texts.
    #[must_use]
    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|m| m.message.as_str()).collect()
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} errors, {} warnings)",
            self.message,
            self.errors.len(),
            self.warnings.len()
        )
    }
}
