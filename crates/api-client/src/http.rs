//! HTTP transport for the EduDex Data API
//!
//! A thin wrapper around `reqwest`: verb-specific methods funnel into a
//! single [`HttpClient::request`], which issues one atomic
//! request/response cycle and translates the outcome into either decoded
//! JSON or a typed [`Error`]. There is no retry, pooling state machine,
//! or backoff here.

use crate::error::{ApiResult, Error, ValidationFailure};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, error};
use uuid::Uuid;

/// Request correlation ID header.
const X_REQUEST_ID: &str = "X-Request-ID";

/// Options for a single request: query parameters, JSON body, and
/// additional headers merged over the defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    query: Vec<(String, Option<String>)>,
    json: Option<Value>,
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), Some(value.into())));
        self
    }

    /// Add an optional query parameter. `None` values are dropped before
    /// encoding.
    #[must_use]
    pub fn query_opt(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.query.push((key.into(), value.map(Into::into)));
        self
    }

    /// Set the JSON request body.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    /// Add a header on top of the client defaults.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// HTTP client bound to a base URL and bearer token.
///
/// All EduDex endpoint groups share one instance; each call is a single
/// blocking round trip with the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for `base_url` authenticating with `bearer_token`.
    ///
    /// Default headers on every request: `Accept: application/json`,
    /// `Content-Type: application/json`, `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the token is not a valid header
    /// value or the underlying client cannot be constructed.
    pub fn new(base_url: &str, bearer_token: &str, timeout: Duration) -> ApiResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth = HeaderValue::from_str(&format!("Bearer {bearer_token}"))
            .map_err(|_| Error::config("bearer token contains invalid header characters"))?;
        default_headers.insert(AUTHORIZATION, auth);

        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| Error::config(e.to_string()))?;

        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests resolve against (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a GET request.
    pub async fn get(&self, path: &str, options: RequestOptions) -> ApiResult<Value> {
        self.request(Method::GET, path, options).await
    }

    /// Perform a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.request(Method::POST, path, RequestOptions::new().json(body))
            .await
    }

    /// Perform a PUT request with a JSON body.
    pub async fn put(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.request(Method::PUT, path, RequestOptions::new().json(body))
            .await
    }

    /// Perform a PATCH request with a JSON body.
    pub async fn patch(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.request(Method::PATCH, path, RequestOptions::new().json(body))
            .await
    }

    /// Perform a DELETE request.
    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.request(Method::DELETE, path, RequestOptions::new())
            .await
    }

    /// Perform a request.
    ///
    /// The path is resolved against the base URL (a leading slash is
    /// stripped). An empty response body decodes to an empty JSON
    /// object, covering 204 and empty DELETE responses.
    ///
    /// # Errors
    ///
    /// Failures map onto the [`Error`] taxonomy: transport failures
    /// without a response become [`Error::Network`], non-JSON success
    /// bodies become [`Error::MalformedResponse`], and error statuses
    /// are classified by code (401/403 authentication, 400 with
    /// `messages` validation, 404, 408, 5xx, generic 4xx, fallback).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<Value> {
        let path = path.trim_start_matches('/');
        let url = format!("{}/{}", self.base_url, path);
        let request_id = Uuid::new_v4().to_string();

        debug!(
            request_id = %request_id,
            method = %method,
            path,
            query = ?options.query,
            has_body = options.json.is_some(),
            "EduDex API request"
        );

        let mut request = self
            .inner
            .request(method.clone(), &url)
            .header(X_REQUEST_ID, &request_id);

        let query: Vec<(&str, &str)> = options
            .query
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
            .collect();
        if !query.is_empty() {
            request = request.query(&query);
        }

        if let Some(body) = &options.json {
            request = request.json(body);
        }

        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    request_id = %request_id,
                    method = %method,
                    path,
                    error = %e,
                    "EduDex API network error"
                );
                return Err(if e.is_builder() {
                    Error::config(e.to_string())
                } else {
                    Error::network(e.to_string())
                });
            }
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        if status.is_success() {
            let data = parse_body(status.as_u16(), &body)?;
            debug!(
                request_id = %request_id,
                method = %method,
                path,
                status = status.as_u16(),
                "EduDex API response"
            );
            Ok(data)
        } else {
            let err = classify_status(status.as_u16(), &body);
            error!(
                request_id = %request_id,
                method = %method,
                path,
                status = status.as_u16(),
                error = %err,
                "EduDex API error"
            );
            Err(err)
        }
    }
}

/// Decode a success-response body.
///
/// Empty bodies are an empty object; anything else must be valid JSON.
fn parse_body(status: u16, body: &str) -> ApiResult<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_str(body).map_err(|_| Error::MalformedResponse {
        status,
        body: body.to_string(),
    })
}

/// Classify an error-status response into the error taxonomy.
///
/// The body is decoded best-effort (undecodable bodies act as an empty
/// object); the message is taken from the `error` field, then `message`,
/// then the canonical status reason. Evaluation order is fixed:
/// 401/403 -> 400 with `messages` -> 404 -> 408 -> 5xx -> generic 4xx ->
/// fallback.
fn classify_status(status: u16, body: &str) -> Error {
    let data: Value =
        serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Map::new()));

    let message = data
        .get("error")
        .and_then(Value::as_str)
        .or_else(|| data.get("message").and_then(Value::as_str))
        .map_or_else(|| default_message(status), str::to_string);

    match status {
        401 | 403 => Error::Authentication { status, message },
        400 if data.get("messages").is_some_and(Value::is_array) => {
            let raw = data
                .get("messages")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            Error::Validation(ValidationFailure::new(message, status, &raw))
        }
        404 => Error::NotFound { message },
        408 => Error::Timeout,
        500..=599 => Error::Server { status, message },
        400..=499 => Error::Client {
            status,
            message,
            body: data,
        },
        _ => Error::Api {
            status,
            message,
            body: data,
        },
    }
}

fn default_message(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map_or_else(|| format!("HTTP {status}"), str::to_string)
}
