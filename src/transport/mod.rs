//! # HTTP Transport
//!
//! Performs GET and POST requests against the backend's base URL and
//! normalizes every response into either a parsed JSON value or a
//! [`TransportError`]. The rules, applied in order:
//!
//! - the body is read and parsed as JSON regardless of status; a body that
//!   is not valid JSON yields [`TransportError::InvalidBody`]
//! - any status outside 200–299 yields [`TransportError::Server`], with the
//!   message mined from the body's `message` field when present
//! - connection faults (refused, DNS, timeout) yield
//!   [`TransportError::Connection`]
//!
//! One `reqwest::Client` is built per [`Transport`] and reused across
//! calls; calls share nothing else, so concurrent requests cannot observe
//! each other.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Default connect timeout, matching the original client's constant.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default read timeout.
const READ_TIMEOUT: Duration = Duration::from_secs(15);

/// Where and how to reach the backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, e.g. `https://agrovista.example.com/api`. A trailing slash
    /// is tolerated.
    pub base_url: String,
    /// Time allowed for establishing the connection.
    pub connect_timeout: Duration,
    /// Time allowed for the whole request after connecting.
    pub read_timeout: Duration,
}

impl ApiConfig {
    /// Config for the given base URL with the default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: CONNECT_TIMEOUT,
            read_timeout: READ_TIMEOUT,
        }
    }
}

/// Failure below the envelope protocol.
///
/// These never reach the public API as-is; the operations in
/// [`crate::api`] collapse them into `Outcome::Failure(message)`.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a readable response.
    #[error("{0}")]
    Connection(String),
    /// The response body was not valid JSON.
    #[error("Respuesta inválida del servidor")]
    InvalidBody,
    /// Non-2xx status; carries the server's `message` field or a default.
    #[error("{0}")]
    Server(String),
}

/// HTTP transport bound to one base URL.
pub struct Transport {
    client: reqwest::Client,
    base_url: String,
}

impl Transport {
    /// Build a transport with the config's timeouts applied to every call.
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `path` with URL-encoded query parameters.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, TransportError> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(connection)?;
        read_response(response).await
    }

    /// POST `path` with a UTF-8 JSON body.
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(connection)?;
        read_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn connection(err: reqwest::Error) -> TransportError {
    // reqwest's Display always has text; fall back anyway so the caller is
    // never shown an empty message.
    let message = err.to_string();
    if message.is_empty() {
        TransportError::Connection("Error de conexión".to_string())
    } else {
        TransportError::Connection(message)
    }
}

async fn read_response(response: reqwest::Response) -> Result<Value, TransportError> {
    let ok = response.status().is_success();
    let body = response.text().await.map_err(connection)?;
    normalize(ok, &body)
}

/// Status/body normalization, separated from I/O so it can be tested
/// without a socket.
fn normalize(ok: bool, body: &str) -> Result<Value, TransportError> {
    let json: Value = serde_json::from_str(body).map_err(|_| TransportError::InvalidBody)?;
    if !ok {
        let message = json
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or("Error del servidor")
            .to_string();
        return Err(TransportError::Server(message));
    }
    Ok(json)
}
