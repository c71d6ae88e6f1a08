//! # Error Types
//!
//! Crate-level error for surfaces that speak `Result` rather than
//! [`Outcome`](crate::outcome::Outcome) — today that is the CLI binary.
//! The API operations themselves never return this type; they collapse
//! every failure into `Outcome::Failure`.

use thiserror::Error;

use crate::transport::TransportError;

/// Main error type for agrovista's non-Outcome surfaces.
#[derive(Debug, Error)]
pub enum AgrovistaError {
    /// Transport-level errors (connection, protocol).
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// An API operation reported a failure message.
    #[error("{0}")]
    Operation(String),

    /// JSON serialization error (CLI output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
