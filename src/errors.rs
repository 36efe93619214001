//! Error types for the samurai-gateway library.
//!
//! Only construction and transport problems surface as hard errors.
//! Transaction-level declines come back as
//! [`GatewayResponse`](crate::types::GatewayResponse) values with
//! `success == false`, so callers branch on the response rather than
//! catching errors.

use thiserror::Error;

/// Main error type for gateway operations.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// A required construction option is missing or empty
    #[error("missing required credential: {0}")]
    MissingCredential(&'static str),

    /// The gateway configuration is malformed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The underlying HTTP client could not be constructed
    #[error("processor client unavailable: {0}")]
    ClientUnavailable(String),

    /// Error during HTTP request/response handling
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error parsing an endpoint URL
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The processor has no transaction with the given identifier
    #[error("transaction not found: {0}")]
    TransactionNotFound(String),

    /// Any other failure surfaced by the processor
    #[error("processor error: {0}")]
    Processor(String),
}

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
