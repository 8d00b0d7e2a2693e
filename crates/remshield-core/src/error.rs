//! Shared error type across remshield crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Obfuscation or deobfuscation failed.
    CryptoFailure,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in diagnostics and JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::CryptoFailure => "CRYPTO_FAILURE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RemShieldError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum RemShieldError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("crypto failure: {0}")]
    Crypto(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl RemShieldError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            RemShieldError::BadRequest(_) => ClientCode::BadRequest,
            RemShieldError::Crypto(_) => ClientCode::CryptoFailure,
            RemShieldError::Internal(_) => ClientCode::Internal,
        }
    }
}
