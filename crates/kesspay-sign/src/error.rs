//! Error types for request signing

use thiserror::Error;

/// Errors that can occur while building the canonical string or signing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignError {
    #[error("Secret key is empty; refusing to sign")]
    EmptySecretKey,

    #[error("Field '{field}' has no stable string form: {reason}")]
    UnrenderableValue { field: String, reason: String },
}
