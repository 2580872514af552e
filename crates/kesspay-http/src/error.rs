//! HTTP error types for gateway calls

use kesspay_core::ValidationError;
use kesspay_sign::SignError;
use thiserror::Error;

/// Errors a gateway call can surface
#[derive(Debug, Error)]
pub enum WebPayHttpError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Signing error: {0}")]
    Sign(#[from] SignError),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}
