//! Request validation.
//!
//! Catches malformed business fields locally, before a request is signed and
//! sent; the gateway gives no useful diagnostics for these.

use thiserror::Error;

use crate::types::{CreateOrderRequest, OrderDetail, QueryOrderRequest};

/// Errors that can occur during request validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Empty seller code")]
    EmptySellerCode,

    #[error("Empty merchant order id (out_trade_no)")]
    EmptyOutTradeNo,

    #[error("Empty currency code")]
    EmptyCurrency,

    #[error("Order amount must be a positive finite number, got {0}")]
    InvalidAmount(f64),

    #[error("Empty product id in detail line {0}")]
    EmptyDetailNo(usize),

    #[error("Empty product name in detail line {0}")]
    EmptyDetailName(usize),
}

/// Validate an order creation request
///
/// # Errors
///
/// Returns `ValidationError` if the request is invalid.
pub fn validate_create_order(request: &CreateOrderRequest) -> Result<(), ValidationError> {
    if request.seller_code.trim().is_empty() {
        return Err(ValidationError::EmptySellerCode);
    }

    if request.out_trade_no.trim().is_empty() {
        return Err(ValidationError::EmptyOutTradeNo);
    }

    if request.currency.trim().is_empty() {
        return Err(ValidationError::EmptyCurrency);
    }

    if !request.total_amount.is_finite() || request.total_amount <= 0.0 {
        return Err(ValidationError::InvalidAmount(request.total_amount));
    }

    validate_detail(&request.detail)?;

    Ok(())
}

/// Validate an order status query request
pub fn validate_query_order(request: &QueryOrderRequest) -> Result<(), ValidationError> {
    if request.out_trade_no.trim().is_empty() {
        return Err(ValidationError::EmptyOutTradeNo);
    }
    Ok(())
}

fn validate_detail(detail: &[OrderDetail]) -> Result<(), ValidationError> {
    for (index, line) in detail.iter().enumerate() {
        if line.no.trim().is_empty() {
            return Err(ValidationError::EmptyDetailNo(index));
        }
        if line.name.trim().is_empty() {
            return Err(ValidationError::EmptyDetailName(index));
        }
    }
    Ok(())
}
