//! # KessPay Core
//!
//! Request and response types for the KessPay WebPay gateway.
//!
//! This crate provides:
//! - Typed records for the gateway's order operations
//! - The [`Signable`] contract with per-request signing field tables
//! - Request validation
//!
//! ## Example
//!
//! ```rust
//! use kesspay_core::{validate_create_order, CreateOrderRequest};
//!
//! let order = CreateOrderRequest::new("958689692346", "TR5673455626", 16.5, "USD");
//! validate_create_order(&order).unwrap();
//! ```

pub mod signable;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use signable::*;
pub use types::*;
pub use validation::*;
