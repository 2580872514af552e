//! # KessPay HTTP
//!
//! HTTP client for the KessPay WebPay gateway.
//!
//! This crate provides:
//! - [`GatewayConfig`] for credentials and endpoint selection
//! - [`WebPayClient`], a reqwest-based client that validates, signs, and
//!   posts requests to the gateway and parses the typed response
//!
//! ## Example
//!
//! ```ignore
//! use kesspay_core::CreateOrderRequest;
//! use kesspay_http::{GatewayConfig, WebPayClient};
//!
//! let config = GatewayConfig::from_env()?;
//! let client = WebPayClient::new(config);
//!
//! let order = CreateOrderRequest::new("958689692346", "TR5673455626", 16.5, "USD");
//! let response = client.create_order(order).await?;
//! if response.is_success() {
//!     let data = response.data.unwrap();
//!     println!("payment link: {}", data.payment_link.unwrap_or_default());
//! }
//! ```

mod client;
mod config;
mod error;

pub use client::{WebPayClient, GATEWAY_PATH};
pub use config::{ConfigError, GatewayConfig};
pub use error::WebPayHttpError;
