//! # KessPay Sign
//!
//! Deterministic request signing for the KessPay WebPay gateway.
//!
//! This crate provides:
//! - Canonical string construction from a request's signing field table
//! - MD5 digesting into the gateway's 32-character lower-case hex form
//! - Signing and signature verification for any [`Signable`] request
//!
//! ## Canonicalization rules
//!
//! 1. Take the request's wire fields, excluding `sign` itself
//! 2. Drop fields with empty or whitespace-only names
//! 3. Drop array/collection-valued fields (e.g. `detail`)
//! 4. Sort the rest by field name, byte-wise ascending
//! 5. Join as `name=value` pairs with `&`, then append `&key=<secret>`
//! 6. MD5 the resulting bytes, rendered as lower-case hex
//!
//! The same logical field set therefore signs identically regardless of
//! declaration order.
//!
//! ## Example
//!
//! ```rust
//! use kesspay_core::CreateOrderRequest;
//! use kesspay_sign::sign;
//!
//! let mut order = CreateOrderRequest::new("958689692346", "TR5673455626", 16.5, "USD");
//! sign(&mut order, "testkey").unwrap();
//! assert_eq!(order.sign.as_deref(), Some("aa0921bb55fea27e546fd1ecf1d6a16f"));
//! ```
//!
//! ## Digest choice
//!
//! MD5 is the scheme the gateway's verifier expects (`sign_type: "MD5"`).
//! Swapping in a stronger hash would simply make the remote side reject every
//! request, so the digest is not configurable.
//!
//! [`Signable`]: kesspay_core::Signable

mod canonical;
mod digest;
mod error;
mod signer;

pub use canonical::*;
pub use digest::*;
pub use error::*;
pub use signer::*;
