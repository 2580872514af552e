//! Signing and verification for gateway requests

use kesspay_core::Signable;

use crate::canonical::canonical_string;
use crate::digest::{constant_time_compare, md5_hex};
use crate::error::SignError;

/// Compute the signature for a request without mutating it.
///
/// The existing `sign` value, if any, never participates, so re-signing an
/// already-signed request yields the same signature as signing a fresh one.
///
/// # Errors
///
/// Returns [`SignError`] if the secret key is empty or a field cannot be
/// rendered; no partial signature is produced.
pub fn signature<T: Signable>(request: &T, secret_key: &str) -> Result<String, SignError> {
    let canonical = canonical_string(&request.sign_fields(), secret_key)?;
    Ok(md5_hex(canonical.as_bytes()))
}

/// Sign a request in place, storing the signature in its `sign` field.
///
/// # Example
///
/// ```rust
/// use kesspay_core::QueryOrderRequest;
/// use kesspay_sign::sign;
///
/// let mut query = QueryOrderRequest::new("TR5673455626");
/// sign(&mut query, "testkey").unwrap();
/// assert!(query.sign.is_some());
/// ```
pub fn sign<T: Signable>(request: &mut T, secret_key: &str) -> Result<(), SignError> {
    let signature = signature(request, secret_key)?;
    request.set_sign(signature);
    Ok(())
}

/// Sign a request by value, returning it with the signature populated.
///
/// Convenience form of [`sign`] for builder-style call sites.
pub fn into_signed<T: Signable>(mut request: T, secret_key: &str) -> Result<T, SignError> {
    sign(&mut request, secret_key)?;
    Ok(request)
}

/// Verify the signature embedded in a request.
///
/// Recomputes the signature from the request's fields and compares in
/// constant time. An unsigned request never verifies. The gateway signs its
/// notification callbacks with the same scheme, so this is the receiving half
/// of the protocol.
pub fn verify<T: Signable>(request: &T, secret_key: &str) -> Result<bool, SignError> {
    match request.sign() {
        Some(provided) => {
            let expected = signature(request, secret_key)?;
            Ok(constant_time_compare(&expected, provided))
        }
        None => Ok(false),
    }
}
