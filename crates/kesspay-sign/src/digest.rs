//! MD5 digesting for the gateway's signature format

use md5::{Digest, Md5};
use std::fmt::Write;

/// Digest raw bytes with MD5.
///
/// Returns the gateway's signature form: a 32-character lower-case hex string.
///
/// # Example
///
/// ```rust
/// use kesspay_sign::md5_hex;
///
/// let digest = md5_hex(b"hello");
/// assert_eq!(digest, "5d41402abc4b2a76b9719d911017c592");
/// ```
pub fn md5_hex(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    let result = hasher.finalize();

    hex_encode(&result)
}

/// Check whether a string has the shape of a gateway signature
/// (32 lower-case hex characters).
pub fn is_valid_signature(signature: &str) -> bool {
    signature.len() == 32
        && signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Constant-time string comparison to prevent timing attacks
pub(crate) fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

/// Convert bytes to lowercase hex string
fn hex_encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(hex, "{:02x}", byte).unwrap();
    }
    hex
}
