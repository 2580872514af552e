//! Canonical string construction
//!
//! The gateway recomputes the signature from the request it receives, so both
//! sides must agree on one deterministic rendering of the signed fields. The
//! rules live here; the digest lives in [`crate::digest`].

use kesspay_core::{FieldValue, SignField, SIGN_FIELD};

use crate::error::SignError;

/// Build the canonical string for a signing field table.
///
/// Filters out the `sign` field, empty/whitespace names and collection-valued
/// fields, sorts the remainder by name (byte-wise, not locale-aware), joins
/// the pairs as `name=value` with `&`, and appends `&key=<secret_key>`.
///
/// # Errors
///
/// Returns [`SignError::EmptySecretKey`] if the key is empty or whitespace,
/// and [`SignError::UnrenderableValue`] if a numeric field is not finite.
///
/// # Example
///
/// ```rust
/// use kesspay_core::SignField;
/// use kesspay_sign::canonical_string;
///
/// let fields = [SignField::text("b", "2"), SignField::text("a", "1")];
/// let canonical = canonical_string(&fields, "testkey").unwrap();
/// assert_eq!(canonical, "a=1&b=2&key=testkey");
/// ```
pub fn canonical_string(fields: &[SignField<'_>], secret_key: &str) -> Result<String, SignError> {
    if secret_key.trim().is_empty() {
        return Err(SignError::EmptySecretKey);
    }

    let mut pairs: Vec<(&str, String)> = Vec::with_capacity(fields.len());
    for field in fields {
        if field.name == SIGN_FIELD || field.name.trim().is_empty() {
            continue;
        }
        let rendered = match &field.value {
            FieldValue::Collection => continue,
            FieldValue::Text(s) => (*s).to_string(),
            FieldValue::Number(n) => render_number(field.name, *n)?,
            FieldValue::Flag(b) => b.to_string(),
        };
        pairs.push((field.name, rendered));
    }

    // Byte-wise ascending, independent of declaration order. The sort is
    // stable, so duplicate names keep their declared order.
    pairs.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    let joined = pairs
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!("{}&key={}", joined, secret_key))
}

/// Render a numeric field in its natural decimal form.
///
/// `16.5` renders as `16.5` and `10.0` as `10`, matching the renderings the
/// gateway verifies against. Non-finite values have no decimal form at all.
fn render_number(field: &str, value: f64) -> Result<String, SignError> {
    if !value.is_finite() {
        return Err(SignError::UnrenderableValue {
            field: field.to_string(),
            reason: format!("non-finite number {}", value),
        });
    }
    Ok(value.to_string())
}
