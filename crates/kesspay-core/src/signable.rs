//! Signing contract shared by all gateway request kinds.
//!
//! Every request the gateway accepts carries a `sign` field computed over its
//! other scalar fields. Instead of inspecting types at runtime, each request
//! kind declares a static table of its wire fields via [`Signable::sign_fields`];
//! the signer consumes that table and nothing else.

/// Wire name of the signature field. Always excluded from canonicalization.
pub const SIGN_FIELD: &str = "sign";

/// The signature scheme the gateway expects in `sign_type`.
pub const SIGN_TYPE_MD5: &str = "MD5";

/// Value of a wire field as declared in a signing table.
///
/// Scalars render into the canonical string; `Collection` marks array-valued
/// fields (e.g. order detail lines), which are never canonicalized.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// String-typed field, rendered as-is.
    Text(&'a str),
    /// Numeric field, rendered in its natural decimal form.
    Number(f64),
    /// Boolean field, rendered as `true`/`false`.
    Flag(bool),
    /// Array or other multi-value field. Excluded from the canonical string.
    Collection,
}

/// One wire field of a request: its wire name and declared value.
#[derive(Debug, Clone, PartialEq)]
pub struct SignField<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> SignField<'a> {
    pub fn text(name: &'static str, value: &'a str) -> Self {
        Self {
            name,
            value: FieldValue::Text(value),
        }
    }

    pub fn number(name: &'static str, value: f64) -> Self {
        Self {
            name,
            value: FieldValue::Number(value),
        }
    }

    pub fn flag(name: &'static str, value: bool) -> Self {
        Self {
            name,
            value: FieldValue::Flag(value),
        }
    }

    pub fn collection(name: &'static str) -> Self {
        Self {
            name,
            value: FieldValue::Collection,
        }
    }

    /// Whether this field is excluded from canonicalization by kind.
    pub fn is_collection(&self) -> bool {
        matches!(self.value, FieldValue::Collection)
    }
}

/// A request record the gateway requires a signature for.
///
/// Implementors expose the mutable `sign` field, the fixed `sign_type`, and
/// the static field table the signature is computed over. The table lists
/// every wire field except `sign` itself, under its wire name, in declaration
/// order; unset optional fields are omitted, matching their absence from the
/// serialized form.
pub trait Signable {
    /// The fixed signature scheme identifier (`"MD5"`).
    fn sign_type(&self) -> &str;

    /// The current signature, if the request has been signed.
    fn sign(&self) -> Option<&str>;

    /// Store a computed signature on the request.
    fn set_sign(&mut self, signature: String);

    /// The wire fields the signature is computed over.
    fn sign_fields(&self) -> Vec<SignField<'_>>;
}
