use std::fmt;

/// A presented or stored secret, protected from accidental exposure.
///
/// `Credential` wraps the secret a request presents (and the expected
/// secret held by an [`IdentityRecord`](crate::IdentityRecord)) so that
/// it cannot leak through `Debug`, `Display`, or log output. The raw
/// value can only be reached through the explicit [`expose`](Self::expose)
/// method.
///
/// Comparison is exact, case-sensitive string equality via `PartialEq`;
/// credential hashing and storage policy belong to the identity
/// directory, not to this crate.
///
/// # Examples
///
/// ```
/// use authgate::Credential;
///
/// let presented = Credential::from("password1");
///
/// // Safe: credentials are automatically redacted
/// assert_eq!(format!("{:?}", presented), "[REDACTED]");
/// assert_eq!(format!("{}", presented), "[REDACTED]");
///
/// // Comparison never requires exposing the value
/// assert_eq!(presented, Credential::from("password1"));
/// assert_ne!(presented, Credential::from("Password1"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    // This field MUST remain private. Making it public exposes the secret
    // directly and defeats automatic redaction (CWE-532).
    inner: String,
}

impl Credential {
    /// Wraps a secret value in a `Credential`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Explicitly exposes the raw secret.
    ///
    /// # Security Warning
    ///
    /// The exposed value must not be logged or displayed. Prefer direct
    /// `Credential` equality, which never needs this call.
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Credential::new(value)
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Credential::new(value)
    }
}

// Do NOT implement Deref, AsRef, or Borrow here. The only raw access is
// expose(), and formatted output MUST stay "[REDACTED]" unconditionally.

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
