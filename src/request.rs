use std::collections::HashMap;

use crate::credential::Credential;

/// An inbound request awaiting an authorization decision.
///
/// A `Request` carries the caller's claimed identity (`principal`), the
/// secret presented to prove that claim (`credential`), and an open-ended
/// set of ancillary string attributes consulted by middleware stages
/// (for example a bearer token).
///
/// Requests are constructed once by the caller, are immutable for the
/// duration of a pipeline evaluation, and are not retained by the
/// pipeline after [`process`](crate::Pipeline::process) returns.
///
/// # Examples
///
/// ```
/// use authgate::Request;
///
/// let request = Request::new("admin1", "password1")
///     .with_attribute("token", "t1");
///
/// assert_eq!(request.principal(), "admin1");
/// assert_eq!(request.attribute("token"), Some("t1"));
/// assert_eq!(request.attribute("missing"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    principal: String,
    credential: Credential,
    attributes: HashMap<String, String>,
}

impl Request {
    /// Creates a request with the given principal and credential and no
    /// attributes.
    pub fn new(principal: impl Into<String>, credential: impl Into<Credential>) -> Self {
        Self {
            principal: principal.into(),
            credential: credential.into(),
            attributes: HashMap::new(),
        }
    }

    /// Attaches an attribute, returning the request for chaining.
    ///
    /// A later call with the same key replaces the earlier value.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the identity claimed by this request.
    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// Returns the secret presented to prove the principal's claim.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Looks up an attribute by key.
    ///
    /// Returns `None` when the key is absent. An empty string value is a
    /// distinct state from an absent key: `attribute("k")` on a request
    /// built with `with_attribute("k", "")` returns `Some("")`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Returns `true` if an attribute with the given key is present,
    /// regardless of its value.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_differs_from_empty_value() {
        let request = Request::new("user2", "password2").with_attribute("token", "");

        assert_eq!(request.attribute("token"), Some(""));
        assert!(request.has_attribute("token"));

        assert_eq!(request.attribute("other"), None);
        assert!(!request.has_attribute("other"));
    }

    #[test]
    fn later_attribute_replaces_earlier() {
        let request = Request::new("user2", "password2")
            .with_attribute("token", "old")
            .with_attribute("token", "new");

        assert_eq!(request.attribute("token"), Some("new"));
    }

    #[test]
    fn debug_output_never_shows_credential() {
        let request = Request::new("admin1", "password1");
        let debug_output = format!("{:?}", request);

        assert!(debug_output.contains("admin1"));
        assert!(!debug_output.contains("password1"));
        assert!(debug_output.contains("[REDACTED]"));
    }
}
