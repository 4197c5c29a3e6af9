use crate::request::Request;

/// One pluggable pre-check run before the fixed authenticate/authorize
/// steps.
///
/// A stage is a pure function of the request and its own internal state:
/// it must not mutate the request, and it never errors. Returning `false`
/// means the stage's precondition was not met (for example a required
/// attribute is missing) — a normal, expected outcome, not a failure.
///
/// Stages are registered into a [`Pipeline`](crate::Pipeline) and run in
/// registration order. The contract assumes no ordering dependency
/// between stages; the pipeline imposes the total order.
///
/// Implementations must be free of unsynchronized shared mutable state,
/// since one pipeline may serve many concurrent callers.
pub trait MiddlewareStage: Send + Sync {
    /// Evaluates the stage's precondition against the request.
    fn evaluate(&self, request: &Request) -> bool;

    /// A short label identifying this stage in pipeline logs.
    fn name(&self) -> &str {
        "middleware"
    }
}

/// A stage that passes only when a given attribute key is present.
///
/// Covers the common bearer-token precondition: a request without the
/// expected attribute key evaluates to `false`, never to an error. The
/// value is not inspected — presence with an empty value still passes,
/// since key absence and empty value are distinct states.
///
/// # Examples
///
/// ```
/// use authgate::{MiddlewareStage, Request, RequireAttribute};
///
/// let stage = RequireAttribute::new("token");
///
/// let with_token = Request::new("admin1", "password1").with_attribute("token", "t1");
/// assert!(stage.evaluate(&with_token));
///
/// let without_token = Request::new("admin1", "password1");
/// assert!(!stage.evaluate(&without_token));
/// ```
#[derive(Debug, Clone)]
pub struct RequireAttribute {
    key: String,
}

impl RequireAttribute {
    /// Creates a stage requiring the given attribute key to be present.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Returns the attribute key this stage requires.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl MiddlewareStage for RequireAttribute {
    fn evaluate(&self, request: &Request) -> bool {
        request.has_attribute(&self.key)
    }

    fn name(&self) -> &str {
        "require_attribute"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_evaluates_false_without_error() {
        let stage = RequireAttribute::new("token");
        let request = Request::new("user2", "password2");

        assert!(!stage.evaluate(&request));
    }

    #[test]
    fn empty_value_still_counts_as_present() {
        let stage = RequireAttribute::new("token");
        let request = Request::new("user2", "password2").with_attribute("token", "");

        assert!(stage.evaluate(&request));
    }

    #[test]
    fn unrelated_attributes_do_not_satisfy_the_stage() {
        let stage = RequireAttribute::new("token");
        let request = Request::new("user2", "password2").with_attribute("trace-id", "abc");

        assert!(!stage.evaluate(&request));
    }
}
