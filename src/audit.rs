//! Decision records for auditing pipeline outcomes.
//!
//! [`Pipeline::process`](crate::Pipeline::process) collapses everything
//! into one boolean. For callers that need to audit *why* a request was
//! denied, [`Pipeline::evaluate`](crate::Pipeline::evaluate) yields a
//! [`Decision`] carrying the per-step outcomes. Decisions hold only safe
//! metadata: the principal, step results, and the name of a
//! short-circuiting stage — never credentials or attribute values.

use std::cell::RefCell;
use std::fmt;

/// Outcome of one pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step accepted the request.
    Pass,
    /// The step rejected the request.
    Fail,
}

impl StepOutcome {
    /// Returns `true` for [`StepOutcome::Pass`].
    pub fn passed(self) -> bool {
        matches!(self, StepOutcome::Pass)
    }
}

impl From<bool> for StepOutcome {
    fn from(passed: bool) -> Self {
        if passed {
            StepOutcome::Pass
        } else {
            StepOutcome::Fail
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Pass => write!(f, "pass"),
            StepOutcome::Fail => write!(f, "fail"),
        }
    }
}

/// The recorded outcome of one pipeline evaluation.
///
/// Captures the middleware scan result (and which stage short-circuited
/// it, if any), the authentication and authorization results, and the
/// final conjunction via [`allowed`](Self::allowed).
///
/// # Examples
///
/// ```
/// use authgate::{IdentityRecord, MemoryDirectory, Pipeline, Request};
/// use std::sync::Arc;
///
/// let mut directory = MemoryDirectory::new();
/// directory.insert(IdentityRecord::new("admin1", "password1", "admin"));
///
/// let pipeline = Pipeline::new("admin", Arc::new(directory));
/// let decision = pipeline
///     .evaluate(&Request::new("admin1", "password1"))
///     .unwrap();
///
/// assert!(decision.allowed());
/// assert!(decision.authentication().passed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    principal: String,
    middleware: StepOutcome,
    short_circuited_stage: Option<String>,
    authentication: StepOutcome,
    authorization: StepOutcome,
}

impl Decision {
    pub(crate) fn new(
        principal: impl Into<String>,
        middleware: StepOutcome,
        short_circuited_stage: Option<String>,
        authentication: StepOutcome,
        authorization: StepOutcome,
    ) -> Self {
        Self {
            principal: principal.into(),
            middleware,
            short_circuited_stage,
            authentication,
            authorization,
        }
    }

    /// The principal the evaluated request claimed.
    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// Outcome of the middleware scan. `Pass` when every stage passed,
    /// vacuously `Pass` for an empty stage list.
    pub fn middleware(&self) -> StepOutcome {
        self.middleware
    }

    /// Name of the stage that short-circuited the scan, if any.
    pub fn short_circuited_stage(&self) -> Option<&str> {
        self.short_circuited_stage.as_deref()
    }

    /// Outcome of the fixed authentication step.
    pub fn authentication(&self) -> StepOutcome {
        self.authentication
    }

    /// Outcome of the fixed authorization step.
    pub fn authorization(&self) -> StepOutcome {
        self.authorization
    }

    /// The final decision: the conjunction of all three steps.
    pub fn allowed(&self) -> bool {
        self.middleware.passed() && self.authentication.passed() && self.authorization.passed()
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "decision principal={} middleware={} authentication={} authorization={} allowed={}",
            self.principal,
            self.middleware,
            self.authentication,
            self.authorization,
            self.allowed()
        )?;
        if let Some(stage) = &self.short_circuited_stage {
            write!(f, " short_circuited_by={}", stage)?;
        }
        Ok(())
    }
}

/// In-memory recorder for pipeline decisions.
///
/// A simple vector-backed log for tests and demonstration. In production
/// you would typically forward decisions to a persistent audit system;
/// persistence is out of scope for this crate.
///
/// Not shareable across threads; record decisions from the evaluating
/// thread.
#[derive(Debug, Default)]
pub struct DecisionLog {
    decisions: RefCell<Vec<Decision>>,
}

impl DecisionLog {
    /// Creates an empty decision log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a decision in evaluation order.
    pub fn record(&self, decision: Decision) {
        self.decisions.borrow_mut().push(decision);
    }

    /// Returns a snapshot of all recorded decisions.
    pub fn decisions(&self) -> Vec<Decision> {
        self.decisions.borrow().clone()
    }

    /// Returns the number of recorded decisions.
    pub fn len(&self) -> usize {
        self.decisions.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.decisions.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denied_decision() -> Decision {
        Decision::new(
            "user2",
            StepOutcome::Fail,
            Some("require_attribute".to_string()),
            StepOutcome::Pass,
            StepOutcome::Pass,
        )
    }

    #[test]
    fn allowed_is_the_conjunction_of_all_steps() {
        let allowed = Decision::new("admin1", StepOutcome::Pass, None, StepOutcome::Pass, StepOutcome::Pass);
        assert!(allowed.allowed());

        assert!(!denied_decision().allowed());
    }

    #[test]
    fn display_names_the_short_circuiting_stage() {
        let rendered = format!("{}", denied_decision());

        assert!(rendered.contains("principal=user2"));
        assert!(rendered.contains("middleware=fail"));
        assert!(rendered.contains("allowed=false"));
        assert!(rendered.contains("short_circuited_by=require_attribute"));
    }

    #[test]
    fn log_records_in_order() {
        let log = DecisionLog::new();
        assert!(log.is_empty());

        log.record(denied_decision());
        log.record(Decision::new(
            "admin1",
            StepOutcome::Pass,
            None,
            StepOutcome::Pass,
            StepOutcome::Pass,
        ));

        assert_eq!(log.len(), 2);
        let decisions = log.decisions();
        assert_eq!(decisions[0].principal(), "user2");
        assert_eq!(decisions[1].principal(), "admin1");
    }
}
