//! Property tests for the authorization pipeline.
//!
//! These validate cross-module invariants: determinism, the vacuous
//! empty-stage case, and the always-deny property of a failing stage.

use std::sync::Arc;

use authgate::{
    IdentityRecord, MemoryDirectory, MiddlewareStage, Pipeline, Request, RequireAttribute,
};
use proptest::prelude::*;

// Strategy: principal/credential/role labels in the shapes callers use
fn arb_label() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_-]{1,12}").unwrap()
}

fn arb_directory() -> impl Strategy<Value = (MemoryDirectory, Vec<String>)> {
    prop::collection::vec((arb_label(), arb_label(), arb_label()), 0..5).prop_map(|entries| {
        let mut directory = MemoryDirectory::new();
        let mut principals = Vec::new();
        for (principal, credential, role) in entries {
            principals.push(principal.clone());
            directory.insert(IdentityRecord::new(principal, credential, role));
        }
        (directory, principals)
    })
}

/// A stage with a constant verdict.
#[derive(Clone)]
struct ConstStage(bool);

impl MiddlewareStage for ConstStage {
    fn evaluate(&self, _request: &Request) -> bool {
        self.0
    }

    fn name(&self) -> &str {
        "const"
    }
}

proptest! {
    /// Property: process is deterministic.
    ///
    /// Two calls with an identical request against an unchanged directory
    /// return identical results.
    #[test]
    fn proptest_process_is_deterministic(
        (directory, _) in arb_directory(),
        principal in arb_label(),
        credential in arb_label(),
        role in arb_label(),
        has_token in any::<bool>()
    ) {
        let pipeline = Pipeline::new(role, Arc::new(directory))
            .with_stage(RequireAttribute::new("token"));

        let mut request = Request::new(principal, credential);
        if has_token {
            request = request.with_attribute("token", "t");
        }

        let first = pipeline.process(&request);
        let second = pipeline.process(&request);
        prop_assert_eq!(first, second);
    }

    /// Property: an always-false stage forces a deny, regardless of the
    /// authentication/authorization outcome.
    #[test]
    fn proptest_failing_stage_always_denies(
        (directory, principals) in arb_directory(),
        index in any::<prop::sample::Index>(),
        credential in arb_label(),
        role in arb_label()
    ) {
        // Exercise both known and unknown principals.
        let principal = if principals.is_empty() {
            "nobody".to_string()
        } else {
            principals[index.index(principals.len())].clone()
        };

        let pipeline = Pipeline::new(role, Arc::new(directory))
            .with_stage(ConstStage(true))
            .with_stage(ConstStage(false));

        let allowed = pipeline.process(&Request::new(principal, credential)).unwrap();
        prop_assert!(!allowed);
    }

    /// Property: with no stages the middleware scan is vacuously true,
    /// so the decision equals authenticate AND authorize.
    #[test]
    fn proptest_empty_stages_reduce_to_the_fixed_steps(
        (directory, principals) in arb_directory(),
        index in any::<prop::sample::Index>(),
        credential in arb_label(),
        role in arb_label()
    ) {
        let principal = if principals.is_empty() {
            "nobody".to_string()
        } else {
            principals[index.index(principals.len())].clone()
        };

        let pipeline = Pipeline::new(role, Arc::new(directory));
        let decision = pipeline.evaluate(&Request::new(principal, credential)).unwrap();

        prop_assert!(decision.middleware().passed());
        prop_assert_eq!(
            decision.allowed(),
            decision.authentication().passed() && decision.authorization().passed()
        );
    }

    /// Property: a principal absent from the directory never
    /// authenticates, for any credential value.
    #[test]
    fn proptest_unknown_principal_never_authenticates(
        credential in arb_label(),
        role in arb_label()
    ) {
        let pipeline = Pipeline::new(role, Arc::new(MemoryDirectory::new()));
        let decision = pipeline.evaluate(&Request::new("ghost", credential)).unwrap();

        prop_assert!(!decision.authentication().passed());
        prop_assert!(!decision.authorization().passed());
        prop_assert!(!decision.allowed());
    }

    /// Property: process and evaluate agree for identical inputs.
    #[test]
    fn proptest_process_matches_evaluate(
        (directory, principals) in arb_directory(),
        index in any::<prop::sample::Index>(),
        credential in arb_label(),
        role in arb_label()
    ) {
        let principal = if principals.is_empty() {
            "nobody".to_string()
        } else {
            principals[index.index(principals.len())].clone()
        };

        let pipeline = Pipeline::new(role, Arc::new(directory));
        let request = Request::new(principal, credential);

        let processed = pipeline.process(&request).unwrap();
        let decision = pipeline.evaluate(&request).unwrap();
        prop_assert_eq!(processed, decision.allowed());
    }
}
