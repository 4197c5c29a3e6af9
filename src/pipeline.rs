use std::sync::Arc;

use crate::audit::{Decision, StepOutcome};
use crate::authenticate::{Authenticator, CredentialAuthenticator};
use crate::authorize::{Authorizer, RoleAuthorizer};
use crate::directory::IdentityDirectory;
use crate::error::Error;
use crate::request::Request;
use crate::stage::MiddlewareStage;

/// The request-authorization pipeline.
///
/// A `Pipeline` holds an ordered list of [`MiddlewareStage`]s plus
/// exactly one [`Authenticator`] and one [`Authorizer`], and decides for
/// each submitted [`Request`] whether it may proceed.
///
/// # Evaluation order
///
/// 1. Middleware stages run in registration order; the scan stops at the
///    first stage that returns `false`.
/// 2. The authentication step always runs, independent of the middleware
///    outcome.
/// 3. The authorization step always runs, independent of both prior
///    outcomes.
/// 4. The final decision is the conjunction of all three. There is no
///    short-circuit between the three steps, so side effects in the
///    fixed steps run exactly once per call.
///
/// A directory failure in either fixed step still lets the other fixed
/// step run, then surfaces as [`Error::Directory`] rather than a boolean:
/// "deny" and "undecidable" stay distinguishable.
///
/// The pipeline itself holds no mutable state across calls and may be
/// shared across threads; each call re-resolves the principal against
/// the directory fresh.
///
/// # Examples
///
/// ```
/// use authgate::{
///     IdentityRecord, MemoryDirectory, Pipeline, Request, RequireAttribute,
/// };
/// use std::sync::Arc;
///
/// let mut directory = MemoryDirectory::new();
/// directory.insert(IdentityRecord::new("admin1", "password1", "admin"));
///
/// let pipeline = Pipeline::new("admin", Arc::new(directory))
///     .with_stage(RequireAttribute::new("token"));
///
/// let request = Request::new("admin1", "password1").with_attribute("token", "t1");
/// assert!(pipeline.process(&request).unwrap());
///
/// let bare = Request::new("admin1", "password1");
/// assert!(!pipeline.process(&bare).unwrap());
/// ```
pub struct Pipeline {
    required_role: String,
    directory: Arc<dyn IdentityDirectory>,
    stages: Vec<Box<dyn MiddlewareStage>>,
    authenticator: Box<dyn Authenticator>,
    authorizer: Box<dyn Authorizer>,
}

impl Pipeline {
    /// Creates a pipeline protecting one resource policy: requests must
    /// hold `required_role` in the given directory.
    ///
    /// Starts with no middleware stages and the default policies
    /// ([`CredentialAuthenticator`] and [`RoleAuthorizer`]); every
    /// pipeline always has exactly one of each.
    pub fn new(required_role: impl Into<String>, directory: Arc<dyn IdentityDirectory>) -> Self {
        Self {
            required_role: required_role.into(),
            directory,
            stages: Vec::new(),
            authenticator: Box::new(CredentialAuthenticator),
            authorizer: Box::new(RoleAuthorizer),
        }
    }

    /// Creates a pipeline with an initial ordered list of stages.
    pub fn with_stages(
        required_role: impl Into<String>,
        directory: Arc<dyn IdentityDirectory>,
        stages: Vec<Box<dyn MiddlewareStage>>,
    ) -> Self {
        let mut pipeline = Self::new(required_role, directory);
        pipeline.stages = stages;
        pipeline
    }

    /// Replaces the authentication policy.
    pub fn with_authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Box::new(authenticator);
        self
    }

    /// Replaces the authorization policy.
    pub fn with_authorizer(mut self, authorizer: impl Authorizer + 'static) -> Self {
        self.authorizer = Box::new(authorizer);
        self
    }

    /// Appends a stage to the end of the evaluation order, returning the
    /// pipeline for chaining.
    pub fn with_stage(mut self, stage: impl MiddlewareStage + 'static) -> Self {
        self.add_stage(stage);
        self
    }

    /// Appends a stage to the end of the evaluation order.
    pub fn add_stage(&mut self, stage: impl MiddlewareStage + 'static) {
        self.stages.push(Box::new(stage));
    }

    /// Returns the role this pipeline authorizes.
    pub fn required_role(&self) -> &str {
        &self.required_role
    }

    /// Decides whether the request may proceed.
    ///
    /// Equivalent to [`evaluate`](Self::evaluate) collapsed to the final
    /// conjunction. `Ok(false)` covers every expected rejection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Directory`] when the identity directory could not
    /// be queried; an outage is never reported as a deny.
    pub fn process(&self, request: &Request) -> Result<bool, Error> {
        self.evaluate(request).map(|decision| decision.allowed())
    }

    /// Evaluates the request and reports the per-step outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Directory`] when the identity directory could not
    /// be queried. Both fixed steps are attempted before the error is
    /// surfaced; a failure during authentication does not skip
    /// authorization.
    pub fn evaluate(&self, request: &Request) -> Result<Decision, Error> {
        let mut middleware = StepOutcome::Pass;
        let mut short_circuited = None;
        for stage in &self.stages {
            if !stage.evaluate(request) {
                tracing::debug!(
                    principal = %request.principal(),
                    stage = stage.name(),
                    "middleware stage rejected request"
                );
                middleware = StepOutcome::Fail;
                short_circuited = Some(stage.name().to_string());
                break;
            }
        }

        // Both fixed steps always run, whatever the middleware scan or
        // the other step produced; errors are surfaced only afterwards.
        let authenticated = self
            .authenticator
            .authenticate(request, self.directory.as_ref());
        let authorized =
            self.authorizer
                .authorize(request, self.directory.as_ref(), &self.required_role);

        let authentication = StepOutcome::from(authenticated?);
        let authorization = StepOutcome::from(authorized?);

        let decision = Decision::new(
            request.principal(),
            middleware,
            short_circuited,
            authentication,
            authorization,
        );
        tracing::debug!(
            principal = %request.principal(),
            allowed = decision.allowed(),
            "pipeline decision"
        );
        Ok(decision)
    }
}
