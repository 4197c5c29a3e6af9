//! Pluggable request-authorization pipeline.
//!
//! This crate decides, for an incoming request, whether it may proceed:
//! an ordered sequence of independent middleware checks runs first,
//! followed by a fixed authentication step and a fixed authorization
//! step, with all-must-pass semantics.
//!
//! # Core Types
//!
//! - [`Request`]: immutable value carrying the claimed principal, a
//!   redacted [`Credential`], and open-ended string attributes
//! - [`IdentityDirectory`]: the external collaborator resolving a
//!   principal to its [`IdentityRecord`] (credential and role)
//! - [`MiddlewareStage`]: one pluggable pre-check; [`RequireAttribute`]
//!   is the bundled attribute-presence stage
//! - [`Authenticator`] / [`Authorizer`]: the two fixed, injected policy
//!   steps, defaulting to [`CredentialAuthenticator`] and
//!   [`RoleAuthorizer`]
//! - [`Pipeline`]: the orchestrator combining all of the above
//!
//! Expected rejections surface as `Ok(false)`; a directory outage
//! surfaces as [`Error::Directory`], keeping "deny" distinguishable from
//! "undecidable".
//!
//! # Examples
//!
//! ```
//! use authgate::{IdentityRecord, MemoryDirectory, Pipeline, Request, RequireAttribute};
//! use std::sync::Arc;
//!
//! let mut directory = MemoryDirectory::new();
//! directory.insert(IdentityRecord::new("admin1", "password1", "admin"));
//!
//! let pipeline = Pipeline::new("admin", Arc::new(directory))
//!     .with_stage(RequireAttribute::new("token"));
//!
//! let request = Request::new("admin1", "password1").with_attribute("token", "t1");
//! assert!(pipeline.process(&request).expect("directory is available"));
//!
//! // Missing token: denied by middleware, not an error.
//! let bare = Request::new("admin1", "password1");
//! assert!(!pipeline.process(&bare).expect("directory is available"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
mod authenticate;
mod authorize;
mod credential;
mod directory;
mod error;
mod pipeline;
mod request;
mod stage;

pub use audit::{Decision, DecisionLog, StepOutcome};
pub use authenticate::{Authenticator, CredentialAuthenticator};
pub use authorize::{Authorizer, RoleAuthorizer};
pub use credential::Credential;
pub use directory::{IdentityDirectory, IdentityRecord, MemoryDirectory};
pub use error::{DirectoryError, DirectoryErrorKind, Error};
pub use pipeline::Pipeline;
pub use request::Request;
pub use stage::{MiddlewareStage, RequireAttribute};
