use crate::directory::IdentityDirectory;
use crate::error::DirectoryError;
use crate::request::Request;

/// The fixed authorization step of a pipeline.
///
/// Validates that the resolved identity holds a role sufficient for the
/// requested operation. Like [`Authenticator`](crate::Authenticator),
/// new policies are injected into the pipeline by composition rather
/// than by subclassing.
///
/// `Ok(false)` covers every expected rejection, including an unknown
/// principal; `Err` is reserved for a directory that could not be
/// queried at all.
pub trait Authorizer: Send + Sync {
    /// Decides whether the request's principal holds the required role.
    fn authorize(
        &self,
        request: &Request,
        directory: &dyn IdentityDirectory,
        required_role: &str,
    ) -> Result<bool, DirectoryError>;
}

/// The default authorizer: exact role match against the directory record.
///
/// Looks up the request's principal; an absent record is a normal
/// `Ok(false)` outcome. Otherwise the record's role must equal
/// `required_role` exactly — case-sensitive, no hierarchy, no wildcards.
/// A directory role of `"Admin"` does not satisfy a pipeline requiring
/// `"admin"`.
///
/// # Examples
///
/// ```
/// use authgate::{Authorizer, IdentityRecord, MemoryDirectory, Request, RoleAuthorizer};
///
/// let mut directory = MemoryDirectory::new();
/// directory.insert(IdentityRecord::new("admin1", "password1", "admin"));
///
/// let request = Request::new("admin1", "password1");
/// assert!(RoleAuthorizer.authorize(&request, &directory, "admin").unwrap());
/// assert!(!RoleAuthorizer.authorize(&request, &directory, "auditor").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleAuthorizer;

impl Authorizer for RoleAuthorizer {
    fn authorize(
        &self,
        request: &Request,
        directory: &dyn IdentityDirectory,
        required_role: &str,
    ) -> Result<bool, DirectoryError> {
        let granted = match directory.find_by_principal(request.principal())? {
            Some(record) => record.role() == required_role,
            None => false,
        };
        Ok(granted)
    }
}
