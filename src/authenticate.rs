use crate::directory::IdentityDirectory;
use crate::error::DirectoryError;
use crate::request::Request;

/// The fixed authentication step of a pipeline.
///
/// Validates that the request's claimed identity matches a stored
/// credential. New authentication policies are added by implementing
/// this trait and injecting the implementation into a
/// [`Pipeline`](crate::Pipeline) — by composition, not by deriving a new
/// pipeline type.
///
/// `Ok(false)` covers every expected rejection, including an unknown
/// principal; `Err` is reserved for a directory that could not be
/// queried at all.
pub trait Authenticator: Send + Sync {
    /// Decides whether the request's claimed identity is proven.
    fn authenticate(
        &self,
        request: &Request,
        directory: &dyn IdentityDirectory,
    ) -> Result<bool, DirectoryError>;
}

/// The default authenticator: exact credential match against the
/// directory record.
///
/// Looks up the request's principal; an absent record is a normal
/// `Ok(false)` outcome, never an error. Otherwise the presented
/// [`Credential`](crate::Credential) must equal the stored one exactly (case-sensitive
/// string equality — hashing and timing-safe comparison are the
/// directory's concern, not this crate's).
///
/// # Examples
///
/// ```
/// use authgate::{
///     Authenticator, CredentialAuthenticator, IdentityRecord, MemoryDirectory, Request,
/// };
///
/// let mut directory = MemoryDirectory::new();
/// directory.insert(IdentityRecord::new("admin1", "password1", "admin"));
///
/// let authenticator = CredentialAuthenticator;
///
/// let ok = Request::new("admin1", "password1");
/// assert!(authenticator.authenticate(&ok, &directory).unwrap());
///
/// let unknown = Request::new("ghost", "password1");
/// assert!(!authenticator.authenticate(&unknown, &directory).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialAuthenticator;

impl Authenticator for CredentialAuthenticator {
    fn authenticate(
        &self,
        request: &Request,
        directory: &dyn IdentityDirectory,
    ) -> Result<bool, DirectoryError> {
        let matched = match directory.find_by_principal(request.principal())? {
            Some(record) => record.credential() == request.credential(),
            None => false,
        };
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{IdentityRecord, MemoryDirectory};

    fn directory() -> MemoryDirectory {
        let mut directory = MemoryDirectory::new();
        directory.insert(IdentityRecord::new("admin1", "password1", "admin"));
        directory.insert(IdentityRecord::new("user2", "password2", "user"));
        directory
    }

    #[test]
    fn matching_credential_authenticates() {
        let directory = directory();
        let request = Request::new("user2", "password2");

        assert!(CredentialAuthenticator
            .authenticate(&request, &directory)
            .unwrap());
    }

    #[test]
    fn wrong_credential_is_rejected() {
        let directory = directory();
        let request = Request::new("user2", "password1");

        assert!(!CredentialAuthenticator
            .authenticate(&request, &directory)
            .unwrap());
    }

    #[test]
    fn unknown_principal_is_false_for_any_credential() {
        let directory = directory();
        for credential in ["password1", "password2", ""] {
            let request = Request::new("nobody", credential);
            assert!(!CredentialAuthenticator
                .authenticate(&request, &directory)
                .unwrap());
        }
    }

    #[test]
    fn credential_comparison_is_case_sensitive() {
        let directory = directory();
        let request = Request::new("user2", "Password2");

        assert!(!CredentialAuthenticator
            .authenticate(&request, &directory)
            .unwrap());
    }
}
