use std::fmt;

/// Errors that can occur while evaluating a pipeline.
///
/// Expected-false outcomes (credential mismatch, missing role, failed
/// middleware precondition) are *not* errors; they surface as a `false`
/// decision. An `Error` means the call could not be decided at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The identity directory could not be queried.
    Directory(DirectoryError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Directory(e) => write!(f, "identity directory failure: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Directory(e) => Some(e),
        }
    }
}

impl From<DirectoryError> for Error {
    fn from(e: DirectoryError) -> Self {
        Error::Directory(e)
    }
}

/// Failure to query the identity directory.
///
/// Returned by [`IdentityDirectory`](crate::IdentityDirectory)
/// implementations when a lookup cannot be answered. This is distinct
/// from a `NotFound` outcome, which is the normal `Ok(None)` result:
/// callers need to tell "deny" apart from "undecidable", so an outage is
/// never collapsed into `false`.
///
/// # Examples
///
/// ```
/// use authgate::{DirectoryError, DirectoryErrorKind};
///
/// let error = DirectoryError::new(DirectoryErrorKind::Unavailable);
/// assert_eq!(error.kind(), DirectoryErrorKind::Unavailable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryError {
    kind: DirectoryErrorKind,
    message: Option<String>,
}

impl DirectoryError {
    /// Creates a new directory error with the specified kind.
    pub fn new(kind: DirectoryErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Creates a new directory error with a custom message.
    pub fn with_message(kind: DirectoryErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> DirectoryErrorKind {
        self.kind
    }

    /// Returns the error message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = &self.message {
            write!(f, "{}: {}", self.kind, msg)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl std::error::Error for DirectoryError {}

/// The kind of directory failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryErrorKind {
    /// The directory could not be reached at all.
    Unavailable,
    /// The directory was reached but the lookup itself failed.
    Query,
}

impl fmt::Display for DirectoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryErrorKind::Unavailable => write!(f, "directory unavailable"),
            DirectoryErrorKind::Query => write!(f, "lookup failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_error_displays_kind_and_message() {
        let bare = DirectoryError::new(DirectoryErrorKind::Unavailable);
        assert_eq!(format!("{}", bare), "directory unavailable");

        let detailed =
            DirectoryError::with_message(DirectoryErrorKind::Query, "timeout after 5s");
        assert_eq!(format!("{}", detailed), "lookup failed: timeout after 5s");
    }

    #[test]
    fn error_wraps_directory_error() {
        let inner = DirectoryError::new(DirectoryErrorKind::Unavailable);
        let error: Error = inner.clone().into();

        assert_eq!(error, Error::Directory(inner));
        assert!(format!("{}", error).contains("directory unavailable"));
    }
}
