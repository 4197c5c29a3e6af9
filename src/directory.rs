//! The identity directory collaborator.
//!
//! The pipeline never stores credentials or roles itself; it consults an
//! external [`IdentityDirectory`] on every call. This module defines the
//! lookup contract, the record it yields, and a `HashMap`-backed
//! implementation for embedding and tests.

use std::collections::HashMap;

use crate::credential::Credential;
use crate::error::DirectoryError;

/// The stored identity for one principal.
///
/// Held by the identity directory, not by the pipeline. A directory
/// holds at most one record per principal.
#[derive(Debug, Clone)]
pub struct IdentityRecord {
    principal: String,
    credential: Credential,
    role: String,
}

impl IdentityRecord {
    /// Creates a record for a principal with its expected credential and
    /// single role label.
    pub fn new(
        principal: impl Into<String>,
        credential: impl Into<Credential>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            principal: principal.into(),
            credential: credential.into(),
            role: role.into(),
        }
    }

    /// Returns the principal this record belongs to.
    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// Returns the expected credential.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Returns the role label, compared exact-match by authorizers.
    pub fn role(&self) -> &str {
        &self.role
    }
}

/// Read-only lookup into an external identity store.
///
/// The pipeline treats every lookup as an idempotent query and performs
/// no caching: each [`process`](crate::Pipeline::process) call re-resolves
/// the principal fresh.
///
/// `Ok(None)` is the normal not-found outcome; `Err` means the store
/// could not be queried at all and is propagated to the caller instead
/// of being collapsed into a deny.
pub trait IdentityDirectory: Send + Sync {
    /// Resolves the record for a principal, if one exists.
    fn find_by_principal(&self, principal: &str) -> Result<Option<IdentityRecord>, DirectoryError>;
}

/// An in-memory [`IdentityDirectory`] backed by a `HashMap`.
///
/// Suitable for embedding, demos, and tests. In production you would
/// typically implement [`IdentityDirectory`] over a real user store.
/// Lookups never fail.
///
/// # Examples
///
/// ```
/// use authgate::{IdentityDirectory, IdentityRecord, MemoryDirectory};
///
/// let mut directory = MemoryDirectory::new();
/// directory.insert(IdentityRecord::new("admin1", "password1", "admin"));
///
/// let record = directory.find_by_principal("admin1").unwrap().unwrap();
/// assert_eq!(record.role(), "admin");
///
/// assert!(directory.find_by_principal("ghost").unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    records: HashMap<String, IdentityRecord>,
}

impl MemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any existing record for the same
    /// principal. Keeps the at-most-one-record-per-principal invariant.
    pub fn insert(&mut self, record: IdentityRecord) {
        self.records.insert(record.principal().to_string(), record);
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IdentityDirectory for MemoryDirectory {
    fn find_by_principal(&self, principal: &str) -> Result<Option<IdentityRecord>, DirectoryError> {
        Ok(self.records.get(principal).cloned())
    }
}
