//! User directory abstraction.
//!
//! The directory maps an email (the unique key) to a stored profile.
//! Screens and the session controller only see this trait, so the backing
//! store can be swapped for an in-memory map in tests.

use crate::Result as StoreErrorResult;

use eco_core::UserProfile;

pub trait UserDirectory {
    /// Case-sensitive exact-match lookup.
    fn lookup_by_email(&self, email: &str) -> StoreErrorResult<Option<UserProfile>>;

    /// Whether a profile with this email is stored.
    fn exists(&self, email: &str) -> StoreErrorResult<bool>;

    /// Insert a profile keyed by its email.
    ///
    /// Check-and-insert: fails with [`StoreError::DuplicateEmail`] when the
    /// email is already present, leaving the directory unchanged.
    ///
    /// [`StoreError::DuplicateEmail`]: crate::StoreError::DuplicateEmail
    fn save(&mut self, profile: &UserProfile) -> StoreErrorResult<()>;

    /// Number of stored profiles.
    fn count(&self) -> StoreErrorResult<usize>;

    /// Every stored profile, ordered by email.
    fn list_all(&self) -> StoreErrorResult<Vec<UserProfile>>;

    /// Remove every stored profile. Debug operation; no access control.
    fn clear_all(&mut self) -> StoreErrorResult<()>;
}
