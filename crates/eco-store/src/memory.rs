//! In-memory user directory for tests and ephemeral sessions.

use crate::{Result as StoreErrorResult, StoreError, UserDirectory};

use eco_core::UserProfile;

use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryDirectory {
    users: BTreeMap<String, UserProfile>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserDirectory for MemoryDirectory {
    fn lookup_by_email(&self, email: &str) -> StoreErrorResult<Option<UserProfile>> {
        Ok(self.users.get(email).cloned())
    }

    fn exists(&self, email: &str) -> StoreErrorResult<bool> {
        Ok(self.users.contains_key(email))
    }

    fn save(&mut self, profile: &UserProfile) -> StoreErrorResult<()> {
        if self.users.contains_key(&profile.email) {
            return Err(StoreError::duplicate_email(&profile.email));
        }

        self.users.insert(profile.email.clone(), profile.clone());
        Ok(())
    }

    fn count(&self) -> StoreErrorResult<usize> {
        Ok(self.users.len())
    }

    fn list_all(&self) -> StoreErrorResult<Vec<UserProfile>> {
        Ok(self.users.values().cloned().collect())
    }

    fn clear_all(&mut self) -> StoreErrorResult<()> {
        self.users.clear();
        Ok(())
    }
}
