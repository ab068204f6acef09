//! File-backed user directory.
//!
//! The on-disk format is a single JSON object mapping email to profile
//! record, the client-local equivalent of the original browser store.
//! There is no schema version and no migration path. The full map is read
//! once on open and rewritten after every mutation.

use crate::{Result as StoreErrorResult, StoreError, UserDirectory};

use eco_core::UserProfile;

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use log::debug;

pub struct JsonFileDirectory {
    path: PathBuf,
    users: BTreeMap<String, UserProfile>,
}

impl JsonFileDirectory {
    /// Open the directory file, creating an empty directory when the file
    /// does not exist yet. A present-but-malformed file is an error, not an
    /// empty directory, so a corrupted store never silently loses users.
    pub fn open(path: impl Into<PathBuf>) -> StoreErrorResult<Self> {
        let path = path.into();

        let users = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| StoreError::Io {
                path: path.clone(),
                source: e,
            })?;
            serde_json::from_str(&contents).map_err(|e| StoreError::Json {
                path: path.clone(),
                source: e,
            })?
        } else {
            BTreeMap::new()
        };

        debug!(
            "Opened user directory {} ({} profiles)",
            path.display(),
            users.len()
        );

        Ok(Self { path, users })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn persist(&self) -> StoreErrorResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            serde_json::to_string_pretty(&self.users).map_err(|e| StoreError::Json {
                path: self.path.clone(),
                source: e,
            })?;

        fs::write(&self.path, contents).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl UserDirectory for JsonFileDirectory {
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

        // Keep memory and disk consistent: a failed write undoes the insert.
        if let Err(e) = self.persist() {
            self.users.remove(&profile.email);
            return Err(e);
        }

        debug!("Saved profile for {}", profile.email);
        Ok(())
    }

    fn count(&self) -> StoreErrorResult<usize> {
        Ok(self.users.len())
    }

    fn list_all(&self) -> StoreErrorResult<Vec<UserProfile>> {
        Ok(self.users.values().cloned().collect())
    }

    fn clear_all(&mut self) -> StoreErrorResult<()> {
        let previous = std::mem::take(&mut self.users);

        if let Err(e) = self.persist() {
            self.users = previous;
            return Err(e);
        }

        debug!("Cleared user directory {}", self.path.display());
        Ok(())
    }
}
