use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// Registration with an email that is already in the directory.
    #[error("Email already registered: {email} {location}")]
    EmailTaken {
        email: String,
        location: ErrorLocation,
    },

    /// Any other user-directory failure.
    #[error("User directory error: {source} {location}")]
    Store {
        #[source]
        source: eco_store::StoreError,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn email_taken<S: Into<String>>(email: S) -> Self {
        Self::EmailTaken {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<eco_store::StoreError> for SessionError {
    #[track_caller]
    fn from(source: eco_store::StoreError) -> Self {
        match source {
            eco_store::StoreError::DuplicateEmail { email, .. } => Self::EmailTaken {
                email,
                location: ErrorLocation::from(Location::caller()),
            },
            source => Self::Store {
                source,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
