use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid waste kind: {value} {location}")]
    InvalidWasteKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid bin status: {value} {location}")]
    InvalidBinStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid reward kind: {value} {location}")]
    InvalidRewardKind {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
