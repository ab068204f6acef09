use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operational state of a smart bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BinStatus {
    /// Bin is online and accepting disposals
    #[default]
    Active,
    /// Bin reached capacity and must be emptied
    Full,
    /// Bin is unreachable
    Offline,
    /// Bin is under maintenance
    Maintenance,
}

impl BinStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ativa",
            Self::Full => "cheia",
            Self::Offline => "offline",
            Self::Maintenance => "manutencao",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Ativa",
            Self::Full => "Cheia",
            Self::Offline => "Offline",
            Self::Maintenance => "Manutenção",
        }
    }

    pub fn is_active(&self) -> bool {
        *self == Self::Active
    }
}

impl FromStr for BinStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "ativa" => Ok(Self::Active),
            "cheia" => Ok(Self::Full),
            "offline" => Ok(Self::Offline),
            "manutencao" => Ok(Self::Maintenance),
            _ => Err(CoreError::InvalidBinStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for BinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
