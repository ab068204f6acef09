use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Waste category recognized by the scanner and accepted by the bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteKind {
    Organic,
    Recyclable,
    Electronic,
    Metal,
    Glass,
}

impl WasteKind {
    /// Every kind, in the order the original catalog lists them.
    pub const ALL: [WasteKind; 5] = [
        Self::Organic,
        Self::Recyclable,
        Self::Electronic,
        Self::Metal,
        Self::Glass,
    ];

    /// Storage/wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organic => "organico",
            Self::Recyclable => "reciclavel",
            Self::Electronic => "eletronico",
            Self::Metal => "metal",
            Self::Glass => "vidro",
        }
    }

    /// Display label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Organic => "Orgânico",
            Self::Recyclable => "Reciclável",
            Self::Electronic => "Eletrônico",
            Self::Metal => "Metal",
            Self::Glass => "Vidro",
        }
    }

    /// Capivaras awarded for a valid disposal of this kind.
    pub fn capivaras(&self) -> i64 {
        match self {
            Self::Electronic => 50,
            Self::Metal => 30,
            _ => 20,
        }
    }
}

impl FromStr for WasteKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "organico" => Ok(Self::Organic),
            "reciclavel" => Ok(Self::Recyclable),
            "eletronico" => Ok(Self::Electronic),
            "metal" => Ok(Self::Metal),
            "vidro" => Ok(Self::Glass),
            _ => Err(CoreError::InvalidWasteKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for WasteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
