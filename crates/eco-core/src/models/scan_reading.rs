use crate::WasteKind;

use serde::{Deserialize, Serialize};

/// Result of a successful simulated scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReading {
    pub kind: WasteKind,
    pub capivaras: i64,
    pub weight_kg: f64,
}

impl ScanReading {
    /// Build a reading for a recognized kind; the award follows the kind.
    pub fn for_kind(kind: WasteKind, weight_kg: f64) -> Self {
        Self {
            kind,
            capivaras: kind.capivaras(),
            weight_kg,
        }
    }
}
