//! Smart-bin catalog entry.

use crate::{BinStatus, WasteKind};

use serde::{Deserialize, Serialize};

/// A public disposal bin shown on the map screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinSite {
    pub id: i64,
    pub location: String,
    pub kind: WasteKind,
    pub status: BinStatus,
    /// Fill level, 0-100
    pub capacity_pct: u8,
    pub distance_km: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl BinSite {
    /// Whether this site passes the map filter (`None` = all kinds).
    pub fn matches(&self, filter: Option<WasteKind>) -> bool {
        filter.is_none_or(|kind| self.kind == kind)
    }
}
