//! Disposal history entry.

use crate::WasteKind;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A past disposal shown in the recent-activity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disposal {
    pub id: i64,
    pub kind: WasteKind,
    pub capivaras: i64,
    pub at: DateTime<Utc>,
    pub valid: bool,
}

impl Disposal {
    pub fn new(id: i64, kind: WasteKind, at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind,
            capivaras: kind.capivaras(),
            at,
            valid: true,
        }
    }
}
