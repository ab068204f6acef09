//! Reward catalog entry.

use crate::RewardKind;

use serde::{Deserialize, Serialize};

/// A benefit the user can redeem with Capivaras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Cost in Capivaras
    pub cost: i64,
    pub partner: String,
    /// Redeemable until this date (dd/mm/yyyy)
    pub validity: String,
    pub kind: RewardKind,
}

impl Reward {
    pub fn affordable_with(&self, balance: i64) -> bool {
        balance >= self.cost
    }

    /// Balance left after redeeming this reward.
    pub fn balance_after(&self, balance: i64) -> i64 {
        balance - self.cost
    }
}
