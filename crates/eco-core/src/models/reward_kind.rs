use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a reward is delivered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Voucher,
    Credit,
    Discount,
    Event,
}

impl RewardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Voucher => "voucher",
            Self::Credit => "credito",
            Self::Discount => "desconto",
            Self::Event => "evento",
        }
    }
}

impl FromStr for RewardKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "voucher" => Ok(Self::Voucher),
            "credito" => Ok(Self::Credit),
            "desconto" => Ok(Self::Discount),
            "evento" => Ok(Self::Event),
            _ => Err(CoreError::InvalidRewardKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for RewardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
