pub mod error;
pub mod format;
pub mod models;

pub use error::{CoreError, Result};
pub use models::bin_site::BinSite;
pub use models::bin_status::BinStatus;
pub use models::disposal::Disposal;
pub use models::reward::Reward;
pub use models::reward_kind::RewardKind;
pub use models::scan_reading::ScanReading;
pub use models::user_profile::UserProfile;
pub use models::waste_kind::WasteKind;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
