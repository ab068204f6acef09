mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod scanner_config;
mod storage_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use scanner_config::ScannerConfig;
pub use storage_config::StorageConfig;

const DEFAULT_STORAGE_FILENAME: &str = "users.json";
const DEFAULT_ADMIN_EMAIL: &str = "admin@recife.gov.br";
const DEFAULT_ADMIN_NAME: &str = "Administrador";
const DEFAULT_SCAN_DELAY_MS: u64 = 2000;
const DEFAULT_SCAN_SUCCESS_RATE: f64 = 0.8;
const MAX_SCAN_DELAY_MS: u64 = 60_000;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
