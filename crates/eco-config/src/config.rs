use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, LoggingConfig, ScannerConfig, StorageConfig,
};

use std::path::PathBuf;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub scanner: ScannerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for ECO_CONFIG_DIR env var, else use ./.eco/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ECO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.warn_legacy_config(&config_dir);

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ECO_CONFIG_DIR env var > ./.eco/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("ECO_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".eco"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.auth.validate()?;
        self.scanner.validate()?;

        Ok(())
    }

    /// Get absolute path to the user directory file.
    pub fn storage_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.path))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  storage: {}", self.storage.path);
        info!(
            "  auth: admin is {} <{}>",
            self.auth.admin_name, self.auth.admin_email
        );
        info!(
            "  scanner: delay={}ms, success_rate={}",
            self.scanner.delay_ms, self.scanner.success_rate
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    /// An early prototype kept its state in ~/.eco; point users at the
    /// per-project directory if the old one is still around.
    fn warn_legacy_config(&self, config_dir: &std::path::Path) {
        if let Some(home) = dirs::home_dir() {
            let legacy = home.join(".eco").join("config.toml");
            if legacy.exists() && legacy.parent() != Some(config_dir) {
                warn!(
                    "Ignoring legacy config at {} (using {})",
                    legacy.display(),
                    config_dir.display()
                );
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("ECO_STORAGE_PATH", &mut self.storage.path);

        // Auth
        Self::apply_env_string("ECO_ADMIN_EMAIL", &mut self.auth.admin_email);
        Self::apply_env_string("ECO_ADMIN_NAME", &mut self.auth.admin_name);

        // Scanner
        Self::apply_env_parse("ECO_SCANNER_DELAY_MS", &mut self.scanner.delay_ms);
        Self::apply_env_parse("ECO_SCANNER_SUCCESS_RATE", &mut self.scanner.success_rate);

        // Logging
        Self::apply_env_parse("ECO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ECO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ECO_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("ECO_LOG_DIR", &mut self.logging.dir);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
