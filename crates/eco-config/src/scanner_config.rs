use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SCAN_DELAY_MS, DEFAULT_SCAN_SUCCESS_RATE,
    MAX_SCAN_DELAY_MS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Simulated analysis time in milliseconds
    pub delay_ms: u64,
    /// Probability that a scan recognizes the waste (0.0 - 1.0)
    pub success_rate: f64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_SCAN_DELAY_MS,
            success_rate: DEFAULT_SCAN_SUCCESS_RATE,
        }
    }
}

impl ScannerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(ConfigError::scanner(format!(
                "scanner.success_rate must be within 0.0-1.0, got {}",
                self.success_rate
            )));
        }

        if self.delay_ms > MAX_SCAN_DELAY_MS {
            return Err(ConfigError::scanner(format!(
                "scanner.delay_ms must be <= {}, got {}",
                MAX_SCAN_DELAY_MS, self.delay_ms
            )));
        }

        Ok(())
    }
}
