use crate::{ConfigError, ConfigErrorResult, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME};

use serde::Deserialize;

/// Identity used by the admin login shortcut.
///
/// There is no real credential check; this only decides what the admin
/// session displays.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub admin_email: String,
    pub admin_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_email: String::from(DEFAULT_ADMIN_EMAIL),
            admin_name: String::from(DEFAULT_ADMIN_NAME),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.admin_email.contains('@') {
            return Err(ConfigError::auth(format!(
                "auth.admin_email must be an email address, got {:?}",
                self.admin_email
            )));
        }

        if self.admin_name.trim().is_empty() {
            return Err(ConfigError::auth("auth.admin_name must not be empty"));
        }

        Ok(())
    }
}
