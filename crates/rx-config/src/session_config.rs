use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_STORE_FILE};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session file, relative to the config directory
    pub store_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store_file: String::from(DEFAULT_SESSION_STORE_FILE),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.store_file.trim().is_empty() {
            return Err(ConfigError::session("session.store_file cannot be empty"));
        }

        if Path::new(&self.store_file).is_absolute() || self.store_file.contains("..") {
            return Err(ConfigError::session(
                "session.store_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
