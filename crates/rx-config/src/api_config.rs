use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_API_LOGIN_PATH,
    DEFAULT_API_TIMEOUT_SECS, MAX_API_TIMEOUT_SECS,
};

use serde::Deserialize;
use url::Url;

/// Backend the console talks to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub login_path: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            login_path: String::from(DEFAULT_API_LOGIN_PATH),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::api(format!("api.base_url is invalid: {e}")))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::api("api.base_url must be http or https"));
        }

        if !self.login_path.starts_with('/') {
            return Err(ConfigError::api("api.login_path must start with '/'"));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_API_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be 1-{MAX_API_TIMEOUT_SECS}, got {}",
                self.timeout_secs
            )));
        }

        Ok(())
    }
}
