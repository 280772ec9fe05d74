use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_APP_LOGIN_PATH, DEFAULT_BASE_ORIGIN,
    DEFAULT_DASHBOARD_PATH,
};

use rx_session::{BaseOrigin, TenantConsistencyGuard};

use serde::Deserialize;

/// Browser-facing origin and routes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Main origin, e.g. `https://example.com`
    pub base_origin: String,
    pub dashboard_path: String,
    pub login_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_origin: String::from(DEFAULT_BASE_ORIGIN),
            dashboard_path: String::from(DEFAULT_DASHBOARD_PATH),
            login_path: String::from(DEFAULT_APP_LOGIN_PATH),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.base_origin()?;

        if !self.dashboard_path.starts_with('/') {
            return Err(ConfigError::app("app.dashboard_path must start with '/'"));
        }
        if !self.login_path.starts_with('/') {
            return Err(ConfigError::app("app.login_path must start with '/'"));
        }

        Ok(())
    }

    pub fn base_origin(&self) -> ConfigErrorResult<BaseOrigin> {
        BaseOrigin::parse(&self.base_origin)
            .map_err(|e| ConfigError::app(format!("app.base_origin is invalid: {e}")))
    }

    pub fn guard(&self) -> ConfigErrorResult<TenantConsistencyGuard> {
        Ok(TenantConsistencyGuard::new(self.base_origin()?)
            .with_dashboard_path(self.dashboard_path.clone()))
    }
}
