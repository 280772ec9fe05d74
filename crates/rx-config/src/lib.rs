mod api_config;
mod app_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

pub use api_config::ApiConfig;
pub use app_config::AppConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const DEFAULT_BASE_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_DASHBOARD_PATH: &str = rx_session::DEFAULT_DASHBOARD_PATH;
const DEFAULT_APP_LOGIN_PATH: &str = "/login";
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_API_LOGIN_PATH: &str = "/auth/login";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const MAX_API_TIMEOUT_SECS: u64 = 300;
const DEFAULT_SESSION_STORE_FILE: &str = "session.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
