use crate::ClientError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] rx_config::ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Session error: {0}")]
    Session(#[from] rx_session::SessionError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
