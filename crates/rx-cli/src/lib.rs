//! rx-cli library
//!
//! Exports the HTTP client and session commands for use in tests.

pub(crate) mod client;
pub mod error;
pub mod logger;
pub mod session_commands;


pub use client::{CliClientResult, Client, ClientError, LoginResponse};
pub use error::{CliError, Result as CliResult};
pub use session_commands::SessionContext;
