pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod login_response;

pub use client::Client;
pub use error::{ClientError, Result as CliClientResult};
pub use login_response::LoginResponse;
