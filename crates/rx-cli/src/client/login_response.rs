use serde::Deserialize;

/// Successful login exchange
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}
