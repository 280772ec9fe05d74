use crate::{CliClientResult, ClientError, LoginResponse};

use rx_session::AuthHeaders;

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the pharmacy platform API
pub struct Client {
    pub base_url: String,
    login_path: String,
    session: Option<AuthHeaders>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API URL (e.g., "http://127.0.0.1:8000")
    /// * `login_path` - Login exchange route (e.g., "/auth/login")
    pub fn new(base_url: &str, login_path: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            login_path: login_path.to_string(),
            session: None,
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests time out after `timeout`
    pub fn with_timeout(
        base_url: &str,
        login_path: &str,
        timeout: Duration,
    ) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            ..Self::new(base_url, login_path)
        })
    }

    /// Attach the active session; requests then carry its auth headers
    pub fn with_session(mut self, session: Option<AuthHeaders>) -> Self {
        self.session = session;
        self
    }

    /// Build a request with the session's Authorization and X-Tenant-ID headers
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref session) = self.session {
            for (name, value) in session.pairs() {
                req = req.header(name, value);
            }
        }

        req
    }

    /// Exchange credentials for an access token.
    ///
    /// `tenant_id` of `None` is the superadmin login path and is sent as `null`.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        tenant_id: Option<&str>,
    ) -> CliClientResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
            tenant_id: Option<&'a str>,
        }

        let body = LoginRequest {
            username,
            password,
            tenant_id,
        };
        let response = self
            .client
            .post(format!("{}{}", self.base_url, self.login_path))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Login {
                status: status.as_u16(),
                detail: error_detail(&text, status),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Authenticated GET against any API route
    pub async fn get(&self, path: &str) -> CliClientResult<Value> {
        if self.session.is_none() {
            return Err(ClientError::not_logged_in());
        }
        let req = self.request(Method::GET, path);
        self.execute(req).await
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                error_detail(&text, status),
            ));
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Backend errors carry a human-readable `detail`
fn error_detail(body: &str, status: StatusCode) -> String {
    match serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned())
    {
        Some(Value::String(detail)) => detail,
        Some(other) => other.to_string(),
        None => format!("request failed with status {}", status.as_u16()),
    }
}
