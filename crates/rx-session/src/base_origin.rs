use crate::{Result as SessionResult, SessionError};

use std::fmt;

use url::Url;

/// The platform's canonical origin (scheme + host + optional port).
///
/// Parsed once from configuration and stable for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseOrigin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl BaseOrigin {
    #[track_caller]
    pub fn parse(origin: &str) -> SessionResult<Self> {
        let url = Url::parse(origin)
            .map_err(|e| SessionError::invalid_origin(origin, e.to_string()))?;

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(SessionError::invalid_origin(
                origin,
                format!("unsupported scheme '{scheme}'"),
            ));
        }

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| SessionError::invalid_origin(origin, "origin has no host"))?
            .to_string();

        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(SessionError::invalid_origin(
                origin,
                "origin must not carry a path, query or fragment",
            ));
        }

        Ok(Self {
            scheme: scheme.to_string(),
            host,
            port: url.port(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Hostname without port
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Hostname plus port when a non-default port is configured
    pub fn authority(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }

    /// `scheme://authority`, no trailing slash
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.authority())
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.origin(), path)
    }
}

impl fmt::Display for BaseOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.origin())
    }
}
