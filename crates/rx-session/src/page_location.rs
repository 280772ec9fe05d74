use crate::{Result as SessionResult, SessionError};

use url::Url;

/// The browser location a guard evaluation runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    #[track_caller]
    pub fn parse(raw: &str) -> SessionResult<Self> {
        let url = Url::parse(raw).map_err(|e| SessionError::invalid_location(raw, e.to_string()))?;

        if url.host_str().is_none_or(str::is_empty) {
            return Err(SessionError::invalid_location(raw, "location has no host"));
        }

        Ok(Self { url })
    }

    /// Scheme with trailing colon, e.g. `https:`
    pub fn protocol(&self) -> String {
        format!("{}:", self.url.scheme())
    }

    pub fn hostname(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    /// Hostname plus port when present
    pub fn host(&self) -> String {
        match self.port() {
            Some(port) => format!("{}:{}", self.hostname(), port),
            None => self.hostname().to_string(),
        }
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Same location with every occurrence of `name` removed from the query.
    pub fn without_query_param(&self, name: &str) -> Self {
        let remaining: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(key, _)| key != name)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut url = self.url.clone();
        if remaining.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(remaining);
        }

        Self { url }
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}
