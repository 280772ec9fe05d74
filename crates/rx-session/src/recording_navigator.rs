use crate::Navigator;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum Navigation {
    Redirect(String),
    Replace(String),
}

/// Navigator that records intended destinations as data.
///
/// Tracks the URL the address bar would show after each call.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    current_url: String,
    navigations: Vec<Navigation>,
}

impl RecordingNavigator {
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            current_url: initial_url.into(),
            navigations: Vec::new(),
        }
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn navigations(&self) -> &[Navigation] {
        &self.navigations
    }

    pub fn last_redirect(&self) -> Option<&str> {
        self.navigations.iter().rev().find_map(|n| match n {
            Navigation::Redirect(url) => Some(url.as_str()),
            Navigation::Replace(_) => None,
        })
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&mut self, url: &str) {
        self.current_url = url.to_string();
        self.navigations.push(Navigation::Redirect(url.to_string()));
    }

    fn replace_current_url(&mut self, url: &str) {
        self.current_url = url.to_string();
        self.navigations.push(Navigation::Replace(url.to_string()));
    }
}
