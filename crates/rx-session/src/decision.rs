use crate::GuardState;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectTarget {
    /// Platform main origin (superadmin confinement)
    Main,
    /// Origin owned by the credential's tenant
    Tenant(String),
}

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// Stay on this origin with `tenant` as the active context
    Allow {
        tenant: Option<String>,
        superadmin: bool,
    },
    /// Navigate to `url`; the credential rides along as `?token=`
    Redirect { target: RedirectTarget, url: String },
    /// Credential unusable: clear the session
    Logout { reason: String },
}

impl Decision {
    pub fn state(&self) -> GuardState {
        match self {
            Self::Allow { .. } => GuardState::Allowed,
            Self::Redirect { .. } => GuardState::Redirecting,
            Self::Logout { .. } => GuardState::LoggedOut,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow { .. })
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    pub fn is_logout(&self) -> bool {
        matches!(self, Self::Logout { .. })
    }

    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            Self::Redirect { url, .. } => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn tenant(&self) -> Option<&str> {
        match self {
            Self::Allow { tenant, .. } => tenant.as_deref(),
            Self::Redirect {
                target: RedirectTarget::Tenant(slug),
                ..
            } => Some(slug.as_str()),
            _ => None,
        }
    }
}
