use chrono::{DateTime, Utc};
use serde::Serialize;

/// Unverified projection of a session credential's payload.
///
/// Used only to route the browser to the right origin. Never an
/// authorization input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Claims {
    /// Owning tenant slug; `None` when absent, null or empty
    pub tenant_id: Option<String>,
    /// `true` only when the claim is the JSON literal `true`
    pub is_superadmin: bool,
    /// Expiration, when the `exp` claim is present
    pub expires_at: Option<DateTime<Utc>>,
    /// Subject (username or user id)
    pub sub: Option<String>,
}

impl Claims {
    /// Informational only: guard decisions ignore expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}
