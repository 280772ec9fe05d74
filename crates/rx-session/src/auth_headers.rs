use crate::{SessionStore, keys};

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const TENANT_HEADER: &str = "X-Tenant-ID";

/// Headers every authenticated API request carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub token: String,
    pub tenant_id: Option<String>,
}

impl AuthHeaders {
    /// Built from the persisted session; `None` when no credential is stored.
    pub fn from_store(store: &dyn SessionStore) -> Option<Self> {
        let token = store.get(keys::TOKEN).filter(|t| !t.is_empty())?;
        Some(Self {
            token,
            tenant_id: store.get(keys::TENANT_ID).filter(|t| !t.is_empty()),
        })
    }

    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// `(name, value)` pairs; the tenant header only when a tenant is active.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![(AUTHORIZATION_HEADER, self.authorization())];
        if let Some(tenant) = &self.tenant_id {
            pairs.push((TENANT_HEADER, tenant.clone()));
        }
        pairs
    }
}
