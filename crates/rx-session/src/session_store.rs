use crate::Result as SessionResult;

/// Persisted key layout.
pub mod keys {
    /// Opaque bearer credential
    pub const TOKEN: &str = "token";
    /// Active tenant slug; absent when no tenant is active
    pub const TENANT_ID: &str = "tenant_id";
}

/// Synchronous key-value store backing a session.
///
/// Survives restarts of the same origin and is cleared on logout. Stores are
/// never shared between origins, which is why cross-tenant redirects carry
/// the credential in the URL.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> SessionResult<()>;

    fn delete(&mut self, key: &str) -> SessionResult<()>;

    fn clear(&mut self) -> SessionResult<()>;
}
