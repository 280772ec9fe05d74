mod claims_reader;
mod tenant_guard;

use crate::{BaseOrigin, PageLocation, TenantConsistencyGuard};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Signed the way the backend signs; the client never checks the signature.
pub(crate) fn token_with(claims: Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

pub(crate) fn tenant_token(tenant: &str) -> String {
    token_with(json!({
        "sub": "pharmacist",
        "tenant_id": tenant,
        "is_superadmin": false,
        "exp": chrono::Utc::now().timestamp() + 3600,
    }))
}

pub(crate) fn superadmin_token(tenant: Option<&str>) -> String {
    token_with(json!({
        "sub": "operator",
        "tenant_id": tenant,
        "is_superadmin": true,
        "exp": chrono::Utc::now().timestamp() + 3600,
    }))
}

pub(crate) fn location(url: &str) -> PageLocation {
    PageLocation::parse(url).unwrap()
}

pub(crate) fn guard(base: &str) -> TenantConsistencyGuard {
    TenantConsistencyGuard::new(BaseOrigin::parse(base).unwrap())
}
