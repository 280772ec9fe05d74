use crate::claims_reader::read;
use crate::tests::{superadmin_token, tenant_token, token_with};
use crate::SessionError;

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use serde_json::json;

fn raw_token(payload: &str) -> String {
    format!("eyJhbGciOiJub25lIn0.{}.sig", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn given_tenant_token_when_read_then_returns_tenant_claims() {
    let claims = read(&tenant_token("acme")).unwrap();

    assert_eq!(claims.tenant_id.as_deref(), Some("acme"));
    assert!(!claims.is_superadmin);
    assert_eq!(claims.sub.as_deref(), Some("pharmacist"));
    assert!(claims.expires_at.is_some());
}

#[test]
fn given_superadmin_token_when_read_then_flag_is_set() {
    let claims = read(&superadmin_token(None)).unwrap();

    assert!(claims.is_superadmin);
    assert_eq!(claims.tenant_id, None);
}

#[test]
fn given_missing_claims_when_read_then_normalized_defaults() {
    let claims = read(&token_with(json!({ "sub": "someone" }))).unwrap();

    assert_eq!(claims.tenant_id, None);
    assert!(!claims.is_superadmin);
    assert_eq!(claims.expires_at, None);
}

#[test]
fn given_non_boolean_superadmin_when_read_then_false() {
    let claims = read(&token_with(json!({ "is_superadmin": "true" }))).unwrap();

    assert!(!claims.is_superadmin);
}

#[test]
fn given_empty_tenant_claim_when_read_then_none() {
    let claims = read(&token_with(json!({ "tenant_id": "" }))).unwrap();

    assert_eq!(claims.tenant_id, None);
}

#[test]
fn given_padded_payload_when_read_then_decodes() {
    let token = format!(
        "header.{}.sig",
        URL_SAFE.encode(r#"{"tenant_id":"acme"}"#)
    );

    let claims = read(&token).unwrap();

    assert_eq!(claims.tenant_id.as_deref(), Some("acme"));
}

#[test]
fn given_unsigned_token_when_read_then_claims_still_returned() {
    let claims = read(&raw_token(r#"{"tenant_id":"acme"}"#)).unwrap();

    assert_eq!(claims.tenant_id.as_deref(), Some("acme"));
}

#[test]
fn given_expired_exp_when_checked_then_is_expired() {
    let token = token_with(json!({ "exp": chrono::Utc::now().timestamp() - 60 }));
    let claims = read(&token).unwrap();

    assert!(claims.is_expired(chrono::Utc::now()));
}

#[test]
fn given_empty_credential_when_read_then_decode_error() {
    assert!(matches!(read(""), Err(SessionError::Decode { .. })));
}

#[test]
fn given_two_segments_when_read_then_decode_error() {
    let result = read("abc.def");

    assert!(matches!(result, Err(SessionError::Decode { .. })));
    assert!(result.unwrap_err().to_string().contains("3 segments"));
}

#[test]
fn given_no_separators_when_read_then_decode_error() {
    assert!(matches!(read("not-a-token"), Err(SessionError::Decode { .. })));
}

#[test]
fn given_invalid_base64_payload_when_read_then_decode_error() {
    assert!(matches!(read("a.!!!.c"), Err(SessionError::Decode { .. })));
}

#[test]
fn given_non_json_payload_when_read_then_decode_error() {
    assert!(matches!(
        read(&raw_token("plain text")),
        Err(SessionError::Decode { .. })
    ));
}

#[test]
fn given_json_array_payload_when_read_then_decode_error() {
    let result = read(&raw_token("[1,2,3]"));

    assert!(result.unwrap_err().to_string().contains("JSON object"));
}
