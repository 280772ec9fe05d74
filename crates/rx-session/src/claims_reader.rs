use crate::{Claims, Result as SessionResult, SessionError};

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::DateTime;
use serde_json::Value;

/// base64url, padded or not
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode the payload segment of `credential` without checking its signature.
///
/// Fails with [`SessionError::Decode`] when the credential is empty, is not
/// three dot-separated segments, or its middle segment is not base64url
/// encoded JSON object.
#[track_caller]
pub fn read(credential: &str) -> SessionResult<Claims> {
    let credential = credential.trim();
    if credential.is_empty() {
        return Err(SessionError::decode("credential is empty"));
    }

    let segments: Vec<&str> = credential.split('.').collect();
    if segments.len() != 3 {
        return Err(SessionError::decode(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }

    let payload = segments[1];
    if payload.is_empty() {
        return Err(SessionError::decode("payload segment is empty"));
    }

    let bytes = PAYLOAD_ENGINE
        .decode(payload)
        .map_err(|e| SessionError::decode(format!("payload is not base64url: {e}")))?;

    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| SessionError::decode(format!("payload is not JSON: {e}")))?;

    let Value::Object(fields) = value else {
        return Err(SessionError::decode("payload is not a JSON object"));
    };

    let tenant_id = fields
        .get("tenant_id")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(String::from);

    let is_superadmin = matches!(fields.get("is_superadmin"), Some(Value::Bool(true)));

    let expires_at = fields
        .get("exp")
        .and_then(|exp| exp.as_i64().or_else(|| exp.as_f64().map(|f| f as i64)))
        .and_then(|secs| DateTime::from_timestamp(secs, 0));

    let sub = fields.get("sub").and_then(Value::as_str).map(String::from);

    Ok(Claims {
        tenant_id,
        is_superadmin,
        expires_at,
        sub,
    })
}
