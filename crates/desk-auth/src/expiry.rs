//! Best-effort reading of a JWT access token's `exp` claim.
//!
//! The signature is not checked. This is only used to show the user when the
//! current token lapses.

use base64::Engine;
use chrono::{DateTime, Utc};

use crate::error::SessionError;

/// Decode the `exp` claim from a JWT payload.
///
/// # Errors
///
/// Returns `SessionError::Other` if the token is not a three-part JWT, the
/// payload is not base64url JSON, or `exp` is missing.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, SessionError> {
    let mut parts = jwt.split('.');
    let (Some(_), Some(payload), Some(_), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(SessionError::Other("token is not a JWT".into()));
    };
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| SessionError::Other(format!("token payload is not base64url: {e}")))?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| SessionError::Other(format!("token payload is not JSON: {e}")))?;
    let exp = claims["exp"]
        .as_i64()
        .ok_or_else(|| SessionError::Other("token has no exp claim".into()))?;
    DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| SessionError::Other(format!("exp {exp} is out of range")))
}

/// Whether the token's `exp` has passed. Opaque tokens are never "expired".
#[must_use]
pub fn is_expired(jwt: &str) -> bool {
    decode_expiry(jwt).is_ok_and(|exp| exp <= Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b64(s: &str) -> String {
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(s)
    }

    fn jwt_with_payload(payload: &str) -> String {
        format!("{}.{}.{}", b64(r#"{"alg":"HS256"}"#), b64(payload), b64("sig"))
    }

    #[test]
    fn reads_exp_claim() {
        let exp = Utc::now().timestamp() + 600;
        let jwt = jwt_with_payload(&format!(r#"{{"sub":"u-1","exp":{exp}}}"#));
        assert_eq!(decode_expiry(&jwt).expect("exp").timestamp(), exp);
        assert!(!is_expired(&jwt));
    }

    #[test]
    fn past_exp_is_expired() {
        let exp = Utc::now().timestamp() - 600;
        let jwt = jwt_with_payload(&format!(r#"{{"exp":{exp}}}"#));
        assert!(is_expired(&jwt));
    }

    #[test]
    fn opaque_token_is_rejected_but_not_expired() {
        let err = decode_expiry("opaque-token").expect_err("not a jwt");
        assert!(err.to_string().contains("not a JWT"));
        assert!(!is_expired("opaque-token"));
    }

    #[test]
    fn missing_exp_is_an_error() {
        let jwt = jwt_with_payload(r#"{"sub":"u-1"}"#);
        assert!(decode_expiry(&jwt).expect_err("no exp").to_string().contains("no exp"));
    }

    #[test]
    fn bad_base64_is_an_error() {
        assert!(decode_expiry("a.!!!.c").is_err());
    }
}
