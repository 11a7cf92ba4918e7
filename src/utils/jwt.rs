// ============================================================================
// JWT DECODING - display-only, no signature verification
// ============================================================================
// The token is an opaque bearer credential; the client only decodes the
// payload segment to derive the identity it shows. Trust stays with the
// backend that issued it.
// ============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;

use crate::models::UserInfo;

/// Decode the base64url payload segment of a token into JSON.
/// Any malformation (missing segment, bad base64, bad JSON) yields None.
fn decode_payload(token: &str) -> Option<Value> {
    let payload = token.split('.').nth(1)?;
    // Tolerate padded variants some issuers emit.
    let trimmed = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD.decode(trimmed).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Extract the identity the token carries, trying the known payload shapes
/// in priority order:
///   1. nested `user` object with `name`/`phoneNumber`
///   2. top-level `name` + `phoneNumber`
///   3. top-level `name` + `sub` (sub treated as the phone number)
///
/// Returns None on any decode failure or when no shape matches; callers
/// treat None as "unauthenticated", never as an error.
pub fn decode_identity(token: &str) -> Option<UserInfo> {
    let payload = decode_payload(token)?;

    if let Some(user) = payload.get("user") {
        if let (Some(name), Some(phone)) = (
            user.get("name").and_then(Value::as_str),
            user.get("phoneNumber").and_then(Value::as_str),
        ) {
            return Some(UserInfo {
                name: name.to_string(),
                phone_number: phone.to_string(),
            });
        }
    }

    let name = payload.get("name").and_then(Value::as_str)?;

    if let Some(phone) = payload.get("phoneNumber").and_then(Value::as_str) {
        return Some(UserInfo {
            name: name.to_string(),
            phone_number: phone.to_string(),
        });
    }

    if let Some(sub) = payload.get("sub").and_then(Value::as_str) {
        return Some(UserInfo {
            name: name.to_string(),
            phone_number: sub.to_string(),
        });
    }

    None
}

/// Expiry check against a Unix-epoch `exp` claim. Fail-safe: a token that
/// cannot be decoded is expired. A decodable token without `exp` is not.
pub fn is_token_expired(token: &str) -> bool {
    is_token_expired_at(token, chrono::Utc::now().timestamp())
}

fn is_token_expired_at(token: &str, now: i64) -> bool {
    match decode_payload(token) {
        Some(payload) => match payload.get("exp").and_then(Value::as_i64) {
            Some(exp) => exp < now,
            None => false,
        },
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_token(payload: Value) -> String {
        let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());
        format!("eyJhbGciOiJIUzI1NiJ9.{}.c2ln", body)
    }

    #[test]
    fn malformed_tokens_yield_none() {
        assert_eq!(decode_identity(""), None);
        assert_eq!(decode_identity("just-one-segment"), None);
        // non-base64 middle segment
        assert_eq!(decode_identity("a.!!!not-base64!!!.c"), None);
        // valid base64 but invalid JSON
        let bad_json = URL_SAFE_NO_PAD.encode(b"not json at all");
        assert_eq!(decode_identity(&format!("a.{}.c", bad_json)), None);
    }

    #[test]
    fn decodes_nested_user_shape() {
        let token = make_token(json!({
            "user": { "name": "Asha", "phoneNumber": "01700000000" }
        }));
        let user = decode_identity(&token).unwrap();
        assert_eq!(user.name, "Asha");
        assert_eq!(user.phone_number, "01700000000");
    }

    #[test]
    fn decodes_flat_name_phone_shape() {
        let token = make_token(json!({ "name": "Ron", "phoneNumber": "01811111111" }));
        let user = decode_identity(&token).unwrap();
        assert_eq!(user.name, "Ron");
        assert_eq!(user.phone_number, "01811111111");
    }

    #[test]
    fn decodes_flat_name_sub_shape() {
        let token = make_token(json!({ "name": "Ron", "sub": "01811111111" }));
        let user = decode_identity(&token).unwrap();
        assert_eq!(user.phone_number, "01811111111");
    }

    #[test]
    fn nested_user_wins_over_flat_fields() {
        let token = make_token(json!({
            "user": { "name": "Nested", "phoneNumber": "111" },
            "name": "Flat",
            "phoneNumber": "222",
            "sub": "333"
        }));
        let user = decode_identity(&token).unwrap();
        assert_eq!(user.name, "Nested");
        assert_eq!(user.phone_number, "111");
    }

    #[test]
    fn phone_number_wins_over_sub() {
        let token = make_token(json!({
            "name": "Flat",
            "phoneNumber": "222",
            "sub": "333"
        }));
        let user = decode_identity(&token).unwrap();
        assert_eq!(user.phone_number, "222");
    }

    #[test]
    fn unknown_shape_yields_none() {
        let token = make_token(json!({ "role": "admin" }));
        assert_eq!(decode_identity(&token), None);
    }

    #[test]
    fn expiry_is_fail_safe() {
        // undecodable -> expired
        assert!(is_token_expired_at("garbage", 1_000));
        // exp in the past -> expired
        let expired = make_token(json!({ "exp": 999 }));
        assert!(is_token_expired_at(&expired, 1_000));
        // exp in the future -> live
        let live = make_token(json!({ "exp": 2_000 }));
        assert!(!is_token_expired_at(&live, 1_000));
        // no exp claim on a decodable token -> live
        let no_exp = make_token(json!({ "name": "x" }));
        assert!(!is_token_expired_at(&no_exp, 1_000));
    }
}
