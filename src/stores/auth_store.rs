// ============================================================================
// AUTH STORE - session state, owned by the root component
// ============================================================================
// No ambient global: the store lives in a use_state handle and is handed to
// whatever needs identity. Exactly one writer at a time (the most recent
// user action), so the transitions are plain value constructors.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;
use crate::utils::jwt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AuthStore {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    pub is_authenticated: bool,
}

impl AuthStore {
    /// Rehydrate from a persisted token. A missing token, a malformed one,
    /// or one carrying no recognizable identity all land on the default
    /// (unauthenticated) state; this never fails loudly.
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) => match jwt::decode_identity(&token) {
                Some(user) => Self {
                    token: Some(token),
                    user: Some(user),
                    is_authenticated: true,
                },
                None => {
                    log::warn!("⚠️ Stored token could not be decoded, treating as logged out");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Establish a session from a registration response. The token is
    /// trusted as-is; the issuing endpoint already vouched for it.
    pub fn authenticated(user: UserInfo, token: String) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            is_authenticated: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use serde_json::json;

    fn token_for(name: &str, phone: &str) -> String {
        let payload = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&json!({ "user": { "name": name, "phoneNumber": phone } }))
                .unwrap(),
        );
        format!("hdr.{}.sig", payload)
    }

    #[test]
    fn establish_then_rehydrate_round_trips() {
        let token = token_for("Asha", "01700000000");
        let user = UserInfo {
            name: "Asha".to_string(),
            phone_number: "01700000000".to_string(),
        };

        let established = AuthStore::authenticated(user.clone(), token.clone());
        assert!(established.is_authenticated);

        // Simulated reload: only the token survives.
        let rehydrated = AuthStore::from_token(Some(token));
        assert!(rehydrated.is_authenticated);
        assert_eq!(rehydrated.user, Some(user));
    }

    #[test]
    fn missing_token_is_unauthenticated() {
        let store = AuthStore::from_token(None);
        assert!(!store.is_authenticated);
        assert_eq!(store.user, None);
        assert_eq!(store.token, None);
    }

    #[test]
    fn malformed_token_is_unauthenticated_not_an_error() {
        for bad in ["", "x", "a.b.c", "a.%%%%.c"] {
            let store = AuthStore::from_token(Some(bad.to_string()));
            assert!(!store.is_authenticated);
            assert_eq!(store.user, None);
        }
    }

    #[test]
    fn clear_then_rehydrate_stays_logged_out() {
        // Clearing resets to default; a rehydrate with nothing persisted
        // must not resurrect the session.
        let cleared = AuthStore::default();
        assert!(!cleared.is_authenticated);
        assert!(!AuthStore::from_token(None).is_authenticated);
    }
}
