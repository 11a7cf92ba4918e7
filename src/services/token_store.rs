// ============================================================================
// TOKEN STORE - single abstraction over both token backing stores
// ============================================================================
// The bearer token is duplicated in localStorage (key "token") and a
// `token` cookie. Every write and clear fans out to both so they never
// drift; reads prefer localStorage and fall back to the cookie.
// ============================================================================

use gloo_storage::{LocalStorage, Storage};

use crate::utils::cookies;

const TOKEN_KEY: &str = "token";

pub struct TokenStore;

impl TokenStore {
    /// Read the persisted token, localStorage first, cookie second.
    pub fn read() -> Option<String> {
        let stored = LocalStorage::raw()
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty());

        stored.or_else(cookies::read_token_cookie)
    }

    /// Persist the token to both stores.
    pub fn write(token: &str) {
        if LocalStorage::raw().set_item(TOKEN_KEY, token).is_err() {
            log::warn!("⚠️ Could not write token to localStorage");
        }
        cookies::write_token_cookie(token);
    }

    /// Remove the token from both stores.
    pub fn clear() {
        let _ = LocalStorage::raw().remove_item(TOKEN_KEY);
        cookies::clear_token_cookie();
    }
}
