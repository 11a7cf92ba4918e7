use yew::prelude::*;

use crate::hooks::use_toasts::ToastKind;
use crate::models::CreateUserRequest;
use crate::services::{ApiClient, TokenStore};
use crate::stores::AuthStore;
use crate::utils::jwt;

pub struct UseAuthHandle {
    pub auth: AuthStore,
    /// False until the mount-time rehydrate has run. Callers must not treat
    /// "not yet checked" as "logged out", or a reload with a valid token
    /// would flash the register screen.
    pub checked: bool,
    pub registering: bool,
    pub register: Callback<CreateUserRequest>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth(on_toast: Callback<(ToastKind, String)>) -> UseAuthHandle {
    let auth = use_state(AuthStore::default);
    let checked = use_state(|| false);
    let registering = use_state(|| false);

    // Rehydrate on mount. Idempotent: reads both stores, decodes, and
    // downgrades any failure to "logged out" without surfacing an error.
    {
        let auth = auth.clone();
        let checked = checked.clone();
        use_effect_with((), move |_| {
            let token = TokenStore::read();

            let token = match token {
                Some(t) if jwt::is_token_expired(&t) => {
                    log::info!("🔒 Stored token is expired, clearing session");
                    TokenStore::clear();
                    None
                }
                other => other,
            };

            let store = AuthStore::from_token(token);
            if let Some(user) = &store.user {
                log::info!("✅ Session restored for {}", user.phone_number);
            } else {
                log::info!("ℹ️ No stored session");
            }
            auth.set(store);
            checked.set(true);
            || ()
        });
    }

    // Register: the only way to establish a session. The backend response
    // is trusted as-is; its token is persisted to both stores.
    let register = {
        let auth = auth.clone();
        let registering = registering.clone();
        let on_toast = on_toast.clone();
        Callback::from(move |request: CreateUserRequest| {
            if *registering {
                return;
            }
            let auth = auth.clone();
            let registering = registering.clone();
            let on_toast = on_toast.clone();
            registering.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new(None).create_account(&request).await {
                    Ok(response) => {
                        let user = response.data.new_user;
                        let token = response.data.token;
                        log::info!("✅ Registered as {}", user.phone_number);
                        TokenStore::write(&token);
                        auth.set(AuthStore::authenticated(user, token));
                        on_toast.emit((ToastKind::Success, "Welcome to Loan Tracker!".to_string()));
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        on_toast.emit((
                            ToastKind::Error,
                            "Registration failed. Please try again.".to_string(),
                        ));
                    }
                }
                registering.set(false);
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_| {
            log::info!("👋 Logged out");
            TokenStore::clear();
            auth.set(AuthStore::default());
        })
    };

    UseAuthHandle {
        auth: (*auth).clone(),
        checked: *checked,
        registering: *registering,
        register,
        logout,
    }
}
