use yew::prelude::*;

use crate::components::home_page::HomePage;
use crate::components::register_screen::RegisterScreen;
use crate::components::toast::ToastArea;
use crate::hooks::{use_auth, use_toasts};

#[function_component(App)]
pub fn app() -> Html {
    let toasts = use_toasts();
    let auth = use_auth(toasts.show.clone());

    // Hold rendering until the mount-time rehydrate ran; "not yet checked"
    // is not the same as "logged out".
    let body = if !auth.checked {
        html! { <div class="app-loading">{"Loading..."}</div> }
    } else {
        match (&auth.auth.user, &auth.auth.token) {
            (Some(user), Some(token)) if auth.auth.is_authenticated => html! {
                <HomePage
                    user={user.clone()}
                    token={token.clone()}
                    on_logout={auth.logout.clone()}
                    on_toast={toasts.show.clone()}
                />
            },
            _ => html! {
                <RegisterScreen
                    on_register={auth.register.clone()}
                    registering={auth.registering}
                />
            },
        }
    };

    html! {
        <>
            { body }
            <ToastArea toasts={toasts.toasts.clone()} on_dismiss={toasts.dismiss.clone()} />
        </>
    }
}
