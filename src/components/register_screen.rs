use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::CreateUserRequest;
use crate::utils::validation::{validate_phone, validate_required};

#[derive(Properties, PartialEq)]
pub struct RegisterScreenProps {
    pub on_register: Callback<CreateUserRequest>,
    pub registering: bool,
}

#[function_component(RegisterScreen)]
pub fn register_screen(props: &RegisterScreenProps) -> Html {
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let name_error = use_state(|| None::<String>);
    let phone_error = use_state(|| None::<String>);

    let on_submit = {
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let name_error = name_error.clone();
        let phone_error = phone_error.clone();
        let on_register = props.on_register.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(name_input), Some(phone_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let name = name_input.value();
            let phone = phone_input.value();

            let name_check = validate_required(&name, "Name");
            let phone_check = validate_phone(&phone);

            name_error.set(name_check.clone().err());
            phone_error.set(phone_check.clone().err());

            // Validation failures stay inline; nothing reaches the network.
            if name_check.is_err() || phone_check.is_err() {
                return;
            }

            on_register.emit(CreateUserRequest {
                name: name.trim().to_string(),
                phone_number: phone.trim().to_string(),
            });
        })
    };

    html! {
        <div class="register-screen">
            <div class="register-container">
                <div class="register-header">
                    <h1>{"LoanTracker"}</h1>
                    <h2>{"Let's get you started"}</h2>
                    <p>{"Create your account to start tracking loans"}</p>
                </div>

                <form class="register-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="name">{"Full Name"}</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="Enter your full name"
                            ref={name_ref}
                        />
                        if let Some(error) = &*name_error {
                            <p class="field-error">{error}</p>
                        }
                    </div>

                    <div class="form-group">
                        <label for="phone">{"Phone Number"}</label>
                        <input
                            type="tel"
                            id="phone"
                            placeholder="Phone number"
                            ref={phone_ref}
                        />
                        if let Some(error) = &*phone_error {
                            <p class="field-error">{error}</p>
                        }
                    </div>

                    <button type="submit" class="btn-register" disabled={props.registering}>
                        { if props.registering { "Creating account..." } else { "Create Account" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
