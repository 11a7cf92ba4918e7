use yew::prelude::*;

use crate::hooks::{Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct ToastAreaProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastArea)]
pub fn toast_area(props: &ToastAreaProps) -> Html {
    html! {
        <div class="toast-area">
            { for props.toasts.iter().map(|toast| {
                let (icon, class) = match toast.kind {
                    ToastKind::Success => ("✅", "toast toast-success"),
                    ToastKind::Error => ("❌", "toast toast-error"),
                };
                let onclick = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_| on_dismiss.emit(id))
                };
                html! {
                    <div key={toast.id} class={class} onclick={onclick}>
                        <span class="toast-icon">{icon}</span>
                        <span class="toast-message">{&toast.message}</span>
                    </div>
                }
            }) }
        </div>
    }
}
