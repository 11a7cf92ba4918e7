use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

pub struct UseToastsHandle {
    pub toasts: Vec<Toast>,
    pub show: Callback<(ToastKind, String)>,
    pub dismiss: Callback<u32>,
}

/// Transient notifications, auto-dismissed after CONFIG.toast_duration_ms.
/// The list lives in a RefCell so a timeout firing against an old render
/// cannot clobber toasts pushed since; the version state only triggers
/// re-renders.
#[hook]
pub fn use_toasts() -> UseToastsHandle {
    let toasts = use_mut_ref(Vec::<Toast>::new);
    let next_id = use_mut_ref(|| 0u32);
    let version = use_state(|| 0u32);

    let show = {
        let toasts = toasts.clone();
        let next_id = next_id.clone();
        let version = version.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            let id = {
                let mut counter = next_id.borrow_mut();
                *counter += 1;
                *counter
            };
            toasts.borrow_mut().push(Toast { id, kind, message });
            version.set(*version + 1);

            let toasts = toasts.clone();
            let version = version.clone();
            Timeout::new(CONFIG.toast_duration_ms, move || {
                toasts.borrow_mut().retain(|t| t.id != id);
                version.set(*version + 1);
            })
            .forget();
        })
    };

    let dismiss = {
        let toasts = toasts.clone();
        let version = version.clone();
        Callback::from(move |id: u32| {
            toasts.borrow_mut().retain(|t| t.id != id);
            version.set(*version + 1);
        })
    };

    let handle = UseToastsHandle {
        toasts: toasts.borrow().clone(),
        show,
        dismiss,
    };
    handle
}
