use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{error, info};

use crate::common::config::CONFIG;

static NEXT_TOAST: AtomicU64 = AtomicU64::new(0);

pub static TOASTS: GlobalSignal<Vec<Toast>> = Signal::global(Vec::new);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    text: String,
}

pub fn notify_success(text: impl Into<String>) {
    let text = text.into();
    info!({ toast = text.as_str() }, "success notification");
    push(ToastKind::Success, text);
}

pub fn notify_error(text: impl Into<String>) {
    let text = text.into();
    error!({ toast = text.as_str() }, "error notification");
    push(ToastKind::Error, text);
}

fn push(kind: ToastKind, text: String) {
    let id = NEXT_TOAST.fetch_add(1, Ordering::Relaxed);
    TOASTS.with_mut(|toasts| toasts.push(Toast { id, kind, text }));

    Timeout::new(CONFIG.peek().toast_millis, move || dismiss(id)).forget();
}

fn dismiss(id: u64) {
    TOASTS.with_mut(|toasts| toasts.retain(|toast| toast.id != id));
}

#[component]
pub fn ToastHost() -> Element {
    rsx! {
        div { class: "toast-stack",
            for toast in TOASTS.read().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    },
                    onclick: move |_| dismiss(toast.id),
                    "{toast.text}"
                }
            }
        }
    }
}
