use dioxus::prelude::*;
use serde::Serialize;
use tracing::warn;

use crate::modal::emit_data;
use common::{form::FieldErrors, modal::ModalId};

mod admin;
mod app;
mod broadcast;
mod category;
mod confirm;
mod devices;
mod plan;

pub use admin::AdminFormLayout;
pub use app::AppFormLayout;
pub use broadcast::BroadcastFormLayout;
pub use category::CategoryFormLayout;
pub use confirm::ConfirmLayout;
pub use devices::ClientDevicesLayout;
pub use plan::PlanFormLayout;

// pass a saved record back to whoever opened the modal
fn emit_saved<T: Serialize>(id: &ModalId, record: &T) {
    match serde_json::to_value(record) {
        Ok(value) => emit_data(id, value),
        Err(err) => warn!({ modal = %id, error = %err }, "failed to serialize saved record"),
    }
}

// confirms clicked while a save was in flight are dropped rather than replayed
fn drain_pending(rx: &mut UnboundedReceiver<()>) {
    while let Ok(Some(())) = rx.try_next() {}
}

#[derive(Clone, PartialEq, Props)]
struct FieldErrorProps {
    errors: Signal<FieldErrors>,
    field: &'static str,
}

#[component]
fn FieldError(props: FieldErrorProps) -> Element {
    let message = props.errors.read().get(props.field).map(String::from);

    match message {
        Some(message) => rsx! {
            div { class: "form-error", "{message}" }
        },
        None => rsx! {},
    }
}
