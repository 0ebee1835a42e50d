use std::future::Future;

use dioxus::prelude::*;

use crate::{
    common::toast::{notify_error, notify_success},
    modal::open_confirm_modal,
};
use common::modal::{ConfirmOptions, Variant};

// on_data_received callback that reloads a page once a form layout saved something
pub fn reload_on_save(update_signal: Signal<()>) -> impl Fn(serde_json::Value) + 'static {
    move |_| {
        let mut update_signal = update_signal;
        update_signal.set(());
    }
}

// ask before deleting a record, then delete it and reload the page
//
// the confirmation closes as soon as it is confirmed, so the request runs on a task that
// is not tied to the dialog
pub fn confirm_delete<F, Fut>(kind: &'static str, name: String, update_signal: Signal<()>, delete: F)
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = anyhow::Result<()>> + 'static,
{
    let title = format!("Delete {kind}");
    let message = format!("Delete {kind} \"{name}\"?  This cannot be undone.");

    open_confirm_modal(
        ConfirmOptions::new(title, message)
            .on_confirm(move || {
                let deleting = delete();
                let name = name.clone();
                let mut update_signal = update_signal;

                spawn_forever(async move {
                    match deleting.await {
                        Ok(()) => {
                            notify_success(format!("Deleted {kind} \"{name}\""));
                            update_signal.set(());
                        }
                        Err(err) => notify_error(format!("Failed to delete {kind}: {err}")),
                    }
                });
            })
            .confirm_text("Delete")
            .variant(Variant::Danger),
    );
}
