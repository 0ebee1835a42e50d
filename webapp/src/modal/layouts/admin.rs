use dioxus::prelude::*;
use futures::StreamExt;

use crate::{
    common::toast::{notify_error, notify_success},
    modal::{
        close_modal,
        layouts::{FieldError, drain_pending, emit_saved},
        use_submit_handle,
    },
};
use api::admin::{Admin, AdminRole, CreateAdminReq, UpdateAdminReq, create_admin, update_admin};
use common::{
    form::{AdminDraft, FieldErrors, SaveState, MIN_PASSWORD_LEN},
    modal::ModalId,
};

#[derive(Clone, PartialEq, Props)]
pub struct AdminFormLayoutProps {
    id: ModalId,
    #[props(!optional)]
    admin: Option<Admin>,
}

#[component]
pub fn AdminFormLayout(props: AdminFormLayoutProps) -> Element {
    let id = props.id;
    let mut draft = use_signal(|| AdminDraft::new(props.admin.as_ref()));
    let errors = use_signal(FieldErrors::default);
    let saving = use_signal(SaveState::default);

    let saver = use_coroutine({
        let id = id.clone();
        move |mut rx: UnboundedReceiver<()>| {
            let id = id.clone();
            async move {
                while rx.next().await.is_some() {
                    save_admin(&id, draft, errors, saving).await;
                    drain_pending(&mut rx);
                }
            }
        }
    });

    use_submit_handle(id, move || saver.send(()));

    let current = draft();
    let password_hint = match current.is_new() {
        true => format!("At least {MIN_PASSWORD_LEN} characters"),
        false => String::from("Leave blank to keep the current password"),
    };

    rsx! {
        form { onsubmit: move |evt| evt.prevent_default(),
            div { class: "form-group",
                label { class: "form-label", "Name" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{current.name}",
                    oninput: move |evt| draft.with_mut(|d| d.name = evt.value()),
                }
                FieldError { errors, field: "name" }
            }
            div { class: "form-group",
                label { class: "form-label", "Email" }
                input {
                    class: "form-input",
                    r#type: "email",
                    value: "{current.email}",
                    placeholder: "someone@example.com",
                    oninput: move |evt| draft.with_mut(|d| d.email = evt.value()),
                }
                FieldError { errors, field: "email" }
            }
            div { class: "form-group",
                label { class: "form-label", "Role" }
                select {
                    class: "form-select",
                    value: "{current.role.as_str()}",
                    onchange: move |evt| draft.with_mut(|d| d.role = AdminRole::from(evt.value().as_str())),
                    for role in AdminRole::ALL {
                        option {
                            value: "{role.as_str()}",
                            selected: role == current.role,
                            "{role.as_str()}"
                        }
                    }
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Password" }
                input {
                    class: "form-input",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: "{current.password}",
                    oninput: move |evt| draft.with_mut(|d| d.password = evt.value()),
                }
                small { class: "form-hint", "{password_hint}" }
                FieldError { errors, field: "password" }
            }
            div { class: "form-group",
                label { class: "form-label", "Confirm password" }
                input {
                    class: "form-input",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: "{current.confirm_password}",
                    oninput: move |evt| draft.with_mut(|d| d.confirm_password = evt.value()),
                }
                FieldError { errors, field: "confirm_password" }
            }
            if saving().is_saving() {
                p { class: "status-message", "Saving admin..." }
            }
        }
    }
}

async fn save_admin(
    id: &ModalId,
    draft: Signal<AdminDraft>,
    mut errors: Signal<FieldErrors>,
    mut saving: Signal<SaveState>,
) {
    if !saving.with_mut(SaveState::begin) {
        return;
    }

    let draft = draft.peek().clone();

    let (admin, password) = match draft.validate() {
        Ok(valid) => valid,
        Err(field_errors) => {
            errors.set(field_errors);
            saving.with_mut(|s| s.finish(false));
            return;
        }
    };
    errors.set(FieldErrors::default());

    let result = match (draft.is_new(), password) {
        (true, Some(password)) => create_admin(&CreateAdminReq { admin, password })
            .await
            .map(|resp| resp.admin),
        (true, None) => Err(anyhow::Error::msg("a new admin needs a password")),
        (false, password) => update_admin(&UpdateAdminReq { admin, password })
            .await
            .map(|resp| resp.admin),
    };
    saving.with_mut(|s| s.finish(result.is_ok()));

    match result {
        Ok(admin) => {
            notify_success(format!("Admin {} saved", admin.email));
            emit_saved(id, &admin);
            close_modal();
        }
        Err(err) => notify_error(format!("Failed to save admin: {err}")),
    }
}
