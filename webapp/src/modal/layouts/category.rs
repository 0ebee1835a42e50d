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
use api::category::{
    Category, CreateCategoryReq, UpdateCategoryReq, create_category, update_category,
};
use common::{
    form::{CategoryDraft, FieldErrors, SaveState, MAX_DESCRIPTION_LEN},
    modal::ModalId,
};

#[derive(Clone, PartialEq, Props)]
pub struct CategoryFormLayoutProps {
    id: ModalId,
    #[props(!optional)]
    category: Option<Category>,
}

#[component]
pub fn CategoryFormLayout(props: CategoryFormLayoutProps) -> Element {
    let id = props.id;
    let mut draft = use_signal(|| CategoryDraft::new(props.category.as_ref()));
    let errors = use_signal(FieldErrors::default);
    let saving = use_signal(SaveState::default);

    let saver = use_coroutine({
        let id = id.clone();
        move |mut rx: UnboundedReceiver<()>| {
            let id = id.clone();
            async move {
                while rx.next().await.is_some() {
                    save_category(&id, draft, errors, saving).await;
                    drain_pending(&mut rx);
                }
            }
        }
    });

    use_submit_handle(id, move || saver.send(()));

    let current = draft();
    let remaining = MAX_DESCRIPTION_LEN.saturating_sub(current.description.chars().count());

    rsx! {
        form { onsubmit: move |evt| evt.prevent_default(),
            div { class: "form-group",
                label { class: "form-label", "Name" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{current.name}",
                    placeholder: "Social media",
                    oninput: move |evt| draft.with_mut(|d| d.name = evt.value()),
                }
                FieldError { errors, field: "name" }
            }
            div { class: "form-group",
                label { class: "form-label", "Description" }
                textarea {
                    class: "form-textarea",
                    rows: "3",
                    value: "{current.description}",
                    oninput: move |evt| draft.with_mut(|d| d.description = evt.value()),
                }
                small { class: "form-hint", "{remaining} characters left" }
                FieldError { errors, field: "description" }
            }
            label { class: "form-check",
                input {
                    r#type: "checkbox",
                    checked: current.blocked_by_default,
                    onchange: move |evt| draft.with_mut(|d| d.blocked_by_default = evt.checked()),
                }
                "Block apps in this category for new devices"
            }
            if saving().is_saving() {
                p { class: "status-message", "Saving category..." }
            }
        }
    }
}

async fn save_category(
    id: &ModalId,
    draft: Signal<CategoryDraft>,
    mut errors: Signal<FieldErrors>,
    mut saving: Signal<SaveState>,
) {
    if !saving.with_mut(SaveState::begin) {
        return;
    }

    let draft = draft.peek().clone();

    let category = match draft.validate() {
        Ok(category) => category,
        Err(field_errors) => {
            errors.set(field_errors);
            saving.with_mut(|s| s.finish(false));
            return;
        }
    };
    errors.set(FieldErrors::default());

    let result = match draft.is_new() {
        true => create_category(&CreateCategoryReq { category })
            .await
            .map(|resp| resp.category),
        false => update_category(&UpdateCategoryReq { category })
            .await
            .map(|resp| resp.category),
    };
    saving.with_mut(|s| s.finish(result.is_ok()));

    match result {
        Ok(category) => {
            notify_success(format!("Category \"{}\" saved", category.name));
            emit_saved(id, &category);
            close_modal();
        }
        Err(err) => notify_error(format!("Failed to save category: {err}")),
    }
}
