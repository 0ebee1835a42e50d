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
use api::{
    app::{App, CreateAppReq, UpdateAppReq, create_app, update_app},
    category::{ListCategoriesReq, list_categories},
};
use common::{
    form::{AppDraft, FieldErrors, SaveState},
    modal::ModalId,
};

#[derive(Clone, PartialEq, Props)]
pub struct AppFormLayoutProps {
    id: ModalId,
    #[props(!optional)]
    app: Option<App>,
}

#[component]
pub fn AppFormLayout(props: AppFormLayoutProps) -> Element {
    let id = props.id;
    let mut draft = use_signal(|| AppDraft::new(props.app.as_ref()));
    let errors = use_signal(FieldErrors::default);
    let saving = use_signal(SaveState::default);

    let categories = use_resource(move || async move {
        list_categories(&ListCategoriesReq {})
            .await
            .map(|resp| resp.categories)
    });

    let saver = use_coroutine({
        let id = id.clone();
        move |mut rx: UnboundedReceiver<()>| {
            let id = id.clone();
            async move {
                while rx.next().await.is_some() {
                    save_app(&id, draft, errors, saving).await;
                    drain_pending(&mut rx);
                }
            }
        }
    });

    use_submit_handle(id, move || saver.send(()));

    let current = draft();
    let selected = current
        .category_uuid
        .map(|uuid| uuid.to_string())
        .unwrap_or_default();

    let category_options = match &*categories.read() {
        Some(Ok(categories)) => rsx! {
            for category in categories.iter() {
                option {
                    key: "{category.category_uuid}",
                    value: "{category.category_uuid}",
                    selected: current.category_uuid == Some(category.category_uuid),
                    "{category.name}"
                }
            }
        },
        Some(Err(err)) => rsx! {
            option { disabled: true, "Failed to load categories: {err}" }
        },
        None => rsx! {
            option { disabled: true, "Loading categories..." }
        },
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
                label { class: "form-label", "Package" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{current.package}",
                    placeholder: "com.example.app",
                    oninput: move |evt| draft.with_mut(|d| d.package = evt.value()),
                }
                FieldError { errors, field: "package" }
            }
            div { class: "form-group",
                label { class: "form-label", "Category" }
                select {
                    class: "form-select",
                    value: "{selected}",
                    onchange: move |evt| {
                        draft.with_mut(|d| d.category_uuid = evt.value().parse().ok());
                    },
                    option { value: "", selected: current.category_uuid.is_none(), "Uncategorized" }
                    {category_options}
                }
            }
            if saving().is_saving() {
                p { class: "status-message", "Saving app..." }
            }
        }
    }
}

async fn save_app(
    id: &ModalId,
    draft: Signal<AppDraft>,
    mut errors: Signal<FieldErrors>,
    mut saving: Signal<SaveState>,
) {
    if !saving.with_mut(SaveState::begin) {
        return;
    }

    let draft = draft.peek().clone();

    let app = match draft.validate() {
        Ok(app) => app,
        Err(field_errors) => {
            errors.set(field_errors);
            saving.with_mut(|s| s.finish(false));
            return;
        }
    };
    errors.set(FieldErrors::default());

    let result = match draft.is_new() {
        true => create_app(&CreateAppReq { app }).await.map(|resp| resp.app),
        false => update_app(&UpdateAppReq { app }).await.map(|resp| resp.app),
    };
    saving.with_mut(|s| s.finish(result.is_ok()));

    match result {
        Ok(app) => {
            notify_success(format!("App \"{}\" saved", app.name));
            emit_saved(id, &app);
            close_modal();
        }
        Err(err) => notify_error(format!("Failed to save app: {err}")),
    }
}
