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
use api::plan::{CreatePlanReq, Plan, UpdatePlanReq, create_plan, update_plan};
use common::{
    form::{FieldErrors, PlanDraft, SaveState},
    modal::ModalId,
};

#[derive(Clone, PartialEq, Props)]
pub struct PlanFormLayoutProps {
    id: ModalId,
    #[props(!optional)]
    plan: Option<Plan>,
}

// create or edit a subscription plan
//
// the generic confirm button is routed here through the submit bridge; the modal only
// closes once the backend accepted the plan
#[component]
pub fn PlanFormLayout(props: PlanFormLayoutProps) -> Element {
    let id = props.id;
    let mut draft = use_signal(|| PlanDraft::new(props.plan.as_ref()));
    let errors = use_signal(FieldErrors::default);
    let saving = use_signal(SaveState::default);

    let saver = use_coroutine({
        let id = id.clone();
        move |mut rx: UnboundedReceiver<()>| {
            let id = id.clone();
            async move {
                while rx.next().await.is_some() {
                    save_plan(&id, draft, errors, saving).await;
                    drain_pending(&mut rx);
                }
            }
        }
    });

    use_submit_handle(id, move || saver.send(()));

    let current = draft();

    rsx! {
        form { onsubmit: move |evt| evt.prevent_default(),
            div { class: "form-group",
                label { class: "form-label", "Name" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{current.name}",
                    placeholder: "Family",
                    oninput: move |evt| draft.with_mut(|d| d.name = evt.value()),
                }
                FieldError { errors, field: "name" }
            }
            div { class: "form-group",
                label { class: "form-label", "Price" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{current.price}",
                    placeholder: "9.99",
                    oninput: move |evt| draft.with_mut(|d| d.price = evt.value()),
                }
                FieldError { errors, field: "price" }
            }
            div { class: "form-group",
                label { class: "form-label", "Billing period (days)" }
                input {
                    class: "form-input",
                    r#type: "number",
                    min: "1",
                    value: "{current.duration_days}",
                    oninput: move |evt| draft.with_mut(|d| d.duration_days = evt.value()),
                }
                FieldError { errors, field: "duration_days" }
            }
            div { class: "form-group",
                label { class: "form-label", "Device limit" }
                input {
                    class: "form-input",
                    r#type: "number",
                    min: "1",
                    value: "{current.device_limit}",
                    oninput: move |evt| draft.with_mut(|d| d.device_limit = evt.value()),
                }
                FieldError { errors, field: "device_limit" }
            }
            label { class: "form-check",
                input {
                    r#type: "checkbox",
                    checked: current.active,
                    onchange: move |evt| draft.with_mut(|d| d.active = evt.checked()),
                }
                "Available for new subscriptions"
            }
            if saving().is_saving() {
                p { class: "status-message", "Saving plan..." }
            }
        }
    }
}

async fn save_plan(
    id: &ModalId,
    draft: Signal<PlanDraft>,
    mut errors: Signal<FieldErrors>,
    mut saving: Signal<SaveState>,
) {
    if !saving.with_mut(SaveState::begin) {
        return;
    }

    let draft = draft.peek().clone();

    let plan = match draft.validate() {
        Ok(plan) => plan,
        Err(field_errors) => {
            errors.set(field_errors);
            saving.with_mut(|s| s.finish(false));
            return;
        }
    };
    errors.set(FieldErrors::default());

    let result = match draft.is_new() {
        true => create_plan(&CreatePlanReq { plan }).await.map(|resp| resp.plan),
        false => update_plan(&UpdatePlanReq { plan }).await.map(|resp| resp.plan),
    };
    saving.with_mut(|s| s.finish(result.is_ok()));

    match result {
        Ok(plan) => {
            notify_success(format!("Plan \"{}\" saved", plan.name));
            emit_saved(id, &plan);
            close_modal();
        }
        Err(err) => notify_error(format!("Failed to save plan: {err}")),
    }
}
