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
    broadcast::{Audience, SendBroadcastReq, send_broadcast},
    plan::{ListPlansReq, list_plans},
};
use common::{
    form::{BroadcastDraft, FieldErrors, SaveState, MAX_BROADCAST_BODY_LEN},
    modal::ModalId,
};

// the audience select can only carry strings
fn audience_key(audience: &Audience) -> String {
    match audience {
        Audience::Everyone => String::from("everyone"),
        Audience::Unsubscribed => String::from("unsubscribed"),
        Audience::Plan(plan_uuid) => format!("plan:{plan_uuid}"),
    }
}

fn parse_audience(key: &str) -> Audience {
    match key.split_once(':') {
        Some(("plan", uuid)) => uuid.parse().map(Audience::Plan).unwrap_or_default(),
        _ if key == "unsubscribed" => Audience::Unsubscribed,
        _ => Audience::Everyone,
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BroadcastFormLayoutProps {
    id: ModalId,
}

// broadcasts cannot be edited once sent, so there is only the create form
#[component]
pub fn BroadcastFormLayout(props: BroadcastFormLayoutProps) -> Element {
    let id = props.id;
    let mut draft = use_signal(BroadcastDraft::default);
    let errors = use_signal(FieldErrors::default);
    let saving = use_signal(SaveState::default);

    let plans = use_resource(move || async move {
        list_plans(&ListPlansReq {
            include_inactive: false,
        })
        .await
        .map(|resp| resp.plans)
    });

    let saver = use_coroutine({
        let id = id.clone();
        move |mut rx: UnboundedReceiver<()>| {
            let id = id.clone();
            async move {
                while rx.next().await.is_some() {
                    submit_broadcast(&id, draft, errors, saving).await;
                    drain_pending(&mut rx);
                }
            }
        }
    });

    use_submit_handle(id, move || saver.send(()));

    let current = draft();
    let selected = audience_key(&current.audience);
    let remaining = MAX_BROADCAST_BODY_LEN.saturating_sub(current.body.chars().count());

    let plan_options = match &*plans.read() {
        Some(Ok(plans)) => rsx! {
            for plan in plans.iter() {
                option {
                    key: "{plan.plan_uuid}",
                    value: "plan:{plan.plan_uuid}",
                    selected: current.audience == Audience::Plan(plan.plan_uuid),
                    "Subscribers of {plan.name}"
                }
            }
        },
        _ => rsx! {},
    };

    rsx! {
        form { onsubmit: move |evt| evt.prevent_default(),
            div { class: "form-group",
                label { class: "form-label", "Title" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{current.title}",
                    oninput: move |evt| draft.with_mut(|d| d.title = evt.value()),
                }
                FieldError { errors, field: "title" }
            }
            div { class: "form-group",
                label { class: "form-label", "Message" }
                textarea {
                    class: "form-textarea",
                    rows: "5",
                    value: "{current.body}",
                    oninput: move |evt| draft.with_mut(|d| d.body = evt.value()),
                }
                small { class: "form-hint", "{remaining} characters left" }
                FieldError { errors, field: "body" }
            }
            div { class: "form-group",
                label { class: "form-label", "Audience" }
                select {
                    class: "form-select",
                    value: "{selected}",
                    onchange: move |evt| draft.with_mut(|d| d.audience = parse_audience(&evt.value())),
                    option {
                        value: "everyone",
                        selected: current.audience == Audience::Everyone,
                        "Every client"
                    }
                    option {
                        value: "unsubscribed",
                        selected: current.audience == Audience::Unsubscribed,
                        "Clients without a plan"
                    }
                    {plan_options}
                }
            }
            if saving().is_saving() {
                p { class: "status-message", "Sending..." }
            }
        }
    }
}

async fn submit_broadcast(
    id: &ModalId,
    draft: Signal<BroadcastDraft>,
    mut errors: Signal<FieldErrors>,
    mut saving: Signal<SaveState>,
) {
    if !saving.with_mut(SaveState::begin) {
        return;
    }

    let broadcast = match draft.peek().validate() {
        Ok(broadcast) => broadcast,
        Err(field_errors) => {
            errors.set(field_errors);
            saving.with_mut(|s| s.finish(false));
            return;
        }
    };
    errors.set(FieldErrors::default());

    let result = send_broadcast(&SendBroadcastReq { broadcast }).await;
    saving.with_mut(|s| s.finish(result.is_ok()));

    match result {
        Ok(resp) => {
            notify_success(format!("Broadcast \"{}\" sent", resp.broadcast.title));
            emit_saved(id, &resp.broadcast);
            close_modal();
        }
        Err(err) => notify_error(format!("Failed to send broadcast: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audience_keys_parse_back() {
        for audience in [Audience::Everyone, Audience::Unsubscribed, Audience::Plan(12)] {
            assert_eq!(parse_audience(&audience_key(&audience)), audience);
        }
    }

    #[test]
    fn malformed_audience_falls_back_to_everyone() {
        assert_eq!(parse_audience("plan:abc"), Audience::Everyone);
        assert_eq!(parse_audience(""), Audience::Everyone);
    }
}
