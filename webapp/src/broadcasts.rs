use dioxus::prelude::*;

use crate::{
    components::actions::{confirm_delete, reload_on_save},
    modal::open_modal,
};
use api::{
    broadcast::{Audience, Broadcast, DeleteBroadcastReq, ListBroadcastsReq, delete_broadcast, list_broadcasts},
    plan::{ListPlansReq, Plan, list_plans},
};
use common::{
    local_time,
    modal::{Layout, ModalConfig, Size},
};

fn audience_label(audience: &Audience, plans: &[Plan]) -> String {
    match audience {
        Audience::Everyone => String::from("Every client"),
        Audience::Unsubscribed => String::from("Clients without a plan"),
        Audience::Plan(plan_uuid) => match plans.iter().find(|plan| plan.plan_uuid == *plan_uuid) {
            Some(plan) => format!("Subscribers of {}", plan.name),
            None => format!("Subscribers of plan {plan_uuid}"),
        },
    }
}

#[component]
pub fn Broadcasts() -> Element {
    let update_signal = use_signal(|| ());

    let broadcasts = use_resource(move || async move {
        update_signal();
        list_broadcasts(&ListBroadcastsReq {}).await
    });

    let plans = use_resource(move || async move {
        list_plans(&ListPlansReq {
            include_inactive: true,
        })
        .await
        .map(|resp| resp.plans)
        .unwrap_or_default()
    });
    let plans = plans().unwrap_or_default();

    let new_broadcast = move |_| {
        open_modal(
            ModalConfig::new(Layout::BroadcastForm)
                .title("New broadcast")
                .size(Size::Lg)
                .confirm_text("Send")
                .close_on_backdrop_click(false)
                .on_data_received(reload_on_save(update_signal)),
        );
    };

    let body = match &*broadcasts.read() {
        Some(Ok(resp)) if resp.broadcasts.is_empty() => rsx! {
            div { class: "empty-state", "Nothing has been broadcast yet." }
        },
        Some(Ok(resp)) => rsx! {
            table { class: "data-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Audience" }
                        th { "Sent" }
                        th {}
                    }
                }
                tbody {
                    for broadcast in resp.broadcasts.iter() {
                        BroadcastRow {
                            key: "{broadcast.broadcast_uuid}",
                            audience: audience_label(&broadcast.audience, &plans),
                            broadcast: broadcast.clone(),
                            update_signal,
                        }
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "empty-state status-error", "Error: {err}" }
        },
        None => rsx! {
            div { class: "loading-state", "Loading..." }
        },
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Broadcasts" }
                button { class: "btn btn-primary", onclick: new_broadcast, "New broadcast" }
            }
            {body}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct BroadcastRowProps {
    broadcast: Broadcast,
    audience: String,
    update_signal: Signal<()>,
}

#[component]
fn BroadcastRow(props: BroadcastRowProps) -> Element {
    let broadcast = props.broadcast;
    let update_signal = props.update_signal;
    let broadcast_uuid = broadcast.broadcast_uuid;

    let sent = broadcast
        .sent
        .map(local_time)
        .unwrap_or_else(|| String::from("pending"));

    // the body is shown in a plain dialog with no layout of its own
    let show = {
        let title = broadcast.title.clone();
        let body = broadcast.body.clone();
        move |_| {
            open_modal(
                ModalConfig::new(Layout::Passthrough)
                    .title(title.clone())
                    .size(Size::Md)
                    .content(rsx! {
                        p { class: "broadcast-body", "{body}" }
                    })
                    .buttons(false, true)
                    .cancel_text("Close"),
            );
        }
    };

    let delete = {
        let title = broadcast.title.clone();
        move |_| {
            confirm_delete("broadcast", title.clone(), update_signal, move || async move {
                delete_broadcast(&DeleteBroadcastReq { broadcast_uuid })
                    .await
                    .map(|_| ())
            })
        }
    };

    rsx! {
        tr {
            td { "{broadcast.title}" }
            td { "{props.audience}" }
            td { "{sent}" }
            td { class: "row-actions",
                button { class: "btn btn-small btn-secondary", onclick: show, "View" }
                button { class: "btn btn-small btn-danger", onclick: delete, "Delete" }
            }
        }
    }
}
