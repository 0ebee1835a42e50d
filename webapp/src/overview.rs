use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use api::{
    admin::{ListAdminsReq, list_admins},
    broadcast::{ListBroadcastsReq, list_broadcasts},
    client::{SearchClientsReq, search_clients},
    plan::{ListPlansReq, list_plans},
};
use common::local_time;

fn sent_label(sent: Option<i64>) -> String {
    sent.map(local_time)
        .unwrap_or_else(|| String::from("pending"))
}

#[derive(Clone, PartialEq, Props)]
struct StatCardProps {
    label: &'static str,
    #[props(!optional)]
    value: Option<usize>,
    target: Route,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    let value = match props.value {
        Some(value) => value.to_string(),
        None => String::from("-"),
    };

    rsx! {
        Link { to: props.target, class: "stat-card",
            div { class: "stat-value", "{value}" }
            div { class: "stat-label", "{props.label}" }
        }
    }
}

#[component]
pub fn Overview() -> Element {
    let clients = use_resource(move || async move {
        search_clients(&SearchClientsReq {
            filter: String::new(),
        })
        .await
    });

    let plans = use_resource(move || async move {
        list_plans(&ListPlansReq {
            include_inactive: false,
        })
        .await
    });

    let admins = use_resource(move || async move { list_admins(&ListAdminsReq {}).await });

    let broadcasts = use_resource(move || async move { list_broadcasts(&ListBroadcastsReq {}).await });

    let client_count = match &*clients.read() {
        Some(Ok(resp)) => Some(resp.clients.len()),
        _ => None,
    };
    let device_count = match &*clients.read() {
        Some(Ok(resp)) => Some(
            resp.clients
                .iter()
                .map(|client| client.device_count as usize)
                .sum(),
        ),
        _ => None,
    };
    let plan_count = match &*plans.read() {
        Some(Ok(resp)) => Some(resp.plans.len()),
        _ => None,
    };
    let admin_count = match &*admins.read() {
        Some(Ok(resp)) => Some(resp.admins.len()),
        _ => None,
    };

    let recent = match &*broadcasts.read() {
        Some(Ok(resp)) if resp.broadcasts.is_empty() => rsx! {
            div { class: "empty-state", "Nothing has been broadcast yet." }
        },
        Some(Ok(resp)) => rsx! {
            table { class: "data-table",
                tbody {
                    for broadcast in resp.broadcasts.iter().rev().take(5) {
                        tr { key: "{broadcast.broadcast_uuid}",
                            td { "{broadcast.title}" }
                            td { "{sent_label(broadcast.sent)}" }
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
                h1 { class: "page-title", "Overview" }
            }

            div { class: "stat-grid",
                StatCard {
                    label: "Clients",
                    value: client_count,
                    target: Route::Clients {},
                }
                StatCard {
                    label: "Linked devices",
                    value: device_count,
                    target: Route::Clients {},
                }
                StatCard {
                    label: "Active plans",
                    value: plan_count,
                    target: Route::Plans {},
                }
                StatCard {
                    label: "Admins",
                    value: admin_count,
                    target: Route::Admins {},
                }
            }

            div { class: "section",
                h2 { class: "section-title", "Recent broadcasts" }
                {recent}
            }
        }
    }
}
