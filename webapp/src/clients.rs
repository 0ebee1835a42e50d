use dioxus::prelude::*;

use crate::{
    common::{
        storage::{get_local_storage, has_local_storage},
        toast::{notify_error, notify_success},
    },
    components::{actions::confirm_delete, search_bar::SearchBar},
    modal::open_modal,
};
use api::{
    client::{
        Client, DeleteClientReq, SearchClientsReq, SetClientPlanReq, delete_client,
        search_clients, set_client_plan,
    },
    plan::{ListPlansReq, Plan, list_plans},
};
use common::{
    local_time,
    modal::{Layout, ModalConfig, Size},
};

const CLIENT_SEARCH_KEY: &str = "client_search";

fn stored_search() -> String {
    match has_local_storage(CLIENT_SEARCH_KEY) {
        true => get_local_storage(CLIENT_SEARCH_KEY).unwrap_or_default(),
        false => String::new(),
    }
}

#[component]
pub fn Clients() -> Element {
    let update_signal = use_signal(|| ());
    let search_signal = use_signal(stored_search);

    let clients = use_resource(move || async move {
        update_signal();

        search_clients(&SearchClientsReq {
            filter: search_signal(),
        })
        .await
    });

    // for the plan column and the plan picker; retired plans stay visible for the
    // clients still on them
    let plans = use_resource(move || async move {
        list_plans(&ListPlansReq {
            include_inactive: true,
        })
        .await
        .map(|resp| resp.plans)
        .unwrap_or_default()
    });

    let status = match &*clients.read() {
        Some(Ok(resp)) => format!("Found {} clients", resp.clients.len()),
        Some(Err(_)) => String::from("Error searching clients"),
        None => String::from("Loading..."),
    };

    let plans = plans().unwrap_or_default();

    let body = match &*clients.read() {
        Some(Ok(resp)) if resp.clients.is_empty() => rsx! {
            div { class: "empty-state", "No clients match this search." }
        },
        Some(Ok(resp)) => rsx! {
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Plan" }
                        th { "Devices" }
                        th { "Joined" }
                        th {}
                    }
                }
                tbody {
                    for client in resp.clients.iter() {
                        ClientRow {
                            key: "{client.client_uuid}",
                            client: client.clone(),
                            plans: plans.clone(),
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
                h1 { class: "page-title", "Clients" }
            }
            SearchBar {
                search_signal,
                storage_key: CLIENT_SEARCH_KEY,
                placeholder: "Search by name or email...",
                status,
            }
            {body}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ClientRowProps {
    client: Client,
    plans: Vec<Plan>,
    update_signal: Signal<()>,
}

#[component]
fn ClientRow(props: ClientRowProps) -> Element {
    let client = props.client;
    let mut update_signal = props.update_signal;
    let client_uuid = client.client_uuid;

    let selected = client
        .plan_uuid
        .map(|uuid| uuid.to_string())
        .unwrap_or_default();

    let change_plan = move |evt: FormEvent| async move {
        let plan_uuid = evt.value().parse().ok();

        match set_client_plan(&SetClientPlanReq {
            client_uuid,
            plan_uuid,
        })
        .await
        {
            Ok(_) => {
                notify_success(String::from("Plan updated"));
                update_signal.set(());
            }
            Err(err) => notify_error(format!("Failed to change plan: {err}")),
        }
    };

    let show_devices = {
        let name = client.name.clone();
        move |_| {
            open_modal(
                ModalConfig::new(Layout::ClientDevices(client_uuid))
                    .title(format!("Devices of {name}"))
                    .size(Size::Xl)
                    .buttons(false, true)
                    .cancel_text("Close")
                    // locking a device changes the count shown on this page
                    .on_close(move || {
                        let mut update_signal = update_signal;
                        update_signal.set(());
                    }),
            );
        }
    };

    let delete = {
        let name = client.name.clone();
        move |_| {
            confirm_delete("client", name.clone(), update_signal, move || async move {
                delete_client(&DeleteClientReq { client_uuid })
                    .await
                    .map(|_| ())
            })
        }
    };

    rsx! {
        tr {
            td { "{client.name}" }
            td { "{client.email}" }
            td {
                select {
                    class: "form-select",
                    value: "{selected}",
                    onchange: change_plan,
                    option { value: "", selected: client.plan_uuid.is_none(), "No plan" }
                    for plan in props.plans.iter() {
                        option {
                            key: "{plan.plan_uuid}",
                            value: "{plan.plan_uuid}",
                            selected: client.plan_uuid == Some(plan.plan_uuid),
                            "{plan.name}"
                        }
                    }
                }
            }
            td { "{client.device_count}" }
            td { "{local_time(client.created)}" }
            td { class: "row-actions",
                button {
                    class: "btn btn-small btn-secondary",
                    onclick: show_devices,
                    "Devices"
                }
                button { class: "btn btn-small btn-danger", onclick: delete, "Delete" }
            }
        }
    }
}
