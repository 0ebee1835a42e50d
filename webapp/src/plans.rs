use dioxus::prelude::*;

use crate::{
    components::actions::{confirm_delete, reload_on_save},
    modal::open_modal,
};
use api::plan::{DeletePlanReq, ListPlansReq, Plan, delete_plan, list_plans};
use common::modal::{Layout, ModalConfig, Size};

fn open_plan_form(plan: Option<Plan>, update_signal: Signal<()>) {
    let title = match &plan {
        Some(plan) => format!("Edit plan \"{}\"", plan.name),
        None => String::from("New plan"),
    };

    open_modal(
        ModalConfig::new(Layout::PlanForm(plan))
            .title(title)
            .size(Size::Md)
            .confirm_text("Save")
            .on_data_received(reload_on_save(update_signal)),
    );
}

#[component]
pub fn Plans() -> Element {
    let update_signal = use_signal(|| ());

    let plans = use_resource(move || async move {
        update_signal();

        list_plans(&ListPlansReq {
            include_inactive: true,
        })
        .await
    });

    let body = match &*plans.read() {
        Some(Ok(resp)) if resp.plans.is_empty() => rsx! {
            div { class: "empty-state", "No plans yet." }
        },
        Some(Ok(resp)) => rsx! {
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Price" }
                        th { "Period" }
                        th { "Devices" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    for plan in resp.plans.iter() {
                        PlanRow {
                            key: "{plan.plan_uuid}",
                            plan: plan.clone(),
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
                h1 { class: "page-title", "Plans" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| open_plan_form(None, update_signal),
                    "New plan"
                }
            }
            {body}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct PlanRowProps {
    plan: Plan,
    update_signal: Signal<()>,
}

#[component]
fn PlanRow(props: PlanRowProps) -> Element {
    let plan = props.plan;
    let update_signal = props.update_signal;
    let plan_uuid = plan.plan_uuid;

    let edit = {
        let plan = plan.clone();
        move |_| open_plan_form(Some(plan.clone()), update_signal)
    };

    let delete = {
        let name = plan.name.clone();
        move |_| {
            confirm_delete("plan", name.clone(), update_signal, move || async move {
                delete_plan(&DeletePlanReq { plan_uuid }).await.map(|_| ())
            })
        }
    };

    rsx! {
        tr {
            td { "{plan.name}" }
            td { "{plan.price()}" }
            td { "{plan.duration_days} days" }
            td { "{plan.device_limit}" }
            td {
                if plan.active {
                    span { class: "badge badge-success", "active" }
                } else {
                    span { class: "badge", "retired" }
                }
            }
            td { class: "row-actions",
                button { class: "btn btn-small btn-secondary", onclick: edit, "Edit" }
                button { class: "btn btn-small btn-danger", onclick: delete, "Delete" }
            }
        }
    }
}
