use dioxus::prelude::*;

use crate::{
    components::actions::{confirm_delete, reload_on_save},
    modal::open_modal,
};
use api::admin::{Admin, DeleteAdminReq, ListAdminsReq, delete_admin, list_admins};
use common::modal::{Layout, ModalConfig, Size};

fn open_admin_form(admin: Option<Admin>, update_signal: Signal<()>) {
    let title = match &admin {
        Some(admin) => format!("Edit {}", admin.email),
        None => String::from("New admin"),
    };

    open_modal(
        ModalConfig::new(Layout::AdminForm(admin))
            .title(title)
            .size(Size::Md)
            .confirm_text("Save")
            // a half typed password is easy to lose with a stray click
            .close_on_backdrop_click(false)
            .on_data_received(reload_on_save(update_signal)),
    );
}

#[component]
pub fn Admins() -> Element {
    let update_signal = use_signal(|| ());

    let admins = use_resource(move || async move {
        update_signal();
        list_admins(&ListAdminsReq {}).await
    });

    let body = match &*admins.read() {
        Some(Ok(resp)) => rsx! {
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th {}
                    }
                }
                tbody {
                    for admin in resp.admins.iter() {
                        AdminRow {
                            key: "{admin.admin_uuid}",
                            admin: admin.clone(),
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
                h1 { class: "page-title", "Admins" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| open_admin_form(None, update_signal),
                    "New admin"
                }
            }
            {body}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct AdminRowProps {
    admin: Admin,
    update_signal: Signal<()>,
}

#[component]
fn AdminRow(props: AdminRowProps) -> Element {
    let admin = props.admin;
    let update_signal = props.update_signal;
    let admin_uuid = admin.admin_uuid;

    let edit = {
        let admin = admin.clone();
        move |_| open_admin_form(Some(admin.clone()), update_signal)
    };

    let delete = {
        let email = admin.email.clone();
        move |_| {
            confirm_delete("admin", email.clone(), update_signal, move || async move {
                delete_admin(&DeleteAdminReq { admin_uuid }).await.map(|_| ())
            })
        }
    };

    rsx! {
        tr {
            td { "{admin.name}" }
            td { "{admin.email}" }
            td {
                span { class: "badge", "{admin.role.as_str()}" }
            }
            td { class: "row-actions",
                button { class: "btn btn-small btn-secondary", onclick: edit, "Edit" }
                button { class: "btn btn-small btn-danger", onclick: delete, "Delete" }
            }
        }
    }
}
