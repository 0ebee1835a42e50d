use dioxus::prelude::*;

use crate::modal::layouts::{
    AdminFormLayout, AppFormLayout, BroadcastFormLayout, CategoryFormLayout, ClientDevicesLayout,
    ConfirmLayout, PlanFormLayout,
};
use common::modal::{Layout, ModalId, Variant};

// LayoutBody
//
// the layout registry: every layout variant maps to exactly one component here.  whether
// the host also draws the generic footer is decided by Layout::owns_footer().
#[derive(Clone, PartialEq, Props)]
pub struct LayoutBodyProps {
    id: ModalId,
    layout: Layout,
    #[props(!optional)]
    content: Option<Element>,
    variant: Variant,
    confirm_text: String,
    cancel_text: String,
}

#[component]
pub fn LayoutBody(props: LayoutBodyProps) -> Element {
    let id = props.id;

    match props.layout {
        Layout::Passthrough => match props.content {
            Some(content) => content,
            None => rsx! {
                p { class: "modal-placeholder", "Nothing to show here." }
            },
        },
        Layout::Custom => props.content.unwrap_or_else(|| rsx! {}),
        Layout::Confirm { message } => rsx! {
            ConfirmLayout {
                id,
                message,
                variant: props.variant,
                confirm_text: props.confirm_text,
                cancel_text: props.cancel_text,
            }
        },
        Layout::AdminForm(admin) => rsx! {
            AdminFormLayout { id, admin }
        },
        Layout::PlanForm(plan) => rsx! {
            PlanFormLayout { id, plan }
        },
        Layout::CategoryForm(category) => rsx! {
            CategoryFormLayout { id, category }
        },
        Layout::AppForm(app) => rsx! {
            AppFormLayout { id, app }
        },
        Layout::BroadcastForm => rsx! {
            BroadcastFormLayout { id }
        },
        Layout::ClientDevices(client_uuid) => rsx! {
            ClientDevicesLayout { client_uuid }
        },
    }
}
