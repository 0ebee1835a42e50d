use dioxus::prelude::*;

use crate::modal::use_bridge;
use common::modal::{ModalEvent, ModalId, Variant};

#[derive(Clone, PartialEq, Props)]
pub struct ConfirmLayoutProps {
    id: ModalId,
    message: String,
    variant: Variant,
    confirm_text: String,
    cancel_text: String,
}

// draws its own buttons, so the host never adds the generic footer to it
#[component]
pub fn ConfirmLayout(props: ConfirmLayoutProps) -> Element {
    let bridge = use_bridge();
    let variant = props.variant;

    let (icon, confirm_class) = match variant {
        Variant::Danger => ("!", "btn btn-danger"),
        Variant::Warning => ("!", "btn btn-warning"),
        Variant::Info => ("i", "btn btn-primary"),
    };

    let cancel = {
        let bridge = bridge.clone();
        let id = props.id.clone();
        move |_| bridge.dispatch(ModalEvent::LayoutCancel(id.clone()))
    };
    let confirm = {
        let id = props.id.clone();
        move |_| bridge.dispatch(ModalEvent::LayoutConfirm(id.clone()))
    };

    rsx! {
        div { class: "confirmation-content",
            div { class: "confirmation-icon {variant.class()}", "{icon}" }
            p { class: "confirmation-message", "{props.message}" }
        }
        div { class: "confirmation-buttons",
            button { class: "btn btn-secondary", onclick: cancel, "{props.cancel_text}" }
            button { class: confirm_class, onclick: confirm, "{props.confirm_text}" }
        }
    }
}
