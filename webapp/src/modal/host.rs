use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use futures::StreamExt;
use tracing::trace;

use crate::modal::{
    BridgeHandle, MODAL_STACK, body::DocumentBody, keys::EscapeListener, registry::LayoutBody,
};
use common::modal::{EntryView, Layout, ModalEvent, ScrollLock, Variant};

// Frame
//
// everything one stacked dialog needs to render, copied out of the stack so the frame
// component can diff it like any other props
#[derive(Clone, PartialEq)]
struct Frame {
    view: EntryView,
    title: Option<String>,
    layout: Layout,
    content: Option<Element>,
    variant: Variant,
    confirm_text: String,
    cancel_text: String,
}

// ModalHost
//
// renders the whole modal stack, bottom to top.  included once at the root of the app.
//
// background dialogs stay mounted (and keep their state) underneath the top one.  the
// host also owns the submit bridge, the page scroll lock, and the escape key binding,
// which is replaced whenever a different entry becomes the top.
#[component]
pub fn ModalHost() -> Element {
    let bridge = use_context_provider(BridgeHandle::default);
    let scroll_lock = use_hook(|| Rc::new(RefCell::new(ScrollLock::new())));
    let escape_listener = use_hook(|| Rc::new(RefCell::new(None::<EscapeListener>)));

    let escapes = use_coroutine({
        let bridge = bridge.clone();
        move |mut rx: UnboundedReceiver<()>| {
            let bridge = bridge.clone();
            async move {
                while rx.next().await.is_some() {
                    bridge.dispatch(ModalEvent::Escape);
                }
            }
        }
    });

    use_effect({
        let bridge = bridge.clone();
        let scroll_lock = scroll_lock.clone();
        move || {
            let open = MODAL_STACK.read().len();

            if let Some(mut body) = DocumentBody::current() {
                scroll_lock.borrow_mut().sync(open, &mut body);
            }
            bridge.retain_live();
        }
    });

    use_effect({
        let escape_listener = escape_listener.clone();
        move || {
            let top = MODAL_STACK.read().top().map(|entry| entry.id().clone());

            let mut slot = escape_listener.borrow_mut();
            slot.take();
            if let Some(top) = top {
                trace!({ modal = %top }, "escape key bound");
                *slot = EscapeListener::install(escapes.tx());
            }
        }
    });

    use_drop({
        let bridge = bridge.clone();
        move || {
            escape_listener.borrow_mut().take();
            if let Some(mut body) = DocumentBody::current() {
                scroll_lock.borrow_mut().release(&mut body);
            }
            bridge.clear();
        }
    });

    let frames: Vec<(String, Frame)> = {
        let stack = MODAL_STACK.read();
        stack
            .views()
            .into_iter()
            .zip(stack.iter())
            .map(|(view, entry)| {
                let key = view.id.to_string();
                let frame = Frame {
                    view,
                    title: entry.title().map(String::from),
                    layout: entry.layout().clone(),
                    content: entry.content().cloned(),
                    variant: entry.variant(),
                    confirm_text: entry.confirm_text().to_owned(),
                    cancel_text: entry.cancel_text().to_owned(),
                };
                (key, frame)
            })
            .collect()
    };

    rsx! {
        div { class: "modal-host",
            for (key, frame) in frames {
                ModalFrame { key: "{key}", frame }
            }
        }
    }
}

fn on_click(bridge: &BridgeHandle, event: ModalEvent) -> impl FnMut(MouseEvent) + 'static {
    let bridge = bridge.clone();
    move |evt: MouseEvent| {
        evt.stop_propagation();
        bridge.dispatch(event.clone());
    }
}

#[derive(Clone, PartialEq, Props)]
struct ModalFrameProps {
    frame: Frame,
}

#[component]
fn ModalFrame(props: ModalFrameProps) -> Element {
    let bridge = use_context::<BridgeHandle>();
    let frame = props.frame;
    let view = frame.view;
    let id = view.id.clone();

    rsx! {
        div {
            class: "modal-layer {view.backdrop_class}",
            style: "z-index: {view.z_index};",
            // a backdrop click on a background layer is ignored by the stack
            onclick: on_click(&bridge, ModalEvent::Backdrop(id.clone())),

            div {
                class: "{view.dialog_class}",
                role: "dialog",
                aria_modal: "{view.is_top}",
                onclick: move |evt| evt.stop_propagation(),

                if let Some(title) = &frame.title {
                    div { class: "modal-header",
                        h2 { class: "modal-title", "{title}" }
                        if view.show_close {
                            button {
                                class: "btn-close",
                                aria_label: "Close",
                                onclick: on_click(&bridge, ModalEvent::CloseButton(id.clone())),
                                "×"
                            }
                        }
                    }
                }

                div { class: "modal-body",
                    LayoutBody {
                        id: id.clone(),
                        layout: frame.layout,
                        content: frame.content,
                        variant: frame.variant,
                        confirm_text: frame.confirm_text.clone(),
                        cancel_text: frame.cancel_text.clone(),
                    }
                }

                if view.show_footer {
                    div { class: "modal-footer",
                        if view.show_cancel {
                            button {
                                class: "btn btn-secondary",
                                onclick: on_click(&bridge, ModalEvent::Cancel(id.clone())),
                                "{frame.cancel_text}"
                            }
                        }
                        if view.show_confirm {
                            button {
                                class: "btn btn-primary",
                                onclick: on_click(&bridge, ModalEvent::Confirm(id.clone())),
                                "{frame.confirm_text}"
                            }
                        }
                    }
                }
            }
        }
    }
}
