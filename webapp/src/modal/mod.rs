use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::debug;

use common::modal::{
    ConfirmOptions, LegacyModalConfig, ModalConfig, ModalEvent, ModalId, ModalStack, SubmitBridge,
    confirm_config, legacy_config,
};

mod body;
mod host;
mod keys;
mod layouts;
mod registry;

pub use host::ModalHost;

// global modal stack
//
// rather than having each page keep its own modal state, every page and layout pushes
// onto this one stack and the single ModalHost renders it
pub static MODAL_STACK: GlobalSignal<ModalStack<Element>> = Signal::global(ModalStack::new);

pub fn open_modal(config: ModalConfig<Element>) -> ModalId {
    MODAL_STACK.with_mut(|stack| stack.open(config))
}

// untyped configs from older links and saved views; never fails
pub fn open_legacy_modal(legacy: LegacyModalConfig) -> ModalId {
    open_modal(legacy_config(legacy, close_modal))
}

pub fn close_modal() {
    MODAL_STACK.with_mut(|stack| {
        stack.close();
    });
}

pub fn close_all_modals() {
    MODAL_STACK.with_mut(|stack| {
        stack.close_all();
    });
}

// confirmation dialogs close themselves once the caller's callback has run
pub fn open_confirm_modal(options: ConfirmOptions) -> ModalId {
    open_modal(confirm_config(options, close_modal))
}

// hand data from a layout back to whoever opened it
pub fn emit_data(id: &ModalId, value: serde_json::Value) {
    let callback = MODAL_STACK.peek().get(id).and_then(|entry| entry.on_data_received());

    match callback {
        Some(callback) => callback(value),
        None => debug!({ modal = %id }, "no data receiver for modal"),
    }
}

// BridgeHandle
//
// the submit bridge belongs to the ModalHost and lives exactly as long as it does;
// layouts find it through the context the host provides
#[derive(Clone, Default)]
pub struct BridgeHandle(Rc<RefCell<SubmitBridge>>);

impl BridgeHandle {
    // decide while holding the stack, act after letting go of it
    pub fn dispatch(&self, event: ModalEvent) {
        let reaction = {
            let bridge = self.0.borrow();
            MODAL_STACK.peek().react(&event, &bridge)
        };

        reaction.run(close_modal);
    }

    fn register(&self, id: ModalId, submit: impl Fn() + 'static) {
        self.0.borrow_mut().register(id, submit);
    }

    fn deregister(&self, id: &ModalId) {
        self.0.borrow_mut().deregister(id);
    }

    fn retain_live(&self) {
        self.0.borrow_mut().retain_live(&MODAL_STACK.peek());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = SubmitBridge::new();
    }
}

pub fn use_bridge() -> BridgeHandle {
    use_context::<BridgeHandle>()
}

// take over the generic confirm button for the modal this layout is mounted in
//
// the routine is registered once on mount and removed again on unmount
pub fn use_submit_handle(id: ModalId, submit: impl Fn() + 'static) {
    let bridge = use_bridge();

    let registered = use_hook({
        let bridge = bridge.clone();
        move || {
            bridge.register(id.clone(), submit);
            id
        }
    });

    use_drop(move || bridge.deregister(&registered));
}
