use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::modal::{entry::ModalId, stack::ModalStack};

pub type SubmitFn = Rc<dyn Fn()>;

// SubmitBridge
//
// lets a layout take over the generic confirm button.  a layout that owns a form
// registers its submit routine under its entry id when it mounts and deregisters when it
// unmounts; the host asks the bridge first when confirm is pressed.
//
// a registered submit routine is responsible for closing its own modal, since only the
// layout knows whether validation and the save went through.
#[derive(Clone, Default)]
pub struct SubmitBridge {
    handles: HashMap<ModalId, SubmitFn>,
}

impl SubmitBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: ModalId, submit: impl Fn() + 'static) {
        debug!({ modal = %id }, "submit handle registered");
        self.handles.insert(id, Rc::new(submit));
    }

    pub fn deregister(&mut self, id: &ModalId) -> bool {
        let removed = self.handles.remove(id).is_some();
        if removed {
            debug!({ modal = %id }, "submit handle removed");
        }
        removed
    }

    pub fn handle(&self, id: &ModalId) -> Option<SubmitFn> {
        self.handles.get(id).cloned()
    }

    // drop every handle whose entry has left the stack, so a stale routine can never run
    pub fn retain_live<C>(&mut self, stack: &ModalStack<C>) {
        self.handles.retain(|id, _| stack.contains(id));
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::modal::ModalConfig;

    #[test]
    fn registered_handle_is_returned_until_deregistered() {
        let calls = Rc::new(Cell::new(0));
        let mut bridge = SubmitBridge::new();
        let id = ModalId::generate();

        let counter = calls.clone();
        bridge.register(id.clone(), move || counter.set(counter.get() + 1));

        bridge.handle(&id).unwrap()();
        assert_eq!(calls.get(), 1);

        assert!(bridge.deregister(&id));
        assert!(bridge.handle(&id).is_none());
        assert!(!bridge.deregister(&id));
    }

    #[test]
    fn retain_live_prunes_closed_entries() {
        let mut stack = ModalStack::<()>::new();
        let bottom = stack.open(ModalConfig::default());
        let top = stack.open(ModalConfig::default());

        let mut bridge = SubmitBridge::new();
        bridge.register(bottom.clone(), || {});
        bridge.register(top.clone(), || {});

        stack.close();
        bridge.retain_live(&stack);

        assert_eq!(bridge.len(), 1);
        assert!(bridge.handle(&top).is_none());
        assert!(bridge.handle(&bottom).is_some());

        stack.close_all();
        bridge.retain_live(&stack);
        assert!(bridge.is_empty());
    }
}
