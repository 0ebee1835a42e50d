use tracing::trace;

use crate::modal::{
    bridge::SubmitBridge,
    entry::{Callback, ModalId},
    stack::ModalStack,
};

// ModalEvent
//
// everything the user can do to a dialog.  apart from escape, which always goes to the
// top of the stack, each event names the entry it came from so that clicks on a
// background dialog (or on one that has already gone away) are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    Escape,
    Backdrop(ModalId),
    CloseButton(ModalId),
    // generic footer buttons
    Confirm(ModalId),
    Cancel(ModalId),
    // buttons drawn by the confirmation layout itself
    LayoutConfirm(ModalId),
    LayoutCancel(ModalId),
}

impl ModalEvent {
    pub fn target(&self) -> Option<&ModalId> {
        match self {
            ModalEvent::Escape => None,
            ModalEvent::Backdrop(id)
            | ModalEvent::CloseButton(id)
            | ModalEvent::Confirm(id)
            | ModalEvent::Cancel(id)
            | ModalEvent::LayoutConfirm(id)
            | ModalEvent::LayoutCancel(id) => Some(id),
        }
    }
}

// Reaction
//
// what the host should do about an event: run (at most) one callback, then maybe pop
// the stack.  deciding and doing are split so that the host can release its borrow of
// the stack before any user callback runs, since those are free to open or close
// dialogs themselves.
#[must_use]
#[derive(Clone, Default)]
pub struct Reaction {
    callback: Option<Callback>,
    closes: bool,
}

impl Reaction {
    fn ignore() -> Self {
        Reaction::default()
    }

    fn close_with(callback: Option<Callback>) -> Self {
        Reaction {
            callback,
            closes: true,
        }
    }

    fn call(callback: Option<Callback>) -> Self {
        Reaction {
            callback,
            closes: false,
        }
    }

    pub fn closes(&self) -> bool {
        self.closes
    }

    pub fn is_empty(&self) -> bool {
        self.callback.is_none() && !self.closes
    }

    pub fn run(self, pop: impl FnOnce()) {
        if let Some(callback) = self.callback {
            callback();
        }
        if self.closes {
            pop();
        }
    }
}

impl<C> ModalStack<C> {
    pub fn react(&self, event: &ModalEvent, bridge: &SubmitBridge) -> Reaction {
        let Some(top) = self.top() else {
            return Reaction::ignore();
        };

        if let Some(target) = event.target() {
            if target != top.id() {
                trace!({ modal = %target, top = %top.id() }, "ignoring event for background modal");
                return Reaction::ignore();
            }
        }

        match event {
            ModalEvent::Escape => match top.close_on_escape() {
                true => Reaction::close_with(top.on_close()),
                false => Reaction::ignore(),
            },
            ModalEvent::Backdrop(_) => match top.close_on_backdrop_click() {
                true => Reaction::close_with(top.on_close()),
                false => Reaction::ignore(),
            },
            ModalEvent::CloseButton(_) => Reaction::close_with(top.on_close()),

            // the generic footer is never drawn for these layouts, so a stray generic
            // button event must not double up with the layout's own buttons
            ModalEvent::Confirm(_) | ModalEvent::Cancel(_) if top.layout().owns_footer() => {
                Reaction::ignore()
            }
            ModalEvent::Confirm(id) => match bridge.handle(id) {
                Some(submit) => Reaction::call(Some(submit)),
                None => Reaction::close_with(top.on_confirm()),
            },
            ModalEvent::Cancel(_) => Reaction::close_with(top.on_close()),

            ModalEvent::LayoutConfirm(_) => Reaction::call(top.on_confirm()),
            ModalEvent::LayoutCancel(_) => Reaction::close_with(top.on_cancel()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use super::*;
    use crate::modal::{Layout, ModalConfig};

    type Shared = Rc<RefCell<ModalStack<()>>>;

    // mirrors what the host does: decide under a borrow, then act without one
    fn dispatch(stack: &Shared, bridge: &SubmitBridge, event: ModalEvent) {
        let reaction = stack.borrow().react(&event, bridge);
        reaction.run(|| {
            stack.borrow_mut().close();
        });
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let calls = Rc::new(Cell::new(0));
        let inner = calls.clone();
        (calls, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn escape_only_pops_the_top_entry() {
        let stack: Shared = Default::default();
        stack
            .borrow_mut()
            .open(ModalConfig::default().close_on_escape(false));
        stack
            .borrow_mut()
            .open(ModalConfig::default().close_on_escape(true));

        dispatch(&stack, &SubmitBridge::new(), ModalEvent::Escape);
        assert_eq!(stack.borrow().len(), 1);

        // the remaining entry refuses escape
        dispatch(&stack, &SubmitBridge::new(), ModalEvent::Escape);
        assert_eq!(stack.borrow().len(), 1);
    }

    #[test]
    fn escape_is_ignored_when_top_refuses_it() {
        let stack: Shared = Default::default();
        stack
            .borrow_mut()
            .open(ModalConfig::default().close_on_escape(true));
        stack
            .borrow_mut()
            .open(ModalConfig::default().close_on_escape(false));

        dispatch(&stack, &SubmitBridge::new(), ModalEvent::Escape);
        assert_eq!(stack.borrow().len(), 2);
    }

    #[test]
    fn escape_runs_on_close_before_popping() {
        let stack: Shared = Default::default();
        let seen_depth = Rc::new(Cell::new(0));

        let probe = stack.clone();
        let depth = seen_depth.clone();
        stack.borrow_mut().open(
            ModalConfig::default().on_close(move || depth.set(probe.borrow().len())),
        );

        dispatch(&stack, &SubmitBridge::new(), ModalEvent::Escape);
        assert_eq!(seen_depth.get(), 1);
        assert!(stack.borrow().is_empty());
    }

    #[test]
    fn escape_on_empty_stack_does_nothing() {
        let stack: Shared = Default::default();
        dispatch(&stack, &SubmitBridge::new(), ModalEvent::Escape);
        assert!(stack.borrow().is_empty());
    }

    #[test]
    fn backdrop_respects_flag_and_ignores_background_entries() {
        let stack: Shared = Default::default();
        let bottom = stack.borrow_mut().open(ModalConfig::default());
        let top = stack
            .borrow_mut()
            .open(ModalConfig::default().close_on_backdrop_click(false));

        dispatch(&stack, &SubmitBridge::new(), ModalEvent::Backdrop(bottom));
        dispatch(&stack, &SubmitBridge::new(), ModalEvent::Backdrop(top.clone()));
        assert_eq!(stack.borrow().len(), 2);

        // the close button works regardless of the flags
        dispatch(&stack, &SubmitBridge::new(), ModalEvent::CloseButton(top));
        assert_eq!(stack.borrow().len(), 1);
    }

    #[test]
    fn confirm_prefers_the_submit_bridge() {
        let stack: Shared = Default::default();
        let (confirms, on_confirm) = counter();
        let (submits, submit) = counter();

        let id = stack
            .borrow_mut()
            .open(ModalConfig::new(Layout::PlanForm(None)).on_confirm(on_confirm));

        let mut bridge = SubmitBridge::new();
        bridge.register(id.clone(), submit);

        dispatch(&stack, &bridge, ModalEvent::Confirm(id));

        assert_eq!(submits.get(), 1);
        assert_eq!(confirms.get(), 0);
        // closing is up to the layout
        assert_eq!(stack.borrow().len(), 1);
    }

    #[test]
    fn confirm_without_bridge_calls_on_confirm_once() {
        let stack: Shared = Default::default();
        let (confirms, on_confirm) = counter();

        let id = stack
            .borrow_mut()
            .open(ModalConfig::default().on_confirm(on_confirm));

        dispatch(&stack, &SubmitBridge::new(), ModalEvent::Confirm(id));

        assert_eq!(confirms.get(), 1);
        assert!(stack.borrow().is_empty());
    }

    #[test]
    fn stale_bridge_handles_are_never_invoked() {
        let stack: Shared = Default::default();
        let (submits, submit) = counter();

        let stale = stack.borrow_mut().open(ModalConfig::default());
        let mut bridge = SubmitBridge::new();
        bridge.register(stale.clone(), submit);
        stack.borrow_mut().close();

        let (confirms, on_confirm) = counter();
        stack
            .borrow_mut()
            .open(ModalConfig::default().on_confirm(on_confirm));

        dispatch(&stack, &bridge, ModalEvent::Confirm(stale));

        assert_eq!(submits.get(), 0);
        assert_eq!(confirms.get(), 0);
        assert_eq!(stack.borrow().len(), 1);
    }

    #[test]
    fn generic_cancel_runs_on_close_not_on_cancel() {
        let stack: Shared = Default::default();
        let (closes, on_close) = counter();
        let (cancels, on_cancel) = counter();

        let id = stack.borrow_mut().open(
            ModalConfig::default()
                .on_close(on_close)
                .on_cancel(on_cancel),
        );

        dispatch(&stack, &SubmitBridge::new(), ModalEvent::Cancel(id));

        assert_eq!(closes.get(), 1);
        assert_eq!(cancels.get(), 0);
        assert!(stack.borrow().is_empty());
    }

    #[test]
    fn generic_buttons_are_ignored_for_layouts_owning_their_footer() {
        let stack: Shared = Default::default();
        let (confirms, on_confirm) = counter();

        let id = stack.borrow_mut().open(
            ModalConfig::new(Layout::Confirm {
                message: String::from("sure?"),
            })
            .on_confirm(on_confirm),
        );

        dispatch(&stack, &SubmitBridge::new(), ModalEvent::Confirm(id.clone()));
        dispatch(&stack, &SubmitBridge::new(), ModalEvent::Cancel(id));

        assert_eq!(confirms.get(), 0);
        assert_eq!(stack.borrow().len(), 1);
    }

    #[test]
    fn layout_cancel_runs_on_cancel_and_pops() {
        let stack: Shared = Default::default();
        let (closes, on_close) = counter();
        let (cancels, on_cancel) = counter();

        let id = stack.borrow_mut().open(
            ModalConfig::new(Layout::Custom)
                .on_close(on_close)
                .on_cancel(on_cancel),
        );

        dispatch(&stack, &SubmitBridge::new(), ModalEvent::LayoutCancel(id));

        assert_eq!(cancels.get(), 1);
        assert_eq!(closes.get(), 0);
        assert!(stack.borrow().is_empty());
    }

    #[test]
    fn reaction_reports_what_it_will_do() {
        let mut stack = ModalStack::<()>::new();
        let id = stack.open(ModalConfig::default().close_on_escape(false));

        assert!(stack.react(&ModalEvent::Escape, &SubmitBridge::new()).is_empty());
        assert!(stack
            .react(&ModalEvent::CloseButton(id), &SubmitBridge::new())
            .closes());
    }
}
