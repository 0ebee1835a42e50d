use std::rc::Rc;

use crate::modal::{
    entry::{Callback, LegacyModalConfig, ModalConfig, Size, Variant},
    layout::Layout,
};

// ConfirmOptions
//
// the short form for "are you sure?" dialogs
#[derive(Clone, Default)]
pub struct ConfirmOptions {
    pub title: String,
    pub message: String,
    pub on_confirm: Option<Callback>,
    pub on_cancel: Option<Callback>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub variant: Variant,
}

impl ConfirmOptions {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        ConfirmOptions {
            title: title.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn on_confirm(mut self, f: impl Fn() + 'static) -> Self {
        self.on_confirm = Some(Rc::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl Fn() + 'static) -> Self {
        self.on_cancel = Some(Rc::new(f));
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

// build the config for a confirmation dialog
//
// unlike form layouts, a confirmation closes itself: its confirm button runs the
// caller's callback and then pops the stack through pop, whatever the callback did
pub fn confirm_config<C>(options: ConfirmOptions, pop: impl Fn() + 'static) -> ModalConfig<C> {
    let user_confirm = options.on_confirm;

    let mut config = ModalConfig::new(Layout::Confirm {
        message: options.message,
    })
    .title(options.title)
    .size(Size::Sm)
    .variant(options.variant)
    .on_confirm(move || {
        if let Some(callback) = &user_confirm {
            callback();
        }
        pop();
    });

    config.on_cancel = options.on_cancel;
    config.confirm_text = options.confirm_text;
    config.cancel_text = options.cancel_text;
    config
}

// convert an untyped config for opening
//
// an untyped config has nowhere to carry callbacks, so a confirmation opened through
// one just closes itself when confirmed
pub fn legacy_config<C>(legacy: LegacyModalConfig, pop: impl Fn() + 'static) -> ModalConfig<C> {
    let mut config: ModalConfig<C> = legacy.into();

    if matches!(config.layout, Layout::Confirm { .. }) {
        config.on_confirm = Some(Rc::new(pop));
    }
    config
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::modal::{ModalEvent, ModalStack, SubmitBridge};

    type Shared = Rc<RefCell<ModalStack<()>>>;

    fn open_confirm(stack: &Shared, options: ConfirmOptions) -> crate::modal::ModalId {
        let popper = stack.clone();
        let config = confirm_config(options, move || {
            popper.borrow_mut().close();
        });
        stack.borrow_mut().open(config)
    }

    fn press(stack: &Shared, event: ModalEvent) {
        let reaction = stack.borrow().react(&event, &SubmitBridge::new());
        reaction.run(|| {
            stack.borrow_mut().close();
        });
    }

    #[test]
    fn confirm_calls_back_once_and_pops_itself() {
        let stack: Shared = Default::default();
        stack.borrow_mut().open(ModalConfig::default().title("underneath"));

        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let id = open_confirm(
            &stack,
            ConfirmOptions::new("Delete plan", "This cannot be undone")
                .variant(Variant::Danger)
                .on_confirm(move || counter.set(counter.get() + 1)),
        );
        assert_eq!(stack.borrow().len(), 2);

        press(&stack, ModalEvent::LayoutConfirm(id));

        assert_eq!(calls.get(), 1);
        assert_eq!(stack.borrow().len(), 1);
        assert_eq!(stack.borrow().top().unwrap().title(), Some("underneath"));
    }

    #[test]
    fn confirm_without_callback_still_closes() {
        let stack: Shared = Default::default();
        let id = open_confirm(&stack, ConfirmOptions::new("Sure?", ""));

        press(&stack, ModalEvent::LayoutConfirm(id));
        assert!(stack.borrow().is_empty());
    }

    #[test]
    fn cancel_runs_on_cancel_and_closes() {
        let stack: Shared = Default::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();

        let id = open_confirm(
            &stack,
            ConfirmOptions::new("Sure?", "").on_cancel(move || counter.set(counter.get() + 1)),
        );

        press(&stack, ModalEvent::LayoutCancel(id));
        assert_eq!(calls.get(), 1);
        assert!(stack.borrow().is_empty());
    }

    #[test]
    fn options_are_carried_into_the_entry() {
        let stack: Shared = Default::default();
        open_confirm(
            &stack,
            ConfirmOptions::new("Remove device", "The device will be unenrolled")
                .confirm_text("Remove")
                .variant(Variant::Warning),
        );

        let stack = stack.borrow();
        let entry = stack.top().unwrap();
        assert_eq!(entry.title(), Some("Remove device"));
        assert_eq!(entry.confirm_text(), "Remove");
        assert_eq!(entry.cancel_text(), "Cancel");
        assert_eq!(entry.variant(), Variant::Warning);
        assert_eq!(
            entry.layout(),
            &Layout::Confirm {
                message: String::from("The device will be unenrolled")
            }
        );
    }

    #[test]
    fn legacy_confirm_closes_itself() {
        let stack: Shared = Default::default();
        let legacy: LegacyModalConfig =
            serde_json::from_str(r#"{"layout": "confirmAction", "title": "Sure?"}"#).unwrap();

        let popper = stack.clone();
        let id = stack.borrow_mut().open(legacy_config(legacy, move || {
            popper.borrow_mut().close();
        }));

        press(&stack, ModalEvent::LayoutConfirm(id));
        assert!(stack.borrow().is_empty());
    }

    #[test]
    fn legacy_passthrough_gets_no_confirm_callback() {
        let legacy = LegacyModalConfig {
            layout: Some(String::from("default")),
            ..Default::default()
        };

        let config: ModalConfig<()> = legacy_config(legacy, || {});
        assert!(config.on_confirm.is_none());
    }
}
