use crate::modal::{
    entry::{ModalEntry, ModalId},
    stack::ModalStack,
};

pub const BASE_Z_INDEX: usize = 1000;
pub const Z_INDEX_STEP: usize = 10;

// EntryView
//
// the presentation decisions for one stacked entry, worked out once so the host only
// has to turn them into markup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryView {
    pub id: ModalId,
    pub index: usize,
    pub z_index: usize,
    pub is_top: bool,
    pub backdrop_class: &'static str,
    pub dialog_class: String,
    pub show_header: bool,
    pub show_close: bool,
    pub show_footer: bool,
    pub show_confirm: bool,
    pub show_cancel: bool,
}

impl EntryView {
    fn of<C>(entry: &ModalEntry<C>, index: usize, is_top: bool) -> Self {
        let show_header = entry.title().is_some();
        let show_footer = is_top
            && !entry.layout().owns_footer()
            && (entry.show_confirm_button() || entry.show_cancel_button());

        let dialog_class = match is_top {
            true => format!("modal-dialog {}", entry.size().class()),
            false => format!("modal-dialog {} modal-dialog-inactive", entry.size().class()),
        };

        EntryView {
            id: entry.id().clone(),
            index,
            z_index: BASE_Z_INDEX + index * Z_INDEX_STEP,
            is_top,
            backdrop_class: match is_top {
                true => "modal-backdrop modal-backdrop-active",
                false => "modal-backdrop",
            },
            dialog_class,
            show_header,
            show_close: show_header && is_top,
            show_footer,
            show_confirm: show_footer && entry.show_confirm_button(),
            show_cancel: show_footer && entry.show_cancel_button(),
        }
    }
}

impl<C> ModalStack<C> {
    // bottom to top, every entry stays mounted
    pub fn views(&self) -> Vec<EntryView> {
        let top = self.len().saturating_sub(1);

        self.iter()
            .enumerate()
            .map(|(index, entry)| EntryView::of(entry, index, index == top))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::{Layout, LegacyModalConfig, ModalConfig, Size};

    #[test]
    fn only_the_top_entry_gets_controls() {
        let mut stack = ModalStack::<()>::new();
        stack.open(ModalConfig::default().title("bottom"));
        stack.open(ModalConfig::default().title("top"));

        let views = stack.views();
        assert_eq!(views.len(), 2);

        let (bottom, top) = (&views[0], &views[1]);
        assert!(!bottom.is_top && top.is_top);
        assert!(bottom.show_header && !bottom.show_close && !bottom.show_footer);
        assert!(top.show_header && top.show_close && top.show_footer);
        assert!(bottom.dialog_class.contains("modal-dialog-inactive"));
        assert!(!top.dialog_class.contains("modal-dialog-inactive"));
        assert_eq!(top.backdrop_class, "modal-backdrop modal-backdrop-active");
        assert!(top.z_index > bottom.z_index);
    }

    #[test]
    fn header_requires_a_title() {
        let mut stack = ModalStack::<()>::new();
        stack.open(ModalConfig::default());

        let view = &stack.views()[0];
        assert!(!view.show_header);
        assert!(!view.show_close);
    }

    #[test]
    fn footer_rules() {
        let mut stack = ModalStack::<()>::new();

        stack.open(ModalConfig::default().buttons(false, false));
        assert!(!stack.views()[0].show_footer);
        stack.close();

        stack.open(ModalConfig::default().buttons(false, true));
        let view = &stack.views()[0];
        assert!(view.show_footer && view.show_cancel && !view.show_confirm);
        stack.close();

        stack.open(ModalConfig::new(Layout::Custom));
        assert!(!stack.views()[0].show_footer);
        stack.close();

        stack.open(ModalConfig::new(Layout::Confirm {
            message: String::from("sure?"),
        }));
        assert!(!stack.views()[0].show_footer);
    }

    #[test]
    fn unknown_size_renders_large() {
        let mut stack = ModalStack::<()>::new();
        let legacy: LegacyModalConfig = serde_json::from_str(r#"{"size": "3xl"}"#).unwrap();
        stack.open(legacy.into());

        assert!(stack.views()[0].dialog_class.contains(Size::Lg.class()));
    }

    #[test]
    fn empty_stack_has_no_views() {
        assert!(ModalStack::<()>::new().views().is_empty());
    }
}
