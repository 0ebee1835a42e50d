use tracing::debug;

use crate::modal::entry::{ModalConfig, ModalDefaults, ModalEntry, ModalId};

// ModalStack
//
// the only owner of the open dialogs.  entries can be appended with open(), and removed
// either one at a time from the top with close() or all at once with close_all(); there
// is deliberately no way to reach into the middle of the stack.
pub struct ModalStack<C> {
    entries: Vec<ModalEntry<C>>,
    defaults: ModalDefaults,
}

impl<C> Default for ModalStack<C> {
    fn default() -> Self {
        ModalStack {
            entries: Vec::new(),
            defaults: ModalDefaults::default(),
        }
    }
}

impl<C> ModalStack<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: ModalDefaults) -> Self {
        ModalStack {
            entries: Vec::new(),
            defaults,
        }
    }

    // only affects entries opened afterwards
    pub fn set_defaults(&mut self, defaults: ModalDefaults) {
        self.defaults = defaults;
    }

    pub fn defaults(&self) -> &ModalDefaults {
        &self.defaults
    }

    pub fn open(&mut self, config: ModalConfig<C>) -> ModalId {
        let mut id = ModalId::generate();
        while self.get(&id).is_some() {
            id = ModalId::generate();
        }

        let entry = config.resolve(id.clone(), &self.defaults);

        debug!({ modal = %id, layout = entry.layout().key(), depth = self.entries.len() + 1 }, "modal opened");

        self.entries.push(entry);
        id
    }

    // pops the top entry, and does nothing on an empty stack
    pub fn close(&mut self) -> Option<ModalEntry<C>> {
        let entry = self.entries.pop()?;

        debug!({ modal = %entry.id(), depth = self.entries.len() }, "modal closed");

        Some(entry)
    }

    pub fn close_all(&mut self) -> Vec<ModalEntry<C>> {
        let entries = std::mem::take(&mut self.entries);

        if !entries.is_empty() {
            debug!({ closed = entries.len() }, "all modals closed");
        }

        entries
    }

    pub fn top(&self) -> Option<&ModalEntry<C>> {
        self.entries.last()
    }

    pub fn get(&self, id: &ModalId) -> Option<&ModalEntry<C>> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn is_top(&self, id: &ModalId) -> bool {
        self.top().is_some_and(|entry| entry.id() == id)
    }

    pub fn contains(&self, id: &ModalId) -> bool {
        self.get(id).is_some()
    }

    // bottom to top
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ModalEntry<C>> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::modal::{Layout, Size};

    fn titled(title: &str) -> ModalConfig<()> {
        ModalConfig::new(Layout::Passthrough).title(title)
    }

    #[test]
    fn close_on_empty_stack_is_a_noop() {
        let mut stack = ModalStack::<()>::new();

        assert!(stack.close().is_none());
        assert!(stack.close().is_none());
        assert_eq!(stack.len(), 0);
        assert!(stack.top().is_none());
    }

    #[test]
    fn stack_is_lifo() {
        let mut stack = ModalStack::new();

        let first = stack.open(titled("first"));
        let second = stack.open(titled("second"));
        assert!(stack.is_top(&second));

        let popped = stack.close().unwrap();
        assert_eq!(popped.id(), &second);
        assert!(stack.is_top(&first));

        let third = stack.open(titled("third"));
        assert_eq!(stack.top().unwrap().title(), Some("third"));
        assert!(stack.is_top(&third));

        let order: Vec<_> = stack.iter().map(|entry| entry.id().clone()).collect();
        assert_eq!(order, vec![first, third]);
    }

    #[test]
    fn length_tracks_interleaved_operations() {
        let mut stack = ModalStack::new();
        let mut expected: Vec<ModalId> = Vec::new();

        // a fixed but irregular pattern of opens and closes, including closes on empty
        let pattern = "ooxoxxxoooxoxxxxooxo";
        for (i, op) in pattern.chars().enumerate() {
            match op {
                'o' => expected.push(stack.open(titled(&format!("entry {i}")))),
                _ => {
                    let popped = stack.close().map(|entry| entry.id().clone());
                    assert_eq!(popped, expected.pop());
                }
            }

            assert_eq!(stack.len(), expected.len());
            assert_eq!(stack.top().map(|entry| entry.id()), expected.last());
        }

        stack.close_all();
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn close_all_drains_bottom_to_top() {
        let mut stack = ModalStack::new();
        let ids: Vec<_> = (0..4).map(|i| stack.open(titled(&i.to_string()))).collect();

        let closed: Vec<_> = stack
            .close_all()
            .iter()
            .map(|entry| entry.id().clone())
            .collect();

        assert_eq!(closed, ids);
        assert!(stack.close_all().is_empty());
    }

    #[test]
    fn ids_are_unique_across_open_entries() {
        let mut stack = ModalStack::<()>::new();
        let ids: HashSet<_> = (0..500)
            .map(|_| stack.open(ModalConfig::default()))
            .collect();

        assert_eq!(ids.len(), 500);
        assert_eq!(stack.len(), 500);
    }

    #[test]
    fn defaults_apply_to_later_entries_only() {
        let mut stack = ModalStack::<()>::new();
        let before = stack.open(ModalConfig::default());

        stack.set_defaults(ModalDefaults {
            size: Size::Sm,
            ..Default::default()
        });
        let after = stack.open(ModalConfig::default());

        assert_eq!(stack.get(&before).unwrap().size(), Size::Lg);
        assert_eq!(stack.get(&after).unwrap().size(), Size::Sm);
    }
}
