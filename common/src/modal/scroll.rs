use tracing::debug;

// the page element whose overflow gets pinned while any dialog is open
pub trait BodyOverflow {
    fn overflow(&self) -> String;

    fn set_overflow(&mut self, value: &str);
}

// ScrollLock
//
// locks page scrolling on the first open dialog and puts back whatever overflow the
// page had before once the last one closes.  the saved value is restored verbatim
// rather than cleared, because a page may have had its own overflow set.
#[derive(Debug, Default)]
pub struct ScrollLock {
    saved: Option<String>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.saved.is_some()
    }

    pub fn sync(&mut self, open_modals: usize, body: &mut impl BodyOverflow) {
        match (open_modals > 0, self.is_locked()) {
            (true, false) => {
                let previous = body.overflow();
                debug!({ previous = previous.as_str() }, "locking page scroll");
                body.set_overflow("hidden");
                self.saved = Some(previous);
            }
            (false, true) => self.release(body),
            _ => {}
        }
    }

    pub fn release(&mut self, body: &mut impl BodyOverflow) {
        if let Some(previous) = self.saved.take() {
            debug!({ restored = previous.as_str() }, "releasing page scroll");
            body.set_overflow(&previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeBody {
        overflow: String,
        writes: usize,
    }

    impl BodyOverflow for FakeBody {
        fn overflow(&self) -> String {
            self.overflow.clone()
        }

        fn set_overflow(&mut self, value: &str) {
            self.overflow = value.to_owned();
            self.writes += 1;
        }
    }

    #[test]
    fn lock_follows_stack_length() {
        let mut body = FakeBody::default();
        let mut lock = ScrollLock::new();

        for len in [0, 1, 2, 3, 2, 1, 0, 0, 1, 0] {
            lock.sync(len, &mut body);
            assert_eq!(lock.is_locked(), len > 0, "len {len}");
            assert_eq!(body.overflow == "hidden", len > 0, "len {len}");
        }
    }

    #[test]
    fn previous_overflow_is_restored_not_reset() {
        let mut body = FakeBody {
            overflow: String::from("scroll"),
            writes: 0,
        };
        let mut lock = ScrollLock::new();

        lock.sync(1, &mut body);
        lock.sync(2, &mut body);
        assert_eq!(body.overflow, "hidden");
        // nested opens don't write again
        assert_eq!(body.writes, 1);

        lock.sync(0, &mut body);
        assert_eq!(body.overflow, "scroll");
    }

    #[test]
    fn release_without_lock_leaves_body_alone() {
        let mut body = FakeBody {
            overflow: String::from("auto"),
            writes: 0,
        };

        ScrollLock::new().release(&mut body);
        assert_eq!(body.writes, 0);
        assert_eq!(body.overflow, "auto");
    }
}
