use std::mem;

/// A scheduled piece of work (timeout, interval, animation frame) that can be
/// released before it fires.
pub trait CancelHandle {
    fn cancel(self);
}

/// Slot for a single time-boxed effect owned by one component.
///
/// Starting a new effect cancels the one still running, so at most one
/// pending callback exists per slot. Owners call [`ActiveEffect::cancel`] on
/// teardown.
#[derive(Debug, Default)]
pub enum ActiveEffect<H> {
    #[default]
    Idle,
    Running { handle: H, deadline_ms: f64 },
}

impl<H: CancelHandle> ActiveEffect<H> {
    /// Starts an effect due `delay_ms` after `now_ms`, cancelling the running
    /// one. Returns how long the superseded effect still had to go.
    pub fn start(&mut self, handle: H, now_ms: f64, delay_ms: f64) -> Option<f64> {
        let superseded = match self {
            Self::Running { deadline_ms, .. } => Some((*deadline_ms - now_ms).max(0.0)),
            Self::Idle => None,
        };
        self.cancel();
        *self = Self::Running {
            handle,
            deadline_ms: now_ms + delay_ms,
        };
        superseded
    }

    /// Releases the running effect. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        match mem::take(self) {
            Self::Running { handle, .. } => {
                handle.cancel();
                true
            }
            Self::Idle => false,
        }
    }

    /// The effect fired on its own; drop the handle without cancelling it.
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

/// Milliseconds since the Unix epoch, usable on the server and in the browser.
pub fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records which handles were cancelled.
    #[derive(Debug, Clone)]
    pub(crate) struct TestHandle {
        pub id: u32,
        pub log: Rc<RefCell<Vec<u32>>>,
    }

    impl CancelHandle for TestHandle {
        fn cancel(self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    pub(crate) fn handle(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> TestHandle {
        TestHandle {
            id,
            log: log.clone(),
        }
    }

    #[test]
    fn test_start_supersedes_running_effect() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut effect = ActiveEffect::default();
        assert_eq!(effect.start(handle(1, &log), 0.0, 100.0), None);
        assert_eq!(effect.start(handle(2, &log), 40.0, 250.0), Some(60.0));

        assert_eq!(*log.borrow(), vec![1]);
        assert!(effect.is_running());
    }

    #[test]
    fn test_overdue_effect_reports_nothing_left() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut effect = ActiveEffect::default();
        effect.start(handle(1, &log), 1000.0, 300.0);
        // the first timeout is late, so the replacement sees zero remaining
        assert_eq!(effect.start(handle(2, &log), 1500.0, 300.0), Some(0.0));
        assert_eq!(*log.borrow(), vec![1]);
    }

    #[test]
    fn test_cancel_and_finish() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut effect = ActiveEffect::default();
        assert!(!effect.cancel());

        effect.start(handle(7, &log), 0.0, 10.0);
        assert!(effect.is_running());
        assert!(effect.cancel());
        assert!(!effect.is_running());
        assert_eq!(*log.borrow(), vec![7]);

        effect.start(handle(8, &log), 0.0, 10.0);
        effect.finish();
        assert!(!effect.cancel());
        // finished effects are never cancelled
        assert_eq!(*log.borrow(), vec![7]);
    }
}
