use std::time::Duration;

use leptos::prelude::*;

use crate::interaction::{effect::now_ms, ActiveEffect, CancelHandle};

impl CancelHandle for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// A component-owned slot for one pending timeout.
pub type TimerSlot = StoredValue<ActiveEffect<TimeoutHandle>>;

/// Creates a slot whose pending timeout is cancelled when the owning
/// component is torn down.
pub fn timer_slot() -> TimerSlot {
    let slot = StoredValue::new(ActiveEffect::default());
    on_cleanup(move || {
        slot.try_update_value(|s| s.cancel());
    });
    slot
}

/// Runs `f` after `delay_ms`, replacing whatever the slot was waiting on.
pub fn schedule(slot: TimerSlot, delay_ms: u64, f: impl FnOnce() + 'static) {
    let fire = move || {
        slot.try_update_value(ActiveEffect::finish);
        f();
    };
    match set_timeout_with_handle(fire, Duration::from_millis(delay_ms)) {
        Ok(handle) => {
            let superseded = slot.try_update_value(|s| s.start(handle, now_ms(), delay_ms as f64));
            if let Some(Some(left)) = superseded {
                log::debug!("replaced a timeout {left:.0}ms before it was due");
            }
        }
        Err(e) => log::warn!("couldn't schedule timeout: {e:?}"),
    }
}
