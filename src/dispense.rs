//! Rolling "dispensing" window.
//!
//! Every dispense signal pushes the deadline out; the window closes once
//! more than `hold_ms` has passed since the last signal. Times are plain
//! milliseconds since boot so the logic stays host-testable.

use crate::config::DISPENSE_HOLD_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DispenseWindow {
    active: bool,
    last_signal_ms: u64,
    hold_ms: u64,
}

impl DispenseWindow {
    pub const fn new() -> Self {
        Self::with_hold(DISPENSE_HOLD_MS)
    }

    pub const fn with_hold(hold_ms: u64) -> Self {
        Self {
            active: false,
            last_signal_ms: 0,
            hold_ms,
        }
    }

    /// Record a dispense signal at `now_ms`.
    ///
    /// Returns `true` when this signal opened the window.
    pub fn signal(&mut self, now_ms: u64) -> bool {
        self.last_signal_ms = now_ms;
        let opened = !self.active;
        self.active = true;
        opened
    }

    /// Close the window if it has outlived the hold time.
    ///
    /// Returns `true` on the call that closes it.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        if self.active && now_ms.saturating_sub(self.last_signal_ms) > self.hold_ms {
            self.active = false;
            return true;
        }
        false
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn last_signal_ms(&self) -> u64 {
        self.last_signal_ms
    }
}

impl Default for DispenseWindow {
    fn default() -> Self {
        Self::new()
    }
}
