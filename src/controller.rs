//! Per-tick controller state machine.
//!
//! [`Controller::tick`] turns one input snapshot into the datagrams to send
//! and the screen regions to redraw. It performs no I/O itself; the
//! firmware loop hands the result to [`crate::link::dispatch`] and
//! [`crate::ui::dashboard::Dashboard::render`].
//!
//! Per tick, in order:
//! 1. Direction token, always (idle sends `stop`).
//! 2. Dispense token while key C is held; the overlay opens on the first
//!    signal and closes 500 ms after the last one.
//! 3. `arm` on a key B press.
//! 4. `fast` / `slow` on a joystick press.

use heapless::Vec;

use crate::command::Direction;
use crate::config::MAX_DATAGRAMS_PER_TICK;
use crate::dispense::DispenseWindow;
use crate::input::InputSnapshot;
use crate::latch::EdgeLatch;
use crate::link::{Datagram, Token};

/// Toggle state persisted across ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Toggles {
    /// Last commanded arm position. The vehicle tracks its own copy.
    pub arm_raised: bool,
    /// Fast drive profile (boot default) vs slow.
    pub fast_mode: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            arm_raised: false,
            fast_mode: true,
        }
    }
}

/// Dispense overlay transition for this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Overlay {
    Show,
    Hide,
}

/// Screen regions a tick wants redrawn.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Redraw {
    /// Direction for the centre indicator. `None` while the dispense
    /// overlay owns that zone.
    pub direction: Option<Direction>,
    pub overlay: Option<Overlay>,
    /// Arm status region.
    pub arm: bool,
    /// Speed status region.
    pub speed: bool,
}

/// Everything one tick produced.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TickOutput {
    /// In send order. The first entry is always the direction token.
    pub datagrams: Vec<Datagram, MAX_DATAGRAMS_PER_TICK>,
    pub redraw: Redraw,
}

impl TickOutput {
    fn push(&mut self, token: Token) {
        // Capacity matches the most a tick can emit.
        let pushed = self.datagrams.push(Datagram::from(token)).is_ok();
        debug_assert!(pushed, "tick output full");
    }

    /// Tokens in send order.
    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.datagrams.iter().map(|d| d.token)
    }
}

/// All controller state. Owned by the tick loop; nothing global.
#[derive(Clone, Debug, Default)]
pub struct Controller {
    toggles: Toggles,
    arm_latch: EdgeLatch,
    speed_latch: EdgeLatch,
    dispense: DispenseWindow,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with a non-default dispense hold time.
    pub fn with_dispense_hold(hold_ms: u64) -> Self {
        Self {
            dispense: DispenseWindow::with_hold(hold_ms),
            ..Self::default()
        }
    }

    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    pub fn is_dispensing(&self) -> bool {
        self.dispense.is_active()
    }

    /// Run one tick at `now_ms` (milliseconds since boot).
    pub fn tick(&mut self, input: &InputSnapshot, now_ms: u64) -> TickOutput {
        let mut out = TickOutput::default();

        let direction = Direction::from_snapshot(input);
        out.push(direction.token());

        if input.key_c {
            out.push(Token::Dispense);
            if self.dispense.signal(now_ms) {
                debug!("dispense window open at {=u64} ms", now_ms);
                out.redraw.overlay = Some(Overlay::Show);
            }
        }

        if self.dispense.expire(now_ms) {
            debug!("dispense window closed at {=u64} ms", now_ms);
            out.redraw.overlay = Some(Overlay::Hide);
            out.redraw.arm = true;
            out.redraw.speed = true;
        }

        if !self.dispense.is_active() {
            out.redraw.direction = Some(direction);
        }

        if self.arm_latch.rising(input.key_b) {
            self.toggles.arm_raised = !self.toggles.arm_raised;
            info!("arm toggled, raised={}", self.toggles.arm_raised);
            out.push(Token::Arm);
            out.redraw.arm = true;
        }

        if self.speed_latch.rising(input.stick_press) {
            self.toggles.fast_mode = !self.toggles.fast_mode;
            info!("speed toggled, fast={}", self.toggles.fast_mode);
            out.push(Token::speed(self.toggles.fast_mode));
            out.redraw.speed = true;
        }

        out
    }
}
