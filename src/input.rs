//! Button sampling.
//!
//! Seven physical inputs (active-low with internal pull-up):
//!   - 5-way joystick UP / DOWN / LEFT / RIGHT - drive direction
//!   - joystick PRESS - speed toggle
//!   - key B          - arm toggle
//!   - key C          - dispense
//!
//! Levels are read raw once per tick. There is no debouncing here; the
//! edge latches in [`crate::latch`] take care of one-shot buttons.

use embedded_hal::digital::InputPin;

/// Pressed/not-pressed levels of every input, taken once per tick.
///
/// `true` means pressed (the pin reads LOW).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Joystick centre click.
    pub stick_press: bool,
    /// Arm toggle key.
    pub key_b: bool,
    /// Dispense key.
    pub key_c: bool,
}

impl InputSnapshot {
    /// Nothing pressed.
    pub const fn idle() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            stick_press: false,
            key_b: false,
            key_c: false,
        }
    }

    /// Returns `true` if any of the four joystick directions is held.
    pub fn any_direction(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// The seven input lines, generic over the HAL's pin type.
pub struct InputPins<P> {
    pub up: P,
    pub down: P,
    pub left: P,
    pub right: P,
    pub stick_press: P,
    pub key_b: P,
    pub key_c: P,
}

impl<P: InputPin> InputPins<P> {
    /// Read all seven lines into a snapshot.
    pub fn sample(&mut self) -> InputSnapshot {
        InputSnapshot {
            up: is_pressed(&mut self.up),
            down: is_pressed(&mut self.down),
            left: is_pressed(&mut self.left),
            right: is_pressed(&mut self.right),
            stick_press: is_pressed(&mut self.stick_press),
            key_b: is_pressed(&mut self.key_b),
            key_c: is_pressed(&mut self.key_c),
        }
    }
}

/// Active-low read. A failed read counts as released.
fn is_pressed<P: InputPin>(pin: &mut P) -> bool {
    pin.is_low().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    /// Pin stub: `Some(level)` reads that level, `None` fails the read.
    struct FakePin(Option<bool>);

    impl ErrorType for FakePin {
        type Error = ErrorKind;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.0.ok_or(ErrorKind::Other)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    const HIGH: FakePin = FakePin(Some(true));
    const LOW: FakePin = FakePin(Some(false));

    fn released() -> InputPins<FakePin> {
        InputPins {
            up: HIGH,
            down: HIGH,
            left: HIGH,
            right: HIGH,
            stick_press: HIGH,
            key_b: HIGH,
            key_c: HIGH,
        }
    }

    #[test]
    fn pulled_up_lines_read_as_released() {
        assert_eq!(released().sample(), InputSnapshot::idle());
    }

    #[test]
    fn low_line_reads_as_pressed() {
        let mut pins = InputPins {
            left: LOW,
            key_c: LOW,
            ..released()
        };
        let snap = pins.sample();
        assert!(snap.left);
        assert!(snap.key_c);
        assert!(!snap.up && !snap.down && !snap.right);
        assert!(!snap.stick_press && !snap.key_b);
        assert!(snap.any_direction());
    }

    #[test]
    fn failed_read_counts_as_released() {
        let mut pins = InputPins {
            key_b: FakePin(None),
            ..released()
        };
        assert!(!pins.sample().key_b);
    }

    #[test]
    fn buttons_alone_are_not_a_direction() {
        let snap = InputSnapshot {
            stick_press: true,
            key_b: true,
            key_c: true,
            ..InputSnapshot::idle()
        };
        assert!(!snap.any_direction());
    }
}
