//! Joystick → drive direction mapping.

use crate::input::InputSnapshot;
use crate::link::Token;

/// Drive direction for one tick. Exactly one holds at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    /// Idle. Still transmitted every tick.
    Stop,
}

impl Direction {
    /// Resolve the joystick by fixed priority: UP > DOWN > LEFT > RIGHT,
    /// falling back to [`Direction::Stop`]. Simultaneous presses never
    /// blend.
    pub fn from_snapshot(input: &InputSnapshot) -> Self {
        if !input.any_direction() {
            return Direction::Stop;
        }
        if input.up {
            Direction::Forward
        } else if input.down {
            Direction::Backward
        } else if input.left {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// Wire token for this direction.
    ///
    /// Left and right are swapped: the vehicle's steering is mounted
    /// mirrored, so a logical left turn is sent as `rgt`.
    pub const fn token(self) -> Token {
        match self {
            Direction::Forward => Token::Fwd,
            Direction::Backward => Token::Bwd,
            Direction::Left => Token::Rgt,
            Direction::Right => Token::Lft,
            Direction::Stop => Token::Stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(up: bool, down: bool, left: bool, right: bool) -> InputSnapshot {
        InputSnapshot {
            up,
            down,
            left,
            right,
            ..InputSnapshot::idle()
        }
    }

    #[test]
    fn idle_maps_to_stop() {
        assert_eq!(Direction::from_snapshot(&InputSnapshot::idle()), Direction::Stop);
    }

    #[test]
    fn single_presses() {
        assert_eq!(Direction::from_snapshot(&snap(true, false, false, false)), Direction::Forward);
        assert_eq!(Direction::from_snapshot(&snap(false, true, false, false)), Direction::Backward);
        assert_eq!(Direction::from_snapshot(&snap(false, false, true, false)), Direction::Left);
        assert_eq!(Direction::from_snapshot(&snap(false, false, false, true)), Direction::Right);
    }

    #[test]
    fn priority_over_every_combination() {
        // Walk all 16 combinations of the four direction levels.
        for bits in 0u8..16 {
            let (up, down, left, right) =
                (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            let expected = if up {
                Direction::Forward
            } else if down {
                Direction::Backward
            } else if left {
                Direction::Left
            } else if right {
                Direction::Right
            } else {
                Direction::Stop
            };
            assert_eq!(
                Direction::from_snapshot(&snap(up, down, left, right)),
                expected,
                "bits={:04b}",
                bits
            );
        }
    }

    #[test]
    fn buttons_do_not_affect_direction() {
        let input = InputSnapshot {
            stick_press: true,
            key_b: true,
            key_c: true,
            ..InputSnapshot::idle()
        };
        assert_eq!(Direction::from_snapshot(&input), Direction::Stop);
    }

    #[test]
    fn steering_tokens_are_swapped() {
        assert_eq!(Direction::Left.token(), Token::Rgt);
        assert_eq!(Direction::Right.token(), Token::Lft);
        assert_eq!(Direction::Forward.token(), Token::Fwd);
        assert_eq!(Direction::Backward.token(), Token::Bwd);
        assert_eq!(Direction::Stop.token(), Token::Stop);
    }
}
