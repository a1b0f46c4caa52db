//! One-shot press detection for toggle buttons.

/// Remembers whether a button has been held since its last release, so a
/// press fires once no matter how many ticks it spans.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeLatch {
    held: bool,
}

impl EdgeLatch {
    pub const fn new() -> Self {
        Self { held: false }
    }

    /// Feed this tick's level. Returns `true` only on the tick the button
    /// goes from released to pressed.
    pub fn rising(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.held;
        self.held = pressed;
        fired
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_while_held() {
        let mut latch = EdgeLatch::new();
        let fired = (0..10).filter(|_| latch.rising(true)).count();
        assert_eq!(fired, 1);
        assert!(latch.is_held());
    }

    #[test]
    fn release_rearms() {
        let mut latch = EdgeLatch::new();
        assert!(latch.rising(true));
        assert!(!latch.rising(true));
        assert!(!latch.rising(false));
        assert!(!latch.is_held());
        assert!(latch.rising(true));
    }

    #[test]
    fn released_never_fires() {
        let mut latch = EdgeLatch::new();
        for _ in 0..5 {
            assert!(!latch.rising(false));
        }
    }

    #[test]
    fn one_tick_taps_each_fire() {
        let mut latch = EdgeLatch::new();
        let levels = [true, false, true, false, true];
        let fired = levels.iter().filter(|&&level| latch.rising(level)).count();
        assert_eq!(fired, 3);
    }
}
