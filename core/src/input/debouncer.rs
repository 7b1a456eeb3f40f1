//! Hold-duration debouncer for the mode button.
//!
//! One counter, sampled once per loop iteration, classifies a press by how
//! long it was held:
//!
//! - released after more than 5 and fewer than 100 held ticks: short press,
//!   reported on release as [`ButtonEvent::CameraModeSwitch`];
//! - still held when the count is between 100 and 150 (exclusive): long
//!   press, reported immediately as [`ButtonEvent::ToggleDisplay`]. The
//!   counter then jumps to a latch value above the band so the toggle fires
//!   once per hold, whenever the button is eventually released.

/// Bit of the raw button register carrying the mode button (button B).
pub const BUTTON_MASK: u32 = 0x2;

/// Short press window, exclusive on both ends.
pub const SHORT_PRESS_MIN: u16 = 5;
pub const SHORT_PRESS_MAX: u16 = 100;

/// Long press window, exclusive on both ends.
pub const LONG_PRESS_MIN: u16 = 100;
pub const LONG_PRESS_MAX: u16 = 150;

/// Counter value after a long press fires. Only a release clears it.
pub const LONG_PRESS_LATCH: u16 = 999;

/// Discrete event produced by [`InputDebouncer::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Short press released: ask the camera for its next capture mode.
    CameraModeSwitch,
    /// Long press: flip between native and scaled output.
    ToggleDisplay,
}

#[derive(Debug, Clone, Default)]
pub struct InputDebouncer {
    hold_count: u16,
}

impl InputDebouncer {
    pub fn new() -> Self {
        Self { hold_count: 0 }
    }

    pub fn hold_count(&self) -> u16 {
        self.hold_count
    }

    pub fn reset(&mut self) {
        self.hold_count = 0;
    }

    /// Classify the mode button bit of a raw button register read.
    pub fn sample(&mut self, raw: u32) -> Option<ButtonEvent> {
        self.tick(raw & BUTTON_MASK != 0)
    }

    /// Advance one poll iteration. `released` is the raw level of the
    /// active-low button line: `false` while the button is held.
    ///
    /// At most one event is returned per tick. The long-press check runs
    /// after the release handling on every tick, held or not.
    pub fn tick(&mut self, released: bool) -> Option<ButtonEvent> {
        let mut event = None;

        if !released {
            // A stuck button must never wrap back into the long-press band.
            self.hold_count = self.hold_count.saturating_add(1);
        } else {
            if self.hold_count > SHORT_PRESS_MIN && self.hold_count < SHORT_PRESS_MAX {
                event = Some(ButtonEvent::CameraModeSwitch);
            }
            self.hold_count = 0;
        }

        if self.hold_count > LONG_PRESS_MIN && self.hold_count < LONG_PRESS_MAX {
            self.hold_count = LONG_PRESS_LATCH;
            event = Some(ButtonEvent::ToggleDisplay);
        }

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hold(deb: &mut InputDebouncer, ticks: usize) -> Vec<ButtonEvent> {
        (0..ticks).filter_map(|_| deb.tick(false)).collect()
    }

    #[test]
    fn held_ticks_count_up() {
        let mut deb = InputDebouncer::new();
        assert!(hold(&mut deb, 3).is_empty());
        assert_eq!(deb.hold_count(), 3);
    }

    #[test]
    fn release_always_resets() {
        let mut deb = InputDebouncer::new();
        hold(&mut deb, 50);
        deb.tick(true);
        assert_eq!(deb.hold_count(), 0);
        // Idle released ticks stay at zero
        assert_eq!(deb.tick(true), None);
        assert_eq!(deb.hold_count(), 0);
    }

    #[test]
    fn short_press_window_bounds() {
        for (held, expected) in [
            (5, None),
            (6, Some(ButtonEvent::CameraModeSwitch)),
            (99, Some(ButtonEvent::CameraModeSwitch)),
            (100, None),
        ] {
            let mut deb = InputDebouncer::new();
            hold(&mut deb, held);
            assert_eq!(deb.tick(true), expected, "held for {held} ticks");
        }
    }

    #[test]
    fn long_press_fires_on_count_101() {
        let mut deb = InputDebouncer::new();
        assert!(hold(&mut deb, 100).is_empty());
        assert_eq!(deb.hold_count(), 100);
        assert_eq!(deb.tick(false), Some(ButtonEvent::ToggleDisplay));
        assert_eq!(deb.hold_count(), LONG_PRESS_LATCH);
    }

    #[test]
    fn latch_suppresses_until_release() {
        let mut deb = InputDebouncer::new();
        let events = hold(&mut deb, 1000);
        assert_eq!(events, vec![ButtonEvent::ToggleDisplay]);
        // Release after a long press is not a short press
        assert_eq!(deb.tick(true), None);
        assert_eq!(deb.hold_count(), 0);
    }

    #[test]
    fn counter_saturates() {
        let mut deb = InputDebouncer::new();
        let events = hold(&mut deb, 70_000);
        assert_eq!(events.len(), 1);
        assert_eq!(deb.hold_count(), u16::MAX);
        assert_eq!(deb.tick(false), None);
    }

    #[test]
    fn sample_uses_bit_1_active_low() {
        let mut deb = InputDebouncer::new();
        // Bit 1 low: held. Bit 0 is button A and is ignored.
        deb.sample(0b01);
        deb.sample(0b00);
        assert_eq!(deb.hold_count(), 2);
        deb.sample(0b10);
        assert_eq!(deb.hold_count(), 0);
    }
}
