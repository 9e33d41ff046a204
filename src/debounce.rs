//! Time-based debounce filter for a single input channel.

use crate::time::TimeInstant;
use crate::types::Polarity;

/// A settled transition reported by [`DebounceTracker::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
}

/// Turns a raw pin level stream into clean press/release edges.
///
/// Any change of the raw level restarts the settle timer. Once the level has
/// been stable for longer than the debounce window, a pressed level reports
/// one [`Edge::Pressed`] and arms the tracker; nothing more is reported until
/// a settled release disarms it. Holding a button therefore fires once.
#[derive(Debug, Clone, Copy)]
pub struct DebounceTracker<I: TimeInstant> {
    polarity: Polarity,
    debounce_ms: u64,
    last_level: bool,
    last_change: Option<I>,
    armed: bool,
}

impl<I: TimeInstant> DebounceTracker<I> {
    /// Creates a tracker that assumes the button starts released.
    pub fn new(polarity: Polarity, debounce_ms: u64) -> Self {
        Self {
            polarity,
            debounce_ms,
            last_level: polarity.released_level(),
            last_change: None,
            armed: false,
        }
    }

    /// Feeds one raw sample taken at `now`.
    pub fn update(&mut self, is_high: bool, now: I) -> Option<Edge> {
        if is_high != self.last_level {
            self.last_level = is_high;
            self.last_change = Some(now);
        }

        let settled = match self.last_change {
            Some(changed) => now.millis_since(changed) > self.debounce_ms,
            None => true,
        };
        if !settled {
            return None;
        }

        let pressed = self.polarity.is_pressed(is_high);
        if pressed && !self.armed {
            self.armed = true;
            Some(Edge::Pressed)
        } else if !pressed && self.armed {
            self.armed = false;
            Some(Edge::Released)
        } else {
            None
        }
    }

    /// Live pressed state of the last raw sample, ignoring the settle timer.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.polarity.is_pressed(self.last_level)
    }

    /// True while a dispatched press waits for its release.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Millis;

    const LOW: bool = false;
    const HIGH: bool = true;

    fn tracker() -> DebounceTracker<Millis> {
        DebounceTracker::new(Polarity::ActiveLow, 50)
    }

    #[test]
    fn press_fires_only_after_window() {
        let mut t = tracker();
        assert_eq!(t.update(HIGH, Millis(0)), None);
        assert_eq!(t.update(LOW, Millis(10)), None);
        assert_eq!(t.update(LOW, Millis(60)), None);
        assert_eq!(t.update(LOW, Millis(61)), Some(Edge::Pressed));
        assert!(t.is_armed());
    }

    #[test]
    fn bounce_inside_window_restarts_timer() {
        let mut t = tracker();
        t.update(LOW, Millis(0));
        t.update(HIGH, Millis(20));
        t.update(LOW, Millis(40));
        assert_eq!(t.update(LOW, Millis(80)), None);
        assert_eq!(t.update(LOW, Millis(91)), Some(Edge::Pressed));
    }

    #[test]
    fn held_button_fires_once() {
        let mut t = tracker();
        t.update(LOW, Millis(0));
        let fired = (1..500u32)
            .filter(|ms| t.update(LOW, Millis(ms * 10)) == Some(Edge::Pressed))
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn release_disarms_without_press_event() {
        let mut t = tracker();
        t.update(LOW, Millis(0));
        assert_eq!(t.update(LOW, Millis(100)), Some(Edge::Pressed));
        t.update(HIGH, Millis(200));
        assert_eq!(t.update(HIGH, Millis(300)), Some(Edge::Released));
        assert!(!t.is_armed());
    }

    #[test]
    fn active_high_polarity() {
        let mut t = DebounceTracker::<Millis>::new(Polarity::ActiveHigh, 50);
        assert_eq!(t.update(LOW, Millis(0)), None);
        t.update(HIGH, Millis(10));
        assert!(t.is_pressed());
        assert_eq!(t.update(HIGH, Millis(100)), Some(Edge::Pressed));
    }
}
