//! Two-button press-and-hold gesture.

use crate::time::TimeInstant;

/// Detects both designated buttons held together for `hold_ms`.
///
/// Fires once per hold. After firing, at least one button has to be released
/// before a new hold can start, so keeping both down never refires.
/// Releasing either button before the threshold discards the partial hold.
#[derive(Debug, Clone, Copy)]
pub struct ComboGestureDetector<I: TimeInstant> {
    hold_ms: u64,
    in_progress: bool,
    start: Option<I>,
    fired: bool,
}

impl<I: TimeInstant> ComboGestureDetector<I> {
    pub fn new(hold_ms: u64) -> Self {
        Self {
            hold_ms,
            in_progress: false,
            start: None,
            fired: false,
        }
    }

    /// Feeds the live pressed state of both buttons. Returns true when the
    /// gesture completes.
    pub fn tick(&mut self, now: I, pressed_a: bool, pressed_b: bool) -> bool {
        if !(pressed_a && pressed_b) {
            self.reset();
            return false;
        }
        if self.fired {
            return false;
        }

        match (self.in_progress, self.start) {
            (true, Some(start)) if now.millis_since(start) >= self.hold_ms => {
                self.in_progress = false;
                self.start = None;
                self.fired = true;
                true
            }
            (true, Some(_)) => false,
            _ => {
                self.in_progress = true;
                self.start = Some(now);
                false
            }
        }
    }

    /// Clears any hold in progress.
    pub fn reset(&mut self) {
        self.in_progress = false;
        self.start = None;
        self.fired = false;
    }

    /// True between the start of a simultaneous press and the gesture firing.
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn hold_ms(&self) -> u64 {
        self.hold_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Millis;

    #[test]
    fn single_button_never_starts_hold() {
        let mut combo = ComboGestureDetector::<Millis>::new(2000);
        assert!(!combo.tick(Millis(0), true, false));
        assert!(!combo.in_progress());
        assert!(!combo.tick(Millis(5000), false, true));
    }

    #[test]
    fn refires_only_after_release() {
        let mut combo = ComboGestureDetector::<Millis>::new(100);
        combo.tick(Millis(0), true, true);
        assert!(combo.tick(Millis(100), true, true));
        assert!(!combo.tick(Millis(500), true, true));

        combo.tick(Millis(600), false, true);
        combo.tick(Millis(700), true, true);
        assert!(combo.tick(Millis(800), true, true));
    }
}
