//! Button input layer: debounced polled buttons plus one interrupt-latched button.
//!
//! Provides [`ButtonEventSource`], which turns raw pin levels and a drained
//! [`InterruptLatch`] into an ordered list of [`LogicalAction`]s per cycle,
//! and the [`PinBank`] trait used to read the pins.

use embedded_hal::digital::InputPin;
use heapless::Vec;

use crate::command::LogicalAction;
use crate::debounce::{DebounceTracker, Edge};
use crate::latch::InterruptLatch;
use crate::time::TimeInstant;
use crate::types::{ButtonId, ButtonSpec, EngineError, SourceKind};

/// Trait for reading raw pin levels by pin number.
pub trait PinBank {
    /// Returns `Some(true)` for a high level, `None` if the pin cannot be read.
    fn is_high(&mut self, pin: u8) -> Option<bool>;
}

/// Any array of `embedded-hal` input pins is a pin bank indexed by position.
impl<P: InputPin, const N: usize> PinBank for [P; N] {
    fn is_high(&mut self, pin: u8) -> Option<bool> {
        self.get_mut(pin as usize)?.is_high().ok()
    }
}

struct PolledButton<I: TimeInstant> {
    id: ButtonId,
    spec: ButtonSpec,
    tracker: DebounceTracker<I>,
}

/// Produces logical button actions from pin reads and the interrupt latch.
///
/// Buttons are registered once during setup. Registration is sealed by
/// [`finish_setup`](Self::finish_setup) or implicitly by the first
/// [`poll`](Self::poll).
///
/// # Type Parameters
/// * `'a` - Lifetime of the interrupt latch reference (usually `'static`)
/// * `I` - Time instant type
/// * `MAX` - Maximum number of buttons, polled and interrupt combined
pub struct ButtonEventSource<'a, I: TimeInstant, const MAX: usize> {
    polled: Vec<PolledButton<I>, MAX>,
    interrupt: Option<(ButtonId, ButtonSpec)>,
    latch: Option<&'a InterruptLatch<I>>,
    debounce_ms: u64,
    sealed: bool,
}

impl<'a, I: TimeInstant, const MAX: usize> ButtonEventSource<'a, I, MAX> {
    /// Creates an empty event source.
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            polled: Vec::new(),
            interrupt: None,
            latch: None,
            debounce_ms,
            sealed: false,
        }
    }

    /// Binds the latch the interrupt button's handler writes to.
    pub fn with_latch(mut self, latch: &'a InterruptLatch<I>) -> Self {
        self.latch = Some(latch);
        self
    }

    /// Registers a button.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `MAX` buttons already registered, or a second
    ///   interrupt button
    /// * `InvalidState` - setup already finished, or an interrupt button
    ///   without a bound latch
    pub fn register(&mut self, spec: ButtonSpec) -> Result<ButtonId, EngineError> {
        if self.sealed {
            #[cfg(feature = "defmt")]
            defmt::warn!("button on pin {} registered after setup", spec.pin);
            return Err(EngineError::InvalidState);
        }
        if self.len() >= MAX {
            #[cfg(feature = "defmt")]
            defmt::warn!("button on pin {} exceeds capacity {}", spec.pin, MAX);
            return Err(EngineError::CapacityExceeded);
        }

        let id = ButtonId(self.len());
        match spec.source {
            SourceKind::Polled => {
                let tracker = DebounceTracker::new(spec.polarity, self.debounce_ms);
                self.polled
                    .push(PolledButton { id, spec, tracker })
                    .map_err(|_| EngineError::CapacityExceeded)?;
            }
            SourceKind::Interrupt => {
                if self.interrupt.is_some() {
                    return Err(EngineError::CapacityExceeded);
                }
                if self.latch.is_none() {
                    return Err(EngineError::InvalidState);
                }
                self.interrupt = Some((id, spec));
            }
        }
        Ok(id)
    }

    /// Settle window applied to every polled button.
    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    /// Seals registration. Pin modes are configured once.
    pub fn finish_setup(&mut self) {
        self.sealed = true;
    }

    /// Samples every button once.
    ///
    /// The latched interrupt action, if any, comes first; polled actions
    /// follow in registration order. Releases produce nothing.
    pub fn poll<P: PinBank>(&mut self, now: I, pins: &mut P) -> Vec<LogicalAction, MAX> {
        self.sealed = true;
        let mut actions = Vec::new();

        if let (Some((_, spec)), Some(latch)) = (self.interrupt, self.latch) {
            if latch.take(now) {
                // Capacity is MAX and at most MAX buttons exist, push cannot fail.
                let _ = actions.push(spec.action);
            }
        }

        for button in self.polled.iter_mut() {
            let Some(level) = pins.is_high(button.spec.pin) else {
                continue;
            };
            if button.tracker.update(level, now) == Some(Edge::Pressed) {
                #[cfg(feature = "defmt")]
                defmt::debug!("button {} pressed", button.id);
                let _ = actions.push(button.spec.action);
            }
        }

        actions
    }

    /// Live pressed state of a polled button. Unknown ids and the interrupt
    /// button read as released.
    pub fn is_pressed(&self, id: ButtonId) -> bool {
        self.polled
            .iter()
            .find(|b| b.id == id)
            .is_some_and(|b| b.tracker.is_pressed())
    }

    /// Returns the spec a button was registered with.
    pub fn spec(&self, id: ButtonId) -> Option<ButtonSpec> {
        match self.interrupt {
            Some((iid, spec)) if iid == id => Some(spec),
            _ => self.polled.iter().find(|b| b.id == id).map(|b| b.spec),
        }
    }

    /// Finds the first button bound to `action`.
    pub fn find(&self, action: LogicalAction) -> Option<ButtonId> {
        match self.interrupt {
            Some((id, spec)) if spec.action == action => Some(id),
            _ => self
                .polled
                .iter()
                .find(|b| b.spec.action == action)
                .map(|b| b.id),
        }
    }

    /// Number of registered buttons.
    pub fn len(&self) -> usize {
        self.polled.len() + self.interrupt.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true once registration is closed.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Millis;
    use crate::types::Polarity;
    use core::convert::Infallible;

    struct FakePin(bool);

    impl embedded_hal::digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[test]
    fn pin_array_reads_by_index() {
        let mut pins = [FakePin(true), FakePin(false)];
        assert_eq!(pins.is_high(0), Some(true));
        assert_eq!(pins.is_high(1), Some(false));
        assert_eq!(pins.is_high(2), None);
    }

    #[test]
    fn pin_array_drives_event_source() {
        let mut source = ButtonEventSource::<Millis, 4>::new(50);
        source
            .register(ButtonSpec::polled(1, LogicalAction::VolumeUp, Polarity::ActiveLow))
            .unwrap();

        let mut pins = [FakePin(true), FakePin(false)];
        assert!(source.poll(Millis(0), &mut pins).is_empty());
        let actions = source.poll(Millis(100), &mut pins);
        assert_eq!(actions.as_slice(), &[LogicalAction::VolumeUp]);
    }

    #[test]
    fn interrupt_button_needs_latch() {
        let mut source = ButtonEventSource::<Millis, 4>::new(50);
        assert_eq!(
            source.register(ButtonSpec::interrupt(2, LogicalAction::CaptureColor)),
            Err(EngineError::InvalidState)
        );
    }
}
