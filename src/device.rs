//! One-call-per-loop wiring of inputs, combo gesture and coordinator.

use heapless::Vec;

use crate::buttons::{ButtonEventSource, PinBank};
use crate::combo::ComboGestureDetector;
use crate::command::ActionOutcome;
use crate::coordinator::PlaybackCoordinator;
use crate::drivers::{ColorSensor, SlotDisplay, TextDisplay, ToneOutput};
use crate::time::{TimeInstant, TimeSource};
use crate::types::ButtonId;

/// Runs the input and coordination engine from the main loop.
///
/// Each [`service`](Self::service) call reads the time, polls the buttons,
/// hands every resulting action to the coordinator in order, then feeds the
/// live state of the two combo buttons to the gesture detector.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `'a` - Lifetime of the interrupt latch reference
/// * `I` - Time instant type
/// * `Ts` - Time source implementation type
/// * `P` - Pin bank
/// * `S`, `T`, `V`, `X` - Coordinator drivers
/// * `MAX` - Maximum number of buttons
/// * `C` - Capture stack capacity
pub struct Device<'t, 'a, I, Ts, P, S, T, V, X, const MAX: usize, const C: usize>
where
    I: TimeInstant,
    Ts: TimeSource<I>,
    P: PinBank,
    S: ColorSensor,
    T: ToneOutput,
    V: SlotDisplay,
    X: TextDisplay,
{
    time_source: &'t Ts,
    pins: P,
    buttons: ButtonEventSource<'a, I, MAX>,
    combo: ComboGestureDetector<I>,
    combo_pair: (ButtonId, ButtonId),
    coordinator: PlaybackCoordinator<S, T, V, X, C>,
}

impl<'t, 'a, I, Ts, P, S, T, V, X, const MAX: usize, const C: usize>
    Device<'t, 'a, I, Ts, P, S, T, V, X, MAX, C>
where
    I: TimeInstant,
    Ts: TimeSource<I>,
    P: PinBank,
    S: ColorSensor,
    T: ToneOutput,
    V: SlotDisplay,
    X: TextDisplay,
{
    /// Wires the engine together and seals button registration.
    ///
    /// `combo_pair` names the two buttons whose simultaneous hold enters
    /// calibration. The hold threshold comes from the coordinator's config.
    pub fn new(
        time_source: &'t Ts,
        pins: P,
        mut buttons: ButtonEventSource<'a, I, MAX>,
        coordinator: PlaybackCoordinator<S, T, V, X, C>,
        combo_pair: (ButtonId, ButtonId),
    ) -> Self {
        buttons.finish_setup();
        Self {
            time_source,
            pins,
            buttons,
            combo: ComboGestureDetector::new(coordinator.config().combo_hold_ms),
            combo_pair,
            coordinator,
        }
    }

    /// Runs one loop iteration and reports what happened.
    ///
    /// A completed combo gesture is reported after the button actions.
    pub fn service(&mut self) -> Vec<ActionOutcome, MAX> {
        let now = self.time_source.now();
        let mut outcomes = Vec::new();

        for action in self.buttons.poll(now, &mut self.pins) {
            let _ = outcomes.push(self.coordinator.handle_action(action));
        }

        let (a, b) = self.combo_pair;
        let fired = self
            .combo
            .tick(now, self.buttons.is_pressed(a), self.buttons.is_pressed(b));
        if fired {
            let outcome = self.coordinator.enter_calibration();
            if outcomes.push(outcome).is_err() {
                // Every button fired this cycle; the mode change still happened.
                #[cfg(feature = "defmt")]
                defmt::warn!("outcome list full, dropped {}", outcome);
            }
        }

        outcomes
    }

    pub fn coordinator(&self) -> &PlaybackCoordinator<S, T, V, X, C> {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut PlaybackCoordinator<S, T, V, X, C> {
        &mut self.coordinator
    }

    pub fn buttons(&self) -> &ButtonEventSource<'a, I, MAX> {
        &self.buttons
    }

    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    /// True while the combo buttons are held but the gesture has not fired.
    pub fn combo_in_progress(&self) -> bool {
        self.combo.in_progress()
    }
}
