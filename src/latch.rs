//! Single-slot event latch shared between an interrupt handler and the main loop.
//!
//! [`InterruptLatch`] is the only piece of state the interrupt context may
//! touch. The handler calls [`InterruptLatch::on_interrupt`]; the polling loop
//! drains it with [`InterruptLatch::take`]. Both sides go through a critical
//! section, so neither ever observes a half-written state.
//!
//! ```ignore
//! static CAPTURE: InterruptLatch<Millis> = InterruptLatch::new(INTERRUPT_COOLDOWN_MS);
//!
//! #[interrupt]
//! fn EXTI0_1() {
//!     CAPTURE.on_interrupt(time::now());
//! }
//! ```

use core::cell::Cell;
use critical_section::Mutex;

use crate::time::TimeInstant;

#[derive(Clone, Copy)]
struct LatchState<I> {
    pending: bool,
    last_accepted: Option<I>,
}

/// Holds at most one pending interrupt event.
///
/// Interrupts arriving within `cooldown_ms` of the last accepted one are
/// dropped, never queued.
pub struct InterruptLatch<I: TimeInstant> {
    state: Mutex<Cell<LatchState<I>>>,
    cooldown_ms: u64,
}

impl<I: TimeInstant> InterruptLatch<I> {
    /// Creates an empty latch. Usable in `static` initializers.
    pub const fn new(cooldown_ms: u64) -> Self {
        Self {
            state: Mutex::new(Cell::new(LatchState {
                pending: false,
                last_accepted: None,
            })),
            cooldown_ms,
        }
    }

    /// Records an edge. Call from the interrupt handler.
    ///
    /// Bounded time, no allocation. Returns whether the event was accepted.
    pub fn on_interrupt(&self, now: I) -> bool {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();

            let accept = match state.last_accepted {
                Some(last) => now.millis_since(last) > self.cooldown_ms,
                None => true,
            };
            if accept {
                state.pending = true;
                state.last_accepted = Some(now);
                cell.set(state);
            }
            accept
        })
    }

    /// Atomically tests and clears the pending flag. Call from the loop.
    ///
    /// When nothing is pending and the cooldown has run out at `now`, the last
    /// accepted instant is forgotten too. A 32-bit millisecond clock wraps
    /// after about 49.7 days, and a stale instant would otherwise drop an
    /// interrupt landing within the cooldown of it one wrap later.
    pub fn take(&self, now: I) -> bool {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            let was_pending = state.pending;
            state.pending = false;
            if !was_pending
                && state
                    .last_accepted
                    .is_some_and(|last| now.millis_since(last) > self.cooldown_ms)
            {
                state.last_accepted = None;
            }
            cell.set(state);
            was_pending
        })
    }

    /// Returns the pending flag without clearing it.
    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| self.state.borrow(cs).get().pending)
    }

    pub fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }
}
