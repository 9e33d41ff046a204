//! Bounded most-recent-first cache of captured sounds.

use crate::types::CapturedSound;

/// Fixed-capacity LIFO of [`CapturedSound`]s backing indexed playback.
///
/// Index 0 is always the most recent non-silent push. When full, a push
/// evicts the oldest entry (index `C - 1`). Reading past `count` yields
/// [`CapturedSound::EMPTY`] instead of failing, so callers handle "nothing
/// there" and "silence" the same way.
///
/// # Type Parameters
/// * `C` - Number of slots
#[derive(Debug, Clone)]
pub struct CaptureStack<const C: usize> {
    slots: [CapturedSound; C],
    count: usize,
}

impl<const C: usize> CaptureStack<C> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self {
            slots: [CapturedSound::EMPTY; C],
            count: 0,
        }
    }

    /// Pushes a sound on top. Silent sounds are ignored.
    pub fn push(&mut self, sound: CapturedSound) {
        if sound.is_silent() || C == 0 {
            return;
        }

        self.slots.copy_within(0..C.saturating_sub(1), 1);
        self.slots[0] = sound;

        if self.count < C {
            self.count += 1;
        }
    }

    /// Forgets every entry.
    pub fn reset(&mut self) {
        self.slots = [CapturedSound::EMPTY; C];
        self.count = 0;
    }

    /// Returns the entry at `index`, or `EMPTY` past the stored range.
    pub fn get(&self, index: usize) -> CapturedSound {
        if index >= self.count {
            return CapturedSound::EMPTY;
        }
        self.slots[index]
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub const fn capacity(&self) -> usize {
        C
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == C
    }

    /// Stored entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &CapturedSound> {
        self.slots[..self.count].iter()
    }
}

impl<const C: usize> Default for CaptureStack<C> {
    fn default() -> Self {
        Self::new()
    }
}
