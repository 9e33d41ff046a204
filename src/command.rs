//! Actions produced by the input layer and what the coordinator made of them.

use crate::types::{CapturedSound, RawRgb};

/// Logical meaning of a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicalAction {
    /// Sample the sensor and push the resulting note.
    CaptureColor,
    /// Replay the capture stack entry at this index.
    PlaySlot(u8),
    /// Raise playback volume. Confirms white during calibration.
    VolumeUp,
    /// Lower playback volume. Confirms black during calibration.
    VolumeDown,
}

/// Result of handing an action to the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActionOutcome {
    /// A color was sampled. Silent captures are reported but not stored.
    Captured(CapturedSound),
    /// A stored note was played.
    Played {
        slot: u8,
        sound: CapturedSound,
        duration_ms: u32,
    },
    /// The requested slot was empty.
    EmptySlot(u8),
    /// Volume is now at this level.
    VolumeChanged(u8),
    /// Combo gesture accepted, waiting for white.
    CalibrationStarted,
    /// White reference stored, waiting for black.
    WhiteReferenceStored(RawRgb),
    /// Black reference stored, back to normal.
    BlackReferenceStored(RawRgb),
    /// Not accepted in the current mode.
    Ignored,
}
