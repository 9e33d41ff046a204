//! Tunable constants and the runtime configuration built from them.

use crate::command::LogicalAction;

/// Settle time before a raw pin transition is trusted.
pub const DEBOUNCE_MS: u64 = 50;

/// Minimum spacing between accepted interrupt presses.
///
/// Firmware revisions used both 200 ms and 1 s; 200 ms keeps captures snappy.
pub const INTERRUPT_COOLDOWN_MS: u64 = 200;

/// How long both combo buttons must be held to enter calibration.
pub const COMBO_HOLD_MS: u64 = 2000;

/// Capture slots on the four-LED board. The eight-LED board uses 8.
pub const DEFAULT_STACK_CAPACITY: usize = 4;

/// 8 play buttons, 2 volume buttons, 1 capture button and a spare.
pub const MAX_BUTTONS: usize = 12;

/// Volume range is `0..=MAX_VOLUME`.
pub const MAX_VOLUME: u8 = 10;

/// Volume at which playback uses exactly the base duration.
pub const VOLUME_MIDPOINT: u8 = 5;

/// Chromatic scale from A3 to B5 in Hz.
pub const NOTE_SCALE: [u16; 27] = [
    220, 233, 247, 262, 277, 294, 311, 330, 349, 370, 392, 415, 440, 466, 494, 523, 554, 587,
    622, 659, 698, 740, 784, 831, 880, 932, 988,
];

/// A short fixed tone used as user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cue {
    pub frequency: u16,
    pub duration_ms: u32,
}

impl Cue {
    pub const fn new(frequency: u16, duration_ms: u32) -> Self {
        Self {
            frequency,
            duration_ms,
        }
    }
}

/// Feedback tones for every user-visible event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cues {
    pub capture: Cue,
    pub empty_slot: Cue,
    pub volume: Cue,
    pub calibration_start: Cue,
    pub calibration_step: Cue,
    pub calibration_done: Cue,
}

impl Default for Cues {
    fn default() -> Self {
        Self {
            capture: Cue::new(1000, 100),
            empty_slot: Cue::new(150, 300),
            volume: Cue::new(1200, 40),
            calibration_start: Cue::new(660, 400),
            calibration_step: Cue::new(880, 150),
            calibration_done: Cue::new(1320, 300),
        }
    }
}

/// Readings darker than this are treated as "no color".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DarknessGate {
    /// Every channel must be below this.
    pub channel_max: u8,
    /// And the channel sum must be below this.
    pub sum_max: u16,
}

impl Default for DarknessGate {
    fn default() -> Self {
        Self {
            channel_max: 20,
            sum_max: 50,
        }
    }
}

/// How playback length follows the volume setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackTiming {
    /// Duration at the volume midpoint.
    pub base_ms: u32,
    /// Added per volume step above the midpoint, removed per step below.
    pub step_ms: u32,
}

impl PlaybackTiming {
    /// Note length for a volume level, never negative.
    pub fn duration_ms(&self, volume: u8) -> u32 {
        let offset = (volume as i64 - VOLUME_MIDPOINT as i64) * self.step_ms as i64;
        (self.base_ms as i64 + offset).clamp(0, u32::MAX as i64) as u32
    }
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            base_ms: 500,
            step_ms: 50,
        }
    }
}

/// Engine configuration.
///
/// The input timing windows are not part of it: the debounce window is given
/// to [`ButtonEventSource::new`](crate::ButtonEventSource::new) and the
/// interrupt cooldown to [`InterruptLatch::new`](crate::InterruptLatch::new),
/// which has to run in a `static` initializer.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub combo_hold_ms: u64,
    pub scale: &'static [u16],
    pub darkness: DarknessGate,
    pub playback: PlaybackTiming,
    pub initial_volume: u8,
    pub cues: Cues,
    /// Accepted while waiting for the white reference.
    pub confirm_white: LogicalAction,
    /// Accepted while waiting for the black reference.
    pub confirm_black: LogicalAction,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            combo_hold_ms: COMBO_HOLD_MS,
            scale: &NOTE_SCALE,
            darkness: DarknessGate::default(),
            playback: PlaybackTiming::default(),
            initial_volume: VOLUME_MIDPOINT,
            cues: Cues::default(),
            confirm_white: LogicalAction::VolumeUp,
            confirm_black: LogicalAction::VolumeDown,
        }
    }
}
