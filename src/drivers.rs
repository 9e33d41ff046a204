//! Traits for the peripherals the engine drives.
//!
//! Implement these for your board's color sensor, buzzer, slot LEDs and text
//! display. The LED and text traits are optional: `()` implements both as a
//! no-op.

use palette::Srgb;

use crate::config::Cue;
use crate::types::{RawRgb, SensorError};

/// Color sensor with black/white calibration.
pub trait ColorSensor {
    /// Reads uncalibrated channel values.
    ///
    /// Implementations must bound the measurement so an absent sensor
    /// returns [`SensorError::Timeout`] instead of hanging the loop.
    fn read_raw_rgb(&mut self) -> Result<RawRgb, SensorError>;

    /// Reads the color normalized against the stored references.
    fn read_calibrated_rgb(&mut self) -> Result<Srgb<u8>, SensorError>;

    /// Stores the reading taken over a white surface.
    fn set_white_reference(&mut self, raw: RawRgb);

    /// Stores the reading taken over a black surface.
    fn set_black_reference(&mut self, raw: RawRgb);
}

/// Tone generator (PWM buzzer or speaker).
pub trait ToneOutput {
    /// Starts a tone. Must not block; frequency 0 means stop.
    fn play(&mut self, frequency_hz: u16, duration_ms: u32);

    /// Silences the output.
    fn stop(&mut self);

    /// Plays a feedback cue.
    fn beep(&mut self, cue: Cue) {
        self.play(cue.frequency, cue.duration_ms);
    }
}

/// Per-slot RGB indicators.
pub trait SlotDisplay {
    /// Lights slot `index` with `color` for `duration_ms`, turning every
    /// other slot off.
    fn show_slot(&mut self, index: u8, color: Srgb<u8>, duration_ms: u32);

    /// Turns every slot off.
    fn clear(&mut self);
}

/// Line-oriented text output (character LCD or serial console).
pub trait TextDisplay {
    fn write(&mut self, line: u8, text: &str);
}

impl SlotDisplay for () {
    fn show_slot(&mut self, _index: u8, _color: Srgb<u8>, _duration_ms: u32) {}

    fn clear(&mut self) {}
}

impl TextDisplay for () {
    fn write(&mut self, _line: u8, _text: &str) {}
}
