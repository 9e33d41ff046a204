//! Black/white reference normalization for pulse-period color sensors.
//!
//! Sensors like the TCS3200 report a pulse period per channel: brighter light
//! gives a shorter period. [`Calibration`] maps a raw period linearly from the
//! black reference (0) to the white reference (255). Sensor drivers can keep
//! one of these and feed it from `set_white_reference` /
//! `set_black_reference`.

use palette::Srgb;

use crate::types::RawRgb;

/// Stored reference readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub white: RawRgb,
    pub black: RawRgb,
}

impl Calibration {
    pub const fn new(white: RawRgb, black: RawRgb) -> Self {
        Self { white, black }
    }

    /// Normalizes a raw reading to 0-255 per channel, clamped.
    pub fn apply(&self, raw: RawRgb) -> Srgb<u8> {
        Srgb::new(
            scale_channel(raw.red, self.black.red, self.white.red),
            scale_channel(raw.green, self.black.green, self.white.green),
            scale_channel(raw.blue, self.black.blue, self.white.blue),
        )
    }
}

impl Default for Calibration {
    /// Typical periods at 20% output scaling until the device is calibrated.
    fn default() -> Self {
        Self::new(RawRgb::new(50, 50, 50), RawRgb::new(1000, 1000, 1000))
    }
}

fn scale_channel(raw: u32, black: u32, white: u32) -> u8 {
    let span = white as i64 - black as i64;
    if span == 0 {
        return 0;
    }
    let value = (raw as i64 - black as i64) * 255 / span;
    value.clamp(0, 255) as u8
}
