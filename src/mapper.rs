//! Deterministic color to note mapping.
//!
//! A color is gated for darkness, reduced to its hue, and the hue is spread
//! linearly over an ascending note scale. The mapper holds no state between
//! calls: equal inputs always give equal notes.

use palette::Srgb;

use crate::config::{DarknessGate, NOTE_SCALE};

/// Below this chroma a color counts as achromatic (hue 0).
const ACHROMATIC_EPSILON: f32 = 1e-3;

/// Highest integer hue fed into the scale lookup.
const MAX_HUE: usize = 359;

/// Maps RGB colors to note frequencies.
#[derive(Debug, Clone, Copy)]
pub struct ColorToNoteMapper {
    scale: &'static [u16],
    darkness: DarknessGate,
}

impl ColorToNoteMapper {
    /// Creates a mapper over an ascending scale.
    pub const fn new(scale: &'static [u16], darkness: DarknessGate) -> Self {
        Self { scale, darkness }
    }

    /// Returns the note for `color`, or 0 for "no note".
    pub fn map(&self, color: Srgb<u8>) -> u16 {
        if self.is_dark(color) || self.scale.is_empty() {
            return 0;
        }

        let hue = hue_degrees(color) as usize;
        let last = self.scale.len() - 1;
        let index = (hue.min(MAX_HUE) * last / MAX_HUE).min(last);
        self.scale[index]
    }

    /// Same as [`map`](Self::map) for loose channel values.
    #[inline]
    pub fn map_rgb(&self, red: u8, green: u8, blue: u8) -> u16 {
        self.map(Srgb::new(red, green, blue))
    }

    /// Returns true if the reading is too dark to carry a note.
    pub fn is_dark(&self, color: Srgb<u8>) -> bool {
        let limit = self.darkness.channel_max;
        let sum = color.red as u16 + color.green as u16 + color.blue as u16;
        color.red < limit && color.green < limit && color.blue < limit && sum < self.darkness.sum_max
    }

    pub fn scale(&self) -> &'static [u16] {
        self.scale
    }
}

impl Default for ColorToNoteMapper {
    fn default() -> Self {
        Self::new(&NOTE_SCALE, DarknessGate::default())
    }
}

/// Hue of `color` in degrees, in `[0, 360)`.
///
/// When two channels share the maximum, red wins over green and green over
/// blue. Achromatic colors have hue 0.
pub fn hue_degrees(color: Srgb<u8>) -> f32 {
    let rgb: Srgb<f32> = color.into_format();
    let (r, g, b) = (rgb.red, rgb.green, rgb.blue);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta < ACHROMATIC_EPSILON {
        return 0.0;
    }

    let sector = if max == r {
        let mut s = ((g - b) / delta) % 6.0;
        if s < 0.0 {
            s += 6.0;
        }
        s
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let mut hue = 60.0 * sector;
    if hue < 0.0 {
        hue += 360.0;
    }
    if hue >= 360.0 {
        hue -= 360.0;
    }
    hue
}
