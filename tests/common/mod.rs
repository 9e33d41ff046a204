//! Shared test infrastructure for chroma-tone integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use chroma_tone::{
    Calibration, ColorSensor, Millis, PinBank, RawRgb, SensorError, SlotDisplay, Srgb, TextDisplay,
    TimeSource, ToneOutput,
};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<Millis>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(Millis(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(Millis(current.0 + millis));
    }

    pub fn set_time(&self, time: Millis) {
        self.current_time.set(time);
    }
}

impl TimeSource<Millis> for MockTimeSource {
    fn now(&self) -> Millis {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

pub const PIN_COUNT: usize = 16;

/// Pin bank with settable levels. Everything starts high (released for
/// active-low buttons).
pub struct MockPins {
    levels: [bool; PIN_COUNT],
    unreadable: [bool; PIN_COUNT],
}

impl MockPins {
    pub fn new() -> Self {
        Self {
            levels: [true; PIN_COUNT],
            unreadable: [false; PIN_COUNT],
        }
    }

    pub fn set_level(&mut self, pin: u8, high: bool) {
        self.levels[pin as usize] = high;
    }

    /// Active-low press
    pub fn press(&mut self, pin: u8) {
        self.set_level(pin, false);
    }

    /// Active-low release
    pub fn release(&mut self, pin: u8) {
        self.set_level(pin, true);
    }

    pub fn set_unreadable(&mut self, pin: u8, unreadable: bool) {
        self.unreadable[pin as usize] = unreadable;
    }
}

impl PinBank for MockPins {
    fn is_high(&mut self, pin: u8) -> Option<bool> {
        let idx = pin as usize;
        if idx >= PIN_COUNT || self.unreadable[idx] {
            return None;
        }
        Some(self.levels[idx])
    }
}

// ============================================================================
// Mock Drivers
// ============================================================================

/// Sensor returning configurable readings and recording stored references.
///
/// With `color` set to `None` the calibrated reading is `raw` normalized
/// through `calibration`, which follows the stored references.
pub struct MockSensor {
    pub color: Option<Result<Srgb<u8>, SensorError>>,
    pub raw: Result<RawRgb, SensorError>,
    pub calibration: Calibration,
    pub white: Option<RawRgb>,
    pub black: Option<RawRgb>,
}

impl MockSensor {
    /// Sensor with a fixed calibrated reading
    pub fn new(color: Srgb<u8>) -> Self {
        Self {
            color: Some(Ok(color)),
            raw: Ok(RawRgb::new(60, 70, 80)),
            calibration: Calibration::default(),
            white: None,
            black: None,
        }
    }

    /// Sensor that normalizes its raw reading like a real driver
    pub fn from_raw(raw: RawRgb) -> Self {
        Self {
            color: None,
            raw: Ok(raw),
            ..Self::new(Srgb::new(0, 0, 0))
        }
    }
}

impl ColorSensor for MockSensor {
    fn read_raw_rgb(&mut self) -> Result<RawRgb, SensorError> {
        self.raw
    }

    fn read_calibrated_rgb(&mut self) -> Result<Srgb<u8>, SensorError> {
        match self.color {
            Some(color) => color,
            None => self.raw.map(|raw| self.calibration.apply(raw)),
        }
    }

    fn set_white_reference(&mut self, raw: RawRgb) {
        self.white = Some(raw);
        self.calibration.white = raw;
    }

    fn set_black_reference(&mut self, raw: RawRgb) {
        self.black = Some(raw);
        self.calibration.black = raw;
    }
}

/// Tone output that records every request
pub struct MockTone {
    history: heapless::Vec<(u16, u32), 64>,
    stops: usize,
}

impl MockTone {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
            stops: 0,
        }
    }

    pub fn history(&self) -> &[(u16, u32)] {
        &self.history
    }

    pub fn last(&self) -> Option<(u16, u32)> {
        self.history.last().copied()
    }
}

impl ToneOutput for MockTone {
    fn play(&mut self, frequency_hz: u16, duration_ms: u32) {
        let _ = self.history.push((frequency_hz, duration_ms));
    }

    fn stop(&mut self) {
        self.stops += 1;
    }
}

/// Slot LEDs that record what was shown
pub struct MockSlots {
    shown: heapless::Vec<(u8, Srgb<u8>, u32), 32>,
    clears: usize,
}

impl MockSlots {
    pub fn new() -> Self {
        Self {
            shown: heapless::Vec::new(),
            clears: 0,
        }
    }

    pub fn shown(&self) -> &[(u8, Srgb<u8>, u32)] {
        &self.shown
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl SlotDisplay for MockSlots {
    fn show_slot(&mut self, index: u8, color: Srgb<u8>, duration_ms: u32) {
        let _ = self.shown.push((index, color, duration_ms));
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

/// Two-line text display keeping the last text per line
pub struct MockText {
    lines: [heapless::String<32>; 2],
}

impl MockText {
    pub fn new() -> Self {
        Self {
            lines: [heapless::String::new(), heapless::String::new()],
        }
    }

    pub fn line(&self, line: u8) -> &str {
        self.lines[line as usize].as_str()
    }
}

impl TextDisplay for MockText {
    fn write(&mut self, line: u8, text: &str) {
        if let Some(slot) = self.lines.get_mut(line as usize) {
            slot.clear();
            let _ = slot.push_str(text);
        }
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Color whose hue lands on A4 (440 Hz) in the default scale
pub const A4_COLOR: Srgb<u8> = Srgb::new(0, 255, 221);

pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);
