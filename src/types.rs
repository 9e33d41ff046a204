//! Core value types shared across the engine.

use crate::command::LogicalAction;
use palette::Srgb;

/// A captured (note, color) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturedSound {
    /// Note frequency in Hz. Zero means silence / nothing captured.
    pub frequency: u16,

    /// Color the note was derived from.
    pub color: Srgb<u8>,
}

impl CapturedSound {
    /// The zero value: silent, black.
    pub const EMPTY: Self = Self {
        frequency: 0,
        color: Srgb::new(0, 0, 0),
    };

    /// Creates a captured sound.
    #[inline]
    pub const fn new(frequency: u16, color: Srgb<u8>) -> Self {
        Self { frequency, color }
    }

    /// Returns true if this entry has nothing to play.
    #[inline]
    pub fn is_silent(&self) -> bool {
        self.frequency == 0
    }
}

impl Default for CapturedSound {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CapturedSound {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "CapturedSound {{ frequency: {}, color: ({}, {}, {}) }}",
            self.frequency,
            self.color.red,
            self.color.green,
            self.color.blue
        )
    }
}

/// Uncalibrated sensor reading, one pulse period per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawRgb {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl RawRgb {
    /// Neutral reading substituted when the sensor does not answer.
    pub const ZERO: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }
}

/// Electrical level that counts as "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pressed pulls the pin low (input with pull-up).
    ActiveLow,

    /// Pressed drives the pin high (input with pull-down).
    ActiveHigh,
}

impl Polarity {
    /// Returns true if a raw `is_high` reading means the button is pressed.
    #[inline]
    pub fn is_pressed(self, is_high: bool) -> bool {
        match self {
            Polarity::ActiveLow => !is_high,
            Polarity::ActiveHigh => is_high,
        }
    }

    /// Raw level of a released button.
    #[inline]
    pub fn released_level(self) -> bool {
        matches!(self, Polarity::ActiveLow)
    }
}

/// How a button's presses reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceKind {
    /// Sampled every cycle and debounced.
    Polled,

    /// Edge interrupt feeding an [`InterruptLatch`](crate::InterruptLatch).
    Interrupt,
}

/// Static description of one physical button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSpec {
    pub pin: u8,
    pub action: LogicalAction,
    pub polarity: Polarity,
    pub source: SourceKind,
}

impl ButtonSpec {
    /// A debounced, polled button.
    pub const fn polled(pin: u8, action: LogicalAction, polarity: Polarity) -> Self {
        Self {
            pin,
            action,
            polarity,
            source: SourceKind::Polled,
        }
    }

    /// The interrupt-driven button. Interrupt buttons fire on the falling edge
    /// of a pulled-up input, so they are always active-low.
    pub const fn interrupt(pin: u8, action: LogicalAction) -> Self {
        Self {
            pin,
            action,
            polarity: Polarity::ActiveLow,
            source: SourceKind::Interrupt,
        }
    }
}

/// Handle returned by button registration, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub usize);

impl From<usize> for ButtonId {
    fn from(id: usize) -> Self {
        ButtonId(id)
    }
}

impl From<ButtonId> for usize {
    fn from(id: ButtonId) -> Self {
        id.0
    }
}

/// Operating mode of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceMode {
    /// Capture and playback.
    #[default]
    Normal,

    /// Waiting for the operator to confirm the sensor sits on white.
    AwaitingWhiteCalibration,

    /// Waiting for the operator to confirm the sensor sits on black.
    AwaitingBlackCalibration,
}

impl DeviceMode {
    /// Returns true in either calibration phase.
    #[inline]
    pub fn is_calibrating(self) -> bool {
        !matches!(self, DeviceMode::Normal)
    }
}

/// Setup errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// More buttons than the fixed limit, or a second interrupt button.
    CapacityExceeded,

    /// Operation not allowed in the current lifecycle stage.
    InvalidState,
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::CapacityExceeded => write!(f, "button capacity exceeded"),
            EngineError::InvalidState => {
                write!(f, "operation not allowed after setup has finished")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

/// Errors reported by color sensor drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// A pulse measurement exceeded its bound.
    Timeout,

    /// The sensor could not be reached.
    Bus,
}

impl core::fmt::Display for SensorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SensorError::Timeout => write!(f, "sensor read timed out"),
            SensorError::Bus => write!(f, "sensor bus error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SensorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_maps_levels() {
        assert!(Polarity::ActiveLow.is_pressed(false));
        assert!(!Polarity::ActiveLow.is_pressed(true));
        assert!(Polarity::ActiveHigh.is_pressed(true));
        assert!(Polarity::ActiveLow.released_level());
        assert!(!Polarity::ActiveHigh.released_level());
    }

    #[test]
    fn default_captured_sound_is_silent() {
        assert!(CapturedSound::default().is_silent());
        assert_eq!(CapturedSound::default(), CapturedSound::EMPTY);
    }
}
