//! Mode state machine driving capture, playback and calibration.
//!
//! Provides [`PlaybackCoordinator`], which owns the device mode, the volume,
//! the [`CaptureStack`] and the peripheral drivers, and interprets each
//! [`LogicalAction`] according to the current [`DeviceMode`].

use core::fmt::Write;

use heapless::String;
use palette::Srgb;

use crate::command::{ActionOutcome, LogicalAction};
use crate::config::{Config, MAX_VOLUME};
use crate::drivers::{ColorSensor, SlotDisplay, TextDisplay, ToneOutput};
use crate::mapper::ColorToNoteMapper;
use crate::stack::CaptureStack;
use crate::types::{CapturedSound, DeviceMode, RawRgb};

/// Text line used for prompts.
pub const PROMPT_LINE: u8 = 0;

/// Text line used for the last captured color.
pub const COLOR_LINE: u8 = 1;

const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);

/// Interprets button actions against the current device mode.
///
/// In `Normal` mode actions capture, play back and change volume. The combo
/// gesture moves the device into the two calibration phases, during which
/// only the configured confirm action for the current phase is accepted and
/// everything else is ignored without side effects.
///
/// # Type Parameters
/// * `S` - Color sensor driver
/// * `T` - Tone output driver
/// * `V` - Slot LED driver (`()` if absent)
/// * `X` - Text display driver (`()` if absent)
/// * `C` - Capture stack capacity
pub struct PlaybackCoordinator<S, T, V, X, const C: usize>
where
    S: ColorSensor,
    T: ToneOutput,
    V: SlotDisplay,
    X: TextDisplay,
{
    sensor: S,
    tone: T,
    slots: V,
    text: X,
    config: Config,
    mapper: ColorToNoteMapper,
    stack: CaptureStack<C>,
    mode: DeviceMode,
    volume: u8,
}

impl<S, T, V, X, const C: usize> PlaybackCoordinator<S, T, V, X, C>
where
    S: ColorSensor,
    T: ToneOutput,
    V: SlotDisplay,
    X: TextDisplay,
{
    /// Creates a coordinator in `Normal` mode with an empty stack.
    pub fn new(sensor: S, tone: T, slots: V, text: X, config: Config) -> Self {
        Self {
            sensor,
            tone,
            slots,
            text,
            mapper: ColorToNoteMapper::new(config.scale, config.darkness),
            stack: CaptureStack::new(),
            mode: DeviceMode::Normal,
            volume: config.initial_volume.min(MAX_VOLUME),
            config,
        }
    }

    /// Handles one logical action.
    pub fn handle_action(&mut self, action: LogicalAction) -> ActionOutcome {
        match self.mode {
            DeviceMode::Normal => self.handle_normal(action),
            DeviceMode::AwaitingWhiteCalibration if action == self.config.confirm_white => {
                self.store_white_reference()
            }
            DeviceMode::AwaitingBlackCalibration if action == self.config.confirm_black => {
                self.store_black_reference()
            }
            _ => {
                #[cfg(feature = "defmt")]
                defmt::debug!("{} ignored during {}", action, self.mode);
                ActionOutcome::Ignored
            }
        }
    }

    /// Starts calibration. Only accepted from `Normal`.
    ///
    /// Clears the capture stack, since captures taken with the old references
    /// no longer match what the sensor will report.
    pub fn enter_calibration(&mut self) -> ActionOutcome {
        if self.mode != DeviceMode::Normal {
            return ActionOutcome::Ignored;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("entering calibration");

        self.stack.reset();
        self.slots.clear();
        self.tone.beep(self.config.cues.calibration_start);
        self.text.write(PROMPT_LINE, "Place on WHITE");
        self.mode = DeviceMode::AwaitingWhiteCalibration;
        ActionOutcome::CalibrationStarted
    }

    fn handle_normal(&mut self, action: LogicalAction) -> ActionOutcome {
        match action {
            LogicalAction::CaptureColor => self.capture(),
            LogicalAction::PlaySlot(slot) => self.play_slot(slot),
            LogicalAction::VolumeUp => self.set_volume(self.volume.saturating_add(1)),
            LogicalAction::VolumeDown => self.set_volume(self.volume.saturating_sub(1)),
        }
    }

    fn capture(&mut self) -> ActionOutcome {
        let color = match self.sensor.read_calibrated_rgb() {
            Ok(color) => color,
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("capture read failed: {}", _err);
                BLACK
            }
        };

        let sound = CapturedSound::new(self.mapper.map(color), color);
        self.stack.push(sound);
        self.tone.beep(self.config.cues.capture);

        let mut line: String<24> = String::new();
        // 24 bytes fit the longest "R:255 G:255 B:255".
        let _ = write!(line, "R:{} G:{} B:{}", color.red, color.green, color.blue);
        self.text.write(COLOR_LINE, &line);

        if !sound.is_silent() {
            self.slots
                .show_slot(0, color, self.config.cues.capture.duration_ms);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("captured {}", sound);

        ActionOutcome::Captured(sound)
    }

    fn play_slot(&mut self, slot: u8) -> ActionOutcome {
        let sound = self.stack.get(slot as usize);
        if sound.is_silent() {
            self.tone.beep(self.config.cues.empty_slot);
            return ActionOutcome::EmptySlot(slot);
        }

        let duration_ms = self.playback_duration_ms();
        self.tone.play(sound.frequency, duration_ms);
        self.slots.show_slot(slot, sound.color, duration_ms);
        ActionOutcome::Played {
            slot,
            sound,
            duration_ms,
        }
    }

    fn set_volume(&mut self, level: u8) -> ActionOutcome {
        self.volume = level.min(MAX_VOLUME);
        self.tone.beep(self.config.cues.volume);
        ActionOutcome::VolumeChanged(self.volume)
    }

    fn read_raw(&mut self) -> RawRgb {
        self.sensor.read_raw_rgb().unwrap_or_else(|_err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("reference read failed: {}", _err);
            RawRgb::ZERO
        })
    }

    fn store_white_reference(&mut self) -> ActionOutcome {
        let raw = self.read_raw();
        self.sensor.set_white_reference(raw);
        self.tone.beep(self.config.cues.calibration_step);
        self.text.write(PROMPT_LINE, "Place on BLACK");
        self.mode = DeviceMode::AwaitingBlackCalibration;

        #[cfg(feature = "defmt")]
        defmt::info!("white reference {}", raw);

        ActionOutcome::WhiteReferenceStored(raw)
    }

    fn store_black_reference(&mut self) -> ActionOutcome {
        let raw = self.read_raw();
        self.sensor.set_black_reference(raw);
        self.tone.beep(self.config.cues.calibration_done);
        self.text.write(PROMPT_LINE, "Ready");
        self.mode = DeviceMode::Normal;

        #[cfg(feature = "defmt")]
        defmt::info!("black reference {}, calibration done", raw);

        ActionOutcome::BlackReferenceStored(raw)
    }

    /// Note length at the current volume.
    pub fn playback_duration_ms(&self) -> u32 {
        self.config.playback.duration_ms(self.volume)
    }

    /// Returns the current mode.
    pub fn mode(&self) -> DeviceMode {
        self.mode
    }

    /// Returns the current volume, `0..=10`.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Returns the capture stack.
    pub fn stack(&self) -> &CaptureStack<C> {
        &self.stack
    }

    pub fn mapper(&self) -> &ColorToNoteMapper {
        &self.mapper
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn tone(&self) -> &T {
        &self.tone
    }

    pub fn tone_mut(&mut self) -> &mut T {
        &mut self.tone
    }

    pub fn slots(&self) -> &V {
        &self.slots
    }

    pub fn text(&self) -> &X {
        &self.text
    }

    /// Consumes the coordinator and returns its drivers.
    pub fn release(self) -> (S, T, V, X) {
        (self.sensor, self.tone, self.slots, self.text)
    }
}
