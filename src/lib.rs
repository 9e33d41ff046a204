#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonEventSource`**: Debounced polled buttons plus one interrupt-latched button, yielding `LogicalAction`s
//! - **`InterruptLatch`**: Single-slot flag shared with the interrupt handler, with its own cooldown
//! - **`DebounceTracker`**: Per-button settle filter, one press event per physical press
//! - **`ComboGestureDetector`**: Two buttons held together to enter calibration
//! - **`PlaybackCoordinator`**: Mode state machine (normal / white / black calibration) driving capture and playback
//! - **`CaptureStack`**: Bounded most-recent-first cache of captured `(note, color)` pairs
//! - **`ColorToNoteMapper`**: Pure RGB to note frequency mapping
//! - **`Device`**: Ties everything together, one `service()` call per loop iteration
//! - **`ColorSensor`**, **`ToneOutput`**, **`SlotDisplay`**, **`TextDisplay`**, **`PinBank`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Colors are `Srgb<u8>` throughout. Frequency 0 always means "nothing to play".

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod buttons;
pub mod calibration;
pub mod combo;
pub mod command;
pub mod config;
pub mod coordinator;
pub mod debounce;
pub mod device;
pub mod drivers;
pub mod latch;
pub mod mapper;
pub mod stack;
pub mod time;
pub mod types;

pub use buttons::{ButtonEventSource, PinBank};
pub use calibration::Calibration;
pub use combo::ComboGestureDetector;
pub use command::{ActionOutcome, LogicalAction};
pub use config::{Config, Cue, Cues, DarknessGate, PlaybackTiming};
pub use coordinator::PlaybackCoordinator;
pub use debounce::{DebounceTracker, Edge};
pub use device::Device;
pub use drivers::{ColorSensor, SlotDisplay, TextDisplay, ToneOutput};
pub use latch::InterruptLatch;
pub use mapper::{ColorToNoteMapper, hue_degrees};
pub use stack::CaptureStack;
pub use time::{Millis, MillisDuration, TimeDuration, TimeInstant, TimeSource};
pub use types::{
    ButtonId, ButtonSpec, CapturedSound, DeviceMode, EngineError, Polarity, RawRgb, SensorError,
    SourceKind,
};

/// Capture stack sized for the four-slot board.
pub type DefaultCaptureStack = CaptureStack<{ config::DEFAULT_STACK_CAPACITY }>;
