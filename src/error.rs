//! Unified error type for the firmware.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // UI / Display
    /// I²C transaction to the display failed.
    Display,

    // Audio
    /// A melody with no notes was handed to the sequencer.
    EmptySong,

    /// The buzzer PWM rejected a frequency or duty setting.
    Audio,
}

/// Convenience alias used by the hardware modules.
pub type Result<T> = core::result::Result<T, Error>;
