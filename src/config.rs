//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, timing parameters, and layout constants
//! live here so they can be tuned in one place.

// Display

/// SSD1306 panel width (pixels).
pub const OLED_WIDTH: i32 = 128;

/// SSD1306 panel height (pixels).
pub const OLED_HEIGHT: i32 = 64;

/// I²C bus frequency for the OLED (kHz): 100, 250 or 400.
pub const OLED_I2C_KHZ: u32 = 400;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*`
// pins are picked in `main.rs`.  Adjust for your custom PCB.
//
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   Buzzer (PWM0)  → P0.28
//   Button A (nav) → P0.11
//   Button B (sel) → P0.12

/// Settle time after power-up before touching the I²C bus (ms).
pub const BOOT_SETTLE_MS: u64 = 200;

// Buttons

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Sampling period while a button is held (ms).
pub const BUTTON_POLL_MS: u64 = 10;

/// A hold strictly longer than this is a long press (ms).
pub const LONG_PRESS_MS: u64 = 400;

/// Capacity of the button event channel.
pub const BUTTON_QUEUE_DEPTH: usize = 4;

// Scenes

/// Walk animation frame period (ms). 125 ms = 8 fps.
pub const ANIMATION_SPEED_MS: u64 = 125;

/// How long the HQ and Uplink placeholders stay up (ms).
pub const SCENE_HOLD_MS: u64 = 2000;

// Intro

/// Contrast increment per fade step.
pub const INTRO_CONTRAST_STEP: u8 = 8;

/// Delay between fade steps (ms).
pub const INTRO_FADE_STEP_MS: u64 = 20;

/// Hold on the full logo before the wordmarks fly in (ms).
pub const INTRO_LOGO_HOLD_MS: u64 = 3000;

/// Fly-in frame period (ms).
pub const INTRO_FLY_FRAME_MS: u64 = 10;

/// Pause after the wordmarks land (ms).
pub const INTRO_SETTLE_MS: u64 = 500;

/// "PRESS TO START" blink half-period (ms).
pub const INTRO_BLINK_MS: u64 = 800;

/// Invert flash when the intro is dismissed (ms).
pub const INTRO_FLASH_MS: u64 = 100;

// Menu layout

/// Height of one menu row (pixels).
pub const MENU_ITEM_HEIGHT: i32 = 18;

/// Top of the selected row; every other row is laid out relative to it.
pub const MENU_SELECTION_Y: i32 = 22;

/// Selection bar geometry.
pub const MENU_BAR_X: i32 = 2;
pub const MENU_BAR_WIDTH: i32 = 118;
pub const MENU_BAR_RADIUS: i32 = 4;

/// Label and icon positions inside a row.
pub const MENU_LABEL_X: i32 = 24;
pub const MENU_LABEL_DY: i32 = 5;
pub const MENU_ICON_X: i32 = 6;
pub const MENU_ICON_DY: i32 = 1;

/// Scroll bar on the right edge.
pub const SCROLL_BAR_X: i32 = 125;
pub const SCROLL_BAR_WIDTH: i32 = 3;
pub const SCROLL_TRACK_X: i32 = 126;
pub const SCROLL_TRACK_SPACING: i32 = 4;
pub const SCROLL_BAR_MIN_HEIGHT: i32 = 4;

// Audio

/// Buzzer duty cycle while a tone sounds (percent).
pub const TONE_DUTY_PERCENT: u16 = 50;

/// Back-off after a buzzer failure before restarting the melody (ms).
pub const AUDIO_RETRY_MS: u64 = 1000;

// Game

/// Number of log entries kept in the game state.
pub const GAME_LOG_CAPACITY: usize = 20;

/// Maximum length of one log entry (bytes).
pub const GAME_LOG_ENTRY_LEN: usize = 24;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oled_bus_speed_is_a_twim_rate() {
        assert!(matches!(OLED_I2C_KHZ, 100 | 250 | 400));
    }
}
