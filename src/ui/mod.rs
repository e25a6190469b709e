//! User interface subsystem - OLED display + two physical buttons.
//!
//! The UI loop owns the display and redraws the whole screen whenever the
//! application state changes; button tasks feed it [`ButtonEvent`]s over a
//! channel.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: A (navigate: tap = down, hold = up) and B (select)

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;
pub mod input_logic;
pub mod menu;

use input_logic::PressKind;

/// Physical button events (after debouncing and press classification).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button A tapped: move down.
    Next,
    /// Button A held: move up.
    Prev,
    /// Button B pressed.
    Select,
}

impl ButtonEvent {
    /// Map a press on the navigation button to its event.
    pub fn from_nav(kind: PressKind) -> Self {
        match kind {
            PressKind::Short => ButtonEvent::Next,
            PressKind::Long => ButtonEvent::Prev,
        }
    }
}
