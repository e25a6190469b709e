//! Boot sequence: logo fade-in, wordmark fly-in, blinking start prompt.
//!
//! The pure parts (fade levels, fly-in positions, draw functions) are
//! host-tested; [`play`] strings them together with real delays on the
//! panel.

use crate::assets::{LOGO_CYPHER, LOGO_NOMAD, LOGO_PROTOCOL};
use crate::config::{INTRO_CONTRAST_STEP, OLED_WIDTH};
use crate::gfx::fill_rect;
use crate::gfx::font::FONT_REGULAR;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Top of the wordmark band, vertically centred on the logo.
pub const WORDMARK_Y: i32 = 26;
/// Height of the strip cleared under the moving wordmarks.
pub const WORDMARK_BAND_HEIGHT: i32 = 14;

pub const NOMAD_START_X: i32 = -60;
pub const NOMAD_STOP_X: i32 = 10;
pub const PROTOCOL_START_X: i32 = 128;
pub const PROTOCOL_STOP_X: i32 = 60;
/// Pixels moved per fly-in frame.
pub const FLY_STEP: i32 = 5;

pub const PROMPT: &str = "PRESS TO START";
pub const PROMPT_Y: i32 = 55;

/// Contrast levels for the fade-in, dark to bright.
#[derive(Clone, Debug)]
pub struct ContrastRamp {
    next: Option<u8>,
}

impl ContrastRamp {
    pub fn new() -> Self {
        Self { next: Some(0) }
    }
}

impl Default for ContrastRamp {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for ContrastRamp {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let level = self.next?;
        self.next = level.checked_add(INTRO_CONTRAST_STEP);
        Some(level)
    }
}

/// Positions `(nomad_x, protocol_x)` of the two wordmarks, one per frame.
///
/// Both slide in from off-screen and are clamped at their stops; the last
/// item is exactly the resting position.
#[derive(Clone, Debug)]
pub struct FlyIn {
    left: i32,
    right: i32,
    done: bool,
}

impl FlyIn {
    pub fn new() -> Self {
        Self {
            left: NOMAD_START_X,
            right: PROTOCOL_START_X,
            done: false,
        }
    }
}

impl Default for FlyIn {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FlyIn {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let current = (self.left, self.right);
        if self.left >= NOMAD_STOP_X && self.right <= PROTOCOL_STOP_X {
            self.done = true;
        } else {
            self.left = (self.left + FLY_STEP).min(NOMAD_STOP_X);
            self.right = (self.right - FLY_STEP).max(PROTOCOL_STOP_X);
        }
        Some(current)
    }
}

pub fn draw_logo<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    LOGO_CYPHER.draw_opaque(target, Point::zero())
}

/// Wipe the wordmark band and draw both wordmarks at the given x.
///
/// The wipe also cuts through the logo underneath while they move.
pub fn draw_wordmarks<D>(target: &mut D, nomad_x: i32, protocol_x: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fill_rect(target, 0, WORDMARK_Y, OLED_WIDTH, WORDMARK_BAND_HEIGHT, BinaryColor::Off)?;
    LOGO_NOMAD.draw_opaque(target, Point::new(nomad_x, WORDMARK_Y))?;
    LOGO_PROTOCOL.draw_opaque(target, Point::new(protocol_x, WORDMARK_Y))
}

/// Redraw only the prompt strip at the bottom.
pub fn draw_prompt<D>(target: &mut D, visible: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fill_rect(
        target,
        0,
        PROMPT_Y,
        OLED_WIDTH,
        FONT_REGULAR.height as i32,
        BinaryColor::Off,
    )?;
    if visible {
        FONT_REGULAR.draw_centered(target, PROMPT, PROMPT_Y, BinaryColor::On)?;
    }
    Ok(())
}

/// The settled title screen: logo, landed wordmarks and the prompt.
pub fn draw_title_card<D>(target: &mut D, prompt_visible: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    draw_logo(target)?;
    draw_wordmarks(target, NOMAD_STOP_X, PROTOCOL_STOP_X)?;
    draw_prompt(target, prompt_visible)
}

#[cfg(feature = "embedded")]
pub use self::sequence::play;

#[cfg(feature = "embedded")]
mod sequence {
    use super::*;
    use crate::config::{
        INTRO_FADE_STEP_MS, INTRO_FLY_FRAME_MS, INTRO_LOGO_HOLD_MS, INTRO_SETTLE_MS,
    };
    use crate::error::Result;
    use crate::ui::display::{self, Display};
    use defmt::info;
    use embassy_time::{Duration, Timer};
    use embedded_graphics::prelude::*;

    /// Run the animated part of the boot sequence, up to the start prompt.
    pub async fn play<I2C>(oled: &mut Display<I2C>) -> Result<()>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        info!("Intro: fade in");
        display::set_contrast(oled, 0)?;
        display::show(oled, |d| {
            d.clear(BinaryColor::Off)?;
            draw_logo(d)
        })?;
        for level in ContrastRamp::new() {
            display::set_contrast(oled, level)?;
            Timer::after(Duration::from_millis(INTRO_FADE_STEP_MS)).await;
        }

        Timer::after(Duration::from_millis(INTRO_LOGO_HOLD_MS)).await;

        info!("Intro: fly-in");
        for (nomad_x, protocol_x) in FlyIn::new() {
            display::show(oled, |d| draw_wordmarks(d, nomad_x, protocol_x))?;
            Timer::after(Duration::from_millis(INTRO_FLY_FRAME_MS)).await;
        }

        Timer::after(Duration::from_millis(INTRO_SETTLE_MS)).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::canvas::Canvas;

    #[test]
    fn contrast_ramp_climbs_in_steps_of_eight() {
        let levels: heapless::Vec<u8, 64> = ContrastRamp::new().collect();
        assert_eq!(levels.len(), 32);
        assert_eq!(levels[0], 0);
        assert_eq!(levels[1], 8);
        assert_eq!(*levels.last().unwrap(), 248);
    }

    #[test]
    fn fly_in_lands_on_the_stops() {
        let frames: heapless::Vec<(i32, i32), 32> = FlyIn::new().collect();
        assert_eq!(frames.len(), 15);
        assert_eq!(frames[0], (NOMAD_START_X, PROTOCOL_START_X));
        assert_eq!(frames[13], (5, 63));
        assert_eq!(*frames.last().unwrap(), (NOMAD_STOP_X, PROTOCOL_STOP_X));
    }

    #[test]
    fn fly_in_moves_monotonically() {
        let frames: heapless::Vec<(i32, i32), 32> = FlyIn::new().collect();
        for pair in frames.windows(2) {
            assert!(pair[1].0 >= pair[0].0);
            assert!(pair[1].1 <= pair[0].1);
            assert!(pair[1].0 - pair[0].0 <= FLY_STEP);
        }
    }

    #[test]
    fn wordmark_wipe_stays_in_its_band() {
        let mut canvas = Canvas::lit();
        draw_wordmarks(&mut canvas, NOMAD_START_X, PROTOCOL_START_X).unwrap();
        // Both wordmarks are still off-screen: the band is dark, the rest untouched.
        assert_eq!(canvas.lit_in(0, WORDMARK_Y, 128, WORDMARK_Y + WORDMARK_BAND_HEIGHT), 0);
        assert!(canvas.pixel(0, WORDMARK_Y - 1));
        assert!(canvas.pixel(0, WORDMARK_Y + WORDMARK_BAND_HEIGHT));
    }

    #[test]
    fn prompt_blinks_without_touching_the_logo() {
        let mut shown = Canvas::new();
        draw_title_card(&mut shown, true).unwrap();
        let mut hidden = Canvas::new();
        draw_title_card(&mut hidden, false).unwrap();

        assert!(shown.lit_in(0, PROMPT_Y, 128, 64) > 0);
        assert_eq!(hidden.lit_in(0, PROMPT_Y, 128, 64), 0);
        assert_eq!(shown.lit_in(0, 0, 128, PROMPT_Y), hidden.lit_in(0, 0, 128, PROMPT_Y));
    }

    #[test]
    fn prompt_is_centred() {
        let mut canvas = Canvas::new();
        draw_prompt(&mut canvas, true).unwrap();
        let width = FONT_REGULAR.text_width(PROMPT);
        let left = (128 - width) / 2;
        // 'P' has a full-height stem on its left edge.
        assert!(canvas.pixel(left, PROMPT_Y));
        assert_eq!(canvas.lit_in(0, PROMPT_Y, left, 64), 0);
    }

    #[test]
    fn title_card_shows_both_wordmarks() {
        let mut canvas = Canvas::new();
        draw_title_card(&mut canvas, false).unwrap();
        let band = |x0, x1| canvas.lit_in(x0, WORDMARK_Y, x1, WORDMARK_Y + 13);
        assert!(band(NOMAD_STOP_X, NOMAD_STOP_X + 46) > 0);
        assert!(band(PROTOCOL_STOP_X, PROTOCOL_STOP_X + 61) > 0);
    }
}
