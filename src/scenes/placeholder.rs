//! Text-only screens for features that are not built yet.

use crate::game_state::GameState;
use crate::gfx::font::{FONT_BOLD, FONT_REGULAR};
use core::fmt::Write;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use heapless::String;

/// Tops of the four text rows.
const LINE_Y: [i32; 4] = [4, 18, 32, 46];

pub const HQ_TITLE: &str = "HQ SCENE";
pub const HQ_SUBTITLE: &str = "Coming Soon...";
pub const UPLINK_TITLE: &str = "UPLINK MODE";
pub const UPLINK_SUBTITLE: &str = "Searching...";

const MANUAL_LINES: [&str; 4] = ["MANUAL", "A tap: next", "A hold: back", "B: select"];

/// Status card: what exists of the base so far.
pub fn draw_hq<D>(target: &mut D, game: &GameState) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    FONT_BOLD.draw_centered(target, HQ_TITLE, LINE_Y[0], BinaryColor::On)?;
    FONT_REGULAR.draw_centered(target, HQ_SUBTITLE, LINE_Y[1], BinaryColor::On)?;

    let mut status: String<32> = String::new();
    // 32 bytes always fit "HP 65535/65535 CR 4294967295".
    let _ = write!(status, "HP {}/{} CR {}", game.health, game.max_health, game.creds);
    FONT_REGULAR.draw_centered(target, &status, LINE_Y[2], BinaryColor::On)?;

    if let Some(entry) = game.last_log_entry() {
        FONT_REGULAR.draw_centered(target, entry, LINE_Y[3], BinaryColor::On)?;
    }
    Ok(())
}

pub fn draw_uplink<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    FONT_BOLD.draw_centered(target, UPLINK_TITLE, LINE_Y[1], BinaryColor::On)?;
    FONT_REGULAR.draw_centered(target, UPLINK_SUBTITLE, LINE_Y[2], BinaryColor::On)?;
    Ok(())
}

/// Button help.
pub fn draw_manual<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    FONT_BOLD.draw_centered(target, MANUAL_LINES[0], LINE_Y[0], BinaryColor::On)?;
    for (line, y) in MANUAL_LINES.iter().zip(LINE_Y).skip(1) {
        FONT_REGULAR.draw(target, line, Point::new(8, y), BinaryColor::On)?;
    }
    Ok(())
}

pub fn draw_contact<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    FONT_BOLD.draw_centered(target, "CONTACT", LINE_Y[0], BinaryColor::On)?;
    FONT_REGULAR.draw_centered(target, "Cypher Nomad", LINE_Y[1], BinaryColor::On)?;
    FONT_REGULAR.draw_centered(target, "Protocol", LINE_Y[2], BinaryColor::On)?;
    FONT_REGULAR.draw_centered(
        target,
        concat!("v", env!("CARGO_PKG_VERSION")),
        LINE_Y[3],
        BinaryColor::On,
    )?;
    Ok(())
}
