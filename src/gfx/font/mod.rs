//! Proportional bitmap fonts.
//!
//! Glyphs are MONO_HLSB bitmaps of varying width. Text is laid out left
//! to right with one pixel of spacing; only the set bits of each glyph
//! are written, so text can sit on any background. Dark text on a lit
//! bar uses the polarity-inverting blit in [`Bitmap::draw_in`].

mod tables;

pub use tables::{FONT_BOLD, FONT_REGULAR};

use super::{stride, Bitmap};
use crate::config::OLED_WIDTH;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Gap between consecutive glyphs (pixels).
pub const LETTER_SPACING: i32 = 1;

/// Advance for characters the font has no glyph for (pixels).
pub const MISSING_ADVANCE: i32 = 4;

/// First character code covered by a [`Font`].
const FIRST_CHAR: u32 = 0x20;

/// One character image.
#[derive(Debug)]
pub struct Glyph {
    pub width: u8,
    /// 0 for glyphs with nothing to draw (space).
    pub height: u8,
    pub data: &'static [u8],
}

impl Glyph {
    pub const fn new(width: u8, height: u8, data: &'static [u8]) -> Self {
        assert!(
            data.len() == stride(width as u32) * height as usize,
            "glyph data does not match its dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Advance-only glyph.
    pub const fn blank(width: u8) -> Self {
        Self {
            width,
            height: 0,
            data: &[],
        }
    }

    fn bitmap(&self) -> Bitmap<'static> {
        Bitmap::new(self.data, self.width as u32, self.height as u32)
    }
}

/// A set of glyphs for the printable ASCII range.
pub struct Font {
    /// Cell height; every drawn glyph is this tall.
    pub height: u8,
    glyphs: &'static [Glyph],
}

impl Font {
    pub const fn new(height: u8, glyphs: &'static [Glyph]) -> Self {
        Self { height, glyphs }
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        let index = (ch as u32).checked_sub(FIRST_CHAR)?;
        self.glyphs.get(index as usize)
    }

    /// Horizontal distance the cursor moves for `ch`.
    pub fn advance(&self, ch: char) -> i32 {
        match self.glyph(ch) {
            Some(glyph) => glyph.width as i32 + LETTER_SPACING,
            None => MISSING_ADVANCE,
        }
    }

    /// Rendered width of `text`, without trailing spacing.
    pub fn text_width(&self, text: &str) -> i32 {
        let total: i32 = text.chars().map(|ch| self.advance(ch)).sum();
        match text.chars().last() {
            Some(last) if self.glyph(last).is_some() => total - LETTER_SPACING,
            _ => total,
        }
    }

    /// Draw `text` with the top of the cell at `origin`.
    ///
    /// Returns the cursor position after the last character.
    pub fn draw<D>(
        &self,
        target: &mut D,
        text: &str,
        origin: Point,
        color: BinaryColor,
    ) -> Result<Point, D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let mut cursor = origin;
        for ch in text.chars() {
            if let Some(glyph) = self.glyph(ch) {
                if glyph.height > 0 {
                    glyph.bitmap().draw_in(target, cursor, color)?;
                }
            }
            cursor.x += self.advance(ch);
        }
        Ok(cursor)
    }

    /// Draw `text` horizontally centred on the screen.
    pub fn draw_centered<D>(
        &self,
        target: &mut D,
        text: &str,
        y: i32,
        color: BinaryColor,
    ) -> Result<Point, D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let x = (OLED_WIDTH - self.text_width(text)) / 2;
        self.draw(target, text, Point::new(x, y), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::canvas::Canvas;
    use crate::gfx::fill_rect;

    #[test]
    fn covers_printable_ascii() {
        for code in 0x20u8..=0x7e {
            assert!(FONT_REGULAR.glyph(code as char).is_some(), "{}", code);
            assert!(FONT_BOLD.glyph(code as char).is_some(), "{}", code);
        }
        assert!(FONT_REGULAR.glyph('\u{7f}').is_none());
        assert!(FONT_REGULAR.glyph('\n').is_none());
        assert!(FONT_REGULAR.glyph('é').is_none());
    }

    #[test]
    fn drawn_glyphs_fill_the_cell() {
        for font in [&FONT_REGULAR, &FONT_BOLD] {
            for code in 0x21u8..=0x7e {
                let glyph = font.glyph(code as char).unwrap();
                assert_eq!(glyph.height, font.height);
                assert!(glyph.width > 0);
            }
        }
    }

    #[test]
    fn space_is_advance_only() {
        let space = FONT_REGULAR.glyph(' ').unwrap();
        assert_eq!(space.height, 0);
        assert_eq!(FONT_REGULAR.advance(' '), 4);
    }

    #[test]
    fn bold_is_one_column_wider() {
        let regular = FONT_REGULAR.glyph('A').unwrap();
        let bold = FONT_BOLD.glyph('A').unwrap();
        assert_eq!(bold.width, regular.width + 1);
    }

    #[test]
    fn advance_and_width() {
        // 'H' and 'Q' are 4 px wide.
        assert_eq!(FONT_REGULAR.advance('H'), 5);
        assert_eq!(FONT_REGULAR.text_width("HQ"), 9);
        assert_eq!(FONT_REGULAR.text_width(""), 0);
        assert_eq!(FONT_REGULAR.advance('\u{2603}'), MISSING_ADVANCE);
        assert_eq!(FONT_REGULAR.text_width("H\u{2603}"), 5 + MISSING_ADVANCE);
    }

    #[test]
    fn draw_returns_cursor_after_text() {
        let mut canvas = Canvas::new();
        let end = FONT_REGULAR
            .draw(&mut canvas, "HQ", Point::new(3, 7), BinaryColor::On)
            .unwrap();
        assert_eq!(end, Point::new(3 + 10, 7));
    }

    #[test]
    fn missing_characters_draw_nothing() {
        let mut canvas = Canvas::new();
        let end = FONT_REGULAR
            .draw(&mut canvas, "\u{2603}\u{2603}", Point::new(0, 0), BinaryColor::On)
            .unwrap();
        assert_eq!(end.x, 2 * MISSING_ADVANCE);
        assert_eq!(canvas.lit_count(), 0);
    }

    #[test]
    fn light_text_only_touches_glyph_bits() {
        let mut canvas = Canvas::new();
        FONT_REGULAR
            .draw(&mut canvas, "H", Point::new(0, 0), BinaryColor::On)
            .unwrap();
        // 'H': two 7 px stems plus a 2 px crossbar.
        assert_eq!(canvas.lit_count(), 16);
        assert!(canvas.pixel(0, 0));
        assert!(canvas.pixel(3, 6));
        assert!(!canvas.pixel(1, 0));
    }

    #[test]
    fn dark_text_cuts_into_lit_bar() {
        let mut canvas = Canvas::new();
        fill_rect(&mut canvas, 0, 0, 20, 10, BinaryColor::On).unwrap();
        FONT_REGULAR
            .draw(&mut canvas, "H", Point::new(0, 0), BinaryColor::Off)
            .unwrap();
        assert_eq!(canvas.lit_count(), 20 * 10 - 16);
        assert!(!canvas.pixel(0, 0));
        assert!(canvas.pixel(1, 0));
        // Descender rows of the cell are untouched.
        assert!(canvas.pixel(0, 8));
    }

    #[test]
    fn centered_text_is_symmetric() {
        let mut canvas = Canvas::new();
        FONT_REGULAR
            .draw_centered(&mut canvas, "HH", 0, BinaryColor::On)
            .unwrap();
        // "HH" is 9 px wide -> starts at (128 - 9) / 2 = 59.
        assert_eq!(canvas.row_span(0), Some((59, 67)));
    }
}
