//! Built-in glyph tables, ASCII 32..=126 in MONO_HLSB rows.
//!
//! Every drawn glyph spans the full 9 px cell: 7 px cap height plus a 2 px
//! descender, so mixed glyphs share one baseline.

use super::{Font, Glyph};

/// Thin proportional face used for body text and menu labels.
pub static FONT_REGULAR: Font = Font::new(9, &REGULAR_GLYPHS);

/// [`FONT_REGULAR`] thickened by one column.
pub static FONT_BOLD: Font = Font::new(9, &BOLD_GLYPHS);

static REGULAR_GLYPHS: [Glyph; 95] = [
    Glyph::blank(3), // ' '
    Glyph::new(1, 9, &[0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x80, 0x00, 0x00]), // '!'
    Glyph::new(3, 9, &[0xa0, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]), // '"'
    Glyph::new(5, 9, &[0x50, 0xf8, 0x50, 0x50, 0xf8, 0x50, 0x00, 0x00, 0x00]), // '#'
    Glyph::new(5, 9, &[0x70, 0xa0, 0x70, 0x28, 0x28, 0xf0, 0x20, 0x00, 0x00]), // '$'
    Glyph::new(5, 9, &[0xc8, 0xd0, 0x20, 0x40, 0x98, 0x18, 0x00, 0x00, 0x00]), // '%'
    Glyph::new(5, 9, &[0x60, 0x90, 0x60, 0xa8, 0x90, 0x68, 0x00, 0x00, 0x00]), // '&'
    Glyph::new(1, 9, &[0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]), // '\''
    Glyph::new(2, 9, &[0x40, 0x80, 0x80, 0x80, 0x80, 0x80, 0x40, 0x00, 0x00]), // '('
    Glyph::new(2, 9, &[0x80, 0x40, 0x40, 0x40, 0x40, 0x40, 0x80, 0x00, 0x00]), // ')'
    Glyph::new(3, 9, &[0x00, 0xa0, 0x40, 0xe0, 0x40, 0xa0, 0x00, 0x00, 0x00]), // '*'
    Glyph::new(3, 9, &[0x00, 0x00, 0x40, 0xe0, 0x40, 0x00, 0x00, 0x00, 0x00]), // '+'
    Glyph::new(2, 9, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x40, 0x80, 0x00]), // ','
    Glyph::new(3, 9, &[0x00, 0x00, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x00]), // '-'
    Glyph::new(1, 9, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00]), // '.'
    Glyph::new(4, 9, &[0x10, 0x10, 0x20, 0x40, 0x80, 0x80, 0x00, 0x00, 0x00]), // '/'
    Glyph::new(4, 9, &[0x60, 0x90, 0xb0, 0xd0, 0x90, 0x90, 0x60, 0x00, 0x00]), // '0'
    Glyph::new(2, 9, &[0x40, 0xc0, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00]), // '1'
    Glyph::new(4, 9, &[0x60, 0x90, 0x10, 0x20, 0x40, 0x80, 0xf0, 0x00, 0x00]), // '2'
    Glyph::new(4, 9, &[0xe0, 0x10, 0x10, 0x60, 0x10, 0x10, 0xe0, 0x00, 0x00]), // '3'
    Glyph::new(4, 9, &[0x20, 0x60, 0xa0, 0xa0, 0xf0, 0x20, 0x20, 0x00, 0x00]), // '4'
    Glyph::new(4, 9, &[0xf0, 0x80, 0xe0, 0x10, 0x10, 0x90, 0x60, 0x00, 0x00]), // '5'
    Glyph::new(4, 9, &[0x60, 0x80, 0x80, 0xe0, 0x90, 0x90, 0x60, 0x00, 0x00]), // '6'
    Glyph::new(4, 9, &[0xf0, 0x10, 0x20, 0x20, 0x40, 0x40, 0x40, 0x00, 0x00]), // '7'
    Glyph::new(4, 9, &[0x60, 0x90, 0x90, 0x60, 0x90, 0x90, 0x60, 0x00, 0x00]), // '8'
    Glyph::new(4, 9, &[0x60, 0x90, 0x90, 0x70, 0x10, 0x10, 0x60, 0x00, 0x00]), // '9'
    Glyph::new(1, 9, &[0x00, 0x00, 0x80, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00]), // ':'
    Glyph::new(2, 9, &[0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x40, 0x80, 0x00]), // ';'
    Glyph::new(3, 9, &[0x00, 0x20, 0x40, 0x80, 0x40, 0x20, 0x00, 0x00, 0x00]), // '<'
    Glyph::new(3, 9, &[0x00, 0x00, 0xe0, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x00]), // '='
    Glyph::new(3, 9, &[0x00, 0x80, 0x40, 0x20, 0x40, 0x80, 0x00, 0x00, 0x00]), // '>'
    Glyph::new(4, 9, &[0x60, 0x90, 0x10, 0x20, 0x40, 0x00, 0x40, 0x00, 0x00]), // '?'
    Glyph::new(5, 9, &[0x70, 0x88, 0xb8, 0xa8, 0xb8, 0x80, 0x70, 0x00, 0x00]), // '@'
    Glyph::new(4, 9, &[0x60, 0x90, 0x90, 0xf0, 0x90, 0x90, 0x90, 0x00, 0x00]), // 'A'
    Glyph::new(4, 9, &[0xe0, 0x90, 0x90, 0xe0, 0x90, 0x90, 0xe0, 0x00, 0x00]), // 'B'
    Glyph::new(4, 9, &[0x60, 0x90, 0x80, 0x80, 0x80, 0x90, 0x60, 0x00, 0x00]), // 'C'
    Glyph::new(4, 9, &[0xe0, 0x90, 0x90, 0x90, 0x90, 0x90, 0xe0, 0x00, 0x00]), // 'D'
    Glyph::new(4, 9, &[0xf0, 0x80, 0x80, 0xe0, 0x80, 0x80, 0xf0, 0x00, 0x00]), // 'E'
    Glyph::new(4, 9, &[0xf0, 0x80, 0x80, 0xe0, 0x80, 0x80, 0x80, 0x00, 0x00]), // 'F'
    Glyph::new(4, 9, &[0x60, 0x90, 0x80, 0xb0, 0x90, 0x90, 0x70, 0x00, 0x00]), // 'G'
    Glyph::new(4, 9, &[0x90, 0x90, 0x90, 0xf0, 0x90, 0x90, 0x90, 0x00, 0x00]), // 'H'
    Glyph::new(3, 9, &[0xe0, 0x40, 0x40, 0x40, 0x40, 0x40, 0xe0, 0x00, 0x00]), // 'I'
    Glyph::new(4, 9, &[0x30, 0x10, 0x10, 0x10, 0x10, 0x90, 0x60, 0x00, 0x00]), // 'J'
    Glyph::new(4, 9, &[0x90, 0xa0, 0xc0, 0x80, 0xc0, 0xa0, 0x90, 0x00, 0x00]), // 'K'
    Glyph::new(4, 9, &[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xf0, 0x00, 0x00]), // 'L'
    Glyph::new(5, 9, &[0x88, 0xd8, 0xa8, 0xa8, 0x88, 0x88, 0x88, 0x00, 0x00]), // 'M'
    Glyph::new(4, 9, &[0x90, 0xd0, 0xd0, 0xb0, 0xb0, 0x90, 0x90, 0x00, 0x00]), // 'N'
    Glyph::new(4, 9, &[0x60, 0x90, 0x90, 0x90, 0x90, 0x90, 0x60, 0x00, 0x00]), // 'O'
    Glyph::new(4, 9, &[0xe0, 0x90, 0x90, 0xe0, 0x80, 0x80, 0x80, 0x00, 0x00]), // 'P'
    Glyph::new(4, 9, &[0x60, 0x90, 0x90, 0x90, 0xb0, 0x90, 0x60, 0x10, 0x00]), // 'Q'
    Glyph::new(4, 9, &[0xe0, 0x90, 0x90, 0xe0, 0xa0, 0x90, 0x90, 0x00, 0x00]), // 'R'
    Glyph::new(4, 9, &[0x70, 0x80, 0x80, 0x60, 0x10, 0x10, 0xe0, 0x00, 0x00]), // 'S'
    Glyph::new(5, 9, &[0xf8, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00]), // 'T'
    Glyph::new(4, 9, &[0x90, 0x90, 0x90, 0x90, 0x90, 0x90, 0x60, 0x00, 0x00]), // 'U'
    Glyph::new(5, 9, &[0x88, 0x88, 0x88, 0x88, 0x50, 0x50, 0x20, 0x00, 0x00]), // 'V'
    Glyph::new(5, 9, &[0x88, 0x88, 0x88, 0xa8, 0xa8, 0xd8, 0x88, 0x00, 0x00]), // 'W'
    Glyph::new(5, 9, &[0x88, 0x88, 0x50, 0x20, 0x50, 0x88, 0x88, 0x00, 0x00]), // 'X'
    Glyph::new(5, 9, &[0x88, 0x88, 0x50, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00]), // 'Y'
    Glyph::new(4, 9, &[0xf0, 0x10, 0x20, 0x40, 0x80, 0x80, 0xf0, 0x00, 0x00]), // 'Z'
    Glyph::new(2, 9, &[0xc0, 0x80, 0x80, 0x80, 0x80, 0x80, 0xc0, 0x00, 0x00]), // '['
    Glyph::new(4, 9, &[0x80, 0x80, 0x40, 0x20, 0x10, 0x10, 0x00, 0x00, 0x00]), // '\\'
    Glyph::new(2, 9, &[0xc0, 0x40, 0x40, 0x40, 0x40, 0x40, 0xc0, 0x00, 0x00]), // ']'
    Glyph::new(3, 9, &[0x40, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]), // '^'
    Glyph::new(4, 9, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf0, 0x00, 0x00]), // '_'
    Glyph::new(2, 9, &[0x80, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]), // '`'
    Glyph::new(4, 9, &[0x00, 0x00, 0x70, 0x90, 0x90, 0x90, 0x70, 0x00, 0x00]), // 'a'
    Glyph::new(4, 9, &[0x80, 0x80, 0xe0, 0x90, 0x90, 0x90, 0xe0, 0x00, 0x00]), // 'b'
    Glyph::new(3, 9, &[0x00, 0x00, 0x60, 0x80, 0x80, 0x80, 0x60, 0x00, 0x00]), // 'c'
    Glyph::new(4, 9, &[0x10, 0x10, 0x70, 0x90, 0x90, 0x90, 0x70, 0x00, 0x00]), // 'd'
    Glyph::new(4, 9, &[0x00, 0x00, 0x60, 0x90, 0xf0, 0x80, 0x70, 0x00, 0x00]), // 'e'
    Glyph::new(3, 9, &[0x60, 0x80, 0xe0, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00]), // 'f'
    Glyph::new(4, 9, &[0x00, 0x00, 0x70, 0x90, 0x90, 0x70, 0x10, 0xe0, 0x00]), // 'g'
    Glyph::new(4, 9, &[0x80, 0x80, 0xe0, 0x90, 0x90, 0x90, 0x90, 0x00, 0x00]), // 'h'
    Glyph::new(1, 9, &[0x80, 0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00]), // 'i'
    Glyph::new(2, 9, &[0x40, 0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x80, 0x00]), // 'j'
    Glyph::new(3, 9, &[0x80, 0x80, 0xa0, 0xc0, 0x80, 0xc0, 0xa0, 0x00, 0x00]), // 'k'
    Glyph::new(1, 9, &[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00]), // 'l'
    Glyph::new(5, 9, &[0x00, 0x00, 0xf0, 0xa8, 0xa8, 0xa8, 0xa8, 0x00, 0x00]), // 'm'
    Glyph::new(4, 9, &[0x00, 0x00, 0xe0, 0x90, 0x90, 0x90, 0x90, 0x00, 0x00]), // 'n'
    Glyph::new(4, 9, &[0x00, 0x00, 0x60, 0x90, 0x90, 0x90, 0x60, 0x00, 0x00]), // 'o'
    Glyph::new(4, 9, &[0x00, 0x00, 0xe0, 0x90, 0x90, 0xe0, 0x80, 0x80, 0x00]), // 'p'
    Glyph::new(4, 9, &[0x00, 0x00, 0x70, 0x90, 0x90, 0x70, 0x10, 0x10, 0x00]), // 'q'
    Glyph::new(3, 9, &[0x00, 0x00, 0xa0, 0xc0, 0x80, 0x80, 0x80, 0x00, 0x00]), // 'r'
    Glyph::new(4, 9, &[0x00, 0x00, 0x70, 0x80, 0x60, 0x10, 0xe0, 0x00, 0x00]), // 's'
    Glyph::new(3, 9, &[0x80, 0x80, 0xe0, 0x80, 0x80, 0x80, 0x60, 0x00, 0x00]), // 't'
    Glyph::new(4, 9, &[0x00, 0x00, 0x90, 0x90, 0x90, 0x90, 0x70, 0x00, 0x00]), // 'u'
    Glyph::new(3, 9, &[0x00, 0x00, 0xa0, 0xa0, 0xa0, 0xa0, 0x40, 0x00, 0x00]), // 'v'
    Glyph::new(5, 9, &[0x00, 0x00, 0x88, 0xa8, 0xa8, 0xa8, 0x50, 0x00, 0x00]), // 'w'
    Glyph::new(3, 9, &[0x00, 0x00, 0xa0, 0xa0, 0x40, 0xa0, 0xa0, 0x00, 0x00]), // 'x'
    Glyph::new(4, 9, &[0x00, 0x00, 0x90, 0x90, 0x90, 0x70, 0x10, 0x60, 0x00]), // 'y'
    Glyph::new(4, 9, &[0x00, 0x00, 0xf0, 0x20, 0x40, 0x80, 0xf0, 0x00, 0x00]), // 'z'
    Glyph::new(3, 9, &[0x20, 0x40, 0x40, 0x80, 0x40, 0x40, 0x20, 0x00, 0x00]), // '{'
    Glyph::new(1, 9, &[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00]), // '|'
    Glyph::new(3, 9, &[0x80, 0x40, 0x40, 0x20, 0x40, 0x40, 0x80, 0x00, 0x00]), // '}'
    Glyph::new(4, 9, &[0x00, 0x00, 0x50, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00]), // '~'
];

static BOLD_GLYPHS: [Glyph; 95] = [
    Glyph::blank(4), // ' '
    Glyph::new(2, 9, &[0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x00, 0xc0, 0x00, 0x00]), // '!'
    Glyph::new(4, 9, &[0xf0, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]), // '"'
    Glyph::new(6, 9, &[0x78, 0xfc, 0x78, 0x78, 0xfc, 0x78, 0x00, 0x00, 0x00]), // '#'
    Glyph::new(6, 9, &[0x78, 0xf0, 0x78, 0x3c, 0x3c, 0xf8, 0x30, 0x00, 0x00]), // '$'
    Glyph::new(6, 9, &[0xec, 0xf8, 0x30, 0x60, 0xdc, 0x1c, 0x00, 0x00, 0x00]), // '%'
    Glyph::new(6, 9, &[0x70, 0xd8, 0x70, 0xfc, 0xd8, 0x7c, 0x00, 0x00, 0x00]), // '&'
    Glyph::new(2, 9, &[0xc0, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]), // '\''
    Glyph::new(3, 9, &[0x60, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x60, 0x00, 0x00]), // '('
    Glyph::new(3, 9, &[0xc0, 0x60, 0x60, 0x60, 0x60, 0x60, 0xc0, 0x00, 0x00]), // ')'
    Glyph::new(4, 9, &[0x00, 0xf0, 0x60, 0xf0, 0x60, 0xf0, 0x00, 0x00, 0x00]), // '*'
    Glyph::new(4, 9, &[0x00, 0x00, 0x60, 0xf0, 0x60, 0x00, 0x00, 0x00, 0x00]), // '+'
    Glyph::new(3, 9, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0xc0, 0x00]), // ','
    Glyph::new(4, 9, &[0x00, 0x00, 0x00, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00]), // '-'
    Glyph::new(2, 9, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00]), // '.'
    Glyph::new(5, 9, &[0x18, 0x18, 0x30, 0x60, 0xc0, 0xc0, 0x00, 0x00, 0x00]), // '/'
    Glyph::new(5, 9, &[0x70, 0xd8, 0xf8, 0xf8, 0xd8, 0xd8, 0x70, 0x00, 0x00]), // '0'
    Glyph::new(3, 9, &[0x60, 0xe0, 0x60, 0x60, 0x60, 0x60, 0x60, 0x00, 0x00]), // '1'
    Glyph::new(5, 9, &[0x70, 0xd8, 0x18, 0x30, 0x60, 0xc0, 0xf8, 0x00, 0x00]), // '2'
    Glyph::new(5, 9, &[0xf0, 0x18, 0x18, 0x70, 0x18, 0x18, 0xf0, 0x00, 0x00]), // '3'
    Glyph::new(5, 9, &[0x30, 0x70, 0xf0, 0xf0, 0xf8, 0x30, 0x30, 0x00, 0x00]), // '4'
    Glyph::new(5, 9, &[0xf8, 0xc0, 0xf0, 0x18, 0x18, 0xd8, 0x70, 0x00, 0x00]), // '5'
    Glyph::new(5, 9, &[0x70, 0xc0, 0xc0, 0xf0, 0xd8, 0xd8, 0x70, 0x00, 0x00]), // '6'
    Glyph::new(5, 9, &[0xf8, 0x18, 0x30, 0x30, 0x60, 0x60, 0x60, 0x00, 0x00]), // '7'
    Glyph::new(5, 9, &[0x70, 0xd8, 0xd8, 0x70, 0xd8, 0xd8, 0x70, 0x00, 0x00]), // '8'
    Glyph::new(5, 9, &[0x70, 0xd8, 0xd8, 0x78, 0x18, 0x18, 0x70, 0x00, 0x00]), // '9'
    Glyph::new(2, 9, &[0x00, 0x00, 0xc0, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00]), // ':'
    Glyph::new(3, 9, &[0x00, 0x00, 0x60, 0x00, 0x00, 0x60, 0x60, 0xc0, 0x00]), // ';'
    Glyph::new(4, 9, &[0x00, 0x30, 0x60, 0xc0, 0x60, 0x30, 0x00, 0x00, 0x00]), // '<'
    Glyph::new(4, 9, &[0x00, 0x00, 0xf0, 0x00, 0xf0, 0x00, 0x00, 0x00, 0x00]), // '='
    Glyph::new(4, 9, &[0x00, 0xc0, 0x60, 0x30, 0x60, 0xc0, 0x00, 0x00, 0x00]), // '>'
    Glyph::new(5, 9, &[0x70, 0xd8, 0x18, 0x30, 0x60, 0x00, 0x60, 0x00, 0x00]), // '?'
    Glyph::new(6, 9, &[0x78, 0xcc, 0xfc, 0xfc, 0xfc, 0xc0, 0x78, 0x00, 0x00]), // '@'
    Glyph::new(5, 9, &[0x70, 0xd8, 0xd8, 0xf8, 0xd8, 0xd8, 0xd8, 0x00, 0x00]), // 'A'
    Glyph::new(5, 9, &[0xf0, 0xd8, 0xd8, 0xf0, 0xd8, 0xd8, 0xf0, 0x00, 0x00]), // 'B'
    Glyph::new(5, 9, &[0x70, 0xd8, 0xc0, 0xc0, 0xc0, 0xd8, 0x70, 0x00, 0x00]), // 'C'
    Glyph::new(5, 9, &[0xf0, 0xd8, 0xd8, 0xd8, 0xd8, 0xd8, 0xf0, 0x00, 0x00]), // 'D'
    Glyph::new(5, 9, &[0xf8, 0xc0, 0xc0, 0xf0, 0xc0, 0xc0, 0xf8, 0x00, 0x00]), // 'E'
    Glyph::new(5, 9, &[0xf8, 0xc0, 0xc0, 0xf0, 0xc0, 0xc0, 0xc0, 0x00, 0x00]), // 'F'
    Glyph::new(5, 9, &[0x70, 0xd8, 0xc0, 0xf8, 0xd8, 0xd8, 0x78, 0x00, 0x00]), // 'G'
    Glyph::new(5, 9, &[0xd8, 0xd8, 0xd8, 0xf8, 0xd8, 0xd8, 0xd8, 0x00, 0x00]), // 'H'
    Glyph::new(4, 9, &[0xf0, 0x60, 0x60, 0x60, 0x60, 0x60, 0xf0, 0x00, 0x00]), // 'I'
    Glyph::new(5, 9, &[0x38, 0x18, 0x18, 0x18, 0x18, 0xd8, 0x70, 0x00, 0x00]), // 'J'
    Glyph::new(5, 9, &[0xd8, 0xf0, 0xe0, 0xc0, 0xe0, 0xf0, 0xd8, 0x00, 0x00]), // 'K'
    Glyph::new(5, 9, &[0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xf8, 0x00, 0x00]), // 'L'
    Glyph::new(6, 9, &[0xcc, 0xfc, 0xfc, 0xfc, 0xcc, 0xcc, 0xcc, 0x00, 0x00]), // 'M'
    Glyph::new(5, 9, &[0xd8, 0xf8, 0xf8, 0xf8, 0xf8, 0xd8, 0xd8, 0x00, 0x00]), // 'N'
    Glyph::new(5, 9, &[0x70, 0xd8, 0xd8, 0xd8, 0xd8, 0xd8, 0x70, 0x00, 0x00]), // 'O'
    Glyph::new(5, 9, &[0xf0, 0xd8, 0xd8, 0xf0, 0xc0, 0xc0, 0xc0, 0x00, 0x00]), // 'P'
    Glyph::new(5, 9, &[0x70, 0xd8, 0xd8, 0xd8, 0xf8, 0xd8, 0x70, 0x18, 0x00]), // 'Q'
    Glyph::new(5, 9, &[0xf0, 0xd8, 0xd8, 0xf0, 0xf0, 0xd8, 0xd8, 0x00, 0x00]), // 'R'
    Glyph::new(5, 9, &[0x78, 0xc0, 0xc0, 0x70, 0x18, 0x18, 0xf0, 0x00, 0x00]), // 'S'
    Glyph::new(6, 9, &[0xfc, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00]), // 'T'
    Glyph::new(5, 9, &[0xd8, 0xd8, 0xd8, 0xd8, 0xd8, 0xd8, 0x70, 0x00, 0x00]), // 'U'
    Glyph::new(6, 9, &[0xcc, 0xcc, 0xcc, 0xcc, 0x78, 0x78, 0x30, 0x00, 0x00]), // 'V'
    Glyph::new(6, 9, &[0xcc, 0xcc, 0xcc, 0xfc, 0xfc, 0xfc, 0xcc, 0x00, 0x00]), // 'W'
    Glyph::new(6, 9, &[0xcc, 0xcc, 0x78, 0x30, 0x78, 0xcc, 0xcc, 0x00, 0x00]), // 'X'
    Glyph::new(6, 9, &[0xcc, 0xcc, 0x78, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00]), // 'Y'
    Glyph::new(5, 9, &[0xf8, 0x18, 0x30, 0x60, 0xc0, 0xc0, 0xf8, 0x00, 0x00]), // 'Z'
    Glyph::new(3, 9, &[0xe0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xe0, 0x00, 0x00]), // '['
    Glyph::new(5, 9, &[0xc0, 0xc0, 0x60, 0x30, 0x18, 0x18, 0x00, 0x00, 0x00]), // '\\'
    Glyph::new(3, 9, &[0xe0, 0x60, 0x60, 0x60, 0x60, 0x60, 0xe0, 0x00, 0x00]), // ']'
    Glyph::new(4, 9, &[0x60, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]), // '^'
    Glyph::new(5, 9, &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf8, 0x00, 0x00]), // '_'
    Glyph::new(3, 9, &[0xc0, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]), // '`'
    Glyph::new(5, 9, &[0x00, 0x00, 0x78, 0xd8, 0xd8, 0xd8, 0x78, 0x00, 0x00]), // 'a'
    Glyph::new(5, 9, &[0xc0, 0xc0, 0xf0, 0xd8, 0xd8, 0xd8, 0xf0, 0x00, 0x00]), // 'b'
    Glyph::new(4, 9, &[0x00, 0x00, 0x70, 0xc0, 0xc0, 0xc0, 0x70, 0x00, 0x00]), // 'c'
    Glyph::new(5, 9, &[0x18, 0x18, 0x78, 0xd8, 0xd8, 0xd8, 0x78, 0x00, 0x00]), // 'd'
    Glyph::new(5, 9, &[0x00, 0x00, 0x70, 0xd8, 0xf8, 0xc0, 0x78, 0x00, 0x00]), // 'e'
    Glyph::new(4, 9, &[0x70, 0xc0, 0xf0, 0xc0, 0xc0, 0xc0, 0xc0, 0x00, 0x00]), // 'f'
    Glyph::new(5, 9, &[0x00, 0x00, 0x78, 0xd8, 0xd8, 0x78, 0x18, 0xf0, 0x00]), // 'g'
    Glyph::new(5, 9, &[0xc0, 0xc0, 0xf0, 0xd8, 0xd8, 0xd8, 0xd8, 0x00, 0x00]), // 'h'
    Glyph::new(2, 9, &[0xc0, 0x00, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x00, 0x00]), // 'i'
    Glyph::new(3, 9, &[0x60, 0x00, 0x60, 0x60, 0x60, 0x60, 0x60, 0xc0, 0x00]), // 'j'
    Glyph::new(4, 9, &[0xc0, 0xc0, 0xf0, 0xe0, 0xc0, 0xe0, 0xf0, 0x00, 0x00]), // 'k'
    Glyph::new(2, 9, &[0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x00, 0x00]), // 'l'
    Glyph::new(6, 9, &[0x00, 0x00, 0xf8, 0xfc, 0xfc, 0xfc, 0xfc, 0x00, 0x00]), // 'm'
    Glyph::new(5, 9, &[0x00, 0x00, 0xf0, 0xd8, 0xd8, 0xd8, 0xd8, 0x00, 0x00]), // 'n'
    Glyph::new(5, 9, &[0x00, 0x00, 0x70, 0xd8, 0xd8, 0xd8, 0x70, 0x00, 0x00]), // 'o'
    Glyph::new(5, 9, &[0x00, 0x00, 0xf0, 0xd8, 0xd8, 0xf0, 0xc0, 0xc0, 0x00]), // 'p'
    Glyph::new(5, 9, &[0x00, 0x00, 0x78, 0xd8, 0xd8, 0x78, 0x18, 0x18, 0x00]), // 'q'
    Glyph::new(4, 9, &[0x00, 0x00, 0xf0, 0xe0, 0xc0, 0xc0, 0xc0, 0x00, 0x00]), // 'r'
    Glyph::new(5, 9, &[0x00, 0x00, 0x78, 0xc0, 0x70, 0x18, 0xf0, 0x00, 0x00]), // 's'
    Glyph::new(4, 9, &[0xc0, 0xc0, 0xf0, 0xc0, 0xc0, 0xc0, 0x70, 0x00, 0x00]), // 't'
    Glyph::new(5, 9, &[0x00, 0x00, 0xd8, 0xd8, 0xd8, 0xd8, 0x78, 0x00, 0x00]), // 'u'
    Glyph::new(4, 9, &[0x00, 0x00, 0xf0, 0xf0, 0xf0, 0xf0, 0x60, 0x00, 0x00]), // 'v'
    Glyph::new(6, 9, &[0x00, 0x00, 0xcc, 0xfc, 0xfc, 0xfc, 0x78, 0x00, 0x00]), // 'w'
    Glyph::new(4, 9, &[0x00, 0x00, 0xf0, 0xf0, 0x60, 0xf0, 0xf0, 0x00, 0x00]), // 'x'
    Glyph::new(5, 9, &[0x00, 0x00, 0xd8, 0xd8, 0xd8, 0x78, 0x18, 0x70, 0x00]), // 'y'
    Glyph::new(5, 9, &[0x00, 0x00, 0xf8, 0x30, 0x60, 0xc0, 0xf8, 0x00, 0x00]), // 'z'
    Glyph::new(4, 9, &[0x30, 0x60, 0x60, 0xc0, 0x60, 0x60, 0x30, 0x00, 0x00]), // '{'
    Glyph::new(2, 9, &[0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0xc0, 0x00, 0x00]), // '|'
    Glyph::new(4, 9, &[0xc0, 0x60, 0x60, 0x30, 0x60, 0x60, 0xc0, 0x00, 0x00]), // '}'
    Glyph::new(5, 9, &[0x00, 0x00, 0x78, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00]), // '~'
];
