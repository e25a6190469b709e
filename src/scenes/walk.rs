//! Walk cycle animation.

use crate::assets::WALK_ANIMATION;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

pub fn frame_count() -> usize {
    WALK_ANIMATION.len()
}

/// Draw frame `index`, wrapping past the last frame.
pub fn draw_frame<D>(target: &mut D, index: usize) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    WALK_ANIMATION[index % frame_count()].draw_opaque(target, Point::zero())
}
