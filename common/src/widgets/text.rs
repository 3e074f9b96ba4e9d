//! Centered single-line text regions.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::styles::CENTERED;

/// Draw `text` centered in a region of `size`, local coordinates.
pub fn draw_centered_text<D>(
    display: &mut D,
    size: Size,
    text: &str,
    style: MonoTextStyle<'static, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = Rectangle::new(Point::zero(), size).center();
    Text::with_text_style(text, center, style, CENTERED).draw(display).ok();
}
