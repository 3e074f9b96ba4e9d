//! Dial and hand drawing.
//!
//! Coordinates are analog-region local; callers pass a target already
//! cropped to the analog rectangle.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::Text;

use crate::colors::FOREGROUND;
use crate::dial::DialFace;
use crate::hands::HandShape;
use crate::styles::{NUMERAL_STYLE, top_aligned};

const STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(FOREGROUND, 1);
const FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(FOREGROUND);

/// Draw the tick field, the four numerals and the center dot.
pub fn draw_dial<D>(
    display: &mut D,
    dial: &DialFace,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for numeral in &dial.numerals {
        Text::with_text_style(
            numeral.label,
            numeral.position,
            NUMERAL_STYLE,
            top_aligned(numeral.alignment),
        )
        .draw(display)
        .ok();
    }

    for tick in &dial.ticks {
        tick.line().into_styled(STROKE).draw(display).ok();
    }

    Circle::with_center(dial.center, dial.center_dot_radius * 2 + 1)
        .into_styled(FILL)
        .draw(display)
        .ok();
}

/// Draw every segment of a hand, in order.
pub fn draw_hand<D>(
    display: &mut D,
    hand: &HandShape,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for segment in &hand.segments {
        segment.into_styled(STROKE).draw(display).ok();
    }
}
