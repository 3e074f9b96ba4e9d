//! Vibration countdown indicator: phone icon plus minutes remaining.
//!
//! The icon is a phone outline built from primitives: buzz marks on both sides
//! when armed, a diagonal strike-through when suppressed.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::colors::FOREGROUND;
use crate::config::{COUNTDOWN_ICON_RECT, COUNTDOWN_TEXT_RECT};
use crate::countdown::AlertIcon;
use crate::styles::{CENTERED, COUNTDOWN_STYLE};

const STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(FOREGROUND, 1);
const CROSS: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(FOREGROUND, 2);

// Phone body, relative to the icon rectangle
const BODY: Rectangle = Rectangle::new(Point::new(9, 4), Size::new(10, 20));
const BODY_CORNER: Size = Size::new(2, 2);
const SCREEN: Rectangle = Rectangle::new(Point::new(11, 7), Size::new(6, 11));

/// Buzz marks either side of the body: (inner x, outer x).
const WAVES: [(i32, i32); 2] = [(6, 3), (21, 24)];

/// Draw the countdown region content (icon above, minutes below).
pub fn draw_countdown<D>(
    display: &mut D,
    icon: AlertIcon,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_alert_icon(display, COUNTDOWN_ICON_RECT.top_left, icon);

    Text::with_text_style(text, COUNTDOWN_TEXT_RECT.center(), COUNTDOWN_STYLE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the vibrating-phone icon with its top-left at `origin`.
pub fn draw_alert_icon<D>(
    display: &mut D,
    origin: Point,
    icon: AlertIcon,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(Rectangle::new(origin + BODY.top_left, BODY.size), BODY_CORNER)
        .into_styled(STROKE)
        .draw(display)
        .ok();
    Rectangle::new(origin + SCREEN.top_left, SCREEN.size)
        .into_styled(STROKE)
        .draw(display)
        .ok();

    match icon {
        AlertIcon::Armed => {
            for (inner, outer) in WAVES {
                Line::new(origin + Point::new(inner, 9), origin + Point::new(inner, 18))
                    .into_styled(STROKE)
                    .draw(display)
                    .ok();
                Line::new(origin + Point::new(outer, 11), origin + Point::new(outer, 16))
                    .into_styled(STROKE)
                    .draw(display)
                    .ok();
            }
        }
        AlertIcon::Suppressed => {
            let size = COUNTDOWN_ICON_RECT.size;
            Line::new(
                origin + Point::new(2, 2),
                origin + Point::new(size.width as i32 - 3, size.height as i32 - 3),
            )
            .into_styled(CROSS)
            .draw(display)
            .ok();
        }
    }
}
