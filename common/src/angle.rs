//! Dial angle math.
//!
//! Converts dial units (minutes or seconds) into screen angles and angles into
//! points on a circle. Stateless.
//!
//! # Convention
//!
//! Angles are radians in screen space, where `y` grows downward:
//!
//! ```text
//!            -π/2 (unit 0, "12")
//!                  |
//!      π ("9") ----+---- 0 ("3", unit 15)
//!                  |
//!             π/2 ("6", unit 30)
//! ```
//!
//! Increasing angle therefore runs clockwise on screen, which is why unit 0
//! maps to `-π/2` (subtracting a quarter turn, not adding one).
//!
//! Inputs outside `0..units_per_revolution` are valid and simply wrap around
//! the circle. The hand builder relies on this for its splayed base points.
//!
//! # Trigonometry
//!
//! Every build, host tests included, goes through `micromath`'s approximate
//! `sin`/`cos` (called through [`F32Ext`] explicitly, so `std`'s inherent
//! methods never take over). Points that land near a half pixel round
//! differently under `std` trig, and the tests must see the device's pixels.

use core::f32::consts::{FRAC_PI_2, TAU};

use embedded_graphics::prelude::Point;
use micromath::F32Ext;

use crate::config::UNITS_PER_REVOLUTION;

/// Angle of `unit_value` on a dial with `units_per_revolution` marks.
#[inline]
pub fn angle_for_unit(
    unit_value: f32,
    units_per_revolution: f32,
) -> f32 {
    (unit_value / units_per_revolution) * TAU - FRAC_PI_2
}

/// Angle of a minute (or second) mark on the 60-unit dial.
#[inline]
pub fn angle_for_minute(unit_value: i32) -> f32 { angle_for_unit(unit_value as f32, UNITS_PER_REVOLUTION) }

/// Exact (unrounded) point at `radius` from `center` along `angle`.
#[inline]
pub fn point_on_circle_f32(
    center: Point,
    radius: f32,
    angle: f32,
) -> (f32, f32) {
    (
        center.x as f32 + radius * F32Ext::cos(angle),
        center.y as f32 + radius * F32Ext::sin(angle),
    )
}

/// Pixel at `radius` from `center` along `angle`, rounded to the nearest pixel.
pub fn point_on_circle(
    center: Point,
    radius: f32,
    angle: f32,
) -> Point {
    let (x, y) = point_on_circle_f32(center, radius, angle);
    Point::new(F32Ext::round(x) as i32, F32Ext::round(y) as i32)
}

// =============================================================================
// Tests
// =============================================================================
