//! Hand geometry: tapered hour/minute wedges and the plain second hand.
//!
//! The display backends only draw one-pixel lines, so a hand with visible
//! width is built as a fan of lines converging on the tip:
//!
//! ```text
//!                 tip
//!                 /|\
//!                / | \
//!               /  |  \
//!          base-  center  base+
//! ```
//!
//! For every `w` in `1..=width`, the two base points sit `w` pixels from the
//! center at a quarter turn either side of the hand (`unit - 15` and
//! `unit + 15` on the 60-unit dial). Each `w` contributes three lines:
//! `base- → tip`, `base+ → tip` and `center → tip`. Stacking them for
//! increasing `w` fills a thin isosceles triangle.
//!
//! The base offsets are passed to [`angle_for_minute`] unwrapped (e.g. `-15`
//! for the 12 o'clock position); the angle math wraps them.

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Line;
use heapless::Vec;

use crate::angle::{angle_for_minute, point_on_circle};
use crate::clock::WallClock;
use crate::config::{
    DIAL_CENTER,
    HAND_BASE_SPLAY,
    HOUR_HAND_LENGTH,
    HOUR_HAND_WIDTH,
    MINUTE_HAND_LENGTH,
    MINUTE_HAND_WIDTH,
    SECOND_HAND_LENGTH,
};

// =============================================================================
// Hand Specs
// =============================================================================

/// Length and taper width of one hand. `width == 0` means a plain radial line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandSpec {
    pub length: i32,
    pub width: i32,
}

pub const HOUR_HAND: HandSpec = HandSpec {
    length: HOUR_HAND_LENGTH,
    width: HOUR_HAND_WIDTH,
};

pub const MINUTE_HAND: HandSpec = HandSpec {
    length: MINUTE_HAND_LENGTH,
    width: MINUTE_HAND_WIDTH,
};

pub const SECOND_HAND: HandSpec = HandSpec {
    length: SECOND_HAND_LENGTH,
    width: 0,
};

const fn max_i32(
    a: i32,
    b: i32,
) -> i32 {
    if a > b { a } else { b }
}

/// Upper bound on the lines in one hand (three per width step).
pub const MAX_HAND_SEGMENTS: usize = 3 * max_i32(max_i32(HOUR_HAND_WIDTH, MINUTE_HAND_WIDTH), 1) as usize;

// =============================================================================
// Hand Kind
// =============================================================================

/// Which hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    pub const ALL: [Self; 3] = [Self::Hour, Self::Minute, Self::Second];

    pub const fn spec(self) -> HandSpec {
        match self {
            Self::Hour => HOUR_HAND,
            Self::Minute => MINUTE_HAND,
            Self::Second => SECOND_HAND,
        }
    }

    /// Position of this hand in 60-unit dial marks.
    ///
    /// The hour hand moves 5 units per hour plus one unit per 12 minutes
    /// (integer division), so it steps forward five times an hour. Hours past
    /// 11 are not reduced; the angle wraps on its own.
    pub const fn unit(
        self,
        time: &WallClock,
    ) -> i32 {
        match self {
            Self::Hour => time.hour() as i32 * 5 + time.minute() as i32 / 12,
            Self::Minute => time.minute() as i32,
            Self::Second => time.second() as i32,
        }
    }
}

// =============================================================================
// Hand Shape
// =============================================================================

/// Ordered line segments for one hand, in analog-region coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandShape {
    pub kind: HandKind,
    pub tip: Point,
    pub segments: Vec<Line, MAX_HAND_SEGMENTS>,
}

impl HandShape {
    /// Build the hand of `kind` for `time`.
    pub fn for_time(
        kind: HandKind,
        time: &WallClock,
    ) -> Self {
        Self::build(kind, kind.spec(), DIAL_CENTER, kind.unit(time))
    }

    /// Build a hand pointing at dial `unit` around `center`.
    ///
    /// A zero-width spec yields one line from tip to center; otherwise three
    /// lines per width step, `w = 1` first.
    pub fn build(
        kind: HandKind,
        spec: HandSpec,
        center: Point,
        unit: i32,
    ) -> Self {
        let tip = point_on_circle(center, spec.length as f32, angle_for_minute(unit));
        let mut segments = Vec::new();

        if spec.width <= 0 {
            segments.push(Line::new(tip, center)).ok();
        } else {
            let left = angle_for_minute(unit - HAND_BASE_SPLAY);
            let right = angle_for_minute(unit + HAND_BASE_SPLAY);
            for w in 1..=spec.width {
                let base_left = point_on_circle(center, w as f32, left);
                let base_right = point_on_circle(center, w as f32, right);
                // Capacity is sized for the widest configured hand
                if segments.push(Line::new(base_left, tip)).is_err()
                    || segments.push(Line::new(base_right, tip)).is_err()
                    || segments.push(Line::new(center, tip)).is_err()
                {
                    break;
                }
            }
        }

        Self { kind, tip, segments }
    }
}

// =============================================================================
// Tests
// =============================================================================
