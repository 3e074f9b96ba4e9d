//! Static dial background: minute ticks, numerals and the center dot.
//!
//! The background never changes with time, so [`DialFace`] is computed once
//! when the face controller is created and handed to the renderer whenever
//! the analog region is recomposed.
//!
//! # Tick Lengths
//!
//! | Mark | Length |
//! |------|--------|
//! | `m % 15 == 0` (12, 3, 6, 9) | [`TICK_QUARTER`] |
//! | `m % 5 == 0` (other hours) | [`TICK_FIVE`] |
//! | otherwise | [`TICK_MINUTE`] |

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Line;
use embedded_graphics::text::Alignment;

use crate::angle::{angle_for_minute, point_on_circle};
use crate::config::{
    CENTER_DOT_RADIUS,
    DIAL_CENTER,
    DIAL_OFFSET,
    DIAL_RADIUS,
    TICK_FIVE,
    TICK_MINUTE,
    TICK_QUARTER,
};

/// Number of tick marks around the dial.
pub const TICK_COUNT: usize = 60;

/// Tick length for minute mark `m`.
pub const fn tick_length(m: u8) -> i32 {
    if m % 15 == 0 {
        TICK_QUARTER
    } else if m % 5 == 0 {
        TICK_FIVE
    } else {
        TICK_MINUTE
    }
}

/// One radial tick segment, inner end first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub mark: u8,
    pub inner: Point,
    pub outer: Point,
}

impl Tick {
    #[inline]
    pub const fn line(&self) -> Line { Line::new(self.inner, self.outer) }
}

/// Anchor for one dial numeral.
///
/// `position` is the top edge of the label (top-left for left-aligned labels,
/// top-center for centered ones), in analog-region coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral {
    pub label: &'static str,
    pub position: Point,
    pub alignment: Alignment,
}

/// Numeral label anchors, clockwise from "12".
///
/// "12" and "6" are centered on the vertical axis, "3" and "9" are left
/// aligned just outside and just inside the dial respectively.
pub const NUMERALS: [Numeral; 4] = [
    Numeral {
        label: "12",
        position: Point::new(DIAL_OFFSET + DIAL_RADIUS, 0),
        alignment: Alignment::Center,
    },
    Numeral {
        label: "3",
        position: Point::new(DIAL_RADIUS * 2 + DIAL_OFFSET + 3, DIAL_RADIUS + DIAL_OFFSET - 7),
        alignment: Alignment::Left,
    },
    Numeral {
        label: "6",
        position: Point::new(DIAL_OFFSET + DIAL_RADIUS, DIAL_RADIUS * 2 + DIAL_OFFSET - 1),
        alignment: Alignment::Center,
    },
    Numeral {
        label: "9",
        position: Point::new(3, DIAL_RADIUS + DIAL_OFFSET - 7),
        alignment: Alignment::Left,
    },
];

/// Complete static background geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialFace {
    pub ticks: [Tick; TICK_COUNT],
    pub numerals: [Numeral; 4],
    pub center: Point,
    pub center_dot_radius: u32,
}

impl DialFace {
    /// Build the background for the configured dial.
    pub fn new() -> Self {
        let mut ticks = [Tick {
            mark: 0,
            inner: DIAL_CENTER,
            outer: DIAL_CENTER,
        }; TICK_COUNT];

        for (mark, tick) in (0u8..).zip(ticks.iter_mut()) {
            let angle = angle_for_minute(i32::from(mark));
            *tick = Tick {
                mark,
                inner: point_on_circle(DIAL_CENTER, (DIAL_RADIUS - tick_length(mark)) as f32, angle),
                outer: point_on_circle(DIAL_CENTER, DIAL_RADIUS as f32, angle),
            };
        }

        Self {
            ticks,
            numerals: NUMERALS,
            center: DIAL_CENTER,
            center_dot_radius: CENTER_DOT_RADIUS,
        }
    }
}

impl Default for DialFace {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
