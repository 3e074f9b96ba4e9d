//! Watch face layout and schedule constants.
//!
//! # Compile-time Configuration
//!
//! The face has no runtime settings. Every position, length and schedule value
//! lives here as a `const` so the geometry code can be evaluated at compile time
//! where possible and the numbers stay in one place.
//!
//! # Coordinate Spaces
//!
//! Region rectangles are in screen coordinates (origin = top-left of the face).
//! Dial geometry (ticks, hands, center dot) is in coordinates relative to the
//! analog region's top-left corner, with `y` growing downward.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Screen
// =============================================================================

/// Face width in pixels (Pebble-class 144x168 layout).
pub const SCREEN_WIDTH: u32 = 144;

/// Face height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

// =============================================================================
// Region Rectangles
// =============================================================================

/// Digital `HH:MM` readout across the top of the face.
pub const DIGITAL_RECT: Rectangle = Rectangle::new(Point::new(0, 4), Size::new(144, 42));

/// Date line below the digital readout.
pub const DATE_RECT: Rectangle = Rectangle::new(Point::new(0, 54), Size::new(144, 22));

/// Analog dial. Background and all three hands share this rectangle.
pub const ANALOG_RECT: Rectangle = Rectangle::new(Point::new(0, 82), Size::new(86, 86));

/// Vibration countdown indicator (icon + minutes) to the right of the dial.
/// Runs to the bottom edge of the screen.
pub const COUNTDOWN_RECT: Rectangle = Rectangle::new(Point::new(90, 86), Size::new(50, 82));

/// Vibration icon, relative to [`COUNTDOWN_RECT`].
pub const COUNTDOWN_ICON_RECT: Rectangle = Rectangle::new(Point::new(11, 12), Size::new(28, 28));

/// Minutes-remaining label, relative to [`COUNTDOWN_RECT`].
pub const COUNTDOWN_TEXT_RECT: Rectangle = Rectangle::new(Point::new(0, 36), Size::new(50, 28));

// =============================================================================
// Dial Geometry
// =============================================================================

/// Dial radius (tick marks end here).
pub const DIAL_RADIUS: i32 = 32;

/// Margin between the analog region edge and the dial circle.
/// Leaves room for the "12", "3", "6" and "9" labels.
pub const DIAL_OFFSET: i32 = 12;

/// Dial center in analog-region coordinates.
pub const DIAL_CENTER: Point = Point::new(DIAL_OFFSET + DIAL_RADIUS, DIAL_OFFSET + DIAL_RADIUS);

/// Radius of the filled dot covering the hand pivot.
pub const CENTER_DOT_RADIUS: u32 = 3;

/// Tick length for quarter-hour marks (0, 15, 30, 45).
pub const TICK_QUARTER: i32 = 5;

/// Tick length for the remaining five-minute marks.
pub const TICK_FIVE: i32 = 3;

/// Tick length for plain minute marks.
pub const TICK_MINUTE: i32 = 1;

/// Minute (and second) marks per revolution of the dial.
pub const UNITS_PER_REVOLUTION: f32 = 60.0;

// =============================================================================
// Hands
// =============================================================================

/// Second hand length (plain radial line).
pub const SECOND_HAND_LENGTH: i32 = 27;

/// Minute hand length to the tip.
pub const MINUTE_HAND_LENGTH: i32 = 21;

/// Minute hand base half-width.
pub const MINUTE_HAND_WIDTH: i32 = 3;

/// Hour hand length to the tip.
pub const HOUR_HAND_LENGTH: i32 = 15;

/// Hour hand base half-width.
pub const HOUR_HAND_WIDTH: i32 = 3;

/// Offset (in dial units) from the hand angle to the splayed base points.
/// 15 units = a quarter turn, so the base straddles the pivot at right angles.
pub const HAND_BASE_SPLAY: i32 = 15;

/// The hour hand is redrawn whenever `minute % HOUR_HAND_STEP == 0`.
/// One hour of hand travel is 5 dial units, so it visibly moves one unit per step.
pub const HOUR_HAND_STEP: u8 = 12;

// =============================================================================
// Vibration Countdown
// =============================================================================

/// Minute past each hour at which the alert fires (countdown reaches 0).
pub const ALERT_MINUTE: u8 = 50;

/// First fully silent hour. The tail of the previous hour after `ALERT_MINUTE`
/// is silent too.
pub const SLEEP_START: u8 = 22;

/// Last silent hour in the morning (inclusive).
pub const SLEEP_END: u8 = 5;

/// Alert vibration: on/off durations in milliseconds, starting with "on".
pub const ALERT_VIBE_MS: [u32; 5] = [700, 100, 700, 100, 700];

// =============================================================================
// Tests
// =============================================================================
