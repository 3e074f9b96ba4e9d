//! Color constants for the watch face.
//!
//! The face is two-tone: white strokes and text on black. Colors come from the
//! `RgbColor` trait constants so they map to exact Rgb565 extremes.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the ST7789 and the simulator's framebuffer, so no
//! conversion happens on flush.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Face Colors
// =============================================================================

/// Pure black (0, 0, 0). Region backgrounds.
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Ticks, hands, numerals and text.
pub const FOREGROUND: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Host Colors
// =============================================================================

/// Dark gray (8, 16, 8) for the panel area around the face on larger displays.
pub const BEZEL: Rgb565 = Rgb565::new(8, 16, 8);

/// Orange (31, 32, 0). Border flash while a vibration pattern plays on hosts
/// without a motor.
pub const VIBE_FLASH: Rgb565 = Rgb565::new(31, 32, 0);
