//! Analog/digital watch face core.
//!
//! This crate contains the platform-agnostic face logic shared between the
//! simulator and the Pico 2 firmware:
//!
//! - [`angle`]: Dial-unit to angle conversion and polar points
//! - [`dial`]: Precomputed tick marks, numerals and center dot
//! - [`hands`]: Tapered hour/minute hands and the second hand
//! - [`countdown`]: Hourly vibration countdown and sleep window
//! - [`face`]: Tick-driven redraw scheduling ([`FaceController`])
//! - [`render`]: Regions and redraw tracking
//! - [`clock`]: Validated wall-clock time and a software calendar clock
//! - [`text`]: Digital time, date line and countdown formatting
//! - [`locale`]: Weekday and month name tables
//! - [`vibe`]: Vibration patterns
//! - [`log`]: Face event ring buffer
//! - [`widgets`]: `embedded-graphics` rendering backend
//! - [`colors`], [`styles`], [`config`]: Colors, text styles and layout constants
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets.
//! Trigonometry goes through `micromath` outside of host tests; text buffers
//! are `heapless`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod angle;
pub mod clock;
pub mod colors;
pub mod config;
pub mod countdown;
pub mod dial;
pub mod face;
pub mod hands;
pub mod locale;
pub mod log;
pub mod render;
pub mod styles;
pub mod text;
pub mod vibe;
pub mod widgets;

// Re-export commonly used items
pub use clock::{SoftClock, TimeError, WallClock};
pub use countdown::{AlertIcon, CountdownClock, CountdownState};
pub use face::{AlertSurface, FaceController, FaceSurface};
pub use locale::Locale;
pub use log::{EventLog, FaceEvent};
pub use render::{Region, RegionContent, Staleness};
pub use vibe::{ALERT_PATTERN, VibePattern};
pub use widgets::FaceRenderer;
