//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Simulated seconds per frame in fast-forward mode.
///
/// Divides 60, so starting from second 0 every minute boundary is delivered.
/// Fast-forward seeds start on second 0 (`TimeSource::fast_forward_from`).
pub const FAST_FORWARD_STEP_SECS: u32 = 20;
