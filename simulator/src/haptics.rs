//! Stand-in for the vibration motor: plays patterns as a flashing border.

use std::time::Instant;

use watchface_common::face::AlertSurface;
use watchface_common::vibe::VibePattern;

/// Tracks the pattern currently "playing".
pub struct BorderFlash {
    playing: Option<(VibePattern, Instant)>,
}

impl BorderFlash {
    pub const fn new() -> Self { Self { playing: None } }

    /// Whether the virtual motor is on now. Clears the pattern once it ends.
    pub fn motor_on(&mut self) -> bool {
        let Some((pattern, started)) = self.playing else {
            return false;
        };
        let elapsed_ms = u32::try_from(started.elapsed().as_millis()).unwrap_or(u32::MAX);
        match pattern.motor_on_at(elapsed_ms) {
            Some(on) => on,
            None => {
                self.playing = None;
                false
            }
        }
    }
}

impl AlertSurface for BorderFlash {
    fn vibrate(
        &mut self,
        pattern: &VibePattern,
    ) {
        log::info!(
            "vibrate: {:?} ms ({} ms total)",
            pattern.durations_ms(),
            pattern.total_ms()
        );
        self.playing = Some((*pattern, Instant::now()));
    }
}
