//! Vibration patterns.
//!
//! A pattern is a list of durations in milliseconds that alternate between
//! motor on and motor off, starting with on. The haptic backend (GPIO motor
//! on the firmware, a flashing border in the simulator) walks the segments.

use crate::config::ALERT_VIBE_MS;

/// Alternating on/off durations, starting with "on".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VibePattern {
    durations_ms: &'static [u32],
}

/// Hourly alert: three 700 ms buzzes separated by 100 ms pauses.
pub const ALERT_PATTERN: VibePattern = VibePattern::new(&ALERT_VIBE_MS);

impl VibePattern {
    pub const fn new(durations_ms: &'static [u32]) -> Self { Self { durations_ms } }

    #[inline]
    pub const fn durations_ms(&self) -> &'static [u32] { self.durations_ms }

    /// `(motor_on, duration_ms)` pairs in playback order.
    pub fn segments(&self) -> impl Iterator<Item = (bool, u32)> + '_ {
        self.durations_ms
            .iter()
            .enumerate()
            .map(|(i, &ms)| (i % 2 == 0, ms))
    }

    /// Total playback time.
    pub fn total_ms(&self) -> u32 { self.durations_ms.iter().sum() }

    /// Whether the motor is on `elapsed_ms` into playback.
    ///
    /// Returns `None` once the pattern has finished.
    pub fn motor_on_at(
        &self,
        elapsed_ms: u32,
    ) -> Option<bool> {
        let mut start = 0u32;
        for (on, ms) in self.segments() {
            let end = start.saturating_add(ms);
            if elapsed_ms < end {
                return Some(on);
            }
            start = end;
        }
        None
    }
}
