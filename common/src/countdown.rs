//! Hourly vibration countdown and the nightly sleep window.
//!
//! Once an hour, at [`ALERT_MINUTE`] past, the watch vibrates. The face shows
//! how many minutes are left until then, or `--` with a crossed-out icon while
//! alerts are suppressed for the night.
//!
//! # Sleep Window
//!
//! A time is suppressed when any of these hold:
//!
//! ```text
//! hour >= sleep_start
//! hour == sleep_start - 1 && minute > alert_minute
//! hour <= sleep_end
//! ```
//!
//! With the defaults (22, 5, 50) that is 21:51 through 05:59 inclusive. The
//! evening edge is tied to the alert minute, so the last alert of the day is
//! 21:50 and the countdown turns to `--` right after it. The morning edge is
//! a whole hour: 06:00 is the first armed minute and 06:50 the first alert.
//!
//! # Minutes Remaining
//!
//! | minute | remaining |
//! |--------|-----------|
//! | `<= alert_minute` | `alert_minute - minute` |
//! | `> alert_minute` | `60 - (minute - alert_minute)` |
//!
//! Always 0-59; exactly 0 at the alert minute.

use crate::clock::WallClock;
use crate::config::{ALERT_MINUTE, SLEEP_END, SLEEP_START};

/// Countdown indicator icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertIcon {
    /// Vibration will fire at the next alert minute.
    Armed,
    /// Sleep window: no vibration.
    Suppressed,
}

/// Countdown evaluated for one time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountdownState {
    pub minutes_remaining: u8,
    pub suppressed: bool,
}

impl CountdownState {
    #[inline]
    pub const fn icon(&self) -> AlertIcon {
        if self.suppressed { AlertIcon::Suppressed } else { AlertIcon::Armed }
    }
}

/// Alert schedule. All evaluation is a pure function of the given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountdownClock {
    alert_minute: u8,
    sleep_start: u8,
    sleep_end: u8,
}

impl CountdownClock {
    /// Schedule from the compile-time configuration.
    pub const fn new() -> Self {
        Self {
            alert_minute: ALERT_MINUTE,
            sleep_start: SLEEP_START,
            sleep_end: SLEEP_END,
        }
    }

    /// Override the alert minute (clamped to 0-59).
    #[must_use]
    pub const fn with_alert_minute(
        mut self,
        minute: u8,
    ) -> Self {
        self.alert_minute = if minute > 59 { 59 } else { minute };
        self
    }

    /// Override the sleep window hours (clamped to 0-23).
    #[must_use]
    pub const fn with_sleep_window(
        mut self,
        start: u8,
        end: u8,
    ) -> Self {
        self.sleep_start = if start > 23 { 23 } else { start };
        self.sleep_end = if end > 23 { 23 } else { end };
        self
    }

    #[inline]
    pub const fn alert_minute(&self) -> u8 { self.alert_minute }

    /// Whether alerts are suppressed at `time`.
    pub const fn is_sleep_time(
        &self,
        time: &WallClock,
    ) -> bool {
        let hour = time.hour();
        if hour >= self.sleep_start {
            return true;
        }
        // `checked_sub` keeps a sleep start of 0 from wrapping to hour 255
        if let Some(eve) = self.sleep_start.checked_sub(1)
            && hour == eve
            && time.minute() > self.alert_minute
        {
            return true;
        }
        hour <= self.sleep_end
    }

    /// Minutes until the next alert minute, 0-59.
    pub const fn minutes_remaining(
        &self,
        time: &WallClock,
    ) -> u8 {
        let minute = time.minute();
        if minute <= self.alert_minute {
            self.alert_minute - minute
        } else {
            60 - (minute - self.alert_minute)
        }
    }

    /// Countdown state at `time`.
    pub const fn evaluate(
        &self,
        time: &WallClock,
    ) -> CountdownState {
        CountdownState {
            minutes_remaining: self.minutes_remaining(time),
            suppressed: self.is_sleep_time(time),
        }
    }

    /// Whether `time` is an alert instant outside the sleep window.
    ///
    /// Level-triggered on the minute: the caller checks it once per minute
    /// boundary (second 0).
    pub const fn should_trigger(
        &self,
        time: &WallClock,
    ) -> bool {
        time.minute() == self.alert_minute && !self.is_sleep_time(time)
    }
}

impl Default for CountdownClock {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
