//! Time source for the simulator: host local time or a fast-forwarding
//! software clock.

use chrono::{DateTime, Datelike, Local, Timelike};
use watchface_common::clock::{SoftClock, TimeError, WallClock};

use crate::timing::FAST_FORWARD_STEP_SECS;

/// Unvalidated wall-clock fields as read from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub weekday: u8,
    pub day: u8,
    pub month: u8,
}

impl RawTime {
    pub fn from_local(now: &DateTime<Local>) -> Self {
        Self {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
            weekday: now.weekday().num_days_from_sunday() as u8,
            day: now.day() as u8,
            month: now.month0() as u8,
        }
    }

    pub const fn from_wall_clock(time: &WallClock) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            weekday: time.weekday(),
            day: time.day(),
            month: time.month(),
        }
    }

    pub const fn validate(&self) -> Result<WallClock, TimeError> {
        WallClock::new(self.hour, self.minute, self.second, self.weekday, self.day, self.month)
    }
}

/// Where ticks come from.
pub enum TimeSource {
    /// Host local time; one tick whenever the wall-clock second changes.
    Live { last_second: Option<u8> },
    /// Software clock advanced by [`FAST_FORWARD_STEP_SECS`] every frame.
    FastForward(SoftClock),
}

impl TimeSource {
    pub const fn live() -> Self { Self::Live { last_second: None } }

    #[inline]
    pub const fn is_fast_forward(&self) -> bool { matches!(self, Self::FastForward(_)) }

    /// Fast-forward from `clock`, with the seconds zeroed.
    ///
    /// Steps of [`FAST_FORWARD_STEP_SECS`] only land on second 0 when they
    /// start from a multiple of the step.
    pub fn fast_forward_from(mut clock: SoftClock) -> Self {
        clock.zero_seconds();
        Self::FastForward(clock)
    }

    /// Switch between live and fast-forward. Fast-forward starts from the
    /// current local time.
    pub fn toggle(&mut self) -> Result<(), TimeError> {
        let next = match self {
            Self::Live { .. } => {
                let now = Local::now();
                let clock = SoftClock::new(
                    now.year().clamp(0, i32::from(u16::MAX)) as u16,
                    now.month() as u8,
                    now.day() as u8,
                    now.hour() as u8,
                    now.minute() as u8,
                    now.second() as u8,
                )?;
                Self::fast_forward_from(clock)
            }
            Self::FastForward(_) => Self::live(),
        };
        *self = next;
        Ok(())
    }

    /// Time to show right now, without advancing.
    pub fn current(&self) -> RawTime {
        match self {
            Self::Live { .. } => RawTime::from_local(&Local::now()),
            Self::FastForward(clock) => RawTime::from_wall_clock(&clock.now()),
        }
    }

    /// Next tick for this frame, if one is due.
    pub fn poll(&mut self) -> Option<RawTime> {
        match self {
            Self::Live { last_second } => {
                let now = RawTime::from_local(&Local::now());
                if *last_second == Some(now.second) {
                    return None;
                }
                *last_second = Some(now.second);
                Some(now)
            }
            Self::FastForward(clock) => {
                clock.advance(FAST_FORWARD_STEP_SECS);
                Some(RawTime::from_wall_clock(&clock.now()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_time_from_local() {
        let now = Local::now();
        let raw = RawTime::from_local(&now);
        assert!(raw.validate().is_ok(), "Host time should always be in range");
        assert!(raw.month < 12, "Month is 0-based");
    }

    #[test]
    fn test_fast_forward_advances_every_poll() {
        let clock = SoftClock::new(2024, 2, 28, 23, 59, 40).unwrap();
        let mut source = TimeSource::FastForward(clock);

        let next = source.poll().unwrap();
        assert_eq!((next.hour, next.minute, next.second), (0, 0, 0));
        assert_eq!((next.day, next.month), (29, 1), "2024 is a leap year");
        assert!(source.poll().is_some());
    }

    #[test]
    fn test_fast_forward_reaches_minute_boundary() {
        let clock = SoftClock::new(2026, 1, 15, 14, 49, 17).unwrap();
        let mut source = TimeSource::fast_forward_from(clock);

        let ticks: Vec<RawTime> = (0..3).filter_map(|_| source.poll()).collect();
        assert_eq!(ticks.len(), 3);
        assert!(
            ticks.iter().any(|t| t.second == 0),
            "A seed at :17 must still deliver second 0, got {ticks:?}"
        );
        assert_eq!((ticks[2].minute, ticks[2].second), (50, 0), "14:49:00 + 60 s");
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut source = TimeSource::live();
        source.toggle().unwrap();
        assert!(source.is_fast_forward());
        source.toggle().unwrap();
        assert!(!source.is_fast_forward());
    }
}
