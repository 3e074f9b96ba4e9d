//! Wall-clock snapshots and a software calendar clock.
//!
//! - [`WallClock`]: validated, immutable time-of-day + date snapshot delivered
//!   to the face once per second
//! - [`TimeError`]: the field that was out of range, with its value
//! - [`SoftClock`]: calendar clock advanced in whole seconds, for hosts
//!   without a real-time clock
//!
//! # Field Ranges
//!
//! | Field | Range | Notes |
//! |-------|-------|-------|
//! | hour | 0-23 | 24-hour clock |
//! | minute | 0-59 | |
//! | second | 0-59 | |
//! | weekday | 0-6 | 0 = Sunday |
//! | day | 1-31 | Day of month |
//! | month | 0-11 | 0 = January |

use core::fmt;

// =============================================================================
// Errors
// =============================================================================

/// A wall-clock field outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Hour not in 0-23.
    Hour(u8),
    /// Minute not in 0-59.
    Minute(u8),
    /// Second not in 0-59.
    Second(u8),
    /// Weekday not in 0-6.
    Weekday(u8),
    /// Day of month not in 1-31.
    DayOfMonth(u8),
    /// Month not in 0-11.
    Month(u8),
}

impl fmt::Display for TimeError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Hour(v) => write!(f, "hour {v} out of range 0-23"),
            Self::Minute(v) => write!(f, "minute {v} out of range 0-59"),
            Self::Second(v) => write!(f, "second {v} out of range 0-59"),
            Self::Weekday(v) => write!(f, "weekday {v} out of range 0-6"),
            Self::DayOfMonth(v) => write!(f, "day {v} out of range 1-31"),
            Self::Month(v) => write!(f, "month {v} out of range 0-11"),
        }
    }
}

impl core::error::Error for TimeError {}

// =============================================================================
// WallClock
// =============================================================================

/// One immutable time snapshot.
///
/// Fields are private: the only way to get a `WallClock` is through
/// [`WallClock::new`] (or [`SoftClock::now`]), so every instance is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClock {
    hour: u8,
    minute: u8,
    second: u8,
    weekday: u8,
    day: u8,
    month: u8,
}

impl WallClock {
    /// Validate and build a snapshot.
    ///
    /// Fields are checked in order hour, minute, second, weekday, day, month;
    /// the first out-of-range field is reported.
    pub const fn new(
        hour: u8,
        minute: u8,
        second: u8,
        weekday: u8,
        day: u8,
        month: u8,
    ) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::Hour(hour));
        }
        if minute > 59 {
            return Err(TimeError::Minute(minute));
        }
        if second > 59 {
            return Err(TimeError::Second(second));
        }
        if weekday > 6 {
            return Err(TimeError::Weekday(weekday));
        }
        if day == 0 || day > 31 {
            return Err(TimeError::DayOfMonth(day));
        }
        if month > 11 {
            return Err(TimeError::Month(month));
        }
        Ok(Self {
            hour,
            minute,
            second,
            weekday,
            day,
            month,
        })
    }

    #[inline]
    pub const fn hour(&self) -> u8 { self.hour }

    #[inline]
    pub const fn minute(&self) -> u8 { self.minute }

    #[inline]
    pub const fn second(&self) -> u8 { self.second }

    /// Day of week, 0 = Sunday.
    #[inline]
    pub const fn weekday(&self) -> u8 { self.weekday }

    /// Day of month, 1-31.
    #[inline]
    pub const fn day(&self) -> u8 { self.day }

    /// Month, 0 = January.
    #[inline]
    pub const fn month(&self) -> u8 { self.month }
}

// =============================================================================
// SoftClock
// =============================================================================

/// Calendar clock counted in software.
///
/// Seeded once from a civil date-time and advanced by whole seconds. Used by
/// the firmware (no battery-backed RTC) and by the simulator's fast-forward
/// mode. Handles Gregorian leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SoftClock {
    year: u16,
    /// 1-12 (civil numbering, unlike [`WallClock::month`]).
    month: u8,
    day: u8,
    /// Seconds since local midnight.
    second_of_day: u32,
}

const SECONDS_PER_DAY: u32 = 86_400;

impl SoftClock {
    /// Seed from a civil date-time. `month` is 1-12.
    ///
    /// Returns the same [`TimeError`] variants as [`WallClock::new`], with
    /// `Month` carrying the civil (1-based) value.
    pub const fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, TimeError> {
        if month == 0 || month > 12 {
            return Err(TimeError::Month(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::DayOfMonth(day));
        }
        if hour > 23 {
            return Err(TimeError::Hour(hour));
        }
        if minute > 59 {
            return Err(TimeError::Minute(minute));
        }
        if second > 59 {
            return Err(TimeError::Second(second));
        }
        Ok(Self {
            year,
            month,
            day,
            second_of_day: hour as u32 * 3600 + minute as u32 * 60 + second as u32,
        })
    }

    /// Advance by `seconds`, rolling over days, months and years.
    pub fn advance(
        &mut self,
        seconds: u32,
    ) {
        let total = self.second_of_day as u64 + seconds as u64;
        self.second_of_day = (total % SECONDS_PER_DAY as u64) as u32;
        let mut days = total / SECONDS_PER_DAY as u64;
        while days > 0 {
            self.next_day();
            days -= 1;
        }
    }

    /// Step the hour forward on the same day, wrapping 23 to 0.
    ///
    /// Minutes and seconds are kept. Used for setting the time by hand.
    pub fn step_hour(&mut self) {
        let hour = self.second_of_day / 3600;
        let rest = self.second_of_day % 3600;
        self.second_of_day = (hour + 1) % 24 * 3600 + rest;
    }

    /// Step the minute forward within the hour, wrapping 59 to 0.
    pub fn step_minute(&mut self) {
        let hour_start = self.second_of_day - self.second_of_day % 3600;
        let minute = self.second_of_day % 3600 / 60;
        let second = self.second_of_day % 60;
        self.second_of_day = hour_start + (minute + 1) % 60 * 60 + second;
    }

    /// Drop the seconds, keeping hour and minute.
    pub fn zero_seconds(&mut self) { self.second_of_day -= self.second_of_day % 60; }

    fn next_day(&mut self) {
        if self.day < days_in_month(self.year, self.month) {
            self.day += 1;
            return;
        }
        self.day = 1;
        if self.month < 12 {
            self.month += 1;
        } else {
            self.month = 1;
            self.year = self.year.wrapping_add(1);
        }
    }

    #[inline]
    pub const fn year(&self) -> u16 { self.year }

    /// Current snapshot.
    pub const fn now(&self) -> WallClock {
        let hour = (self.second_of_day / 3600) as u8;
        let minute = (self.second_of_day / 60 % 60) as u8;
        let second = (self.second_of_day % 60) as u8;
        // All fields are in range by construction of `SoftClock`.
        WallClock {
            hour,
            minute,
            second,
            weekday: weekday(self.year, self.month, self.day),
            day: self.day,
            month: self.month - 1,
        }
    }
}

/// Gregorian leap year.
pub const fn is_leap_year(year: u16) -> bool { (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 }

/// Days in a civil month (1-12). Returns 0 for an invalid month.
pub const fn days_in_month(
    year: u16,
    month: u8,
) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Day of week (0 = Sunday) for a civil date, Sakamoto's method.
pub const fn weekday(
    year: u16,
    month: u8,
    day: u8,
) -> u8 {
    const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month < 3 { (year as u32).saturating_sub(1) } else { year as u32 };
    let idx = (month as usize + 11) % 12;
    ((y + y / 4 - y / 100 + y / 400 + OFFSETS[idx] + day as u32) % 7) as u8
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // WallClock Validation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_wall_clock_accepts_bounds() {
        assert!(WallClock::new(0, 0, 0, 0, 1, 0).is_ok(), "Lower bounds should be valid");
        assert!(WallClock::new(23, 59, 59, 6, 31, 11).is_ok(), "Upper bounds should be valid");
    }

    #[test]
    fn test_wall_clock_rejects_each_field() {
        assert_eq!(WallClock::new(24, 0, 0, 0, 1, 0), Err(TimeError::Hour(24)));
        assert_eq!(WallClock::new(0, 60, 0, 0, 1, 0), Err(TimeError::Minute(60)));
        assert_eq!(WallClock::new(0, 0, 60, 0, 1, 0), Err(TimeError::Second(60)));
        assert_eq!(WallClock::new(0, 0, 0, 7, 1, 0), Err(TimeError::Weekday(7)));
        assert_eq!(WallClock::new(0, 0, 0, 0, 0, 0), Err(TimeError::DayOfMonth(0)));
        assert_eq!(WallClock::new(0, 0, 0, 0, 32, 0), Err(TimeError::DayOfMonth(32)));
        assert_eq!(WallClock::new(0, 0, 0, 0, 1, 12), Err(TimeError::Month(12)));
    }

    #[test]
    fn test_wall_clock_reports_first_bad_field() {
        assert_eq!(
            WallClock::new(99, 99, 99, 9, 0, 99),
            Err(TimeError::Hour(99)),
            "Hour is checked first"
        );
    }

    #[test]
    fn test_time_error_display() {
        assert_eq!(TimeError::Minute(75).to_string(), "minute 75 out of range 0-59");
        assert_eq!(TimeError::DayOfMonth(0).to_string(), "day 0 out of range 1-31");
    }

    // -------------------------------------------------------------------------
    // Calendar Helper Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000), "Divisible by 400 is a leap year");
        assert!(!is_leap_year(1900), "Divisible by 100 but not 400 is not");
        assert!(!is_leap_year(2026));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 13), 0);
    }

    #[test]
    fn test_weekday_known_dates() {
        assert_eq!(weekday(2013, 7, 23), 2, "23 July 2013 was a Tuesday");
        assert_eq!(weekday(2000, 1, 1), 6, "1 January 2000 was a Saturday");
        assert_eq!(weekday(2024, 2, 29), 4, "29 February 2024 was a Thursday");
        assert_eq!(weekday(2026, 10, 19), 1, "19 October 2026 is a Monday");
    }

    // -------------------------------------------------------------------------
    // SoftClock Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_soft_clock_snapshot() {
        let clock = SoftClock::new(2026, 10, 19, 14, 50, 7).unwrap();
        let now = clock.now();
        assert_eq!((now.hour(), now.minute(), now.second()), (14, 50, 7));
        assert_eq!(now.day(), 19);
        assert_eq!(now.month(), 9, "WallClock months are 0-based");
        assert_eq!(now.weekday(), 1);
    }

    #[test]
    fn test_soft_clock_rejects_invalid_seed() {
        assert_eq!(SoftClock::new(2026, 0, 1, 0, 0, 0), Err(TimeError::Month(0)));
        assert_eq!(SoftClock::new(2026, 2, 29, 0, 0, 0), Err(TimeError::DayOfMonth(29)));
        assert_eq!(SoftClock::new(2026, 1, 1, 24, 0, 0), Err(TimeError::Hour(24)));
    }

    #[test]
    fn test_soft_clock_minute_rollover() {
        let mut clock = SoftClock::new(2026, 10, 19, 9, 59, 59).unwrap();
        clock.advance(1);
        let now = clock.now();
        assert_eq!((now.hour(), now.minute(), now.second()), (10, 0, 0));
    }

    #[test]
    fn test_soft_clock_midnight_rollover() {
        let mut clock = SoftClock::new(2026, 10, 19, 23, 59, 59).unwrap();
        clock.advance(1);
        let now = clock.now();
        assert_eq!((now.hour(), now.minute(), now.second()), (0, 0, 0));
        assert_eq!(now.day(), 20);
        assert_eq!(now.weekday(), 2, "Monday rolls to Tuesday");
    }

    #[test]
    fn test_soft_clock_year_rollover() {
        let mut clock = SoftClock::new(2026, 12, 31, 23, 59, 30).unwrap();
        clock.advance(45);
        let now = clock.now();
        assert_eq!(clock.year(), 2027);
        assert_eq!(now.month(), 0);
        assert_eq!(now.day(), 1);
        assert_eq!(now.second(), 15);
    }

    #[test]
    fn test_soft_clock_leap_day() {
        let mut clock = SoftClock::new(2024, 2, 28, 12, 0, 0).unwrap();
        clock.advance(SECONDS_PER_DAY);
        assert_eq!(clock.now().day(), 29);
        clock.advance(SECONDS_PER_DAY);
        assert_eq!(clock.now().day(), 1);
        assert_eq!(clock.now().month(), 2, "Leap day rolls into March");
    }

    #[test]
    fn test_soft_clock_multi_day_advance() {
        let mut clock = SoftClock::new(2026, 1, 30, 0, 0, 0).unwrap();
        clock.advance(SECONDS_PER_DAY * 3 + 61);
        let now = clock.now();
        assert_eq!(now.month(), 1, "30 Jan + 3 days = 2 Feb");
        assert_eq!(now.day(), 2);
        assert_eq!((now.hour(), now.minute(), now.second()), (0, 1, 1));
    }

    #[test]
    fn test_soft_clock_manual_steps_stay_on_day() {
        let mut clock = SoftClock::new(2026, 10, 19, 23, 59, 42).unwrap();
        clock.step_hour();
        let now = clock.now();
        assert_eq!((now.hour(), now.minute(), now.second()), (0, 59, 42), "Hour wraps without rolling the date");
        assert_eq!(now.day(), 19);

        clock.step_minute();
        let now = clock.now();
        assert_eq!((now.hour(), now.minute(), now.second()), (0, 0, 42), "Minute wraps without touching the hour");

        clock.zero_seconds();
        assert_eq!(clock.now().second(), 0);
        assert_eq!(clock.now().minute(), 0);
    }
}
