//! Text for the digital readout, date line and countdown.
//!
//! All buffers are `heapless::String` sized for the longest possible output,
//! formatted with `core::fmt::Write` (no allocator).
//!
//! | Field | Format | Example |
//! |-------|--------|---------|
//! | Digital time | `HH:MM`, 24-hour | `09:05` |
//! | Date | `<month> <day>. <weekday>` | `Jan 15. Szerda` |
//! | Countdown | 1-2 digits, or `--` when suppressed | `7`, `--` |

use core::fmt::Write;

use heapless::String;

use crate::clock::WallClock;
use crate::countdown::CountdownState;
use crate::locale::Locale;

/// `HH:MM`.
pub const DIGITAL_TEXT_LEN: usize = 5;

/// Longest Hungarian line is `Szept 30. Csütörtök` (22 bytes in UTF-8); room to
/// spare for other tables.
pub const DATE_TEXT_LEN: usize = 40;

/// Two digits or `--`.
pub const COUNTDOWN_TEXT_LEN: usize = 2;

/// Placeholder shown instead of minutes while alerts are suppressed.
pub const SUPPRESSED_TEXT: &str = "--";

pub type DigitalText = String<DIGITAL_TEXT_LEN>;
pub type DateText = String<DATE_TEXT_LEN>;
pub type CountdownText = String<COUNTDOWN_TEXT_LEN>;

/// Zero-padded 24-hour `HH:MM`.
pub fn digital_time(time: &WallClock) -> DigitalText {
    let mut s = DigitalText::new();
    let _ = write!(s, "{:02}:{:02}", time.hour(), time.minute());
    s
}

/// `<month> <day>. <weekday>` in `locale`.
///
/// Names longer than the buffer are cut at the last whole character that fits.
pub fn date_line(
    time: &WallClock,
    locale: &Locale,
) -> DateText {
    let mut s = DateText::new();
    let mut day: String<3> = String::new();
    let _ = write!(day, "{}.", time.day());

    for part in [locale.month(time.month()), " ", day.as_str(), " ", locale.weekday(time.weekday())] {
        for c in part.chars() {
            if s.push(c).is_err() {
                return s;
            }
        }
    }
    s
}

/// Minutes remaining, or [`SUPPRESSED_TEXT`].
pub fn countdown_text(state: &CountdownState) -> CountdownText {
    let mut s = CountdownText::new();
    if state.suppressed {
        let _ = s.push_str(SUPPRESSED_TEXT);
    } else {
        let _ = write!(s, "{}", state.minutes_remaining);
    }
    s
}

// =============================================================================
// Tests
// =============================================================================
