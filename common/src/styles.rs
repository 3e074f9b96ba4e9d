//! Pre-computed static text styles.
//!
//! Styles are `const` so no `MonoTextStyle` is built per redraw.
//!
//! | Text | Font |
//! |------|------|
//! | Digital `HH:MM` | ProFont 24pt |
//! | Countdown minutes | ProFont 18pt |
//! | Date line | 7x13 ISO-8859-2 (Hungarian accents such as "ő") |
//! | Dial numerals | 5x8 ASCII |

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_5X8, iso_8859_2::FONT_7X13},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::FOREGROUND;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered horizontally and vertically around the anchor point.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Anchor is the top edge of the text, with the given horizontal alignment.
pub const fn top_aligned(alignment: Alignment) -> TextStyle {
    TextStyleBuilder::new().alignment(alignment).baseline(Baseline::Top).build()
}

// =============================================================================
// Font References
// =============================================================================

/// Date line font. Exposed so hosts can measure text width.
pub const DATE_FONT: &MonoFont = &FONT_7X13;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Large digital `HH:MM`.
pub const DIGITAL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, FOREGROUND);

/// Date line, with Latin-2 glyphs.
pub const DATE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, FOREGROUND);

/// Minutes remaining under the vibration icon.
pub const COUNTDOWN_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, FOREGROUND);

/// Small dial numerals ("12", "3", "6", "9").
pub const NUMERAL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_5X8, FOREGROUND);
