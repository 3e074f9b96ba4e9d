//! Weekday and month name tables for the date line.
//!
//! Tables are plain data; swap the [`Locale`] passed to the face controller to
//! change language. Names may use any Latin-2 character (the date font is
//! ISO-8859-2).

/// Localized names. `weekdays[0]` is Sunday, `months[0]` is January.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
}

impl Locale {
    /// Weekday name for `index` (0 = Sunday). Wraps modulo 7.
    #[inline]
    pub const fn weekday(
        &self,
        index: u8,
    ) -> &'static str {
        self.weekdays[(index % 7) as usize]
    }

    /// Month abbreviation for `index` (0 = January). Wraps modulo 12.
    #[inline]
    pub const fn month(
        &self,
        index: u8,
    ) -> &'static str {
        self.months[(index % 12) as usize]
    }
}

/// Hungarian (reference locale).
pub const HUNGARIAN: Locale = Locale {
    weekdays: ["Vasárnap", "Hétfő", "Kedd", "Szerda", "Csütörtök", "Péntek", "Szombat"],
    months: [
        "Jan", "Febr", "Márc", "Ápr", "Máj", "Jún", "Júl", "Aug", "Szept", "Okt", "Nov", "Dec",
    ],
};

/// English.
pub const ENGLISH: Locale = Locale {
    weekdays: ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
    months: ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
};

impl Default for Locale {
    fn default() -> Self { HUNGARIAN }
}
