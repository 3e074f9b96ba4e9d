//! Region model and redraw tracking.
//!
//! This module provides:
//! - [`Region`] - The visual regions of the face
//! - [`Staleness`] - Set of regions that need redrawing after a tick
//! - [`RegionContent`] - What a backend is asked to draw into a region
//!
//! The face controller decides *what* changed; a backend implementing
//! [`FaceSurface`](crate::face::FaceSurface) decides *how* it looks.
//!
//! # Update Strategy
//!
//! | Region | Update Frequency | Strategy |
//! |--------|-----------------|----------|
//! | Background | Once / on full refresh | Draw-once (tick field never changes) |
//! | Second hand | Every tick | Always redraw |
//! | Minute hand | `second == 0` | Gated |
//! | Hour hand | `second == 0 && minute % 12 == 0` | Gated |
//! | Digital time | `second == 0` | Gated + text cache |
//! | Countdown | `second == 0` | Gated + text cache |
//! | Date | `00:00:00` | Gated + text cache |
//!
//! A full refresh ("became visible") redraws every region once and ignores
//! the text caches.

use embedded_graphics::primitives::Rectangle;

use crate::config::{ANALOG_RECT, COUNTDOWN_RECT, DATE_RECT, DIGITAL_RECT};
use crate::countdown::AlertIcon;
use crate::dial::DialFace;
use crate::hands::{HandKind, HandShape};

// =============================================================================
// Region
// =============================================================================

/// A visual region of the face.
///
/// Declaration order is draw order: the background sits under the hands, the
/// hour hand under the minute hand, and so on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Region {
    /// Dial tick marks, numerals and center dot.
    Background,
    HourHand,
    MinuteHand,
    SecondHand,
    /// `HH:MM` readout.
    DigitalTime,
    /// Month, day and weekday line.
    Date,
    /// Alert icon plus minutes remaining.
    Countdown,
}

impl Region {
    /// Every region, in draw order.
    pub const ALL: [Self; 7] = [
        Self::Background,
        Self::HourHand,
        Self::MinuteHand,
        Self::SecondHand,
        Self::DigitalTime,
        Self::Date,
        Self::Countdown,
    ];

    /// Screen rectangle. The dial layers share the analog rectangle.
    pub const fn rect(self) -> Rectangle {
        match self {
            Self::Background | Self::HourHand | Self::MinuteHand | Self::SecondHand => ANALOG_RECT,
            Self::DigitalTime => DIGITAL_RECT,
            Self::Date => DATE_RECT,
            Self::Countdown => COUNTDOWN_RECT,
        }
    }

    /// Whether this region is one of the stacked dial layers.
    #[inline]
    pub const fn is_analog(self) -> bool {
        matches!(self, Self::Background | Self::HourHand | Self::MinuteHand | Self::SecondHand)
    }

    /// Region holding the given hand.
    pub const fn for_hand(kind: HandKind) -> Self {
        match kind {
            HandKind::Hour => Self::HourHand,
            HandKind::Minute => Self::MinuteHand,
            HandKind::Second => Self::SecondHand,
        }
    }

    #[inline]
    const fn bit(self) -> u8 { 1 << self as u8 }
}

// =============================================================================
// Staleness
// =============================================================================

/// Set of regions redrawn (or due for redraw) on one tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Staleness {
    bits: u8,
}

impl Staleness {
    /// No region stale.
    pub const fn none() -> Self { Self { bits: 0 } }

    /// Every region stale.
    pub const fn all() -> Self {
        let mut set = Self::none();
        let mut i = 0;
        while i < Region::ALL.len() {
            set.bits |= Region::ALL[i].bit();
            i += 1;
        }
        set
    }

    #[inline]
    pub const fn insert(
        &mut self,
        region: Region,
    ) {
        self.bits |= region.bit();
    }

    #[inline]
    pub const fn contains(
        &self,
        region: Region,
    ) -> bool {
        self.bits & region.bit() != 0
    }

    #[inline]
    pub const fn len(&self) -> usize { self.bits.count_ones() as usize }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.bits == 0 }

    /// Whether any dial layer is in the set.
    pub const fn touches_analog(&self) -> bool {
        self.contains(Region::Background)
            || self.contains(Region::HourHand)
            || self.contains(Region::MinuteHand)
            || self.contains(Region::SecondHand)
    }

    /// Members in draw order.
    pub fn iter(&self) -> impl Iterator<Item = Region> + '_ {
        Region::ALL.into_iter().filter(|r| self.contains(*r))
    }
}

impl FromIterator<Region> for Staleness {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        let mut set = Self::none();
        for region in iter {
            set.insert(region);
        }
        set
    }
}

// =============================================================================
// Region Content
// =============================================================================

/// Drawable description handed to a backend for one region.
#[derive(Clone, Copy, Debug)]
pub enum RegionContent<'a> {
    /// Precomputed dial: tick marks, numerals, center dot.
    TickField(&'a DialFace),
    /// One hand's line segments.
    Hand(&'a HandShape),
    /// A line of text.
    Text(&'a str),
    /// Icon with a short label (the countdown).
    Indicator { icon: AlertIcon, text: &'a str },
}

// =============================================================================
// Tests
// =============================================================================
