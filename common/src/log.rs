//! Face event log.
//!
//! A small ring buffer of notable [`FaceEvent`]s recorded by the face
//! controller: refreshes, alerts, suppressed alerts, date rollovers and
//! rejected ticks. Hosts drain or iterate it to forward events to their own
//! logger (defmt on the firmware, `log` in the simulator).
//!
//! With the `defmt` feature, every recorded event is also emitted through
//! defmt at a level matching its [`FaceEvent::level`].
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.record(FaceEvent::FullRefresh { hour: 9, minute: 5 });
//!
//! for event in log.drain() {
//!     println!("{}", event);
//! }
//! ```

use core::fmt;

use heapless::Deque;

use crate::clock::TimeError;

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Maximum number of events kept. Older events are dropped first.
pub const EVENT_LOG_SIZE: usize = 8;

// =============================================================================
// Events
// =============================================================================

/// Severity of a face event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventLevel {
    Debug,
    Info,
    Warn,
}

/// Something worth logging that happened while driving the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceEvent {
    /// Every region was redrawn (first display or "became visible").
    FullRefresh { hour: u8, minute: u8 },
    /// Alert vibration requested.
    AlertRequested { hour: u8, minute: u8 },
    /// Alert minute reached inside the sleep window.
    AlertSuppressed { hour: u8, minute: u8 },
    /// Alert minute coincided with minute 0; the date branch ran instead.
    AlertShadowedByDate { hour: u8 },
    /// Date text recomputed at midnight.
    DateRolled { day: u8, month: u8 },
    /// A tick carried an out-of-range time and was ignored.
    TickRejected(TimeError),
}

impl FaceEvent {
    pub const fn level(&self) -> EventLevel {
        match self {
            Self::FullRefresh { .. } | Self::DateRolled { .. } => EventLevel::Debug,
            Self::AlertRequested { .. } | Self::AlertSuppressed { .. } => EventLevel::Info,
            Self::AlertShadowedByDate { .. } | Self::TickRejected(_) => EventLevel::Warn,
        }
    }
}

impl fmt::Display for FaceEvent {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::FullRefresh { hour, minute } => write!(f, "full refresh at {hour:02}:{minute:02}"),
            Self::AlertRequested { hour, minute } => write!(f, "vibration alert at {hour:02}:{minute:02}"),
            Self::AlertSuppressed { hour, minute } => {
                write!(f, "alert suppressed at {hour:02}:{minute:02} (sleep window)")
            }
            Self::AlertShadowedByDate { hour } => write!(f, "alert at {hour:02}:00 skipped for date update"),
            Self::DateRolled { day, month } => write!(f, "date rolled to day {day}, month {}", month + 1),
            Self::TickRejected(err) => write!(f, "tick rejected: {err}"),
        }
    }
}

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Ring buffer of the last [`EVENT_LOG_SIZE`] face events.
pub struct EventLog {
    buffer: Deque<FaceEvent, EVENT_LOG_SIZE>,
}

impl EventLog {
    /// Create a new empty event log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Record an event. If the buffer is full, the oldest event is dropped.
    pub fn record(
        &mut self,
        event: FaceEvent,
    ) {
        #[cfg(feature = "defmt")]
        match event.level() {
            EventLevel::Debug => defmt::debug!("face: {}", event),
            EventLevel::Info => defmt::info!("face: {}", event),
            EventLevel::Warn => defmt::warn!("face: {}", event),
        }

        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(event).ok();
    }

    /// Iterate over events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &FaceEvent> { self.buffer.iter() }

    /// Remove and return events, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = FaceEvent> + '_ {
        core::iter::from_fn(move || self.buffer.pop_front())
    }

    #[inline]
    pub fn last(&self) -> Option<&FaceEvent> { self.buffer.back() }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
