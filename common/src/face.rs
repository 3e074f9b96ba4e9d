//! Face controller: decides which regions to redraw on each tick.
//!
//! The controller owns everything that persists between ticks (the
//! precomputed dial, the last displayed text of each text region, the alert
//! schedule and the event log) and emits drawable descriptions to a
//! [`FaceSurface`]. It never draws pixels itself.
//!
//! # Tick Handling
//!
//! ```text
//! every tick              -> second hand
//! second == 0             -> minute hand, digital time, countdown
//!   minute % 12 == 0      -> hour hand
//!   minute == 0
//!     hour == 0           -> date
//!   else alert minute     -> vibration (unless sleeping)
//! ```
//!
//! The first tick after construction, and every call to
//! [`FaceController::appear`], redraws every region unconditionally. The
//! first tick still runs the alert check when it lands on second 0.

use crate::clock::{TimeError, WallClock};
use crate::config::HOUR_HAND_STEP;
use crate::countdown::{AlertIcon, CountdownClock, CountdownState};
use crate::dial::DialFace;
use crate::hands::{HandKind, HandShape};
use crate::locale::Locale;
use crate::log::{EventLog, FaceEvent};
use crate::render::{Region, RegionContent, Staleness};
use crate::text::{CountdownText, DateText, DigitalText, countdown_text, date_line, digital_time};
use crate::vibe::{ALERT_PATTERN, VibePattern};

// =============================================================================
// Surfaces
// =============================================================================

/// Display backend.
///
/// Redraw requests arrive in draw order within one tick. A backend may draw
/// immediately or collect the requests and flush once.
pub trait FaceSurface {
    fn redraw(
        &mut self,
        region: Region,
        content: RegionContent<'_>,
    );
}

/// Haptic backend.
pub trait AlertSurface {
    fn vibrate(
        &mut self,
        pattern: &VibePattern,
    );
}

// =============================================================================
// Face Controller
// =============================================================================

/// Tick-driven scheduler for the watch face.
pub struct FaceController {
    locale: Locale,
    countdown: CountdownClock,
    dial: DialFace,
    events: EventLog,
    /// Whether the face has been fully drawn at least once.
    shown: bool,
    digital: DigitalText,
    date: DateText,
    countdown_shown: Option<(AlertIcon, CountdownText)>,
}

impl FaceController {
    /// Controller with the default alert schedule.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            countdown: CountdownClock::new(),
            dial: DialFace::new(),
            events: EventLog::new(),
            shown: false,
            digital: DigitalText::new(),
            date: DateText::new(),
            countdown_shown: None,
        }
    }

    /// Replace the alert schedule.
    #[must_use]
    pub const fn with_countdown(
        mut self,
        countdown: CountdownClock,
    ) -> Self {
        self.countdown = countdown;
        self
    }

    #[inline]
    pub const fn countdown(&self) -> &CountdownClock { &self.countdown }

    #[inline]
    pub const fn locale(&self) -> &Locale { &self.locale }

    /// Recent face events, oldest first.
    #[inline]
    pub const fn events(&self) -> &EventLog { &self.events }

    /// Mutable access for hosts that drain events into their own logger.
    #[inline]
    pub const fn events_mut(&mut self) -> &mut EventLog { &mut self.events }

    /// Full refresh: every region is redrawn exactly once, regardless of
    /// gating or cached text.
    pub fn appear(
        &mut self,
        time: &WallClock,
        surface: &mut impl FaceSurface,
    ) -> Staleness {
        surface.redraw(Region::Background, RegionContent::TickField(&self.dial));
        for kind in HandKind::ALL {
            Self::draw_hand(kind, time, surface);
        }

        self.digital = digital_time(time);
        surface.redraw(Region::DigitalTime, RegionContent::Text(&self.digital));

        self.date = date_line(time, &self.locale);
        surface.redraw(Region::Date, RegionContent::Text(&self.date));

        let state = self.countdown.evaluate(time);
        self.draw_countdown(&state, surface);

        self.shown = true;
        self.events.record(FaceEvent::FullRefresh {
            hour: time.hour(),
            minute: time.minute(),
        });
        Staleness::all()
    }

    /// Handle one "second elapsed" event.
    ///
    /// Returns the regions redrawn. The first tick after construction is a
    /// full refresh, after which a minute-boundary tick still checks the
    /// alert.
    pub fn tick(
        &mut self,
        time: &WallClock,
        surface: &mut impl FaceSurface,
        alert: &mut impl AlertSurface,
    ) -> Staleness {
        if !self.shown {
            let stale = self.appear(time, surface);
            // A full refresh covers the display only; the alert still fires
            if time.second() == 0 {
                self.check_alert(time, alert);
            }
            return stale;
        }

        let mut stale = Staleness::none();
        let on_minute = time.second() == 0;

        if on_minute && time.minute() % HOUR_HAND_STEP == 0 {
            Self::draw_hand(HandKind::Hour, time, surface);
            stale.insert(Region::HourHand);
        }
        if on_minute {
            Self::draw_hand(HandKind::Minute, time, surface);
            stale.insert(Region::MinuteHand);
        }
        Self::draw_hand(HandKind::Second, time, surface);
        stale.insert(Region::SecondHand);

        if !on_minute {
            return stale;
        }

        let digital = digital_time(time);
        if digital != self.digital {
            self.digital = digital;
            surface.redraw(Region::DigitalTime, RegionContent::Text(&self.digital));
            stale.insert(Region::DigitalTime);
        }

        if time.minute() == 0 && time.hour() == 0 {
            let date = date_line(time, &self.locale);
            if date != self.date {
                self.date = date;
                surface.redraw(Region::Date, RegionContent::Text(&self.date));
                stale.insert(Region::Date);
            }
            self.events.record(FaceEvent::DateRolled {
                day: time.day(),
                month: time.month(),
            });
        }

        let state = self.countdown.evaluate(time);
        let shown = Some((state.icon(), countdown_text(&state)));
        if self.countdown_shown != shown {
            self.draw_countdown(&state, surface);
            stale.insert(Region::Countdown);
        }

        self.check_alert(time, alert);
        stale
    }

    /// [`tick`](Self::tick) from unvalidated fields.
    ///
    /// An out-of-range field rejects the whole tick: nothing is redrawn and a
    /// [`FaceEvent::TickRejected`] is logged.
    #[allow(clippy::too_many_arguments)]
    pub fn tick_raw(
        &mut self,
        hour: u8,
        minute: u8,
        second: u8,
        weekday: u8,
        day: u8,
        month: u8,
        surface: &mut impl FaceSurface,
        alert: &mut impl AlertSurface,
    ) -> Result<Staleness, TimeError> {
        match WallClock::new(hour, minute, second, weekday, day, month) {
            Ok(time) => Ok(self.tick(&time, surface, alert)),
            Err(err) => {
                self.events.record(FaceEvent::TickRejected(err));
                Err(err)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn check_alert(
        &mut self,
        time: &WallClock,
        alert: &mut impl AlertSurface,
    ) {
        let (hour, minute) = (time.hour(), time.minute());
        if minute != self.countdown.alert_minute() {
            return;
        }

        if !self.countdown.should_trigger(time) {
            self.events.record(FaceEvent::AlertSuppressed { hour, minute });
        } else if minute == 0 {
            // Minute 0 belongs to the date branch
            self.events.record(FaceEvent::AlertShadowedByDate { hour });
        } else {
            alert.vibrate(&ALERT_PATTERN);
            self.events.record(FaceEvent::AlertRequested { hour, minute });
        }
    }

    fn draw_hand(
        kind: HandKind,
        time: &WallClock,
        surface: &mut impl FaceSurface,
    ) {
        let shape = HandShape::for_time(kind, time);
        surface.redraw(Region::for_hand(kind), RegionContent::Hand(&shape));
    }

    fn draw_countdown(
        &mut self,
        state: &CountdownState,
        surface: &mut impl FaceSurface,
    ) {
        let icon = state.icon();
        let text = countdown_text(state);
        surface.redraw(Region::Countdown, RegionContent::Indicator { icon, text: &text });
        self.countdown_shown = Some((icon, text));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::Point;

    use super::*;
    use crate::locale::{ENGLISH, HUNGARIAN};

    #[derive(Debug, Clone, PartialEq)]
    enum Drawn {
        TickField,
        Hand { kind: HandKind, tip: Point },
        Text(String),
        Indicator { icon: AlertIcon, text: String },
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<(Region, Drawn)>,
    }

    impl RecordingSurface {
        fn regions(&self) -> Vec<Region> { self.calls.iter().map(|(r, _)| *r).collect() }

        fn count(
            &self,
            region: Region,
        ) -> usize {
            self.calls.iter().filter(|(r, _)| *r == region).count()
        }

        fn last(
            &self,
            region: Region,
        ) -> Option<&Drawn> {
            self.calls.iter().rev().find(|(r, _)| *r == region).map(|(_, d)| d)
        }

        fn clear(&mut self) { self.calls.clear(); }
    }

    impl FaceSurface for RecordingSurface {
        fn redraw(
            &mut self,
            region: Region,
            content: RegionContent<'_>,
        ) {
            let drawn = match content {
                RegionContent::TickField(_) => Drawn::TickField,
                RegionContent::Hand(shape) => Drawn::Hand {
                    kind: shape.kind,
                    tip: shape.tip,
                },
                RegionContent::Text(text) => Drawn::Text(text.to_string()),
                RegionContent::Indicator { icon, text } => Drawn::Indicator {
                    icon,
                    text: text.to_string(),
                },
            };
            self.calls.push((region, drawn));
        }
    }

    #[derive(Default)]
    struct RecordingMotor {
        patterns: Vec<VibePattern>,
    }

    impl AlertSurface for RecordingMotor {
        fn vibrate(
            &mut self,
            pattern: &VibePattern,
        ) {
            self.patterns.push(*pattern);
        }
    }

    fn at(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> WallClock {
        WallClock::new(hour, minute, second, 3, 15, 0).unwrap()
    }

    /// Controller that has already been shown once at `time`.
    fn shown_at(time: &WallClock) -> (FaceController, RecordingSurface, RecordingMotor) {
        let mut face = FaceController::new(HUNGARIAN);
        let mut surface = RecordingSurface::default();
        face.appear(time, &mut surface);
        surface.clear();
        (face, surface, RecordingMotor::default())
    }

    // -------------------------------------------------------------------------
    // Full Refresh Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_full_refresh_draws_every_region_once() {
        let mut face = FaceController::new(HUNGARIAN);
        let mut surface = RecordingSurface::default();

        let stale = face.appear(&at(9, 5, 30), &mut surface);

        assert_eq!(stale, Staleness::all());
        assert_eq!(surface.calls.len(), 7, "Six display regions plus countdown");
        for region in Region::ALL {
            assert_eq!(surface.count(region), 1, "{:?} should be drawn exactly once", region);
        }
        assert_eq!(surface.regions(), Region::ALL.to_vec(), "Draw order");
    }

    #[test]
    fn test_full_refresh_content() {
        let mut face = FaceController::new(HUNGARIAN);
        let mut surface = RecordingSurface::default();
        face.appear(&at(9, 5, 30), &mut surface);

        assert_eq!(surface.last(Region::Background), Some(&Drawn::TickField));
        assert_eq!(surface.last(Region::DigitalTime), Some(&Drawn::Text("09:05".to_string())));
        assert_eq!(
            surface.last(Region::Date),
            Some(&Drawn::Text("Jan 15. Szerda".to_string()))
        );
        assert_eq!(
            surface.last(Region::Countdown),
            Some(&Drawn::Indicator {
                icon: AlertIcon::Armed,
                text: "45".to_string(),
            })
        );
        assert!(matches!(
            surface.last(Region::SecondHand),
            Some(Drawn::Hand {
                kind: HandKind::Second,
                ..
            })
        ));
    }

    #[test]
    fn test_full_refresh_ignores_text_cache() {
        let (mut face, mut surface, _) = shown_at(&at(9, 5, 30));
        face.appear(&at(9, 5, 31), &mut surface);
        assert_eq!(surface.calls.len(), 7, "Unchanged text is still redrawn");
    }

    #[test]
    fn test_first_tick_is_full_refresh() {
        let mut face = FaceController::new(HUNGARIAN);
        let mut surface = RecordingSurface::default();
        let mut motor = RecordingMotor::default();

        let stale = face.tick(&at(9, 5, 30), &mut surface, &mut motor);
        assert_eq!(stale, Staleness::all());
        assert_eq!(surface.calls.len(), 7);
        assert_eq!(face.events().last(), Some(&FaceEvent::FullRefresh { hour: 9, minute: 5 }));
    }

    #[test]
    fn test_first_tick_on_alert_minute_still_vibrates() {
        let mut face = FaceController::new(HUNGARIAN);
        let mut surface = RecordingSurface::default();
        let mut motor = RecordingMotor::default();

        let stale = face.tick(&at(14, 50, 0), &mut surface, &mut motor);

        assert_eq!(stale, Staleness::all(), "First tick is still a full refresh");
        assert_eq!(surface.calls.len(), 7);
        assert_eq!(motor.patterns, [ALERT_PATTERN], "Alert must not be lost to the first refresh");
        assert_eq!(
            face.events().last(),
            Some(&FaceEvent::AlertRequested { hour: 14, minute: 50 })
        );
    }

    #[test]
    fn test_first_tick_off_minute_boundary_does_not_vibrate() {
        let mut face = FaceController::new(HUNGARIAN);
        let mut surface = RecordingSurface::default();
        let mut motor = RecordingMotor::default();

        face.tick(&at(14, 50, 1), &mut surface, &mut motor);

        assert!(motor.patterns.is_empty(), "Alert is edge-triggered on second 0");
    }

    // -------------------------------------------------------------------------
    // Gating Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_mid_minute_tick_only_second_hand() {
        let (mut face, mut surface, mut motor) = shown_at(&at(9, 5, 30));

        let stale = face.tick(&at(9, 5, 31), &mut surface, &mut motor);

        assert_eq!(surface.regions(), [Region::SecondHand]);
        assert_eq!(stale.len(), 1);
        assert!(stale.contains(Region::SecondHand));
    }

    #[test]
    fn test_minute_boundary_tick() {
        let (mut face, mut surface, mut motor) = shown_at(&at(9, 5, 59));

        let stale = face.tick(&at(9, 6, 0), &mut surface, &mut motor);

        assert_eq!(
            surface.regions(),
            [Region::MinuteHand, Region::SecondHand, Region::DigitalTime, Region::Countdown]
        );
        assert!(!stale.contains(Region::HourHand), "6 % 12 != 0");
        assert!(!stale.contains(Region::Date));
        assert_eq!(surface.last(Region::DigitalTime), Some(&Drawn::Text("09:06".to_string())));
        assert!(motor.patterns.is_empty());
    }

    #[test]
    fn test_hour_hand_every_twelve_minutes() {
        let (mut face, mut surface, mut motor) = shown_at(&at(9, 11, 59));

        let stale = face.tick(&at(9, 12, 0), &mut surface, &mut motor);
        assert!(stale.contains(Region::HourHand), "Hour hand steps at :12");
        assert_eq!(surface.regions()[0], Region::HourHand, "Hour hand drawn first");

        let hours = (0u8..60)
            .filter(|&m| face.tick(&at(10, m, 0), &mut surface, &mut motor).contains(Region::HourHand))
            .count();
        assert_eq!(hours, 5, "Minutes 0, 12, 24, 36, 48");
    }

    #[test]
    fn test_countdown_cache_skips_unchanged_indicator() {
        let (mut face, mut surface, mut motor) = shown_at(&at(23, 48, 30));

        face.tick(&at(23, 49, 0), &mut surface, &mut motor);
        assert_eq!(surface.count(Region::Countdown), 0, "Still \"--\" with the sleep icon");
        assert_eq!(surface.count(Region::DigitalTime), 1);
    }

    #[test]
    fn test_countdown_redrawn_when_sleep_starts() {
        let (mut face, mut surface, mut motor) = shown_at(&at(21, 50, 30));

        face.tick(&at(21, 51, 0), &mut surface, &mut motor);
        assert_eq!(
            surface.last(Region::Countdown),
            Some(&Drawn::Indicator {
                icon: AlertIcon::Suppressed,
                text: "--".to_string(),
            })
        );
    }

    // -------------------------------------------------------------------------
    // Alert Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_alert_at_fifty_past() {
        let (mut face, mut surface, mut motor) = shown_at(&at(14, 49, 59));

        face.tick(&at(14, 50, 0), &mut surface, &mut motor);

        assert_eq!(motor.patterns, [ALERT_PATTERN], "Exactly one vibration");
        assert_eq!(motor.patterns[0].durations_ms(), &[700, 100, 700, 100, 700]);
        assert_eq!(
            face.events().last(),
            Some(&FaceEvent::AlertRequested { hour: 14, minute: 50 })
        );
        assert_eq!(
            surface.last(Region::Countdown),
            Some(&Drawn::Indicator {
                icon: AlertIcon::Armed,
                text: "0".to_string(),
            })
        );
    }

    #[test]
    fn test_alert_only_on_minute_boundary() {
        let (mut face, mut surface, mut motor) = shown_at(&at(14, 49, 59));
        for second in 0..60 {
            face.tick(&at(14, 50, second), &mut surface, &mut motor);
        }
        assert_eq!(motor.patterns.len(), 1, "Seconds 1-59 of the alert minute stay quiet");
    }

    #[test]
    fn test_alert_suppressed_at_night() {
        let (mut face, mut surface, mut motor) = shown_at(&at(23, 49, 59));

        face.tick(&at(23, 50, 0), &mut surface, &mut motor);

        assert!(motor.patterns.is_empty(), "23:50 is inside the sleep window");
        assert_eq!(
            face.events().last(),
            Some(&FaceEvent::AlertSuppressed { hour: 23, minute: 50 })
        );
    }

    #[test]
    fn test_alert_on_the_hour_yields_to_date_branch() {
        let schedule = CountdownClock::new().with_alert_minute(0);
        let mut face = FaceController::new(HUNGARIAN).with_countdown(schedule);
        let mut surface = RecordingSurface::default();
        let mut motor = RecordingMotor::default();
        face.appear(&at(11, 59, 59), &mut surface);

        face.tick(&at(12, 0, 0), &mut surface, &mut motor);

        assert!(motor.patterns.is_empty(), "Minute 0 runs the date branch instead");
        assert_eq!(face.events().last(), Some(&FaceEvent::AlertShadowedByDate { hour: 12 }));
    }

    // -------------------------------------------------------------------------
    // Date Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_date_rolls_at_midnight() {
        let mut face = FaceController::new(HUNGARIAN);
        let mut surface = RecordingSurface::default();
        let mut motor = RecordingMotor::default();
        let before = WallClock::new(23, 59, 59, 3, 15, 0).unwrap();
        face.appear(&before, &mut surface);
        surface.clear();

        let midnight = WallClock::new(0, 0, 0, 4, 16, 0).unwrap();
        let stale = face.tick(&midnight, &mut surface, &mut motor);

        assert!(stale.contains(Region::Date));
        assert!(stale.contains(Region::HourHand), "0 % 12 == 0");
        assert_eq!(
            surface.last(Region::Date),
            Some(&Drawn::Text("Jan 16. Csütörtök".to_string()))
        );
        assert_eq!(face.events().last(), Some(&FaceEvent::DateRolled { day: 16, month: 0 }));
    }

    #[test]
    fn test_date_not_redrawn_at_other_hours() {
        let (mut face, mut surface, mut motor) = shown_at(&at(12, 59, 59));
        let stale = face.tick(&at(13, 0, 0), &mut surface, &mut motor);
        assert!(!stale.contains(Region::Date), "Date only changes at 00:00:00");
    }

    #[test]
    fn test_locale_swaps_date_text() {
        let mut face = FaceController::new(ENGLISH);
        let mut surface = RecordingSurface::default();
        face.appear(&at(12, 0, 0), &mut surface);
        assert_eq!(
            surface.last(Region::Date),
            Some(&Drawn::Text("Jan 15. Wednesday".to_string()))
        );
    }

    // -------------------------------------------------------------------------
    // Validation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_raw_rejects_out_of_range() {
        let (mut face, mut surface, mut motor) = shown_at(&at(9, 5, 30));

        let result = face.tick_raw(9, 75, 0, 3, 15, 0, &mut surface, &mut motor);

        assert_eq!(result, Err(TimeError::Minute(75)));
        assert!(surface.calls.is_empty(), "Rejected tick draws nothing");
        assert_eq!(face.events().last(), Some(&FaceEvent::TickRejected(TimeError::Minute(75))));
    }

    #[test]
    fn test_tick_raw_accepts_valid() {
        let (mut face, mut surface, mut motor) = shown_at(&at(9, 5, 30));
        let stale = face.tick_raw(9, 5, 31, 3, 15, 0, &mut surface, &mut motor).unwrap();
        assert_eq!(stale.len(), 1);
    }
}
