//! Button mapping and time setting.
//!
//! There is no battery-backed RTC, so the clock starts from [`START_CLOCK`]
//! on every boot and is set by hand with the Display Pack buttons:
//!
//! | Button | Command |
//! |--------|---------|
//! | A | Hour +1 (wraps on the same day) |
//! | B | Minute +1 (wraps within the hour) |
//! | X | Zero the seconds |
//! | Y | Full refresh ("became visible") |
//!
//! Every command ends in a full refresh, since any of them can move all
//! three hands at once.

use watchface_common::SoftClock;

/// Boot time of the software clock.
pub const START_CLOCK: SoftClock = match SoftClock::new(2026, 1, 15, 9, 49, 30) {
    Ok(clock) => clock,
    Err(_) => panic!("START_CLOCK is not a valid date-time"),
};

/// Display Pack 2.8" buttons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Button {
    A,
    B,
    X,
    Y,
}

impl Button {
    /// All buttons in GPIO order (12, 13, 14, 15).
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::X, Self::Y];
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Command {
    StepHour,
    StepMinute,
    ZeroSeconds,
    Refresh,
}

impl Command {
    pub const fn for_button(button: Button) -> Self {
        match button {
            Button::A => Self::StepHour,
            Button::B => Self::StepMinute,
            Button::X => Self::ZeroSeconds,
            Button::Y => Self::Refresh,
        }
    }

    /// Apply to the clock. [`Command::Refresh`] leaves it untouched.
    pub fn apply(
        self,
        clock: &mut SoftClock,
    ) {
        match self {
            Self::StepHour => clock.step_hour(),
            Self::StepMinute => clock.step_minute(),
            Self::ZeroSeconds => clock.zero_seconds(),
            Self::Refresh => {}
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(clock: &SoftClock) -> (u8, u8, u8) {
        let now = clock.now();
        (now.hour(), now.minute(), now.second())
    }

    #[test]
    fn test_start_clock() {
        let now = START_CLOCK.now();
        assert_eq!(hms(&START_CLOCK), (9, 49, 30));
        assert_eq!(now.weekday(), 4, "15 Jan 2026 is a Thursday");
        assert_eq!(now.month(), 0);
    }

    #[test]
    fn test_every_button_has_a_command() {
        let commands: Vec<Command> = Button::ALL.iter().map(|&b| Command::for_button(b)).collect();
        assert_eq!(
            commands,
            [Command::StepHour, Command::StepMinute, Command::ZeroSeconds, Command::Refresh]
        );
    }

    #[test]
    fn test_commands_set_the_clock() {
        let mut clock = START_CLOCK;

        Command::StepHour.apply(&mut clock);
        assert_eq!(hms(&clock), (10, 49, 30));

        Command::StepMinute.apply(&mut clock);
        assert_eq!(hms(&clock), (10, 50, 30));

        Command::ZeroSeconds.apply(&mut clock);
        assert_eq!(hms(&clock), (10, 50, 0));

        Command::Refresh.apply(&mut clock);
        assert_eq!(hms(&clock), (10, 50, 0), "Refresh does not touch the clock");
    }
}
