//! Display Pack buttons with debounce.
//!
//! Provides time-based edge detection with debouncing to prevent
//! multiple triggers from contact bounce on physical buttons.

use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant};

use crate::controls::Button;

/// Debounce duration in milliseconds.
pub const DEBOUNCE_MS: u64 = 50;

/// Button debounce state with time-based edge detection.
pub struct ButtonState {
    was_pressed: bool,
    last_change: Option<Instant>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change: None,
        }
    }

    /// Returns true only on the falling edge (button just pressed).
    ///
    /// Buttons are active-low, so `is_low()` means pressed.
    pub fn just_pressed(
        &mut self,
        is_low: bool,
    ) -> bool {
        if is_low == self.was_pressed {
            return false;
        }

        // Ignore changes inside the debounce window
        if let Some(last) = self.last_change
            && last.elapsed() < Duration::from_millis(DEBOUNCE_MS)
        {
            return false;
        }

        self.was_pressed = is_low;
        self.last_change = Some(Instant::now());
        is_low
    }
}

/// The four Display Pack buttons (A/B/X/Y on GPIO 12-15, pulled up).
pub struct Buttons<'d> {
    inputs: [Input<'d>; 4],
    states: [ButtonState; 4],
}

impl<'d> Buttons<'d> {
    /// `inputs` in [`Button::ALL`] order.
    pub fn new(inputs: [Input<'d>; 4]) -> Self {
        Self {
            inputs,
            states: [const { ButtonState::new() }; 4],
        }
    }

    /// Next button pressed since the last poll, in A/B/X/Y priority.
    ///
    /// Every button's state is updated on each call so a release is never
    /// missed while another button is held.
    pub fn poll(&mut self) -> Option<Button> {
        let mut pressed = None;
        for ((input, state), button) in self.inputs.iter().zip(self.states.iter_mut()).zip(Button::ALL) {
            if state.just_pressed(input.is_low()) && pressed.is_none() {
                pressed = Some(button);
            }
        }
        pressed
    }
}
