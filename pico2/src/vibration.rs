//! Vibration motor on a GPIO.
//!
//! The face controller requests patterns through [`SignalledMotor`], which
//! only raises [`VIBE_SIGNAL`]. [`vibration_task`] owns the pin and plays the
//! pattern with `embassy_time` timers, so the render loop never waits on a
//! buzz.

use defmt::info;
use embassy_rp::gpio::Output;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use watchface_common::{AlertSurface, VibePattern};

/// Pattern waiting to be played. A newer request replaces an unplayed one.
pub static VIBE_SIGNAL: Signal<CriticalSectionRawMutex, VibePattern> = Signal::new();

/// Motor driver pin (high = on).
pub struct VibrationMotor {
    pin: Output<'static>,
}

impl VibrationMotor {
    pub fn new(pin: Output<'static>) -> Self { Self { pin } }

    /// Walk the pattern's on/off segments, then leave the motor off.
    pub async fn play(
        &mut self,
        pattern: &VibePattern,
    ) {
        for (on, ms) in pattern.segments() {
            if on {
                self.pin.set_high();
            } else {
                self.pin.set_low();
            }
            Timer::after_millis(u64::from(ms)).await;
        }
        self.pin.set_low();
    }
}

#[embassy_executor::task]
pub async fn vibration_task(motor: &'static mut VibrationMotor) {
    info!("Vibration task started");

    loop {
        let pattern = VIBE_SIGNAL.wait().await;
        info!("Vibrating: {} ms", pattern.total_ms());
        motor.play(&pattern).await;
    }
}

/// [`AlertSurface`] that hands patterns to [`vibration_task`].
pub struct SignalledMotor;

impl AlertSurface for SignalledMotor {
    fn vibrate(
        &mut self,
        pattern: &VibePattern,
    ) {
        VIBE_SIGNAL.signal(*pattern);
    }
}
