//! Analog/Digital Watch Face Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Shows the watch face on the Pimoroni PIM715 Display Pack 2.8" and buzzes a
//! vibration motor on GPIO22 ten minutes before each hour.
//!
//! # Architecture
//!
//! - Main task: polls the buttons every 20 ms, advances the software clock
//!   once per elapsed second, lets the face controller redraw the stale
//!   regions into the single framebuffer, then flushes only the dirty window.
//! - Vibration task: waits for a pattern signal and plays it on the motor pin.
//!
//! # Button Controls
//!
//! - **A**: Hour +1
//! - **B**: Minute +1
//! - **X**: Zero the seconds
//! - **Y**: Full refresh

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
mod button;
mod display;
mod st7789;
mod vibration;

// Re-export testable modules from library for local use
mod controls {
    pub use watchface_pico2::controls::*;
}
mod framebuffer {
    pub use watchface_pico2::framebuffer::*;
}

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_time::{Duration, Instant, Ticker};
use embedded_graphics::prelude::*;
use static_cell::{ConstStaticCell, StaticCell};
use watchface_common::colors::BACKGROUND;
use watchface_common::locale::HUNGARIAN;
use watchface_common::{FaceController, FaceRenderer};
use {defmt_rtt as _, panic_probe as _};

use crate::button::Buttons;
use crate::controls::{Command, START_CLOCK};
use crate::display::{FACE_ORIGIN, display_spi_config};
use crate::framebuffer::{BUFFER_SIZE, Framebuffer, Window};
use crate::st7789::St7789;
use crate::vibration::{SignalledMotor, VibrationMotor, vibration_task};

/// Button poll interval.
const POLL_MS: u64 = 20;

/// The one framebuffer (153,600 bytes), placed in `.bss` rather than on the stack.
static FRAMEBUFFER: ConstStaticCell<[u8; BUFFER_SIZE]> = ConstStaticCell::new([0; BUFFER_SIZE]);

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-watchface"),
    embassy_rp::binary_info::rp_program_description!(c"Analog/digital watch face with hourly vibration"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Watch face starting...");

    let p = embassy_rp::init(Default::default());

    // Initialize display pins
    // PIM715 pinout: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    // Async SPI with DMA (TX-only, display doesn't need MISO)
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, display_spi_config());

    let mut panel = St7789::new(spi, dc, cs);
    panel.init().await;
    info!("Display initialized");

    // Vibration motor driver (high = on)
    static MOTOR: StaticCell<VibrationMotor> = StaticCell::new();
    let motor = MOTOR.init(VibrationMotor::new(Output::new(p.PIN_22, Level::Low)));
    spawner.must_spawn(vibration_task(motor));

    // Buttons are active-low with internal pull-up
    // PIM715: A=12, B=13, X=14, Y=15
    let mut buttons = Buttons::new([
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
        Input::new(p.PIN_14, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
    ]);

    let mut renderer = FaceRenderer::new(Framebuffer::new(FRAMEBUFFER.take()), FACE_ORIGIN);
    let mut face = FaceController::new(HUNGARIAN);
    let mut alert = SignalledMotor;
    let mut clock = START_CLOCK;

    // First display: whole panel, face included
    renderer.display_mut().clear(BACKGROUND).ok();
    face.appear(&clock.now(), &mut renderer);
    renderer.take_dirty();
    panel.flush_window(renderer.display(), Window::FULL).await;
    info!("Face shown at {}", clock.now());

    let mut poll = Ticker::every(Duration::from_millis(POLL_MS));
    let mut next_second = Instant::now() + Duration::from_secs(1);

    loop {
        poll.next().await;

        if let Some(button) = buttons.poll() {
            let command = Command::for_button(button);
            command.apply(&mut clock);
            info!("Button {}: {} -> {}", button, command, clock.now());
            face.appear(&clock.now(), &mut renderer);
        }

        // One tick per elapsed second, so a slow flush never skips a minute boundary
        while Instant::now() >= next_second {
            next_second += Duration::from_secs(1);
            clock.advance(1);
            face.tick(&clock.now(), &mut renderer, &mut alert);
        }

        if let Some(window) = renderer.take_dirty().and_then(Window::clipped) {
            panel.flush_window(renderer.display(), window).await;
        }
    }
}
