//! Watch Face Simulator for Desktop.
//!
//! Runs the watch face from the host's local clock inside an
//! `embedded-graphics-simulator` window.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Space | Full refresh ("became visible") |
//! | F | Toggle fast-forward (20 s per frame) |
//! | Escape | Quit |
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see every face
//! event.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod haptics;
mod source;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use watchface_common::colors::{BEZEL, VIBE_FLASH};
use watchface_common::face::FaceController;
use watchface_common::locale::HUNGARIAN;
use watchface_common::log::{EventLevel, EventLog};
use watchface_common::widgets::{FACE_SIZE, FaceRenderer};

use crate::haptics::BorderFlash;
use crate::source::{RawTime, TimeSource};
use crate::timing::FRAME_TIME;

/// Bezel width around the face; the vibration flash is drawn here.
const BORDER: u32 = 4;

const FACE_ORIGIN: Point = Point::new(BORDER as i32, BORDER as i32);

const WINDOW_SIZE: Size = Size::new(FACE_SIZE.width + 2 * BORDER, FACE_SIZE.height + 2 * BORDER);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(WINDOW_SIZE);
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Watch Face Sim", &output_settings);

    let mut renderer = FaceRenderer::new(display, FACE_ORIGIN);
    let mut face = FaceController::new(HUNGARIAN);
    let mut flash = BorderFlash::new();
    let mut source = TimeSource::live();

    renderer.display_mut().clear(BEZEL).ok();
    renderer.clear_face();

    let mut refresh_requested = true;
    let mut border_on = false;

    log::info!("watch face simulator started");

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => return,
                        Keycode::Space => refresh_requested = true,
                        Keycode::F => match source.toggle() {
                            Ok(()) => {
                                log::info!(
                                    "fast-forward {}",
                                    if source.is_fast_forward() { "on" } else { "off" }
                                );
                                // Hands jump when time jumps
                                refresh_requested = true;
                            }
                            Err(err) => log::warn!("cannot seed fast-forward clock: {err}"),
                        },
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if refresh_requested {
            refresh_requested = false;
            full_refresh(&mut face, &mut renderer, source.current());
        } else if let Some(raw) = source.poll() {
            face.tick_raw(
                raw.hour,
                raw.minute,
                raw.second,
                raw.weekday,
                raw.day,
                raw.month,
                &mut renderer,
                &mut flash,
            )
            .ok();
        }
        forward_events(face.events_mut());

        let motor_on = flash.motor_on();
        if motor_on != border_on {
            border_on = motor_on;
            draw_border(renderer.display_mut(), if border_on { VIBE_FLASH } else { BEZEL });
        }

        window.update(renderer.display());

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

fn full_refresh(
    face: &mut FaceController,
    renderer: &mut FaceRenderer<SimulatorDisplay<Rgb565>>,
    raw: RawTime,
) {
    match raw.validate() {
        Ok(time) => {
            face.appear(&time, renderer);
        }
        Err(err) => log::warn!("full refresh skipped: {err}"),
    }
}

/// Send face events to the `log` facade at their own level.
fn forward_events(events: &mut EventLog) {
    for event in events.drain() {
        match event.level() {
            EventLevel::Debug => log::debug!("{event}"),
            EventLevel::Info => log::info!("{event}"),
            EventLevel::Warn => log::warn!("{event}"),
        }
    }
}

fn draw_border<D>(
    display: &mut D,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(BORDER)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    Rectangle::new(Point::zero(), display.size())
        .into_styled(style)
        .draw(display)
        .ok();
}
