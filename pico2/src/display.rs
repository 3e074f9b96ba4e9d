//! Display configuration for Pimoroni PIM715 Display Pack 2.8" (ST7789).
//!
//! Pin mapping for PIM715:
//! - DC: GPIO16
//! - CS: GPIO17 (directly to SPI peripheral)
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Reset: Tied to RUN pin (resets with Pico)

use embassy_rp::spi::Config as SpiConfig;
use embedded_graphics::prelude::Point;
use watchface_common::widgets::FACE_SIZE;

use crate::framebuffer::{HEIGHT, WIDTH};

/// Top-left of the 144x168 face, centered on the 320x240 panel.
pub const FACE_ORIGIN: Point = Point::new(
    (WIDTH as i32 - FACE_SIZE.width as i32) / 2,
    (HEIGHT as i32 - FACE_SIZE.height as i32) / 2,
);

/// SPI configuration for the ST7789 display (datasheet maximum, 62.5MHz).
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 62_500_000;
    config
}
