//! Async ST7789 display driver for embassy-rp.
//!
//! Owns the SPI peripheral and the DC/CS pins. Drawing happens in the
//! host-testable [`Framebuffer`]; this driver only pushes a [`Window`] of it
//! to the panel with async DMA transfers.
//!
//! # Partial Flush
//!
//! Each flush sets the panel's column/row window to the dirty rectangle, issues
//! one RAMWR and streams the window's rows back to back with CS held low. The
//! panel's address counter wraps to the next row at the window edge, so the
//! rows land in place without per-row addressing.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Spi};
use embassy_time::Timer;

use crate::framebuffer::{Framebuffer, Window};

// ST7789 commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

/// MADCTL for 90° rotation (landscape): MV (row/column exchange) | MX (column order).
const MADCTL_LANDSCAPE: u8 = 0x20 | 0x40;

/// COLMOD value for 16-bit RGB565.
const COLMOD_RGB565: u8 = 0x55;

/// Power-up sequence: command, parameters, settle time in ms.
///
/// Inversion is on because the PIM715 panel is wired inverted.
const INIT_SEQUENCE: [(u8, &[u8], u64); 6] = [
    (SWRESET, &[], 150),
    (SLPOUT, &[], 10),
    (COLMOD, &[COLMOD_RGB565], 0),
    (MADCTL, &[MADCTL_LANDSCAPE], 0),
    (INVON, &[], 10),
    (NORON, &[], 10),
];

/// ST7789 panel on SPI0.
pub struct St7789<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
}

impl<'d> St7789<'d> {
    pub fn new(
        spi: Spi<'d, SPI0, Async>,
        dc: Output<'d>,
        cs: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs }
    }

    /// Run the power-up sequence and switch the panel on.
    pub async fn init(&mut self) {
        for (cmd, params, settle_ms) in INIT_SEQUENCE {
            self.command(cmd, params).await;
            if settle_ms > 0 {
                Timer::after_millis(settle_ms).await;
            }
        }
        self.command(DISPON, &[]).await;
        Timer::after_millis(10).await;
    }

    /// One command byte (DC low) followed by its parameters (DC high), in a
    /// single CS-low transaction.
    async fn command(
        &mut self,
        cmd: u8,
        params: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        if !params.is_empty() {
            self.dc.set_high();
            self.spi.write(params).await.ok();
        }
        self.cs.set_high();
    }

    async fn set_window(
        &mut self,
        window: Window,
    ) {
        let [x0_hi, x0_lo] = window.x.to_be_bytes();
        let [x1_hi, x1_lo] = window.x_end().to_be_bytes();
        let [y0_hi, y0_lo] = window.y.to_be_bytes();
        let [y1_hi, y1_lo] = window.y_end().to_be_bytes();

        self.command(CASET, &[x0_hi, x0_lo, x1_hi, x1_lo]).await;
        self.command(RASET, &[y0_hi, y0_lo, y1_hi, y1_lo]).await;
    }

    /// Send `window` of `framebuffer` to the panel.
    pub async fn flush_window(
        &mut self,
        framebuffer: &Framebuffer<'_>,
        window: Window,
    ) {
        self.set_window(window).await;

        self.cs.set_low();
        self.dc.set_low();
        // Single command byte: blocking is faster than DMA setup
        self.spi.blocking_write(&[RAMWR]).ok();
        self.dc.set_high();
        if window == Window::FULL {
            self.spi.write(framebuffer.as_bytes()).await.ok();
        } else {
            for row in framebuffer.window_rows(window) {
                self.spi.write(row).await.ok();
            }
        }
        self.cs.set_high();
    }
}
