//! Single RGB565 framebuffer for the ST7789 panel.
//!
//! The face only changes a few small regions per second, so one buffer is
//! enough: the main loop draws into it, then sends just the dirty window to
//! the panel. Pixels are stored big-endian, the byte order the ST7789 expects
//! on the wire, so a window row is a plain slice of the buffer.
//!
//! This module has no hardware dependencies and is tested on the host.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Panel dimensions (landscape mode after 90° rotation).
pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 240;
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

// =============================================================================
// Flush Window
// =============================================================================

/// Panel-space rectangle sent to the display in one RAMWR burst.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Window {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Window {
    /// The whole panel.
    pub const FULL: Self = Self {
        x: 0,
        y: 0,
        width: WIDTH as u16,
        height: HEIGHT as u16,
    };

    /// Clip `rect` to the panel. `None` if nothing is left.
    pub fn clipped(rect: Rectangle) -> Option<Self> {
        let panel = Rectangle::new(Point::zero(), Size::new(WIDTH as u32, HEIGHT as u32));
        let visible = rect.intersection(&panel);
        if visible.is_zero_sized() {
            return None;
        }
        Some(Self {
            x: visible.top_left.x as u16,
            y: visible.top_left.y as u16,
            width: visible.size.width as u16,
            height: visible.size.height as u16,
        })
    }

    /// Last column, inclusive (CASET end address).
    #[inline]
    pub const fn x_end(&self) -> u16 { self.x + self.width - 1 }

    /// Last row, inclusive (RASET end address).
    #[inline]
    pub const fn y_end(&self) -> u16 { self.y + self.height - 1 }

    /// Pixel count.
    pub const fn area(&self) -> usize { self.width as usize * self.height as usize }
}

// =============================================================================
// Framebuffer
// =============================================================================

/// `DrawTarget` over a borrowed 320x240 RGB565 buffer.
pub struct Framebuffer<'a> {
    bytes: &'a mut [u8; BUFFER_SIZE],
}

impl<'a> Framebuffer<'a> {
    pub fn new(bytes: &'a mut [u8; BUFFER_SIZE]) -> Self { Self { bytes } }

    /// Fill the whole buffer with one color.
    ///
    /// Writes two pixels per 32-bit word.
    pub fn clear_buffer(
        &mut self,
        color: Rgb565,
    ) {
        let pair = pixel_pair(color);
        for word in self.bytes.chunks_exact_mut(4) {
            word.copy_from_slice(&pair);
        }
    }

    /// Raw buffer contents, for a full-screen flush.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] { self.bytes.as_slice() }

    /// Row slices of `window`, top to bottom.
    ///
    /// Sent back to back after one RAMWR, these fill the window in the
    /// order the panel's address counter walks it.
    pub fn window_rows(
        &self,
        window: Window,
    ) -> impl Iterator<Item = &[u8]> + '_ {
        let start = window.x as usize * 2;
        let len = window.width as usize * 2;
        (window.y as usize..window.y as usize + window.height as usize).map(move |y| {
            let row = y * WIDTH * 2 + start;
            &self.bytes[row..row + len]
        })
    }

    /// Color at `(x, y)`, or `None` outside the panel.
    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Option<Rgb565> {
        let idx = index(x, y)?;
        let raw = u16::from_be_bytes([self.bytes[idx], self.bytes[idx + 1]]);
        Some(RawU16::new(raw).into())
    }

    #[inline]
    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: Rgb565,
    ) {
        if let Some(idx) = index(x, y) {
            self.bytes[idx..idx + 2].copy_from_slice(&pixel_bytes(color));
        }
    }
}

/// Byte offset of `(x, y)`.
#[inline]
fn index(
    x: i32,
    y: i32,
) -> Option<usize> {
    if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
        Some((y as usize * WIDTH + x as usize) * 2)
    } else {
        None
    }
}

#[inline]
fn pixel_bytes(color: Rgb565) -> [u8; 2] {
    let raw: RawU16 = color.into();
    raw.into_inner().to_be_bytes()
}

#[inline]
fn pixel_pair(color: Rgb565) -> [u8; 4] {
    let [hi, lo] = pixel_bytes(color);
    [hi, lo, hi, lo]
}

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // `colors` covers all of `area`, so walk it in full and skip the
        // points that fall off the panel.
        for (point, color) in area.points().zip(colors) {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let Some(window) = Window::clipped(*area) else {
            return Ok(());
        };

        let pixel = pixel_bytes(color);
        let start = window.x as usize * 2;
        let len = window.width as usize * 2;
        for y in window.y as usize..window.y as usize + window.height as usize {
            let row = y * WIDTH * 2 + start;
            for px in self.bytes[row..row + len].chunks_exact_mut(2) {
                px.copy_from_slice(&pixel);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clear_buffer(color);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    use super::*;

    fn buffer() -> Box<[u8; BUFFER_SIZE]> {
        vec![0u8; BUFFER_SIZE]
            .into_boxed_slice()
            .try_into()
            .unwrap()
    }

    // -------------------------------------------------------------------------
    // Window
    // -------------------------------------------------------------------------

    #[test]
    fn test_window_clips_to_panel() {
        let window = Window::clipped(Rectangle::new(Point::new(300, 230), Size::new(50, 50))).unwrap();
        assert_eq!(
            window,
            Window {
                x: 300,
                y: 230,
                width: 20,
                height: 10
            }
        );
        assert_eq!(window.x_end(), 319);
        assert_eq!(window.y_end(), 239);
    }

    #[test]
    fn test_window_off_panel_is_none() {
        assert!(Window::clipped(Rectangle::new(Point::new(-60, 0), Size::new(50, 50))).is_none());
        assert!(Window::clipped(Rectangle::new(Point::new(10, 10), Size::zero())).is_none());
    }

    #[test]
    fn test_full_window_covers_buffer() {
        assert_eq!(Window::FULL.area() * 2, BUFFER_SIZE);
        assert_eq!(Window::clipped(Rectangle::new(Point::zero(), Size::new(400, 300))), Some(Window::FULL));
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    #[test]
    fn test_pixels_stored_big_endian() {
        let mut bytes = buffer();
        let mut fb = Framebuffer::new(&mut bytes);
        Pixel(Point::new(1, 0), Rgb565::RED).draw(&mut fb).ok();

        assert_eq!(fb.pixel(1, 0), Some(Rgb565::RED));
        assert_eq!(&fb.as_bytes()[2..4], &[0xF8, 0x00], "Red is 0xF800 on the wire");
        assert_eq!(fb.pixel(0, 0), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(-1, 0), None);
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut bytes = buffer();
        let mut fb = Framebuffer::new(&mut bytes);
        fb.clear(Rgb565::BLUE).ok();

        assert_eq!(fb.pixel(0, 0), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(319, 239), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(160, 120), Some(Rgb565::BLUE));
    }

    #[test]
    fn test_fill_solid_is_clipped() {
        let mut bytes = buffer();
        let mut fb = Framebuffer::new(&mut bytes);
        fb.fill_solid(&Rectangle::new(Point::new(315, 235), Size::new(10, 10)), Rgb565::GREEN)
            .ok();

        assert_eq!(fb.pixel(319, 239), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(315, 235), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(314, 235), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_fill_contiguous_skips_offscreen_points() {
        let mut bytes = buffer();
        let mut fb = Framebuffer::new(&mut bytes);
        let area = Rectangle::new(Point::new(-1, 0), Size::new(2, 1));
        fb.fill_contiguous(&area, [Rgb565::RED, Rgb565::WHITE]).ok();

        assert_eq!(fb.pixel(0, 0), Some(Rgb565::WHITE), "Second color lands on x = 0");
    }

    // -------------------------------------------------------------------------
    // Window rows
    // -------------------------------------------------------------------------

    #[test]
    fn test_window_rows_follow_drawn_pixels() {
        let mut bytes = buffer();
        let mut fb = Framebuffer::new(&mut bytes);
        Line::new(Point::new(100, 50), Point::new(100, 52))
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
            .draw(&mut fb)
            .ok();

        let window = Window {
            x: 99,
            y: 50,
            width: 3,
            height: 3,
        };
        let rows: Vec<&[u8]> = fb.window_rows(window).collect();
        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.len(), 6);
            assert_eq!(&row[0..2], &[0, 0], "Column 99 untouched");
            assert_eq!(&row[2..4], &[0xFF, 0xFF], "Column 100 is white");
        }
    }
}
