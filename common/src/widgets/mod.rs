//! `embedded-graphics` rendering backend for the watch face.
//!
//! All drawing is generic over `DrawTarget<Color = Rgb565>` so the same code
//! renders into the simulator window and the ST7789 framebuffer.
//!
//! [`FaceRenderer`] implements [`FaceSurface`]. The four dial layers share one
//! rectangle, so the renderer keeps the latest dial and hand shapes and
//! recomposes the whole analog region on any dial-layer redraw:
//!
//! ```text
//! clear -> ticks + numerals + center dot -> hour -> minute -> second
//! ```
//!
//! Text and countdown regions are cleared and redrawn in place. Each redraw
//! grows a dirty rectangle (screen coordinates) that hosts with a partial
//! flush can take with [`FaceRenderer::take_dirty`].

mod analog;
mod countdown;
mod text;

pub use analog::{draw_dial, draw_hand};
pub use countdown::{draw_alert_icon, draw_countdown};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
pub use text::draw_centered_text;

use crate::colors::BACKGROUND;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::dial::DialFace;
use crate::face::FaceSurface;
use crate::hands::{HandKind, HandShape};
use crate::render::{Region, RegionContent};
use crate::styles::{DATE_STYLE, DIGITAL_STYLE};

/// Face size as an `embedded-graphics` size.
pub const FACE_SIZE: Size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);

/// Draws face regions into a `DrawTarget`, offset by a screen origin.
pub struct FaceRenderer<D> {
    display: D,
    origin: Point,
    dial: Option<DialFace>,
    hands: [Option<HandShape>; 3],
    dirty: Option<Rectangle>,
}

impl<D> FaceRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Renderer placing the face's top-left corner at `origin`.
    pub const fn new(
        display: D,
        origin: Point,
    ) -> Self {
        Self {
            display,
            origin,
            dial: None,
            hands: [None, None, None],
            dirty: None,
        }
    }

    #[inline]
    pub const fn origin(&self) -> Point { self.origin }

    #[inline]
    pub const fn display(&self) -> &D { &self.display }

    #[inline]
    pub const fn display_mut(&mut self) -> &mut D { &mut self.display }

    pub fn into_inner(self) -> D { self.display }

    /// Face rectangle in screen coordinates.
    pub const fn face_rect(&self) -> Rectangle { Rectangle::new(self.origin, FACE_SIZE) }

    /// Fill the whole face with the background color.
    pub fn clear_face(&mut self) {
        let face = self.face_rect();
        self.display.fill_solid(&face, BACKGROUND).ok();
        self.mark_dirty(face);
    }

    /// Bounding box of everything drawn since the last call, if anything.
    pub fn take_dirty(&mut self) -> Option<Rectangle> { self.dirty.take() }

    fn screen_rect(
        &self,
        region: Region,
    ) -> Rectangle {
        let rect = region.rect();
        Rectangle::new(self.origin + rect.top_left, rect.size)
    }

    fn mark_dirty(
        &mut self,
        rect: Rectangle,
    ) {
        self.dirty = Some(match self.dirty {
            Some(dirty) => union(dirty, rect),
            None => rect,
        });
    }

    fn compose_analog(&mut self) {
        let rect = self.screen_rect(Region::Background);
        let mut area = self.display.cropped(&rect);
        area.clear(BACKGROUND).ok();

        if let Some(dial) = &self.dial {
            draw_dial(&mut area, dial);
        }
        for hand in self.hands.iter().flatten() {
            draw_hand(&mut area, hand);
        }
    }
}

impl<D> FaceSurface for FaceRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn redraw(
        &mut self,
        region: Region,
        content: RegionContent<'_>,
    ) {
        let rect = self.screen_rect(region);

        match content {
            RegionContent::TickField(dial) => {
                self.dial = Some(dial.clone());
                self.compose_analog();
            }
            RegionContent::Hand(shape) => {
                self.hands[hand_slot(shape.kind)] = Some(shape.clone());
                self.compose_analog();
            }
            RegionContent::Text(text) => {
                let style = if region == Region::Date { DATE_STYLE } else { DIGITAL_STYLE };
                let mut area = self.display.cropped(&rect);
                area.clear(BACKGROUND).ok();
                draw_centered_text(&mut area, rect.size, text, style);
            }
            RegionContent::Indicator { icon, text } => {
                let mut area = self.display.cropped(&rect);
                area.clear(BACKGROUND).ok();
                draw_countdown(&mut area, icon, text);
            }
        }

        self.mark_dirty(rect);
    }
}

/// Hands are stored in draw order: hour under minute under second.
const fn hand_slot(kind: HandKind) -> usize {
    match kind {
        HandKind::Hour => 0,
        HandKind::Minute => 1,
        HandKind::Second => 2,
    }
}

fn union(
    a: Rectangle,
    b: Rectangle,
) -> Rectangle {
    let top_left = a.top_left.component_min(b.top_left);
    let bottom_right = (a.top_left + a.size).component_max(b.top_left + b.size);
    let size = bottom_right - top_left;
    Rectangle::new(top_left, Size::new(size.x as u32, size.y as u32))
}

// =============================================================================
// Tests
// =============================================================================
