//! `embedded-graphics` integration
//!
//! [`CanvasTarget`] borrows a [`Canvas`] and exposes it as a
//! [`DrawTarget`], so hosts can draw extra content (icons, QR codes,
//! third-party widgets) onto a face with the wider `embedded-graphics`
//! ecosystem. Band clipping still applies: pixels outside the active band
//! are dropped by the canvas, and drawing through this adapter inside a
//! band replay must be just as deterministic as the scene composer.

use core::convert::Infallible;

use embedded_graphics_core::Pixel;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};

use crate::canvas::Canvas;
use crate::color::Color;

/// Adapter presenting a [`Canvas`] as an `embedded-graphics` draw target
pub struct CanvasTarget<'a, C: Canvas> {
    canvas: &'a mut C,
    size: Size,
}

impl<'a, C: Canvas> CanvasTarget<'a, C> {
    /// Wrap a canvas, declaring the logical (rotated) drawable size
    pub fn new(canvas: &'a mut C, width: u32, height: u32) -> Self {
        Self {
            canvas,
            size: Size::new(width, height),
        }
    }
}

impl<C: Canvas> DrawTarget for CanvasTarget<'_, C> {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // The canvas already drops out-of-band and out-of-bounds pixels
            self.canvas.draw_pixel(point.x, point.y, color);
        }
        Ok(())
    }
}

impl<C: Canvas> OriginDimensions for CanvasTarget<'_, C> {
    fn size(&self) -> Size {
        self.size
    }
}
