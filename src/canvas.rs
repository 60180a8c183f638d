//! Graphics canvas abstraction
//!
//! The render pipeline never owns a full-resolution frame buffer; it draws
//! through the [`Canvas`] trait, whose implementor holds exactly one band
//! of scratch memory at a time. The banded render driver replays the whole
//! scene once per band, so the implementor's single job beyond pixel
//! plumbing is clipping: primitives that land outside the active band must
//! be no-ops, never errors.
//!
//! Font rasterization and the color model live behind this trait as well;
//! the composer only names a [`Font`] and emits text through
//! [`Canvas::draw_text`] at the current cursor.
//!
//! All draw primitives except [`Canvas::draw_pixel`] have provided
//! implementations, so a minimal implementor supplies the band machinery,
//! pixel writes and text, and inherits lines, rectangles and circles.

use core::fmt;

use crate::color::{Color, ColorMode};
use crate::config::{Dimensions, Rotation};

/// One flushed render band: packed planes plus physical placement
///
/// Planes are row-major, MSB-first, one bit per pixel. `red` is empty on
/// monochrome canvases. The buffers are only valid for the duration of the
/// flush call; callbacks must not retain them.
#[derive(Debug)]
pub struct Band<'a> {
    /// Black/white plane of the active band
    pub bw: &'a [u8],
    /// Red plane of the active band; empty in [`ColorMode::Mono`]
    pub red: &'a [u8],
    /// Physical row offset of the band's first row
    pub y: u16,
    /// Number of rows in this band; the final band may be short
    pub rows: u16,
}

/// Typeface selector
///
/// Names the two faces the scenes use; mapping them to real glyph data is
/// the canvas implementor's business.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Font {
    /// Small CJK-capable body face (9 px class)
    #[default]
    Body,
    /// Bold numeric face for dates and day numbers (14 px class)
    Numeric,
}

/// Drawing surface consumed by the scene composer and render drivers
pub trait Canvas {
    /// Configure the canvas for a panel and band height
    ///
    /// Called once at the start of a full-refresh cycle, before any band
    /// iteration. `dims` are the physical (unrotated) panel dimensions.
    fn begin(&mut self, dims: Dimensions, band_rows: u16, mode: ColorMode);

    /// Release per-cycle canvas resources
    fn end(&mut self);

    /// Set the logical orientation for subsequent drawing
    fn set_rotation(&mut self, rotation: Rotation);

    /// Rewind band iteration to the first band
    fn first_band(&mut self);

    /// Advance to the next band
    ///
    /// Returns `false` when the previous band was the last one; the active
    /// band is unchanged in that case.
    fn next_band(&mut self) -> bool;

    /// Access the active band's buffers and placement
    fn band(&self) -> Band<'_>;

    /// Fill the active band with a color
    fn clear(&mut self, color: Color);

    /// Write one pixel in logical (rotated) coordinates
    ///
    /// Out-of-canvas and out-of-band coordinates are silently dropped.
    fn draw_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Move the text cursor
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Select the face for subsequent text
    fn set_font(&mut self, font: Font);

    /// Set text foreground and background colors
    fn set_text_color(&mut self, fg: Color, bg: Color);

    /// Emit text at the cursor, advancing it
    fn draw_text(&mut self, text: &str);

    /// Draw a horizontal line of `w` pixels starting at (x, y)
    fn draw_hline(&mut self, x: i32, y: i32, w: u32, color: Color) {
        for i in 0..w as i32 {
            self.draw_pixel(x + i, y, color);
        }
    }

    /// Draw a vertical line of `h` pixels starting at (x, y)
    fn draw_vline(&mut self, x: i32, y: i32, h: u32, color: Color) {
        for i in 0..h as i32 {
            self.draw_pixel(x, y + i, color);
        }
    }

    /// Fill a rectangle
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        for row in 0..h as i32 {
            self.draw_hline(x, y + row, w, color);
        }
    }

    /// Outline a rectangle
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        if w == 0 || h == 0 {
            return;
        }
        self.draw_hline(x, y, w, color);
        self.draw_hline(x, y + h as i32 - 1, w, color);
        self.draw_vline(x, y, h, color);
        self.draw_vline(x + w as i32 - 1, y, h, color);
    }

    /// Outline a circle (midpoint algorithm)
    fn draw_circle(&mut self, cx: i32, cy: i32, r: u32, color: Color) {
        let r = r as i32;
        let mut x = 0;
        let mut y = r;
        let mut d = 1 - r;
        while x <= y {
            for (px, py) in [
                (cx + x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy + y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy + x),
                (cx - y, cy - x),
            ] {
                self.draw_pixel(px, py, color);
            }
            if d < 0 {
                d += 2 * x + 3;
            } else {
                d += 2 * (x - y) + 5;
                y -= 1;
            }
            x += 1;
        }
    }

    /// Fill a circle (midpoint algorithm, span fill)
    fn fill_circle(&mut self, cx: i32, cy: i32, r: u32, color: Color) {
        let r = r as i32;
        let mut x = 0;
        let mut y = r;
        let mut d = 1 - r;
        while x <= y {
            self.draw_hline(cx - y, cy + x, (2 * y + 1) as u32, color);
            self.draw_hline(cx - y, cy - x, (2 * y + 1) as u32, color);
            self.draw_hline(cx - x, cy + y, (2 * x + 1) as u32, color);
            self.draw_hline(cx - x, cy - y, (2 * x + 1) as u32, color);
            if d < 0 {
                d += 2 * x + 3;
            } else {
                d += 2 * (x - y) + 5;
                y -= 1;
            }
            x += 1;
        }
    }

    /// Emit formatted text at the cursor
    fn draw_fmt(&mut self, args: fmt::Arguments<'_>) {
        struct Sink<'a, C: Canvas + ?Sized>(&'a mut C);

        impl<C: Canvas + ?Sized> fmt::Write for Sink<'_, C> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.0.draw_text(s);
                Ok(())
            }
        }

        // Formatting into a canvas cannot fail; fmt errors only arise from
        // the sink, and ours is infallible.
        let _ = fmt::write(&mut Sink(self), args);
    }

    /// Set colors and face, then emit formatted text
    fn draw_styled(&mut self, fg: Color, bg: Color, font: Font, args: fmt::Arguments<'_>) {
        self.set_text_color(fg, bg);
        self.set_font(font);
        self.draw_fmt(args);
    }
}
