//! Packed 1-bit-per-pixel frame for the partial-refresh path
//!
//! The fast minute-digit update bypasses the general canvas entirely: the
//! segment renderer rasterizes straight into a [`PackedFrame`], which is
//! then handed byte-for-byte to the partial-image flush callback.
//!
//! Layout is row-major, MSB-first, with byte-aligned rows: pixel (x, y)
//! lives at byte `y * ceil(width / 8) + x / 8`, bit `0x80 >> (x % 8)`.
//! White is a set bit, matching the e-paper plane convention.
//!
//! Allocation is fallible by contract: the frame is created fresh for one
//! partial-refresh invocation on a heap that may be exhausted, and
//! [`PackedFrame::try_new_white`] returning `None` makes that refresh a
//! silent no-op.

use alloc::vec::Vec;

use crate::color::Color;

/// A packed monochrome pixel rectangle
#[derive(Debug)]
pub struct PackedFrame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PackedFrame {
    /// Allocate a frame pre-cleared to white (all bits set)
    ///
    /// Returns `None` when the allocation fails or the requested size is
    /// zero; the caller treats that as "skip this refresh".
    pub fn try_new_white(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let bytes = (width as usize).div_ceil(8) * height as usize;
        let mut data = Vec::new();
        data.try_reserve_exact(bytes).ok()?;
        data.resize(bytes, 0xFF);
        Some(Self { data, width, height })
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes
    pub fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// The packed pixel data, row-major, MSB-first
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Write one pixel; out-of-bounds writes are dropped
    ///
    /// `Color::Black` clears the bit; white and red set it (the partial
    /// path has no red plane, so red degrades to white rather than black
    /// to keep the background convention).
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y as usize * self.stride() + (x / 8) as usize;
        let bit = 0x80 >> (x % 8);
        match color {
            Color::Black => self.data[index] &= !bit,
            Color::White | Color::Red => self.data[index] |= bit,
        }
    }

    /// Read one pixel back; out-of-bounds reads are white
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        if x >= self.width || y >= self.height {
            return Color::White;
        }
        let index = y as usize * self.stride() + (x / 8) as usize;
        let bit = 0x80 >> (x % 8);
        if self.data[index] & bit == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Horizontal run of pixels; used by the packed digit renderer
    pub(crate) fn hline(&mut self, x: i32, y: i32, w: u32, color: Color) {
        if y < 0 {
            return;
        }
        for i in 0..w as i32 {
            let px = x + i;
            if px >= 0 {
                self.set_pixel(px as u32, y as u32, color);
            }
        }
    }

    /// Vertical run of pixels; used by the packed digit renderer
    pub(crate) fn vline(&mut self, x: i32, y: i32, h: u32, color: Color) {
        if x < 0 {
            return;
        }
        for i in 0..h as i32 {
            let py = y + i;
            if py >= 0 {
                self.set_pixel(x as u32, py as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_all_white() {
        let frame = PackedFrame::try_new_white(34, 4).unwrap();
        assert_eq!(frame.stride(), 5);
        assert_eq!(frame.data().len(), 20);
        assert!(frame.data().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_set_pixel_bit_position() {
        let mut frame = PackedFrame::try_new_white(16, 2).unwrap();
        frame.set_pixel(0, 0, Color::Black);
        frame.set_pixel(9, 1, Color::Black);
        // (0,0): byte 0, MSB
        assert_eq!(frame.data()[0], 0x7F);
        // (9,1): byte 3 (row 1 starts at byte 2), bit 0x40
        assert_eq!(frame.data()[3], 0xBF);
        assert_eq!(frame.pixel(0, 0), Color::Black);
        assert_eq!(frame.pixel(1, 0), Color::White);
    }

    #[test]
    fn test_red_keeps_background_convention() {
        let mut frame = PackedFrame::try_new_white(8, 1).unwrap();
        frame.set_pixel(3, 0, Color::Black);
        frame.set_pixel(3, 0, Color::Red);
        assert_eq!(frame.pixel(3, 0), Color::White);
    }

    #[test]
    fn test_out_of_bounds_writes_dropped() {
        let mut frame = PackedFrame::try_new_white(8, 2).unwrap();
        frame.set_pixel(8, 0, Color::Black);
        frame.set_pixel(0, 2, Color::Black);
        assert!(frame.data().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_zero_size_is_refused() {
        assert!(PackedFrame::try_new_white(0, 10).is_none());
        assert!(PackedFrame::try_new_white(10, 0).is_none());
    }
}
