//! Color types for monochrome and tri-color e-paper panels
//!
//! ## Color Representation
//!
//! E-paper panels use a bit-packed format where each pixel is represented by:
//! - 1 bit in the black/white plane
//! - 1 bit in the red plane (tri-color panels only)
//!
//! | Color | BW Plane | RED Plane |
//! |-------|----------|-----------|
//! | Black | 0        | 0         |
//! | White | 1        | 0         |
//! | Red   | 1        | 1         |
//!
//! ## Example
//!
//! ```
//! use calface::Color;
//!
//! assert_eq!(Color::White.bw_byte(), 0xFF);
//! assert_eq!(Color::Red.red_byte(), 0xFF);
//! ```

/// Colors the renderer can emit
///
/// On monochrome panels `Red` degrades to `Black` at the plane level; the
/// canvas implementation decides how to map it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Color {
    /// Black pixels
    Black,
    /// White pixels
    White,
    /// Red pixels (tri-color panels)
    Red,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU8;
}

impl Color {
    /// Get the fill byte for the black/white plane
    ///
    /// - Black: 0x00 (all bits 0)
    /// - White: 0xFF (all bits 1)
    /// - Red: 0xFF (red requires BW=1 too)
    pub fn bw_byte(self) -> u8 {
        match self {
            Self::Black => 0x00,
            Self::White => 0xFF,
            Self::Red => 0xFF, // Red uses both planes
        }
    }

    /// Get the fill byte for the red plane
    ///
    /// - Black: 0x00 (no red)
    /// - White: 0x00 (no red)
    /// - Red: 0xFF (all bits 1)
    pub fn red_byte(self) -> u8 {
        match self {
            Self::Black => 0x00,
            Self::White => 0x00,
            Self::Red => 0xFF,
        }
    }
}

/// Plane configuration of the target panel
///
/// Selects whether the canvas carries a red plane alongside the
/// black/white plane. Matches the `bwr` flag of the device data.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ColorMode {
    /// Black/white plane only
    #[default]
    Mono,
    /// Black/white plane plus red plane
    TriColor,
}

impl ColorMode {
    /// Whether a red plane exists in this mode
    pub fn has_red(self) -> bool {
        matches!(self, Self::TriColor)
    }
}
