//! Panel configuration types and builder

pub use crate::error::BuilderError;

/// Panel dimensions in native (unrotated) orientation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of rows (height in pixels)
    pub rows: u16,
    /// Number of columns (width in pixels)
    pub cols: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows == 0
    /// - cols == 0
    /// - cols % 8 != 0 (plane rows must be byte-aligned)
    pub fn new(rows: u16, cols: u16) -> Result<Self, BuilderError> {
        if rows == 0 || cols == 0 || !cols.is_multiple_of(8) {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Plane size in bytes for the full canvas
    pub fn buffer_size(&self) -> usize {
        (self.rows as usize * self.cols as usize) / 8
    }
}

/// Canvas rotation relative to the panel's native orientation
///
/// The banded render driver always requests [`Rotation::Rotate270`]; the
/// enum exists so canvas implementations share one vocabulary with their
/// underlying drivers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Renderer configuration
///
/// Holds the physical panel dimensions and the band height derived from the
/// scratch memory available for one render band. Use [`Builder`] to create
/// a `Config`.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// Rows per render band; the last band may be shorter
    pub band_rows: u16,
}

impl Config {
    /// Number of bands a full-refresh pass flushes
    pub fn band_count(&self) -> u16 {
        self.dimensions.rows.div_ceil(self.band_rows)
    }

    /// Scratch size in bytes of one band's black/white plane
    pub fn band_buffer_size(&self) -> usize {
        (self.band_rows as usize) * (self.dimensions.cols as usize) / 8
    }
}

/// Builder for constructing renderer configuration
///
/// # Example
///
/// ```
/// use calface::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(250, 128) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).band_rows(25).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Panel dimensions (required)
    dimensions: Option<Dimensions>,
    /// Rows per render band
    band_rows: u16,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            // Default band height; callers derive theirs from scratch memory
            band_rows: 25,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the band height in rows
    ///
    /// Derive this from the scratch memory available for one band:
    /// `band_rows = scratch_bytes * 8 / cols`.
    pub fn band_rows(mut self, band_rows: u16) -> Self {
        self.band_rows = band_rows;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// or `BuilderError::InvalidBandRows` if the band height is zero.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        if self.band_rows == 0 {
            return Err(BuilderError::InvalidBandRows {
                band_rows: self.band_rows,
            });
        }
        Ok(Config {
            dimensions,
            band_rows: self.band_rows,
        })
    }
}
