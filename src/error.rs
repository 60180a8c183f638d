//! Error types for the renderer
//!
//! The error taxonomy is deliberately narrow. The render pipeline performs
//! no I/O of its own: the flush callbacks and the lunar-calendar service are
//! owned by the caller, and a date rule that does not fire is the defined
//! fallback rather than a failure. The one runtime resource failure,
//! scratch exhaustion while allocating the partial-refresh buffer, is
//! handled by silently skipping that refresh.
//!
//! What remains is [`BuilderError`], reported while constructing a panel
//! [`Config`](crate::config::Config).
//!
//! ## Example
//!
//! ```
//! use calface::{Builder, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//! ```

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before any rendering starts.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
    /// Invalid band height provided
    ///
    /// The band height must be at least one row; it may exceed the panel
    /// height, in which case a single band covers the whole canvas.
    InvalidBandRows {
        /// Number of band rows requested
        band_rows: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (rows and cols must be non-zero, cols a multiple of 8)"
            ),
            Self::InvalidBandRows { band_rows } => {
                write!(f, "Invalid band height: {band_rows} rows")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
