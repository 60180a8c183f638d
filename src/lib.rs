//! Banded calendar/clock face renderer for small e-paper panels
//!
//! Composes two watch faces (a month calendar with Chinese festival and
//! holiday annotations, and a large seven-segment clock) and flushes them
//! through a band-at-a-time pipeline that never allocates a full frame
//! buffer: the scene is replayed once per band, clipped to the band's
//! rows, and handed to a flush callback as packed 1-bit planes.
//!
//! ## Features
//!
//! - `no_std` compatible; the full-refresh path is allocation free
//! - Pluggable lunisolar data through the [`LunarCalendar`] trait
//! - Seven-rule festival resolver plus a statutory holiday overlay
//! - Partial refresh of the minute's ones digit (`alloc` feature)
//! - `embedded-graphics` integration (`graphics` feature)
//!
//! ## Usage
//!
//! ```rust
//! use calface::{Builder, Dimensions};
//!
//! let dims = match Dimensions::new(250, 128) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! // Band height follows from the scratch memory the host can spare:
//! // 25 rows * 128 cols / 8 = 400 bytes per plane.
//! let config = match Builder::new().dimensions(dims).band_rows(25).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let _ = config.band_count();
//! ```
//!
//! A host then implements [`Canvas`] over its band memory and font
//! rasterizer, wires a [`LunarCalendar`] service, and calls
//! [`FaceRenderer::render_full_scene`] with a flush callback that pushes
//! each band to the panel.

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Band-oriented drawing surface trait and primitives
pub mod canvas;
/// Color types for monochrome and tri-color panels
pub mod color;
/// Renderer configuration types and builder
pub mod config;
/// Error types for the renderer
pub mod error;
/// Festival labels and the statutory holiday overlay
pub mod festival;
/// Lunar-calendar service trait and name catalogs
pub mod lunar;
/// Packed single-plane buffer for partial refreshes
#[cfg(any(test, feature = "alloc"))]
pub mod packed;
/// Full-refresh and partial-refresh render drivers
pub mod render;
/// Scene composition for the calendar and clock faces
pub mod scene;
/// Seven-segment digit rendering
pub mod segment;
/// Civil time decoding and Gregorian arithmetic
pub mod time;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
pub(crate) mod testing;

pub use canvas::{Band, Canvas, Font};
pub use color::{Color, ColorMode};
pub use config::{Builder, Config, Dimensions, Rotation};
pub use error::BuilderError;
pub use festival::{HOLIDAY_YEAR, HolidayKind, holiday_overlay, resolve_label};
pub use lunar::{LunarCalendar, LunarDate, SolarDate, TermCountdown};
pub use render::{DeviceData, FaceRenderer};
pub use scene::{Mode, SceneInput};
pub use time::DateTime;

#[cfg(any(test, feature = "alloc"))]
pub use packed::PackedFrame;

#[cfg(feature = "graphics")]
pub use graphics::CanvasTarget;
