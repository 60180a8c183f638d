//! Render drivers: banded full refresh and the minute partial refresh
//!
//! [`FaceRenderer`] owns the lunar-calendar service and the panel
//! configuration, and turns device state into flushed pixel data. The
//! full-refresh path never materializes a whole frame: the canvas holds
//! one band, the scene is composed once per band with everything outside
//! the active band clipped away, and each finished band goes straight to
//! the flush callback. The partial path skips the canvas entirely and
//! hands a packed single-digit buffer to its own callback.

use log::debug;
#[cfg(any(test, feature = "alloc"))]
use log::warn;

use crate::canvas::{Band, Canvas};
use crate::color::{Color, ColorMode};
use crate::config::{Config, Rotation};
use crate::lunar::{LunarCalendar, SolarDate};
#[cfg(any(test, feature = "alloc"))]
use crate::packed::PackedFrame;
use crate::scene::{self, Mode, SceneInput};
#[cfg(any(test, feature = "alloc"))]
use crate::segment;
use crate::time::DateTime;

/// Device state sampled by the host right before a refresh
#[derive(Clone, Copy, Debug)]
pub struct DeviceData {
    /// Whether the panel has a red plane
    pub color_mode: ColorMode,
    /// Unix timestamp, already offset to local time
    pub timestamp: u64,
    /// Ambient temperature in whole degrees Celsius
    pub temperature_c: i8,
    /// Battery voltage
    pub battery_volts: f32,
}

/// Row the alignment sentinel is drawn on (physical coordinates)
const SENTINEL_ROW: i32 = 249;
/// Pixel length of the sentinel line
const SENTINEL_WIDTH: i32 = 128;

/// Composes faces and drives band-by-band flushing
#[derive(Debug)]
pub struct FaceRenderer<L: LunarCalendar> {
    calendar: L,
    config: Config,
}

impl<L: LunarCalendar> FaceRenderer<L> {
    /// Create a renderer over a lunar-calendar service and panel config
    pub fn new(calendar: L, config: Config) -> Self {
        Self { calendar, config }
    }

    /// The lunar-calendar service this renderer queries
    pub fn calendar(&self) -> &L {
        &self.calendar
    }

    /// Render one face and flush it band by band
    ///
    /// The scene is composed afresh for every band; `flush` receives each
    /// band's packed planes together with its physical row placement, in
    /// top-to-bottom order. The buffers are only valid inside the call.
    pub fn render_full_scene<C, F>(
        &self,
        canvas: &mut C,
        device: &DeviceData,
        mode: Mode,
        mut flush: F,
    ) where
        C: Canvas,
        F: FnMut(Band<'_>),
    {
        let date = DateTime::from_unix(device.timestamp);
        let lunar = self.calendar.solar_to_lunar(SolarDate {
            year: date.year,
            month: date.month,
            day: date.day,
        });
        let input = SceneInput {
            date,
            lunar,
            temperature_c: device.temperature_c,
            battery_volts: device.battery_volts,
        };

        debug!(
            "full refresh: {}-{:02}-{:02} {:02}:{:02}, {} bands",
            date.year,
            date.month,
            date.day,
            date.hour,
            date.minute,
            self.config.band_count(),
        );

        canvas.begin(self.config.dimensions, self.config.band_rows, device.color_mode);
        canvas.set_rotation(Rotation::Rotate270);
        canvas.first_band();
        loop {
            canvas.clear(Color::White);
            scene::compose(canvas, &self.calendar, &input, mode);
            // Sentinel on the last physical row, used to verify that the
            // host pushed every band to the panel
            for x in 0..SENTINEL_WIDTH {
                canvas.draw_pixel(x, SENTINEL_ROW, Color::Red);
            }
            flush(canvas.band());
            if !canvas.next_band() {
                break;
            }
        }
        canvas.end();
    }

    /// Redraw only the ones digit of the minute on the clock face
    ///
    /// Allocates a packed buffer sized to one digit cell, rasterizes the
    /// digit, and hands `flush` the buffer with its panel placement
    /// (x, y, width, height in logical coordinates). When the allocation
    /// fails the refresh is skipped without error; the next full refresh
    /// repairs the display.
    #[cfg(any(test, feature = "alloc"))]
    pub fn render_minute_ones_digit<F>(&self, device: &DeviceData, mut flush: F)
    where
        F: FnMut(&[u8], u16, u16, u16, u16),
    {
        let time = DateTime::from_unix(device.timestamp);
        let scale = scene::CLOCK_TIME_SCALE;
        let width = segment::digit_width(scale);
        let height = segment::field_height(scale);
        let Some(mut frame) = PackedFrame::try_new_white(width, height) else {
            warn!("partial refresh skipped: no memory for {width}x{height} digit buffer");
            return;
        };
        segment::draw_ones_digit(&mut frame, u32::from(time.minute), scale);
        debug!("partial refresh: minute {:02}", time.minute);

        let (x, y) = scene::minute_ones_origin();
        flush(frame.data(), x as u16, y as u16, width as u16, height as u16);
    }
}
