//! Shared test doubles: an in-memory canvas and a scripted calendar
//!
//! `MockCanvas` implements the band protocol over heap-allocated planes
//! and records the state the drivers set, so tests can probe pixels and
//! reassemble flushed bands. Text rendering is reduced to a traceable
//! contract: one foreground pixel per text byte, starting at the cursor,
//! which then advances by the byte count. Rotation is recorded but not
//! applied; probes use logical coordinates throughout.
//!
//! `FakeCalendar` scripts just enough lunisolar data for the resolver and
//! scene tests: the weeks around the 2025 lunar new year, one long
//! twelfth month (ending 2030-01-23), and a handful of 2025 solar terms.

use alloc::vec;
use alloc::vec::Vec;

use crate::canvas::{Band, Canvas, Font};
use crate::color::{Color, ColorMode};
use crate::config::{Dimensions, Rotation};
use crate::lunar::{LunarCalendar, LunarDate, SolarDate, TermCountdown};

pub(crate) struct MockCanvas {
    dims: Dimensions,
    band_rows: u16,
    mode: ColorMode,
    rotation: Option<Rotation>,
    band_start: u16,
    bw: Vec<u8>,
    red: Vec<u8>,
    cursor: (i32, i32),
    font: Font,
    fg: Color,
    bg: Color,
}

impl MockCanvas {
    pub(crate) fn new() -> Self {
        Self {
            dims: Dimensions { rows: 0, cols: 8 },
            band_rows: 0,
            mode: ColorMode::Mono,
            rotation: None,
            band_start: 0,
            bw: Vec::new(),
            red: Vec::new(),
            cursor: (0, 0),
            font: Font::Body,
            fg: Color::Black,
            bg: Color::White,
        }
    }

    fn stride(&self) -> usize {
        self.dims.cols as usize / 8
    }

    pub(crate) fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }

    /// Read back a pixel of the active band (absolute coordinates)
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Color {
        let row = y as i64 - i64::from(self.band_start);
        if x >= u32::from(self.dims.cols) || row < 0 || row >= i64::from(self.band_rows) {
            return Color::White;
        }
        let index = row as usize * self.stride() + (x / 8) as usize;
        let bit = 0x80 >> (x % 8);
        if self.red.get(index).is_some_and(|b| b & bit != 0) {
            Color::Red
        } else if self.bw[index] & bit != 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}

impl Canvas for MockCanvas {
    fn begin(&mut self, dims: Dimensions, band_rows: u16, mode: ColorMode) {
        self.dims = dims;
        self.band_rows = band_rows;
        self.mode = mode;
        self.band_start = 0;
        let bytes = band_rows as usize * dims.cols as usize / 8;
        self.bw = vec![0xFF; bytes];
        self.red = if mode.has_red() { vec![0x00; bytes] } else { Vec::new() };
    }

    fn end(&mut self) {}

    fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = Some(rotation);
    }

    fn first_band(&mut self) {
        self.band_start = 0;
    }

    fn next_band(&mut self) -> bool {
        let next = self.band_start + self.band_rows;
        if next >= self.dims.rows {
            return false;
        }
        self.band_start = next;
        true
    }

    fn band(&self) -> Band<'_> {
        let rows = self.band_rows.min(self.dims.rows - self.band_start);
        let bytes = rows as usize * self.stride();
        Band {
            bw: &self.bw[..bytes],
            red: if self.mode.has_red() { &self.red[..bytes] } else { &[] },
            y: self.band_start,
            rows,
        }
    }

    fn clear(&mut self, color: Color) {
        self.bw.fill(color.bw_byte());
        self.red.fill(color.red_byte());
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || x >= i32::from(self.dims.cols) || y < 0 || y >= i32::from(self.dims.rows) {
            return;
        }
        let row = y - i32::from(self.band_start);
        if row < 0 || row >= i32::from(self.band_rows) {
            return;
        }
        let index = row as usize * self.stride() + (x / 8) as usize;
        let bit: u8 = 0x80 >> (x % 8);
        match color {
            Color::Black => {
                self.bw[index] &= !bit;
                if let Some(b) = self.red.get_mut(index) {
                    *b &= !bit;
                }
            }
            Color::White => {
                self.bw[index] |= bit;
                if let Some(b) = self.red.get_mut(index) {
                    *b &= !bit;
                }
            }
            Color::Red => {
                self.bw[index] |= bit;
                if let Some(b) = self.red.get_mut(index) {
                    *b |= bit;
                }
            }
        }
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn set_text_color(&mut self, fg: Color, bg: Color) {
        self.fg = fg;
        self.bg = bg;
    }

    fn draw_text(&mut self, text: &str) {
        let fg = self.fg;
        for i in 0..text.len() as i32 {
            self.draw_pixel(self.cursor.0 + i, self.cursor.1, fg);
        }
        self.cursor.0 += text.len() as i32;
    }
}

/// Scripted lunisolar data covering the dates the tests exercise
#[derive(Default)]
pub(crate) struct FakeCalendar;

impl LunarCalendar for FakeCalendar {
    fn solar_to_lunar(&self, date: SolarDate) -> LunarDate {
        match (date.year, date.month, date.day) {
            // January 2025: lunar new year fell on the 29th; the twelfth
            // month of 2024 was short (29 days).
            (2025, 1, d) if d <= 28 => LunarDate {
                year: 2024,
                month: 12,
                day: d + 1,
                is_leap: false,
            },
            (2025, 1, d) => LunarDate {
                year: 2025,
                month: 1,
                day: d - 28,
                is_leap: false,
            },
            // A long twelfth month: 2030-01-23 is lunar 12/30
            (2030, 1, 23) => LunarDate {
                year: 2029,
                month: 12,
                day: 30,
                is_leap: false,
            },
            // Festival-free filler for everything else
            _ => LunarDate {
                year: date.year,
                month: 6,
                day: 10 + date.day % 3,
                is_leap: false,
            },
        }
    }

    fn solar_term_day(&self, year: u16, month: u8, day: u8) -> Option<u8> {
        match (year, month) {
            (2025, 1) => Some(if day < 15 { 5 } else { 20 }),
            (2025, 4) if day < 15 => Some(4),
            (2025, 5) if day >= 15 => Some(21),
            _ => None,
        }
    }

    fn next_solar_term(&self, date: SolarDate) -> TermCountdown {
        match (date.year, date.month, date.day) {
            (2025, 1, 1) => TermCountdown { index: 0, days: 4 },
            (2025, 1, 5) => TermCountdown { index: 0, days: 0 },
            _ => TermCountdown { index: 0, days: 3 },
        }
    }
}
