//! Scene composition for the two watch faces
//!
//! [`compose`] draws one complete face (calendar or clock) through a
//! [`Canvas`]. It is deliberately free of side effects beyond the canvas:
//! no time reads, no allocation, no logging. The banded render driver
//! replays it once per band, and replay only tiles correctly when every
//! pass emits exactly the same primitives, so compose also resets all
//! canvas text state up front rather than inheriting it from the previous
//! band.
//!
//! All coordinates are logical (post-rotation) and sized for a 250x122
//! panel drawn landscape.

use crate::canvas::{Canvas, Font};
use crate::color::Color;
use crate::festival::{self, HolidayKind};
use crate::lunar::{
    BRANCH_NAMES, DAY_NAMES, LEAP_PREFIX, LunarCalendar, LunarDate, MONTH_NAMES, STEM_NAMES,
    SOLAR_TERM_NAMES, SolarDate, WEEKDAY_NAMES, ZODIAC_NAMES,
};
use crate::segment;
use crate::time::DateTime;

/// Which face to compose
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    /// Month calendar with festival labels and holiday markers
    Calendar,
    /// Large seven-segment wall clock
    Clock,
}

/// Everything a face needs to draw, fully resolved by the caller
#[derive(Clone, Copy, Debug)]
pub struct SceneInput {
    /// Date and wall-clock time being displayed
    pub date: DateTime,
    /// Lunar equivalent of [`date`](Self::date)
    pub lunar: LunarDate,
    /// Ambient temperature in whole degrees Celsius
    pub temperature_c: i8,
    /// Battery voltage; full scale is 4.2 V
    pub battery_volts: f32,
}

/// Left edge of the seven-segment hour field on the clock face
pub(crate) const CLOCK_TIME_X: i32 = 50;
/// Top edge of the time field
pub(crate) const CLOCK_TIME_Y: i32 = 35;
/// Size factor of the time digits
pub(crate) const CLOCK_TIME_SCALE: u32 = 4;
/// Digit cells per field (hour and minute each)
pub(crate) const CLOCK_TIME_DIGITS: u32 = 2;

/// Top-left corner of the minute's ones digit on the clock face
///
/// The partial-refresh driver updates exactly this cell, so it must track
/// the time-field layout in [`draw_time`].
pub(crate) fn minute_ones_origin() -> (i32, i32) {
    let s = CLOCK_TIME_SCALE;
    let minute_x = CLOCK_TIME_X
        + segment::field_width(s, CLOCK_TIME_DIGITS) as i32
        + 6 * s as i32;
    (minute_x + segment::digit_stride(s) as i32, CLOCK_TIME_Y)
}

/// Draw one complete face
pub fn compose<C: Canvas, L: LunarCalendar>(
    canvas: &mut C,
    calendar: &L,
    input: &SceneInput,
    mode: Mode,
) {
    // Text state must not leak in from a previous band replay.
    canvas.set_text_color(Color::Black, Color::White);
    canvas.set_font(Font::Body);
    canvas.set_cursor(0, 0);

    match mode {
        Mode::Calendar => draw_calendar(canvas, calendar, input),
        Mode::Clock => draw_clock(canvas, calendar, input),
    }
}

fn draw_calendar<C: Canvas, L: LunarCalendar>(canvas: &mut C, calendar: &L, input: &SceneInput) {
    draw_date_header(canvas, 6, 25, calendar, input);
    draw_week_header(canvas, 4, 28);
    draw_month_grid(canvas, calendar, input);
}

/// Year / month / day line, numerals in red and unit characters in black
fn draw_date(canvas: &mut impl Canvas, x: i32, y: i32, date: &DateTime) {
    canvas.set_cursor(x, y);
    canvas.draw_styled(Color::Red, Color::White, Font::Numeric, format_args!("{}", date.year));
    canvas.draw_styled(Color::Black, Color::White, Font::Body, format_args!("年"));
    canvas.draw_styled(Color::Red, Color::White, Font::Numeric, format_args!("{:02}", date.month));
    canvas.draw_styled(Color::Black, Color::White, Font::Body, format_args!("月"));
    canvas.draw_styled(Color::Red, Color::White, Font::Numeric, format_args!("{:02}", date.day));
    canvas.draw_styled(Color::Black, Color::White, Font::Body, format_args!("日 "));
}

fn draw_date_header<C: Canvas, L: LunarCalendar>(
    canvas: &mut C,
    x: i32,
    y: i32,
    calendar: &L,
    input: &SceneInput,
) {
    draw_date(canvas, x, y, &input.date);
    canvas.set_font(Font::Body);
    canvas.draw_fmt(format_args!("星期{}", WEEKDAY_NAMES[input.date.weekday as usize]));

    let lunar = &input.lunar;
    canvas.set_cursor(x + 180, y);
    canvas.draw_fmt(format_args!(
        "{}{}{} {}{}",
        if lunar.is_leap { LEAP_PREFIX } else { "" },
        MONTH_NAMES[lunar.month as usize],
        DAY_NAMES[lunar.day as usize],
        STEM_NAMES[calendar.stem_index(lunar)],
        BRANCH_NAMES[calendar.branch_index(lunar)],
    ));
    canvas.set_text_color(Color::Red, Color::White);
    canvas.draw_text(ZODIAC_NAMES[calendar.zodiac_index(lunar)]);
    canvas.set_text_color(Color::Black, Color::White);
    canvas.draw_text("年");
}

/// Weekday strip: Sunday and Saturday columns on red, workdays on black
fn draw_week_header(canvas: &mut impl Canvas, x: i32, y: i32) {
    canvas.fill_rect(x, y, 238, 14, Color::Red);
    canvas.fill_rect(x + 34, y, 170, 14, Color::Black);
    canvas.set_font(Font::Body);
    for (i, name) in WEEKDAY_NAMES.iter().enumerate() {
        let weekend = i == 0 || i == 6;
        canvas.set_text_color(Color::White, if weekend { Color::Red } else { Color::Black });
        canvas.set_cursor(x + 8 + i as i32 * 34, y + 10);
        canvas.draw_text(name);
    }
}

fn draw_month_grid<C: Canvas, L: LunarCalendar>(canvas: &mut C, calendar: &L, input: &SceneInput) {
    let year = input.date.year;
    let month = input.date.month;
    let first_weekday = i32::from(calendar.first_weekday_of_month(year, month));
    let days = i32::from(calendar.days_in_month(year, month));
    let rows = 1 + (days - (7 - first_weekday) + 6) / 7;
    let cell_h = if rows > 5 { 14 } else { 16 };

    for i in 0..days {
        let day = (i + 1) as u8;
        let weekday = ((first_weekday + i) % 7) as u8;
        let weekend = weekday == 0 || weekday == 6;
        let x = 10 + i32::from(weekday) * 34;
        let y = cell_h + (first_weekday + i) / 7 * cell_h;
        let today = day == input.date.day;

        if today {
            let dy = if rows > 5 { 2 } else { 3 };
            canvas.fill_circle(x + 11, y + dy + 30, 8, Color::Red);
            canvas.set_text_color(Color::White, Color::Red);
        } else {
            canvas.set_text_color(if weekend { Color::Red } else { Color::Black }, Color::White);
        }

        canvas.set_font(Font::Numeric);
        let number_dx = if day < 10 { 6 } else { 2 };
        canvas.set_cursor(x + number_dx, y + 42);
        canvas.draw_fmt(format_args!("{day}"));

        let cell_date = SolarDate { year, month, day };
        let cell_lunar = calendar.solar_to_lunar(cell_date);
        canvas.set_font(Font::Body);
        match festival::resolve_label(calendar, cell_date, weekday, cell_lunar) {
            Some(label) => {
                if !today {
                    canvas.set_text_color(Color::Red, Color::White);
                }
                // Three-character labels overhang the cell; shift them left
                canvas.set_cursor(if label.len() > 6 { x - 6 } else { x }, y + 12);
                canvas.draw_text(label);
            }
            None => {
                canvas.set_cursor(x, y + 12);
                if cell_lunar.day == 1 {
                    canvas.draw_text(MONTH_NAMES[cell_lunar.month as usize]);
                } else {
                    canvas.draw_text(DAY_NAMES[cell_lunar.day as usize]);
                }
            }
        }

        if let Some(kind) = festival::holiday_overlay(year, month, day) {
            if today {
                // The marker sits on the today circle; punch a white badge
                canvas.fill_circle(x + 20, y - 2, 4, Color::White);
                canvas.draw_circle(x + 20, y - 2, 4, Color::Red);
            }
            let fg = match kind {
                HolidayKind::Work => Color::Black,
                HolidayKind::Rest => Color::Red,
            };
            canvas.set_text_color(fg, Color::White);
            canvas.set_cursor(x + 25, y + 6);
            canvas.draw_text(kind.marker());
        }
    }
}

fn draw_clock<C: Canvas, L: LunarCalendar>(canvas: &mut C, calendar: &L, input: &SceneInput) {
    let date = &input.date;
    let lunar = &input.lunar;

    draw_date(canvas, 10, 24, date);
    canvas.set_cursor(140, 22);
    canvas.set_font(Font::Body);
    canvas.draw_fmt(format_args!("星期{}", WEEKDAY_NAMES[date.weekday as usize]));

    canvas.set_cursor(0, 60);
    canvas.draw_fmt(format_args!(
        "{}{}{}",
        if lunar.is_leap { LEAP_PREFIX } else { "" },
        MONTH_NAMES[lunar.month as usize],
        DAY_NAMES[lunar.day as usize],
    ));

    draw_battery(canvas, 220, 14, input.battery_volts);
    draw_temperature(canvas, 20, 80, input.temperature_c);

    canvas.draw_hline(10, 25, 230, Color::Black);
    draw_time(canvas, date.hour, date.minute);
    canvas.draw_hline(10, 127, 230, Color::Black);

    canvas.set_cursor(6, 40);
    canvas.set_font(Font::Body);
    canvas.draw_fmt(format_args!(
        "{}{}{}年",
        STEM_NAMES[calendar.stem_index(lunar)],
        BRANCH_NAMES[calendar.branch_index(lunar)],
        ZODIAC_NAMES[calendar.zodiac_index(lunar)],
    ));

    let countdown = calendar.next_solar_term(SolarDate {
        year: date.year,
        month: date.month,
        day: date.day,
    });
    let term = SOLAR_TERM_NAMES[countdown.index % SOLAR_TERM_NAMES.len()];
    if countdown.days == 0 {
        canvas.set_cursor(6, 110);
        canvas.draw_text(term);
    } else {
        canvas.set_cursor(6, 95);
        canvas.draw_fmt(format_args!("离{term}"));
        canvas.set_cursor(6, 110);
        canvas.draw_fmt(format_args!("还有{}天", countdown.days));
    }
}

/// Hour and minute as seven-segment fields with a static colon between
fn draw_time(canvas: &mut impl Canvas, hour: u8, minute: u8) {
    let s = CLOCK_TIME_SCALE;
    let (x, y) = (CLOCK_TIME_X, CLOCK_TIME_Y);
    let digits = CLOCK_TIME_DIGITS as i32;

    segment::draw_number(canvas, i32::from(hour), x, y, s, Color::Black, Color::White, digits);
    let colon_x = x + segment::field_width(s, CLOCK_TIME_DIGITS) as i32 + 2 * s as i32;
    let dot = 2 * s;
    canvas.fill_rect(colon_x, y + (9 * s as i32) / 2 + 1, dot, dot, Color::Black);
    canvas.fill_rect(colon_x, y + (27 * s as i32) / 2 + 3, dot, dot, Color::Black);
    let minute_x = colon_x + 4 * s as i32;
    segment::draw_number(canvas, i32::from(minute), minute_x, y, s, Color::Black, Color::White, digits);
}

fn draw_battery(canvas: &mut impl Canvas, x: i32, y: i32, volts: f32) {
    let level = ((volts * 100.0 / 4.2) as i32).clamp(0, 100) as u32;
    canvas.set_cursor(x - 26, y + 9);
    canvas.set_font(Font::Body);
    canvas.set_text_color(Color::Black, Color::White);
    canvas.draw_fmt(format_args!("{volts:.1}V"));
    canvas.fill_rect(x, y, 20, 10, Color::White);
    canvas.draw_rect(x, y, 20, 10, Color::Black);
    canvas.fill_rect(x + 20, y + 4, 2, 2, Color::Black);
    canvas.fill_rect(x + 2, y + 2, 16 * level / 100, 6, Color::Black);
}

fn draw_temperature(canvas: &mut impl Canvas, x: i32, y: i32, temp: i8) {
    canvas.set_cursor(x, y);
    canvas.set_font(Font::Body);
    canvas.draw_fmt(format_args!("{temp}℃"));
}
