//! Date resolver: festival labels and statutory holiday overlay
//!
//! Every calendar cell carries at most one label, chosen by a strictly
//! ordered rule chain over seven competing sources. The order is load
//! bearing and must not be reshuffled:
//!
//! 1. lunar festival table, exact (month, day) match;
//! 2. lunar 12/29 whose following solar day is lunar 1/1 (the short
//!    twelfth month has no day 30, so New Year's Eve lands on the 29th);
//! 3. the three fixed-weekday observances (Mother's Day, Father's Day,
//!    Thanksgiving), each encoded as weekday plus day window;
//! 4. solar festival table, exact (month, day) match;
//! 5. solar term of the half-month, when today is its day;
//! 6. no match; the composer falls back to the lunar day name, or the
//!    lunar month name on the first day of a lunar month.
//!
//! Independent of the label chain, [`holiday_overlay`] reports the
//! statutory holiday / make-up workday adjustment for the one configured
//! year, rendered as a 休 or 班 marker on top of whichever label fired.

use crate::lunar::{LunarCalendar, LunarDate, SolarDate, SOLAR_TERM_NAMES, solar_term_index};

/// A festival pinned to a fixed date
#[derive(Clone, Copy, Debug)]
struct Festival {
    /// Month, Gregorian or lunar depending on the table
    month: u8,
    /// Day of month
    day: u8,
    /// Display label
    name: &'static str,
}

/// Fixed-date Gregorian festivals
static SOLAR_FESTIVALS: [Festival; 15] = [
    Festival { month: 1, day: 1, name: "元旦节" },
    Festival { month: 2, day: 14, name: "情人节" },
    Festival { month: 3, day: 8, name: "妇女节" },
    Festival { month: 3, day: 12, name: "植树节" },
    Festival { month: 4, day: 1, name: "愚人节" },
    Festival { month: 5, day: 1, name: "劳动节" },
    Festival { month: 5, day: 4, name: "青年节" },
    Festival { month: 6, day: 1, name: "儿童节" },
    Festival { month: 7, day: 1, name: "建党节" },
    Festival { month: 8, day: 1, name: "建军节" },
    Festival { month: 9, day: 10, name: "教师节" },
    Festival { month: 10, day: 1, name: "国庆节" },
    Festival { month: 11, day: 1, name: "万圣节" },
    Festival { month: 12, day: 24, name: "平安夜" },
    Festival { month: 12, day: 25, name: "圣诞节" },
];

/// Festivals matched against the lunar equivalent of the rendered date
///
/// 除夕 appears here for the long-month case (lunar 12/30); the short-month
/// case is rule 2 of the resolver.
static LUNAR_FESTIVALS: [Festival; 11] = [
    Festival { month: 1, day: 1, name: "春节" },
    Festival { month: 1, day: 15, name: "元宵节" },
    Festival { month: 2, day: 2, name: "龙抬头" },
    Festival { month: 5, day: 5, name: "端午节" },
    Festival { month: 7, day: 7, name: "七夕节" },
    Festival { month: 7, day: 15, name: "中元节" },
    Festival { month: 8, day: 15, name: "中秋节" },
    Festival { month: 9, day: 9, name: "重阳节" },
    Festival { month: 10, day: 1, name: "寒衣节" },
    Festival { month: 12, day: 8, name: "腊八节" },
    Festival { month: 12, day: 30, name: "除夕" },
];

/// Label for New Year's Eve, shared by rule 2 and the lunar table entry
const NEW_YEARS_EVE: &str = "除夕";

/// Qingming is the one solar term that is also a statutory festival; it
/// displays with a 节 suffix to set it apart from a plain term name. Kept
/// as a dedicated constant rather than a general suffix mechanism.
const QINGMING_FESTIVAL: &str = "清明节";

/// Catalog index of Qingming among the 24 terms
const QINGMING_INDEX: usize = 6;

/// The year the statutory holiday table below was compiled for
///
/// The table must be regenerated when the year rolls over; entries never
/// match any other year.
pub const HOLIDAY_YEAR: u16 = 2025;

/// A statutory calendar adjustment: an off-day or a make-up workday
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HolidayAdjustment {
    /// Gregorian month
    pub month: u8,
    /// Day of month
    pub day: u8,
    /// true = make-up workday (班), false = holiday off-day (休)
    pub is_workday: bool,
}

const fn rest(month: u8, day: u8) -> HolidayAdjustment {
    HolidayAdjustment { month, day, is_workday: false }
}

const fn work(month: u8, day: u8) -> HolidayAdjustment {
    HolidayAdjustment { month, day, is_workday: true }
}

/// Statutory holiday and make-up workday adjustments for [`HOLIDAY_YEAR`]
static HOLIDAYS: [HolidayAdjustment; 33] = [
    rest(1, 1),
    work(1, 26),
    rest(1, 28),
    rest(1, 29),
    rest(1, 30),
    rest(1, 31),
    rest(2, 1),
    rest(2, 2),
    rest(2, 3),
    rest(2, 4),
    work(2, 8),
    rest(4, 4),
    rest(4, 5),
    rest(4, 6),
    work(4, 27),
    rest(5, 1),
    rest(5, 2),
    rest(5, 3),
    rest(5, 4),
    rest(5, 5),
    rest(5, 31),
    rest(6, 1),
    rest(6, 2),
    work(9, 28),
    rest(10, 1),
    rest(10, 2),
    rest(10, 3),
    rest(10, 4),
    rest(10, 5),
    rest(10, 6),
    rest(10, 7),
    rest(10, 8),
    work(10, 11),
];

/// Kind of statutory adjustment applied to a day
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HolidayKind {
    /// Holiday off-day, marked 休
    Rest,
    /// Make-up workday, marked 班
    Work,
}

impl HolidayKind {
    /// Single-character marker drawn in the calendar cell
    pub fn marker(self) -> &'static str {
        match self {
            Self::Rest => "休",
            Self::Work => "班",
        }
    }
}

/// Look up the statutory adjustment for a date
///
/// Year-gated: the table only describes [`HOLIDAY_YEAR`], so any other year
/// never matches even when month and day coincide.
pub fn holiday_overlay(year: u16, month: u8, day: u8) -> Option<HolidayKind> {
    if year != HOLIDAY_YEAR {
        return None;
    }
    HOLIDAYS
        .iter()
        .find(|h| h.month == month && h.day == day)
        .map(|h| {
            if h.is_workday {
                HolidayKind::Work
            } else {
                HolidayKind::Rest
            }
        })
}

/// Resolve the display label for one calendar cell
///
/// `weekday` is 0 = Sunday .. 6 = Saturday for the solar date. `lunar` must
/// be the lunar equivalent of `date`. First matching rule wins; `None`
/// means the caller shows the lunar day (or month) name instead.
pub fn resolve_label<L: LunarCalendar>(
    calendar: &L,
    date: SolarDate,
    weekday: u8,
    lunar: LunarDate,
) -> Option<&'static str> {
    // Rule 1: lunar festival table
    if let Some(f) = LUNAR_FESTIVALS
        .iter()
        .find(|f| f.month == lunar.month && f.day == lunar.day)
    {
        return Some(f.name);
    }

    // Rule 2: New Year's Eve in a short twelfth month. Lunar 12/30 is
    // already covered by the table above; here 12/29 qualifies only when
    // the next solar day starts the new lunar year.
    if lunar.month == 12 && lunar.day == 29 {
        let next = calendar.solar_to_lunar(next_solar_day(calendar, date));
        if next.month == 1 && next.day == 1 {
            return Some(NEW_YEARS_EVE);
        }
    }

    // Rule 3: fixed-weekday observances, encoded as "the unique such
    // weekday inside a seven-day window" instead of an ordinal count.
    // Mother's Day: second Sunday of May
    if date.month == 5 && weekday == 0 && (8..=14).contains(&date.day) {
        return Some("母亲节");
    }
    // Father's Day: third Sunday of June
    if date.month == 6 && weekday == 0 && (15..=21).contains(&date.day) {
        return Some("父亲节");
    }
    // Thanksgiving: fourth Thursday of November
    if date.month == 11 && weekday == 4 && (22..=28).contains(&date.day) {
        return Some("感恩节");
    }

    // Rule 4: solar festival table
    if let Some(f) = SOLAR_FESTIVALS
        .iter()
        .find(|f| f.month == date.month && f.day == date.day)
    {
        return Some(f.name);
    }

    // Rule 5: solar term of this half-month
    if let Some(term_day) = calendar.solar_term_day(date.year, date.month, date.day) {
        if term_day == date.day {
            let index = solar_term_index(date.month, date.day);
            return Some(if index == QINGMING_INDEX {
                QINGMING_FESTIVAL
            } else {
                SOLAR_TERM_NAMES[index]
            });
        }
    }

    // Rule 6: nothing fired; not an error
    None
}

/// The solar day after `date`, normalized across month and year ends
fn next_solar_day<L: LunarCalendar>(calendar: &L, date: SolarDate) -> SolarDate {
    if date.day < calendar.days_in_month(date.year, date.month) {
        SolarDate { day: date.day + 1, ..date }
    } else if date.month < 12 {
        SolarDate { year: date.year, month: date.month + 1, day: 1 }
    } else {
        SolarDate { year: date.year + 1, month: 1, day: 1 }
    }
}
