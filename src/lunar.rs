//! Lunar-calendar service seam and name catalogs
//!
//! The lunisolar conversion itself (solar to lunar dates, solar-term day
//! computation) is astronomy owned by an external service; this module
//! defines the [`LunarCalendar`] trait through which the renderer consumes
//! it, plus the static name catalogs the scenes print: lunar month and day
//! names, the sexagenary stems and branches, zodiac animals, the 24 solar
//! terms and the weekday characters.
//!
//! Stem/branch/zodiac indices and the plain Gregorian queries (first
//! weekday of a month, days in a month) have provided implementations,
//! since those are fixed arithmetic rather than astronomy; a service may
//! still override them.

use crate::time;

/// A Gregorian calendar date
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolarDate {
    /// Full year, e.g. 2025
    pub year: u16,
    /// Month 1-12
    pub month: u8,
    /// Day of month 1-31
    pub day: u8,
}

/// A date in the traditional lunisolar calendar
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LunarDate {
    /// Lunar year (the year the lunar new year fell in)
    pub year: u16,
    /// Lunar month 1-12
    pub month: u8,
    /// Lunar day 1-30
    pub day: u8,
    /// Whether this is the leap (intercalary) month
    pub is_leap: bool,
}

/// Result of a next-solar-term query
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TermCountdown {
    /// Index into [`SOLAR_TERM_NAMES`]
    pub index: usize,
    /// Days until the term; 0 means the queried date is the term itself
    pub days: u8,
}

/// Queries the renderer makes against the lunar-calendar service
///
/// Implementations are assumed to return valid data for valid input dates;
/// out-of-range dates are a contract violation by the caller, not a runtime
/// error handled here. The one sanctioned "absence" is
/// [`solar_term_day`](Self::solar_term_day) returning `None`, which simply
/// means no term label is shown.
pub trait LunarCalendar {
    /// Convert a solar date to its lunar equivalent
    fn solar_to_lunar(&self, date: SolarDate) -> LunarDate;

    /// Day-of-month of the solar term governing the half-month that
    /// contains `day`, or `None` when the service has no data
    ///
    /// Each Gregorian month holds two solar terms, one in each half; the
    /// term's catalog index is `(month - 1) * 2`, plus one for the second
    /// half (day >= 15).
    fn solar_term_day(&self, year: u16, month: u8, day: u8) -> Option<u8>;

    /// The next solar term on or after `date`, with the day countdown
    fn next_solar_term(&self, date: SolarDate) -> TermCountdown;

    /// Weekday of the first day of a month, 0 = Sunday .. 6 = Saturday
    fn first_weekday_of_month(&self, year: u16, month: u8) -> u8 {
        time::weekday_of(year, month, 1)
    }

    /// Number of days in a Gregorian month
    fn days_in_month(&self, year: u16, month: u8) -> u8 {
        time::days_in_month(year, month)
    }

    /// Heavenly-stem index of a lunar year, 0 = 甲
    fn stem_index(&self, lunar: &LunarDate) -> usize {
        ((lunar.year as usize) + 6) % 10 // (year - 4) mod 10
    }

    /// Earthly-branch index of a lunar year, 0 = 子
    fn branch_index(&self, lunar: &LunarDate) -> usize {
        ((lunar.year as usize) + 8) % 12 // (year - 4) mod 12
    }

    /// Zodiac animal index of a lunar year, 0 = 鼠
    fn zodiac_index(&self, lunar: &LunarDate) -> usize {
        self.branch_index(lunar)
    }
}

/// Lunar month names, indexed 1-12 (index 0 unused)
pub static MONTH_NAMES: [&str; 13] = [
    "", "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月",
    "腊月",
];

/// Lunar day names, indexed 1-30 (index 0 unused)
pub static DAY_NAMES: [&str; 31] = [
    "", "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一",
    "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三",
    "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Prefix shown before the month name of a leap month
pub static LEAP_PREFIX: &str = "闰";

/// The ten heavenly stems
pub static STEM_NAMES: [&str; 10] =
    ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The twelve earthly branches
pub static BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// The twelve zodiac animals, aligned with [`BRANCH_NAMES`]
pub static ZODIAC_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// The 24 solar terms in catalog order, starting from 小寒 (early January)
pub static SOLAR_TERM_NAMES: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种",
    "夏至", "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪",
    "大雪", "冬至",
];

/// Weekday characters, 0 = Sunday .. 6 = Saturday, printed after 星期
pub static WEEKDAY_NAMES: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Solar-term catalog index for a date, `(month - 1) * 2` plus one for the
/// second half-month
pub fn solar_term_index(month: u8, day: u8) -> usize {
    (month as usize - 1) * 2 + usize::from(day >= 15)
}
