//! Civil time helpers
//!
//! Decodes the unix timestamp carried in the device data into a calendar
//! date and wall-clock time, and provides the small pieces of Gregorian
//! arithmetic the date resolver and the scene composer lean on (days per
//! month, weekday of a date). All arithmetic is proleptic Gregorian and
//! runs in UTC; timezone offsetting is the caller's business, applied to
//! the timestamp before it reaches the renderer.

/// A decoded calendar date and wall-clock time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DateTime {
    /// Full Gregorian year, e.g. 2025
    pub year: u16,
    /// Month 1-12
    pub month: u8,
    /// Day of month 1-31
    pub day: u8,
    /// Hour 0-23
    pub hour: u8,
    /// Minute 0-59
    pub minute: u8,
    /// Second 0-59
    pub second: u8,
    /// Weekday, 0 = Sunday .. 6 = Saturday
    pub weekday: u8,
}

impl DateTime {
    /// Decode a unix timestamp (seconds since 1970-01-01T00:00:00Z)
    ///
    /// ```
    /// use calface::time::DateTime;
    ///
    /// let dt = DateTime::from_unix(1735689600); // 2025-01-01 00:00:00 UTC
    /// assert_eq!((dt.year, dt.month, dt.day), (2025, 1, 1));
    /// assert_eq!(dt.weekday, 3); // Wednesday
    /// ```
    pub fn from_unix(secs: u64) -> Self {
        let days = (secs / 86_400) as i64;
        let rem = secs % 86_400;
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: (rem / 3600) as u8,
            minute: (rem / 60 % 60) as u8,
            second: (rem % 60) as u8,
            // 1970-01-01 was a Thursday
            weekday: ((days + 4) % 7) as u8,
        }
    }
}

/// Whether `year` is a Gregorian leap year
pub fn is_leap_year(year: u16) -> bool {
    year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
}

/// Days in the given month (1-12) of `year`
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Weekday of a calendar date, 0 = Sunday .. 6 = Saturday
pub fn weekday_of(year: u16, month: u8, day: u8) -> u8 {
    ((days_from_civil(year, month, day) + 4).rem_euclid(7)) as u8
}

/// Days since the unix epoch for a calendar date
fn days_from_civil(year: u16, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Calendar date for a count of days since the unix epoch
fn civil_from_days(days: i64) -> (u16, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { y + 1 } else { y };
    (year as u16, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unix_epoch() {
        let dt = DateTime::from_unix(0);
        assert_eq!((dt.year, dt.month, dt.day), (1970, 1, 1));
        assert_eq!((dt.hour, dt.minute, dt.second), (0, 0, 0));
        assert_eq!(dt.weekday, 4); // Thursday
    }

    #[test]
    fn test_from_unix_2025_new_year() {
        let dt = DateTime::from_unix(1_735_689_600);
        assert_eq!((dt.year, dt.month, dt.day), (2025, 1, 1));
        assert_eq!(dt.weekday, 3); // Wednesday
    }

    #[test]
    fn test_from_unix_time_of_day() {
        // 2025-06-15 08:34:56 UTC
        let dt = DateTime::from_unix(1_749_976_496);
        assert_eq!((dt.year, dt.month, dt.day), (2025, 6, 15));
        assert_eq!((dt.hour, dt.minute, dt.second), (8, 34, 56));
        assert_eq!(dt.weekday, 0); // Sunday
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_weekday_of() {
        assert_eq!(weekday_of(2025, 1, 1), 3); // Wednesday
        assert_eq!(weekday_of(2025, 5, 11), 0); // Sunday, Mother's Day 2025
        assert_eq!(weekday_of(2025, 11, 27), 4); // Thursday, Thanksgiving 2025
        assert_eq!(weekday_of(1970, 1, 1), 4);
    }

    #[test]
    fn test_civil_round_trip_across_leap_boundary() {
        // 2024-02-29 23:59:59 UTC
        let dt = DateTime::from_unix(1_709_251_199);
        assert_eq!((dt.year, dt.month, dt.day), (2024, 2, 29));
        assert_eq!((dt.hour, dt.minute, dt.second), (23, 59, 59));
    }
}
