//! Resolution of a TLE epoch into a calendar date-time and a Julian date.
//!
//! A TLE timestamps its elements with a two-digit year and a fractional
//! day-of-year. The two-digit year is disambiguated with the fixed pivot of
//! the format convention (00–56 → 2000–2056, 57–99 → 1957–1999, anchored on
//! the first launch year). The fractional day-of-year is decomposed into a
//! calendar month/day and an hour/minute/second time-of-day (seconds
//! truncated to integer granularity, no leap-second awareness), and the
//! resulting Gregorian instant is converted to a Julian date.

use hifitime::{Epoch, TimeScale};

use crate::constants::JulianDate;
use crate::elset_errors::ElsetError;

const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Resolve a two-digit TLE epoch year to a full year.
///
/// Years 0–56 resolve to 2000–2056, years 57–99 to 1957–1999. The pivot is a
/// fixed policy of the format convention, not configurable.
pub fn full_year(two_digit_year: i32) -> i32 {
    if two_digit_year < 57 {
        two_digit_year + 2000
    } else {
        two_digit_year + 1900
    }
}

/// Standard Gregorian leap-year rule.
fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Calendar date-time resolved from a fractional day-of-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEpoch {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Decompose a fractional day-of-year into a calendar date-time.
///
/// Arguments
/// ---------
/// * `year`: the resolved full year
/// * `days`: 1-based fractional day-of-year (day 1.5 is noon on January 1st)
///
/// Return
/// ------
/// * the resolved [`CalendarEpoch`], or [`ElsetError::EpochDayOutOfRange`]
///   when `days` is below 1.0 or past the end of the year (365 days, 366 in
///   leap years)
pub fn day_of_year_to_calendar(year: i32, days: f64) -> Result<CalendarEpoch, ElsetError> {
    let year_length: u32 = if is_leap_year(year) { 366 } else { 365 };
    if !(1.0..(year_length + 1) as f64).contains(&days) {
        return Err(ElsetError::EpochDayOutOfRange { year, days });
    }

    let mut remaining = days.trunc() as u32;
    let mut month = 1u8;
    for (i, month_length) in DAYS_PER_MONTH.iter().enumerate() {
        let mut month_length = *month_length;
        if i == 1 && is_leap_year(year) {
            month_length += 1;
        }
        if remaining <= month_length {
            break;
        }
        remaining -= month_length;
        month += 1;
    }

    let fraction = days - days.trunc();
    let hour = (fraction * 24.0).trunc();
    // rounding in the rescaled fractions must not spill into the next unit
    let minute = (fraction * 1440.0 - hour * 60.0).trunc().min(59.0);
    let second = (fraction * 86400.0 - hour * 3600.0 - minute * 60.0)
        .trunc()
        .min(59.0);

    Ok(CalendarEpoch {
        year,
        month,
        day: remaining as u8,
        hour: hour as u8,
        minute: minute as u8,
        second: second as u8,
    })
}

/// Julian date of a calendar instant (UTC).
pub fn julian_date(cal: &CalendarEpoch) -> JulianDate {
    Epoch::from_gregorian(
        cal.year,
        cal.month,
        cal.day,
        cal.hour,
        cal.minute,
        cal.second,
        0,
        TimeScale::UTC,
    )
    .to_jde_utc_days()
}

/// Resolve a raw TLE epoch (two-digit year + fractional day-of-year) into a
/// Julian date.
pub fn resolve_epoch(two_digit_year: i32, days: f64) -> Result<JulianDate, ElsetError> {
    let cal = day_of_year_to_calendar(full_year(two_digit_year), days)?;
    Ok(julian_date(&cal))
}

#[cfg(test)]
mod epoch_test {
    use super::*;

    #[test]
    fn test_century_pivot() {
        assert_eq!(full_year(0), 2000);
        assert_eq!(full_year(24), 2024);
        assert_eq!(full_year(56), 2056);
        assert_eq!(full_year(57), 1957);
        assert_eq!(full_year(99), 1999);
    }

    #[test]
    fn test_day_of_year_start_of_year() {
        let cal = day_of_year_to_calendar(2024, 1.0).unwrap();
        assert_eq!(
            cal,
            CalendarEpoch {
                year: 2024,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
                second: 0,
            }
        );
    }

    #[test]
    fn test_day_of_year_leap_day() {
        let cal = day_of_year_to_calendar(2024, 60.5).unwrap();
        assert_eq!(
            cal,
            CalendarEpoch {
                year: 2024,
                month: 2,
                day: 29,
                hour: 12,
                minute: 0,
                second: 0,
            }
        );
        // same day-of-year in a common year falls on March 1st
        let cal = day_of_year_to_calendar(2023, 60.5).unwrap();
        assert_eq!((cal.month, cal.day), (3, 1));
    }

    #[test]
    fn test_day_of_year_end_of_year() {
        let cal = day_of_year_to_calendar(2023, 365.75).unwrap();
        assert_eq!((cal.month, cal.day, cal.hour), (12, 31, 18));
        let cal = day_of_year_to_calendar(2024, 366.0).unwrap();
        assert_eq!((cal.month, cal.day), (12, 31));
    }

    #[test]
    fn test_time_of_day_truncation() {
        let cal = day_of_year_to_calendar(2024, 1.9999999).unwrap();
        assert_eq!((cal.hour, cal.minute, cal.second), (23, 59, 59));
    }

    #[test]
    fn test_day_of_year_out_of_range() {
        for (year, days) in [(2024, 0.5), (2024, 367.0), (2023, 366.0), (2024, 400.0)] {
            assert_eq!(
                day_of_year_to_calendar(year, days).unwrap_err(),
                ElsetError::EpochDayOutOfRange { year, days }
            );
        }
        // 366.0 is valid only in leap years
        assert!(day_of_year_to_calendar(2024, 366.9).is_ok());
    }

    #[test]
    fn test_julian_date_noon_reference() {
        // 2024-01-01 12:00:00 UTC
        let jd = resolve_epoch(24, 1.5).unwrap();
        assert!((jd - 2460311.0).abs() < 1e-9);
        // 2000-01-01 12:00:00 UTC is JD 2451545.0 (J2000)
        let jd = resolve_epoch(0, 1.5).unwrap();
        assert!((jd - 2451545.0).abs() < 1e-9);
    }

    #[test]
    fn test_julian_date_century_pivot_applies() {
        // day 275 of 1957 is October 2nd
        let cal = day_of_year_to_calendar(full_year(57), 275.0).unwrap();
        assert_eq!((cal.year, cal.month, cal.day), (1957, 10, 2));
    }
}
