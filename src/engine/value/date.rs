use std::fmt;

use chrono::NaiveDate;

use crate::engine::errors::MarshalError;

/// Days between 0000-03-01 and 1970-01-01 in the proleptic Gregorian calendar.
const EPOCH_SHIFT: i64 = 719_468;
const DAYS_PER_ERA: i64 = 146_097;

/// A calendar date kept as both the engine's day count and the decoded
/// (year, month, day) triple.
///
/// The engine stores dates as signed 32-bit day offsets from 1970-01-01, which
/// spans roughly year -5 877 641 to 5 881 580. That is far wider than what
/// `chrono` can hold, so conversion to a host date type is a separate,
/// fallible step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    days: i32,
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    pub fn from_days(days: i32) -> Self {
        let (year, month, day) = civil_from_days(days as i64);
        Self {
            days,
            year: year as i32,
            month: month as u8,
            day: day as u8,
        }
    }

    /// Returns `None` for an invalid calendar triple or one whose day count
    /// does not fit the engine's 32-bit storage.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year as i64, month) {
            return None;
        }
        let days = i32::try_from(days_from_civil(year as i64, month, day)).ok()?;
        Some(Self {
            days,
            year,
            month: month as u8,
            day: day as u8,
        })
    }

    pub fn days(&self) -> i32 {
        self.days
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month as u32
    }

    pub fn day(&self) -> u32 {
        self.day as u32
    }

    pub fn to_naive_date(&self) -> Result<NaiveDate, MarshalError> {
        NaiveDate::from_ymd_opt(self.year, self.month(), self.day())
            .ok_or_else(|| MarshalError::overflow(self, "chrono::NaiveDate"))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(
                f,
                "-{:04}-{:02}-{:02}",
                self.year.unsigned_abs(),
                self.month,
                self.day
            )
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

// Hinnant's civil calendar algorithms. Computed in i64 so the shift by
// EPOCH_SHIFT cannot overflow at the ends of the i32 day range.
pub(crate) fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z.rem_euclid(DAYS_PER_ERA);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month as u32, day as u32)
}

pub(crate) fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let m = month as i64;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}
