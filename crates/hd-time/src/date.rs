//! `Date` type.
//!
//! A [`Date`] is a civil (proleptic Gregorian) calendar date with no time of
//! day and no time zone.  Internally it is a count of days since 1970-01-01,
//! so weekday and day arithmetic never go through an instant or a local
//! time-zone conversion.
//!
//! # Serial number convention
//! * Serial 0 = 1970-01-01 (a Thursday); earlier dates are negative.
//! * The valid date range is 1583-01-01 to 2600-12-31.

use std::str::FromStr;

use hd_core::errors::{Error, Result};
use hd_core::{Days, Year, MAX_YEAR, MIN_YEAR};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a day count since 1970-01-01.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(Days);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1583.
    pub const MIN: Date = Date(-141_349);

    /// Maximum valid date: December 31, 2600.
    pub const MAX: Date = Date(230_467);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: Days) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        let m = Month::from_number(month)
            .ok_or_else(|| Error::Date(format!("month {month} out of range [1, 12]")))?;
        Self::new(year, m, day)
    }

    /// Create a date from year, [`Month`], and day-of-month.
    pub fn new(year: Year, month: Month, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        let days_in = month.length(year);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{:02}",
                month.number()
            )));
        }
        Ok(Date(serial_from_ymd(year, month.number(), day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1970-01-01).
    pub fn serial(&self) -> Days {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        // ymd_from_serial only ever yields 1..=12.
        Month::from_number(self.month()).unwrap_or(Month::January)
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (Year, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = ymd_from_serial(self.0);
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (4 in the Sunday-zero encoding).
        let w = (self.0 + 4).rem_euclid(7) as usize;
        Weekday::ALL[w]
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: Days) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {self} + {n} overflows")))?;
        Self::from_serial(serial)
    }

    /// Advance by `n` weeks (negative moves backwards).
    pub fn add_weeks(self, n: i32) -> Result<Self> {
        let days = n
            .checked_mul(7)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {n} weeks overflows")))?;
        self.add_days(days)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> Days {
        other.0 - self.0
    }

    /// Return the ISO-8601 `YYYY-MM-DD` form.
    pub fn to_iso_string(&self) -> String {
        self.to_string()
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = Days;
    fn sub(self, rhs: Date) -> Days {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse a strict ISO-8601 calendar date, `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Date(format!("'{s}' is not a YYYY-MM-DD date"));
        let bytes = s.as_bytes();
        if !s.is_ascii() || bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(bad());
        }
        let digits = |range: std::ops::Range<usize>| -> Result<u32> {
            let part = &s[range];
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(bad());
            }
            part.parse::<u32>().map_err(|_| bad())
        };
        let year = digits(0..4)? as Year;
        let month = digits(5..7)? as u8;
        let day = digits(8..10)? as u8;
        Date::from_ymd(year, month, day)
    }
}

impl TryFrom<&str> for Date {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a (Gregorian) leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    Month::from_number(month).map_or(0, |m| m.length(year))
}

const DAYS_IN_ERA: Days = 146_097;
const DAYS_FROM_0000_01_01_TO_1970_01_01: Days = 719_468;

/// Convert (year, month, day) to days since 1970-01-01.
///
/// Ref: <http://howardhinnant.github.io/date_algorithms.html>
fn serial_from_ymd(year: Year, month: u8, day: u8) -> Days {
    let (m, d) = (month as Days, day as Days);
    let y = if m <= 2 { year - 1 } else { year };
    let m = if m > 2 { m - 3 } else { m + 9 };
    let era = y.div_euclid(400);
    let year_of_era = y.rem_euclid(400);
    let day_of_year = (153 * m + 2) / 5 + d - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_IN_ERA + day_of_era - DAYS_FROM_0000_01_01_TO_1970_01_01
}

/// Decompose days since 1970-01-01 into (year, month, day).
fn ymd_from_serial(serial: Days) -> (Year, u8, u8) {
    let days = serial + DAYS_FROM_0000_01_01_TO_1970_01_01;
    let era = days.div_euclid(DAYS_IN_ERA);
    let day_of_era = days.rem_euclid(DAYS_IN_ERA);
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / (DAYS_IN_ERA - 1))
            / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month as u8, day as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
