//! Easter Sunday by Gauss's algorithm.
//!
//! The Gregorian date of Easter Sunday is derived from the year's remainders
//! modulo 19, 4 and 7 plus two century-dependent constants `M` and `N`.  The
//! raw formula is wrong in two known situations, corrected after the fact:
//!
//! * a result of April 26 becomes April 19;
//! * a result of April 25 with `d == 28`, `e == 6` and `a > 10` becomes
//!   April 18.

use hd_core::errors::{Error, Result};
use hd_core::Year;
use tracing::debug;

use crate::date::Date;
use crate::locator::{move_by_weeks, Direction};
use crate::month::Month;

/// One row of the constant table: an inclusive year band and its `(M, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EasterBand {
    /// First year of the band.
    pub first: Year,
    /// Last year of the band.
    pub last: Year,
    /// The `M` constant.
    pub m: i32,
    /// The `N` constant.
    pub n: i32,
}

const fn band(first: Year, last: Year, m: i32, n: i32) -> EasterBand {
    EasterBand { first, last, m, n }
}

/// Gauss constants by year band.
pub const EASTER_BANDS: [EasterBand; 9] = [
    band(1583, 1699, 22, 2),
    band(1700, 1799, 23, 3),
    band(1800, 1899, 23, 4),
    band(1900, 2099, 24, 5),
    band(2100, 2199, 24, 6),
    band(2200, 2299, 25, 0),
    band(2300, 2399, 26, 1),
    band(2400, 2499, 25, 1),
    band(2500, 2599, 26, 2),
];

/// Look up `(M, N)` for `year`.
///
/// # Errors
/// [`Error::YearOutOfRange`] if no band contains `year`.
pub fn easter_constants(year: Year) -> Result<(i32, i32)> {
    EASTER_BANDS
        .iter()
        .find(|b| (b.first..=b.last).contains(&year))
        .map(|b| (b.m, b.n))
        .ok_or_else(|| Error::year_out_of_range(year))
}

/// Intermediate values of the Gauss computation for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaussTerms {
    /// `year mod 19`.
    pub a: i32,
    /// `year mod 4`.
    pub b: i32,
    /// `year mod 7`.
    pub c: i32,
    /// `(19a + M) mod 30`.
    pub d: i32,
    /// `(2b + 4c + 6d + N) mod 7`.
    pub e: i32,
}

impl GaussTerms {
    /// Compute the terms for `year`.
    pub fn for_year(year: Year) -> Result<Self> {
        let (m, n) = easter_constants(year)?;
        let a = year % 19;
        let b = year % 4;
        let c = year % 7;
        let d = (19 * a + m) % 30;
        let e = (2 * b + 4 * c + 6 * d + n) % 7;
        Ok(GaussTerms { a, b, c, d, e })
    }

    /// `22 + d + e`: the day counted from March 1 (values past 31 spill into
    /// April).
    pub fn raw_day(&self) -> i32 {
        22 + self.d + self.e
    }
}

/// Return the date of Easter Sunday (påskdagen) in `year`.
///
/// # Errors
/// [`Error::YearOutOfRange`] if `year` is outside 1583–2599.
///
/// # Example
/// ```
/// use hd_time::{easter_sunday, Date};
///
/// assert_eq!(easter_sunday(2024).unwrap(), Date::from_ymd(2024, 3, 31).unwrap());
/// assert!(easter_sunday(1582).is_err());
/// ```
pub fn easter_sunday(year: Year) -> Result<Date> {
    let terms = GaussTerms::for_year(year)?;
    let raw = terms.raw_day();
    let (month, day) = if raw <= 31 {
        (Month::March, raw)
    } else {
        (Month::April, raw - 31)
    };
    let mut easter = Date::new(year, month, day as u8)?;

    if month == Month::April && day == 26 {
        easter = move_by_weeks(easter, 1, Direction::Before)?;
        debug!(year, %easter, "easter moved back from April 26");
    } else if month == Month::April && day == 25 && terms.d == 28 && terms.e == 6 && terms.a > 10
    {
        easter = move_by_weeks(easter, 1, Direction::Before)?;
        debug!(year, %easter, "easter moved back from April 25");
    }

    debug!(year, ?terms, %easter, "computed easter sunday");
    Ok(easter)
}
