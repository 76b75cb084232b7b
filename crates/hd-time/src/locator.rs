//! Weekday search and whole-week offsets.
//!
//! These are the primitives the movable holidays are derived from: "the
//! Friday before Easter Sunday", "the Saturday between June 20 and 26",
//! "seven weeks after Easter Sunday".

use hd_core::errors::{Error, Result};
use tracing::trace;

use crate::date::Date;
use crate::weekday::Weekday;

/// Direction of a date search or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards earlier dates.
    Before,
    /// Towards later dates.
    After,
}

impl Direction {
    /// `-1` for [`Direction::Before`], `+1` for [`Direction::After`].
    pub fn sign(&self) -> i32 {
        match self {
            Direction::Before => -1,
            Direction::After => 1,
        }
    }

    /// Lower-case label, `"before"` or `"after"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Before => "before",
            Direction::After => "after",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Days examined past `origin` by [`find_closest_weekday`].
const SEARCH_SPAN: i32 = 6;

/// Return the first date with weekday `target`, scanning from `origin`
/// (inclusive) in `direction`.
///
/// At most seven candidates are examined: `origin` and the six days next to
/// it.  If `origin` already falls on `target` it is returned unchanged.
///
/// # Errors
/// [`Error::WeekdayNotFound`] if no candidate matches, and
/// [`Error::Date`] if the scan would leave the representable date range.
///
/// # Example
/// ```
/// use hd_time::{find_closest_weekday, Date, Direction, Weekday};
///
/// let easter = Date::from_ymd(2023, 4, 9).unwrap();
/// let good_friday = find_closest_weekday(easter, Weekday::Friday, Direction::Before).unwrap();
/// assert_eq!(good_friday, Date::from_ymd(2023, 4, 7).unwrap());
/// ```
pub fn find_closest_weekday(origin: Date, target: Weekday, direction: Direction) -> Result<Date> {
    for step in 0..=SEARCH_SPAN {
        let candidate = origin.add_days(step * direction.sign())?;
        trace!(%origin, %candidate, %target, "weekday search step");
        if candidate.weekday() == target {
            return Ok(candidate);
        }
    }
    Err(Error::WeekdayNotFound {
        origin: origin.to_string(),
        target: target.name(),
        direction: direction.as_str(),
    })
}

/// Shift `origin` by `weeks * 7` days in `direction`.
///
/// A negative `weeks` moves the opposite way, so
/// `move_by_weeks(move_by_weeks(d, n, After)?, n, Before)? == d`.
pub fn move_by_weeks(origin: Date, weeks: i32, direction: Direction) -> Result<Date> {
    let signed = weeks
        .checked_mul(direction.sign())
        .ok_or_else(|| Error::Date(format!("week offset {weeks} overflows")))?;
    origin.add_weeks(signed)
}

/// The first `weekday` at-or-after `origin`, moved `nth` weeks later.
///
/// With `nth == 0` this is simply the closest `weekday` at-or-after `origin`.
pub fn find_nth_weekday_after(origin: Date, weekday: Weekday, nth: u32) -> Result<Date> {
    let first = find_closest_weekday(origin, weekday, Direction::After)?;
    let weeks = i32::try_from(nth)
        .map_err(|_| Error::Date(format!("week offset {nth} overflows")))?;
    move_by_weeks(first, weeks, Direction::After)
}
