//! # hd-time
//!
//! Civil dates, weekdays, weekday search, and the Easter Sunday computation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Easter Sunday (Gauss's algorithm with the April 25/26 corrections).
pub mod easter;

/// Weekday search and whole-week offsets.
pub mod locator;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::{easter_constants, easter_sunday, GaussTerms};
pub use locator::{find_closest_weekday, find_nth_weekday_after, move_by_weeks, Direction};
pub use month::Month;
pub use weekday::Weekday;
