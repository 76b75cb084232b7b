//! # helgdagar
//!
//! Swedish public holidays for any year from 1583 to 2599, computed from
//! the calendar: Easter Sunday by Gauss's algorithm, everything else from
//! fixed dates and weekday searches.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! the plain string-keyed entry point.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! helgdagar = "0.1"
//! ```
//!
//! ```rust
//! let holidays = helgdagar::holidays(Some(2023)).unwrap();
//! assert_eq!(holidays["2023-04-09"], "påskdagen");
//! assert_eq!(holidays["2023-12-25"], "juldagen");
//! assert!(helgdagar::holidays(Some(1582)).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use indexmap::IndexMap;

/// Core aliases and error definitions.
pub use hd_core as core;

/// Dates, weekdays, weekday search, and Easter Sunday.
pub use hd_time as time;

/// Holiday rules, configuration, and the `Sweden` calendar.
pub use hd_calendar as calendar;

pub use hd_calendar::{build_holidays, Holiday, HolidayConfig, HolidayMap, Sweden};
pub use hd_core::{Error, Result, Year};
pub use hd_time::{easter_sunday, Date, Weekday};

/// Holidays of `year` (the current UTC year when `None`) as ISO date →
/// Swedish name.
///
/// # Errors
/// [`Error::YearOutOfRange`] for years without Easter constants.
pub fn holidays(year: Option<Year>) -> Result<IndexMap<String, String>> {
    let map = match year {
        Some(year) => hd_calendar::build_holidays(year)?,
        None => hd_calendar::build_holidays_for_current_year()?,
    };
    Ok(map.to_name_map())
}
