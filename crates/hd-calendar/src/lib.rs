//! # hd-calendar
//!
//! Swedish holidays: the holiday set of a year, its inclusion
//! configuration, and the weekend and holiday queries built on it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait: holiday and weekend queries.
pub mod calendar;

/// Holiday inclusion set.
pub mod config;

/// `Holiday` — the Swedish holidays and their names.
pub mod holiday;

/// `HolidayMap` — one year's holidays keyed by date.
pub mod holiday_map;

/// Swedish holiday rules and the `Sweden` calendar.
pub mod sweden;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use config::HolidayConfig;
pub use holiday::Holiday;
pub use holiday_map::HolidayMap;
pub use sweden::{build_holidays, build_holidays_for_current_year, build_holidays_with, Sweden};
