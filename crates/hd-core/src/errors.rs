//! Error types for helgdagar.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  The
//! [`ensure!`](crate::ensure) macro covers argument checks.

use thiserror::Error;

/// First year covered by the Easter constant table.
pub const MIN_YEAR: i32 = 1583;

/// Last year of the supported span.
pub const MAX_YEAR: i32 = 2600;

/// The top-level error type used throughout helgdagar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested year has no entry in the Easter constant table.
    #[error("year {year} is outside the supported range {min}-{max}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// A weekday search ran through a whole week without a match.
    ///
    /// Seven consecutive days always contain every weekday, so this signals a
    /// broken invariant rather than bad input.
    #[error("no {target} found within a week {direction} {origin}")]
    WeekdayNotFound {
        /// ISO date the search started from.
        origin: String,
        /// Name of the weekday that was searched for.
        target: &'static str,
        /// Search direction (`"before"` or `"after"`).
        direction: &'static str,
    },

    /// Invalid date construction, parsing, or arithmetic.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl Error {
    /// Build a [`Error::YearOutOfRange`] for `year` against the supported span.
    pub fn year_out_of_range(year: i32) -> Self {
        Error::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        }
    }
}

/// Shorthand `Result` type used throughout helgdagar.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hd_core::{ensure, errors::Result};
/// fn weeks(n: i32) -> Result<i32> {
///     ensure!(n >= 0, "week count must be non-negative, got {n}");
///     Ok(n * 7)
/// }
/// assert_eq!(weeks(2), Ok(14));
/// assert!(weeks(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_out_of_range_message() {
        let e = Error::year_out_of_range(1582);
        assert_eq!(
            e.to_string(),
            "year 1582 is outside the supported range 1583-2600"
        );
    }

    #[test]
    fn weekday_not_found_message() {
        let e = Error::WeekdayNotFound {
            origin: "2023-04-09".into(),
            target: "Friday",
            direction: "before",
        };
        assert_eq!(
            e.to_string(),
            "no Friday found within a week before 2023-04-09"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
