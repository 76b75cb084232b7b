//! `Calendar` trait.
//!
//! A calendar answers two questions about a date: is it a holiday, and is
//! it a weekend.  Holiday rules can fail for dates whose year is outside
//! the supported range, so every query that consults them returns a
//! [`Result`].

use hd_core::errors::Result;
use hd_time::{Date, Weekday};

use crate::holiday::Holiday;

/// A holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Sweden"`).
    fn name(&self) -> &str;

    /// The holiday falling on `date`, if any.
    fn holiday_on(&self, date: Date) -> Result<Option<Holiday>>;

    /// Return `true` if `date` is one of this calendar's holidays.
    ///
    /// Ordinary weekends are not holidays; see [`Calendar::is_weekend`].
    fn is_holiday(&self, date: Date) -> Result<bool> {
        Ok(self.holiday_on(date)?.is_some())
    }

    /// Return `true` if `date` is a Saturday or a Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    ///
    /// Weekends are answered without consulting the holiday rules.
    fn is_business_day(&self, date: Date) -> Result<bool> {
        if self.is_weekend(date) {
            return Ok(false);
        }
        Ok(!self.is_holiday(date)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Christmas Day only.
    #[derive(Debug)]
    struct ChristmasOnly;

    impl Calendar for ChristmasOnly {
        fn name(&self) -> &str {
            "Christmas Only"
        }

        fn holiday_on(&self, date: Date) -> Result<Option<Holiday>> {
            Ok((date.month() == 12 && date.day_of_month() == 25)
                .then_some(Holiday::ChristmasDay))
        }
    }

    #[test]
    fn weekend_is_not_a_holiday() {
        let cal = ChristmasOnly;
        // 2023-09-02 is a Saturday
        let sat = date(2023, 9, 2);
        assert!(cal.is_weekend(sat));
        assert!(!cal.is_holiday(sat).unwrap());
        assert!(!cal.is_business_day(sat).unwrap());
    }

    #[test]
    fn weekday_holiday() {
        let cal = ChristmasOnly;
        // 2023-12-25 is a Monday
        let christmas = date(2023, 12, 25);
        assert!(!cal.is_weekend(christmas));
        assert!(cal.is_holiday(christmas).unwrap());
        assert!(!cal.is_business_day(christmas).unwrap());
        assert!(cal.is_business_day(date(2023, 12, 27)).unwrap());
    }

    #[test]
    fn holiday_on_a_weekend() {
        let cal = ChristmasOnly;
        // 2022-12-25 is a Sunday
        let christmas = date(2022, 12, 25);
        assert!(cal.is_weekend(christmas));
        assert!(cal.is_holiday(christmas).unwrap());
    }
}
