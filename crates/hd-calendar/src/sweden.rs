//! Swedish holidays.
//!
//! Based on Lag (1989:253) om allmänna helgdagar, plus the three customs
//! (Christmas Eve, New Year's Eve, Midsummer Eve) that most calendars list
//! alongside them.  Which of these a build includes is controlled by
//! [`HolidayConfig`].

use chrono::Datelike;
use hd_core::ensure;
use hd_core::errors::Result;
use hd_core::Year;
use hd_time::{
    easter_sunday, find_closest_weekday, find_nth_weekday_after, Date, Direction, Month, Weekday,
};
use tracing::{debug, debug_span, trace, warn};

use crate::calendar::Calendar;
use crate::config::HolidayConfig;
use crate::holiday::Holiday;
use crate::holiday_map::HolidayMap;

/// All holidays of `year`, customs included.
///
/// # Errors
/// [`hd_core::Error::YearOutOfRange`] if Easter Sunday cannot be computed
/// for `year`; no partial map is returned.
///
/// # Example
/// ```
/// use hd_calendar::{build_holidays, Holiday};
///
/// let holidays = build_holidays(2023).unwrap();
/// assert_eq!(holidays.get_iso("2023-04-09").unwrap(), Some(Holiday::EasterSunday));
/// assert!(build_holidays(1582).is_err());
/// ```
pub fn build_holidays(year: Year) -> Result<HolidayMap> {
    build_holidays_with(year, &HolidayConfig::default())
}

/// All holidays of the current (UTC) calendar year.
pub fn build_holidays_for_current_year() -> Result<HolidayMap> {
    build_holidays(chrono::Utc::now().year())
}

/// Holidays of `year` restricted to the inclusion set in `config`.
pub fn build_holidays_with(year: Year, config: &HolidayConfig) -> Result<HolidayMap> {
    let _span = debug_span!("build_holidays", year).entered();

    // Easter first: an unsupported year fails before anything is built.
    let easter = easter_sunday(year)?;
    let mut map = HolidayMap::new(year);

    for holiday in config.holidays() {
        let date = holiday_date(year, easter, holiday)?;
        trace!(%date, %holiday, "holiday");
        if let Some(previous) = map.insert(date, holiday) {
            warn!(%date, %previous, %holiday, "holiday replaces another on the same date");
        }
    }

    debug!(count = map.len(), "built holiday map");
    Ok(map)
}

/// Date of `holiday` in `year`, given that year's Easter Sunday.
fn holiday_date(year: Year, easter: Date, holiday: Holiday) -> Result<Date> {
    match holiday {
        Holiday::NewYearsDay => Date::new(year, Month::January, 1),
        Holiday::Epiphany => Date::new(year, Month::January, 6),
        Holiday::LabourDay => Date::new(year, Month::May, 1),
        Holiday::NationalDay => Date::new(year, Month::June, 6),
        Holiday::ChristmasDay => Date::new(year, Month::December, 25),
        Holiday::BoxingDay => Date::new(year, Month::December, 26),
        Holiday::ChristmasEve => Date::new(year, Month::December, 24),
        Holiday::NewYearsEve => Date::new(year, Month::December, 31),
        Holiday::EasterSunday => Ok(easter),
        Holiday::GoodFriday => find_closest_weekday(easter, Weekday::Friday, Direction::Before),
        Holiday::EasterMonday => easter.add_days(1),
        // Easter Sunday + 39 days
        Holiday::AscensionDay => find_nth_weekday_after(easter, Weekday::Thursday, 5),
        Holiday::Pentecost => find_nth_weekday_after(easter, Weekday::Sunday, 7),
        // Saturday between June 20 and 26
        Holiday::MidsummerDay => find_closest_weekday(
            Date::new(year, Month::June, 20)?,
            Weekday::Saturday,
            Direction::After,
        ),
        // Friday between June 19 and 25
        Holiday::MidsummerEve => find_closest_weekday(
            Date::new(year, Month::June, 19)?,
            Weekday::Friday,
            Direction::After,
        ),
        // Saturday between October 31 and November 6
        Holiday::AllSaintsDay => find_closest_weekday(
            Date::new(year, Month::October, 31)?,
            Weekday::Saturday,
            Direction::After,
        ),
    }
}

/// Sweden calendar.
///
/// Holidays are the ones in the configured inclusion set.  With the
/// default (full) set, the weekday holidays are:
/// * New Year's Day (Jan 1)
/// * Epiphany (Jan 6)
/// * Good Friday
/// * Easter Monday
/// * Labour Day (May 1)
/// * Ascension Thursday
/// * National Day (Jun 6)
/// * Midsummer Eve (Friday between Jun 19–25)
/// * Christmas Eve (Dec 24)
/// * Christmas Day (Dec 25)
/// * Boxing Day (Dec 26)
/// * New Year's Eve (Dec 31)
///
/// plus Easter Sunday, Pentecost, Midsummer Day and All Saints' Day, which
/// always fall on a weekend.
#[derive(Debug, Clone, Default)]
pub struct Sweden {
    config: HolidayConfig,
}

impl Sweden {
    /// Calendar over the given inclusion set.
    pub fn with_config(config: HolidayConfig) -> Self {
        Self { config }
    }

    /// The inclusion set in use.
    pub fn config(&self) -> &HolidayConfig {
        &self.config
    }

    /// Holidays of `year` under this calendar's inclusion set.
    pub fn holidays(&self, year: Year) -> Result<HolidayMap> {
        build_holidays_with(year, &self.config)
    }

    /// Holidays in the inclusive range `[from, to]`, sorted by date.
    ///
    /// Each year's map is built once, however many dates of the year the
    /// range covers.
    ///
    /// # Errors
    /// [`hd_core::Error::Precondition`] if `from` is after `to`, and
    /// [`hd_core::Error::YearOutOfRange`] if any year in the range is
    /// unsupported.
    pub fn holidays_between(&self, from: Date, to: Date) -> Result<Vec<(Date, Holiday)>> {
        ensure!(from <= to, "holidays_between: {from} is after {to}");
        let mut found = Vec::new();
        for year in from.year()..=to.year() {
            let map = self.holidays(year)?;
            found.extend(map.iter().filter(|(d, _)| (from..=to).contains(d)));
        }
        found.sort_unstable_by_key(|(d, _)| *d);
        Ok(found)
    }
}

impl Calendar for Sweden {
    fn name(&self) -> &str {
        "Sweden"
    }

    fn holiday_on(&self, date: Date) -> Result<Option<Holiday>> {
        Ok(self.holidays(date.year())?.get(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_dependent_dates_follow_easter() {
        let easter = date(2024, 3, 31);
        for holiday in Holiday::ALL {
            let d = holiday_date(2024, easter, holiday).unwrap();
            let moved = holiday_date(2024, easter.add_days(7).unwrap(), holiday).unwrap();
            assert_eq!(moved != d, holiday.is_easter_dependent(), "{holiday:?}");
        }
    }

    #[test]
    fn new_years_day() {
        let cal = Sweden::default();
        assert!(!cal.is_business_day(date(2023, 1, 1)).unwrap());
        assert_eq!(cal.holiday_on(date(2023, 1, 1)).unwrap(), Some(Holiday::NewYearsDay));
    }

    #[test]
    fn epiphany() {
        let cal = Sweden::default();
        assert!(!cal.is_business_day(date(2023, 1, 6)).unwrap());
    }

    #[test]
    fn midsummer_eve_2023() {
        // 2023: Jun 23 is a Friday
        let cal = Sweden::default();
        assert!(!cal.is_business_day(date(2023, 6, 23)).unwrap());
        let statutory = Sweden::with_config(HolidayConfig::statutory());
        assert!(statutory.is_business_day(date(2023, 6, 23)).unwrap());
    }

    #[test]
    fn national_day() {
        let cal = Sweden::default();
        assert!(!cal.is_business_day(date(2023, 6, 6)).unwrap());
    }

    #[test]
    fn new_years_eve() {
        let cal = Sweden::default();
        assert!(!cal.is_business_day(date(2024, 12, 31)).unwrap());
    }

    #[test]
    fn normal_business_day() {
        let cal = Sweden::default();
        assert!(cal.is_business_day(date(2023, 6, 15)).unwrap());
    }

    #[test]
    fn unsupported_year_is_an_error() {
        let cal = Sweden::default();
        // 2600-06-17 is a Tuesday, so the holiday rules are consulted
        assert!(cal.is_business_day(date(2600, 6, 17)).is_err());
        // Weekends need no holiday rules
        assert!(!cal.is_business_day(date(2600, 6, 15)).unwrap());
    }
}
