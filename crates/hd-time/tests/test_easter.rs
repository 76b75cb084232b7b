//! Integration tests for the Easter Sunday computation.

use hd_core::Error;
use hd_time::{easter_sunday, Date, Weekday};
use proptest::prelude::*;

#[test]
fn every_supported_year_is_a_sunday_in_march_or_april() {
    for year in 1583..=2599 {
        let easter = easter_sunday(year).unwrap();
        assert_eq!(easter.year(), year);
        assert!(matches!(easter.month(), 3 | 4), "{easter}");
        assert_eq!(easter.weekday(), Weekday::Sunday, "{easter}");
        // Gregorian Easter lies between March 22 and April 25.
        assert!(easter >= Date::from_ymd(year, 3, 22).unwrap(), "{easter}");
        assert!(easter <= Date::from_ymd(year, 4, 25).unwrap(), "{easter}");
    }
}

#[test]
fn never_april_26() {
    for year in 1583..=2599 {
        let easter = easter_sunday(year).unwrap();
        assert!(!(easter.month() == 4 && easter.day_of_month() == 26), "{easter}");
    }
}

#[test]
fn known_dates() {
    let known = [
        (1583, "1583-04-10"),
        (1700, "1700-04-11"),
        (1818, "1818-03-22"),
        (1886, "1886-04-25"),
        (1943, "1943-04-25"),
        (1954, "1954-04-18"),
        (1981, "1981-04-19"),
        (2000, "2000-04-23"),
        (2008, "2008-03-23"),
        (2023, "2023-04-09"),
        (2024, "2024-03-31"),
        (2025, "2025-04-20"),
        (2049, "2049-04-18"),
        (2285, "2285-03-22"),
    ];
    for (year, iso) in known {
        assert_eq!(easter_sunday(year).unwrap().to_string(), iso, "easter {year}");
    }
}

#[test]
fn out_of_range_years() {
    for year in [i32::MIN, 0, 1582, 2600, 2601, i32::MAX] {
        assert!(
            matches!(easter_sunday(year), Err(Error::YearOutOfRange { year: y, .. }) if y == year),
            "{year} should be rejected"
        );
    }
}

proptest! {
    #[test]
    fn easter_monday_is_next_day(year in 1583i32..2600) {
        let easter = easter_sunday(year).unwrap();
        let monday = easter.add_days(1).unwrap();
        prop_assert_eq!(monday.weekday(), Weekday::Monday);
        prop_assert_eq!(monday - easter, 1);
        prop_assert!(matches!(monday.month(), 3 | 4));
    }
}
