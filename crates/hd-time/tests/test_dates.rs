//! Integration tests for `Date`, `Weekday`, and the weekday locator.

use hd_time::date::{days_in_month, is_leap_year};
use hd_time::{
    find_closest_weekday, find_nth_weekday_after, move_by_weeks, Date, Direction, Weekday,
};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn any_date() -> impl Strategy<Value = Date> {
    (Date::MIN.serial()..=Date::MAX.serial()).prop_map(|s| Date::from_serial(s).unwrap())
}

fn any_weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|n| Weekday::from_number(n).unwrap())
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Before), Just(Direction::After)]
}

// ─── Calendar consistency ─────────────────────────────────────────────────────

#[test]
fn consistency_over_whole_range() {
    // Walk every day of the supported range and check that serials,
    // decomposition, and weekdays advance in lockstep.
    let mut prev = Date::MIN;
    let mut prev_wd = prev.weekday();
    let mut d = Date::MIN.add_days(1).unwrap();
    loop {
        assert_eq!(d - prev, 1);
        let wd = d.weekday();
        assert_eq!(wd.number(), (prev_wd.number() + 1) % 7, "weekday jump at {d}");

        let (y, m, dd) = d.ymd();
        let (py, pm, pd) = prev.ymd();
        let same_month = y == py && m == pm && dd == pd + 1;
        let new_month = y == py && m == pm + 1 && dd == 1 && pd == days_in_month(py, pm);
        let new_year = y == py + 1 && m == 1 && dd == 1 && pm == 12 && pd == 31;
        assert!(same_month || new_month || new_year, "wrong successor {prev} -> {d}");
        assert_eq!(Date::from_ymd(y, m, dd).unwrap(), d);

        if d == Date::MAX {
            break;
        }
        prev = d;
        prev_wd = wd;
        d = d.add_days(1).unwrap();
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(1600));
    assert!(!is_leap_year(1700));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2100));
    assert!(is_leap_year(2400));
}

#[test]
fn march_31_plus_one_is_april_1() {
    assert_eq!(date(2024, 3, 31).add_days(1).unwrap(), date(2024, 4, 1));
}

#[test]
fn known_weekdays() {
    assert_eq!(date(2023, 4, 9).weekday(), Weekday::Sunday);
    assert_eq!(date(2023, 6, 24).weekday(), Weekday::Saturday);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
}

#[test]
fn midsummer_window() {
    // The Saturday at-or-after June 20 always lands in June 20..=26.
    for year in 1583..=2600 {
        let d = find_closest_weekday(date(year, 6, 20), Weekday::Saturday, Direction::After)
            .unwrap();
        assert_eq!(d.month(), 6);
        assert!((20..=26).contains(&d.day_of_month()), "{d}");
    }
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn iso_string_roundtrip(d in any_date()) {
        let s = d.to_string();
        prop_assert_eq!(s.len(), 10);
        prop_assert_eq!(s.parse::<Date>().unwrap(), d);
    }

    #[test]
    fn closest_weekday_is_idempotent(d in any_date(), dir in any_direction()) {
        prop_assert_eq!(find_closest_weekday(d, d.weekday(), dir).unwrap(), d);
    }

    #[test]
    fn closest_weekday_within_a_week(
        d in any_date(),
        target in any_weekday(),
        dir in any_direction(),
    ) {
        if let Ok(found) = find_closest_weekday(d, target, dir) {
            prop_assert_eq!(found.weekday(), target);
            let offset = (found - d) * dir.sign();
            prop_assert!((0..7).contains(&offset));
        }
    }

    #[test]
    fn move_by_weeks_roundtrip(d in any_date(), n in -60_000i32..60_000, dir in any_direction()) {
        let reverse = match dir {
            Direction::Before => Direction::After,
            Direction::After => Direction::Before,
        };
        if let Ok(moved) = move_by_weeks(d, n, dir) {
            prop_assert_eq!(moved - d, 7 * n * dir.sign());
            prop_assert_eq!(move_by_weeks(moved, n, reverse).unwrap(), d);
        }
    }

    #[test]
    fn nth_weekday_after_lands_on_weekday(
        d in (Date::MIN.serial()..=Date::MAX.serial() - 400)
            .prop_map(|s| Date::from_serial(s).unwrap()),
        target in any_weekday(),
        nth in 0u32..50,
    ) {
        let found = find_nth_weekday_after(d, target, nth).unwrap();
        prop_assert_eq!(found.weekday(), target);
        let offset = found - d;
        prop_assert!(offset >= 7 * nth as i32 && offset < 7 * (nth as i32 + 1));
    }
}
