//! `HolidayMap` — the holidays of one year, keyed by date.

use hd_core::errors::Result;
use hd_core::Year;
use hd_time::Date;
use indexmap::IndexMap;

use crate::holiday::Holiday;

/// Holidays of one year, keyed by date.
///
/// Each date carries exactly one holiday.  Iteration follows insertion
/// order; if a date is inserted twice the later holiday replaces the earlier
/// one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayMap {
    year: Year,
    entries: IndexMap<Date, Holiday>,
}

impl HolidayMap {
    /// An empty map for `year`.
    pub fn new(year: Year) -> Self {
        Self {
            year,
            entries: IndexMap::with_capacity(Holiday::ALL.len()),
        }
    }

    /// The year the map was built for.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Insert `holiday` on `date`, returning the holiday it replaced.
    pub fn insert(&mut self, date: Date, holiday: Holiday) -> Option<Holiday> {
        self.entries.insert(date, holiday)
    }

    /// The holiday on `date`, if any.
    pub fn get(&self, date: Date) -> Option<Holiday> {
        self.entries.get(&date).copied()
    }

    /// The holiday on the ISO date `iso` (`YYYY-MM-DD`), if any.
    ///
    /// # Errors
    /// Returns an error if `iso` is not a valid date.
    pub fn get_iso(&self, iso: &str) -> Result<Option<Holiday>> {
        Ok(self.get(iso.parse()?))
    }

    /// Whether `date` is in the map.
    pub fn contains(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    /// The date of `holiday`, if it is in the map.
    pub fn date_of(&self, holiday: Holiday) -> Option<Date> {
        self.entries
            .iter()
            .find_map(|(d, h)| (*h == holiday).then_some(*d))
    }

    /// Number of dates in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the map holds no dates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(date, holiday)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, Holiday)> + '_ {
        self.entries.iter().map(|(d, h)| (*d, *h))
    }

    /// Dates in chronological order.
    pub fn sorted_dates(&self) -> Vec<Date> {
        let mut dates: Vec<Date> = self.entries.keys().copied().collect();
        dates.sort_unstable();
        dates
    }

    /// The map as ISO date → Swedish name, in insertion order.
    pub fn to_name_map(&self) -> IndexMap<String, String> {
        self.entries
            .iter()
            .map(|(d, h)| (d.to_string(), h.swedish_name().to_owned()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a HolidayMap {
    type Item = (&'a Date, &'a Holiday);
    type IntoIter = indexmap::map::Iter<'a, Date, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl std::fmt::Display for HolidayMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for date in self.sorted_dates() {
            if let Some(h) = self.get(date) {
                writeln!(f, "{date}  {:<8}  {h}", date.weekday().swedish_name())?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HolidayMap {
    /// Serialized as an object of ISO date → Swedish name.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(d, h)| (d, h.swedish_name())))
    }
}
