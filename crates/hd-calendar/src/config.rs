//! Which holidays a build includes.

use std::collections::BTreeSet;

use crate::holiday::Holiday;

/// The inclusion set for a holiday build.
///
/// Sources disagree on which days belong in a "Swedish holidays" list: the
/// law names thirteen, and calendars commonly add Christmas Eve, New Year's
/// Eve and Midsummer Eve.  Pick a preset and adjust it with the builder
/// methods.
///
/// # Example
///
/// ```
/// use hd_calendar::{Holiday, HolidayConfig};
///
/// let config = HolidayConfig::statutory().without(Holiday::LabourDay);
///
/// assert!(config.includes(Holiday::EasterSunday));
/// assert!(!config.includes(Holiday::LabourDay));
/// assert!(!config.includes(Holiday::MidsummerEve));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayConfig {
    /// Holidays to include.
    included: BTreeSet<Holiday>,
}

impl HolidayConfig {
    /// All sixteen holidays, customs included.
    pub fn full() -> Self {
        Self {
            included: Holiday::ALL.into_iter().collect(),
        }
    }

    /// Only the public holidays named in law.
    pub fn statutory() -> Self {
        Self {
            included: Holiday::ALL.into_iter().filter(Holiday::is_statutory).collect(),
        }
    }

    /// No holidays at all; build up with [`HolidayConfig::with`].
    pub fn empty() -> Self {
        Self {
            included: BTreeSet::new(),
        }
    }

    /// Adds `holiday` to the inclusion set.
    pub fn with(mut self, holiday: Holiday) -> Self {
        self.included.insert(holiday);
        self
    }

    /// Removes `holiday` from the inclusion set.
    pub fn without(mut self, holiday: Holiday) -> Self {
        self.included.remove(&holiday);
        self
    }

    /// Whether `holiday` is part of the inclusion set.
    pub fn includes(&self, holiday: Holiday) -> bool {
        self.included.contains(&holiday)
    }

    /// Included holidays, in build order.
    pub fn holidays(&self) -> impl Iterator<Item = Holiday> + '_ {
        self.included.iter().copied()
    }
}

impl Default for HolidayConfig {
    /// [`HolidayConfig::full`].
    fn default() -> Self {
        Self::full()
    }
}

impl FromIterator<Holiday> for HolidayConfig {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        Self {
            included: iter.into_iter().collect(),
        }
    }
}
