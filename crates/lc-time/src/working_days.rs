//! `WorkingDays` — the organization's working weekdays.
//!
//! Stored as a seven-bit set, one bit per [`Weekday`].  On the wire it is an
//! array of weekday names, e.g. `["MONDAY", "TUESDAY"]`.

use lc_core::errors::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::CalendarDay;
use crate::weekday::Weekday;

/// A set of weekdays considered working days.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkingDays(u8);

fn bit(w: Weekday) -> u8 {
    1 << (w.ordinal() - 1)
}

impl WorkingDays {
    /// No working days; treated as "not configured" by the resolver.
    pub const fn empty() -> Self {
        WorkingDays(0)
    }

    /// Monday through Friday.
    pub const fn monday_to_friday() -> Self {
        WorkingDays(0b001_1111)
    }

    /// Build from weekday names (`"MONDAY"`, `"mon"`, …).
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|n| n.as_ref().parse::<Weekday>())
            .collect()
    }

    /// Add a weekday.
    pub fn insert(&mut self, w: Weekday) {
        self.0 |= bit(w);
    }

    /// Remove a weekday.
    pub fn remove(&mut self, w: Weekday) {
        self.0 &= !bit(w);
    }

    /// Return `true` if `w` is a working weekday.
    pub fn contains(&self, w: Weekday) -> bool {
        self.0 & bit(w) != 0
    }

    /// Return `true` if `day` falls on a working weekday.
    pub fn is_working(&self, day: CalendarDay) -> bool {
        self.contains(day.weekday())
    }

    /// Return `true` if no weekday is set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of working weekdays.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the working weekdays, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|w| self.contains(*w))
    }
}

/// Monday through Friday.
impl Default for WorkingDays {
    fn default() -> Self {
        Self::monday_to_friday()
    }
}

impl FromIterator<Weekday> for WorkingDays {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        let mut set = WorkingDays::empty();
        for w in iter {
            set.insert(w);
        }
        set
    }
}

impl std::fmt::Debug for WorkingDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for WorkingDays {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for WorkingDays {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let days = Vec::<Weekday>::deserialize(deserializer)?;
        Ok(days.into_iter().collect())
    }
}
