//! Holidays and the holiday calendar.
//!
//! A [`Holiday`] is one record from the organization's holiday feed.  Several
//! records may share a day (overlapping regional holidays), so lookups return
//! every match rather than a flag.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::date::{days_in_month, CalendarDay};
use crate::working_days::WorkingDays;

/// A named non-working day.
///
/// The serde impls read dates through [`CalendarDay::parse`], so offset
/// timestamps land on their UTC date.  Wire payloads meant for a local
/// calendar go through `lc_leave::Snapshot::from_json`, which applies the
/// configured offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// The calendar day (time-of-day already discarded).
    pub date: CalendarDay,
    /// Display name.
    pub name: String,
    /// Repeats every year on the same month and day.
    #[serde(default)]
    pub recurring: bool,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Holiday {
    /// A one-off holiday.
    pub fn new(date: CalendarDay, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            recurring: false,
            description: None,
        }
    }

    /// Mark the holiday as repeating every year.
    pub fn recurring(mut self) -> Self {
        self.recurring = true;
        self
    }

    /// The day this holiday falls on in `year`, if any.
    ///
    /// Recurring holidays repeat from their first year onwards; a February 29
    /// holiday falls on February 28 in non-leap years.
    pub fn occurrence_in(&self, year: u16) -> Option<CalendarDay> {
        if !self.recurring {
            return (self.date.year() == year).then_some(self.date);
        }
        if year < self.date.year() {
            return None;
        }
        let month = self.date.month();
        let day = self.date.day_of_month().min(days_in_month(year, month));
        CalendarDay::from_ymd(year, month, day).ok()
    }
}

/// Every holiday in `all` whose date is `day`, in input order.
///
/// Never fails; an empty slice yields an empty list.
pub fn holidays_for_day(all: &[Holiday], day: CalendarDay) -> Vec<&Holiday> {
    all.iter().filter(|h| h.date == day).collect()
}

/// A holiday list indexed by day, combined with the working week.
///
/// The index is built once so that rendering a month grid does not rescan the
/// whole list for each cell.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    name: String,
    holidays: Vec<Holiday>,
    by_day: HashMap<CalendarDay, Vec<usize>>,
    working_days: WorkingDays,
}

impl HolidayCalendar {
    /// Create a calendar over `holidays` with a Monday–Friday working week.
    pub fn new(name: impl Into<String>, holidays: Vec<Holiday>) -> Self {
        let mut cal = Self {
            name: name.into(),
            holidays: Vec::with_capacity(holidays.len()),
            by_day: HashMap::new(),
            working_days: WorkingDays::default(),
        };
        for h in holidays {
            cal.add_holiday(h);
        }
        cal
    }

    /// Replace the working week.
    pub fn with_working_days(mut self, working_days: WorkingDays) -> Self {
        self.working_days = working_days;
        self
    }

    /// Add a holiday at the end of the list.
    pub fn add_holiday(&mut self, holiday: Holiday) {
        self.by_day
            .entry(holiday.date)
            .or_default()
            .push(self.holidays.len());
        self.holidays.push(holiday);
    }

    /// All holidays in insertion order.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// The configured working week.
    pub fn working_days(&self) -> WorkingDays {
        self.working_days
    }

    /// Holidays falling on `day`, in insertion order.
    pub fn holidays_on(&self, day: CalendarDay) -> Vec<&Holiday> {
        self.by_day
            .get(&day)
            .map(|idx| idx.iter().map(|&i| &self.holidays[i]).collect())
            .unwrap_or_default()
    }

    /// Number of holidays falling on `day`.
    pub fn holiday_count_on(&self, day: CalendarDay) -> usize {
        self.by_day.get(&day).map_or(0, Vec::len)
    }

    /// Return `true` if at least one holiday falls on `day`.
    pub fn has_holiday(&self, day: CalendarDay) -> bool {
        self.by_day.contains_key(&day)
    }

    /// Holidays occurring in `year`, with recurring ones moved onto that
    /// year, sorted by day (ties keep insertion order).
    pub fn for_year(&self, year: u16) -> Vec<Holiday> {
        let mut out: Vec<Holiday> = self
            .holidays
            .iter()
            .filter_map(|h| {
                h.occurrence_in(year).map(|date| Holiday {
                    date,
                    ..h.clone()
                })
            })
            .collect();
        out.sort_by_key(|h| h.date);
        out
    }

    /// Display name of the calendar.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of holiday records.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if there are no holiday records.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl FromIterator<Holiday> for HolidayCalendar {
    fn from_iter<T: IntoIterator<Item = Holiday>>(iter: T) -> Self {
        HolidayCalendar::new("Holidays", iter.into_iter().collect())
    }
}
