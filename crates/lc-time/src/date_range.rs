//! `DateRange` — an inclusive span of calendar days.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDay;

/// An inclusive `[start, end]` span with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRange")]
pub struct DateRange {
    start: CalendarDay,
    end: CalendarDay,
}

#[derive(Deserialize)]
struct RawRange {
    start: CalendarDay,
    end: CalendarDay,
}

impl From<RawRange> for DateRange {
    fn from(raw: RawRange) -> Self {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Build a range from two endpoints in either order.
    pub fn new(a: CalendarDay, b: CalendarDay) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A one-day range.
    pub fn single(day: CalendarDay) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// First day.
    pub fn start(&self) -> CalendarDay {
        self.start
    }

    /// Last day.
    pub fn end(&self) -> CalendarDay {
        self.end
    }

    /// Return `true` if `day` lies within the range, endpoints included.
    pub fn contains(&self, day: CalendarDay) -> bool {
        self.start <= day && day <= self.end
    }

    /// Return `true` if `day` lies strictly between the endpoints.
    pub fn contains_strictly(&self, day: CalendarDay) -> bool {
        self.start < day && day < self.end
    }

    /// Return `true` if start and end are the same day.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        (self.start.days_until(self.end) + 1) as usize
    }

    /// Always `false`: a range covers at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate every day of the range in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDay> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |d| d.succ().filter(|n| *n <= end))
    }
}
