//! # lc-time
//!
//! Calendar-day, weekday, month, working-week, date-range and holiday types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarDay` type and wire-date normalization.
pub mod date;

/// `DateRange` — an inclusive span of days.
pub mod date_range;

/// `Holiday` records and the indexed `HolidayCalendar`.
pub mod holiday;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

/// `WorkCalendar` trait.
pub mod work_calendar;

/// `WorkingDays` — the organization's working weekdays.
pub mod working_days;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::CalendarDay;
pub use date_range::DateRange;
pub use holiday::{holidays_for_day, Holiday, HolidayCalendar};
pub use month::Month;
pub use weekday::Weekday;
pub use work_calendar::WorkCalendar;
pub use working_days::WorkingDays;
