//! # leavecal
//!
//! Calendar day-state resolution for leave, holiday and range-picker
//! overlays.
//!
//! This crate is a **façade** that re-exports the public items of the
//! `lc-*` workspace crates. Application code should depend on this crate
//! rather than on the individual crates.
//!
//! ## Quick start
//!
//! ```rust
//! use leavecal::prelude::*;
//!
//! let settings = Settings::default();
//! let snapshot = Snapshot::from_json(
//!     r#"[{"date": "2024-12-25", "name": "Christmas"}]"#,
//!     "[]",
//!     &settings,
//! )
//! .unwrap();
//!
//! let today = CalendarDay::parse("2024-12-10").unwrap();
//! let mut view = CalendarView::from_settings(today, PickerMode::Range, &settings);
//! view.click(CalendarDay::parse("2024-12-27").unwrap());
//! view.click(CalendarDay::parse("2024-12-23").unwrap());
//!
//! let resolver = view.resolver(snapshot.sources());
//! let xmas = CalendarDay::parse("2024-12-25").unwrap();
//! assert_eq!(resolver.classify(xmas).to_class_string(), "holiday in-range");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and parsing helpers.
pub use lc_core as core;

/// Calendar day, weekday, working week, date range and holiday types.
pub use lc_time as time;

/// Leave requests, classification, selection and view state.
pub use lc_leave as leave;

/// The types most callers need.
pub mod prelude {
    pub use lc_core::{Error, Result};
    pub use lc_leave::{
        classify_day, holidays_for_day, leave_request_for_day, CalendarView, ClassSet, DayCell,
        DayClass, DaySources, DayStateResolver, LeaveRequest, LeaveState, LeaveStatus, PickerMode,
        Selection, SelectionController, Settings, Snapshot,
    };
    pub use lc_time::{
        CalendarDay, DateRange, Holiday, HolidayCalendar, Month, Weekday, WorkCalendar,
        WorkingDays,
    };
}
