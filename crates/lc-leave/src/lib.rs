//! # lc-leave
//!
//! Leave requests, day-state classification, the range-picker selection
//! state machine, calendar view state, settings and snapshot loading.
//!
//! ```
//! use lc_leave::{classify_day, Selection};
//! use lc_time::{CalendarDay, Holiday};
//!
//! let xmas = CalendarDay::parse("2024-12-25").unwrap();
//! let holidays = vec![Holiday::new(xmas, "Christmas")];
//! let classes = classify_day(xmas, &holidays, None, Selection::Empty, None, false);
//! assert_eq!(classes.to_class_string(), "holiday");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `DayClass` precedence table and `ClassSet`.
pub mod day_class;

/// `LeaveRequest` and the per-day leave lookup.
pub mod leave;

/// `classify_day`, `DaySources` and `DayStateResolver`.
pub mod resolver;

/// Range-picker selection state machine.
pub mod selection;

/// Organization settings.
pub mod settings;

/// JSON payload loading.
pub mod snapshot;

/// Month-grid view state.
pub mod view;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use day_class::{ClassSet, DayClass};
pub use leave::{leave_request_for_day, LeaveRequest, LeaveState, LeaveStatus};
pub use resolver::{classify_day, holidays_for_day, DaySources, DayStateResolver};
pub use selection::{Selection, SelectionController};
pub use settings::Settings;
pub use snapshot::Snapshot;
pub use view::{CalendarView, DayCell, PickerMode, GRID_DAYS};
