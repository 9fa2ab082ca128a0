//! The range-picker selection state machine.
//!
//! ```text
//! Empty ──click(d)──▶ Partial{d}
//! Partial{s} ──click(d)──▶ Complete[min(s,d), max(s,d)]
//! Complete ──click(d)──▶ Partial{d}
//! ```

use lc_time::{CalendarDay, DateRange};

/// Current state of a range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// Nothing picked yet.
    #[default]
    Empty,
    /// Start picked, waiting for the end.
    Partial {
        /// The first clicked day.
        start: CalendarDay,
    },
    /// Both endpoints picked, normalized so that start <= end.
    Complete(DateRange),
}

impl Selection {
    /// State after clicking `day`.
    pub fn advance(self, day: CalendarDay) -> Selection {
        match self {
            Selection::Empty | Selection::Complete(_) => Selection::Partial { start: day },
            Selection::Partial { start } => Selection::Complete(DateRange::new(start, day)),
        }
    }

    /// Start day, if one is set.
    pub fn start(&self) -> Option<CalendarDay> {
        match self {
            Selection::Empty => None,
            Selection::Partial { start } => Some(*start),
            Selection::Complete(r) => Some(r.start()),
        }
    }

    /// End day, only once the selection is complete.
    pub fn end(&self) -> Option<CalendarDay> {
        match self {
            Selection::Complete(r) => Some(r.end()),
            _ => None,
        }
    }

    /// Days currently highlighted: the start alone while partial.
    pub fn range(&self) -> Option<DateRange> {
        match self {
            Selection::Empty => None,
            Selection::Partial { start } => Some(DateRange::single(*start)),
            Selection::Complete(r) => Some(*r),
        }
    }

    /// The range, only once both endpoints are set.
    pub fn complete_range(&self) -> Option<DateRange> {
        match self {
            Selection::Complete(r) => Some(*r),
            _ => None,
        }
    }
}

impl From<DateRange> for Selection {
    fn from(range: DateRange) -> Self {
        Selection::Complete(range)
    }
}

/// Owns a [`Selection`] and advances it on clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    /// A controller in the `Empty` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on `day` and return the new state.
    pub fn click(&mut self, day: CalendarDay) -> Selection {
        let next = self.state.advance(day);
        tracing::debug!(%day, from = ?self.state, to = ?next, "selection click");
        self.state = next;
        next
    }

    /// Replace the selection with a complete range (single-date pickers,
    /// form pre-fill).
    pub fn select(&mut self, range: DateRange) {
        tracing::debug!(start = %range.start(), end = %range.end(), "selection set");
        self.state = Selection::Complete(range);
    }

    /// Back to `Empty`.
    pub fn reset(&mut self) {
        if self.state != Selection::Empty {
            tracing::debug!(from = ?self.state, "selection reset");
        }
        self.state = Selection::Empty;
    }

    /// Current state.
    pub fn selection(&self) -> Selection {
        self.state
    }

    /// See [`Selection::range`].
    pub fn range(&self) -> Option<DateRange> {
        self.state.range()
    }

    /// See [`Selection::complete_range`].
    pub fn complete_range(&self) -> Option<DateRange> {
        self.state.complete_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: u16, m: u8, d: u8) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_partial_complete_restart() {
        let mut ctl = SelectionController::new();
        assert_eq!(ctl.selection(), Selection::Empty);

        let s = ctl.click(day(2024, 3, 5));
        assert_eq!(s, Selection::Partial { start: day(2024, 3, 5) });
        assert_eq!(ctl.complete_range(), None);

        let s = ctl.click(day(2024, 3, 1));
        assert_eq!(
            s,
            Selection::Complete(DateRange::new(day(2024, 3, 1), day(2024, 3, 5)))
        );
        assert_eq!(s.start(), Some(day(2024, 3, 1)));
        assert_eq!(s.end(), Some(day(2024, 3, 5)));

        let s = ctl.click(day(2024, 4, 1));
        assert_eq!(s, Selection::Partial { start: day(2024, 4, 1) });
    }

    #[test]
    fn same_day_twice_is_single_day_range() {
        let mut ctl = SelectionController::new();
        ctl.click(day(2024, 3, 1));
        ctl.click(day(2024, 3, 1));
        let r = ctl.complete_range().unwrap();
        assert!(r.is_single_day());
    }

    #[test]
    fn partial_range_is_start_only() {
        let mut ctl = SelectionController::new();
        ctl.click(day(2024, 3, 1));
        assert_eq!(ctl.range(), Some(DateRange::single(day(2024, 3, 1))));
    }

    #[test]
    fn reset_and_select() {
        let mut ctl = SelectionController::new();
        ctl.select(DateRange::single(day(2024, 3, 1)));
        assert!(ctl.complete_range().is_some());
        ctl.reset();
        assert_eq!(ctl.selection(), Selection::Empty);
        assert_eq!(ctl.range(), None);
    }
}
