//! `CalendarView` — the state behind one rendered month grid.
//!
//! The view owns everything the grid needs between renders: the visible
//! month, the first weekday column, the picker mode and the selection.  Data
//! snapshots are passed in per render as [`DaySources`].

use lc_core::ensure;
use lc_core::errors::Result;
use lc_time::{CalendarDay, DateRange, Month, Weekday};
use serde::Serialize;

use crate::day_class::ClassSet;
use crate::resolver::{DaySources, DayStateResolver};
use crate::selection::{Selection, SelectionController};
use crate::settings::Settings;

/// Days shown in a month grid: six weeks.
pub const GRID_DAYS: usize = 42;

/// Whether the picker selects one day or a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickerMode {
    /// One day per pick.
    #[default]
    Single,
    /// Start and end per pick.
    Range,
}

/// One rendered grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    /// The day shown.
    pub day: CalendarDay,
    /// `false` for leading/trailing days of neighbouring months.
    pub in_month: bool,
    /// `true` if the day is part of the current selection.
    pub selected: bool,
    /// Overlay classes.
    pub classes: ClassSet,
}

/// View state for a month calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    first_of_month: CalendarDay,
    week_start: Weekday,
    mode: PickerMode,
    selection: SelectionController,
}

impl CalendarView {
    /// A view showing the month containing `today`.
    pub fn new(today: CalendarDay, mode: PickerMode, week_start: Weekday) -> Self {
        Self {
            first_of_month: today.first_of_month(),
            week_start,
            mode,
            selection: SelectionController::new(),
        }
    }

    /// A view configured from organization settings.
    pub fn from_settings(today: CalendarDay, mode: PickerMode, settings: &Settings) -> Self {
        Self::new(today, mode, settings.week_starts_on)
    }

    /// First day of the visible month.
    pub fn first_of_month(&self) -> CalendarDay {
        self.first_of_month
    }

    /// Visible month.
    pub fn month(&self) -> Month {
        self.first_of_month.month_of_year()
    }

    /// Visible year.
    pub fn year(&self) -> u16 {
        self.first_of_month.year()
    }

    /// Picker mode.
    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.selection.selection()
    }

    /// Move to the next month.
    pub fn next_month(&mut self) -> Result<()> {
        self.first_of_month = self.first_of_month.add_months(1)?;
        tracing::debug!(month = %self.first_of_month, "calendar next month");
        Ok(())
    }

    /// Move to the previous month.
    pub fn previous_month(&mut self) -> Result<()> {
        self.first_of_month = self.first_of_month.add_months(-1)?;
        tracing::debug!(month = %self.first_of_month, "calendar previous month");
        Ok(())
    }

    /// Jump to the month containing `day`.
    pub fn show(&mut self, day: CalendarDay) {
        self.first_of_month = day.first_of_month();
    }

    /// Handle a click on `day`.
    ///
    /// In range mode this advances the selection state machine; in single
    /// mode the clicked day becomes a one-day selection.
    pub fn click(&mut self, day: CalendarDay) -> Selection {
        match self.mode {
            PickerMode::Range => self.selection.click(day),
            PickerMode::Single => {
                self.selection.select(DateRange::single(day));
                self.selection.selection()
            }
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.reset();
    }

    /// The six-week grid, starting on the configured week start.
    ///
    /// # Errors
    /// Fails with [`Error::Date`](lc_core::Error::Date) only when the grid
    /// would leave the supported date range: December 2199 always, and
    /// January 1901 unless the week starts on Tuesday.
    pub fn grid(&self) -> Result<Vec<CalendarDay>> {
        let lead = self
            .week_start
            .days_until(self.first_of_month.weekday());
        let first = self.first_of_month.add_days(-i32::from(lead))?;
        let last = first.add_days(GRID_DAYS as i32 - 1)?;
        let days: Vec<_> = DateRange::new(first, last).days().collect();
        ensure!(days.len() == GRID_DAYS, "incomplete grid starting {first}");
        Ok(days)
    }

    /// Resolver over `sources` using this view's selection and mode.
    pub fn resolver<'a>(&self, sources: DaySources<'a>) -> DayStateResolver<'a> {
        sources.resolver(self.selection(), self.mode == PickerMode::Range)
    }

    /// Render every grid cell against `sources`.
    pub fn cells(&self, sources: DaySources<'_>) -> Result<Vec<DayCell>> {
        let resolver = self.resolver(sources);
        let month = self.first_of_month.month();
        let selected = self.selection.range();
        Ok(self
            .grid()?
            .into_iter()
            .map(|day| DayCell {
                day,
                in_month: day.month() == month,
                selected: selected.is_some_and(|r| r.contains(day)),
                classes: resolver.classify(day),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_class::DayClass;
    use lc_time::{Holiday, HolidayCalendar};

    fn day(y: u16, m: u8, d: u8) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn grid_starts_on_week_start() {
        // March 2024 starts on a Friday.
        let view = CalendarView::new(day(2024, 3, 15), PickerMode::Range, Weekday::Monday);
        let grid = view.grid().unwrap();
        assert_eq!(grid.len(), GRID_DAYS);
        assert_eq!(grid[0], day(2024, 2, 26));
        assert_eq!(grid[4], day(2024, 3, 1));

        let sunday_first = CalendarView::new(day(2024, 3, 15), PickerMode::Range, Weekday::Sunday);
        assert_eq!(sunday_first.grid().unwrap()[0], day(2024, 2, 25));
    }

    #[test]
    fn month_starting_on_week_start_has_no_lead() {
        // September 2024 starts on a Sunday.
        let view = CalendarView::new(day(2024, 9, 1), PickerMode::Single, Weekday::Sunday);
        assert_eq!(view.grid().unwrap()[0], day(2024, 9, 1));
    }

    #[test]
    fn grids_at_the_supported_edges() {
        let first = CalendarView::new(CalendarDay::MIN, PickerMode::Single, Weekday::Monday);
        assert!(matches!(first.grid(), Err(lc_core::Error::Date(_))));
        let tuesday_first = CalendarView::new(CalendarDay::MIN, PickerMode::Single, Weekday::Tuesday);
        assert_eq!(tuesday_first.grid().unwrap()[0], CalendarDay::MIN);

        let last = CalendarView::new(CalendarDay::MAX, PickerMode::Single, Weekday::Monday);
        assert!(matches!(last.grid(), Err(lc_core::Error::Date(_))));
        let mut view = CalendarView::new(day(2199, 11, 1), PickerMode::Single, Weekday::Monday);
        assert!(view.grid().is_ok());
        view.next_month().unwrap();
        assert!(view.next_month().is_err());
    }

    #[test]
    fn navigation_wraps_years() {
        let mut view = CalendarView::new(day(2024, 12, 31), PickerMode::Single, Weekday::Monday);
        view.next_month().unwrap();
        assert_eq!((view.year(), view.month()), (2025, Month::January));
        view.previous_month().unwrap();
        view.previous_month().unwrap();
        assert_eq!((view.year(), view.month()), (2024, Month::November));
        view.show(day(2030, 6, 9));
        assert_eq!(view.first_of_month(), day(2030, 6, 1));
    }

    #[test]
    fn single_mode_click_selects_one_day() {
        let mut view = CalendarView::new(day(2024, 3, 1), PickerMode::Single, Weekday::Monday);
        view.click(day(2024, 3, 4));
        let s = view.click(day(2024, 3, 8));
        assert_eq!(s.complete_range(), Some(DateRange::single(day(2024, 3, 8))));
    }

    #[test]
    fn cells_carry_classes_and_selection() {
        let cal = HolidayCalendar::new("Office", vec![Holiday::new(day(2024, 3, 4), "Founders Day")]);
        let mut view = CalendarView::new(day(2024, 3, 1), PickerMode::Range, Weekday::Monday);
        view.click(day(2024, 3, 5));
        view.click(day(2024, 3, 4));

        let cells = view.cells(DaySources::empty().with_holidays(&cal)).unwrap();
        let mon = cells.iter().find(|c| c.day == day(2024, 3, 4)).unwrap();
        assert!(mon.in_month && mon.selected);
        assert!(mon.classes.contains(DayClass::Holiday));
        assert!(mon.classes.contains(DayClass::RangeStart));

        let feb = &cells[0];
        assert!(!feb.in_month && !feb.selected && feb.classes.is_empty());
    }
}
