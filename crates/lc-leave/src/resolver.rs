//! Day-state resolution.
//!
//! [`classify_day`] maps one calendar day to its [`ClassSet`] using the
//! precedence in [`DayClass::PRECEDENCE`]:
//!
//! 1. holidays (`holiday`, plus `holiday-multiple` when two or more coincide);
//! 2. the leave request covering the day (one of the three leave states);
//! 3. in range-picker mode, selection membership (`range-single`,
//!    `range-start`, `range-end` or `in-range`) and `non-working-in-range`.
//!
//! Everything here is total: missing collections behave as empty ones.

use lc_time::{CalendarDay, DateRange, Holiday, HolidayCalendar, WorkingDays};

pub use crate::leave::leave_request_for_day;
pub use lc_time::holidays_for_day;

use crate::day_class::{ClassSet, DayClass};
use crate::leave::{LeaveRequest, LeaveState};
use crate::selection::Selection;

/// Classify `day`.
///
/// `holidays` may be the day's holidays or the full list; only entries dated
/// `day` count.  Likewise `leave` only applies if it covers `day`.  An empty
/// `working_days` set means the working week is not configured and no
/// `non-working-in-range` tag is produced.
///
/// A missing holiday list is passed the same way as the other optional
/// inputs by flattening it:
///
/// ```
/// use lc_leave::{classify_day, Selection};
/// use lc_time::{CalendarDay, Holiday};
///
/// let day = CalendarDay::from_ymd(2024, 12, 25).unwrap();
/// let holidays: Option<&[Holiday]> = None;
/// let classes = classify_day(day, holidays.into_iter().flatten(), None, Selection::Empty, None, true);
/// assert!(classes.is_empty());
/// ```
pub fn classify_day<'a, I>(
    day: CalendarDay,
    holidays: I,
    leave: Option<&LeaveRequest>,
    selection: Selection,
    working_days: Option<&WorkingDays>,
    range_picker: bool,
) -> ClassSet
where
    I: IntoIterator<Item = &'a Holiday>,
{
    let count = holidays.into_iter().filter(|h| h.date == day).count();
    let mut classes = ClassSet::new();
    add_holiday_classes(&mut classes, count);
    add_leave_class(&mut classes, leave.filter(|r| r.covers(day)));
    if range_picker {
        add_range_classes(&mut classes, day, selection, working_days);
    }
    classes
}

fn add_holiday_classes(classes: &mut ClassSet, count: usize) {
    if count >= 1 {
        classes.insert(DayClass::Holiday);
    }
    if count >= 2 {
        classes.insert(DayClass::HolidayMultiple);
    }
}

fn add_leave_class(classes: &mut ClassSet, leave: Option<&LeaveRequest>) {
    if let Some(request) = leave {
        classes.insert(match request.leave_state {
            LeaveState::FullDay => DayClass::LeaveFullDay,
            LeaveState::MorningHalf => DayClass::LeaveMorningHalf,
            LeaveState::EveningHalf => DayClass::LeaveEveningHalf,
        });
    }
}

fn add_range_classes(
    classes: &mut ClassSet,
    day: CalendarDay,
    selection: Selection,
    working_days: Option<&WorkingDays>,
) {
    let range = match selection {
        Selection::Empty => return,
        Selection::Partial { start } => {
            if day == start {
                classes.insert(DayClass::RangeStart);
                tag_non_working(classes, day, working_days);
            }
            return;
        }
        Selection::Complete(range) => range,
    };
    if !range.contains(day) {
        return;
    }
    let membership = if range.is_single_day() {
        DayClass::RangeSingle
    } else if day == range.start() {
        DayClass::RangeStart
    } else if day == range.end() {
        DayClass::RangeEnd
    } else {
        DayClass::InRange
    };
    classes.insert(membership);
    tag_non_working(classes, day, working_days);
}

fn tag_non_working(classes: &mut ClassSet, day: CalendarDay, working_days: Option<&WorkingDays>) {
    if let Some(week) = working_days.filter(|w| !w.is_empty()) {
        if !week.is_working(day) {
            classes.insert(DayClass::NonWorkingInRange);
        }
    }
}

/// Borrowed views of one data snapshot.  Any field may be absent, e.g. when
/// the fetch that supplies it failed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DaySources<'a> {
    /// Indexed holidays.
    pub holidays: Option<&'a HolidayCalendar>,
    /// The subject's own leave requests.
    pub leave_requests: Option<&'a [LeaveRequest]>,
    /// Organization working week.
    pub working_days: Option<&'a WorkingDays>,
}

impl<'a> DaySources<'a> {
    /// Sources with nothing loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach holidays.
    pub fn with_holidays(mut self, holidays: &'a HolidayCalendar) -> Self {
        self.holidays = Some(holidays);
        self
    }

    /// Attach leave requests.
    pub fn with_leave_requests(mut self, requests: &'a [LeaveRequest]) -> Self {
        self.leave_requests = Some(requests);
        self
    }

    /// Attach the working week.
    pub fn with_working_days(mut self, working_days: &'a WorkingDays) -> Self {
        self.working_days = Some(working_days);
        self
    }

    /// A resolver over these sources.
    pub fn resolver(self, selection: Selection, range_picker: bool) -> DayStateResolver<'a> {
        DayStateResolver {
            sources: self,
            selection,
            range_picker,
        }
    }
}

/// Classifies days against a fixed [`DaySources`] snapshot and selection.
///
/// Cheap to build; rebuild it whenever the selection or data changes.
#[derive(Debug, Clone, Copy)]
pub struct DayStateResolver<'a> {
    sources: DaySources<'a>,
    selection: Selection,
    range_picker: bool,
}

impl<'a> DayStateResolver<'a> {
    /// Holidays on `day`, in feed order.
    pub fn holidays_on(&self, day: CalendarDay) -> Vec<&'a Holiday> {
        self.sources
            .holidays
            .map(|cal| cal.holidays_on(day))
            .unwrap_or_default()
    }

    /// The leave request covering `day`, if any.
    pub fn leave_on(&self, day: CalendarDay) -> Option<&'a LeaveRequest> {
        leave_request_for_day(self.sources.leave_requests.unwrap_or_default(), day)
    }

    /// Classes for `day`.
    pub fn classify(&self, day: CalendarDay) -> ClassSet {
        classify_day(
            day,
            self.holidays_on(day),
            self.leave_on(day),
            self.selection,
            self.sources.working_days,
            self.range_picker,
        )
    }

    /// Classes for every day of `range`, in order.
    pub fn classify_range(&self, range: DateRange) -> Vec<(CalendarDay, ClassSet)> {
        range.days().map(|d| (d, self.classify(d))).collect()
    }

    /// The selection this resolver was built with.
    pub fn selection(&self) -> Selection {
        self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: u16, m: u8, d: u8) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    fn range(a: CalendarDay, b: CalendarDay) -> Selection {
        Selection::Complete(DateRange::new(a, b))
    }

    #[test]
    fn nothing_applies() {
        let classes = classify_day(
            day(2024, 5, 5),
            std::iter::empty(),
            None,
            Selection::Empty,
            None,
            true,
        );
        assert!(classes.is_empty());
    }

    #[test]
    fn missing_holiday_list_matches_empty_list() {
        let listed = vec![Holiday::new(day(2024, 12, 25), "Christmas")];
        let loaded: Option<&[Holiday]> = Some(&listed);
        let missing: Option<&[Holiday]> = None;
        let selection = range(day(2024, 12, 23), day(2024, 12, 27));

        let with = classify_day(day(2024, 12, 25), loaded.into_iter().flatten(), None, selection, None, true);
        assert!(with.contains(DayClass::Holiday));

        let without = classify_day(day(2024, 12, 25), missing.into_iter().flatten(), None, selection, None, true);
        assert_eq!(without.names(), vec!["in-range"]);
    }

    #[test]
    fn christmas_is_a_holiday() {
        let holidays = vec![Holiday::new(day(2024, 12, 25), "Christmas")];
        let classes = classify_day(
            day(2024, 12, 25),
            &holidays,
            None,
            Selection::Empty,
            None,
            false,
        );
        assert_eq!(classes.names(), vec!["holiday"]);
    }

    #[test]
    fn coinciding_holidays_add_merged_variant() {
        let holidays = vec![
            Holiday::new(day(2024, 4, 10), "Eid al-Fitr"),
            Holiday::new(day(2024, 4, 10), "Regional Day"),
        ];
        let classes = classify_day(day(2024, 4, 10), &holidays, None, Selection::Empty, None, false);
        assert_eq!(classes.to_class_string(), "holiday holiday-multiple");
    }

    #[test]
    fn holidays_on_other_days_are_ignored() {
        let holidays = vec![Holiday::new(day(2024, 12, 26), "Boxing Day")];
        let classes = classify_day(day(2024, 12, 25), &holidays, None, Selection::Empty, None, false);
        assert!(classes.is_empty());
    }

    #[test]
    fn morning_half_leave() {
        let leave = LeaveRequest::new(day(2024, 7, 8), day(2024, 7, 12), LeaveState::MorningHalf);
        let classes = classify_day(
            day(2024, 7, 10),
            std::iter::empty(),
            Some(&leave),
            Selection::Empty,
            None,
            false,
        );
        assert!(classes.contains(DayClass::LeaveMorningHalf));
        assert!(!classes.contains(DayClass::LeaveFullDay));
    }

    #[test]
    fn leave_outside_its_range_is_ignored() {
        let leave = LeaveRequest::new(day(2024, 7, 8), day(2024, 7, 12), LeaveState::FullDay);
        let classes = classify_day(
            day(2024, 7, 13),
            std::iter::empty(),
            Some(&leave),
            Selection::Empty,
            None,
            false,
        );
        assert!(classes.is_empty());
    }

    #[test]
    fn single_day_range_uses_single_class() {
        let d = day(2024, 3, 1);
        let classes = classify_day(d, std::iter::empty(), None, range(d, d), None, true);
        assert!(classes.contains(DayClass::RangeSingle));
        assert!(!classes.contains(DayClass::RangeStart));
        assert!(!classes.contains(DayClass::RangeEnd));
    }

    #[test]
    fn weekend_inside_range_is_tagged() {
        let week = WorkingDays::monday_to_friday();
        let sel = range(day(2024, 3, 1), day(2024, 3, 5));
        let sat = classify_day(day(2024, 3, 2), std::iter::empty(), None, sel, Some(&week), true);
        assert_eq!(sat.to_class_string(), "in-range non-working-in-range");

        let mon = classify_day(day(2024, 3, 4), std::iter::empty(), None, sel, Some(&week), true);
        assert_eq!(mon.to_class_string(), "in-range");

        let start = classify_day(day(2024, 3, 1), std::iter::empty(), None, sel, Some(&week), true);
        assert_eq!(start.to_class_string(), "range-start");
        let end = classify_day(day(2024, 3, 5), std::iter::empty(), None, sel, Some(&week), true);
        assert_eq!(end.to_class_string(), "range-end");
    }

    #[test]
    fn unconfigured_working_week_tags_nothing() {
        let sel = range(day(2024, 3, 1), day(2024, 3, 5));
        let empty = WorkingDays::empty();
        for week in [None, Some(&empty)] {
            let sat = classify_day(day(2024, 3, 2), std::iter::empty(), None, sel, week, true);
            assert_eq!(sat.names(), vec!["in-range"]);
        }
    }

    #[test]
    fn range_classes_need_range_picker() {
        let sel = range(day(2024, 3, 1), day(2024, 3, 5));
        let classes = classify_day(day(2024, 3, 3), std::iter::empty(), None, sel, None, false);
        assert!(classes.is_empty());
    }

    #[test]
    fn partial_selection_marks_start() {
        let sel = Selection::Partial { start: day(2024, 3, 1) };
        let start = classify_day(day(2024, 3, 1), std::iter::empty(), None, sel, None, true);
        assert_eq!(start.names(), vec!["range-start"]);
        let other = classify_day(day(2024, 3, 2), std::iter::empty(), None, sel, None, true);
        assert!(other.is_empty());
    }

    #[test]
    fn overlays_combine() {
        let holidays = vec![Holiday::new(day(2024, 3, 4), "Founders Day")];
        let leave = LeaveRequest::new(day(2024, 3, 4), day(2024, 3, 4), LeaveState::EveningHalf);
        let sel = range(day(2024, 3, 1), day(2024, 3, 5));
        let classes = classify_day(day(2024, 3, 4), &holidays, Some(&leave), sel, None, true);
        assert_eq!(classes.to_class_string(), "holiday leave-evening-half in-range");
    }

    #[test]
    fn resolver_tolerates_missing_sources() {
        let r = DaySources::empty().resolver(Selection::Empty, true);
        assert!(r.classify(day(2024, 12, 25)).is_empty());
        assert!(r.holidays_on(day(2024, 12, 25)).is_empty());
        assert!(r.leave_on(day(2024, 12, 25)).is_none());
    }

    #[test]
    fn resolver_uses_all_sources() {
        let cal = HolidayCalendar::new(
            "Office",
            vec![Holiday::new(day(2024, 3, 4), "Founders Day")],
        );
        let leaves = vec![LeaveRequest::new(day(2024, 3, 5), day(2024, 3, 6), LeaveState::FullDay)];
        let week = WorkingDays::monday_to_friday();
        let r = DaySources::empty()
            .with_holidays(&cal)
            .with_leave_requests(&leaves)
            .with_working_days(&week)
            .resolver(range(day(2024, 3, 2), day(2024, 3, 5)), true);

        let strings: Vec<String> = r
            .classify_range(DateRange::new(day(2024, 3, 1), day(2024, 3, 6)))
            .into_iter()
            .map(|(_, c)| c.to_class_string())
            .collect();
        assert_eq!(
            strings,
            vec![
                "",
                "range-start non-working-in-range",
                "in-range non-working-in-range",
                "holiday in-range",
                "leave-full-day range-end",
                "leave-full-day",
            ]
        );
    }
}
