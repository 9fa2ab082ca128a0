//! `WorkCalendar` trait — which days people are expected to work.

use crate::date::CalendarDay;
use crate::date_range::DateRange;
use crate::holiday::HolidayCalendar;
use crate::working_days::WorkingDays;

/// A working-time calendar.
pub trait WorkCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `day` is a working day.
    fn is_working_day(&self, day: CalendarDay) -> bool;

    /// Return `true` if `day` is not a working day.
    fn is_day_off(&self, day: CalendarDay) -> bool {
        !self.is_working_day(day)
    }

    /// First working day on or after `day`, if one exists before the end of
    /// the supported range.
    fn next_working_day(&self, mut day: CalendarDay) -> Option<CalendarDay> {
        for _ in 0..366 {
            if self.is_working_day(day) {
                return Some(day);
            }
            day = day.succ()?;
        }
        None
    }

    /// Last working day on or before `day`.
    fn previous_working_day(&self, mut day: CalendarDay) -> Option<CalendarDay> {
        for _ in 0..366 {
            if self.is_working_day(day) {
                return Some(day);
            }
            day = day.pred()?;
        }
        None
    }

    /// Count working days in `range`, both endpoints included.
    fn working_days_in(&self, range: DateRange) -> usize {
        range.days().filter(|d| self.is_working_day(*d)).count()
    }
}

impl WorkCalendar for WorkingDays {
    fn name(&self) -> &str {
        "Working week"
    }

    fn is_working_day(&self, day: CalendarDay) -> bool {
        self.is_working(day)
    }
}

/// A working day falls on a working weekday and has no holiday.
impl WorkCalendar for HolidayCalendar {
    fn name(&self) -> &str {
        HolidayCalendar::name(self)
    }

    fn is_working_day(&self, day: CalendarDay) -> bool {
        self.working_days().is_working(day) && !self.has_holiday(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::Holiday;

    fn day(y: u16, m: u8, d: u8) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_are_days_off() {
        let week = WorkingDays::monday_to_friday();
        assert!(week.is_day_off(day(2024, 3, 2)));
        assert!(week.is_working_day(day(2024, 3, 4)));
    }

    #[test]
    fn holidays_are_days_off() {
        let cal = HolidayCalendar::new(
            "Office",
            vec![Holiday::new(day(2024, 12, 25), "Christmas")],
        );
        assert!(cal.is_day_off(day(2024, 12, 25)));
        assert!(cal.is_working_day(day(2024, 12, 24)));
    }

    #[test]
    fn next_and_previous() {
        let week = WorkingDays::monday_to_friday();
        // Saturday → Monday / Friday
        assert_eq!(week.next_working_day(day(2024, 3, 2)), Some(day(2024, 3, 4)));
        assert_eq!(week.previous_working_day(day(2024, 3, 2)), Some(day(2024, 3, 1)));
        assert_eq!(WorkingDays::empty().next_working_day(day(2024, 3, 2)), None);
    }

    #[test]
    fn counts_working_days_inclusive() {
        let week = WorkingDays::monday_to_friday();
        // Fri 1 Mar .. Tue 5 Mar: Fri, Mon, Tue
        let r = DateRange::new(day(2024, 3, 1), day(2024, 3, 5));
        assert_eq!(week.working_days_in(r), 3);
    }
}
