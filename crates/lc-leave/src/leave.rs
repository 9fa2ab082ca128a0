//! Leave requests and the per-day leave lookup.

use lc_time::{CalendarDay, DateRange, WorkCalendar};
use serde::{Deserialize, Serialize};

/// Which part of a day a leave request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveState {
    /// The whole working day.
    FullDay,
    /// The morning half only.
    MorningHalf,
    /// The evening half only.
    EveningHalf,
}

impl LeaveState {
    /// Fraction of a working day consumed.
    pub fn day_fraction(self) -> f64 {
        match self {
            LeaveState::FullDay => 1.0,
            LeaveState::MorningHalf | LeaveState::EveningHalf => 0.5,
        }
    }

    /// Return `true` for either half-day state.
    pub fn is_half_day(self) -> bool {
        !matches!(self, LeaveState::FullDay)
    }
}

/// Workflow status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    /// Awaiting approval.
    Pending,
    /// Approved.
    Approved,
    /// Rejected by an approver.
    Rejected,
    /// Withdrawn by the requester.
    Cancelled,
    /// Any status this crate does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl LeaveStatus {
    /// Rejected and cancelled requests no longer take time off.
    pub fn is_inactive(self) -> bool {
        matches!(self, LeaveStatus::Rejected | LeaveStatus::Cancelled)
    }
}

/// One of the subject's own leave requests.
///
/// Deserializing directly normalizes offset timestamps to UTC; use
/// [`Snapshot::from_json`](crate::Snapshot::from_json) to apply the
/// configured local offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    /// First day of leave.
    pub start_date: CalendarDay,
    /// Last day of leave (inclusive).
    pub end_date: CalendarDay,
    /// Full or half day.
    pub leave_state: LeaveState,
    /// Workflow status.
    #[serde(default)]
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Create a request; endpoints may be given in either order.
    pub fn new(start: CalendarDay, end: CalendarDay, state: LeaveState) -> Self {
        Self {
            start_date: start,
            end_date: end,
            leave_state: state,
            status: LeaveStatus::default(),
        }
    }

    /// Set the workflow status.
    pub fn with_status(mut self, status: LeaveStatus) -> Self {
        self.status = status;
        self
    }

    /// The covered days, normalized so that start <= end.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Return `true` if `day` is inside the request, endpoints included.
    pub fn covers(&self, day: CalendarDay) -> bool {
        self.range().contains(day)
    }

    /// Working days consumed: each working day in the range counts 1.0 for a
    /// full-day request and 0.5 for a half-day one.
    pub fn days_taken(&self, calendar: &dyn WorkCalendar) -> f64 {
        calendar.working_days_in(self.range()) as f64 * self.leave_state.day_fraction()
    }
}

/// The first request, in input order, whose range contains `day`.
///
/// Overlapping requests are not an error; the earliest one in `requests`
/// wins.
pub fn leave_request_for_day(requests: &[LeaveRequest], day: CalendarDay) -> Option<&LeaveRequest> {
    requests.iter().find(|r| r.covers(day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lc_time::{Holiday, HolidayCalendar, WorkingDays};

    fn day(y: u16, m: u8, d: u8) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn covers_is_inclusive() {
        let r = LeaveRequest::new(day(2024, 7, 8), day(2024, 7, 12), LeaveState::FullDay);
        assert!(r.covers(day(2024, 7, 8)));
        assert!(r.covers(day(2024, 7, 12)));
        assert!(!r.covers(day(2024, 7, 13)));
    }

    #[test]
    fn reversed_endpoints_still_cover() {
        let r = LeaveRequest::new(day(2024, 7, 12), day(2024, 7, 8), LeaveState::FullDay);
        assert!(r.covers(day(2024, 7, 10)));
    }

    #[test]
    fn first_match_wins() {
        let reqs = vec![
            LeaveRequest::new(day(2024, 7, 8), day(2024, 7, 12), LeaveState::MorningHalf),
            LeaveRequest::new(day(2024, 7, 10), day(2024, 7, 10), LeaveState::FullDay),
        ];
        let hit = leave_request_for_day(&reqs, day(2024, 7, 10)).unwrap();
        assert_eq!(hit.leave_state, LeaveState::MorningHalf);
        assert!(leave_request_for_day(&reqs, day(2024, 7, 13)).is_none());
        assert!(leave_request_for_day(&[], day(2024, 7, 10)).is_none());
    }

    #[test]
    fn days_taken_skips_weekends_and_holidays() {
        // Mon 8 .. Mon 15 July 2024, with a holiday on Friday the 12th.
        let cal = HolidayCalendar::new(
            "Office",
            vec![Holiday::new(day(2024, 7, 12), "Founders Day")],
        );
        let full = LeaveRequest::new(day(2024, 7, 8), day(2024, 7, 15), LeaveState::FullDay);
        assert_relative_eq!(full.days_taken(&cal), 5.0);

        let half = LeaveRequest::new(day(2024, 7, 9), day(2024, 7, 9), LeaveState::EveningHalf);
        assert_relative_eq!(half.days_taken(&WorkingDays::monday_to_friday()), 0.5);
    }

    #[test]
    fn wire_format() {
        let r: LeaveRequest = serde_json::from_str(
            r#"{"startDate":"2024-07-08","endDate":"2024-07-12","leaveState":"MORNING_HALF","status":"APPROVED"}"#,
        )
        .unwrap();
        assert_eq!(r.leave_state, LeaveState::MorningHalf);
        assert_eq!(r.status, LeaveStatus::Approved);

        let odd: LeaveRequest = serde_json::from_str(
            r#"{"startDate":"2024-07-08","endDate":"2024-07-08","leaveState":"FULL_DAY","status":"ESCALATED"}"#,
        )
        .unwrap();
        assert_eq!(odd.status, LeaveStatus::Unknown);
    }
}
