//! Loading the holiday and leave payloads delivered by the API layer.
//!
//! Payloads are parsed leniently: a record whose dates cannot be read is
//! logged and skipped, so one bad row never blanks the whole calendar.  A
//! `null` payload (the fetch failed or has not finished) is an empty list.

use chrono::FixedOffset;
use lc_core::errors::Result;
use lc_time::{CalendarDay, Holiday, HolidayCalendar, WorkingDays};
use serde::Deserialize;
use serde_json::Value;

use crate::leave::{LeaveRequest, LeaveState, LeaveStatus};
use crate::resolver::DaySources;
use crate::settings::Settings;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireHoliday {
    date: String,
    name: String,
    #[serde(default)]
    recurring: bool,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLeave {
    start_date: String,
    end_date: String,
    leave_state: LeaveState,
    #[serde(default)]
    status: LeaveStatus,
}

/// Owned data for one render cycle.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    holidays: HolidayCalendar,
    leave_requests: Vec<LeaveRequest>,
    working_days: WorkingDays,
}

impl Snapshot {
    /// Assemble a snapshot from already-typed records.
    pub fn from_parts(
        holidays: Vec<Holiday>,
        leave_requests: Vec<LeaveRequest>,
        settings: &Settings,
    ) -> Self {
        let leave_requests = if settings.hide_inactive_leave {
            leave_requests
                .into_iter()
                .filter(|r| !r.status.is_inactive())
                .collect()
        } else {
            leave_requests
        };
        Self {
            holidays: HolidayCalendar::new("Organization holidays", holidays)
                .with_working_days(settings.working_days),
            leave_requests,
            working_days: settings.working_days,
        }
    }

    /// Parse the holiday and leave-request JSON payloads.
    ///
    /// # Errors
    /// Fails if a payload is neither `null` nor a JSON array, or if the
    /// configured offset is invalid.  Individual bad records are skipped.
    pub fn from_json(holidays_json: &str, leave_json: &str, settings: &Settings) -> Result<Self> {
        let local = settings.local_offset()?;
        let holidays = parse_records(holidays_json, "holiday", |v| holiday_from_wire(v, local))?;
        let leave = parse_records(leave_json, "leave request", |v| leave_from_wire(v, local))?;
        tracing::debug!(
            holidays = holidays.len(),
            leave_requests = leave.len(),
            "calendar snapshot loaded"
        );
        Ok(Self::from_parts(holidays, leave, settings))
    }

    /// Indexed holidays.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Leave requests in feed order.
    pub fn leave_requests(&self) -> &[LeaveRequest] {
        &self.leave_requests
    }

    /// Borrowed sources for a resolver.
    pub fn sources(&self) -> DaySources<'_> {
        DaySources::empty()
            .with_holidays(&self.holidays)
            .with_leave_requests(&self.leave_requests)
            .with_working_days(&self.working_days)
    }
}

fn parse_records<T>(
    json: &str,
    what: &'static str,
    convert: impl Fn(Value) -> Result<T>,
) -> Result<Vec<T>> {
    let rows: Option<Vec<Value>> = serde_json::from_str(json)?;
    let mut out = Vec::new();
    for (index, row) in rows.unwrap_or_default().into_iter().enumerate() {
        match convert(row) {
            Ok(record) => out.push(record),
            Err(err) => tracing::warn!(index, %err, "skipping malformed {what}"),
        }
    }
    Ok(out)
}

fn holiday_from_wire(value: Value, local: FixedOffset) -> Result<Holiday> {
    let wire: WireHoliday = serde_json::from_value(value)?;
    Ok(Holiday {
        date: CalendarDay::parse_in(&wire.date, local)?,
        name: wire.name,
        recurring: wire.recurring,
        description: wire.description,
    })
}

fn leave_from_wire(value: Value, local: FixedOffset) -> Result<LeaveRequest> {
    let wire: WireLeave = serde_json::from_value(value)?;
    let start = CalendarDay::parse_in(&wire.start_date, local)?;
    let end = CalendarDay::parse_in(&wire.end_date, local)?;
    if end < start {
        tracing::debug!(%start, %end, "leave request with reversed endpoints");
    }
    Ok(LeaveRequest::new(start, end, wire.leave_state).with_status(wire.status))
}
