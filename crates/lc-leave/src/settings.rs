//! Organization settings consumed by the calendar.
//!
//! Unlike a process-wide singleton, [`Settings`] is a plain value: load it
//! once and pass it to whatever needs it.
//!
//! ```json
//! {
//!   "workingDays": ["MONDAY", "TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY"],
//!   "weekStartsOn": "MONDAY",
//!   "utcOffsetMinutes": 330,
//!   "hideInactiveLeave": true
//! }
//! ```

use std::path::Path;

use chrono::FixedOffset;
use lc_core::errors::Result;
use lc_core::fail;
use lc_time::{Weekday, WorkingDays};
use serde::{Deserialize, Serialize};

/// Largest accepted UTC offset, in minutes.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Calendar-related organization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Settings {
    /// Working weekdays; an empty set means "not configured".
    pub working_days: WorkingDays,
    /// First column of the month grid.
    pub week_starts_on: Weekday,
    /// Local offset used to turn timestamps into calendar days.
    pub utc_offset_minutes: i32,
    /// Drop rejected and cancelled leave when loading a snapshot.
    pub hide_inactive_leave: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            working_days: WorkingDays::monday_to_friday(),
            week_starts_on: Weekday::Monday,
            utc_offset_minutes: 0,
            hide_inactive_leave: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        tracing::info!(
            working_days = ?settings.working_days,
            week_starts_on = %settings.week_starts_on,
            utc_offset_minutes = settings.utc_offset_minutes,
            "calendar settings loaded"
        );
        Ok(settings)
    }

    /// Read, parse and validate a JSON settings file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "reading calendar settings");
        Self::from_json_str(&json)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            fail!(
                "utcOffsetMinutes {} outside ±{MAX_UTC_OFFSET_MINUTES}",
                self.utc_offset_minutes
            );
        }
        Ok(())
    }

    /// The local offset as a `chrono` value.
    pub fn local_offset(&self) -> Result<FixedOffset> {
        match FixedOffset::east_opt(self.utc_offset_minutes * 60) {
            Some(offset) => Ok(offset),
            None => fail!("utcOffsetMinutes {} is not a valid offset", self.utc_offset_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_core::Error;

    #[test]
    fn defaults_fill_missing_keys() {
        let s = Settings::from_json_str(r#"{"utcOffsetMinutes": 330}"#).unwrap();
        assert_eq!(s.working_days, WorkingDays::monday_to_friday());
        assert_eq!(s.week_starts_on, Weekday::Monday);
        assert_eq!(s.local_offset().unwrap().local_minus_utc(), 330 * 60);
    }

    #[test]
    fn parses_full_document() {
        let s = Settings::from_json_str(
            r#"{"workingDays":["SUNDAY","MONDAY","TUESDAY","WEDNESDAY","THURSDAY"],
                "weekStartsOn":"SUNDAY","hideInactiveLeave":true}"#,
        )
        .unwrap();
        assert!(s.working_days.contains(Weekday::Sunday));
        assert!(!s.working_days.contains(Weekday::Friday));
        assert_eq!(s.week_starts_on, Weekday::Sunday);
        assert!(s.hide_inactive_leave);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_offsets() {
        assert!(matches!(
            Settings::from_json_str(r#"{"weekStart":"MONDAY"}"#),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            Settings::from_json_str(r#"{"utcOffsetMinutes": 2000}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Settings::from_path("/nonexistent/leavecal/settings.json"),
            Err(Error::Io(_))
        ));
    }
}
