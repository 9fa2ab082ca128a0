//! `CalendarDay` — a date with no time-of-day component.
//!
//! Days are stored as a serial number counted from an epoch, which keeps the
//! type `Copy`, totally ordered, and cheap to hash and step.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid range is 1901-01-01 to 2199-12-31.
//!
//! # Wire formats
//! [`CalendarDay::parse_in`] accepts date-only strings, naive timestamps and
//! offset timestamps.  Time-of-day is discarded; an explicit offset is first
//! converted into the caller's local offset so that both sides of every
//! comparison name the same local calendar date.

use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};
use lc_core::errors::{Error, Result};
use lc_core::utilities::data_parsers::{has_utc_offset, parse_iso_date, split_timestamp};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(i32);

const MIN_YEAR: u16 = 1901;
const MAX_YEAR: u16 = 2199;

impl CalendarDay {
    /// Earliest representable day: January 1, 1901.
    ///
    /// A Tuesday. Six-week grids for January 1901 that start on any other
    /// weekday need lead days before this bound; see `CalendarView::grid`.
    pub const MIN: CalendarDay = CalendarDay(366);

    /// Latest representable day: December 31, 2199.
    ///
    /// Six-week grids for late 2199 run past this bound; see
    /// `CalendarView::grid`.
    pub const MAX: CalendarDay = CalendarDay(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a day from year, month (1–12) and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(CalendarDay(serial_from_ymd(year, month, day)))
    }

    /// Parse a wire value, treating explicit offsets as UTC-relative and
    /// normalizing them to UTC.
    ///
    /// Equivalent to `parse_in(s, UTC)`.
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_in(s, Utc.fix())
    }

    /// Parse a wire value and normalize it to a calendar day in `local`.
    ///
    /// * `2024-12-25` is taken as written.
    /// * `2024-12-25T15:30:00` is local wall-clock time; the date part is
    ///   taken as written.
    /// * `2024-12-25T23:30:00-05:00` is converted to `local` first.
    pub fn parse_in(s: &str, local: FixedOffset) -> Result<Self> {
        let (date_part, time) = split_timestamp(s);
        match time {
            None => {
                let (y, m, d) =
                    parse_iso_date(date_part).ok_or_else(|| Error::parse("calendar day", s))?;
                Self::from_ymd(y, m, d)
            }
            Some(t) if has_utc_offset(t) => {
                let joined = format!("{date_part}T{t}");
                let instant = DateTime::parse_from_rfc3339(&joined)
                    .ok()
                    .or_else(|| {
                        OFFSET_FORMATS
                            .iter()
                            .find_map(|fmt| DateTime::parse_from_str(&joined, fmt).ok())
                    })
                    .ok_or_else(|| Error::parse("timestamp", s))?;
                Self::from_naive(instant.with_timezone(&local).date_naive())
            }
            Some(t) => {
                if parse_wall_time(t).is_none() {
                    return Err(Error::parse("timestamp", s));
                }
                let (y, m, d) =
                    parse_iso_date(date_part).ok_or_else(|| Error::parse("calendar day", s))?;
                Self::from_ymd(y, m, d)
            }
        }
    }

    /// Convert from a `chrono` date.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        let year = u16::try_from(date.year())
            .map_err(|_| Error::Date(format!("year {} out of range", date.year())))?;
        // month() and day() are always within u8 range.
        Self::from_ymd(year, date.month() as u8, date.day() as u8)
    }

    /// Convert to a `chrono` date.
    pub fn to_naive(self) -> NaiveDate {
        let (y, m, d) = ymd_from_serial(self.0);
        NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32)
            .unwrap_or(NaiveDate::MIN)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Serial number of this day.
    pub fn serial(self) -> i32 {
        self.0
    }

    /// Year (1901–2199).
    pub fn year(self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Month number (1–12).
    pub fn month(self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Month as an enum.
    pub fn month_of_year(self) -> Month {
        Month::from_number(self.month()).unwrap_or(Month::January)
    }

    /// Day of the month (1–31).
    pub fn day_of_month(self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Day of the week.
    pub fn weekday(self) -> Weekday {
        // Serial 1 is a Monday.
        let ordinal = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(ordinal).unwrap_or(Weekday::Monday)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// The following day, or `None` past [`CalendarDay::MAX`].
    pub fn succ(self) -> Option<Self> {
        (self < Self::MAX).then_some(CalendarDay(self.0 + 1))
    }

    /// The preceding day, or `None` before [`CalendarDay::MIN`].
    pub fn pred(self) -> Option<Self> {
        (self > Self::MIN).then_some(CalendarDay(self.0 - 1))
    }

    /// Move by `n` days (negative moves backwards).
    pub fn add_days(self, n: i32) -> Result<Self> {
        let out_of_range = || Error::Date(format!("{self} {n:+} days leaves the supported range"));
        let serial = self.0.checked_add(n).ok_or_else(out_of_range)?;
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(out_of_range());
        }
        Ok(CalendarDay(serial))
    }

    /// Move by `n` months, clamping the day to the end of the target month.
    pub fn add_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = ymd_from_serial(self.0);
        let index = (y as i32 * 12 + (m as i32 - 1))
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("{self} {n:+} months leaves the supported range")))?;
        let year = index.div_euclid(12);
        let month = (index.rem_euclid(12) + 1) as u8;
        let year = u16::try_from(year)
            .map_err(|_| Error::Date(format!("year {year} out of range")))?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range")));
        }
        Self::from_ymd(year, month, d.min(days_in_month(year, month)))
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: CalendarDay) -> i32 {
        other.0 - self.0
    }

    /// First day of this day's month.
    pub fn first_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        CalendarDay(serial_from_ymd(y, m, 1))
    }

    /// Last day of this day's month.
    pub fn last_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        CalendarDay(serial_from_ymd(y, m, days_in_month(y, m)))
    }
}

/// Offset timestamps RFC 3339 rejects: minute precision, `Z`, `+hh` and
/// `+hhmm` offsets.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

fn parse_wall_time(t: &str) -> Option<NaiveTime> {
    ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

// ── Formatting and parsing ───────────────────────────────────────────────────

impl std::fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for CalendarDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CalendarDay({self})")
    }
}

impl FromStr for CalendarDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes through [`CalendarDay::parse`], i.e. with a UTC local offset.
impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CalendarDay::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<NaiveDate> for CalendarDay {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::from_naive(date)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    // Leap years in [1901, year); 1900 itself is not a leap year.
    let leaps = (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    let mut serial = (y - 1900) * 365 + leaps;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    while serial < serial_from_ymd(y, 1, 1) {
        y -= 1;
    }
    while serial >= serial_from_ymd(y + 1, 1, 1) {
        y += 1;
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let len = days_in_month(y, m) as i32;
        if remaining <= len {
            break;
        }
        remaining -= len;
        m += 1;
    }
    (y, m, remaining as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
