//! Low-level parsing helpers for wire date strings.
//!
//! These work on plain tuples so that `lc-core` stays free of any date type;
//! `lc-time` builds its `CalendarDay` parsing on top of them.

/// Parse a calendar date in ISO 8601 extended format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.  Only the shape is checked here;
/// range validation happens when the date is constructed.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return None;
    }
    if !s.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return None;
    }
    Some((y.parse().ok()?, m.parse().ok()?, d.parse().ok()?))
}

/// Split a wire value into its date part and the optional time suffix.
///
/// Accepts `T`, `t` or a single space as the separator:
/// `"2024-12-25T10:00:00Z"` → `("2024-12-25", Some("10:00:00Z"))`.
pub fn split_timestamp(s: &str) -> (&str, Option<&str>) {
    let s = s.trim();
    match s.find(['T', 't', ' ']) {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    }
}

/// Return `true` if a time suffix carries an explicit UTC offset
/// (`Z`, or a signed `hh`, `hhmm` or `hh:mm`).
pub fn has_utc_offset(time: &str) -> bool {
    let time = time.trim();
    if time.ends_with(['Z', 'z']) {
        return true;
    }
    // A sign after the hh:mm part; the leading hour never starts with a sign.
    time.char_indices()
        .skip(1)
        .any(|(_, c)| c == '+' || c == '-')
}
