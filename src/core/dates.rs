// src/core/dates.rs
//! Heuristic date reading for sheet cells.
//!
//! People fill these sheets day-first: "03/04/2024" is 3 April, and a
//! generic parser calling that March 4 is wrong more often than right.
//! So the day-first shape is matched before anything else; ISO-8601 and
//! the usual long forms are only a fallback.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// `d/m/y`: 1-2 digit day and month, 2- or 4-digit year, each separator
/// independently one of `/ . -`, optional `H:MM[:SS]` tail.
static DAY_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4}|\d{2})(?:\s+(\d{1,2}):(\d{2})(?::(\d{2}))?)?$",
    )
    .unwrap()
});

/// Parse a cell into epoch milliseconds (UTC). `None` means "not a date".
pub fn parse_date(value: &str) -> Option<i64> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }
    day_first(v).or_else(|| general(v))
}

fn day_first(v: &str) -> Option<i64> {
    let caps = DAY_FIRST.captures(v)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let mut year: i32 = caps[3].parse().ok()?;
    if caps[3].len() == 2 {
        year += 2000;
    }
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    // Day counts are not checked against the month; "31/04" rolls into
    // May the way spreadsheet date arithmetic does.
    let date = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day) - 1))?;

    let time = match (caps.get(4), caps.get(5)) {
        (Some(h), Some(m)) => {
            let sec: u32 = match caps.get(6) {
                Some(s) => s.as_str().parse().ok()?,
                None => 0,
            };
            NaiveTime::from_hms_opt(h.as_str().parse().ok()?, m.as_str().parse().ok()?, sec)?
        }
        _ => NaiveTime::MIN,
    };

    Some(NaiveDateTime::new(date, time).and_utc().timestamp_millis())
}

/// Fallback ladder for anything the day-first shape does not cover.
fn general(v: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(v) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(v) {
        return Some(dt.timestamp_millis());
    }

    const DATETIME_FORMATS: [&str; 3] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
    ];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(v, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%b %d, %Y", "%d %b %Y"];
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(v, fmt) {
            return Some(d.and_time(NaiveTime::MIN).and_utc().timestamp_millis());
        }
    }

    None
}
