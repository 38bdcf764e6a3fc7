//! Date and timestamp formatting

use chrono::{DateTime, Utc};

use crate::model::PartialDate;

/// Format a partial date as `YYYY-MM-DD`, dropping unknown trailing parts
///
/// Unknown leading or middle parts are shown as question marks so the
/// remaining parts keep their position: `????-05-03`, `1999-??-12`.
pub fn format_date(date: &PartialDate) -> String {
    let mut out = String::new();

    match date.year {
        Some(year) if year < 0 => out.push_str(&format!("-{:03}", year.unsigned_abs())),
        Some(year) => out.push_str(&format!("{year:04}")),
        None if date.month.is_some() || date.day.is_some() => out.push_str("????"),
        None => {}
    }

    match date.month {
        Some(month) => out.push_str(&format!("-{month:02}")),
        None if date.day.is_some() => out.push_str("-??"),
        None => {}
    }

    if let Some(day) = date.day {
        out.push_str(&format!("-{day:02}"));
    }

    out
}

/// Format a server timestamp for display (`2024-03-01 04:05 UTC`)
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M %Z").to_string()
}
