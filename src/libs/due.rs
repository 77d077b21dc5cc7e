//! Due-date urgency test.
//!
//! Dates travel as `DD/MM/YYYY` strings. The comparison is a pure
//! calendar-field comparison, not a date-distance calculation: a task
//! is due when its year/month/day tuple is on or before today's. A
//! malformed date never raises; it simply reads as "not due".

use chrono::{Datelike, Local, NaiveDate};

/// Returns `true` when `due_date` (`DD/MM/YYYY`) is today or earlier.
///
/// The boundary is inclusive: a task due today is already urgent.
/// Unparseable input yields `false`.
pub fn is_past_due(due_date: &str, today: NaiveDate) -> bool {
    let Some((day, month, year)) = parse_fields(due_date) else {
        return false;
    };
    let (td, tm, ty) = (today.day() as i32, today.month() as i32, today.year());

    year < ty || (year == ty && month < tm) || (year == ty && month == tm && day <= td)
}

/// Splits `DD/MM/YYYY` into numeric fields. Exactly three
/// slash-separated numbers are required; nothing else is validated.
fn parse_fields(raw: &str) -> Option<(i32, i32, i32)> {
    let mut parts = raw.split('/');
    let day = parts.next()?.trim().parse().ok()?;
    let month = parts.next()?.trim().parse().ok()?;
    let year = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((day, month, year))
}

/// Current calendar date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Formats a date as the `DD/MM/YYYY` string stored in the database.
pub fn stamp(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}
