/// Pure date utility functions, all in UTC
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Calculate age from birth year
pub fn calculate_age(birth_year: i32, current_year: i32) -> i32 {
    current_year - birth_year
}

/// Check if a date matches month and day (ignoring year)
pub fn matches_birthday(birth_date: NaiveDate, today: NaiveDate) -> bool {
    birth_date.month() == today.month() && birth_date.day() == today.day()
}

/// Today's calendar date in UTC
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Interpret a roster cell as a calendar date in UTC.
///
/// Accepts seconds since the Unix epoch (how Grist stores Date columns),
/// `YYYY-MM-DD`, an RFC 3339 timestamp, or a timestamp without offset
/// (read as UTC). Anything else is `None`.
pub fn parse_birth_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Number(number) => {
            let seconds = match number.as_i64() {
                Some(seconds) => seconds,
                None => number.as_f64().filter(|f| f.is_finite())?.floor() as i64,
            };
            DateTime::from_timestamp(seconds, 0).map(|dt| dt.date_naive())
        }
        Value::String(text) => parse_date_text(text.trim()),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|dt| dt.date())
}
