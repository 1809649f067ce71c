use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A raw row as returned by the roster store
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RosterRecord {
    pub id: i64,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// A roster row with a usable name and date of birth
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: i64,
    pub name: String,
    /// Calendar date of birth, in UTC
    pub birth_date: NaiveDate,
}

/// A person whose birthday is today
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BirthdayMatch {
    pub name: String,
    pub age: u32,
}

/// Identifier of a post created on the wall
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostReceipt {
    pub post_id: i64,
}

/// Final result of one run.
///
/// Built once per run through one of the constructors below and never
/// modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutcome {
    pub success: bool,
    pub birthdays_found: bool,
    pub birthday_count: usize,
    pub posted_to_wall: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunOutcome {
    /// The roster could not be read
    pub fn fetch_failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            birthdays_found: false,
            birthday_count: 0,
            posted_to_wall: false,
            message: "roster fetch failed".to_string(),
            error: Some(error.into()),
        }
    }

    /// The roster was read and nobody has a birthday today
    pub fn no_birthdays() -> Self {
        Self {
            success: true,
            birthdays_found: false,
            birthday_count: 0,
            posted_to_wall: false,
            message: "no birthdays today".to_string(),
            error: None,
        }
    }

    /// Birthdays were found and the announcement was posted
    pub fn posted(count: usize) -> Self {
        Self {
            success: true,
            birthdays_found: true,
            birthday_count: count,
            posted_to_wall: true,
            message: format!("found {} and posted", count),
            error: None,
        }
    }

    /// Birthdays were found but the announcement could not be posted.
    ///
    /// Detection still succeeded, so `success` stays true.
    pub fn publish_failed(count: usize, error: impl Into<String>) -> Self {
        Self {
            success: true,
            birthdays_found: true,
            birthday_count: count,
            posted_to_wall: false,
            message: format!("found {} but publish failed", count),
            error: Some(error.into()),
        }
    }

    /// Something outside the expected failure paths went wrong
    pub fn unexpected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            birthdays_found: false,
            birthday_count: 0,
            posted_to_wall: false,
            message: "unexpected failure".to_string(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_record_deserializes_without_fields() {
        let record: RosterRecord = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(record.id, 7);
        assert!(record.fields.is_empty());
    }

    #[test]
    fn test_outcome_serializes_camel_case_without_empty_error() {
        let json = serde_json::to_value(RunOutcome::posted(2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "birthdaysFound": true,
                "birthdayCount": 2,
                "postedToWall": true,
                "message": "found 2 and posted"
            })
        );
    }

    #[test]
    fn test_publish_failed_keeps_success() {
        let outcome = RunOutcome::publish_failed(3, "wall API error 15: Access denied");
        assert!(outcome.success);
        assert!(outcome.birthdays_found);
        assert!(!outcome.posted_to_wall);
        assert_eq!(outcome.birthday_count, 3);
        assert_eq!(outcome.message, "found 3 but publish failed");
        assert_eq!(outcome.error.as_deref(), Some("wall API error 15: Access denied"));
    }

    #[test]
    fn test_failure_outcomes_report_nothing_found() {
        for outcome in [RunOutcome::fetch_failed("boom"), RunOutcome::unexpected("boom")] {
            assert!(!outcome.success);
            assert!(!outcome.birthdays_found);
            assert!(!outcome.posted_to_wall);
            assert_eq!(outcome.birthday_count, 0);
            assert_eq!(outcome.error.as_deref(), Some("boom"));
        }
    }
}
