/// Birthday service - picks today's birthdays out of raw roster rows
use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use tracing::debug;

use crate::constants::{DEFAULT_BIRTH_COLUMN, DEFAULT_NAME_COLUMN};
use crate::models::{BirthdayMatch, PersonRecord, RosterRecord};
use crate::utils::datetime::{calculate_age, matches_birthday, parse_birth_date};

/// Which roster columns hold the name and the date of birth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterColumns {
    pub name: String,
    pub birth_date: String,
}

impl Default for RosterColumns {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME_COLUMN.to_string(),
            birth_date: DEFAULT_BIRTH_COLUMN.to_string(),
        }
    }
}

impl PersonRecord {
    /// Build a person from a raw row, or `None` if the row is unusable.
    ///
    /// A row is unusable when the name is missing or blank, or when the
    /// date of birth is missing or cannot be read. The name is kept verbatim.
    pub fn from_roster(record: &RosterRecord, columns: &RosterColumns) -> Option<Self> {
        let name = match record.fields.get(&columns.name) {
            Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
            _ => return None,
        };
        let birth_date = record.fields.get(&columns.birth_date).and_then(parse_birth_date)?;

        Some(Self {
            id: record.id,
            name,
            birth_date,
        })
    }

    /// Age reached in the given year, `None` if born after it
    pub fn age_in_year(&self, year: i32) -> Option<u32> {
        u32::try_from(calculate_age(self.birth_date.year(), year)).ok()
    }
}

/// Find everyone in the roster whose birthday is `today`.
///
/// Keeps roster order and duplicate names. Unusable rows are skipped.
pub fn find_todays_birthdays(
    records: &[RosterRecord],
    today: NaiveDate,
    columns: &RosterColumns,
) -> Vec<BirthdayMatch> {
    records
        .iter()
        .filter_map(|record| {
            let person = PersonRecord::from_roster(record, columns);
            if person.is_none() {
                debug!("Skipping roster record {}: missing name or date of birth", record.id);
            }
            person
        })
        .filter(|person| matches_birthday(person.birth_date, today))
        .filter_map(|person| match person.age_in_year(today.year()) {
            Some(age) => Some(BirthdayMatch {
                name: person.name,
                age,
            }),
            None => {
                debug!(
                    "Skipping roster record {}: date of birth {} is after today",
                    person.id, person.birth_date
                );
                None
            }
        })
        .collect()
}
