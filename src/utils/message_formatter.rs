/// Pure functions for birthday announcement formatting
use crate::constants::ANNOUNCEMENT_HEADER;
use crate::models::BirthdayMatch;

/// Build a single birthday entry line
pub fn build_birthday_entry(name: &str, age: u32) -> String {
    format!("{} ({})", name, age)
}

/// Join multiple birthday entries with newlines
pub fn join_birthday_entries(entries: &[String]) -> String {
    entries.join("\n")
}

/// Build the full announcement, or `None` when there is nothing to announce.
///
/// The layout is fixed: header line, then one `Name (age)` line per match in
/// the given order, no trailing newline.
pub fn format_announcement(matches: &[BirthdayMatch]) -> Option<String> {
    if matches.is_empty() {
        return None;
    }

    let entries: Vec<String> = matches
        .iter()
        .map(|m| build_birthday_entry(&m.name, m.age))
        .collect();

    Some(format!(
        "{}\n{}",
        ANNOUNCEMENT_HEADER,
        join_birthday_entries(&entries)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(name: &str, age: u32) -> BirthdayMatch {
        BirthdayMatch {
            name: name.to_string(),
            age,
        }
    }

    #[test]
    fn test_build_birthday_entry() {
        assert_eq!(build_birthday_entry("Ann", 30), "Ann (30)");
        assert_eq!(build_birthday_entry("Мария Иванова", 0), "Мария Иванова (0)");
    }

    #[test]
    fn test_join_birthday_entries() {
        let entries = vec!["Ann (30)".to_string(), "Bob (41)".to_string()];
        assert_eq!(join_birthday_entries(&entries), "Ann (30)\nBob (41)");
    }

    #[test]
    fn test_format_announcement_empty_is_none() {
        assert_eq!(format_announcement(&[]), None);
    }

    #[test]
    fn test_format_announcement_single() {
        assert_eq!(
            format_announcement(&[matched("Ann", 30)]),
            Some("🎂 Дни рождения сегодня:\nAnn (30)".to_string())
        );
    }

    #[test]
    fn test_format_announcement_keeps_order_and_duplicates() {
        let text = format_announcement(&[
            matched("Zoe", 25),
            matched("Ann", 30),
            matched("Ann", 12),
        ])
        .unwrap();

        assert_eq!(
            text,
            "🎂 Дни рождения сегодня:\nZoe (25)\nAnn (30)\nAnn (12)"
        );
        assert!(!text.ends_with('\n'));
    }
}
