//! The work (portfolio project) record as seen by the catalog.
//!
//! Works are stored with loosely typed `year`, `priority` and `languages`
//! columns because historical entries used strings, numbers and several
//! object shapes interchangeably. This module owns the lenient parsing of
//! those fields so every consumer ranks and filters works the same way.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::language::{deserialize_language_refs, normalize_languages, LanguageRef};
use crate::types::DbId;

/// A work with its images denormalized in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "deserialize_language_refs")]
    pub languages: Vec<LanguageRef>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    /// Data URIs ordered by the image records' `sort_order`.
    #[serde(default)]
    pub images: Vec<String>,
}

impl WorkRecord {
    /// A bare record with only an id and title; handy for building fixtures.
    pub fn new(id: DbId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            duration: None,
            category: None,
            year: None,
            priority: None,
            languages: Vec::new(),
            project_url: None,
            source_url: None,
            images: Vec::new(),
        }
    }

    /// Manual ranking key. `None` means "no priority" and ranks after every
    /// numeric priority.
    pub fn priority_rank(&self) -> Option<i64> {
        self.priority.as_deref().and_then(parse_leading_int)
    }

    /// Numeric year, or `None` when absent or not a number.
    pub fn year_value(&self) -> Option<f64> {
        self.year.as_deref().and_then(parse_year)
    }

    /// Canonical technology tags of this work.
    pub fn technologies(&self) -> Vec<String> {
        normalize_languages(&self.languages)
    }

    pub fn has_technology(&self, tag: &str) -> bool {
        self.languages.iter().any(|r| r.tag() == Some(tag))
    }
}

/// A work can only be saved with a non-blank title.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Work title is required".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Lenient scalar parsing
// ---------------------------------------------------------------------------

/// Parse the leading integer of `raw`, ignoring leading whitespace and any
/// trailing non-digit characters (`"2nd"` -> 2, `"1.5"` -> 1).
///
/// Returns `None` for empty input, input with no leading digits, or values
/// that overflow `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    format!("{sign}{}", &rest[..digits_len]).parse().ok()
}

/// Parse a year as a finite number. Surrounding whitespace is ignored.
pub fn parse_year(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|y| y.is_finite())
}

/// Accept a JSON string or number (or null) and keep it as text.
///
/// Booleans, arrays and objects are treated as absent.
pub fn deserialize_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn leading_int_parsing() {
        assert_eq!(parse_leading_int("3"), Some(3));
        assert_eq!(parse_leading_int("  12"), Some(12));
        assert_eq!(parse_leading_int("1.5"), Some(1));
        assert_eq!(parse_leading_int("2nd"), Some(2));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("invalid"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), None);
    }

    #[test]
    fn year_parsing() {
        assert_eq!(parse_year("2023"), Some(2023.0));
        assert_eq!(parse_year(" 2021 "), Some(2021.0));
        assert_eq!(parse_year("twenty"), None);
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("inf"), None);
    }

    #[test]
    fn deserializes_mixed_scalar_shapes() {
        let work: WorkRecord = serde_json::from_value(json!({
            "id": 1,
            "title": "Kiosk",
            "year": 2022,
            "priority": "2",
            "languages": ["java", {"name": "react", "icon": "react.svg"}],
        }))
        .unwrap();

        assert_eq!(work.year.as_deref(), Some("2022"));
        assert_eq!(work.year_value(), Some(2022.0));
        assert_eq!(work.priority_rank(), Some(2));
        assert_eq!(work.technologies(), vec!["java", "react"]);
        assert!(work.has_technology("react"));
        assert!(!work.has_technology("python"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let work: WorkRecord =
            serde_json::from_value(json!({"id": 2, "title": "Bare", "priority": null, "languages": "x"}))
                .unwrap();
        assert_eq!(work.priority_rank(), None);
        assert_eq!(work.year_value(), None);
        assert!(work.languages.is_empty());
        assert!(work.images.is_empty());
    }

    #[test]
    fn numeric_priority_is_truncated() {
        let work: WorkRecord =
            serde_json::from_value(json!({"id": 3, "title": "T", "priority": 2.7})).unwrap();
        assert_eq!(work.priority_rank(), Some(2));
    }

    #[test]
    fn blank_title_is_rejected() {
        assert_matches!(validate_title(""), Err(CoreError::Validation(_)));
        assert_matches!(validate_title("   "), Err(CoreError::Validation(_)));
        assert!(validate_title("Portfolio").is_ok());
    }
}
