//! Technology tags attached to works.
//!
//! Stored `languages` entries come in several historical shapes: a bare tag
//! string, an object with `name` and `icon`, or an object whose `name` is
//! itself such an object. [`LanguageRef`] models all of them, and
//! [`normalize_languages`] reduces a list of them to plain canonical tags.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Language references
// ---------------------------------------------------------------------------

/// One entry of a work's `languages` list as it may appear in stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageRef {
    /// `"react"`
    Tag(String),
    /// `{"name": "react", "icon": "..."}` or `{"name": {"name": "react"}}`.
    Named {
        name: Box<LanguageRef>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<Value>,
    },
    /// Any other JSON value. Never resolves to a tag.
    Unknown(Value),
}

impl LanguageRef {
    /// Build a reference from an arbitrary JSON value. Never fails: shapes
    /// that are not recognised become [`LanguageRef::Unknown`].
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_else(|_| LanguageRef::Unknown(value.clone()))
    }

    /// Unwrap nested `name` objects down to the innermost string tag.
    ///
    /// Returns `None` when the chain ends in anything other than a string.
    pub fn tag(&self) -> Option<&str> {
        let mut current = self;
        loop {
            match current {
                LanguageRef::Tag(tag) => return Some(tag),
                LanguageRef::Named { name, .. } => current = name,
                LanguageRef::Unknown(_) => return None,
            }
        }
    }
}

impl From<&str> for LanguageRef {
    fn from(tag: &str) -> Self {
        LanguageRef::Tag(tag.to_string())
    }
}

/// Convert a raw `languages` value into references.
///
/// Absent, `null`, or non-array values yield an empty list.
pub fn language_refs_from_value(value: Option<&Value>) -> Vec<LanguageRef> {
    match value {
        Some(Value::Array(items)) => items.iter().map(LanguageRef::from_value).collect(),
        _ => Vec::new(),
    }
}

/// Serde adapter for `languages` fields that tolerates any stored shape.
///
/// Use with `#[serde(default, deserialize_with = "deserialize_language_refs")]`.
pub fn deserialize_language_refs<'de, D>(deserializer: D) -> Result<Vec<LanguageRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(language_refs_from_value(value.as_ref()))
}

/// Like [`deserialize_language_refs`] but keeps "absent" distinct from an
/// empty list, for merge-style updates. `null` counts as absent.
pub fn deserialize_optional_language_refs<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<LanguageRef>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| language_refs_from_value(Some(&v))))
}

/// Reduce a list of references to their canonical tags, preserving order.
///
/// Entries that do not resolve to a string are dropped silently.
pub fn normalize_languages(refs: &[LanguageRef]) -> Vec<String> {
    refs.iter()
        .filter_map(LanguageRef::tag)
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Display names
// ---------------------------------------------------------------------------

/// Canonical tag -> human-readable label. Tags missing here are shown as-is.
pub const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("angularjs", "Angular.js"),
    ("bootstrap", "Bootstrap"),
    ("cplusplus", "C++"),
    ("csharp", "C#"),
    ("css3", "CSS3"),
    ("dart", "Dart"),
    ("docker", "Docker"),
    ("dotnetcore", ".NET Core"),
    ("firebase", "Firebase"),
    ("flutter", "Flutter"),
    ("graphql", "GraphQL"),
    ("html5", "HTML5"),
    ("java", "Java"),
    ("javascript", "JavaScript"),
    ("kotlin", "Kotlin"),
    ("mongodb", "MongoDB"),
    ("mysql", "MySQL"),
    ("nextjs", "Next.js"),
    ("nodejs", "Node.js"),
    ("php", "PHP"),
    ("postgresql", "PostgreSQL"),
    ("python", "Python"),
    ("react", "React"),
    ("redux", "Redux"),
    ("rust", "Rust"),
    ("sass", "Sass"),
    ("tailwindcss", "Tailwind CSS"),
    ("typescript", "TypeScript"),
    ("vuejs", "Vue.js"),
];

/// Look up the display label for a canonical tag.
///
/// ```
/// use folio_core::language::display_name;
///
/// assert_eq!(display_name("csharp"), "C#");
/// assert_eq!(display_name("angularjs"), "Angular.js");
/// assert_eq!(display_name("elixir"), "elixir");
/// ```
pub fn display_name(tag: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(canonical, _)| *canonical == tag)
        .map(|(_, label)| *label)
        .unwrap_or(tag)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
