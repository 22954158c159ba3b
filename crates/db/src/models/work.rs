//! Work (portfolio project) model and DTOs.

use folio_core::language::{
    deserialize_language_refs, deserialize_optional_language_refs, language_refs_from_value,
    LanguageRef,
};
use folio_core::types::{DbId, Timestamp};
use folio_core::work::{deserialize_scalar, WorkRecord};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `works` table.
///
/// `languages` is kept as raw JSON: older rows hold a mix of strings and
/// `{name, icon}` objects. Use [`Work::into_record`] to get the typed view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Work {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    pub priority: Option<String>,
    pub languages: serde_json::Value,
    pub project_url: Option<String>,
    pub source_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Work {
    /// Combine the row with its ordered image data URIs.
    pub fn into_record(self, images: Vec<String>) -> WorkRecord {
        WorkRecord {
            id: self.id,
            title: self.title,
            description: self.description,
            duration: self.duration,
            category: self.category,
            year: self.year,
            priority: self.priority,
            languages: language_refs_from_value(Some(&self.languages)),
            project_url: self.project_url,
            source_url: self.source_url,
            images,
        }
    }
}

/// DTO for creating a work.
///
/// `year` and `priority` accept either JSON strings or numbers.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWork {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "deserialize_language_refs")]
    pub languages: Vec<LanguageRef>,
    #[validate(url)]
    pub project_url: Option<String>,
    #[validate(url)]
    pub source_url: Option<String>,
}

/// DTO for a merge-style update: absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWork {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_language_refs")]
    pub languages: Option<Vec<LanguageRef>>,
    #[validate(url)]
    pub project_url: Option<String>,
    #[validate(url)]
    pub source_url: Option<String>,
}
