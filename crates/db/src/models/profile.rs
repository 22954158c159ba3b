//! Profile (singleton) model and DTO.

use folio_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use validator::Validate;

/// A labelled outbound link (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProfileLink {
    #[validate(length(min = 1, message = "link label is required"))]
    pub label: String,
    #[validate(url)]
    pub url: String,
}

/// The single row of the `profile` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub full_name: String,
    pub headline: Option<String>,
    pub about: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub avatar_image: Option<String>,
    pub resume_url: Option<String>,
    pub links: Json<Vec<ProfileLink>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving the profile. The whole profile is replaced on save.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertProfile {
    #[validate(length(min = 1, message = "full name is required"))]
    pub full_name: String,
    pub headline: Option<String>,
    pub about: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub location: Option<String>,
    /// Inline data URI; checked by the handler before saving.
    pub avatar_image: Option<String>,
    #[validate(url)]
    pub resume_url: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub links: Vec<ProfileLink>,
}
