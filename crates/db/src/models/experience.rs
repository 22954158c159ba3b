//! Work-experience entry model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `experiences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: DbId,
    pub role: String,
    pub company: String,
    /// Free-form, e.g. `"2021 - 2023"`.
    pub period: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExperience {
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
    #[validate(length(min = 1, message = "company is required"))]
    pub company: String,
    pub period: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateExperience {
    #[validate(length(min = 1))]
    pub role: Option<String>,
    #[validate(length(min = 1))]
    pub company: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}
