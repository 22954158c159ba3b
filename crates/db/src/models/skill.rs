//! Skill model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `skills` table. `name` is a canonical technology tag.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub icon: Option<String>,
    pub level: Option<i32>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a skill.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkill {
    #[validate(length(min = 1, message = "skill name is required"))]
    pub name: String,
    pub icon: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub level: Option<i32>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a skill. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSkill {
    #[validate(length(min = 1, message = "skill name must not be empty"))]
    pub name: Option<String>,
    pub icon: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub level: Option<i32>,
    pub sort_order: Option<i32>,
}
