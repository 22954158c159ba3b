//! Certificate model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `certificates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Certificate {
    pub id: DbId,
    pub title: String,
    pub issuer: Option<String>,
    pub issued_on: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCertificate {
    #[validate(length(min = 1, message = "certificate title is required"))]
    pub title: String,
    pub issuer: Option<String>,
    pub issued_on: Option<String>,
    #[validate(url)]
    pub credential_url: Option<String>,
    /// Inline data URI.
    pub image: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCertificate {
    #[validate(length(min = 1, message = "certificate title must not be empty"))]
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub issued_on: Option<String>,
    #[validate(url)]
    pub credential_url: Option<String>,
    pub image: Option<String>,
    pub sort_order: Option<i32>,
}
