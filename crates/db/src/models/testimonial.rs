//! Testimonial model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub author: String,
    pub author_role: Option<String>,
    pub quote: String,
    pub avatar_image: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestimonial {
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    pub author_role: Option<String>,
    #[validate(length(min = 1, message = "quote is required"))]
    pub quote: String,
    pub avatar_image: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTestimonial {
    #[validate(length(min = 1))]
    pub author: Option<String>,
    pub author_role: Option<String>,
    #[validate(length(min = 1))]
    pub quote: Option<String>,
    pub avatar_image: Option<String>,
    pub sort_order: Option<i32>,
}
