//! Work image model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `work_images` table.
///
/// `sort_order` is contiguous (`0..n-1`) within a work.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkImage {
    pub id: DbId,
    pub work_id: DbId,
    pub data_uri: String,
    pub mime_type: String,
    pub width: i32,
    pub height: i32,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// Request body for uploading an image.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadWorkImage {
    pub data_uri: String,
}

/// A validated image ready to be appended to a work.
#[derive(Debug, Clone)]
pub struct NewWorkImage {
    pub data_uri: String,
    pub mime_type: String,
    pub width: i32,
    pub height: i32,
}

/// Request body for reordering a work's images.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderWorkImages {
    /// Every image id of the work, in the new display order.
    pub image_ids: Vec<DbId>,
}
