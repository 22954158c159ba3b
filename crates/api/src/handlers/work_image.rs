//! Handlers for images nested under `/works/{work_id}/images`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::images::inspect_data_uri;
use folio_core::types::DbId;
use folio_db::models::work_image::{
    NewWorkImage, ReorderWorkImages, UploadWorkImage, WorkImage,
};
use folio_db::repositories::{ReorderOutcome, WorkImageRepo, WorkRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn work_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Work", id })
}

async fn ensure_work_exists(state: &AppState, work_id: DbId) -> AppResult<()> {
    WorkRepo::find_by_id(&state.pool, work_id)
        .await?
        .ok_or_else(|| work_not_found(work_id))?;
    Ok(())
}

/// GET /api/v1/works/{work_id}/images
pub async fn list(
    State(state): State<AppState>,
    Path(work_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<WorkImage>>>> {
    ensure_work_exists(&state, work_id).await?;
    let images = WorkImageRepo::list_by_work(&state.pool, work_id).await?;
    Ok(Json(DataResponse { data: images }))
}

/// POST /api/v1/works/{work_id}/images
///
/// Appends the image after the work's existing images.
pub async fn upload(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(work_id): Path<DbId>,
    Json(input): Json<UploadWorkImage>,
) -> AppResult<(StatusCode, Json<WorkImage>)> {
    let info = inspect_data_uri(&input.data_uri, state.config.max_image_bytes)?;

    let new_image = NewWorkImage {
        data_uri: input.data_uri,
        mime_type: info.mime_type,
        width: i32::try_from(info.width)
            .map_err(|_| AppError::BadRequest("Image is too wide".into()))?,
        height: i32::try_from(info.height)
            .map_err(|_| AppError::BadRequest("Image is too tall".into()))?,
    };

    let image = WorkImageRepo::append(&state.pool, work_id, &new_image)
        .await?
        .ok_or_else(|| work_not_found(work_id))?;

    tracing::info!(
        admin = %admin.username,
        work_id,
        image_id = image.id,
        bytes = info.byte_len,
        "Work image uploaded"
    );
    Ok((StatusCode::CREATED, Json(image)))
}

/// DELETE /api/v1/works/{work_id}/images/{image_id}
///
/// The remaining images are renumbered to keep `sort_order` contiguous.
pub async fn delete(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path((work_id, image_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if WorkImageRepo::delete(&state.pool, work_id, image_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "WorkImage",
            id: image_id,
        }))
    }
}

/// PUT /api/v1/works/{work_id}/images/order
///
/// The body must list every image of the work exactly once.
pub async fn reorder(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(work_id): Path<DbId>,
    Json(input): Json<ReorderWorkImages>,
) -> AppResult<Json<DataResponse<Vec<WorkImage>>>> {
    match WorkImageRepo::reorder(&state.pool, work_id, &input.image_ids).await? {
        ReorderOutcome::Reordered(images) => Ok(Json(DataResponse { data: images })),
        ReorderOutcome::WorkNotFound => Err(work_not_found(work_id)),
        ReorderOutcome::Rejected(err) => Err(AppError::Core(err)),
    }
}
