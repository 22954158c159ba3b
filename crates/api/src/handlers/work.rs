//! Handlers for the `/works` resource.
//!
//! Works are returned as [`WorkRecord`]s so every consumer sees the images
//! in display order alongside the raw fields.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::work::{validate_title, WorkRecord};
use folio_db::models::work::{CreateWork, UpdateWork};
use folio_db::repositories::WorkRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn work_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Work", id })
}

/// GET /api/v1/works
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<WorkRecord>>>> {
    let works = WorkRepo::list_records(&state.pool).await?;
    Ok(Json(DataResponse { data: works }))
}

/// GET /api/v1/works/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WorkRecord>> {
    let work = WorkRepo::find_record(&state.pool, id)
        .await?
        .ok_or_else(|| work_not_found(id))?;
    Ok(Json(work))
}

/// POST /api/v1/works
pub async fn create(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWork>,
) -> AppResult<(StatusCode, Json<WorkRecord>)> {
    input.validate()?;
    validate_title(&input.title)?;

    let work = WorkRepo::create(&state.pool, &input).await?;
    tracing::info!(admin = %admin.username, work_id = work.id, "Work created");
    Ok((StatusCode::CREATED, Json(work.into_record(Vec::new()))))
}

/// PUT /api/v1/works/{id}
///
/// Merge update: absent fields keep their stored value.
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWork>,
) -> AppResult<Json<WorkRecord>> {
    input.validate()?;
    if let Some(title) = &input.title {
        validate_title(title)?;
    }

    WorkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| work_not_found(id))?;

    let work = WorkRepo::find_record(&state.pool, id)
        .await?
        .ok_or_else(|| work_not_found(id))?;
    Ok(Json(work))
}

/// DELETE /api/v1/works/{id}
///
/// Removes the work together with its images.
pub async fn delete(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if WorkRepo::delete(&state.pool, id).await? {
        tracing::info!(admin = %admin.username, work_id = id, "Work deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(work_not_found(id))
    }
}
