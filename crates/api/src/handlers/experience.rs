//! Handlers for the `/experiences` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::experience::{CreateExperience, Experience, UpdateExperience};
use folio_db::repositories::ExperienceRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/experiences
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Experience>>>> {
    let experiences = ExperienceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: experiences }))
}

/// POST /api/v1/experiences
pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CreateExperience>,
) -> AppResult<(StatusCode, Json<Experience>)> {
    input.validate()?;
    let experience = ExperienceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(experience)))
}

/// PUT /api/v1/experiences/{id}
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExperience>,
) -> AppResult<Json<Experience>> {
    input.validate()?;
    let experience = ExperienceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Experience",
            id,
        }))?;
    Ok(Json(experience))
}

/// DELETE /api/v1/experiences/{id}
pub async fn delete(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ExperienceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Experience",
            id,
        }))
    }
}
