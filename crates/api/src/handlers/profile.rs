//! Handlers for the `/profile` resource.

use axum::extract::State;
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::profile::{Profile, UpsertProfile};
use folio_db::repositories::ProfileRepo;
use validator::Validate;

use super::check_optional_image;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::get(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: 1,
        }))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
pub async fn upsert(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertProfile>,
) -> AppResult<Json<Profile>> {
    input.validate()?;
    check_optional_image(input.avatar_image.as_deref(), state.config.max_image_bytes)?;

    let profile = ProfileRepo::upsert(&state.pool, &input).await?;
    tracing::info!(admin = %admin.username, "Profile saved");
    Ok(Json(profile))
}
