//! Handlers for the `/certificates` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::certificate::{Certificate, CreateCertificate, UpdateCertificate};
use folio_db::repositories::CertificateRepo;
use validator::Validate;

use super::check_optional_image;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/certificates
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Certificate>>>> {
    let certificates = CertificateRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: certificates }))
}

/// POST /api/v1/certificates
pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CreateCertificate>,
) -> AppResult<(StatusCode, Json<Certificate>)> {
    input.validate()?;
    check_optional_image(input.image.as_deref(), state.config.max_image_bytes)?;
    let certificate = CertificateRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(certificate)))
}

/// PUT /api/v1/certificates/{id}
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCertificate>,
) -> AppResult<Json<Certificate>> {
    input.validate()?;
    check_optional_image(input.image.as_deref(), state.config.max_image_bytes)?;
    let certificate = CertificateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Certificate",
            id,
        }))?;
    Ok(Json(certificate))
}

/// DELETE /api/v1/certificates/{id}
pub async fn delete(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CertificateRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Certificate",
            id,
        }))
    }
}
