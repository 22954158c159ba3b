//! Route definitions for the `/certificates` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::certificate;
use crate::state::AppState;

/// Routes mounted at `/certificates`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(certificate::list).post(certificate::create))
        .route("/{id}", put(certificate::update).delete(certificate::delete))
}
