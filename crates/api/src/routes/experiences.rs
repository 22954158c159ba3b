//! Route definitions for the `/experiences` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::experience;
use crate::state::AppState;

/// Routes mounted at `/experiences`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(experience::list).post(experience::create))
        .route("/{id}", put(experience::update).delete(experience::delete))
}
