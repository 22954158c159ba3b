//! Route definitions for the `/works` resource.
//!
//! Also nests image routes under `/works/{work_id}/images`.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{catalog, work, work_image};
use crate::state::AppState;

/// Routes mounted at `/works`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /catalog                           -> catalog::view
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{work_id}/images                  -> list
/// POST   /{work_id}/images                  -> upload
/// PUT    /{work_id}/images/order            -> reorder
/// DELETE /{work_id}/images/{image_id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    let image_routes = Router::new()
        .route("/", get(work_image::list).post(work_image::upload))
        .route("/order", put(work_image::reorder))
        .route("/{image_id}", delete(work_image::delete));

    Router::new()
        .route("/", get(work::list).post(work::create))
        .route("/catalog", get(catalog::view))
        .route(
            "/{id}",
            get(work::get_by_id).put(work::update).delete(work::delete),
        )
        .nest("/{work_id}/images", image_routes)
}
