//! Handler for the public work catalog.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_core::catalog::compute_catalog_view;
use folio_db::repositories::WorkRepo;

use crate::error::AppResult;
use crate::query::CatalogParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/works/catalog?category=&technology=&sort=&page=
///
/// Filters, sorts and paginates all works in one pass. The returned `page`
/// is clamped into the valid range, so clients should adopt it as their
/// current page.
pub async fn view(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> AppResult<Response> {
    let works = WorkRepo::list_records(&state.pool).await?;
    let query = params.into_query(state.config.catalog_page_size);

    // The view borrows `works`, so serialize it before they go out of scope.
    let view = compute_catalog_view(&works, &query);
    tracing::debug!(
        total = view.total_count,
        page = view.page,
        total_pages = view.total_pages,
        "Catalog view computed"
    );
    Ok(Json(DataResponse { data: view }).into_response())
}
