pub mod auth;
pub mod certificates;
pub mod experiences;
pub mod health;
pub mod profile;
pub mod skills;
pub mod testimonials;
pub mod works;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
///
/// /profile                                         get (public), upsert (admin)
///
/// /skills                                          list (public), create (admin)
/// /skills/{id}                                     update, delete (admin)
/// /certificates                                    list (public), create (admin)
/// /certificates/{id}                               update, delete (admin)
/// /experiences                                     list (public), create (admin)
/// /experiences/{id}                                update, delete (admin)
/// /testimonials                                    list (public), create (admin)
/// /testimonials/{id}                               update, delete (admin)
///
/// /works                                           list (public), create (admin)
/// /works/catalog                                   filtered, sorted, paged view (public)
/// /works/{id}                                      get (public), update, delete (admin)
/// /works/{work_id}/images                          list (public), upload (admin)
/// /works/{work_id}/images/order                    reorder (admin)
/// /works/{work_id}/images/{image_id}               delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        .nest("/skills", skills::router())
        .nest("/certificates", certificates::router())
        .nest("/experiences", experiences::router())
        .nest("/testimonials", testimonials::router())
        .nest("/works", works::router())
}
