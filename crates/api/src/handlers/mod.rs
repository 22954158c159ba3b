//! Request handlers, one module per resource.
//!
//! Handlers delegate to the corresponding repository in `folio_db`, run
//! domain checks from `folio_core`, and map errors via [`AppError`].
//! Mutating handlers take an [`AdminUser`](crate::middleware::auth::AdminUser).

pub mod auth;
pub mod catalog;
pub mod certificate;
pub mod experience;
pub mod profile;
pub mod skill;
pub mod testimonial;
pub mod work;
pub mod work_image;

use folio_core::images::{inspect_data_uri, ImageInfo};

use crate::error::AppResult;

/// Validate an optional inline image field (avatar, certificate scan, ...).
pub(crate) fn check_optional_image(
    data_uri: Option<&str>,
    max_bytes: usize,
) -> AppResult<Option<ImageInfo>> {
    match data_uri {
        None | Some("") => Ok(None),
        Some(uri) => Ok(Some(inspect_data_uri(uri, max_bytes)?)),
    }
}
