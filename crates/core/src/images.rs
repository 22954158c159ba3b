//! Inline work images.
//!
//! Images are uploaded as `data:<mime>;base64,<payload>` URIs and stored as
//! separate records with a contiguous `sort_order`. This module validates
//! the payloads and computes the order bookkeeping; persistence lives in the
//! db crate.

use std::collections::HashSet;
use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageFormat, ImageReader};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default upper bound for a decoded image payload (2 MiB).
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Mime types accepted for inline images.
pub const ALLOWED_IMAGE_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp", "image/gif"];

// ---------------------------------------------------------------------------
// Payload validation
// ---------------------------------------------------------------------------

/// Metadata extracted from a validated data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
    /// Size of the decoded payload.
    pub byte_len: usize,
}

/// Split a data URI into its mime type and base64 payload.
fn split_data_uri(uri: &str) -> Result<(&str, &str), CoreError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| CoreError::InvalidImage("Expected a data: URI".into()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| CoreError::InvalidImage("Data URI has no payload".into()))?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| CoreError::InvalidImage("Data URI must be base64-encoded".into()))?;
    Ok((mime_type, payload))
}

/// Validate an inline image and read its dimensions.
///
/// Checks, in order: data URI syntax, allowed mime type, base64 decoding,
/// decoded size against `max_bytes`, and that the image header matches the
/// declared format. Only the header is parsed; pixels are never decoded.
pub fn inspect_data_uri(uri: &str, max_bytes: usize) -> Result<ImageInfo, CoreError> {
    let (mime_type, payload) = split_data_uri(uri)?;

    if !ALLOWED_IMAGE_MIME_TYPES.contains(&mime_type) {
        return Err(CoreError::InvalidImage(format!(
            "Unsupported image type '{mime_type}'. Must be one of: {ALLOWED_IMAGE_MIME_TYPES:?}"
        )));
    }

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| CoreError::InvalidImage(format!("Payload is not valid base64: {e}")))?;

    if bytes.is_empty() {
        return Err(CoreError::InvalidImage("Image payload is empty".into()));
    }
    if bytes.len() > max_bytes {
        return Err(CoreError::InvalidImage(format!(
            "Image is {} bytes; the limit is {max_bytes}",
            bytes.len()
        )));
    }

    let declared = ImageFormat::from_mime_type(mime_type)
        .ok_or_else(|| CoreError::InvalidImage(format!("Unknown image type '{mime_type}'")))?;

    let reader = ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .map_err(|e| CoreError::InvalidImage(format!("Unreadable image: {e}")))?;

    match reader.format() {
        Some(actual) if actual == declared => {}
        Some(actual) => {
            return Err(CoreError::InvalidImage(format!(
                "Declared {mime_type} but payload is {}",
                actual.to_mime_type()
            )));
        }
        None => return Err(CoreError::InvalidImage("Unrecognised image data".into())),
    }

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| CoreError::InvalidImage(format!("Corrupt image header: {e}")))?;

    Ok(ImageInfo {
        mime_type: mime_type.to_string(),
        width,
        height,
        byte_len: bytes.len(),
    })
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// `sort_order` for an image appended to a work that already has
/// `existing` images.
pub fn next_sort_order(existing: usize) -> i32 {
    i32::try_from(existing).unwrap_or(i32::MAX)
}

/// Assign contiguous `0..n-1` sort orders to ids in their display order.
///
/// ```
/// use folio_core::images::resequence;
///
/// assert_eq!(resequence(&[12, 7, 30]), vec![(12, 0), (7, 1), (30, 2)]);
/// ```
pub fn resequence(ids_in_order: &[DbId]) -> Vec<(DbId, i32)> {
    ids_in_order
        .iter()
        .zip(0..)
        .map(|(&id, order)| (id, order))
        .collect()
}

/// Check that `requested` is a permutation of `current`.
pub fn validate_reorder(current: &[DbId], requested: &[DbId]) -> Result<(), CoreError> {
    let current_set: HashSet<DbId> = current.iter().copied().collect();
    let mut seen = HashSet::with_capacity(requested.len());

    for id in requested {
        if !current_set.contains(id) {
            return Err(CoreError::Validation(format!(
                "Image {id} does not belong to this work"
            )));
        }
        if !seen.insert(*id) {
            return Err(CoreError::Validation(format!("Image {id} is listed twice")));
        }
    }

    if seen.len() != current_set.len() {
        return Err(CoreError::Validation(format!(
            "Reorder must list all {} images of the work, got {}",
            current_set.len(),
            seen.len()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    /// 1x1 transparent PNG.
    const PNG_1X1: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    fn png_uri() -> String {
        format!("data:image/png;base64,{PNG_1X1}")
    }

    #[test]
    fn valid_png_is_inspected() {
        let info = inspect_data_uri(&png_uri(), DEFAULT_MAX_IMAGE_BYTES).unwrap();
        assert_eq!(info.mime_type, "image/png");
        assert_eq!((info.width, info.height), (1, 1));
        assert!(info.byte_len > 0);
    }

    #[test]
    fn non_data_uri_is_rejected() {
        assert_matches!(
            inspect_data_uri("https://example.com/a.png", DEFAULT_MAX_IMAGE_BYTES),
            Err(CoreError::InvalidImage(_))
        );
        assert_matches!(
            inspect_data_uri("data:image/png;base64", DEFAULT_MAX_IMAGE_BYTES),
            Err(CoreError::InvalidImage(_))
        );
        assert_matches!(
            inspect_data_uri(&format!("data:image/png,{PNG_1X1}"), DEFAULT_MAX_IMAGE_BYTES),
            Err(CoreError::InvalidImage(_))
        );
    }

    #[test]
    fn unsupported_mime_is_rejected() {
        let uri = format!("data:image/svg+xml;base64,{PNG_1X1}");
        let err = inspect_data_uri(&uri, DEFAULT_MAX_IMAGE_BYTES).unwrap_err();
        assert!(err.to_string().contains("Unsupported image type"));
    }

    #[test]
    fn bad_base64_is_rejected() {
        assert_matches!(
            inspect_data_uri("data:image/png;base64,@@@not-base64@@@", DEFAULT_MAX_IMAGE_BYTES),
            Err(CoreError::InvalidImage(_))
        );
        assert_matches!(
            inspect_data_uri("data:image/png;base64,", DEFAULT_MAX_IMAGE_BYTES),
            Err(CoreError::InvalidImage(_))
        );
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let err = inspect_data_uri(&png_uri(), 10).unwrap_err();
        assert!(err.to_string().contains("limit is 10"));
    }

    #[test]
    fn mismatched_format_is_rejected() {
        let uri = format!("data:image/jpeg;base64,{PNG_1X1}");
        let err = inspect_data_uri(&uri, DEFAULT_MAX_IMAGE_BYTES).unwrap_err();
        assert!(err.to_string().contains("payload is image/png"));
    }

    #[test]
    fn resequence_is_contiguous() {
        assert!(resequence(&[]).is_empty());
        let orders: Vec<i32> = resequence(&[5, 3, 9, 1]).into_iter().map(|(_, o)| o).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);
    }

    #[test]
    fn next_order_is_count() {
        assert_eq!(next_sort_order(0), 0);
        assert_eq!(next_sort_order(4), 4);
    }

    #[test]
    fn reorder_must_be_a_permutation() {
        assert!(validate_reorder(&[1, 2, 3], &[3, 1, 2]).is_ok());
        assert!(validate_reorder(&[], &[]).is_ok());
        assert_matches!(validate_reorder(&[1, 2, 3], &[1, 2]), Err(CoreError::Validation(_)));
        assert_matches!(validate_reorder(&[1, 2], &[1, 1]), Err(CoreError::Validation(_)));
        assert_matches!(validate_reorder(&[1, 2], &[1, 4]), Err(CoreError::Validation(_)));
    }
}
