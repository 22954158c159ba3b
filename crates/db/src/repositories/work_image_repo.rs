//! Repository for the `work_images` table.
//!
//! Every mutation runs in a transaction that first locks the parent work
//! row, so concurrent uploads and deletes on the same work serialize and
//! `sort_order` stays contiguous.

use folio_core::error::CoreError;
use folio_core::images::{next_sort_order, resequence, validate_reorder};
use folio_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::work_image::{NewWorkImage, WorkImage};

const COLUMNS: &str = "id, work_id, data_uri, mime_type, width, height, sort_order, created_at";

/// Result of [`WorkImageRepo::reorder`].
#[derive(Debug)]
pub enum ReorderOutcome {
    /// The new order was stored; images in display order.
    Reordered(Vec<WorkImage>),
    WorkNotFound,
    /// The requested ids are not a permutation of the work's images.
    Rejected(CoreError),
}

pub struct WorkImageRepo;

impl WorkImageRepo {
    /// List a work's images in display order.
    pub async fn list_by_work(pool: &PgPool, work_id: DbId) -> Result<Vec<WorkImage>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM work_images WHERE work_id = $1 ORDER BY sort_order");
        sqlx::query_as::<_, WorkImage>(&query)
            .bind(work_id)
            .fetch_all(pool)
            .await
    }

    /// Image ids of a work in display order.
    pub async fn list_ids(pool: &PgPool, work_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM work_images WHERE work_id = $1 ORDER BY sort_order")
            .bind(work_id)
            .fetch_all(pool)
            .await
    }

    /// Append an image after the work's existing ones.
    ///
    /// Returns `None` if the work does not exist.
    pub async fn append(
        pool: &PgPool,
        work_id: DbId,
        input: &NewWorkImage,
    ) -> Result<Option<WorkImage>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !lock_work(&mut tx, work_id).await? {
            return Ok(None);
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM work_images WHERE work_id = $1")
            .bind(work_id)
            .fetch_one(&mut *tx)
            .await?;
        let sort_order = next_sort_order(usize::try_from(count).unwrap_or_default());

        let query = format!(
            "INSERT INTO work_images (work_id, data_uri, mime_type, width, height, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let image = sqlx::query_as::<_, WorkImage>(&query)
            .bind(work_id)
            .bind(&input.data_uri)
            .bind(&input.mime_type)
            .bind(input.width)
            .bind(input.height)
            .bind(sort_order)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(image))
    }

    /// Remove one image and close the gap it leaves in `sort_order`.
    ///
    /// Returns `true` if the image existed on that work.
    pub async fn delete(pool: &PgPool, work_id: DbId, image_id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !lock_work(&mut tx, work_id).await? {
            return Ok(false);
        }

        let result = sqlx::query("DELETE FROM work_images WHERE id = $1 AND work_id = $2")
            .bind(image_id)
            .bind(work_id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(false);
        }

        let remaining: Vec<DbId> =
            sqlx::query_scalar("SELECT id FROM work_images WHERE work_id = $1 ORDER BY sort_order")
                .bind(work_id)
                .fetch_all(&mut *tx)
                .await?;
        apply_order(&mut tx, work_id, &remaining).await?;

        tx.commit().await?;
        tracing::debug!(work_id, image_id, remaining = remaining.len(), "Deleted work image");
        Ok(true)
    }

    /// Store a new display order.
    ///
    /// `image_ids` is checked against the work's current images while the
    /// work is locked, so a concurrent upload or delete cannot slip in
    /// between the check and the update.
    pub async fn reorder(
        pool: &PgPool,
        work_id: DbId,
        image_ids: &[DbId],
    ) -> Result<ReorderOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !lock_work(&mut tx, work_id).await? {
            return Ok(ReorderOutcome::WorkNotFound);
        }

        let current: Vec<DbId> = sqlx::query_scalar(
            "SELECT id FROM work_images WHERE work_id = $1 ORDER BY sort_order FOR UPDATE",
        )
        .bind(work_id)
        .fetch_all(&mut *tx)
        .await?;

        if let Err(err) = validate_reorder(&current, image_ids) {
            // Dropping the transaction rolls it back.
            return Ok(ReorderOutcome::Rejected(err));
        }

        apply_order(&mut tx, work_id, image_ids).await?;

        let query =
            format!("SELECT {COLUMNS} FROM work_images WHERE work_id = $1 ORDER BY sort_order");
        let images = sqlx::query_as::<_, WorkImage>(&query)
            .bind(work_id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ReorderOutcome::Reordered(images))
    }
}

/// Lock the parent work row. Returns `false` if the work does not exist.
async fn lock_work(conn: &mut PgConnection, work_id: DbId) -> Result<bool, sqlx::Error> {
    let found: Option<DbId> = sqlx::query_scalar("SELECT id FROM works WHERE id = $1 FOR UPDATE")
        .bind(work_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found.is_some())
}

async fn apply_order(
    conn: &mut PgConnection,
    work_id: DbId,
    ids_in_order: &[DbId],
) -> Result<(), sqlx::Error> {
    for (id, sort_order) in resequence(ids_in_order) {
        sqlx::query("UPDATE work_images SET sort_order = $1 WHERE id = $2 AND work_id = $3")
            .bind(sort_order)
            .bind(id)
            .bind(work_id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}
