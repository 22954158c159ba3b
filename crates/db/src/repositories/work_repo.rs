//! Repository for the `works` table.

use std::collections::HashMap;

use folio_core::types::DbId;
use folio_core::work::WorkRecord;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::work::{CreateWork, UpdateWork, Work};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, duration, category, year, priority, languages, \
                       project_url, source_url, created_at, updated_at";

/// Provides CRUD operations for works, plus the denormalized reads the
/// catalog needs.
pub struct WorkRepo;

impl WorkRepo {
    /// Insert a new work, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateWork) -> Result<Work, sqlx::Error> {
        let query = format!(
            "INSERT INTO works \
                (title, description, duration, category, year, priority, languages, project_url, source_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.duration)
            .bind(&input.category)
            .bind(&input.year)
            .bind(&input.priority)
            .bind(Json(&input.languages))
            .bind(&input.project_url)
            .bind(&input.source_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works WHERE id = $1");
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all works in creation order. Display order is decided by the
    /// catalog, not here.
    pub async fn list(pool: &PgPool) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works ORDER BY id");
        sqlx::query_as::<_, Work>(&query).fetch_all(pool).await
    }

    /// Merge-style update: only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWork,
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!(
            "UPDATE works SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                duration = COALESCE($4, duration), \
                category = COALESCE($5, category), \
                year = COALESCE($6, year), \
                priority = COALESCE($7, priority), \
                languages = COALESCE($8, languages), \
                project_url = COALESCE($9, project_url), \
                source_url = COALESCE($10, source_url), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.duration)
            .bind(&input.category)
            .bind(&input.year)
            .bind(&input.priority)
            .bind(input.languages.as_ref().map(Json))
            .bind(&input.project_url)
            .bind(&input.source_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a work together with its images, in one transaction.
    ///
    /// Returns `true` if the work existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let images = sqlx::query("DELETE FROM work_images WHERE work_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM works WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            work_id = id,
            images_deleted = images.rows_affected(),
            "Deleted work"
        );
        Ok(result.rows_affected() > 0)
    }

    /// Load every work with its image data URIs in display order.
    pub async fn list_records(pool: &PgPool) -> Result<Vec<WorkRecord>, sqlx::Error> {
        let works = Self::list(pool).await?;

        let rows: Vec<(DbId, String)> = sqlx::query_as(
            "SELECT work_id, data_uri FROM work_images ORDER BY work_id, sort_order",
        )
        .fetch_all(pool)
        .await?;

        let mut images: HashMap<DbId, Vec<String>> = HashMap::new();
        for (work_id, data_uri) in rows {
            images.entry(work_id).or_default().push(data_uri);
        }

        Ok(works
            .into_iter()
            .map(|w| {
                let work_images = images.remove(&w.id).unwrap_or_default();
                w.into_record(work_images)
            })
            .collect())
    }

    /// Load one work with its images, or `None` if it does not exist.
    pub async fn find_record(pool: &PgPool, id: DbId) -> Result<Option<WorkRecord>, sqlx::Error> {
        let Some(work) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let images: Vec<String> = sqlx::query_scalar(
            "SELECT data_uri FROM work_images WHERE work_id = $1 ORDER BY sort_order",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(work.into_record(images)))
    }
}
