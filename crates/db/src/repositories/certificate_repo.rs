//! Repository for the `certificates` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::certificate::{Certificate, CreateCertificate, UpdateCertificate};

const COLUMNS: &str =
    "id, title, issuer, issued_on, credential_url, image, sort_order, created_at, updated_at";

pub struct CertificateRepo;

impl CertificateRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCertificate,
    ) -> Result<Certificate, sqlx::Error> {
        let query = format!(
            "INSERT INTO certificates (title, issuer, issued_on, credential_url, image, sort_order) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certificate>(&query)
            .bind(&input.title)
            .bind(&input.issuer)
            .bind(&input.issued_on)
            .bind(&input.credential_url)
            .bind(&input.image)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Certificate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM certificates WHERE id = $1");
        sqlx::query_as::<_, Certificate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Certificate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM certificates ORDER BY sort_order, id");
        sqlx::query_as::<_, Certificate>(&query)
            .fetch_all(pool)
            .await
    }

    /// Merge-style update; returns `None` if the certificate does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCertificate,
    ) -> Result<Option<Certificate>, sqlx::Error> {
        let query = format!(
            "UPDATE certificates SET \
                title = COALESCE($2, title), \
                issuer = COALESCE($3, issuer), \
                issued_on = COALESCE($4, issued_on), \
                credential_url = COALESCE($5, credential_url), \
                image = COALESCE($6, image), \
                sort_order = COALESCE($7, sort_order), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certificate>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.issuer)
            .bind(&input.issued_on)
            .bind(&input.credential_url)
            .bind(&input.image)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
