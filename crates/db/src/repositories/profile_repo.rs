//! Repository for the singleton `profile` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::profile::{Profile, UpsertProfile};

const COLUMNS: &str = "full_name, headline, about, email, location, avatar_image, \
                       resume_url, links, created_at, updated_at";

pub struct ProfileRepo;

impl ProfileRepo {
    /// Fetch the profile, or `None` before it has been saved for the first time.
    pub async fn get(pool: &PgPool) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profile WHERE id = 1");
        sqlx::query_as::<_, Profile>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Insert or fully replace the profile.
    pub async fn upsert(pool: &PgPool, input: &UpsertProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profile \
                (id, full_name, headline, about, email, location, avatar_image, resume_url, links) \
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (id) DO UPDATE SET \
                full_name = EXCLUDED.full_name, \
                headline = EXCLUDED.headline, \
                about = EXCLUDED.about, \
                email = EXCLUDED.email, \
                location = EXCLUDED.location, \
                avatar_image = EXCLUDED.avatar_image, \
                resume_url = EXCLUDED.resume_url, \
                links = EXCLUDED.links, \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.full_name)
            .bind(&input.headline)
            .bind(&input.about)
            .bind(&input.email)
            .bind(&input.location)
            .bind(&input.avatar_image)
            .bind(&input.resume_url)
            .bind(Json(&input.links))
            .fetch_one(pool)
            .await
    }
}
