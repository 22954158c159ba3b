use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    folio_db::health_check(&pool).await.unwrap();

    let tables = [
        "profile",
        "skills",
        "certificates",
        "experiences",
        "testimonials",
        "works",
        "work_images",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The profile table holds at most one row.
#[sqlx::test(migrations = "./migrations")]
async fn test_profile_is_singleton(pool: PgPool) {
    sqlx::query("INSERT INTO profile (full_name) VALUES ('Jane')")
        .execute(&pool)
        .await
        .unwrap();

    let second = sqlx::query("INSERT INTO profile (id, full_name) VALUES (2, 'John')")
        .execute(&pool)
        .await;
    assert!(second.is_err(), "only id = 1 is allowed");
}
