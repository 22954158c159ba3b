//! HTTP-level integration tests for work CRUD and work images.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete, delete_auth, get, post_json_auth, put_json_auth,
    PNG_DATA_URI,
};
use serde_json::{json, Value};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_work(pool: &PgPool, body: Value) -> Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/works", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn upload_image(pool: &PgPool, work_id: i64) -> Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/works/{work_id}/images"),
        json!({ "data_uri": PNG_DATA_URI }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Work CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_work_returns_201(pool: PgPool) {
    let json = create_work(
        &pool,
        json!({
            "title": "Inventory Kiosk",
            "category": "Web",
            "year": 2022,
            "priority": "1",
            "languages": ["java", {"name": "react", "icon": "react.svg"}],
        }),
    )
    .await;

    assert!(json["id"].is_number());
    assert_eq!(json["title"], "Inventory Kiosk");
    assert_eq!(json["year"], "2022");
    assert_eq!(json["priority"], "1");
    assert_eq!(json["languages"][1]["name"], "react");
    assert_eq!(json["images"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_work_with_blank_title_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/api/v1/works", json!({ "title": "   " }), &admin_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_work_by_id(pool: PgPool) {
    let created = create_work(&pool, json!({ "title": "Get Me" })).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/works/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Get Me");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_work_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/works/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Work with id 999999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_works_in_creation_order(pool: PgPool) {
    let first = create_work(&pool, json!({ "title": "First" })).await;
    let second = create_work(&pool, json!({ "title": "Second" })).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/works").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        ids(&json["data"]),
        vec![first["id"].as_i64().unwrap(), second["id"].as_i64().unwrap()]
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_work_merges_fields(pool: PgPool) {
    let created = create_work(
        &pool,
        json!({ "title": "Old", "category": "Web", "languages": ["java"] }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/works/{id}"),
        json!({ "title": "New", "priority": 3 }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "New");
    assert_eq!(json["priority"], "3");
    assert_eq!(json["category"], "Web");
    assert_eq!(json["languages"], json!(["java"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_work_to_blank_title_returns_400(pool: PgPool) {
    let created = create_work(&pool, json!({ "title": "Keep" })).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/works/{id}"),
        json!({ "title": "" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_work_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/works/424242",
        json!({ "title": "Ghost" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_work_removes_it_and_its_images(pool: PgPool) {
    let created = create_work(&pool, json!({ "title": "Doomed" })).await;
    let id = created["id"].as_i64().unwrap();
    upload_image(&pool, id).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/works/{id}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/works/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM work_images")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_without_token_returns_401(pool: PgPool) {
    let created = create_work(&pool, json!({ "title": "Protected" })).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/works/{id}")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Work images
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_image_records_dimensions(pool: PgPool) {
    let work = create_work(&pool, json!({ "title": "Gallery" })).await;
    let work_id = work["id"].as_i64().unwrap();

    let image = upload_image(&pool, work_id).await;
    assert_eq!(image["work_id"], work_id);
    assert_eq!(image["mime_type"], "image/png");
    assert_eq!(image["width"], 1);
    assert_eq!(image["height"], 1);
    assert_eq!(image["sort_order"], 0);

    let second = upload_image(&pool, work_id).await;
    assert_eq!(second["sort_order"], 1);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/works/{work_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["images"], json!([PNG_DATA_URI, PNG_DATA_URI]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_invalid_image_returns_422(pool: PgPool) {
    let work = create_work(&pool, json!({ "title": "Gallery" })).await;
    let work_id = work["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/works/{work_id}/images"),
        json!({ "data_uri": "data:image/svg+xml;base64,PHN2Zy8+" }),
        &admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_IMAGE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_to_missing_work_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/works/999999/images",
        json!({ "data_uri": PNG_DATA_URI }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_image_resequences_remaining(pool: PgPool) {
    let work = create_work(&pool, json!({ "title": "Gallery" })).await;
    let work_id = work["id"].as_i64().unwrap();
    let a = upload_image(&pool, work_id).await["id"].as_i64().unwrap();
    let b = upload_image(&pool, work_id).await["id"].as_i64().unwrap();
    let c = upload_image(&pool, work_id).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/v1/works/{work_id}/images/{b}"),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/works/{work_id}/images")).await;
    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec![a, c]);
    assert_eq!(json["data"][1]["sort_order"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_image_of_other_work_returns_404(pool: PgPool) {
    let first = create_work(&pool, json!({ "title": "One" })).await["id"].as_i64().unwrap();
    let second = create_work(&pool, json!({ "title": "Two" })).await["id"].as_i64().unwrap();
    let image = upload_image(&pool, first).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/api/v1/works/{second}/images/{image}"),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reorder_images(pool: PgPool) {
    let work_id = create_work(&pool, json!({ "title": "Gallery" })).await["id"]
        .as_i64()
        .unwrap();
    let a = upload_image(&pool, work_id).await["id"].as_i64().unwrap();
    let b = upload_image(&pool, work_id).await["id"].as_i64().unwrap();
    let c = upload_image(&pool, work_id).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/works/{work_id}/images/order"),
        json!({ "image_ids": [c, a, b] }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json["data"]), vec![c, a, b]);
    assert_eq!(json["data"][0]["sort_order"], 0);
    assert_eq!(json["data"][2]["sort_order"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reorder_with_incomplete_list_returns_400(pool: PgPool) {
    let work_id = create_work(&pool, json!({ "title": "Gallery" })).await["id"]
        .as_i64()
        .unwrap();
    let a = upload_image(&pool, work_id).await["id"].as_i64().unwrap();
    upload_image(&pool, work_id).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/works/{work_id}/images/order"),
        json!({ "image_ids": [a] }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
