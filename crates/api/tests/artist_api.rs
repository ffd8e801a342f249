//! HTTP-level integration tests for the `/artists` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_artist, create_song, delete, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_artist_returns_201_with_location(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/artists",
        json!({"name": "Bill Evans", "age": 51, "bio": "Jazz pianist"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get("location")
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string();

    let json = body_json(response).await;
    let id = json["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(location, format!("/artists/{id}"));
    assert_eq!(json["name"], "Bill Evans");
    assert_eq!(json["age"], 51);
    assert_eq!(json["bio"], "Jazz pianist");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_artist_accepts_pascal_case_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/artists",
        json!({"Name": "Nina Simone", "Age": 70, "Bio": "High Priestess of Soul"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Nina Simone");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_artist_with_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/artists", json!({"name": "", "age": 1, "bio": "x"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/artists").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_artist_ids_are_distinct(pool: PgPool) {
    let a = create_artist(&pool, "A").await;
    let b = create_artist(&pool, "B").await;
    let c = create_artist(&pool, "C").await;

    assert!(a > 0 && b > 0 && c > 0);
    assert!(a != b && b != c && a != c);

    let app = common::build_test_app(pool);
    let response = get(app, "/artists").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_artist_includes_songs(pool: PgPool) {
    let artist_id = create_artist(&pool, "Monk").await;
    let song_a = create_song(&pool, artist_id, "Round Midnight").await;
    let song_b = create_song(&pool, artist_id, "Blue Monk").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/artists/{artist_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], artist_id);
    assert_eq!(json["name"], "Monk");
    assert_eq!(json["song_count"], 2);
    let songs = json["song"].as_array().unwrap();
    let ids: Vec<i64> = songs.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![song_a, song_b]);
    assert_eq!(songs[0]["title"], "Round Midnight");
    assert_eq!(songs[0]["length"], 200);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_artist_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/artists/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_artist_changes_only_supplied_fields(pool: PgPool) {
    let id = create_artist(&pool, "Original").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, &format!("/artists/{id}"), json!({"age": 0})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["age"], 0);
    assert_eq!(json["name"], "Original");
    assert_eq!(json["bio"], "About Original");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_artist_with_empty_bio_returns_400_and_keeps_row(pool: PgPool) {
    let id = create_artist(&pool, "Keep").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, &format!("/artists/{id}"), json!({"bio": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/artists/{id}")).await).await;
    assert_eq!(json["bio"], "About Keep");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_nonexistent_artist_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/artists/999999", json!({"name": "Ghost"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_artist_returns_204_then_404(pool: PgPool) {
    let id = create_artist(&pool, "Delete Me").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/artists/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/artists/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/artists/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_artist_cascades_to_songs(pool: PgPool) {
    let artist_id = create_artist(&pool, "Brubeck").await;
    let song_id = create_song(&pool, artist_id, "Take Five").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/artists/{artist_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/songs/{song_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
