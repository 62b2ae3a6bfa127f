//! API Integration Tests for the adoption service
//!
//! Tests the REST API endpoints using axum-test against isolated
//! in-memory stores and temporary upload directories.

mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use common::{
    animal_count, build_test_app, build_test_app_with, build_test_app_with_pool, png_bytes,
    PUBLIC_URL,
};
use pet_adoption_api::db::DbPool;
use serde_json::{json, Value};

// ============================================================================
// Status Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = build_test_app().await;

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["service"], "pet-adoption-api");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_root_returns_message() {
    let app = build_test_app().await;

    let response = app.server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["message"].is_string());
}

// ============================================================================
// Animals Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_list_animals_returns_seed() {
    let app = build_test_app().await;

    let response = app.server.get("/api/animals").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    let names: Vec<&str> = body["animals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Rex", "Luna", "Pompom"]);
    assert_eq!(
        body["animals"][0]["photos"][0],
        format!("{}/public/uploads/rex.jpg", PUBLIC_URL)
    );
}

#[tokio::test]
async fn test_get_animal() {
    let app = build_test_app().await;

    let response = app.server.get("/api/animals/2").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["animal"]["name"], "Luna");
    assert_eq!(body["animal"]["type"], "Gato");
}

#[tokio::test]
async fn test_unknown_animal_is_not_found_for_every_verb() {
    let app = build_test_app().await;

    for id in ["999", "0", "not-a-number"] {
        let path = format!("/api/animals/{}", id);

        let response = app.server.get(&path).await;
        response.assert_status_not_found();
        assert_eq!(response.json::<Value>()["success"], false);

        let response = app.server.put(&path).json(&json!({"name": "X"})).await;
        response.assert_status_not_found();
        assert_eq!(response.json::<Value>()["success"], false);

        let response = app.server.delete(&path).await;
        response.assert_status_not_found();
        assert_eq!(response.json::<Value>()["success"], false);
    }

    assert_eq!(animal_count(&app.server).await, 3);
}

#[tokio::test]
async fn test_create_animal_without_photos() {
    let app = build_test_app().await;

    let form = MultipartForm::new()
        .add_text("name", "Rex")
        .add_text("type", "Cachorro")
        .add_text("age", "2");
    let response = app.server.post("/api/animals").multipart(form).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["pet"]["name"], "Rex");
    assert_eq!(body["pet"]["age"], 2);
    assert_eq!(body["pet"]["photos"], json!([]));
    assert_eq!(body["pet"]["status"], "Disponível");
    assert_eq!(body["pet"]["matches"], 0);
    assert_eq!(animal_count(&app.server).await, 4);
}

#[tokio::test]
async fn test_create_animal_from_json_body() {
    let app = build_test_app().await;

    let response = app
        .server
        .post("/api/animals")
        .json(&json!({
            "name": "Bidu",
            "type": "Cachorro",
            "age": 4,
            "vaccinated": true,
            "neutered": "false",
            "temperament": "Calmo, Dócil",
            "needs": ["Passeios"]
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let pet = &response.json::<Value>()["pet"];
    assert_eq!(pet["age"], 4);
    assert_eq!(pet["vaccinated"], true);
    assert_eq!(pet["neutered"], false);
    assert_eq!(pet["temperament"], json!(["Calmo", "Dócil"]));
    assert_eq!(pet["needs"], json!(["Passeios"]));
}

#[tokio::test]
async fn test_create_and_update_from_urlencoded_body() {
    let app = build_test_app().await;

    let response = app
        .server
        .post("/api/animals")
        .form(&[
            ("name", "Thor"),
            ("type", "Cachorro"),
            ("age", "5"),
            ("castrated", "yes"),
            ("temperament", "Leal, Ativo"),
        ])
        .await;

    response.assert_status(StatusCode::CREATED);
    let pet = response.json::<Value>()["pet"].clone();
    assert_eq!(pet["name"], "Thor");
    assert_eq!(pet["age"], 5);
    assert_eq!(pet["neutered"], true);
    assert_eq!(pet["temperament"], json!(["Leal", "Ativo"]));

    let id = pet["id"].as_u64().unwrap();
    let response = app
        .server
        .put(&format!("/api/animals/{}", id))
        .form(&[("existingPhotos", "[]"), ("size", "Grande")])
        .await;

    response.assert_status_ok();
    let pet = &response.json::<Value>()["pet"];
    assert_eq!(pet["photos"], json!([]));
    assert_eq!(pet["size"], "Grande");
    assert_eq!(pet["name"], "Thor");
}

#[tokio::test]
async fn test_oversized_body_is_rejected_as_json() {
    let app = build_test_app_with(DbPool::seeded(PUBLIC_URL), |config| {
        config.storage.max_upload_size = 16;
    })
    .await;

    // Larger than every photo slot plus the form headroom
    let description = "x".repeat(2 * 1024 * 1024);
    let response = app
        .server
        .post("/api/animals")
        .json(&json!({"name": "Grandão", "description": description}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert_eq!(animal_count(&app.server).await, 3);
}

#[tokio::test]
async fn test_create_animal_with_photo_serves_upload() {
    let app = build_test_app().await;

    let form = MultipartForm::new()
        .add_text("name", "Luna II")
        .add_part(
            "photos",
            Part::bytes(png_bytes())
                .file_name("luna.png")
                .mime_type("image/png"),
        );
    let response = app.server.post("/api/animals").multipart(form).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    let photos = body["pet"]["photos"].as_array().unwrap();
    assert_eq!(photos.len(), 1);

    let url = photos[0].as_str().unwrap();
    let prefix = format!("{}/public/uploads/", PUBLIC_URL);
    assert!(url.starts_with(&prefix), "unexpected url {}", url);
    assert!(url.ends_with(".png"));

    let path = url.trim_start_matches(PUBLIC_URL);
    let file = app.server.get(path).await;
    file.assert_status_ok();
    assert_eq!(file.as_bytes().to_vec(), png_bytes());
}

#[tokio::test]
async fn test_create_animal_skips_non_image_upload() {
    let app = build_test_app().await;

    let form = MultipartForm::new()
        .add_text("name", "Tom")
        .add_part(
            "photos",
            Part::bytes(b"just text".to_vec())
                .file_name("notes.txt")
                .mime_type("text/plain"),
        )
        .add_part(
            "photos",
            Part::bytes(png_bytes())
                .file_name("tom.png")
                .mime_type("image/png"),
        );
    let response = app.server.post("/api/animals").multipart(form).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["pet"]["photos"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_animal_rejects_too_many_photos() {
    let app = build_test_app().await;

    let mut form = MultipartForm::new().add_text("name", "Muitos");
    for i in 0..6 {
        form = form.add_part(
            "photos",
            Part::bytes(png_bytes())
                .file_name(format!("{}.png", i))
                .mime_type("image/png"),
        );
    }
    let response = app.server.post("/api/animals").multipart(form).await;

    response.assert_status_bad_request();
    assert_eq!(animal_count(&app.server).await, 3);
}

#[tokio::test]
async fn test_create_animal_validation_errors() {
    let app = build_test_app().await;

    // Missing name
    let response = app
        .server
        .post("/api/animals")
        .json(&json!({"type": "Gato"}))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("name"));

    // Empty list entry
    let response = app
        .server
        .post("/api/animals")
        .json(&json!({"name": "Mimi", "temperament": "Calma,,Dócil"}))
        .await;
    response.assert_status_bad_request();
    assert!(response.json::<Value>()["message"]
        .as_str()
        .unwrap()
        .contains("temperament"));

    // Non-numeric age
    let response = app
        .server
        .post("/api/animals")
        .json(&json!({"name": "Mimi", "age": "dois"}))
        .await;
    response.assert_status_bad_request();

    // Unrecognised boolean
    let response = app
        .server
        .post("/api/animals")
        .json(&json!({"name": "Mimi", "vaccinated": "talvez"}))
        .await;
    response.assert_status_bad_request();

    assert_eq!(animal_count(&app.server).await, 3);
}

#[tokio::test]
async fn test_update_with_existing_photos_round_trips() {
    let app = build_test_app().await;

    let kept = json!([
        format!("{}/public/uploads/luna.jpg", PUBLIC_URL),
        format!("{}/public/uploads/extra.jpg", PUBLIC_URL)
    ]);
    let form = MultipartForm::new().add_text("existingPhotos", kept.to_string());
    let response = app.server.put("/api/animals/2").multipart(form).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["pet"]["photos"], kept);
}

#[tokio::test]
async fn test_update_appends_uploads_after_existing_photos() {
    let app = build_test_app().await;

    let form = MultipartForm::new()
        .add_text("existingPhotos", "[]")
        .add_part(
            "photos",
            Part::bytes(png_bytes())
                .file_name("novo.png")
                .mime_type("image/png"),
        );
    let response = app.server.put("/api/animals/1").multipart(form).await;

    response.assert_status_ok();
    let photos = response.json::<Value>()["pet"]["photos"].clone();
    let photos = photos.as_array().unwrap();
    assert_eq!(photos.len(), 1);
    assert!(photos[0].as_str().unwrap().ends_with(".png"));
}

#[tokio::test]
async fn test_update_with_malformed_existing_photos_keeps_current() {
    let app = build_test_app().await;

    let response = app
        .server
        .put("/api/animals/1")
        .json(&json!({"existingPhotos": "[not json", "size": "Grande"}))
        .await;

    response.assert_status_ok();
    let pet = &response.json::<Value>()["pet"];
    assert_eq!(pet["size"], "Grande");
    assert_eq!(
        pet["photos"],
        json!([format!("{}/public/uploads/rex.jpg", PUBLIC_URL)])
    );
}

#[tokio::test]
async fn test_update_only_changes_sent_fields() {
    let app = build_test_app().await;

    let response = app
        .server
        .put("/api/animals/1")
        .json(&json!({
            "age": "3",
            "needs": "Quintal",
            "id": 77,
            "matches": 0
        }))
        .await;

    response.assert_status_ok();
    let pet = &response.json::<Value>()["pet"];
    assert_eq!(pet["id"], 1);
    assert_eq!(pet["age"], 3);
    assert_eq!(pet["needs"], json!(["Quintal"]));
    assert_eq!(pet["matches"], 12);
    // Flags that were not sent keep their values
    assert_eq!(pet["vaccinated"], true);
    assert_eq!(pet["neutered"], true);
    assert_eq!(pet["name"], "Rex");
    assert_eq!(pet["status"], "Disponível");
}

#[tokio::test]
async fn test_update_can_change_status() {
    let app = build_test_app().await;

    let response = app
        .server
        .put("/api/animals/3")
        .json(&json!({"status": "Adotado"}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["pet"]["status"], "Adotado");

    let body: Value = app.server.get("/api/animals/3").await.json();
    assert_eq!(body["animal"]["status"], "Adotado");
}

#[tokio::test]
async fn test_delete_animal() {
    let app = build_test_app().await;
    let before = animal_count(&app.server).await;

    let response = app.server.delete("/api/animals/2").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["success"], true);

    app.server.get("/api/animals/2").await.assert_status_not_found();
    app.server.delete("/api/animals/2").await.assert_status_not_found();
    assert_eq!(animal_count(&app.server).await, before - 1);
}

#[tokio::test]
async fn test_delete_does_not_cascade_to_matches() {
    let app = build_test_app().await;

    app.server.delete("/api/animals/1").await.assert_status_ok();

    let body: Value = app.server.get("/api/matches").await.json();
    assert!(body["matches"]
        .as_array()
        .unwrap()
        .iter()
        .any(|m| m["petId"] == 1));
}

// ============================================================================
// Like / Dislike Tests
// ============================================================================

#[tokio::test]
async fn test_like_twice_does_not_duplicate() {
    let app = build_test_app().await;

    let first = app
        .server
        .post("/api/animals/3/like")
        .json(&json!({"userId": "user1"}))
        .await;
    first.assert_status_ok();
    let first: Value = first.json();
    assert_eq!(first["success"], true);
    assert_eq!(first["match"]["petId"], 3);
    assert_eq!(first["match"]["status"], "pending");

    let second: Value = app
        .server
        .post("/api/animals/3/like")
        .json(&json!({"userId": "user1"}))
        .await
        .json();
    assert_eq!(second["match"]["id"], first["match"]["id"]);

    let user: Value = app.server.get("/api/users/user1").await.json();
    let matched = user["user"]["matchedAnimals"].as_array().unwrap();
    assert_eq!(matched.iter().filter(|id| **id == 3).count(), 1);

    let matches: Value = app
        .server
        .get("/api/matches")
        .add_query_param("userId", "user1")
        .await
        .json();
    assert_eq!(matches["matches"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_like_errors() {
    let app = build_test_app().await;

    app.server
        .post("/api/animals/99/like")
        .json(&json!({"userId": "user1"}))
        .await
        .assert_status_not_found();

    app.server
        .post("/api/animals/1/like")
        .json(&json!({"userId": "ghost"}))
        .await
        .assert_status_not_found();

    app.server
        .post("/api/animals/1/like")
        .json(&json!({}))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_dislike_removes_match() {
    let app = build_test_app().await;

    let response = app
        .server
        .post("/api/animals/1/dislike")
        .json(&json!({"userId": "user1"}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["success"], true);

    let body: Value = app.server.get("/api/matches/user1").await.json();
    assert_eq!(body["matches"], json!([]));

    let user: Value = app.server.get("/api/users/user1").await.json();
    assert_eq!(user["user"]["matchedAnimals"], json!([]));

    app.server
        .post("/api/animals/1/dislike")
        .json(&json!({"userId": "ghost"}))
        .await
        .assert_status_not_found();
    app.server
        .post("/api/animals/42/dislike")
        .json(&json!({"userId": "user1"}))
        .await
        .assert_status_not_found();
}

// ============================================================================
// Matches / Favorites Tests
// ============================================================================

#[tokio::test]
async fn test_list_matches() {
    let app = build_test_app().await;

    let all: Value = app.server.get("/api/matches").await.json();
    assert_eq!(all["success"], true);
    assert_eq!(all["matches"].as_array().unwrap().len(), 2);

    let filtered: Value = app.server.get("/api/matches/user2").await.json();
    let filtered = filtered["matches"].as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["status"], "approved");
}

#[tokio::test]
async fn test_favorites_require_user_id() {
    let app = build_test_app().await;

    let response = app.server.get("/api/favorites").await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_favorites_flow() {
    let app = build_test_app().await;

    let body: Value = app
        .server
        .get("/api/favorites")
        .add_query_param("userId", "user2")
        .await
        .json();
    assert_eq!(body["favorites"].as_array().unwrap().len(), 1);
    assert_eq!(body["favorites"][0]["petId"], 1);

    let response = app
        .server
        .post("/api/favorites")
        .json(&json!({"userId": "user2", "petId": 3}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let id = response.json::<Value>()["favorite"]["id"].as_u64().unwrap();

    let body: Value = app
        .server
        .get("/api/favorites")
        .add_query_param("userId", "user2")
        .await
        .json();
    assert_eq!(body["favorites"].as_array().unwrap().len(), 2);

    app.server
        .delete(&format!("/api/favorites/{}", id))
        .await
        .assert_status_ok();
    app.server
        .delete(&format!("/api/favorites/{}", id))
        .await
        .assert_status_not_found();

    app.server
        .post("/api/favorites")
        .json(&json!({"userId": "user2"}))
        .await
        .assert_status_bad_request();
    app.server
        .post("/api/favorites")
        .json(&json!({"userId": "user2", "petId": 404}))
        .await
        .assert_status_not_found();
}

// ============================================================================
// Admin Stub Tests
// ============================================================================

#[tokio::test]
async fn test_admin_lists() {
    let app = build_test_app().await;

    let requests: Value = app.server.get("/api/match-requests").await.json();
    assert_eq!(requests["success"], true);
    assert_eq!(requests["requests"].as_array().unwrap().len(), 2);
    assert!(requests["requests"][0]["userName"].is_string());

    let chats: Value = app.server.get("/api/chats/admin").await.json();
    assert_eq!(chats["success"], true);
    assert_eq!(chats["chats"].as_array().unwrap().len(), 2);
    assert!(chats["chats"][0]["lastMessage"].is_string());
}

#[tokio::test]
async fn test_admin_login() {
    let app = build_test_app().await;

    let response = app
        .server
        .post("/api/admin/login")
        .json(&json!({"email": "admin@abrigo.org", "password": "segredo"}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["success"], true);

    app.server
        .post("/api/admin/login")
        .json(&json!({"email": "admin@abrigo.org"}))
        .await
        .assert_status_bad_request();

    app.server
        .post("/api/admin/login")
        .json(&json!({"email": "", "password": "segredo"}))
        .await
        .assert_status_bad_request();
}

// ============================================================================
// Reset / Isolation Tests
// ============================================================================

#[tokio::test]
async fn test_reset_data_restores_seed() {
    let app = build_test_app().await;

    app.server.delete("/api/animals/1").await.assert_status_ok();
    app.server
        .post("/api/animals")
        .json(&json!({"name": "Temporário"}))
        .await
        .assert_status(StatusCode::CREATED);
    app.server
        .post("/api/animals/3/like")
        .json(&json!({"userId": "user2"}))
        .await
        .assert_status_ok();

    let response = app.server.get("/api/reset-data").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["success"], true);

    let body: Value = app.server.get("/api/animals").await.json();
    let ids: Vec<u64> = body["animals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let matches: Value = app.server.get("/api/matches").await.json();
    assert_eq!(matches["matches"].as_array().unwrap().len(), 2);

    // Sequences restart after the seed ids
    let created: Value = app
        .server
        .post("/api/animals")
        .json(&json!({"name": "Depois"}))
        .await
        .json();
    assert_eq!(created["pet"]["id"], 4);
}

#[tokio::test]
async fn test_apps_do_not_share_state() {
    let first = build_test_app().await;
    let second = build_test_app_with_pool(DbPool::empty(PUBLIC_URL)).await;

    first.server.delete("/api/animals/1").await.assert_status_ok();

    assert_eq!(animal_count(&first.server).await, 2);
    assert_eq!(animal_count(&second.server).await, 0);
}

#[tokio::test]
async fn test_missing_upload_is_not_found() {
    let app = build_test_app().await;

    app.server
        .get("/public/uploads/does-not-exist.jpg")
        .await
        .assert_status_not_found();
}
