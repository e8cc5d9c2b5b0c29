//! Cross-owner isolation: another owner's records behave as if they do not
//! exist, and nothing is written on their behalf.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_category, create_note, delete_auth, get_auth, new_owner,
    post_json_auth, put_json_auth,
};
use serde_json::json;

#[tokio::test]
async fn foreign_note_is_invisible() {
    let app = build_test_app();
    let (_alice, alice) = new_owner();
    let (_bob, bob) = new_owner();

    let note = create_note(&app, &alice, json!({ "body": "private" })).await;
    let uri = format!("/api/v1/notes/{}", note["id"].as_str().unwrap());

    assert_eq!(get_auth(&app, &uri, &bob).await.status(), StatusCode::NOT_FOUND);

    let response = put_json_auth(&app, &uri, json!({ "body": "hijacked" }), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    assert_eq!(delete_auth(&app, &uri, &bob).await.status(), StatusCode::NOT_FOUND);

    let json = body_json(get_auth(&app, "/api/v1/notes", &bob).await).await;
    assert_eq!(json["data"]["total_count"], 0);

    // Alice's note is untouched.
    let response = get_auth(&app, &uri, &alice).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], note);
}

#[tokio::test]
async fn foreign_category_is_invisible() {
    let app = build_test_app();
    let (_alice, alice) = new_owner();
    let (_bob, bob) = new_owner();

    let category = create_category(&app, &alice, "Secrets").await;
    let uri = format!("/api/v1/categories/{}", category["id"].as_str().unwrap());

    assert_eq!(get_auth(&app, &uri, &bob).await.status(), StatusCode::NOT_FOUND);

    let response = put_json_auth(&app, &uri, json!({ "name": "Mine now" }), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(&app, &uri, &alice).await;
    assert_eq!(body_json(response).await["data"]["name"], "Secrets");
}

#[tokio::test]
async fn filtering_by_foreign_category_returns_404() {
    let app = build_test_app();
    let (_alice, alice) = new_owner();
    let (_bob, bob) = new_owner();

    let category = create_category(&app, &alice, "Work").await;
    create_note(
        &app,
        &alice,
        json!({ "body": "quarterly plan", "category_id": category["id"] }),
    )
    .await;

    let uri = format!(
        "/api/v1/notes?category_id={}",
        category["id"].as_str().unwrap()
    );
    let response = get_auth(&app, &uri, &bob).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn creating_note_in_foreign_category_writes_nothing() {
    let app = build_test_app();
    let (_alice, alice) = new_owner();
    let (_bob, bob) = new_owner();

    let category = create_category(&app, &alice, "Work").await;

    let response = post_json_auth(
        &app,
        "/api/v1/notes",
        json!({ "body": "sneaky", "category_id": category["id"] }),
        &bob,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(get_auth(&app, "/api/v1/notes", &bob).await).await;
    assert_eq!(json["data"]["total_count"], 0);

    let by_category = format!(
        "/api/v1/notes?category_id={}",
        category["id"].as_str().unwrap()
    );
    let json = body_json(get_auth(&app, &by_category, &alice).await).await;
    assert_eq!(json["data"]["total_count"], 0);
}

#[tokio::test]
async fn moving_note_into_foreign_category_is_rejected() {
    let app = build_test_app();
    let (_alice, alice) = new_owner();
    let (_bob, bob) = new_owner();

    let foreign = create_category(&app, &alice, "Work").await;
    let note = create_note(&app, &bob, json!({ "body": "mine" })).await;
    let uri = format!("/api/v1/notes/{}", note["id"].as_str().unwrap());

    let response = put_json_auth(&app, &uri, json!({ "category_id": foreign["id"] }), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(&app, &uri, &bob).await;
    let current = body_json(response).await["data"].clone();
    assert!(current["category_id"].is_null());
    assert_eq!(current["updated_at"], note["updated_at"]);
}
