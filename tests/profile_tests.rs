// SPDX-License-Identifier: MIT

//! Profile read/update tests for authenticated sessions.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;
use common::{create_test_app, login_user, register_user, response_json};

async fn get_profile(app: &axum::Router, token: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/profile")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn put_profile(
    app: &axum::Router,
    token: &str,
    body: serde_json::Value,
) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/profile")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_profile_returns_name_and_phone() {
    let (app, _) = create_test_app();
    register_user(&app, "test case", "+6281234567890", "T3stv@lid").await;
    let token = login_user(&app, "+6281234567890", "T3stv@lid").await;

    let response = get_profile(&app, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["fullName"].as_str().unwrap(), "test case");
    assert_eq!(body["phone"].as_str().unwrap(), "+6281234567890");
}

#[tokio::test]
async fn test_update_profile_changes_name_and_phone() {
    let (app, _) = create_test_app();
    register_user(&app, "test case", "+6281234567890", "T3stv@lid").await;
    let token = login_user(&app, "+6281234567890", "T3stv@lid").await;

    let response = put_profile(
        &app,
        &token,
        serde_json::json!({ "fullName": "renamed user", "phone": "+6281234567899" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The session subject (slug) is unchanged, so the profile stays reachable
    let response = get_profile(&app, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["fullName"].as_str().unwrap(), "renamed user");
    assert_eq!(body["phone"].as_str().unwrap(), "+6281234567899");
}

#[tokio::test]
async fn test_update_profile_keeping_own_phone_is_ok() {
    let (app, _) = create_test_app();
    register_user(&app, "test case", "+6281234567890", "T3stv@lid").await;
    let token = login_user(&app, "+6281234567890", "T3stv@lid").await;

    let response = put_profile(
        &app,
        &token,
        serde_json::json!({ "fullName": "same phone", "phone": "+6281234567890" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_profile_to_taken_phone_is_conflict() {
    let (app, _) = create_test_app();
    register_user(&app, "first user", "+6281234567890", "T3stv@lid").await;
    register_user(&app, "second user", "+6282213770600", "T3stv@lid").await;
    let token = login_user(&app, "+6281234567890", "T3stv@lid").await;

    let response = put_profile(
        &app,
        &token,
        serde_json::json!({ "fullName": "first user", "phone": "+6282213770600" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(
        body["message"].as_str().unwrap(),
        "phone number already exists"
    );
}
