use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_reject_wrong_password_then_accept_correct_one() {
    let app = TestApp::new().await;

    let signup: Value = app
        .post_signup(&json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "password": "secret123",
        }))
        .await
        .json()
        .await
        .unwrap();

    let response = app
        .post_login(&json!({ "email": "ada@example.com", "password": "wrong-password" }))
        .await;
    assert_eq!(response.status().as_u16(), 401);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Invalid credentials");

    let response = app
        .post_login(&json!({ "email": "ADA@example.com", "password": "secret123" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Login successful");
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["id"], signup["user"]["id"]);
}

#[tokio::test]
async fn should_return_401_for_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({ "email": "nobody@example.com", "password": "secret123" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "User not found");
}

#[tokio::test]
async fn should_return_400_when_fields_are_missing() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({ "email": "ada@example.com" }),
        json!({ "password": "secret123" }),
        json!({}),
    ];

    for test_case in test_cases {
        let response = app.post_login(&test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {test_case:?}"
        );
    }
}

#[tokio::test]
async fn login_token_authorizes_protected_routes() {
    let app = TestApp::new().await;
    app.signup_as("instructor@example.com", "instructor").await;

    let body: Value = app
        .post_login(&json!({ "email": "instructor@example.com", "password": "secret123" }))
        .await
        .json()
        .await
        .unwrap();
    let token = body["token"].as_str().unwrap();

    let response = app
        .post_course(&json!({ "title": "Rust 101" }), Some(token))
        .await;
    assert_eq!(response.status().as_u16(), 201);
}
