use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_201_with_token_and_user_on_signup() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&json!({
            "name": "Ada Lovelace",
            "email": "Ada@Example.com",
            "password": "secret123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User registered successfully");
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["name"], "Ada Lovelace");
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["role"], "learner");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn should_accept_instructor_role_on_signup() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&json!({
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "password": "secret123",
            "role": "instructor",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["role"], "instructor");
}

#[tokio::test]
async fn should_return_400_when_signing_up_as_admin() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&json!({
            "name": "Mallory",
            "email": "mallory@example.com",
            "password": "secret123",
            "role": "admin",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_400_if_email_already_registered() {
    let app = TestApp::new().await;
    let body = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "password": "secret123",
    });

    assert_eq!(app.post_signup(&body).await.status().as_u16(), 201);

    let response = app.post_signup(&body).await;
    assert_eq!(response.status().as_u16(), 400);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "User already exists");
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({ "email": "ada@example.com", "password": "secret123" }),
        json!({ "name": "Ada", "password": "secret123" }),
        json!({ "name": "Ada", "email": "ada@example.com" }),
        json!({ "name": "Ada", "email": "not-an-email", "password": "secret123" }),
        json!({ "name": "Ada", "email": "ada@example.com", "password": "short" }),
        json!({ "name": "   ", "email": "ada@example.com", "password": "secret123" }),
    ];

    for test_case in test_cases {
        let response = app.post_signup(&test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {test_case:?}"
        );
        let error: Value = response.json().await.unwrap();
        assert!(error["error"].is_string());
    }
}

#[tokio::test]
async fn should_return_400_for_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/api/signup", &app.address))
        .header("Content-Type", "application/json")
        .body("{ \"name\": ")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}
