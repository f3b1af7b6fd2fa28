use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn instructor_course_is_listed_by_owner_but_not_as_published() {
    let app = TestApp::new().await;
    let (token, instructor_id) = app.signup_as("instructor@example.com", "instructor").await;

    let response = app
        .post_course(&json!({ "title": "Intro" }), Some(&token))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let course: Value = response.json().await.unwrap();
    assert_eq!(course["title"], "Intro");
    assert_eq!(course["instructorId"], instructor_id);
    assert_eq!(course["published"], false);
    assert_eq!(course["level"], "beginner");
    assert_eq!(course["price"], 0.0);

    let by_owner: Vec<Value> = app
        .get_courses(&[("instructorId", &instructor_id)])
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(by_owner.len(), 1);
    assert_eq!(by_owner[0]["id"], course["id"]);

    let published: Vec<Value> = app
        .get_courses(&[("published", "true")])
        .await
        .json()
        .await
        .unwrap();
    assert!(published.is_empty());
}

#[tokio::test]
async fn should_list_courses_newest_first() {
    let app = TestApp::new().await;
    let (token, _) = app.signup_as("instructor@example.com", "instructor").await;

    for title in ["First", "Second", "Third"] {
        let response = app.post_course(&json!({ "title": title }), Some(&token)).await;
        assert_eq!(response.status().as_u16(), 201);
    }

    let courses: Vec<Value> = app.get_courses(&[]).await.json().await.unwrap();
    let titles: Vec<&str> = courses
        .iter()
        .map(|course| course["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn should_embed_lessons_and_quizzes_with_back_references() {
    let app = TestApp::new().await;
    let (token, _) = app.signup_as("instructor@example.com", "instructor").await;

    let response = app
        .post_course(
            &json!({
                "title": "Rust 101",
                "level": "intermediate",
                "tags": ["rust", "systems"],
                "lessons": [
                    { "title": "Ownership", "content": "Moves and borrows", "order": 1 }
                ],
                "quizzes": [{
                    "title": "Ownership check",
                    "passingScore": 70,
                    "questions": [{
                        "text": "Which keyword moves into a closure?",
                        "options": ["move", "ref"],
                        "correctAnswer": 0
                    }]
                }]
            }),
            Some(&token),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let course: Value = response.json().await.unwrap();
    let lesson = &course["lessons"][0];
    let quiz = &course["quizzes"][0];
    let question = &quiz["questions"][0];

    assert!(lesson["id"].is_string());
    assert_eq!(lesson["courseId"], course["id"]);
    assert!(quiz["id"].is_string());
    assert_eq!(quiz["courseId"], course["id"]);
    assert_eq!(quiz["passingScore"], 70);
    assert_eq!(question["quizId"], quiz["id"]);

    let fetched: Value = app
        .get_course(course["id"].as_str().unwrap())
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, course);
}

#[tokio::test]
async fn should_return_400_and_store_nothing_for_invalid_course() {
    let app = TestApp::new().await;
    let (token, _) = app.signup_as("instructor@example.com", "instructor").await;

    let test_cases = [
        json!({ "description": "No title" }),
        json!({ "title": "Negative", "price": -1.0 }),
        json!({ "title": "Bad level", "level": "expert" }),
        json!({ "title": "Bad quiz", "quizzes": [{ "title": "Q", "passingScore": 150 }] }),
    ];

    for test_case in test_cases {
        let response = app.post_course(&test_case, Some(&token)).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {test_case:?}"
        );
    }

    let courses: Vec<Value> = app.get_courses(&[]).await.json().await.unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn should_require_a_valid_token_to_create_courses() {
    let app = TestApp::new().await;
    let body = json!({ "title": "Intro" });

    let response = app.post_course(&body, None).await;
    assert_eq!(response.status().as_u16(), 401);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Missing token");

    let response = app.post_course(&body, Some("not-a-jwt")).await;
    assert_eq!(response.status().as_u16(), 403);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Invalid or expired token");
}

#[tokio::test]
async fn should_return_404_for_unknown_or_malformed_ids() {
    let app = TestApp::new().await;

    let response = app.get_course("8a6e0804-2bd0-4672-b79d-d97027f9071a").await;
    assert_eq!(response.status().as_u16(), 404);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Course not found");

    let response = app.get_course("not-an-id").await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn only_owner_or_admin_can_update_a_course() {
    let app = TestApp::new().await;
    let (owner_token, owner_id) = app.signup_as("owner@example.com", "instructor").await;
    let (other_token, _) = app.signup_as("other@example.com", "instructor").await;

    let course: Value = app
        .post_course(&json!({ "title": "Intro" }), Some(&owner_token))
        .await
        .json()
        .await
        .unwrap();
    let id = course["id"].as_str().unwrap();

    let response = app
        .put_course(id, &json!({ "title": "Hijacked" }), Some(&other_token))
        .await;
    assert_eq!(response.status().as_u16(), 403);

    let response = app
        .put_course(id, &json!({ "published": true }), Some(&owner_token))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["title"], "Intro");
    assert_eq!(updated["published"], true);
    assert_eq!(updated["instructorId"], owner_id);

    let admin_token = app.admin_token();
    let response = app
        .put_course(id, &json!({ "title": "Moderated" }), Some(&admin_token))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["title"], "Moderated");
    assert_eq!(updated["instructorId"], owner_id);

    let published: Vec<Value> = app
        .get_courses(&[("published", "true")])
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(published.len(), 1);
}

#[tokio::test]
async fn should_return_404_when_updating_missing_course() {
    let app = TestApp::new().await;
    let (token, _) = app.signup_as("instructor@example.com", "instructor").await;

    let response = app
        .put_course(
            "8a6e0804-2bd0-4672-b79d-d97027f9071a",
            &json!({ "title": "Ghost" }),
            Some(&token),
        )
        .await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn deleted_course_is_no_longer_found() {
    let app = TestApp::new().await;
    let (token, _) = app.signup_as("instructor@example.com", "instructor").await;

    let course: Value = app
        .post_course(&json!({ "title": "Short lived" }), Some(&token))
        .await
        .json()
        .await
        .unwrap();
    let id = course["id"].as_str().unwrap();

    let response = app.delete_course(id, None).await;
    assert_eq!(response.status().as_u16(), 401);

    let response = app.delete_course(id, Some(&token)).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Course deleted successfully");

    assert_eq!(app.get_course(id).await.status().as_u16(), 404);
    assert_eq!(app.delete_course(id, Some(&token)).await.status().as_u16(), 404);
}
