use coursehub_core::FileType;
use reqwest::multipart::Form;
use serde_json::{Value, json};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, method, path},
};

use crate::helpers::{MAX_UPLOAD_BYTES, TestApp, file_form};

#[tokio::test]
async fn should_upload_pdf_as_forced_download() {
    let app = TestApp::new().await;
    let (token, _) = app.signup_as("instructor@example.com", "instructor").await;
    app.mock_cloudinary_upload("raw", "notes.pdf").await;

    let form = file_form("pdf", "notes.pdf", "application/pdf", b"%PDF-1.4".to_vec());
    let response = app.post_upload("uploadpdf", form, Some(&token)).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "File uploaded successfully");
    assert_eq!(body["file"]["fileType"], "pdf");
    assert_eq!(body["file"]["publicId"], "coursehub/notes.pdf");
    assert!(
        body["file"]["url"]
            .as_str()
            .unwrap()
            .contains("/upload/fl_attachment/")
    );

    assert_eq!(app.asset_store.assets_of(FileType::Pdf).await.len(), 1);
    assert_eq!(app.staged_file_count(), 0);
}

#[tokio::test]
async fn should_upload_image_and_ignore_text_fields() {
    let app = TestApp::new().await;
    let (token, _) = app.signup_as("instructor@example.com", "instructor").await;
    app.mock_cloudinary_upload("image", "cover.png").await;

    let form = file_form("image", "cover.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])
        .text("caption", "Course cover");
    let response = app.post_upload("uploadimage", form, Some(&token)).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["file"]["fileType"], "image");
    assert!(
        !body["file"]["url"]
            .as_str()
            .unwrap()
            .contains("fl_attachment")
    );
    assert_eq!(app.asset_store.assets_of(FileType::Image).await.len(), 1);
}

#[tokio::test]
async fn should_reject_unsupported_type_without_contacting_cloudinary() {
    let app = TestApp::new().await;
    let (token, _) = app.signup_as("instructor@example.com", "instructor").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.cloudinary_server)
        .await;

    let form = file_form("pdf", "notes.txt", "text/plain", b"plain text".to_vec());
    let response = app.post_upload("uploadpdf", form, Some(&token)).await;
    assert_eq!(response.status().as_u16(), 400);

    assert!(app.asset_store.assets_of(FileType::Pdf).await.is_empty());
    assert_eq!(app.staged_file_count(), 0);
}

#[tokio::test]
async fn should_return_400_when_no_file_is_sent() {
    let app = TestApp::new().await;
    let (token, _) = app.signup_as("instructor@example.com", "instructor").await;

    let form = Form::new().text("caption", "nothing attached");
    let response = app.post_upload("uploadvideo", form, Some(&token)).await;
    assert_eq!(response.status().as_u16(), 400);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "No file uploaded");
}

#[tokio::test]
async fn should_return_400_for_file_under_wrong_field() {
    let app = TestApp::new().await;
    let (token, _) = app.signup_as("instructor@example.com", "instructor").await;

    let form = file_form("image", "notes.pdf", "application/pdf", b"%PDF-1.4".to_vec());
    let response = app.post_upload("uploadpdf", form, Some(&token)).await;
    assert_eq!(response.status().as_u16(), 400);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Unexpected field");
    assert_eq!(app.staged_file_count(), 0);
}

#[tokio::test]
async fn should_return_400_for_oversized_file() {
    let app = TestApp::new().await;
    let (token, _) = app.signup_as("instructor@example.com", "instructor").await;

    let bytes = vec![0u8; MAX_UPLOAD_BYTES as usize + 1];
    let form = file_form("video", "lecture.mp4", "video/mp4", bytes);
    let response = app.post_upload("uploadvideo", form, Some(&token)).await;
    assert_eq!(response.status().as_u16(), 400);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "File too large");
    assert_eq!(app.staged_file_count(), 0);
}

#[tokio::test]
async fn should_require_token_to_upload() {
    let app = TestApp::new().await;

    let form = file_form("pdf", "notes.pdf", "application/pdf", b"%PDF-1.4".to_vec());
    let response = app.post_upload("uploadpdf", form, None).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_500_and_clean_up_when_cloudinary_fails() {
    let app = TestApp::new().await;
    let (token, _) = app.signup_as("instructor@example.com", "instructor").await;

    Mock::given(method("POST"))
        .and(path("/v1_1/demo/video/upload"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": { "message": "Invalid Signature" } })),
        )
        .expect(1)
        .mount(&app.cloudinary_server)
        .await;

    let form = file_form("video", "lecture.mp4", "video/mp4", vec![0u8; 64]);
    let response = app.post_upload("uploadvideo", form, Some(&token)).await;
    assert_eq!(response.status().as_u16(), 500);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Internal server error");
    assert!(app.asset_store.assets_of(FileType::Video).await.is_empty());
    assert_eq!(app.staged_file_count(), 0);
}
