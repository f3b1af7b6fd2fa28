use chrono::Utc;
use coursehub_adapters::{
    Argon2PasswordHasher, CloudinaryClient, DiskStaging, HashMapAssetStore, HashMapCourseStore,
    HashMapUserStore, JwtAuthConfig, JwtValidator,
    config::{PasswordHashSettings, test},
    generate_auth_token,
};
use coursehub_axum::{AuthState, UploadState};
use coursehub_core::{Email, NewUser, PasswordHash, Role, User, UserName};
use coursehub_service::CourseHubService;
use reqwest::multipart::{Form, Part};
use secrecy::Secret;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const MAX_UPLOAD_BYTES: u64 = 64 * 1024;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub cloudinary_server: MockServer,
    pub asset_store: HashMapAssetStore,
    pub upload_dir: TempDir,
    pub jwt_config: JwtAuthConfig,
}

impl TestApp {
    pub async fn new() -> Self {
        let cloudinary_server = MockServer::start().await;
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");

        let jwt_config = JwtAuthConfig {
            jwt_secret: Secret::from(test::JWT_SECRET.to_owned()),
            token_ttl_in_seconds: 600,
        };

        // Cheap parameters keep the suite fast
        let password_hasher = Argon2PasswordHasher::new(PasswordHashSettings {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("Failed to build password hasher");

        let object_store = CloudinaryClient::new(
            cloudinary_server.uri(),
            test::cloudinary::CLOUD_NAME.to_string(),
            test::cloudinary::API_KEY.to_string(),
            Secret::from(test::cloudinary::API_SECRET.to_owned()),
            "coursehub".to_string(),
            reqwest::Client::builder()
                .timeout(test::cloudinary::TIMEOUT)
                .build()
                .expect("Failed to build Cloudinary client"),
        );

        let asset_store = HashMapAssetStore::new();

        let service = CourseHubService::new(
            AuthState::new(HashMapUserStore::new(), password_hasher, jwt_config.clone()),
            HashMapCourseStore::new(),
            UploadState::new(
                object_store,
                asset_store.clone(),
                DiskStaging::new(upload_dir.path()),
                MAX_UPLOAD_BYTES,
            ),
            JwtValidator::new(jwt_config.clone()),
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(service.run_standalone(listener, None));

        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            address,
            http_client,
            cloudinary_server,
            asset_store,
            upload_dir,
            jwt_config,
        }
    }

    pub async fn post_signup(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/signup", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_courses(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .get(format!("{}/api/courses", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_course(&self, id: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/api/courses/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_course(&self, body: &Value, token: Option<&str>) -> reqwest::Response {
        with_token(
            self.http_client
                .post(format!("{}/api/courses", &self.address))
                .json(body),
            token,
        )
        .send()
        .await
        .expect("Failed to execute request.")
    }

    pub async fn put_course(&self, id: &str, body: &Value, token: Option<&str>) -> reqwest::Response {
        with_token(
            self.http_client
                .put(format!("{}/api/courses/{}", &self.address, id))
                .json(body),
            token,
        )
        .send()
        .await
        .expect("Failed to execute request.")
    }

    pub async fn delete_course(&self, id: &str, token: Option<&str>) -> reqwest::Response {
        with_token(
            self.http_client
                .delete(format!("{}/api/courses/{}", &self.address, id)),
            token,
        )
        .send()
        .await
        .expect("Failed to execute request.")
    }

    pub async fn post_upload(
        &self,
        route: &str,
        form: Form,
        token: Option<&str>,
    ) -> reqwest::Response {
        with_token(
            self.http_client
                .post(format!("{}/api/{}", &self.address, route))
                .multipart(form),
            token,
        )
        .send()
        .await
        .expect("Failed to execute request.")
    }

    /// Sign up a user with the given role and return `(token, user id)`.
    pub async fn signup_as(&self, email: &str, role: &str) -> (String, String) {
        let response = self
            .post_signup(&json!({
                "name": "Test User",
                "email": email,
                "password": "secret123",
                "role": role,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = response.json().await.unwrap();
        (
            body["token"].as_str().unwrap().to_string(),
            body["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    /// Admins cannot sign up; mint a token for one directly.
    pub fn admin_token(&self) -> String {
        let mut new_user = NewUser::new(
            UserName::parse("Site Admin").unwrap(),
            Email::parse("admin@example.com").unwrap(),
            PasswordHash::new(Secret::from("unused".to_owned())),
        );
        new_user.role = Role::Admin;
        let admin = User::create(new_user, Utc::now());

        generate_auth_token(&admin, &self.jwt_config).unwrap()
    }

    /// Answer uploads for `resource_type` the way Cloudinary does.
    pub async fn mock_cloudinary_upload(&self, resource_type: &str, file_name: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/v1_1/demo/{resource_type}/upload")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "secure_url": format!(
                    "https://res.cloudinary.com/demo/{resource_type}/upload/v1700000000/coursehub/{file_name}"
                ),
                "public_id": format!("coursehub/{file_name}"),
                "resource_type": resource_type,
            })))
            .expect(1)
            .mount(&self.cloudinary_server)
            .await;
    }

    pub fn staged_file_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

fn with_token(request: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

pub fn file_form(field: &str, file_name: &str, mime: &str, bytes: Vec<u8>) -> Form {
    let part = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime)
        .unwrap();
    Form::new().part(field.to_string(), part)
}
