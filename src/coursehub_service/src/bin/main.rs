use color_eyre::eyre::Result;
use coursehub_adapters::{
    Argon2PasswordHasher, CloudinaryClient, DiskStaging, JwtAuthConfig, JwtValidator,
    PostgresAssetStore, PostgresCourseStore, PostgresUserStore, config::Settings,
};
use coursehub_axum::{AuthState, UploadState};
use coursehub_service::{CourseHubService, get_postgres_pool, init_tracing, run_migrations};
use reqwest::Client as HttpClient;
use secrecy::ExposeSecret;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = Settings::load()?;

    // Setup database connection pool
    let pg_pool = get_postgres_pool(
        settings.postgres.url.expose_secret(),
        settings.postgres.max_connections,
    )
    .await?;

    // Run migrations
    run_migrations(&pg_pool).await?;

    // Create stores
    let user_store = PostgresUserStore::new(pg_pool.clone());
    let course_store = PostgresCourseStore::new(pg_pool.clone());
    let asset_store = PostgresAssetStore::new(pg_pool);

    // Create object store client
    let http_client = HttpClient::builder()
        .timeout(settings.cloudinary.timeout())
        .build()?;

    let object_store = CloudinaryClient::new(
        settings.cloudinary.base_url.clone(),
        settings.cloudinary.cloud_name.clone(),
        settings.cloudinary.api_key.clone(),
        settings.cloudinary.api_secret.clone(),
        settings.cloudinary.folder.clone(),
        http_client,
    )
    .with_signature_algorithm(settings.cloudinary.signature_algorithm);

    // Authentication
    let jwt_config = JwtAuthConfig {
        jwt_secret: settings.auth.jwt.secret.clone(),
        token_ttl_in_seconds: settings.auth.jwt.time_to_live,
    };
    let password_hasher = Argon2PasswordHasher::new(settings.auth.password_hash)?;
    let validator = JwtValidator::new(jwt_config.clone());

    let staging = DiskStaging::new(settings.application.upload_dir.clone());

    let service = CourseHubService::new(
        AuthState::new(user_store, password_hasher, jwt_config),
        course_store,
        UploadState::new(
            object_store,
            asset_store,
            staging,
            settings.application.max_upload_bytes,
        ),
        validator,
    );

    let allowed_origins = settings.application.allowed_origins.clone();

    // Run as standalone server
    let listener = tokio::net::TcpListener::bind(settings.application.address()).await?;
    tracing::info!("Starting course hub...");

    service
        .run_standalone(listener, Some(allowed_origins))
        .await?;

    Ok(())
}
