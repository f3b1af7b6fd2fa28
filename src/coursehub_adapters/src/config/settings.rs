use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::http::HeaderValue;
use ::config::{Config, ConfigError, Environment, File, FileFormat};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::constants::{defaults, env};
use crate::storage::cloudinary_client::SignatureAlgorithm;

/// Every runtime setting of the service, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
    pub auth: AuthSettings,
    pub cloudinary: CloudinarySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: AllowedOrigins,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: u64,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
    pub password_hash: PasswordHashSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub time_to_live: i64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PasswordHashSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudinarySettings {
    pub base_url: String,
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: Secret<String>,
    pub folder: String,
    pub timeout_in_millis: u64,
    pub signature_algorithm: SignatureAlgorithm,
}

impl CloudinarySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

/// Origins permitted by the CORS layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Settings {
    /// Load settings from `config/base.json`, the environment specific file and
    /// `APP__*` environment variables, in increasing order of precedence.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config_dir = std::env::var(env::APP_CONFIG_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(defaults::CONFIG_DIR));
        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| defaults::ENVIRONMENT.to_string());

        Self::build(&config_dir, &environment)
    }

    pub fn build(config_dir: &Path, environment: &str) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("application.host", defaults::HOST)?
            .set_default("application.port", defaults::PORT)?
            .set_default("application.allowed_origins", Vec::<String>::new())?
            .set_default("application.upload_dir", defaults::UPLOAD_DIR)?
            .set_default("application.max_upload_bytes", defaults::MAX_UPLOAD_BYTES)?
            .set_default("postgres.max_connections", defaults::POSTGRES_MAX_CONNECTIONS)?
            .set_default("auth.jwt.time_to_live", defaults::TOKEN_TTL_IN_SECONDS)?
            .set_default("auth.password_hash.memory_kib", defaults::ARGON2_MEMORY_KIB)?
            .set_default("auth.password_hash.iterations", defaults::ARGON2_ITERATIONS)?
            .set_default("auth.password_hash.parallelism", defaults::ARGON2_PARALLELISM)?
            .set_default("cloudinary.base_url", defaults::CLOUDINARY_BASE_URL)?
            .set_default("cloudinary.folder", defaults::CLOUDINARY_FOLDER)?
            .set_default(
                "cloudinary.timeout_in_millis",
                defaults::CLOUDINARY_TIMEOUT_IN_MILLIS,
            )?
            .set_default(
                "cloudinary.signature_algorithm",
                defaults::CLOUDINARY_SIGNATURE_ALGORITHM,
            )?
            .add_source(
                File::from(config_dir.join("base.json"))
                    .format(FileFormat::Json)
                    .required(false),
            )
            .add_source(
                File::from(config_dir.join(format!("{environment}.json")))
                    .format(FileFormat::Json)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .separator(env::ENV_SEPARATOR)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("application.allowed_origins"),
            )
            .build()?
            .try_deserialize()?;

        if settings.auth.jwt.secret.expose_secret().trim().is_empty() {
            return Err(ConfigError::Message(
                "auth.jwt.secret must not be empty".to_string(),
            ));
        }

        if settings.auth.jwt.time_to_live <= 0 {
            return Err(ConfigError::Message(
                "auth.jwt.time_to_live must be positive".to_string(),
            ));
        }

        Ok(settings)
    }
}
