pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const APP_CONFIG_DIR_ENV_VAR: &str = "APP_CONFIG_DIR";
    pub const ENV_PREFIX: &str = "APP";
    pub const ENV_SEPARATOR: &str = "__";
}

pub mod defaults {
    pub const ENVIRONMENT: &str = "local";
    pub const CONFIG_DIR: &str = "config";

    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 3000;
    pub const UPLOAD_DIR: &str = "uploads";
    pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;

    pub const TOKEN_TTL_IN_SECONDS: i64 = 24 * 60 * 60;

    pub const ARGON2_MEMORY_KIB: u32 = 15000;
    pub const ARGON2_ITERATIONS: u32 = 2;
    pub const ARGON2_PARALLELISM: u32 = 1;

    pub const CLOUDINARY_BASE_URL: &str = "https://api.cloudinary.com";
    pub const CLOUDINARY_FOLDER: &str = "coursehub";
    pub const CLOUDINARY_TIMEOUT_IN_MILLIS: u64 = 30_000;
    pub const CLOUDINARY_SIGNATURE_ALGORITHM: &str = "sha1";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-secret-with-enough-entropy";

    pub mod cloudinary {
        use std::time::Duration;

        pub const CLOUD_NAME: &str = "demo";
        pub const API_KEY: &str = "123456789012345";
        pub const API_SECRET: &str = "test-api-secret";
        pub const TIMEOUT: Duration = Duration::from_millis(500);
    }
}
