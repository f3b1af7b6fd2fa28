use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use coursehub_core::{Password, PasswordHash, PasswordHashError, PasswordHasher};
use secrecy::{ExposeSecret, Secret};

use crate::config::{PasswordHashSettings, defaults};

/// Argon2id hasher. Hashing runs on the blocking pool so request workers stay free.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(settings: PasswordHashSettings) -> Result<Self, PasswordHashError> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?;

        Ok(Self { params })
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self {
            params: Params::new(
                defaults::ARGON2_MEMORY_KIB,
                defaults::ARGON2_ITERATIONS,
                defaults::ARGON2_PARALLELISM,
                None,
            )
            .unwrap_or_default(),
        }
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError> {
        compute_password_hash(password.clone(), self.params.clone())
            .await
            .map(PasswordHash::new)
    }

    async fn verify(
        &self,
        candidate: &Password,
        expected: &PasswordHash,
    ) -> Result<(), PasswordHashError> {
        verify_password_hash(expected.as_ref().clone(), candidate.clone()).await
    }
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Password,
) -> Result<(), PasswordHashError> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash =
                argon2::PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?;

            // Cost parameters are read from the PHC string itself
            Argon2::default()
                .verify_password(
                    password_candidate.as_ref().expose_secret().as_bytes(),
                    &expected_password_hash,
                )
                .map_err(|e| match e {
                    password_hash::Error::Password => PasswordHashError::Mismatch,
                    other => PasswordHashError::UnexpectedError(other.to_string()),
                })
        })
    })
    .await
    .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
async fn compute_password_hash(
    password: Password,
    params: Params,
) -> Result<Secret<String>, PasswordHashError> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))
        })
    })
    .await
    .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?
}
