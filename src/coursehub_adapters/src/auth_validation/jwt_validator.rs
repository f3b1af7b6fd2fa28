use async_trait::async_trait;
use axum::http::request::Parts;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use chrono::Utc;
use coursehub_core::{AuthValidator, Identity, Role, User, UserId};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// Validates `Authorization: Bearer <jwt>` headers signed with the shared secret.
#[derive(Clone)]
pub struct JwtValidator {
    config: JwtAuthConfig,
}

impl JwtValidator {
    pub fn new(config: JwtAuthConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl AuthValidator for JwtValidator {
    type Claims = Claims;
    type RequestParts = Parts;
    type Error = TokenAuthError;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error> {
        let token = extract_token(parts)?;
        validate_auth_token(&token, &self.config)
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Missing token")]
    MissingToken,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error")]
    UnexpectedError(String),
}

pub fn extract_token(parts: &Parts) -> Result<String, TokenAuthError> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|authorization| authorization.token().to_owned())
        .ok_or(TokenAuthError::MissingToken)
}

/// Issue a signed token carrying the user's identity.
pub fn generate_auth_token(user: &User, config: &JwtAuthConfig) -> Result<String, TokenAuthError> {
    let delta = chrono::Duration::try_seconds(config.token_ttl_in_seconds).ok_or(
        TokenAuthError::UnexpectedError("Failed to create auth token duration".to_string()),
    )?;

    let now = Utc::now();
    let exp = now
        .checked_add_signed(delta)
        .ok_or(TokenAuthError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let claims = Claims {
        id: user.id(),
        email: user.email().as_str().to_owned(),
        name: user.name().as_str().to_owned(),
        role: user.role(),
        iat: now.timestamp(),
        exp,
    };

    create_token(&claims, config.as_bytes())
}

/// Check signature and expiry of a token and return its claims.
pub fn validate_auth_token(token: &str, config: &JwtAuthConfig) -> Result<Claims, TokenAuthError> {
    if token.is_empty() {
        return Err(TokenAuthError::MissingToken);
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(TokenAuthError::TokenError)
}

fn create_token(claims: &Claims, secret: &[u8]) -> Result<String, TokenAuthError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(TokenAuthError::TokenError)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Identity {
            id: claims.id,
            email: claims.email,
            name: claims.name,
            role: claims.role,
        }
    }
}
