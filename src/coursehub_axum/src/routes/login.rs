use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use coursehub_adapters::generate_auth_token;
use coursehub_application::LoginUseCase;
use coursehub_core::{Email, Password, PasswordHasher, UserError, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::signup::{AuthResponse, empty_secret};
use crate::{error::ApiError, state::AuthState, views::UserView};

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H>(
    State(state): State<AuthState<U, H>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone,
    H: PasswordHasher + Clone,
{
    let Json(request) = payload?;

    // Malformed but present credentials can never match a stored user
    let email = match Email::parse(request.email.as_deref().unwrap_or_default()) {
        Ok(email) => email,
        Err(UserError::InvalidEmail) => return Err(ApiError::UserNotFound),
        Err(e) => return Err(e.into()),
    };
    let password = match Password::try_from(request.password.unwrap_or_else(empty_secret)) {
        Ok(password) => password,
        Err(UserError::InvalidPassword) => return Err(ApiError::InvalidCredentials),
        Err(e) => return Err(e.into()),
    };

    let use_case = LoginUseCase::new(&state.user_store, &state.password_hasher);
    let user = use_case.execute(email, password).await?;

    let token = generate_auth_token(&user, &state.jwt_config)?;

    let response = Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserView::from(&user),
    });

    Ok((StatusCode::OK, response))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
}
