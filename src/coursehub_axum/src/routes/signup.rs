use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use coursehub_adapters::generate_auth_token;
use coursehub_application::SignupUseCase;
use coursehub_core::{Email, Password, PasswordHasher, Role, UserName, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AuthState, views::UserView};

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<U, H>(
    State(state): State<AuthState<U, H>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone,
    H: PasswordHasher + Clone,
{
    let Json(request) = payload?;

    let name = UserName::parse(request.name.as_deref().unwrap_or_default())?;
    let email = Email::parse(request.email.as_deref().unwrap_or_default())?;
    let password = Password::try_from(request.password.unwrap_or_else(empty_secret))?;
    let role = request.role.unwrap_or_default();

    let use_case = SignupUseCase::new(&state.user_store, &state.password_hasher);
    let user = use_case.execute(name, email, password, role).await?;

    let token = generate_auth_token(&user, &state.jwt_config)?;

    let response = Json(AuthResponse {
        message: "User registered successfully".to_string(),
        token,
        user: UserView::from(&user),
    });

    Ok((StatusCode::CREATED, response))
}

pub(crate) fn empty_secret() -> Secret<String> {
    Secret::from(String::new())
}

/// Fields are optional so a missing field surfaces as a validation error
/// rather than a deserialisation failure.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
    pub role: Option<Role>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserView,
}
