use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use coursehub_core::{AuthValidator, Identity};

use crate::error::ApiError;

/// Gate for write routes: validates the bearer token and exposes the caller as an
/// `Extension<Identity>` to the handler.
pub async fn authenticate<V>(
    State(validator): State<V>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    V: AuthValidator<RequestParts = Parts>,
    V::Error: Into<ApiError>,
{
    let (parts, body) = request.into_parts();

    let claims = validator.validate(&parts).await.map_err(Into::into)?;

    let mut request = Request::from_parts(parts, body);
    let identity: Identity = claims.into();
    tracing::debug!(user_id = %identity.id, role = %identity.role, "Authenticated request");
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
