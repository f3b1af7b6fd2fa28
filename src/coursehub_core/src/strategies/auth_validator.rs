use async_trait::async_trait;

use crate::domain::identity::Identity;

/// Turns the head of an incoming request into the caller behind it.
///
/// Write routes sit behind a middleware that hands the request head to a
/// validator. The course hub's validator reads `Authorization: Bearer <jwt>`,
/// checks the HS256 signature and the `exp` claim, and returns claims that
/// convert into the [`Identity`] handlers receive. A missing header and a bad
/// token are distinct errors so the HTTP layer can answer 401 or 403.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// Verified token payload.
    type Claims: Into<Identity> + Send + 'static;

    /// Request head (headers, method, URI) without the body.
    type RequestParts: Send + Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error>;
}
