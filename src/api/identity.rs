use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

/// Header carrying the verified user id, set by the auth layer in front of
/// this service.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity of the already-authenticated shopper.
///
/// Authentication happens upstream; this service only consumes the
/// verified id it is handed and scopes submission tokens to it.
#[derive(Debug, Clone)]
pub struct UserId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| UserId(v.to_string()))
            .ok_or(AppError::MissingParameter("user identity"))
    }
}
