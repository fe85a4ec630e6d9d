use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    Json,
};
use uuid::Uuid;

use shared::ApiFailure;

/// Caller identity taken from the `Authorization: Bearer <uuid>` header.
///
/// Token verification belongs to the gateway in front of this service; by
/// the time a request arrives the bearer token is the verified caller id.
/// Requests without a usable identity are rejected before any handler runs.
pub struct AuthUser(pub Uuid);

pub fn parse_bearer(value: &str) -> Option<Uuid> {
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiFailure>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_bearer)
            .map(AuthUser)
            .ok_or((
                StatusCode::UNAUTHORIZED,
                Json(ApiFailure::new("Unauthorized")),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bearer_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_bearer(&format!("Bearer {id}")), Some(id));
    }

    #[test]
    fn rejects_missing_scheme() {
        assert_eq!(parse_bearer(&Uuid::new_v4().to_string()), None);
    }

    #[test]
    fn rejects_malformed_token() {
        assert_eq!(parse_bearer("Bearer not-a-uuid"), None);
        assert_eq!(parse_bearer("Basic dXNlcjpwYXNz"), None);
    }
}
