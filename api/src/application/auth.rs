use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose};
use krishiseer_core::domain::common::entities::Identity;
use serde::Deserialize;
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Claims carried by the session token. The token is issued and validated
/// by the external sign-in flow; this layer only reads the payload.
#[derive(Debug, Deserialize)]
struct SessionClaims {
    sub: Uuid,
    #[serde(default)]
    preferred_username: Option<String>,
}

fn identity_from_token(token: &str) -> Option<Identity> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let decoded = general_purpose::URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload = String::from_utf8(decoded).ok()?;
    let claims: SessionClaims = serde_json::from_str(&payload).ok()?;

    Some(Identity {
        user_id: claims.sub,
        username: claims.preferred_username,
    })
}

/// Optional auth middleware: a valid Bearer token attaches an `Identity`
/// extension, everything else proceeds anonymously.
pub async fn auth(
    State(_state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(auth_header) = req.headers().get("authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
        && !token.is_empty()
        && let Some(identity) = identity_from_token(token)
    {
        req.extensions_mut().insert(identity);
    }

    Ok(next.run(req).await)
}

/// Extractor for routes that work with or without a signed-in caller.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}

/// Extractor for routes that require a signed-in caller.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized("Authentication required: provide a Bearer token".to_string())
            })
    }
}
