use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use validator::Validate;

use krishiseer_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),

    /// Upstream provider failure surfaced verbatim.
    #[error("{0}")]
    BadGateway(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    status: u16,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_BAD_GATEWAY"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        let body = ErrorBody {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => ApiError::BadRequest(msg),
            CoreError::NotFound => ApiError::NotFound("resource not found".to_string()),
            CoreError::MissingCredential(name) => {
                ApiError::InternalServerError(format!("Missing {name}"))
            }
            CoreError::Provider { provider, detail } => {
                ApiError::BadGateway(format!("{provider} error: {detail}"))
            }
            CoreError::ObjectStorage(msg) => ApiError::InternalServerError(msg),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

/// JSON extractor that runs `validator` rules before the handler sees the
/// payload.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_expected_tiers() {
        assert_eq!(
            ApiError::from(CoreError::MissingCredential("PLANT_ID_API_KEY")),
            ApiError::InternalServerError("Missing PLANT_ID_API_KEY".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidInput("image is required".into())),
            ApiError::BadRequest("image is required".to_string())
        );
        assert!(matches!(
            ApiError::from(CoreError::Provider {
                provider: "plant.id",
                detail: "boom".into()
            }),
            ApiError::BadGateway(_)
        ));
    }
}
