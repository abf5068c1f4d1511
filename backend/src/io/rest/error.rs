//! Translation of domain errors into HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::{error, warn};

use crate::domain::error::DomainError;
use shared::MessageResponse;

/// Wrapper that lets handlers return domain errors with `?`.
///
/// Validation errors serialize as the bare field-keyed mapping; everything
/// else uses the `{"message": ...}` envelope.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by a domain service
    Domain(DomainError),
    /// The request body could not be parsed into the expected shape
    BadRequestBody(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequestBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let domain_err = match self {
            Self::Domain(err) => err,
            Self::BadRequestBody(message) => {
                warn!("Request rejected: {}", message);
                return (StatusCode::BAD_REQUEST, Json(MessageResponse::new(message)))
                    .into_response();
            }
        };

        match domain_err {
            DomainError::Validation(errors) => {
                warn!("Request rejected: validation failed: {}", errors);
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            DomainError::NotAssociated(message) => {
                warn!("Request rejected: {}", message);
                (StatusCode::BAD_REQUEST, Json(MessageResponse::new(message))).into_response()
            }
            DomainError::NotFound(message) => {
                warn!("Request rejected: {}", message);
                (StatusCode::NOT_FOUND, Json(MessageResponse::new(message))).into_response()
            }
            DomainError::Conflict(message) => {
                warn!("Request rejected: {}", message);
                (StatusCode::CONFLICT, Json(MessageResponse::new(message))).into_response()
            }
            DomainError::Storage(source) => {
                error!("Storage failure while handling request: {:#}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::FieldErrors;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        serde_json::from_slice(&bytes).expect("Body should be JSON")
    }

    #[tokio::test]
    async fn test_validation_maps_to_bad_request_with_field_mapping() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Missing data for required field.");

        let response = ApiError::from(DomainError::Validation(errors)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({"email": ["Missing data for required field."]})
        );
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404_with_message() {
        let response = ApiError::from(DomainError::not_found("User", 42)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"message": "User not found: 42"}));
    }

    #[tokio::test]
    async fn test_conflict_maps_to_409() {
        let response =
            ApiError::from(DomainError::Conflict("Email is already in use.".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_not_associated_maps_to_400() {
        let response = ApiError::from(DomainError::NotAssociated(
            "Product not in this order".to_string(),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"message": "Product not in this order"}));
    }

    #[tokio::test]
    async fn test_bad_request_body_maps_to_400_with_message() {
        let response =
            ApiError::BadRequestBody("user_id: invalid type".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"message": "user_id: invalid type"}));
    }

    #[tokio::test]
    async fn test_storage_maps_to_500_without_details() {
        let response =
            ApiError::from(DomainError::Storage(anyhow::anyhow!("disk on fire"))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"message": "Internal server error"}));
    }
}
