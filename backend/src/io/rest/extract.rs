//! backend/src/io/rest/extract.rs

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::io::rest::error::ApiError;

/// `axum::Json` with rejections mapped onto the API error surface.
///
/// The stock extractor answers a body that fails to deserialize with a
/// plain-text 422; this wrapper turns that rejection into the 400
/// `{"message": ...}` envelope used everywhere else, so a wrong-typed field
/// never escapes the documented error shape.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
