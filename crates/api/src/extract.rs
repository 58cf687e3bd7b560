//! Request extractors that reject with [`AppError`].
//!
//! axum's own `Path` and `Json` extractors answer failures with plain-text
//! bodies. The extractors here turn every failure into the service's JSON
//! error body:
//!
//! - [`JsonBody`] decodes the first JSON value of the raw body without
//!   looking at the `Content-Type` header. Bytes after that value are
//!   ignored.
//! - [`CategoryPath`] and [`TaskPath`] validate the identifiers of the
//!   category and task routes, including segments that do not decode to
//!   UTF-8.

use axum::body::Bytes;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use tasklist_core::error::CoreError;
use tasklist_core::types::DbId;
use tasklist_core::validation::parse_id;

use crate::error::AppError;

/// Message returned for any body that cannot be decoded.
pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// JSON request body extractor with a JSON error response.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::debug!(error = %err, "Failed to read request body");
            AppError::BadRequest(INVALID_PAYLOAD.into())
        })?;

        decode_first_value(&bytes).map(JsonBody)
    }
}

/// Decode the first JSON value in `bytes`; anything after it is not read.
fn decode_first_value<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    match serde_json::Deserializer::from_slice(bytes)
        .into_iter::<T>()
        .next()
    {
        Some(Ok(value)) => Ok(value),
        Some(Err(err)) => {
            tracing::debug!(error = %err, "Failed to decode request body");
            Err(AppError::BadRequest(INVALID_PAYLOAD.into()))
        }
        None => {
            tracing::debug!("Request body is empty");
            Err(AppError::BadRequest(INVALID_PAYLOAD.into()))
        }
    }
}

/// `{category_id}` of `/category/{category_id}` and `/category/{category_id}/task[s]`.
#[derive(Debug, Clone, Copy)]
pub struct CategoryPath(pub DbId);

impl<S> FromRequestParts<S> for CategoryPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(invalid_path)?;

        Ok(Self(parse_id(&raw, "category")?))
    }
}

/// Both identifiers of `/category/{category_id}/task/{task_id}`.
#[derive(Debug, Clone, Copy)]
pub struct TaskPath {
    pub category_id: DbId,
    pub task_id: DbId,
}

impl<S> FromRequestParts<S> for TaskPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((raw_category_id, raw_task_id)) =
            Path::<(String, String)>::from_request_parts(parts, state)
                .await
                .map_err(invalid_path)?;

        Ok(Self {
            category_id: parse_id(&raw_category_id, "category")?,
            task_id: parse_id(&raw_task_id, "task")?,
        })
    }
}

/// Map a path rejection to the validation error of the offending segment.
fn invalid_path(rejection: PathRejection) -> AppError {
    let kind = match &rejection {
        PathRejection::FailedToDeserializePathParams(err) => match err.kind() {
            ErrorKind::InvalidUtf8InPathParam { key } if key.as_str() == "task_id" => "task",
            _ => "category",
        },
        _ => "category",
    };

    tracing::debug!(error = %rejection, "Rejected path parameters");

    AppError::Core(CoreError::Validation(format!("Invalid {kind} ID")))
}
