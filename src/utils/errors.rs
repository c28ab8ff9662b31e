use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::store::StoreError;

/// Cap on backend error detail surfaced to clients. Anything longer is
/// truncated so internals never leak wholesale.
const MAX_ERROR_DETAIL: usize = 200;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    pub fn service_unavailable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, err)
    }

    /// Map a store failure to its client-facing shape: unavailability is a
    /// distinct "service degraded" signal, everything else is a generic
    /// server error carrying a truncated message.
    pub fn store(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => {
                Self::service_unavailable(anyhow!("Database not available"))
            }
            StoreError::DuplicateKey => Self::bad_request(anyhow!("Duplicate key")),
            other => {
                let detail = truncate_detail(&other.to_string(), MAX_ERROR_DETAIL);
                Self::internal(anyhow!("{detail}"))
            }
        }
    }
}

/// Cap a backend message at `max` characters. Char-based so multi-byte
/// driver messages never split inside a UTF-8 sequence.
pub fn truncate_detail(detail: &str, max: usize) -> String {
    detail.chars().take(max).collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
