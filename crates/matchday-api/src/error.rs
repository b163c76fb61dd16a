//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use matchday_core::ErrorKind;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler. The engine's taxonomy maps onto
/// response classes via [`matchday_core::Error::kind`].
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Domain(#[from] matchday_core::Error),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let Self::Domain(err) = self;
    let (status, message) = match err.kind() {
      ErrorKind::InvalidInput => (StatusCode::BAD_REQUEST, err.to_string()),
      ErrorKind::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
      ErrorKind::Conflict => (StatusCode::CONFLICT, err.to_string()),
      ErrorKind::Storage => {
        // The cause is logged; callers only get a retry hint.
        tracing::error!(error = %err, "storage failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "storage failure, please try again".to_string(),
        )
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
