use anyhow::anyhow;
use axum::{extract::rejection::JsonRejection, http::StatusCode};
use vecsim_core::SimilarityError;
use vecsim_search::SearchError;
use vecsim_shared::AppError;

// `AppError` converts any error into a 500 through `?`, so domain errors
// that carry a client-facing status go through these instead.

/// Malformed or mistyped request bodies are a 400. Failures reading the body
/// itself keep axum's status, e.g. 413 past the body limit.
pub fn json_rejection(rejection: JsonRejection) -> AppError {
  let status = match rejection {
    JsonRejection::BytesRejection(_) => rejection.status(),
    _ => StatusCode::BAD_REQUEST,
  };
  AppError::with_status(status, anyhow!(rejection.body_text()))
}

pub fn similarity_error(err: SimilarityError) -> AppError {
  match err {
    SimilarityError::InvalidInput(_) | SimilarityError::DegenerateVector(_) => {
      AppError::bad_request(err)
    }
    SimilarityError::NumericFault => AppError::new(err),
  }
}

pub fn search_error(err: SearchError) -> AppError {
  let status = match err {
    SearchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
    SearchError::IndexNotFound(_) => StatusCode::NOT_FOUND,
    SearchError::Backend(_) => StatusCode::BAD_GATEWAY,
  };
  AppError::with_status(status, err)
}
