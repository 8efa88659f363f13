use axum::{Json, extract::rejection::JsonRejection};
use serde::Deserialize;
use utoipa::ToSchema;
use vecsim_core::{SimilarityResult, VectorPair};
use vecsim_shared::{AppError, ErrorBody};

use crate::utils::{json_rejection, similarity_error};

#[derive(Deserialize, ToSchema)]
pub struct CosineSimilarity {
  /// First vector, non-empty
  pub vector1: Vec<f64>,
  /// Second vector, same length as `vector1`
  pub vector2: Vec<f64>,
}

/// Compute the cosine similarity of two vectors
#[utoipa::path(
  post,
  path = "/cosine_similarity",
  request_body = CosineSimilarity,
  responses(
    (status = 200, description = "Similarity in [-1, 1]", body = SimilarityResult),
    (status = 400, description = "Missing field, empty vector, length mismatch, non-numeric element or zero-magnitude vector", body = ErrorBody),
    (status = 500, description = "Internal numeric fault", body = ErrorBody)
  )
)]
#[axum::debug_handler]
pub async fn cosine_similarity(
  payload: Result<Json<CosineSimilarity>, JsonRejection>,
) -> Result<Json<SimilarityResult>, AppError> {
  let Json(payload) = payload.map_err(json_rejection)?;

  let pair = VectorPair::new(payload.vector1, payload.vector2).map_err(similarity_error)?;
  let similarity = vecsim_core::cosine_similarity(&pair).map_err(similarity_error)?;

  Ok(Json(SimilarityResult { similarity }))
}
