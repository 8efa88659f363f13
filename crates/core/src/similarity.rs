use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
  SimilarityError, VectorPair,
  vector_pair::{FIRST, SECOND},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SimilarityResult {
  /// Cosine similarity in [-1.0, 1.0]
  pub similarity: f64,
}

/// Compute cosine similarity between the two vectors of a pair.
///
/// Each vector is first divided by its largest absolute component. Cosine
/// similarity is invariant under positive scaling, and this keeps every
/// accumulator within `[0, len]`, so large inputs cannot overflow and tiny
/// ones cannot underflow to a zero norm.
///
/// Returns [`SimilarityError::DegenerateVector`] when either vector is all
/// zeros instead of producing NaN.
pub fn cosine_similarity(pair: &VectorPair) -> Result<f64, SimilarityError> {
  let scale_a = max_abs(pair.a());
  if scale_a == 0.0 {
    return Err(SimilarityError::DegenerateVector(FIRST));
  }
  let scale_b = max_abs(pair.b());
  if scale_b == 0.0 {
    return Err(SimilarityError::DegenerateVector(SECOND));
  }

  let mut dot = 0.0_f64;
  let mut norm_a = 0.0_f64;
  let mut norm_b = 0.0_f64;

  for (&x, &y) in pair.a().iter().zip(pair.b()) {
    let x = x / scale_a;
    let y = y / scale_b;
    dot = x.mul_add(y, dot);
    norm_a = x.mul_add(x, norm_a);
    norm_b = y.mul_add(y, norm_b);
  }

  // sqrt of the product keeps similarity(a, a) exactly 1.0
  let similarity = dot / (norm_a * norm_b).sqrt();
  if !similarity.is_finite() {
    return Err(SimilarityError::NumericFault);
  }

  tracing::trace!(dim = pair.len(), similarity, "computed cosine similarity");

  Ok(similarity.clamp(-1.0, 1.0))
}

fn max_abs(v: &[f64]) -> f64 {
  v.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
}
