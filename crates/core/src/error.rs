use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimilarityError {
  /// Input violates the shape rules of a [`crate::VectorPair`].
  #[error("{0}")]
  InvalidInput(String),

  /// One of the vectors has zero magnitude, so the angle is undefined.
  #[error("{0} has zero magnitude, cosine similarity is undefined")]
  DegenerateVector(&'static str),

  /// The computation produced a non-finite value.
  #[error("cosine similarity computation produced a non-finite value")]
  NumericFault,
}
