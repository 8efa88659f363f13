use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum SearchError {
  #[error("{0}")]
  InvalidRequest(String),

  #[error("index not found: {0}")]
  IndexNotFound(String),

  #[error("search backend unavailable")]
  Backend(#[source] BoxError),
}
