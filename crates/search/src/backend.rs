use async_trait::async_trait;

use crate::{SearchError, SearchHit, SearchRequest};

/// A full-text search index reachable over a query/results interface.
///
/// Callers pass requests that already went through
/// [`SearchRequest::validate`].
#[async_trait]
pub trait SearchBackend: Send + Sync {
  async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, SearchError>;
}
