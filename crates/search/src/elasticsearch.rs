use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::{SearchBackend, SearchError, SearchHit, SearchRequest};

/// Runs a `match` query against one field of an Elasticsearch index.
#[derive(Debug, Clone)]
pub struct ElasticsearchBackend {
  client: Client,
  base_url: Url,
  field: String,
  size: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
  hits: Hits,
}

#[derive(Deserialize)]
struct Hits {
  hits: Vec<SearchHit>,
}

impl ElasticsearchBackend {
  pub fn new(
    base_url: impl AsRef<str>,
    field: impl Into<String>,
    size: usize,
    timeout: Duration,
  ) -> Result<Self, SearchError> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| SearchError::Backend(e.into()))?;

    let base_url = Url::parse(base_url.as_ref()).map_err(|e| SearchError::Backend(e.into()))?;
    if base_url.cannot_be_a_base() {
      return Err(SearchError::Backend(
        format!("{base_url} cannot be used as a base url").into(),
      ));
    }

    Ok(Self {
      client,
      base_url,
      field: field.into(),
      size,
    })
  }

  /// `{base_url}/{index}/_search`, with `index` percent-encoded as exactly
  /// one path segment.
  fn search_url(&self, index: &str) -> Url {
    let mut url = self.base_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
      segments.pop_if_empty().push(index).push("_search");
    }
    url
  }
}

/// Request body sent to `/{index}/_search`.
pub(crate) fn build_query(field: &str, query: &str, size: usize) -> Value {
  let mut matcher = Map::new();
  matcher.insert(field.to_owned(), Value::from(query));
  json!({
    "query": { "match": matcher },
    "size": size
  })
}

#[async_trait]
impl SearchBackend for ElasticsearchBackend {
  #[tracing::instrument(skip(self), fields(index = %request.index))]
  async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, SearchError> {
    let response = self
      .client
      .post(self.search_url(&request.index))
      .json(&build_query(&self.field, &request.query, self.size))
      .send()
      .await
      .map_err(|e| SearchError::Backend(e.into()))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
      return Err(SearchError::IndexNotFound(request.index.clone()));
    }
    if !status.is_success() {
      let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
      return Err(SearchError::Backend(
        format!("elasticsearch returned {status}: {body}").into(),
      ));
    }

    let parsed: SearchResponse = response
      .json()
      .await
      .map_err(|e| SearchError::Backend(e.into()))?;

    tracing::debug!(hits = parsed.hits.hits.len(), "search completed");

    Ok(parsed.hits.hits)
  }
}
