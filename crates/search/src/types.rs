use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::SearchError;

// Elasticsearch rejects these anywhere in an index name. `%` is also refused
// so an encoded `.`/`..` can never pass as a name.
const FORBIDDEN_INDEX_CHARS: &[char] = &[
  '\\', '/', '*', '?', '"', '<', '>', '|', ' ', ',', '#', ':', '%',
];
const MAX_INDEX_BYTES: usize = 255;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SearchRequest {
  /// Text matched against the configured document field
  pub query: String,
  /// Name of the index to search
  pub index: String,
}

impl SearchRequest {
  /// Reject blank fields and index names that would not address a single
  /// index, since the name is interpolated into the backend URL path.
  pub fn validate(&self) -> Result<(), SearchError> {
    if self.query.trim().is_empty() {
      return Err(SearchError::InvalidRequest(
        "query cannot be empty".to_owned(),
      ));
    }

    let index = self.index.as_str();
    if index.trim().is_empty() {
      return Err(SearchError::InvalidRequest(
        "index cannot be empty".to_owned(),
      ));
    }
    if index == "." || index == ".." || index.starts_with(['-', '_', '+']) {
      return Err(invalid_index(index));
    }
    if index.len() > MAX_INDEX_BYTES
      || index
        .chars()
        .any(|c| c.is_uppercase() || c.is_control() || FORBIDDEN_INDEX_CHARS.contains(&c))
    {
      return Err(invalid_index(index));
    }
    Ok(())
  }
}

fn invalid_index(index: &str) -> SearchError {
  SearchError::InvalidRequest(format!("invalid index name: {index:?}"))
}

/// One matching document, in the backend's hit shape.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct SearchHit {
  #[serde(rename = "_index")]
  pub index: String,
  #[serde(rename = "_id")]
  pub id: String,
  /// Relevance score; absent when the backend sorts by other criteria
  #[serde(rename = "_score", default)]
  pub score: Option<f64>,
  /// Stored document body
  #[serde(rename = "_source", default)]
  #[schema(value_type = Object)]
  pub source: serde_json::Value,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn req(query: &str, index: &str) -> SearchRequest {
    SearchRequest {
      query: query.to_owned(),
      index: index.to_owned(),
    }
  }

  #[test]
  fn valid_request() {
    assert!(req("rust", "articles").validate().is_ok());
    assert!(req("rust", "logs-2024.01").validate().is_ok());
    assert!(req("rust", ".hidden").validate().is_ok());
  }

  #[test]
  fn blank_fields_rejected() {
    let err = req("  ", "articles").validate().unwrap_err();
    assert_eq!(err.to_string(), "query cannot be empty");
    let err = req("rust", "").validate().unwrap_err();
    assert_eq!(err.to_string(), "index cannot be empty");
  }

  #[test]
  fn path_like_index_rejected() {
    for index in ["a/b", "../_cluster", "..", "_all", "-x", "Articles", "a,b", "a?b=1", "a#b"] {
      assert!(
        matches!(req("q", index).validate(), Err(SearchError::InvalidRequest(_))),
        "{index}"
      );
    }
  }

  #[test]
  fn encoded_and_control_chars_rejected() {
    for index in ["%2e%2e", "%2e", "%2E%2E", "docs%2f..", "pub\tlic", "pub\nlic", "docs\r", "a\u{0}"] {
      let err = req("q", index).validate().unwrap_err();
      assert!(
        err.to_string().starts_with("invalid index name"),
        "{index:?}: {err}"
      );
    }
  }

  #[test]
  fn hit_parses_backend_shape() {
    let hit: SearchHit = serde_json::from_value(serde_json::json!({
      "_index": "articles",
      "_id": "42",
      "_score": 1.5,
      "_ignored": ["x"],
      "_source": { "content": "hello" }
    }))
    .unwrap();
    assert_eq!(hit.index, "articles");
    assert_eq!(hit.id, "42");
    assert_eq!(hit.score, Some(1.5));
    assert_eq!(hit.source["content"], "hello");

    let out = serde_json::to_value(&hit).unwrap();
    assert!(out.get("_ignored").is_none());
    assert_eq!(out["_score"], 1.5);
  }

  #[test]
  fn hit_without_score_or_source() {
    let hit: SearchHit =
      serde_json::from_str(r#"{"_index":"a","_id":"1","_score":null}"#).unwrap();
    assert_eq!(hit.score, None);
    assert!(hit.source.is_null());
  }
}
