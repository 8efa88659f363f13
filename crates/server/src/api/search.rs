use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use vecsim_search::{SearchHit, SearchRequest};
use vecsim_shared::{AppError, ErrorBody};

use crate::utils::{AppState, json_rejection, search_error};

/// Forward a match query to the search backend and return its hits
#[utoipa::path(
  post,
  path = "/search",
  request_body = SearchRequest,
  responses(
    (status = 200, description = "Matching documents", body = Vec<SearchHit>),
    (status = 400, description = "Missing or blank query, or invalid index name", body = ErrorBody),
    (status = 404, description = "Index does not exist", body = ErrorBody),
    (status = 502, description = "Search backend unavailable", body = ErrorBody)
  )
)]
#[axum::debug_handler(state = AppState)]
pub async fn search(
  State(state): State<AppState>,
  payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<SearchHit>>, AppError> {
  let Json(request) = payload.map_err(json_rejection)?;
  request.validate().map_err(search_error)?;

  let hits = state.search.search(&request).await.map_err(search_error)?;

  Ok(Json(hits))
}
