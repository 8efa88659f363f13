use axum::{
  Json, Router,
  routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::utils::AppState;

mod cosine_similarity;
mod health;
mod search;

pub use cosine_similarity::CosineSimilarity;
pub use health::Health;

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Vector Similarity API",
    version = "0.0.1",
    description = "Stateless cosine similarity and search passthrough"
  ),
  paths(
    cosine_similarity::cosine_similarity,
    search::search,
    health::health
  ),
  components(schemas(
    CosineSimilarity,
    Health,
    vecsim_core::SimilarityResult,
    vecsim_search::SearchRequest,
    vecsim_search::SearchHit,
    vecsim_shared::ErrorBody,
  ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route(
      "/cosine_similarity",
      post(cosine_similarity::cosine_similarity),
    )
    .route("/search", post(search::search))
    .route("/health", get(health::health))
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
}
