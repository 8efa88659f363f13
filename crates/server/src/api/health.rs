use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct Health {
  pub status: String,
}

/// Liveness probe
#[utoipa::path(
  get,
  path = "/health",
  responses((status = 200, description = "Service is up", body = Health))
)]
pub async fn health() -> Json<Health> {
  Json(Health {
    status: "ok".to_owned(),
  })
}
