use std::net::SocketAddr;

use axum::{Router, response::Html, routing::get};
use tokio::net::TcpListener;
use vecsim_shared::AppError;

use crate::{
  api,
  utils::{AppState, shutdown_signal},
};

#[axum::debug_handler]
async fn handler() -> Html<&'static str> {
  Html("<h1>Vector Similarity Service</h1>")
}

/// Full router with state applied.
pub fn app(state: AppState) -> Router {
  Router::new()
    .route("/", get(handler))
    .merge(api::app())
    .with_state(state)
}

pub async fn server(addr: SocketAddr, app_state: AppState) -> Result<(), AppError> {
  let listener = TcpListener::bind(addr).await?;

  tracing::info!("server started at http://{addr}");

  axum::serve(listener, app(app_state))
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  tracing::info!("server stopped");

  Ok(())
}
