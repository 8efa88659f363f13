use std::sync::Arc;

use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vecsim_search::ElasticsearchBackend;
use vecsim_server::{server, utils::AppState};
use vecsim_shared::{AppEnv, AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  // before the subscriber so RUST_LOG from .env is honoured
  dotenvy::dotenv().ok();
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
          "{}=debug,vecsim_server=debug,vecsim_search=debug,vecsim_shared=debug",
          env!("CARGO_CRATE_NAME")
        )
        .into()
      }),
    )
    .with(tracing_subscriber::fmt::layer())
    .with(ErrorLayer::default())
    .init();

  let env = AppEnv::from_env()?;
  tracing::debug!(?env, "configuration loaded");

  let search = ElasticsearchBackend::new(
    &env.elasticsearch_url,
    &env.search_field,
    env.search_size,
    env.search_timeout,
  )?;
  let app_state = AppState::new(Arc::new(search));

  server(env.server_addr, app_state).await
}
