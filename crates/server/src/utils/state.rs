use std::sync::Arc;

use vecsim_search::SearchBackend;

/// Handles shared by all request handlers. Built once in `main`.
#[derive(Clone)]
pub struct AppState {
  pub search: Arc<dyn SearchBackend>,
}

impl AppState {
  #[must_use]
  pub fn new(search: Arc<dyn SearchBackend>) -> Self {
    Self { search }
  }
}
