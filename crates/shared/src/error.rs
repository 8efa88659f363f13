use std::{backtrace::BacktraceStatus, fmt::Display};

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
  pub error: String,
}

#[derive(Debug)]
pub struct AppError {
  err: anyhow::Error,
  status_code: StatusCode,
}

impl AppError {
  /// Create with 500 status
  pub fn new<E: Into<anyhow::Error>>(err: E) -> Self {
    Self {
      err: err.into(),
      status_code: StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Create with custom status
  pub fn with_status<E: Into<anyhow::Error>>(status: StatusCode, err: E) -> Self {
    Self {
      err: err.into(),
      status_code: status,
    }
  }

  /// Create with 400 status
  pub fn bad_request<E: Into<anyhow::Error>>(err: E) -> Self {
    Self::with_status(StatusCode::BAD_REQUEST, err)
  }

  #[must_use]
  pub const fn status_code(&self) -> StatusCode {
    self.status_code
  }

  /// Message sent to the caller.
  ///
  /// A bare 500 never exposes the underlying error. Other statuses show the
  /// outermost message only, so attaching `.context(..)` to a backend error
  /// controls what leaks.
  #[must_use]
  pub fn public_message(&self) -> String {
    if self.status_code == StatusCode::INTERNAL_SERVER_ERROR {
      "internal server error".to_owned()
    } else {
      self.err.to_string()
    }
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    if self.status_code.is_server_error() {
      let bt = self.err.backtrace();
      if bt.status() == BacktraceStatus::Captured {
        tracing::error!(status = %self.status_code, "{:#}\nBacktrace:\n{}", self.err, bt);
      } else {
        tracing::error!(status = %self.status_code, "{:#}", self.err);
      }
    } else {
      tracing::debug!(status = %self.status_code, "{:#}", self.err);
    }

    let body = ErrorBody {
      error: self.public_message(),
    };
    (self.status_code, Json(body)).into_response()
  }
}

impl Display for AppError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}] {}", self.status_code, self.err)
  }
}

impl<E> From<E> for AppError
where
  E: Into<anyhow::Error>,
{
  fn from(err: E) -> Self {
    Self::new(err)
  }
}
