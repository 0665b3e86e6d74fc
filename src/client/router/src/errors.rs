/* src/client/router/src/errors.rs */

use std::time::Duration;

use thiserror::Error;

/// Failures of the route table itself: lookups and construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
  #[error("no route matches {path}")]
  NotFound { path: String },
  #[error("no route is named {name}")]
  UnknownName { name: String },
  #[error("route name {name} is shared by {}", .paths.join(", "))]
  AmbiguousName { name: String, paths: Vec<String> },
  #[error("route name {name} is used by both {first} and {second}")]
  DuplicateName { name: String, first: String, second: String },
  #[error("route path {path:?} must start with '/'")]
  InvalidPath { path: String },
  #[error("route {name} needs parameter {param}")]
  MissingParam { name: String, param: String },
}

fn default_status(code: &str) -> u16 {
  match code {
    "NOT_FOUND" | "UNKNOWN_ROUTE_NAME" => 404,
    "AMBIGUOUS_ROUTE_NAME" => 409,
    "MISSING_ROUTE_PARAM" => 400,
    _ => 500,
  }
}

impl RouteError {
  pub fn code(&self) -> &'static str {
    match self {
      Self::NotFound { .. } => "NOT_FOUND",
      Self::UnknownName { .. } => "UNKNOWN_ROUTE_NAME",
      Self::AmbiguousName { .. } => "AMBIGUOUS_ROUTE_NAME",
      Self::DuplicateName { .. } => "DUPLICATE_ROUTE_NAME",
      Self::InvalidPath { .. } => "INVALID_ROUTE_PATH",
      Self::MissingParam { .. } => "MISSING_ROUTE_PARAM",
    }
  }

  /// HTTP-like status a host can use to pick the page it shows instead.
  pub fn status(&self) -> u16 {
    default_status(self.code())
  }
}

/// A deferred view fetch that rejected or ran out of time.
///
/// Clonable because one in-flight fetch is shared by every navigation waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewLoadError {
  #[error("failed to load view {chunk}: {message}")]
  Fetch { chunk: String, message: String },
  #[error("loading view {chunk} timed out after {after:?}")]
  Timeout { chunk: String, after: Duration },
}

impl ViewLoadError {
  pub fn fetch(chunk: impl Into<String>, message: impl Into<String>) -> Self {
    Self::Fetch { chunk: chunk.into(), message: message.into() }
  }

  pub fn code(&self) -> &'static str {
    match self {
      Self::Fetch { .. } => "VIEW_LOAD_FAILED",
      Self::Timeout { .. } => "VIEW_LOAD_TIMEOUT",
    }
  }

  pub fn chunk(&self) -> &str {
    match self {
      Self::Fetch { chunk, .. } | Self::Timeout { chunk, .. } => chunk,
    }
  }
}

/// Everything a navigation can hand back to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
  #[error(transparent)]
  Route(#[from] RouteError),
  #[error(transparent)]
  Load(#[from] ViewLoadError),
}

impl NavigationError {
  pub fn code(&self) -> &'static str {
    match self {
      Self::Route(e) => e.code(),
      Self::Load(e) => e.code(),
    }
  }

  /// Load failures are worth a retry prompt; routing failures are not.
  pub fn is_retryable(&self) -> bool {
    matches!(self, Self::Load(_))
  }
}
