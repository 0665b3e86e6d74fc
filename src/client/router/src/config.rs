/* src/client/router/src/config.rs */

use std::time::Duration;

/// Environment variable carrying the application mount point.
pub const BASE_URL_ENV: &str = "BASE_URL";

pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Startup configuration for the navigation resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
  /// Mount point every route is anchored under. Always starts and ends with '/'.
  pub base: String,
  /// Upper bound for one view fetch.
  pub load_timeout: Duration,
}

impl Default for RouterConfig {
  fn default() -> Self {
    Self { base: "/".to_string(), load_timeout: DEFAULT_LOAD_TIMEOUT }
  }
}

impl RouterConfig {
  pub fn new(base: &str) -> Self {
    Self { base: normalize_base(base), ..Self::default() }
  }

  /// Read the mount point from `BASE_URL`, falling back to "/".
  pub fn from_env() -> Self {
    match std::env::var(BASE_URL_ENV) {
      Ok(base) => Self::new(&base),
      Err(_) => Self::default(),
    }
  }

  pub fn load_timeout(mut self, timeout: Duration) -> Self {
    self.load_timeout = timeout;
    self
  }
}

/// "app" -> "/app/", "" -> "/", "/app/" unchanged.
pub fn normalize_base(base: &str) -> String {
  let trimmed = base.trim().trim_matches('/');
  if trimmed.is_empty() { "/".to_string() } else { format!("/{trimmed}/") }
}

/// Remove the mount point from an incoming URL. `None` when the URL lives outside it.
pub(crate) fn strip_base<'a>(base: &str, url: &'a str) -> Option<&'a str> {
  if base == "/" {
    return Some(url);
  }
  // "/app" addresses the root of a "/app/" mount
  if url == &base[..base.len() - 1] {
    return Some("/");
  }
  url.strip_prefix(&base[..base.len() - 1]).filter(|rest| rest.starts_with('/'))
}
