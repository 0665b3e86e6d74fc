/* src/client/router/src/navigator.rs */

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::cache::ViewCache;
use crate::config::RouterConfig;
use crate::errors::{NavigationError, RouteError};
use crate::history::History;
use crate::route::{RouteMatch, RouteTable};
use crate::view::ViewModule;

/// What the rendering layer should do after a navigation settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
  Rendered { route: RouteMatch, view: Arc<ViewModule> },
  /// A newer navigation started while this one was loading; its result was discarded.
  Superseded { url: String },
}

impl Navigation {
  pub fn is_rendered(&self) -> bool {
    matches!(self, Self::Rendered { .. })
  }
}

/// History-aware driver tying the route table to the view cache.
pub struct Navigator {
  table: Arc<RouteTable>,
  cache: ViewCache,
  history: Mutex<History>,
  generation: AtomicU64,
}

impl Navigator {
  pub fn new(table: Arc<RouteTable>, config: &RouterConfig) -> Self {
    let cache = ViewCache::for_table(&table, config.load_timeout);
    Self { table, cache, history: Mutex::new(History::new()), generation: AtomicU64::new(0) }
  }

  pub fn table(&self) -> &RouteTable {
    &self.table
  }

  pub fn cache(&self) -> &ViewCache {
    &self.cache
  }

  fn history(&self) -> MutexGuard<'_, History> {
    self.history.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn current(&self) -> Option<String> {
    self.history().current().map(str::to_string)
  }

  pub fn can_go_back(&self) -> bool {
    self.history().can_go_back()
  }

  pub fn can_go_forward(&self) -> bool {
    self.history().can_go_forward()
  }

  /// Navigate to a URL and push it onto the history stack.
  pub async fn navigate(&self, url: &str) -> Result<Navigation, NavigationError> {
    let ticket = self.begin();
    let route = self.table.resolve_url(url)?;
    self.history().push(url);
    info!(url, route = %route.name, "navigate");
    self.render(ticket, url, route).await
  }

  /// Navigate by symbolic name. Ambiguous names fail instead of picking an entry.
  pub async fn navigate_named(
    &self,
    name: &str,
    params: &BTreeMap<String, String>,
  ) -> Result<Navigation, NavigationError> {
    let url = self.table.href(name, params)?;
    self.navigate(&url).await
  }

  /// Step back in history. `Ok(None)` when already at the oldest entry; a
  /// pending navigation is left untouched in that case.
  pub async fn back(&self) -> Result<Option<Navigation>, NavigationError> {
    let Some(url) = self.history().back() else {
      return Ok(None);
    };
    let ticket = self.begin();
    debug!(url = %url, "history back");
    let route = self.table.resolve_url(&url)?;
    self.render(ticket, &url, route).await.map(Some)
  }

  /// Step forward in history. `Ok(None)` when already at the newest entry.
  pub async fn forward(&self) -> Result<Option<Navigation>, NavigationError> {
    let Some(url) = self.history().forward() else {
      return Ok(None);
    };
    let ticket = self.begin();
    debug!(url = %url, "history forward");
    let route = self.table.resolve_url(&url)?;
    self.render(ticket, &url, route).await.map(Some)
  }

  /// Warm the cache for a named route without touching history.
  pub async fn prefetch(&self, name: &str) -> Result<(), NavigationError> {
    let (id, entry) = self.table.by_name(name)?;
    self.cache.load(id, entry).await?;
    Ok(())
  }

  fn begin(&self) -> u64 {
    self.generation.fetch_add(1, Ordering::SeqCst) + 1
  }

  async fn render(
    &self,
    ticket: u64,
    url: &str,
    route: RouteMatch,
  ) -> Result<Navigation, NavigationError> {
    let entry = self
      .table
      .entry(route.id)
      .ok_or_else(|| RouteError::NotFound { path: route.path.clone() })?;
    let loaded = self.cache.load(route.id, entry).await;

    if self.generation.load(Ordering::SeqCst) != ticket {
      debug!(url, "discarding stale navigation result");
      return Ok(Navigation::Superseded { url: url.to_string() });
    }
    let view = loaded?;
    Ok(Navigation::Rendered { route, view })
  }
}
