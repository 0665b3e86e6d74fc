/* src/client/router/src/cache.rs */

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::Shared;
use tracing::{debug, warn};

use crate::config::DEFAULT_LOAD_TIMEOUT;
use crate::errors::ViewLoadError;
use crate::route::{RouteEntry, RouteId, RouteTable};
use crate::view::{BoxFuture, ViewModule};

type LoadResult = Result<Arc<ViewModule>, ViewLoadError>;
type SharedLoad = Shared<BoxFuture<LoadResult>>;

enum Slot {
  Empty,
  Pending(SharedLoad),
  Loaded(Arc<ViewModule>),
}

/// Memoized view modules, one slot per route id.
///
/// A slot turns `Pending` before the fetch is polled, so a second load of the
/// same route joins the in-flight future instead of fetching again.
pub struct ViewCache {
  slots: Mutex<Vec<Slot>>,
  timeout: Duration,
}

impl ViewCache {
  pub fn new(routes: usize, timeout: Duration) -> Self {
    let slots = (0..routes).map(|_| Slot::Empty).collect();
    Self { slots: Mutex::new(slots), timeout }
  }

  pub fn for_table(table: &RouteTable, timeout: Duration) -> Self {
    Self::new(table.len(), timeout)
  }

  fn lock(&self) -> MutexGuard<'_, Vec<Slot>> {
    self.slots.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn is_loaded(&self, id: RouteId) -> bool {
    matches!(self.lock().get(id.index()), Some(Slot::Loaded(_)))
  }

  pub fn is_pending(&self, id: RouteId) -> bool {
    matches!(self.lock().get(id.index()), Some(Slot::Pending(_)))
  }

  /// Load the view for `entry`, fetching at most once per route.
  /// A failed fetch empties the slot so the next call retries.
  pub async fn load(&self, id: RouteId, entry: &RouteEntry) -> LoadResult {
    let fut = {
      let mut slots = self.lock();
      let Some(slot) = slots.get_mut(id.index()) else {
        return Err(ViewLoadError::fetch(&entry.name, format!("route {id} is outside the cache")));
      };
      match slot {
        Slot::Loaded(view) => {
          debug!(route = %entry.name, "view cache hit");
          return Ok(Arc::clone(view));
        }
        Slot::Pending(shared) => {
          debug!(route = %entry.name, "joining in-flight view load");
          shared.clone()
        }
        Slot::Empty => {
          debug!(route = %entry.name, "fetching view");
          let shared = self.start(entry).shared();
          *slot = Slot::Pending(shared.clone());
          shared
        }
      }
    };

    let result = fut.clone().await;

    let mut slots = self.lock();
    let still_ours = matches!(slots.get(id.index()), Some(Slot::Pending(current)) if current.ptr_eq(&fut));
    if still_ours {
      slots[id.index()] = match &result {
        Ok(view) => Slot::Loaded(Arc::clone(view)),
        Err(_) => Slot::Empty,
      };
    }
    result
  }

  fn start(&self, entry: &RouteEntry) -> BoxFuture<LoadResult> {
    let fetch = (entry.loader)();
    let timeout = self.timeout;
    let route = entry.name.clone();
    Box::pin(async move {
      match tokio::time::timeout(timeout, fetch).await {
        Ok(Ok(view)) => Ok(Arc::new(view)),
        Ok(Err(err)) => {
          warn!(route = %route, error = %err, "view load failed");
          Err(err)
        }
        Err(_) => {
          warn!(route = %route, ?timeout, "view load timed out");
          Err(ViewLoadError::Timeout { chunk: route, after: timeout })
        }
      }
    })
  }

  /// Drop a loaded module so the next navigation fetches it again.
  pub fn evict(&self, id: RouteId) {
    if let Some(slot) = self.lock().get_mut(id.index())
      && matches!(slot, Slot::Loaded(_))
    {
      *slot = Slot::Empty;
    }
  }
}

impl Default for ViewCache {
  fn default() -> Self {
    Self::new(0, DEFAULT_LOAD_TIMEOUT)
  }
}
