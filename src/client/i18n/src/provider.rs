/* src/client/i18n/src/provider.rs */

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info};

use crate::bundle::LocaleBundle;
use crate::errors::LocaleError;
use crate::registry::LocaleRegistry;
use crate::translator::Translator;

/// Process-wide active locale over a fixed registry of bundles.
/// Renderers receive it by reference and take a `snapshot()` per frame.
#[derive(Debug)]
pub struct LocaleProvider {
  registry: Arc<LocaleRegistry>,
  active: RwLock<Arc<LocaleBundle>>,
}

impl LocaleProvider {
  /// Starts on the registry's fallback locale.
  pub fn new(registry: Arc<LocaleRegistry>) -> Self {
    let active = RwLock::new(Arc::clone(registry.fallback()));
    Self { registry, active }
  }

  pub fn with_locale(registry: Arc<LocaleRegistry>, locale: &str) -> Self {
    let provider = Self::new(registry);
    provider.set_locale(locale);
    provider
  }

  pub fn registry(&self) -> &LocaleRegistry {
    &self.registry
  }

  /// Switch the active locale in one swap. Unregistered ids select the
  /// fallback locale instead. Returns the locale that is now active.
  pub fn set_locale(&self, locale: &str) -> String {
    let bundle = match self.registry.get(locale) {
      Some(bundle) => Arc::clone(bundle),
      None => {
        let err = LocaleError::NotFound { locale: locale.to_string() };
        debug!(error = %err, fallback = self.registry.fallback_id(), "using fallback locale");
        Arc::clone(self.registry.fallback())
      }
    };
    let effective = bundle.locale_id().to_string();
    *self.active.write().unwrap_or_else(PoisonError::into_inner) = bundle;
    info!(locale = %effective, "active locale");
    effective
  }

  /// Registered locale ids, in registration order.
  pub fn locales(&self) -> impl Iterator<Item = &str> {
    self.registry.locales()
  }

  pub fn active_locale(&self) -> String {
    self.current().locale_id().to_string()
  }

  fn current(&self) -> Arc<LocaleBundle> {
    let guard = self.active.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&*guard)
  }

  pub fn snapshot(&self) -> Translator {
    Translator::new(self.current(), Arc::clone(self.registry.fallback()))
  }

  pub fn translate(&self, key: &str) -> String {
    self.snapshot().translate(key)
  }

  pub fn translate_with(&self, key: &str, params: &BTreeMap<String, String>) -> String {
    self.snapshot().translate_with(key, params)
  }
}
