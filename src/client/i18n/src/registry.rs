/* src/client/i18n/src/registry.rs */

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::bundle::LocaleBundle;
use crate::errors::LocaleError;

pub const DEFAULT_LOCALE: &str = "en";

/// Languages the console ships bundles for.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "fr", "es", "cat", "ru", "pt", "it", "de"];

/// Every loaded bundle, keyed by locale id, plus the fallback bundle.
#[derive(Debug)]
pub struct LocaleRegistry {
  bundles: BTreeMap<String, Arc<LocaleBundle>>,
  /// Registration order, for listing.
  order: Vec<String>,
  fallback: Arc<LocaleBundle>,
}

impl LocaleRegistry {
  pub fn new(
    fallback: &str,
    bundles: impl IntoIterator<Item = LocaleBundle>,
  ) -> Result<Self, LocaleError> {
    let mut map = BTreeMap::new();
    let mut order = Vec::new();
    for bundle in bundles {
      let id = bundle.locale_id().to_string();
      if map.insert(id.clone(), Arc::new(bundle)).is_none() {
        order.push(id);
      }
    }
    let fallback = map
      .get(fallback)
      .cloned()
      .ok_or_else(|| LocaleError::MissingFallback { locale: fallback.to_string() })?;
    Ok(Self { bundles: map, order, fallback })
  }

  /// Build from already-parsed JSON, one value per locale.
  pub fn from_messages<'a>(
    fallback: &str,
    messages: impl IntoIterator<Item = (&'a str, &'a Value)>,
  ) -> Result<Self, LocaleError> {
    let bundles = messages
      .into_iter()
      .map(|(id, value)| LocaleBundle::from_json(id, value))
      .collect::<Result<Vec<_>, _>>()?;
    Self::new(fallback, bundles)
  }

  /// Eagerly read `<dir>/<locale>.json` for every locale.
  pub fn load_dir(dir: &Path, locales: &[String], fallback: &str) -> Result<Self, LocaleError> {
    let mut bundles = Vec::with_capacity(locales.len());
    for locale in locales {
      let path = dir.join(format!("{locale}.json"));
      let content = std::fs::read_to_string(&path)
        .map_err(|source| LocaleError::Io { path: path.clone(), source })?;
      let value: Value =
        serde_json::from_str(&content).map_err(|source| LocaleError::Parse { path, source })?;
      bundles.push(LocaleBundle::from_json(locale.as_str(), &value)?);
    }
    let registry = Self::new(fallback, bundles)?;
    info!(dir = %dir.display(), locales = registry.order.len(), fallback, "loaded locale bundles");
    Ok(registry)
  }

  pub fn get(&self, locale: &str) -> Option<&Arc<LocaleBundle>> {
    self.bundles.get(locale)
  }

  pub fn contains(&self, locale: &str) -> bool {
    self.bundles.contains_key(locale)
  }

  pub fn fallback(&self) -> &Arc<LocaleBundle> {
    &self.fallback
  }

  pub fn fallback_id(&self) -> &str {
    self.fallback.locale_id()
  }

  pub fn locales(&self) -> impl Iterator<Item = &str> {
    self.order.iter().map(String::as_str)
  }

  /// Keys present in the fallback bundle but absent from each other bundle.
  /// Locales with full coverage are omitted.
  pub fn missing_keys(&self) -> BTreeMap<String, Vec<String>> {
    let mut report = BTreeMap::new();
    for (id, bundle) in &self.bundles {
      if id == self.fallback_id() {
        continue;
      }
      let missing: Vec<String> =
        self.fallback.keys().filter(|k| !bundle.contains(k)).map(str::to_string).collect();
      if !missing.is_empty() {
        report.insert(id.clone(), missing);
      }
    }
    report
  }
}
