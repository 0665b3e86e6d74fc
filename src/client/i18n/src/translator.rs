/* src/client/i18n/src/translator.rs */

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::bundle::LocaleBundle;
use crate::errors::LocaleError;
use crate::interpolate::interpolate;

/// Frame-consistent view of the active and fallback bundles.
/// Holding one for a whole render pass means a concurrent `set_locale` cannot
/// change the language halfway through.
#[derive(Debug, Clone)]
pub struct Translator {
  active: Arc<LocaleBundle>,
  fallback: Arc<LocaleBundle>,
}

impl Translator {
  pub fn new(active: Arc<LocaleBundle>, fallback: Arc<LocaleBundle>) -> Self {
    Self { active, fallback }
  }

  pub fn locale(&self) -> &str {
    self.active.locale_id()
  }

  /// Active bundle first, then the fallback.
  pub fn lookup(&self, key: &str) -> Result<&str, LocaleError> {
    self.active.get(key).or_else(|| self.fallback.get(key)).ok_or_else(|| LocaleError::KeyMissing {
      key: key.to_string(),
      locale: self.active.locale_id().to_string(),
    })
  }

  /// Translate, showing the raw key when no bundle has it.
  pub fn translate(&self, key: &str) -> String {
    match self.lookup(key) {
      Ok(text) => text.to_string(),
      Err(err) => {
        debug!(error = %err, "showing raw key");
        key.to_string()
      }
    }
  }

  pub fn translate_with(&self, key: &str, params: &BTreeMap<String, String>) -> String {
    interpolate(&self.translate(key), params)
  }
}
