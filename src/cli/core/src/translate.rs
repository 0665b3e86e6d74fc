/* src/cli/core/src/translate.rs */

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use watchpost_i18n::{LocaleProvider, LocaleRegistry};

use crate::config::WatchpostConfig;
use crate::ui::{self, DIM, RESET};

pub fn load_registry(config: &WatchpostConfig) -> Result<Arc<LocaleRegistry>> {
  let dir = config.messages_dir();
  let registry = LocaleRegistry::load_dir(&dir, &config.i18n.locales, &config.i18n.default)
    .with_context(|| format!("failed to load locale bundles from {}", dir.display()))?;
  Ok(Arc::new(registry))
}

/// Print one translated key. Unknown locales resolve through the fallback.
pub fn run_translate(
  config: &WatchpostConfig,
  key: &str,
  locale: Option<&str>,
  params: &BTreeMap<String, String>,
) -> Result<()> {
  let provider = LocaleProvider::new(load_registry(config)?);
  if let Some(locale) = locale {
    let effective = provider.set_locale(locale);
    if effective != locale {
      ui::warn(&format!("locale {locale} is not available, using {effective}"));
    }
  }
  let frame = provider.snapshot();
  if let Err(e) = frame.lookup(key) {
    ui::warn(&format!("{} {e}", e.code()));
  }
  println!("{}", frame.translate_with(key, params));
  Ok(())
}

/// Report keys each bundle lacks relative to the fallback bundle.
pub fn run_lint(config: &WatchpostConfig) -> Result<()> {
  let registry = load_registry(config)?;
  ui::banner("lint-locales");
  let missing = registry.missing_keys();
  for locale in registry.locales() {
    match missing.get(locale) {
      Some(keys) => {
        ui::fail(&format!("{locale}: {} keys missing", keys.len()));
        for key in keys {
          ui::detail(&format!("{DIM}{key}{RESET}"));
        }
      }
      None => ui::ok(locale),
    }
  }
  ui::blank();
  if !missing.is_empty() {
    bail!("{} locales are missing keys present in {}", missing.len(), registry.fallback_id());
  }
  ui::arrow(&format!("all locales cover {}", registry.fallback_id()));
  Ok(())
}
