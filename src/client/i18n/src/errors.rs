/* src/client/i18n/src/errors.rs */

use std::path::PathBuf;

use thiserror::Error;

/// `NotFound` and `KeyMissing` are recovered inside the provider and never
/// reach callers of `set_locale` / `translate`. The rest are load-time failures.
#[derive(Debug, Error)]
pub enum LocaleError {
  #[error("locale {locale} is not registered")]
  NotFound { locale: String },
  #[error("key {key} has no translation in {locale} or its fallback")]
  KeyMissing { key: String, locale: String },
  #[error("fallback locale {locale} has no bundle")]
  MissingFallback { locale: String },
  #[error("bundle for {locale} must be a JSON object")]
  NotAnObject { locale: String },
  #[error("failed to read {}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to parse {}", path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

impl LocaleError {
  pub fn code(&self) -> &'static str {
    match self {
      Self::NotFound { .. } => "LOCALE_NOT_FOUND",
      Self::KeyMissing { .. } => "TRANSLATION_KEY_MISSING",
      Self::MissingFallback { .. } => "MISSING_FALLBACK_LOCALE",
      Self::NotAnObject { .. } => "INVALID_BUNDLE",
      Self::Io { .. } => "BUNDLE_READ_FAILED",
      Self::Parse { .. } => "BUNDLE_PARSE_FAILED",
    }
  }
}
