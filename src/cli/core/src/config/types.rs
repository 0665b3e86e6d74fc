/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, bail};
use serde::Deserialize;
use watchpost_i18n::{DEFAULT_LOCALE, SUPPORTED_LOCALES};
use watchpost_router::{BASE_URL_ENV, RouterConfig, normalize_base};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchpostConfig {
  #[serde(default)]
  pub router: RouterSection,
  #[serde(default)]
  pub i18n: I18nSection,
  /// Directory relative paths resolve against. Set by the loader, never read from TOML.
  #[serde(skip)]
  pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouterSection {
  /// Mount point. `BASE_URL` in the environment takes precedence.
  pub base: Option<String>,
  #[serde(default = "default_views_dir")]
  pub views_dir: String,
  #[serde(default = "default_view_extension")]
  pub view_extension: String,
  #[serde(default = "default_load_timeout_ms")]
  pub load_timeout_ms: u64,
  /// Use the table as first shipped, duplicate `iocs-manage` name included.
  #[serde(default)]
  pub legacy_names: bool,
}

impl Default for RouterSection {
  fn default() -> Self {
    Self {
      base: None,
      views_dir: default_views_dir(),
      view_extension: default_view_extension(),
      load_timeout_ms: default_load_timeout_ms(),
      legacy_names: false,
    }
  }
}

impl RouterSection {
  pub fn validate(&self) -> Result<()> {
    if self.load_timeout_ms == 0 {
      bail!("router.load_timeout_ms must be greater than zero");
    }
    if self.view_extension.is_empty() || self.view_extension.contains('/') {
      bail!("router.view_extension {:?} is not a file extension", self.view_extension);
    }
    Ok(())
  }

  /// Environment first, then the config file, then "/".
  pub fn effective_base(&self, env_base: Option<&str>) -> String {
    normalize_base(env_base.or(self.base.as_deref()).unwrap_or("/"))
  }

  pub fn to_router_config(&self) -> RouterConfig {
    let env_base = std::env::var(BASE_URL_ENV).ok();
    RouterConfig::new(&self.effective_base(env_base.as_deref()))
      .load_timeout(Duration::from_millis(self.load_timeout_ms))
  }
}

fn default_views_dir() -> String {
  "views".to_string()
}

fn default_view_extension() -> String {
  "html".to_string()
}

fn default_load_timeout_ms() -> u64 {
  30_000
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  #[serde(default = "default_locales")]
  pub locales: Vec<String>,
  #[serde(default = "default_i18n_default")]
  pub default: String,
  #[serde(default = "default_messages_dir")]
  pub messages_dir: String,
}

impl Default for I18nSection {
  fn default() -> Self {
    Self {
      locales: default_locales(),
      default: default_i18n_default(),
      messages_dir: default_messages_dir(),
    }
  }
}

impl I18nSection {
  pub fn validate(&self) -> Result<()> {
    if self.locales.is_empty() {
      bail!("i18n.locales must not be empty");
    }
    if !self.locales.contains(&self.default) {
      bail!("i18n.default \"{}\" is not in i18n.locales {:?}", self.default, self.locales);
    }
    Ok(())
  }
}

fn default_locales() -> Vec<String> {
  SUPPORTED_LOCALES.iter().map(|s| (*s).to_string()).collect()
}

fn default_i18n_default() -> String {
  DEFAULT_LOCALE.to_string()
}

fn default_messages_dir() -> String {
  "locales".to_string()
}

impl WatchpostConfig {
  pub fn validate(&self) -> Result<()> {
    self.router.validate()?;
    self.i18n.validate()
  }

  pub fn views_dir(&self) -> PathBuf {
    self.resolve(&self.router.views_dir)
  }

  pub fn messages_dir(&self) -> PathBuf {
    self.resolve(&self.i18n.messages_dir)
  }

  fn resolve(&self, rel: &str) -> PathBuf {
    let path = Path::new(rel);
    if path.is_absolute() { path.to_path_buf() } else { self.base_dir.join(path) }
  }
}
