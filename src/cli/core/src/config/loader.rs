/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::WatchpostConfig;

pub const CONFIG_FILE: &str = "watchpost.toml";

/// Walk upward from `start` to find `watchpost.toml`, like Cargo.toml discovery
pub fn find_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_config(path: &Path) -> Result<WatchpostConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let mut config: WatchpostConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
  Ok(config)
}

/// Explicit path, else upward discovery, else built-in defaults rooted at `cwd`.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<WatchpostConfig> {
  if let Some(path) = explicit {
    return load_config(path);
  }
  match find_config(cwd) {
    Ok(path) => load_config(&path),
    Err(e) => {
      tracing::debug!(error = %e, "no config file, using defaults");
      Ok(WatchpostConfig { base_dir: cwd.to_path_buf(), ..WatchpostConfig::default() })
    }
  }
}
