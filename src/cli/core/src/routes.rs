/* src/cli/core/src/routes.rs */

use std::sync::Arc;

use anyhow::{Context, Result};
use watchpost_router::{FsViewSource, RouteTable, ViewSource, console_routes, legacy_console_routes};

use crate::config::WatchpostConfig;
use crate::ui::{self, DIM, RESET};

pub fn view_source(config: &WatchpostConfig) -> FsViewSource {
  FsViewSource::new(config.views_dir()).extension(config.router.view_extension.as_str())
}

/// Assemble the console table against the configured views directory and mount point.
pub fn build_table(config: &WatchpostConfig) -> Result<Arc<RouteTable>> {
  let source: Arc<dyn ViewSource> = Arc::new(view_source(config));
  let builder =
    if config.router.legacy_names { legacy_console_routes(&source) } else { console_routes(&source) };
  let base = config.router.to_router_config().base;
  let table = builder.base(&base).build().context("invalid route table")?;
  Ok(Arc::new(table))
}

/// List the table in order and flag routes whose view chunk is missing on disk.
pub fn run_routes(config: &WatchpostConfig) -> Result<()> {
  let table = build_table(config)?;
  let source = view_source(config);
  ui::banner("routes");
  ui::detail(&format!("{DIM}base {}  views {}{RESET}", table.base(), config.views_dir().display()));
  ui::blank();

  let chunks: Vec<&str> = watchpost_router::console_chunks().collect();
  let mut missing = 0;
  for ((id, entry), chunk) in table.entries().zip(chunks) {
    let id = id.to_string();
    let line = format!("{id:<3} {:<24} {:<22} {DIM}{chunk}{RESET}", entry.path, entry.name);
    if source.chunk_path(chunk).is_file() {
      ui::ok(&line);
    } else {
      missing += 1;
      ui::warn(&format!("{line} (missing {})", source.chunk_path(chunk).display()));
    }
  }
  ui::blank();
  if missing > 0 {
    ui::warn(&format!("{missing} of {} view chunks not found", table.len()));
  } else {
    ui::ok(&format!("{} routes", table.len()));
  }
  Ok(())
}

/// Resolve one URL without loading anything.
pub fn run_resolve(config: &WatchpostConfig, url: &str) -> Result<()> {
  let table = build_table(config)?;
  match table.resolve_url(url) {
    Ok(m) => {
      ui::ok(&format!("{url} -> {} {DIM}({} {}){RESET}", m.name, m.id, m.path));
      let props = ui::format_pairs(&m.props);
      if !props.is_empty() {
        ui::detail(&format!("props {props}"));
      }
      Ok(())
    }
    Err(e) => {
      ui::fail(&format!("{} {e}", e.code()));
      Err(e).with_context(|| format!("cannot resolve {url}"))
    }
  }
}
