/* src/cli/core/src/main.rs */

mod config;
mod logging;
mod navigate;
mod routes;
mod translate;
mod ui;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use navigate::Step;

#[derive(Parser)]
#[command(name = "watchpost", about = "Watchpost console navigation and locale tooling")]
struct Cli {
  /// Path to watchpost.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  /// Log at debug level unless RUST_LOG is set
  #[arg(short, long, global = true)]
  verbose: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// List the route table and check that every view chunk exists
  Routes,
  /// Resolve a URL to its route without loading the view
  Resolve {
    /// Browser URL, mount point included (e.g. /iocs/search?q=evil.example)
    url: String,
  },
  /// Replay a navigation session: URLs, `back` and `forward`
  Navigate {
    #[arg(required = true)]
    steps: Vec<String>,
  },
  /// Translate a message key
  Translate {
    key: String,
    /// Locale id (falls back to the default locale when unknown)
    #[arg(short, long)]
    locale: Option<String>,
    /// Interpolation parameter, repeatable
    #[arg(short, long = "param", value_parser = parse_key_val)]
    params: Vec<(String, String)>,
  },
  /// Check every locale bundle for keys missing relative to the default locale
  LintLocales,
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
  let (key, value) = raw.split_once('=').ok_or_else(|| format!("expected KEY=VALUE, got {raw}"))?;
  if key.is_empty() {
    return Err(format!("empty key in {raw}"));
  }
  Ok((key.to_string(), value.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  logging::init(cli.verbose);

  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let config = config::resolve_config(cli.config.as_deref(), &cwd)?;

  match cli.command {
    Command::Routes => routes::run_routes(&config)?,
    Command::Resolve { url } => routes::run_resolve(&config, &url)?,
    Command::Navigate { steps } => {
      let steps: Vec<Step> = steps.iter().map(String::as_str).map(Step::parse).collect();
      navigate::run_navigate(&config, &steps).await?;
    }
    Command::Translate { key, locale, params } => {
      let params: BTreeMap<String, String> = params.into_iter().collect();
      translate::run_translate(&config, &key, locale.as_deref(), &params)?;
    }
    Command::LintLocales => translate::run_lint(&config)?,
  }
  Ok(())
}
