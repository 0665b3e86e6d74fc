/* src/cli/core/src/navigate.rs */

use anyhow::{Result, bail};
use watchpost_router::{Navigation, NavigationError, Navigator};

use crate::config::WatchpostConfig;
use crate::routes::build_table;
use crate::ui::{self, DIM, RESET};

/// One scripted step of a navigation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
  Go(String),
  Back,
  Forward,
}

impl Step {
  pub fn parse(raw: &str) -> Self {
    match raw {
      "back" => Self::Back,
      "forward" => Self::Forward,
      url => Self::Go(url.to_string()),
    }
  }
}

/// Replay steps against a fresh navigator, reporting each outcome.
pub async fn run_navigate(config: &WatchpostConfig, steps: &[Step]) -> Result<()> {
  let table = build_table(config)?;
  let navigator = Navigator::new(table, &config.router.to_router_config());
  ui::banner("navigate");

  let mut failures = 0;
  for step in steps {
    let outcome = match step {
      Step::Go(url) => navigator.navigate(url).await.map(Some),
      Step::Back => navigator.back().await,
      Step::Forward => navigator.forward().await,
    };
    if !report(step, outcome) {
      failures += 1;
    }
  }

  ui::blank();
  let current = navigator.current().unwrap_or_else(|| "(none)".to_string());
  ui::detail(&format!(
    "{DIM}current {current}  back {}  forward {}{RESET}",
    navigator.can_go_back(),
    navigator.can_go_forward()
  ));
  if failures > 0 {
    bail!("{failures} of {} navigation steps failed", steps.len());
  }
  Ok(())
}

fn report(step: &Step, outcome: Result<Option<Navigation>, NavigationError>) -> bool {
  match outcome {
    Ok(Some(Navigation::Rendered { route, view })) => {
      ui::ok(&format!("{} {DIM}({} bytes from {}){RESET}", route.name, view.source.len(), view.chunk));
      let props = ui::format_pairs(&route.props);
      if !props.is_empty() {
        ui::detail(&format!("props {props}"));
      }
      true
    }
    Ok(Some(Navigation::Superseded { url })) => {
      ui::warn(&format!("{url} superseded"));
      true
    }
    Ok(None) => {
      ui::warn(&format!("{step:?}: no history entry"));
      true
    }
    Err(e) => {
      let hint = if e.is_retryable() { " (retryable)" } else { "" };
      ui::fail(&format!("{} {e}{hint}", e.code()));
      false
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn history_keywords_parse() {
    assert_eq!(Step::parse("back"), Step::Back);
    assert_eq!(Step::parse("forward"), Step::Forward);
    assert_eq!(Step::parse("/iocs/search?q=1"), Step::Go("/iocs/search?q=1".into()));
  }

  fn workspace() -> (tempfile::TempDir, WatchpostConfig) {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("views")).unwrap();
    for chunk in watchpost_router::console_chunks() {
      std::fs::write(tmp.path().join(format!("views/{chunk}.html")), chunk).unwrap();
    }
    let config = WatchpostConfig { base_dir: tmp.path().to_path_buf(), ..WatchpostConfig::default() };
    (tmp, config)
  }

  #[tokio::test]
  async fn scripted_session_succeeds() {
    let (_tmp, config) = workspace();
    let steps: Vec<Step> =
      ["/", "/iocs/manage", "back", "forward"].into_iter().map(Step::parse).collect();
    run_navigate(&config, &steps).await.unwrap();
  }

  #[tokio::test]
  async fn unknown_url_fails_session() {
    let (_tmp, config) = workspace();
    let err = run_navigate(&config, &[Step::parse("/nope")]).await.unwrap_err();
    assert!(err.to_string().contains("1 of 1"));
  }

  #[tokio::test]
  async fn missing_chunk_fails_session() {
    let (tmp, config) = workspace();
    std::fs::remove_file(tmp.path().join("views/iocs-search.html")).unwrap();
    assert!(run_navigate(&config, &[Step::parse("/iocs/search")]).await.is_err());
  }
}
