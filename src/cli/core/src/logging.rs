/* src/cli/core/src/logging.rs */

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, registry, util::SubscriberInitExt};

const DEFAULT_LEVEL: &str = "info";

/// Install the global subscriber. `RUST_LOG` wins over `--verbose`.
/// Logs go to stderr so command output on stdout stays pipeable.
pub fn init(verbose: bool) {
  let default_level = if verbose { "debug" } else { DEFAULT_LEVEL };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
  // A second init (tests, embedding) keeps the first subscriber.
  let _ = registry().with(filter).with(stderr_layer).try_init();
}
