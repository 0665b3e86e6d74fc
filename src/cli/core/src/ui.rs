/* src/cli/core/src/ui.rs */

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn ok(msg: &str) {
  println!("  {GREEN}\u{2713}{RESET} {msg}");
}

pub fn fail(msg: &str) {
  println!("  {RED}\u{2717}{RESET} {msg}");
}

/// Warnings go to stderr so piped command output stays clean.
pub fn warn(msg: &str) {
  eprintln!("  {YELLOW}!{RESET} {msg}");
}

pub fn arrow(msg: &str) {
  println!("  {GREEN}\u{2192}{RESET} {msg}");
}

pub fn detail(msg: &str) {
  println!("        {msg}");
}

pub fn banner(cmd: &str) {
  println!();
  println!("  {BOLD}Watchpost{RESET} {cmd} {DIM}v{VERSION}{RESET}");
  println!();
}

/// Render `k=v` pairs as `{k: v, ...}`, or an empty string when there are none.
pub fn format_pairs<'a>(pairs: impl IntoIterator<Item = (&'a String, &'a String)>) -> String {
  let body: Vec<String> = pairs.into_iter().map(|(k, v)| format!("{k}: {v}")).collect();
  if body.is_empty() { String::new() } else { format!("{CYAN}{{{}}}{RESET}", body.join(", ")) }
}

pub fn blank() {
  println!();
}
