/* src/cli/core/src/config/tests/mod.rs */

use std::path::Path;

use super::*;

fn write(dir: &Path, body: &str) -> std::path::PathBuf {
  let path = dir.join(CONFIG_FILE);
  std::fs::write(&path, body).unwrap();
  path
}

#[test]
fn empty_file_takes_defaults() {
  let tmp = tempfile::tempdir().unwrap();
  let path = write(tmp.path(), "");
  let config = load_config(&path).unwrap();
  assert_eq!(config.router.views_dir, "views");
  assert_eq!(config.router.view_extension, "html");
  assert_eq!(config.router.load_timeout_ms, 30_000);
  assert!(!config.router.legacy_names);
  assert_eq!(config.i18n.default, "en");
  assert_eq!(config.i18n.locales, ["en", "fr", "es", "cat", "ru", "pt", "it", "de"]);
  assert_eq!(config.messages_dir(), tmp.path().join("locales"));
}

#[test]
fn sections_override_defaults() {
  let tmp = tempfile::tempdir().unwrap();
  let path = write(
    tmp.path(),
    r#"
[router]
base = "console"
views_dir = "dist/views"
view_extension = "js"
load_timeout_ms = 500
legacy_names = true

[i18n]
locales = ["en", "de"]
messages_dir = "/srv/locales"
"#,
  );
  let config = load_config(&path).unwrap();
  assert_eq!(config.views_dir(), tmp.path().join("dist/views"));
  assert_eq!(config.messages_dir(), Path::new("/srv/locales"));
  assert_eq!(config.router.effective_base(None), "/console/");
  assert!(config.router.legacy_names);
  assert_eq!(config.i18n.locales, ["en", "de"]);
}

#[test]
fn env_base_beats_file_base() {
  let section = RouterSection { base: Some("/console/".into()), ..RouterSection::default() };
  assert_eq!(section.effective_base(Some("/ui")), "/ui/");
  assert_eq!(section.effective_base(None), "/console/");
  assert_eq!(RouterSection::default().effective_base(None), "/");
}

#[test]
fn default_locale_must_be_listed() {
  let tmp = tempfile::tempdir().unwrap();
  let path = write(tmp.path(), "[i18n]\nlocales = [\"fr\"]\n");
  let err = load_config(&path).unwrap_err();
  assert!(format!("{err:#}").contains("i18n.default"));
}

#[test]
fn zero_timeout_rejected() {
  let tmp = tempfile::tempdir().unwrap();
  let path = write(tmp.path(), "[router]\nload_timeout_ms = 0\n");
  assert!(load_config(&path).is_err());
}

#[test]
fn unknown_section_value_type_is_a_parse_error() {
  let tmp = tempfile::tempdir().unwrap();
  let path = write(tmp.path(), "[router]\nlegacy_names = \"yes\"\n");
  let err = load_config(&path).unwrap_err();
  assert!(format!("{err:#}").contains("failed to parse"));
}

#[test]
fn discovery_walks_upward() {
  let tmp = tempfile::tempdir().unwrap();
  write(tmp.path(), "");
  let nested = tmp.path().join("a/b/c");
  std::fs::create_dir_all(&nested).unwrap();
  let found = find_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join(CONFIG_FILE));
}

#[test]
fn missing_file_falls_back_to_defaults_rooted_at_cwd() {
  let tmp = tempfile::tempdir().unwrap();
  let config = resolve_config(None, tmp.path());
  // An ancestor of the temp dir may carry its own watchpost.toml; only assert when none does.
  if find_config(tmp.path()).is_err() {
    let config = config.unwrap();
    assert_eq!(config.base_dir, tmp.path());
    assert_eq!(config.views_dir(), tmp.path().join("views"));
  }
}

#[test]
fn explicit_path_must_exist() {
  let tmp = tempfile::tempdir().unwrap();
  let missing = tmp.path().join("nope.toml");
  let err = resolve_config(Some(&missing), tmp.path()).unwrap_err();
  assert!(format!("{err:#}").contains("failed to read"));
}
