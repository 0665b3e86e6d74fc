/* src/client/router/src/route/tests.rs */

use std::collections::BTreeMap;
use std::sync::Arc;

use super::*;
use crate::console::{console_routes, legacy_console_routes};
use crate::view::{ViewFuture, ViewModule, ViewSource};

struct EchoSource;

impl ViewSource for EchoSource {
  fn fetch(&self, chunk: &str) -> ViewFuture {
    let view = ViewModule::new(chunk, format!("<{chunk}/>"));
    Box::pin(async move { Ok(view) })
  }
}

fn source() -> Arc<dyn ViewSource> {
  Arc::new(EchoSource)
}

fn loader() -> ViewLoaderFn {
  Arc::new(|| -> ViewFuture { Box::pin(async { Ok(ViewModule::new("x", "")) }) })
}

const CONSOLE_PATHS: &[&str] = &[
  "/",
  "/device/configuration",
  "/device/network",
  "/device/db",
  "/iocs/manage",
  "/iocs/misp",
  "/iocs/search",
  "/whitelist/manage",
  "/whitelist/search",
];

#[test]
fn every_console_path_resolves_to_itself() {
  let table = console_routes(&source()).build().unwrap();
  assert_eq!(table.len(), CONSOLE_PATHS.len());
  for (idx, path) in CONSOLE_PATHS.iter().enumerate() {
    let matched = table.resolve(path).unwrap();
    assert_eq!(matched.path, *path);
    assert_eq!(matched.id.index(), idx);
  }
}

#[test]
fn unregistered_path_is_not_found() {
  let table = console_routes(&source()).build().unwrap();
  for path in [
    "/iocs",
    "/device/configuration/extra",
    "/whitelist/delete",
    "/nope",
    "",
    "//",
    "iocs/manage",
    "device/db/",
  ] {
    assert_eq!(table.resolve(path), Err(RouteError::NotFound { path: path.to_string() }));
  }
}

#[test]
fn path_not_name_governs_exact_navigation() {
  let table = legacy_console_routes(&source()).build().unwrap();
  let manage = table.resolve("/iocs/manage").unwrap();
  let misp = table.resolve("/iocs/misp").unwrap();

  assert_eq!(manage.path, "/iocs/manage");
  assert_eq!(misp.path, "/iocs/misp");
  assert_eq!(manage.name, misp.name);
  assert_ne!(manage.id, misp.id);
}

#[test]
fn strict_builder_rejects_duplicate_names() {
  let strict = RouteTable::builder()
    .route(RouteEntry::new("/iocs/manage", "iocs-manage", loader()))
    .route(RouteEntry::new("/iocs/misp", "iocs-manage", loader()))
    .build();
  assert_eq!(
    strict.unwrap_err(),
    RouteError::DuplicateName {
      name: "iocs-manage".into(),
      first: "/iocs/manage".into(),
      second: "/iocs/misp".into(),
    }
  );
}

#[test]
fn lenient_table_refuses_to_guess_duplicate_names() {
  let table = legacy_console_routes(&source()).build().unwrap();
  match table.by_name("iocs-manage") {
    Err(RouteError::AmbiguousName { paths, .. }) => {
      assert_eq!(paths, vec!["/iocs/manage".to_string(), "/iocs/misp".to_string()]);
    }
    other => panic!("expected AmbiguousName, got {other:?}"),
  }
  // Unique names still work in lenient mode
  let (id, entry) = table.by_name("iocs-search").unwrap();
  assert_eq!(entry.path, "/iocs/search");
  assert_eq!(id.index(), 6);
}

#[test]
fn unknown_name() {
  let table = console_routes(&source()).build().unwrap();
  assert_eq!(
    table.by_name("settings").unwrap_err(),
    RouteError::UnknownName { name: "settings".into() }
  );
}

#[test]
fn first_entry_wins_on_duplicate_paths() {
  let table = RouteTable::builder()
    .route(RouteEntry::new("/device/db", "db-a", loader()))
    .route(RouteEntry::new("/device/db", "db-b", loader()))
    .build()
    .unwrap();
  assert_eq!(table.resolve("/device/db").unwrap().name, "db-a");
}

#[test]
fn invalid_path_fails_construction() {
  let err = RouteTable::builder().route(RouteEntry::new("device/db", "db", loader())).build();
  assert_eq!(err.unwrap_err(), RouteError::InvalidPath { path: "device/db".into() });
}

#[test]
fn resolve_url_strips_base_query_and_fragment() {
  let table = console_routes(&source()).base("/console").build().unwrap();
  let matched = table.resolve_url("/console/iocs/search?q=evil.example&type=domain#results").unwrap();
  assert_eq!(matched.path, "/iocs/search");
  assert_eq!(matched.props.get("q").map(String::as_str), Some("evil.example"));
  assert_eq!(matched.props.get("type").map(String::as_str), Some("domain"));
}

#[test]
fn resolve_url_outside_base_is_not_found() {
  let table = console_routes(&source()).base("/console/").build().unwrap();
  assert_eq!(
    table.resolve_url("/iocs/search").unwrap_err(),
    RouteError::NotFound { path: "/iocs/search".into() }
  );
  assert_eq!(table.resolve_url("/console").unwrap().name, "default");
}

#[test]
fn query_is_dropped_without_props_from_query() {
  let table = RouteTable::builder()
    .route(RouteEntry::new("/device/db", "db-manage", loader()))
    .build()
    .unwrap();
  let matched = table.resolve_url("/device/db?page=2").unwrap();
  assert!(matched.props.is_empty());
}

#[test]
fn query_values_are_percent_decoded() {
  let table = console_routes(&source()).build().unwrap();
  let matched = table.resolve_url("/whitelist/search?q=a%20b+c").unwrap();
  assert_eq!(matched.props["q"], "a b c");
}

#[test]
fn path_params_win_over_query_pairs() {
  let table = RouteTable::builder()
    .route(RouteEntry::new("/iocs/:id", "ioc", loader()).props(true))
    .build()
    .unwrap();
  let matched = table.resolve_url("/iocs/7?id=9&tag=c2").unwrap();
  assert_eq!(matched.params["id"], "7");
  assert_eq!(matched.props["id"], "7");
  assert_eq!(matched.props["tag"], "c2");
}

#[test]
fn href_builds_full_url() {
  let table = RouteTable::builder()
    .base("/console/")
    .route(RouteEntry::new("/", "default", loader()))
    .route(RouteEntry::new("/iocs/:id", "ioc", loader()))
    .build()
    .unwrap();

  let mut params = BTreeMap::new();
  params.insert("id".to_string(), "12".to_string());
  assert_eq!(table.href("ioc", &params).unwrap(), "/console/iocs/12");
  assert_eq!(table.href("default", &BTreeMap::new()).unwrap(), "/console/");
  assert_eq!(
    table.href("ioc", &BTreeMap::new()).unwrap_err(),
    RouteError::MissingParam { name: "ioc".into(), param: "id".into() }
  );
  assert_eq!(table.params_of("ioc").unwrap(), vec!["id".to_string()]);
}

#[test]
fn entries_iterate_in_table_order() {
  let table = console_routes(&source()).build().unwrap();
  let paths: Vec<&str> = table.entries().map(|(_, e)| e.path.as_str()).collect();
  assert_eq!(paths, CONSOLE_PATHS);
  assert!(table.entries().all(|(_, e)| e.props_from_query));
}

#[test]
fn href_encodes_params_that_resolve_back() {
  let table = RouteTable::builder()
    .route(RouteEntry::new("/iocs/:indicator", "ioc-detail", loader()).props(true))
    .route(RouteEntry::new("/iocs/search", "iocs-search", loader()))
    .base("/console")
    .build()
    .unwrap();
  let params = BTreeMap::from([("indicator".to_string(), "evil.example/path?x=1%".to_string())]);
  let url = table.href("ioc-detail", &params).unwrap();
  assert_eq!(url, "/console/iocs/evil.example%2Fpath%3Fx%3D1%25");
  let matched = table.resolve_url(&url).unwrap();
  assert_eq!(matched.name, "ioc-detail");
  assert_eq!(matched.params, params);
  assert_eq!(matched.props, params);
}
