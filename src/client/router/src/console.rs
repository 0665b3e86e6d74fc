/* src/client/router/src/console.rs */

// Route table of the appliance console.

use std::sync::Arc;

use crate::route::{RouteEntry, RouteTable, RouteTableBuilder};
use crate::view::{ViewSource, lazy};

/// (path, name, view chunk), in table order.
const CONSOLE_ROUTES: &[(&str, &str, &str)] = &[
  ("/", "default", "home"),
  ("/device/configuration", "device-configuration", "edit-configuration"),
  ("/device/network", "device-network", "network-manage"),
  ("/device/db", "db-manage", "db-manage"),
  ("/iocs/manage", "iocs-manage", "iocs-manage"),
  ("/iocs/misp", "iocs-misp", "iocs-misp"),
  ("/iocs/search", "iocs-search", "iocs-search"),
  ("/whitelist/manage", "whitelist-manage", "whitelist-manage"),
  ("/whitelist/search", "whitelist-search", "whitelist-search"),
];

fn builder_from(
  source: &Arc<dyn ViewSource>,
  rename: impl Fn(&'static str, &'static str) -> &'static str,
) -> RouteTableBuilder {
  CONSOLE_ROUTES.iter().fold(RouteTable::builder(), |builder, &(path, name, chunk)| {
    builder.route(RouteEntry::new(path, rename(path, name), lazy(source, chunk)).props(true))
  })
}

/// The console table with unique names. Set the base and call `build()`.
pub fn console_routes(source: &Arc<dyn ViewSource>) -> RouteTableBuilder {
  builder_from(source, |_, name| name)
}

/// The console table as first shipped, where `/iocs/misp` reuses the name
/// `iocs-manage`. Built in lenient mode; naming either of them by
/// `iocs-manage` fails with `AmbiguousName`.
pub fn legacy_console_routes(source: &Arc<dyn ViewSource>) -> RouteTableBuilder {
  builder_from(source, |path, name| if path == "/iocs/misp" { "iocs-manage" } else { name })
    .allow_duplicate_names()
}

/// Chunk names the console table loads, for checking a views directory.
pub fn console_chunks() -> impl Iterator<Item = &'static str> {
  CONSOLE_ROUTES.iter().map(|&(_, _, chunk)| chunk)
}
