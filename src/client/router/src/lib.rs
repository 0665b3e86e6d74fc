/* src/client/router/src/lib.rs */

pub mod cache;
pub mod config;
pub mod console;
pub mod errors;
pub mod history;
pub mod navigator;
pub mod route;
pub mod view;

// Re-exports for ergonomic use
pub use cache::ViewCache;
pub use config::{BASE_URL_ENV, RouterConfig, normalize_base};
pub use console::{console_chunks, console_routes, legacy_console_routes};
pub use errors::{NavigationError, RouteError, ViewLoadError};
pub use history::History;
pub use navigator::{Navigation, Navigator};
pub use route::{RouteEntry, RouteId, RouteMatch, RouteProps, RouteTable, RouteTableBuilder};
pub use view::{BoxFuture, FsViewSource, ViewFuture, ViewLoaderFn, ViewModule, ViewSource, lazy};
