/* src/client/router/src/route/mod.rs */

mod pattern;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::warn;

use crate::config::{normalize_base, strip_base};
use crate::errors::RouteError;
use crate::view::ViewLoaderFn;

use pattern::PathPattern;

/// Inputs forwarded to a view: captured path segments plus query pairs.
pub type RouteProps = BTreeMap<String, String>;

/// Identity of a route: its position in table order. Indexes the view cache arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(usize);

impl RouteId {
  pub fn index(self) -> usize {
    self.0
  }
}

impl fmt::Display for RouteId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

pub struct RouteEntry {
  /// Path pattern, e.g. "/iocs/manage"
  pub path: String,
  pub name: String,
  pub loader: ViewLoaderFn,
  /// Forward route parameters to the view as inputs.
  pub props_from_query: bool,
}

impl RouteEntry {
  pub fn new(path: impl Into<String>, name: impl Into<String>, loader: ViewLoaderFn) -> Self {
    Self { path: path.into(), name: name.into(), loader, props_from_query: false }
  }

  pub fn props(mut self, props_from_query: bool) -> Self {
    self.props_from_query = props_from_query;
    self
  }
}

impl fmt::Debug for RouteEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RouteEntry")
      .field("path", &self.path)
      .field("name", &self.name)
      .field("props_from_query", &self.props_from_query)
      .finish_non_exhaustive()
  }
}

/// Outcome of a successful lookup, detached from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
  pub id: RouteId,
  pub name: String,
  /// The entry's path pattern (not the incoming URL).
  pub path: String,
  /// Segments captured by `:param` parts of the pattern, percent-decoded.
  pub params: BTreeMap<String, String>,
  /// What the view receives. Empty unless the entry sets `props_from_query`.
  pub props: RouteProps,
}

struct Route {
  entry: RouteEntry,
  pattern: PathPattern,
}

/// Ordered, immutable navigation table.
pub struct RouteTable {
  base: String,
  routes: Vec<Route>,
  names: HashMap<String, Vec<RouteId>>,
}

pub struct RouteTableBuilder {
  base: String,
  entries: Vec<RouteEntry>,
  allow_duplicate_names: bool,
}

impl RouteTableBuilder {
  pub fn base(mut self, base: &str) -> Self {
    self.base = normalize_base(base);
    self
  }

  pub fn route(mut self, entry: RouteEntry) -> Self {
    self.entries.push(entry);
    self
  }

  /// Accept tables where several entries share a name. Name lookups for those
  /// names then fail with `AmbiguousName` instead of picking one.
  pub fn allow_duplicate_names(mut self) -> Self {
    self.allow_duplicate_names = true;
    self
  }

  pub fn build(self) -> Result<RouteTable, RouteError> {
    let mut routes = Vec::with_capacity(self.entries.len());
    let mut names: HashMap<String, Vec<RouteId>> = HashMap::new();

    for (idx, entry) in self.entries.into_iter().enumerate() {
      let pattern = PathPattern::parse(&entry.path)?;
      if let Some(prev) = routes.iter().find(|r: &&Route| r.entry.path == entry.path) {
        warn!(path = %entry.path, shadowed_by = %prev.entry.name, "duplicate route path, first entry wins");
      }

      let ids = names.entry(entry.name.clone()).or_default();
      if let Some(first) = ids.first() {
        let first_path: &str = &routes[first.index()].entry.path;
        if !self.allow_duplicate_names {
          return Err(RouteError::DuplicateName {
            name: entry.name.clone(),
            first: first_path.to_string(),
            second: entry.path.clone(),
          });
        }
        warn!(name = %entry.name, first = first_path, second = %entry.path, "duplicate route name");
      }
      ids.push(RouteId(idx));
      routes.push(Route { entry, pattern });
    }

    Ok(RouteTable { base: self.base, routes, names })
  }
}

impl RouteTable {
  pub fn builder() -> RouteTableBuilder {
    RouteTableBuilder { base: "/".to_string(), entries: Vec::new(), allow_duplicate_names: false }
  }

  pub fn base(&self) -> &str {
    &self.base
  }

  pub fn len(&self) -> usize {
    self.routes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.routes.is_empty()
  }

  pub fn entry(&self, id: RouteId) -> Option<&RouteEntry> {
    self.routes.get(id.index()).map(|r| &r.entry)
  }

  /// Entries in table order.
  pub fn entries(&self) -> impl Iterator<Item = (RouteId, &RouteEntry)> {
    self.routes.iter().enumerate().map(|(idx, r)| (RouteId(idx), &r.entry))
  }

  /// Find the first entry whose pattern matches `path`.
  /// `path` is relative to the mount point and carries no query string.
  pub fn resolve(&self, path: &str) -> Result<RouteMatch, RouteError> {
    for (idx, route) in self.routes.iter().enumerate() {
      if let Some(params) = route.pattern.matches(path) {
        let props = if route.entry.props_from_query { params.clone() } else { RouteProps::new() };
        return Ok(RouteMatch {
          id: RouteId(idx),
          name: route.entry.name.clone(),
          path: route.entry.path.clone(),
          params,
          props,
        });
      }
    }
    Err(RouteError::NotFound { path: path.to_string() })
  }

  /// Resolve a full browser URL: strip the mount point, the fragment and the query.
  /// Query pairs join the props of entries that forward them.
  pub fn resolve_url(&self, url: &str) -> Result<RouteMatch, RouteError> {
    let not_found = || RouteError::NotFound { path: url.to_string() };
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    let (path, query) = match without_fragment.split_once('?') {
      Some((path, query)) => (path, Some(query)),
      None => (without_fragment, None),
    };
    let relative = strip_base(&self.base, path).ok_or_else(not_found)?;

    let mut matched = self.resolve(relative).map_err(|_| not_found())?;
    if let Some(query) = query
      && self.forwards_props(matched.id)
    {
      for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        // Path parameters win over query pairs of the same name
        matched.props.entry(key.into_owned()).or_insert_with(|| value.into_owned());
      }
    }
    Ok(matched)
  }

  fn forwards_props(&self, id: RouteId) -> bool {
    self.entry(id).is_some_and(|e| e.props_from_query)
  }

  /// Look an entry up by symbolic name. Never guesses between duplicates.
  pub fn by_name(&self, name: &str) -> Result<(RouteId, &RouteEntry), RouteError> {
    match self.names.get(name).map(Vec::as_slice) {
      None | Some([]) => Err(RouteError::UnknownName { name: name.to_string() }),
      Some([id]) => Ok((*id, &self.routes[id.index()].entry)),
      Some(ids) => Err(RouteError::AmbiguousName {
        name: name.to_string(),
        paths: ids.iter().map(|id| self.routes[id.index()].entry.path.clone()).collect(),
      }),
    }
  }

  /// Build the full URL (mount point included) for a named route.
  pub fn href(&self, name: &str, params: &BTreeMap<String, String>) -> Result<String, RouteError> {
    let (id, _) = self.by_name(name)?;
    let route = &self.routes[id.index()];
    let path = route.pattern.fill(params).map_err(|param| RouteError::MissingParam {
      name: name.to_string(),
      param,
    })?;
    if self.base == "/" {
      return Ok(path);
    }
    Ok(format!("{}{}", &self.base[..self.base.len() - 1], path))
  }

  /// Parameter names a named route expects, in path order.
  pub fn params_of(&self, name: &str) -> Result<Vec<String>, RouteError> {
    let (id, _) = self.by_name(name)?;
    Ok(self.routes[id.index()].pattern.param_names().map(str::to_string).collect())
  }
}

impl fmt::Debug for RouteTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RouteTable")
      .field("base", &self.base)
      .field("routes", &self.routes.iter().map(|r| &r.entry).collect::<Vec<_>>())
      .finish()
  }
}
