/* src/client/router/src/route/pattern.rs */

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::errors::RouteError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
  Literal(String),
  Param(String),
}

/// A compiled route path. Literal segments match exactly; `:name` captures one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathPattern {
  segments: Vec<Segment>,
}

/// Split an absolute path into its segments, tolerating one trailing slash.
/// "/" yields no segments; `None` when the path does not start with '/'.
fn segments_of(path: &str) -> Option<impl Iterator<Item = &str>> {
  let body = path.strip_prefix('/')?;
  // "//" keeps its empty segments so it never collapses onto "/"
  let body = match body.strip_suffix('/') {
    Some(rest) if !rest.is_empty() => rest,
    _ => body,
  };
  Some(body.split('/').filter(move |_| !body.is_empty()))
}

impl PathPattern {
  pub(crate) fn parse(path: &str) -> Result<Self, RouteError> {
    let Some(parts) = segments_of(path) else {
      return Err(RouteError::InvalidPath { path: path.to_string() });
    };
    let mut segments = Vec::new();
    for seg in parts {
      match seg.strip_prefix(':') {
        Some("") => return Err(RouteError::InvalidPath { path: path.to_string() }),
        Some(param) => segments.push(Segment::Param(param.to_string())),
        None => segments.push(Segment::Literal(seg.to_string())),
      }
    }
    Ok(Self { segments })
  }

  /// Match a concrete path. Returns captured parameters, percent-decoded, on success.
  pub(crate) fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();
    let mut incoming = segments_of(path)?;
    for expected in &self.segments {
      let actual = incoming.next()?;
      match expected {
        Segment::Literal(lit) => {
          if lit != actual {
            return None;
          }
        }
        Segment::Param(name) => {
          if actual.is_empty() {
            return None;
          }
          let value =
            urlencoding::decode(actual).map_or_else(|_| actual.to_string(), Cow::into_owned);
          params.insert(name.clone(), value);
        }
      }
    }
    if incoming.next().is_some() {
      return None;
    }
    Some(params)
  }

  pub(crate) fn param_names(&self) -> impl Iterator<Item = &str> {
    self.segments.iter().filter_map(|s| match s {
      Segment::Param(name) => Some(name.as_str()),
      Segment::Literal(_) => None,
    })
  }

  /// Fill parameters back in, percent-encoded. `Err` carries the first missing parameter name.
  pub(crate) fn fill(&self, params: &BTreeMap<String, String>) -> Result<String, String> {
    if self.segments.is_empty() {
      return Ok("/".to_string());
    }
    let mut out = String::new();
    for seg in &self.segments {
      out.push('/');
      match seg {
        Segment::Literal(lit) => out.push_str(lit),
        Segment::Param(name) => match params.get(name) {
          Some(value) => out.push_str(&urlencoding::encode(value)),
          None => return Err(name.clone()),
        },
      }
    }
    Ok(out)
  }
}
