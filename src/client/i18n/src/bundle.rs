/* src/client/i18n/src/bundle.rs */

use std::collections::BTreeMap;

use serde_json::Value;

use crate::errors::LocaleError;

/// One language's translation mapping. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleBundle {
  locale_id: String,
  entries: BTreeMap<String, String>,
}

impl LocaleBundle {
  pub fn new(locale_id: impl Into<String>, entries: BTreeMap<String, String>) -> Self {
    Self { locale_id: locale_id.into(), entries }
  }

  /// Build from a flat or nested JSON object. Nested objects become dotted keys
  /// ("menu": {"iocs": "IOCs"} -> "menu.iocs"). Numbers and booleans are kept as
  /// their JSON text; nulls and arrays are skipped.
  pub fn from_json(locale_id: impl Into<String>, value: &Value) -> Result<Self, LocaleError> {
    let locale_id = locale_id.into();
    let Some(obj) = value.as_object() else {
      return Err(LocaleError::NotAnObject { locale: locale_id });
    };
    let mut entries = BTreeMap::new();
    for (key, val) in obj {
      flatten_into(&mut entries, key, val);
    }
    Ok(Self { locale_id, entries })
  }

  pub fn locale_id(&self) -> &str {
    &self.locale_id
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.entries.get(key).map(String::as_str)
  }

  pub fn contains(&self, key: &str) -> bool {
    self.entries.contains_key(key)
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

fn flatten_into(out: &mut BTreeMap<String, String>, prefix: &str, value: &Value) {
  match value {
    Value::String(s) => {
      out.insert(prefix.to_string(), s.clone());
    }
    Value::Number(_) | Value::Bool(_) => {
      out.insert(prefix.to_string(), value.to_string());
    }
    Value::Object(obj) => {
      for (key, nested) in obj {
        flatten_into(out, &format!("{prefix}.{key}"), nested);
      }
    }
    Value::Null | Value::Array(_) => {}
  }
}
