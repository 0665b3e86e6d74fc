/* src/client/i18n/src/interpolate.rs */

use std::collections::BTreeMap;

/// Replace `{name}` placeholders with values from `params`.
/// Placeholders without a value, and unclosed braces, are kept verbatim.
pub fn interpolate(template: &str, params: &BTreeMap<String, String>) -> String {
  if params.is_empty() {
    return template.to_string();
  }
  let mut out = String::with_capacity(template.len());
  let mut rest = template;
  while let Some(start) = rest.find('{') {
    out.push_str(&rest[..start]);
    let after = &rest[start + 1..];
    let Some(end) = after.find('}') else {
      out.push_str(&rest[start..]);
      return out;
    };
    match params.get(after[..end].trim()) {
      Some(value) => out.push_str(value),
      None => out.push_str(&rest[start..start + end + 2]),
    }
    rest = &after[end + 1..];
  }
  out.push_str(rest);
  out
}
