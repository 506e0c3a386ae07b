/* src/server/injector/rust/src/helpers.rs */

use serde_json::Value;

pub(crate) fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(items) => !items.is_empty(),
    Value::Object(_) => true,
  }
}

/// Text form of a value as it appears in markup; containers print as JSON.
pub(crate) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

pub(crate) fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

// Present means true: truthy renders `name=""`, falsy drops the attribute.
const BOOLEAN_ATTRS: &[&str] = &[
  "allowfullscreen",
  "async",
  "autofocus",
  "autoplay",
  "checked",
  "controls",
  "defer",
  "disabled",
  "hidden",
  "loop",
  "multiple",
  "muted",
  "novalidate",
  "open",
  "playsinline",
  "readonly",
  "required",
  "selected",
];

pub(crate) fn is_boolean_attr(name: &str) -> bool {
  BOOLEAN_ATTRS.contains(&name)
}

/// Byte offset just past the tag name of the first opening tag in `html`.
/// Tags inside `<!-- -->` comments do not count.
pub(crate) fn first_tag_name_end(html: &str) -> Option<usize> {
  let bytes = html.as_bytes();
  let mut from = 0;
  while let Some(rel) = html[from..].find('<') {
    let open = from + rel;
    if html[open..].starts_with("<!--") {
      let close = html[open + 4..].find("-->")?;
      from = open + 4 + close + 3;
      continue;
    }
    let name_start = open + 1;
    if bytes.get(name_start).is_some_and(u8::is_ascii_alphabetic) {
      let name_len = html[name_start..]
        .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
        .unwrap_or(html.len() - name_start);
      return Some(name_start + name_len);
    }
    from = name_start;
  }
  None
}
