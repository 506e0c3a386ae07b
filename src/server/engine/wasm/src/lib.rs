/* src/server/engine/wasm/src/lib.rs */

//! JSON-string bindings for the page builder. Every function takes and
//! returns JSON text; failures come back as `{"error": "..."}`.

use pagekit_content::Path;
use pagekit_engine::{PublishOptions, Registry, TemplateEntry};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

fn error_json(message: &str) -> String {
  serde_json::json!({ "error": message }).to_string()
}

fn respond<T: Serialize>(result: Result<T, String>) -> String {
  match result.and_then(|value| serde_json::to_string(&value).map_err(|e| e.to_string())) {
    Ok(json) => json,
    Err(message) => error_json(&message),
  }
}

fn parse(what: &str, json: &str) -> Result<Value, String> {
  serde_json::from_str(json).map_err(|e| format!("invalid {what} JSON: {e}"))
}

fn registry() -> Result<&'static Registry, String> {
  Registry::builtin().map_err(|e| e.to_string())
}

// --- Content tree functions ---

/// Value at `path` as JSON, or an empty string when nothing is there.
#[wasm_bindgen]
pub fn get_deep(tree_json: &str, path: &str) -> String {
  match parse("tree", tree_json) {
    Ok(tree) => pagekit_content::get_deep(&tree, path).map(Value::to_string).unwrap_or_default(),
    Err(message) => error_json(&message),
  }
}

/// The updated tree. The input string is not modified.
#[wasm_bindgen]
pub fn set_deep(tree_json: &str, path: &str, value_json: &str) -> String {
  respond(set_deep_inner(tree_json, path, value_json))
}

fn set_deep_inner(tree_json: &str, path: &str, value_json: &str) -> Result<Value, String> {
  let mut tree = parse("tree", tree_json)?;
  let value = parse("value", value_json)?;
  pagekit_content::set_deep_mut(&mut tree, path, value).map_err(|e| e.to_string())?;
  Ok(tree)
}

#[wasm_bindgen]
pub fn build_fields(tree_json: &str, base: &str) -> String {
  let fields = parse("tree", tree_json).and_then(|tree| {
    let base = Path::parse(base).map_err(|e| e.to_string())?;
    Ok(pagekit_content::build_fields_at(&tree, &base))
  });
  respond(fields)
}

// --- Template functions ---

#[wasm_bindgen]
pub fn list_templates() -> String {
  respond(registry().map(|r| r.iter().map(|e| e.info()).collect::<Vec<_>>()))
}

/// Metadata, default data and fields of one template.
#[wasm_bindgen]
pub fn template(id: &str) -> String {
  respond(registry().and_then(|r| r.require(id).map(|e| e.schema()).map_err(|e| e.to_string())))
}

#[derive(Serialize)]
struct Rendered {
  html: String,
}

/// `{"html": "..."}` without the embedded content script.
#[wasm_bindgen]
pub fn render_template(id: &str, content_json: &str) -> String {
  respond(
    load(id, content_json)
      .map(|(entry, content)| Rendered { html: pagekit_engine::render(entry, &content) }),
  )
}

#[wasm_bindgen]
pub fn publish_template(id: &str, content_json: &str) -> String {
  respond(load(id, content_json).map(|(entry, content)| {
    pagekit_engine::publish(entry, &content, &PublishOptions::default())
  }))
}

fn load(id: &str, content_json: &str) -> Result<(&'static TemplateEntry, Value), String> {
  let entry = registry()?.require(id).map_err(|e| e.to_string())?;
  let content = parse("content", content_json)?;
  Ok((entry, content))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn value(json: &str) -> Value {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn get_deep_found_and_missing() {
    let tree = r#"{"logos": [{"logoUrl": "x.png"}]}"#;
    assert_eq!(get_deep(tree, "logos[0].logoUrl"), r#""x.png""#);
    assert_eq!(get_deep(tree, "logos[3]"), "");
    assert!(get_deep("{nope", "a").contains("error"));
  }

  #[test]
  fn set_deep_returns_new_tree() {
    let out = set_deep(r#"{"a": {"b": 1}}"#, "a.c", r#""x""#);
    assert_eq!(value(&out), serde_json::json!({"a": {"b": 1, "c": "x"}}));
  }

  #[test]
  fn set_deep_reports_conflicts() {
    let out = value(&set_deep(r#"{"a": "s"}"#, "a.b", "1"));
    assert_eq!(out["error"], "path conflict at a: expected object, found string");
  }

  #[test]
  fn build_fields_with_base() {
    let out = value(&build_fields(r#"{"logoUrl": "l.png"}"#, "brand"));
    assert_eq!(out[0]["path"], "brand.logoUrl");
    assert_eq!(out[0]["type"], "image");
  }

  #[test]
  fn templates_listed() {
    let out = value(&list_templates());
    assert_eq!(out[0]["id"], "launch");
    assert_eq!(out[1]["accessTier"], "premium");
  }

  #[test]
  fn template_schema_and_unknown() {
    let out = value(&template("webinar"));
    assert_eq!(out["defaultData"]["event"]["seats"], 250);
    let out = value(&template("nope"));
    assert_eq!(out["error"], "unknown template \"nope\"");
  }

  #[test]
  fn render_and_publish() {
    let content = r#"{"event": {"title": "Live"}, "agenda": []}"#;
    let rendered = value(&render_template("webinar", content));
    assert!(rendered["html"].as_str().unwrap().contains("<h1>Live</h1>"));

    let published = value(&publish_template("webinar", content));
    assert_eq!(published["templateId"], "webinar");
    assert_eq!(published["digest"].as_str().map(str::len), Some(64));
    assert!(value(&publish_template("webinar", "[")).get("error").is_some());
  }
}
