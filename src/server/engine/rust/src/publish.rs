/* src/server/engine/rust/src/publish.rs */

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::escape::script_safe_json;
use crate::template::TemplateEntry;

/// Element id of the embedded content script.
pub const DEFAULT_DATA_ID: &str = "__PAGEKIT_CONTENT__";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOptions {
  #[serde(default = "default_data_id")]
  pub data_id: String,
}

fn default_data_id() -> String {
  DEFAULT_DATA_ID.to_string()
}

impl Default for PublishOptions {
  fn default() -> Self {
    Self { data_id: default_data_id() }
  }
}

/// A rendered page ready to hand to page storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedPage {
  pub template_id: String,
  pub html: String,
  /// Lowercase hex SHA-256 of `html`.
  pub digest: String,
  pub content: Value,
}

impl PublishedPage {
  /// Everything but the markup, for writing next to the HTML file.
  pub fn manifest(&self) -> PublishManifest<'_> {
    PublishManifest { template_id: &self.template_id, digest: &self.digest, content: &self.content }
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishManifest<'a> {
  pub template_id: &'a str,
  pub digest: &'a str,
  pub content: &'a Value,
}

/// Render `content` through the template's skeleton, without the data script.
pub fn render(entry: &TemplateEntry, content: &Value) -> String {
  entry.renderer().render(content)
}

pub fn publish(entry: &TemplateEntry, content: &Value, opts: &PublishOptions) -> PublishedPage {
  let html = render(entry, content);
  let html = inject_data_script(&html, &opts.data_id, &script_safe_json(content));
  let digest = hex::encode(Sha256::digest(html.as_bytes()));
  PublishedPage { template_id: entry.id().to_string(), html, digest, content: content.clone() }
}

/// Insert a JSON `<script>` before the last `</body>` (any case), or append
/// it when the page has none.
pub fn inject_data_script(html: &str, data_id: &str, json: &str) -> String {
  let script = format!(r#"<script id="{data_id}" type="application/json">{json}</script>"#);
  // ASCII lowercasing keeps byte offsets
  match html.to_ascii_lowercase().rfind("</body>") {
    Some(pos) => {
      let mut result = String::with_capacity(html.len() + script.len());
      result.push_str(&html[..pos]);
      result.push_str(&script);
      result.push_str(&html[pos..]);
      result
    }
    None => format!("{html}{script}"),
  }
}
