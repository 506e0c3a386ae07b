/* src/server/engine/rust/src/escape.rs */

use std::fmt::Write;

use serde_json::Value;

/// Serialize `value` as JSON that is safe to embed in a `<script>` element.
///
/// Non-ASCII characters become `\uXXXX` (surrogate pairs outside the BMP),
/// and `<`, `>` and `&` are escaped so content cannot close the element.
/// serde_json only emits these characters inside strings, where `\uXXXX`
/// is a valid escape.
pub fn script_safe_json(value: &Value) -> String {
  let json = value.to_string();
  let mut out = String::with_capacity(json.len());
  for ch in json.chars() {
    match ch {
      '<' | '>' | '&' => push_unit(&mut out, ch as u32),
      c if c.is_ascii() => out.push(c),
      c => {
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
          push_unit(&mut out, u32::from(*unit));
        }
      }
    }
  }
  out
}

fn push_unit(out: &mut String, unit: u32) {
  let _ = write!(out, "\\u{unit:04x}");
}
