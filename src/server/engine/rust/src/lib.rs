/* src/server/engine/rust/src/lib.rs */

//! Template registry, edit sessions and publishing. A template binds an id
//! to default content, the editable fields inferred from it, an access tier
//! and a skeleton the content is rendered through.

mod catalog;
mod error;
mod escape;
mod publish;
mod registry;
mod session;
mod template;

pub use catalog::builtin_sources;
pub use error::EngineError;
pub use escape::script_safe_json;
pub use publish::{
  inject_data_script, publish, render, PublishManifest, PublishOptions, PublishedPage,
  DEFAULT_DATA_ID,
};
pub use registry::{Registry, RegistryBuilder};
pub use session::EditSession;
pub use template::{
  AccessTier, FieldOverride, Renderer, TemplateEntry, TemplateInfo, TemplateSchema, TemplateSource,
};

#[cfg(test)]
mod tests;
