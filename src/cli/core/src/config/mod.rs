/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_pagekit_config, load_pagekit_config, CONFIG_FILE};
pub use types::{PagekitConfig, ProjectSection, PublishSection, TemplatesSection};
