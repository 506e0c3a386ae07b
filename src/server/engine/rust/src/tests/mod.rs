/* src/server/engine/rust/src/tests/mod.rs */

use super::*;
use pagekit_content::FieldKind;


pub(super) fn source(id: &str, category: &str, access: AccessTier) -> TemplateSource {
  TemplateSource {
    id: id.to_string(),
    name: id.to_uppercase(),
    category: category.to_string(),
    access,
    default_data: r#"{"hero": {"title": "Hello", "imageUrl": "a.png"}, "tags": ["x", "y"]}"#.to_string(),
    skeleton: r#"<h1><!--pk:hero.title--></h1><!--pk:hero.imageUrl:attr:src--><img><!--pk:each:tags--><i><!--pk:$--></i><!--pk:endeach-->"#
      .to_string(),
    overrides: Vec::new(),
  }
}

fn sample_registry() -> Registry {
  Registry::builder()
    .add(source("one", "saas", AccessTier::Free))
    .add(source("two", "events", AccessTier::Premium))
    .add(source("three", "saas", AccessTier::Premium))
    .build()
    .unwrap()
}

#[test]
fn lookup_by_id() {
  let registry = sample_registry();
  assert_eq!(registry.len(), 3);
  assert_eq!(registry.get("two").map(TemplateEntry::name), Some("TWO"));
  assert!(registry.get("four").is_none());
  assert_eq!(registry.require("four").unwrap_err(), EngineError::UnknownTemplate("four".to_string()));
}

#[test]
fn iteration_keeps_registration_order() {
  let registry = sample_registry();
  let ids: Vec<_> = registry.iter().map(TemplateEntry::id).collect();
  assert_eq!(ids, vec!["one", "two", "three"]);
  assert_eq!(registry.categories(), vec!["saas", "events"]);
}

#[test]
fn category_and_tier_filters() {
  let registry = sample_registry();
  let saas: Vec<_> = registry.by_category("saas").map(TemplateEntry::id).collect();
  assert_eq!(saas, vec!["one", "three"]);
  let free: Vec<_> = registry.available_to(AccessTier::Free).map(TemplateEntry::id).collect();
  assert_eq!(free, vec!["one"]);
  assert_eq!(registry.available_to(AccessTier::Premium).count(), 3);
}

#[test]
fn duplicate_ids_rejected() {
  let err = Registry::builder()
    .add(source("one", "saas", AccessTier::Free))
    .add(source("one", "events", AccessTier::Free))
    .build()
    .unwrap_err();
  assert_eq!(err, EngineError::DuplicateTemplate("one".to_string()));
}

#[test]
fn duplicate_of_builtin_rejected() {
  let err = Registry::builder()
    .with_builtin()
    .add(source("launch", "saas", AccessTier::Free))
    .build()
    .unwrap_err();
  assert_eq!(err, EngineError::DuplicateTemplate("launch".to_string()));
}

#[test]
fn fields_precomputed_at_build() {
  let registry = sample_registry();
  let entry = registry.require("one").unwrap();
  let paths: Vec<_> = entry.fields().iter().map(|f| f.path.to_string()).collect();
  assert_eq!(paths, vec!["hero.title", "hero.imageUrl", "tags[0]", "tags[1]"]);
  assert_eq!(entry.fields()[1].kind, FieldKind::Image);
}

#[test]
fn overrides_apply_per_source() {
  let mut with_override = source("one", "saas", AccessTier::Free);
  with_override.overrides.push(FieldOverride::new("tags", FieldKind::Textarea));
  let registry = Registry::builder().add(with_override).build().unwrap();
  let kinds: Vec<_> = registry.require("one").unwrap().fields().iter().map(|f| f.kind).collect();
  assert_eq!(kinds, vec![FieldKind::Text, FieldKind::Image, FieldKind::Textarea, FieldKind::Textarea]);
}

#[test]
fn invalid_source_fails_build() {
  let mut broken = source("bad", "saas", AccessTier::Free);
  broken.default_data = "\"just a string\"".to_string();
  let err = Registry::builder().add(source("ok", "saas", AccessTier::Free)).add(broken).build();
  assert!(matches!(err, Err(EngineError::InvalidDefaultData { ref id, .. }) if id == "bad"));
}

#[test]
fn empty_registry() {
  let registry = Registry::builder().build().unwrap();
  assert!(registry.is_empty());
  assert!(registry.categories().is_empty());
}
