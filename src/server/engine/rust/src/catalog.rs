/* src/server/engine/rust/src/catalog.rs */

use pagekit_content::FieldKind;

use crate::template::{AccessTier, FieldOverride, TemplateSource};

struct Builtin {
  id: &'static str,
  name: &'static str,
  category: &'static str,
  access: AccessTier,
  data: &'static str,
  page: &'static str,
  overrides: &'static [(&'static str, FieldKind)],
}

const BUILTINS: &[Builtin] = &[
  Builtin {
    id: "launch",
    name: "Launch",
    category: "saas",
    access: AccessTier::Free,
    data: include_str!("../templates/launch/data.json"),
    page: include_str!("../templates/launch/page.html"),
    overrides: &[
      ("seo.description", FieldKind::Textarea),
      ("hero.subheadline", FieldKind::Textarea),
      ("services.description", FieldKind::Textarea),
      ("pricing.plans.price", FieldKind::Number),
    ],
  },
  Builtin {
    id: "agency",
    name: "Agency",
    category: "portfolio",
    access: AccessTier::Premium,
    data: include_str!("../templates/agency/data.json"),
    page: include_str!("../templates/agency/page.html"),
    overrides: &[
      ("seo.description", FieldKind::Textarea),
      ("hero.subheadline", FieldKind::Textarea),
      ("about.body", FieldKind::Textarea),
      ("work.summary", FieldKind::Textarea),
    ],
  },
  Builtin {
    id: "webinar",
    name: "Webinar",
    category: "events",
    access: AccessTier::Free,
    data: include_str!("../templates/webinar/data.json"),
    page: include_str!("../templates/webinar/page.html"),
    overrides: &[
      ("seo.description", FieldKind::Textarea),
      ("event.seats", FieldKind::Number),
      ("host.bio", FieldKind::Textarea),
    ],
  },
];

/// Sources for the templates compiled into the engine, in catalogue order.
pub fn builtin_sources() -> Vec<TemplateSource> {
  BUILTINS
    .iter()
    .map(|b| TemplateSource {
      id: b.id.to_string(),
      name: b.name.to_string(),
      category: b.category.to_string(),
      access: b.access,
      default_data: b.data.to_string(),
      skeleton: b.page.to_string(),
      overrides: b.overrides.iter().map(|(path, kind)| FieldOverride::new(*path, *kind)).collect(),
    })
    .collect()
}
