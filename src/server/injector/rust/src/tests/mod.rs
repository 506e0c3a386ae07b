/* src/server/injector/rust/src/tests/mod.rs */

use super::*;
use serde_json::json;

mod blocks;

#[test]
fn text_slot_escapes() {
  let html = inject("<h1><!--pk:hero.title--></h1>", &json!({"hero": {"title": "<Grow> & Scale"}}));
  assert_eq!(html, "<h1>&lt;Grow&gt; &amp; Scale</h1>");
}

#[test]
fn html_slot_is_raw() {
  let html = inject("<div><!--pk:about.body:html--></div>", &json!({"about": {"body": "<b>hi</b>"}}));
  assert_eq!(html, "<div><b>hi</b></div>");
}

#[test]
fn indexed_slot() {
  let data = json!({"logos": [{"logoUrl": "x.png"}, {"logoUrl": "y.png"}]});
  assert_eq!(inject("<!--pk:logos[1].logoUrl-->", &data), "y.png");
}

#[test]
fn missing_slot_renders_empty() {
  assert_eq!(inject("<p><!--pk:nope.x--></p>", &json!({})), "<p></p>");
}

#[test]
fn number_slot() {
  assert_eq!(inject("$<!--pk:plan.price-->/mo", &json!({"plan": {"price": 49}})), "$49/mo");
}

#[test]
fn attr_applies_to_next_tag() {
  let html = inject(
    r#"<!--pk:hero.backgroundImageUrl:attr:src--><img alt="hero">"#,
    &json!({"hero": {"backgroundImageUrl": "bg.jpg"}}),
  );
  assert_eq!(html, r#"<img src="bg.jpg" alt="hero">"#);
}

#[test]
fn attr_value_is_escaped() {
  let html = inject("<!--pk:q:attr:title--><span></span>", &json!({"q": "a\"b"}));
  assert_eq!(html, r#"<span title="a&quot;b"></span>"#);
}

#[test]
fn several_attrs_keep_order() {
  let html = inject(
    "<!--pk:cta.href:attr:href--><!--pk:cta.label:attr:title--><a>go</a>",
    &json!({"cta": {"href": "/signup", "label": "Start"}}),
  );
  assert_eq!(html, r#"<a href="/signup" title="Start">go</a>"#);
}

#[test]
fn attr_skips_closing_tags() {
  let html = inject("<p>x<!--pk:u:attr:href--></p><a>y</a>", &json!({"u": "/z"}));
  assert_eq!(html, r#"<p>x</p><a href="/z">y</a>"#);
}

#[test]
fn missing_or_null_attr_omitted() {
  let tmpl = "<!--pk:u:attr:href--><a>y</a>";
  assert_eq!(inject(tmpl, &json!({})), "<a>y</a>");
  assert_eq!(inject(tmpl, &json!({"u": null})), "<a>y</a>");
}

#[test]
fn boolean_attrs() {
  let tmpl = "<!--pk:v.muted:attr:muted--><video></video>";
  assert_eq!(inject(tmpl, &json!({"v": {"muted": true}})), r#"<video muted=""></video>"#);
  assert_eq!(inject(tmpl, &json!({"v": {"muted": false}})), "<video></video>");
}

#[test]
fn skeleton_renders_many_times() {
  let skeleton = Skeleton::parse("<p><!--pk:name--></p>");
  assert_eq!(skeleton.render(&json!({"name": "A"})), "<p>A</p>");
  assert_eq!(skeleton.render(&json!({"name": "B"})), "<p>B</p>");
  assert!(skeleton.diagnostics().is_empty());
}

#[test]
fn data_paths_in_document_order() {
  let skeleton = Skeleton::parse(concat!(
    "<!--pk:hero.title-->",
    "<!--pk:if:logos--><!--pk:each:logos--><!--pk:$.logoUrl:attr:src--><img><!--pk:endeach--><!--pk:endif:logos-->",
    "<!--pk:hero.title-->",
    "<!--pk:footer.note:html-->",
  ));
  let paths: Vec<String> = skeleton.data_paths().iter().map(ToString::to_string).collect();
  assert_eq!(paths, vec!["hero.title", "logos", "footer.note"]);
}

#[test]
fn diagnostics_returned_with_output() {
  let (html, diags) = inject_with_diagnostics("a<!--pk:endeach-->b", &json!({}));
  assert_eq!(html, "ab");
  assert_eq!(diags.len(), 1);
  assert_eq!(diags[0].kind, DiagnosticKind::UnmatchedClose);
}

#[test]
fn attr_does_not_leak_past_false_block() {
  let tmpl = "<!--pk:u:attr:href--><!--pk:if:x--><a>in</a><!--pk:endif:x--><p>out</p>";
  let (html, diags) = inject_with_diagnostics(tmpl, &json!({"u": "/z", "x": false}));
  assert_eq!(html, "<p>out</p>");
  assert_eq!(diags[0].kind, DiagnosticKind::DetachedAttr);

  let html = inject(tmpl, &json!({"u": "/z", "x": true}));
  assert_eq!(html, "<a>in</a><p>out</p>");
}

#[test]
fn attr_inside_block_stays_inside() {
  let tmpl = "<!--pk:if:x--><!--pk:u:attr:href--><!--pk:endif:x--><a>y</a>";
  assert_eq!(inject(tmpl, &json!({"u": "/z", "x": true})), "<a>y</a>");
}

#[test]
fn trailing_attr_is_reported_and_dropped() {
  let (html, diags) = inject_with_diagnostics("<a>x</a><!--pk:u:attr:href-->", &json!({"u": "/z"}));
  assert_eq!(html, "<a>x</a>");
  assert_eq!(diags.len(), 1);
  assert_eq!(diags[0].kind, DiagnosticKind::DetachedAttr);
}

#[test]
fn attr_skips_tags_in_html_comments() {
  let html = inject("<!--pk:u:attr:href--><!-- see <b> --><a>x</a>", &json!({"u": "/z"}));
  assert_eq!(html, r#"<!-- see <b> --><a href="/z">x</a>"#);
}
