/* src/server/injector/rust/src/tests/blocks.rs */

use super::*;

#[test]
fn if_truthy_and_falsy() {
  let tmpl = "<!--pk:if:banner.show--><aside>Sale</aside><!--pk:else--><hr><!--pk:endif:banner.show-->";
  assert_eq!(inject(tmpl, &json!({"banner": {"show": true}})), "<aside>Sale</aside>");
  assert_eq!(inject(tmpl, &json!({"banner": {"show": false}})), "<hr>");
  assert_eq!(inject(tmpl, &json!({})), "<hr>");
}

#[test]
fn if_on_empty_list_is_false() {
  let tmpl = "<!--pk:if:logos-->has<!--pk:endif:logos-->";
  assert_eq!(inject(tmpl, &json!({"logos": []})), "");
  assert_eq!(inject(tmpl, &json!({"logos": [1]})), "has");
}

#[test]
fn each_over_objects() {
  let tmpl = concat!(
    "<ul><!--pk:each:services-->",
    "<li><!--pk:$.iconUrl:attr:src--><img><!--pk:$.title--></li>",
    "<!--pk:endeach--></ul>"
  );
  let data = json!({"services": [
    {"title": "SEO", "iconUrl": "seo.svg"},
    {"title": "Ads", "iconUrl": "ads.svg"}
  ]});
  assert_eq!(
    inject(tmpl, &data),
    r#"<ul><li><img src="seo.svg">SEO</li><li><img src="ads.svg">Ads</li></ul>"#
  );
}

#[test]
fn each_over_scalars_with_index() {
  let tmpl = "<!--pk:each:tags--><!--pk:$index-->=<!--pk:$-->;<!--pk:endeach-->";
  assert_eq!(inject(tmpl, &json!({"tags": ["a", "b"]})), "0=a;1=b;");
}

#[test]
fn nested_each_sees_outer_element() {
  let tmpl = concat!(
    "<!--pk:each:plans-->",
    "<!--pk:each:$.features--><!--pk:$$.name-->:<!--pk:$--> <!--pk:endeach-->",
    "<!--pk:endeach-->"
  );
  let data = json!({"plans": [
    {"name": "Starter", "features": ["1 funnel"]},
    {"name": "Pro", "features": ["10 funnels", "A/B tests"]}
  ]});
  assert_eq!(inject(tmpl, &data), "Starter:1 funnel Pro:10 funnels Pro:A/B tests ");
}

#[test]
fn each_reads_root_inside_loop() {
  let tmpl = "<!--pk:each:items--><!--pk:currency--><!--pk:$.price--> <!--pk:endeach-->";
  assert_eq!(inject(tmpl, &json!({"currency": "$", "items": [{"price": 1}, {"price": 2}]})), "$1 $2 ");
}

#[test]
fn each_on_non_array_renders_nothing() {
  let tmpl = "[<!--pk:each:hero-->x<!--pk:endeach-->]";
  assert_eq!(inject(tmpl, &json!({"hero": {"a": 1}})), "[]");
  assert_eq!(inject(tmpl, &json!({})), "[]");
}

#[test]
fn scoped_paths_outside_loop_are_empty() {
  assert_eq!(inject("[<!--pk:$.x--><!--pk:$index-->]", &json!({})), "[]");
}

#[test]
fn unclosed_block_still_renders() {
  let (html, diags) = inject_with_diagnostics("<!--pk:if:x-->shown", &json!({"x": 1}));
  assert_eq!(html, "shown");
  assert_eq!(diags[0].kind, DiagnosticKind::UnclosedBlock);
}
