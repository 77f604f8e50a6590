//! Behaviour of a single inlining pass over parsed documents

use kodegen_css_inliner::{Diagnostic, InlineStylePolicy, Inliner, Stylesheet};
use kuchiki::traits::*;

mod common;
use common::{pairs, rendering, styling, styling_at};

#[test]
fn test_inlines_simple_declarations() {
    let document = rendering("p { color: green }", "<p></p>");
    assert_eq!(styling(&document, "p"), pairs(&[("color", "green")]));
}

#[test]
fn test_inlines_prefixed_and_css3_properties() {
    let document = rendering("p { -vendor-color: green; border-radius: 2px; }", "<p></p>");
    assert_eq!(
        styling(&document, "p"),
        pairs(&[("-vendor-color", "green"), ("border-radius", "2px")])
    );
}

#[test]
fn test_keeps_declaration_order() {
    let document = rendering("h1 { padding: 2px; margin: 5px; }", "<h1></h1>");
    assert_eq!(
        styling(&document, "h1"),
        pairs(&[("padding", "2px"), ("margin", "5px")])
    );
}

#[test]
fn test_combines_rules_from_several_selectors() {
    let document = rendering("p { color: green; } .tip { float: right; }", r#"<p class="tip"></p>"#);
    assert_eq!(
        styling(&document, "p"),
        pairs(&[("color", "green"), ("float", "right")])
    );
}

#[test]
fn test_higher_specificity_comes_last() {
    let document = rendering(".safe { color: green; } p { color: red; }", r#"<p class="safe"></p>"#);
    assert_eq!(
        styling(&document, "p"),
        pairs(&[("color", "red"), ("color", "green")])
    );
}

#[test]
fn test_sorts_by_specificity() {
    let css = "p { important: no; } #important { important: very; } .important { important: yes; }";

    let document = rendering(css, r#"<p class="important"></p>"#);
    assert_eq!(
        styling(&document, "p"),
        pairs(&[("important", "no"), ("important", "yes")])
    );

    let document = rendering(css, r#"<p class="important" id="important"></p>"#);
    assert_eq!(
        styling(&document, "p"),
        pairs(&[("important", "no"), ("important", "yes"), ("important", "very")])
    );
}

#[test]
fn test_grouped_selectors_apply_to_each_element() {
    let document = rendering("p, a { color: green; }", "<p></p><a></a>");
    assert_eq!(styling(&document, "p"), pairs(&[("color", "green")]));
    assert_eq!(styling(&document, "a"), pairs(&[("color", "green")]));
}

#[test]
fn test_important_declarations_win() {
    let document = rendering(
        "a { text-decoration: underline !important; } a.hard-to-spot { text-decoration: none; }",
        r#"<a class="hard-to-spot"></a>"#,
    );
    assert_eq!(
        styling(&document, "a"),
        pairs(&[
            ("text-decoration", "none"),
            ("text-decoration", "underline !important"),
        ])
    );
}

#[test]
fn test_combines_with_existing_inline_style() {
    let document = rendering("p { color: green }", r#"<p style="font-size: 1.1em"></p>"#);
    assert_eq!(
        styling(&document, "p"),
        pairs(&[("color", "green"), ("font-size", "1.1em")])
    );
}

#[test]
fn test_does_not_override_inline_style() {
    let document = rendering(
        "p { text-transform: uppercase; color: red }",
        r#"<p style="color: green"></p>"#,
    );
    assert_eq!(
        styling(&document, "p"),
        pairs(&[
            ("text-transform", "uppercase"),
            ("color", "red"),
            ("color", "green"),
        ])
    );
}

#[test]
fn test_ignores_dynamic_pseudo_classes() {
    let document = rendering(
        "p:active { color: red }
         p:focus { color: red }
         p:hover { color: red }
         p:link { color: red }
         p:target { color: red }
         p:visited { color: red }
         p.active { width: 100%; }",
        r#"<p class="active"></p>"#,
    );
    assert_eq!(styling(&document, "p"), pairs(&[("width", "100%")]));
}

#[test]
fn test_survives_pseudo_element_selectors() {
    let document = rendering(
        "p.some-element { width: 100%; } p::some-element { color: red; }",
        r#"<p class="some-element"></p>"#,
    );
    assert_eq!(styling(&document, "p"), pairs(&[("width", "100%")]));
}

#[test]
fn test_reports_selectors_the_matcher_rejects() {
    let stylesheets = vec![Stylesheet::new(
        "foo.css",
        "p[%^=foo] { color: red; } p { margin: 0 }",
    )];
    let document = kuchiki::parse_html().one("<p></p>");
    let report = Inliner::new(&stylesheets).inline_document(&document);

    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(
        report.diagnostics[0].to_string(),
        r#"cannot use "p[%^=foo]" (from "foo.css" stylesheet) when inlining stylesheets"#
    );
    assert_eq!(common::styling(&document, "p"), pairs(&[("margin", "0")]));
}

#[test]
fn test_structural_pseudo_classes_match() {
    let document = rendering(
        "p { color: red; } p:nth-child(2n) { color: green; }",
        "<p></p> <p></p>",
    );
    assert_eq!(styling_at(&document, "p", 0), pairs(&[("color", "red")]));
    assert_eq!(
        styling_at(&document, "p", 1),
        pairs(&[("color", "red"), ("color", "green")])
    );
}

#[test]
fn test_skips_at_rules() {
    let document = rendering(
        "@keyframes progress-bar-stripes {
           from { background-position: 40px 0; }
           to { background-position: 0 0; }
         }
         @media (max-width: 600px) { p { color: red } }
         p { color: blue }",
        "<p></p>",
    );
    assert_eq!(styling(&document, "p"), pairs(&[("color", "blue")]));
}

#[test]
fn test_untouched_elements_get_no_style_attribute() {
    let document = rendering("p { color: red }", r#"<div></div><span style="x:y"></span>"#);
    let html = document.to_string();
    assert!(html.contains("<div></div>"));
    assert!(html.contains(r#"<span style="x:y"></span>"#));
}

#[test]
fn test_strict_policy_reports_malformed_inline_style() {
    let stylesheets = vec![Stylesheet::new("s", "p { color: red }")];
    let document = kuchiki::parse_html().one(r#"<p style="color green"></p>"#);
    let report = Inliner::new(&stylesheets)
        .with_policy(InlineStylePolicy::Strict)
        .inline_document(&document);

    assert!(matches!(
        report.diagnostics.as_slice(),
        [Diagnostic::MalformedInlineStyle { element, .. }] if element == "p"
    ));
    assert!(document.to_string().contains(r#"style="color green""#));
}

#[test]
fn test_single_pass_is_deterministic() {
    let css = "td { padding: 0 } .a { color: red } #x { color: blue } td.a { margin: 1px !important }";
    let html = r#"<table><tr><td class="a" id="x">1</td><td class="a" style="border: 0">2</td></tr></table>"#;
    let first = rendering(css, html).to_string();
    for _ in 0..5 {
        assert_eq!(rendering(css, html).to_string(), first);
    }
}
