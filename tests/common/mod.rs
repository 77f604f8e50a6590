//! Test utilities shared by the integration tests

use std::sync::Once;

use kodegen_css_inliner::{Inliner, Stylesheet, parse_style_attribute};
use kuchiki::NodeRef;
use kuchiki::traits::*;

static TRACING: Once = Once::new();

/// Route `tracing` output to the test harness, filtered by `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Parse `html` and run one inlining pass with a single stylesheet.
#[allow(dead_code)]
pub fn rendering(css: &str, html: &str) -> NodeRef {
    init_tracing();
    let stylesheets = vec![Stylesheet::new("example", css)];
    let document = kuchiki::parse_html().one(html);
    Inliner::new(&stylesheets).inline_document(&document);
    document
}

/// The `(property, value)` pairs of the `style` attribute of the `nth`
/// element matching `selector`. `!important` is folded back into the value.
#[allow(dead_code)]
pub fn styling_at(document: &NodeRef, selector: &str, nth: usize) -> Vec<(String, String)> {
    let element = document
        .select(selector)
        .unwrap_or_else(|()| panic!("invalid selector {selector}"))
        .nth(nth)
        .unwrap_or_else(|| panic!("no element #{nth} for {selector}"));
    let style = element
        .attributes
        .borrow()
        .get("style")
        .map(str::to_string)
        .unwrap_or_default();

    parse_style_attribute(&style)
        .declarations
        .iter()
        .map(|decl| {
            let value = if decl.is_important() {
                format!("{} !important", decl.value())
            } else {
                decl.value().to_string()
            };
            (decl.property().to_string(), value)
        })
        .collect()
}

/// [`styling_at`] for the first match.
#[allow(dead_code)]
pub fn styling(document: &NodeRef, selector: &str) -> Vec<(String, String)> {
    styling_at(document, selector, 0)
}

/// Build expected pairs from string slices.
#[allow(dead_code)]
pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(property, value)| (property.to_string(), value.to_string()))
        .collect()
}
