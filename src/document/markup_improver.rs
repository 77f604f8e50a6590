//! Normalize the document skeleton before inlining
//!
//! Mail clients are picky about documents without a doctype or a declared
//! charset. The improver adds what is missing and never touches what is
//! already there.

use kuchiki::traits::*;
use kuchiki::{NodeData, NodeRef};

use crate::utils::{CONTENT_TYPE_HTTP_EQUIV, CONTENT_TYPE_VALUE};

/// Adds a doctype, `<html>`, `<head>`, `<body>` and a charset `<meta>`
/// when the document lacks them.
pub struct MarkupImprover<'a> {
    dom: &'a NodeRef,
    original_html: &'a str,
}

impl<'a> MarkupImprover<'a> {
    /// The original text is needed because the parser does not record
    /// whether the source had a doctype once it built the tree.
    pub fn new(dom: &'a NodeRef, original_html: &'a str) -> Self {
        Self { dom, original_html }
    }

    pub fn improve(&self) {
        self.ensure_doctype_present();
        let html = self.ensure_html_element_present();
        let head = ensure_child(&html, "head", true);
        ensure_child(&html, "body", false);
        ensure_declared_charset(&head);
    }

    fn ensure_doctype_present(&self) {
        if contains_ignore_ascii_case(self.original_html, "<!doctype") {
            return;
        }
        let has_doctype_node = self
            .dom
            .children()
            .any(|child| matches!(child.data(), NodeData::Doctype(_)));
        if has_doctype_node {
            return;
        }
        log::debug!("Adding HTML5 doctype");
        self.dom.prepend(NodeRef::new_doctype("html", "", ""));
    }

    fn ensure_html_element_present(&self) -> NodeRef {
        if let Some(html) = child_element(self.dom, "html") {
            return html;
        }

        let html = new_element("html");
        let children: Vec<NodeRef> = self
            .dom
            .children()
            .filter(|child| !matches!(child.data(), NodeData::Doctype(_)))
            .collect();
        for child in children {
            html.append(child);
        }
        self.dom.append(html.clone());
        html
    }
}

/// Find a direct child element of `parent` named `name`, creating it when
/// missing.
///
/// A created `<head>` becomes the first child. A created `<body>` adopts
/// every other child of `parent` except `<head>`.
fn ensure_child(parent: &NodeRef, name: &str, first: bool) -> NodeRef {
    if let Some(existing) = child_element(parent, name) {
        return existing;
    }

    log::debug!("Adding missing <{name}> element");
    let element = new_element(name);
    if first {
        parent.prepend(element.clone());
    } else {
        let adopted: Vec<NodeRef> = parent
            .children()
            .filter(|child| {
                child
                    .as_element()
                    .is_none_or(|data| &*data.name.local != "head")
            })
            .collect();
        for child in adopted {
            element.append(child);
        }
        parent.append(element.clone());
    }
    element
}

fn ensure_declared_charset(head: &NodeRef) {
    let declared = head.children().elements().any(|meta| {
        &*meta.name.local == "meta"
            && meta
                .attributes
                .borrow()
                .get("http-equiv")
                .is_some_and(|value| value.trim().eq_ignore_ascii_case("content-type"))
    });
    if declared {
        return;
    }

    log::debug!("Adding charset declaration");
    let meta = new_element("meta");
    if let Some(data) = meta.as_element() {
        let mut attributes = data.attributes.borrow_mut();
        attributes.insert("http-equiv", CONTENT_TYPE_HTTP_EQUIV.to_string());
        attributes.insert("content", CONTENT_TYPE_VALUE.to_string());
    }
    head.append(meta);
}

fn child_element(parent: &NodeRef, name: &str) -> Option<NodeRef> {
    parent
        .children()
        .elements()
        .find(|child| &*child.name.local == name)
        .map(|child| child.as_node().clone())
}

/// Create a detached, empty HTML element.
///
/// Parsing a one element document and lifting the node out keeps the
/// element in the HTML namespace without building a qualified name by hand.
fn new_element(name: &str) -> NodeRef {
    let scratch = kuchiki::parse_html().one(format!("<{name}></{name}>"));
    let element = scratch
        .descendants()
        .elements()
        .find(|element| &*element.name.local == name)
        .map(|element| element.as_node().clone())
        .unwrap_or_else(|| NodeRef::new_text(String::new()));
    element.detach();
    for child in element.children().collect::<Vec<_>>() {
        child.detach();
    }
    element
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
