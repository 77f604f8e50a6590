//! Pull stylesheets out of `<style>` and `<link>` elements

use kuchiki::traits::*;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

use crate::css::Stylesheet;
use crate::error::InlinerResult;
use crate::providers::ProviderList;
use crate::utils::INLINE_STYLE_ELEMENT_NAME;

/// What extraction decided for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Extract,
    Keep,
}

/// Collect every inlinable stylesheet below `root` in document order and
/// remove its element.
///
/// Elements carrying `ignore_attribute`, and elements whose `media`
/// excludes screens, stay in the document. Linked stylesheets are looked
/// up through `providers`; a reference no provider knows is an error.
pub fn extract_stylesheets(
    root: &NodeRef,
    ignore_attribute: &str,
    providers: &ProviderList,
) -> InlinerResult<Vec<Stylesheet>> {
    // Collected up front: extracted elements are detached while walking.
    let candidates: Vec<NodeDataRef<ElementData>> = root
        .descendants()
        .elements()
        .filter(|element| matches!(&*element.name.local, "style" | "link"))
        .collect();

    let mut stylesheets = Vec::new();
    for element in candidates {
        if disposition(&element, ignore_attribute) == Disposition::Keep {
            continue;
        }

        if &*element.name.local == "style" {
            let css = element.as_node().text_contents();
            stylesheets.push(Stylesheet::new(INLINE_STYLE_ELEMENT_NAME, &css));
            element.as_node().detach();
            continue;
        }

        let href = element.attributes.borrow().get("href").map(str::to_string);
        match href {
            Some(href) if is_stylesheet_link(&element) => {
                let stylesheet = providers.find_stylesheet_or_err(&href)?;
                log::debug!("Extracted linked stylesheet {href:?}");
                stylesheets.push(stylesheet);
                element.as_node().detach();
            }
            _ => {}
        }
    }

    log::debug!("Extracted {} stylesheets from the document", stylesheets.len());
    Ok(stylesheets)
}

fn disposition(element: &NodeDataRef<ElementData>, ignore_attribute: &str) -> Disposition {
    let mut attributes = element.attributes.borrow_mut();

    if attributes.contains(ignore_attribute) {
        attributes.remove(ignore_attribute);
        return Disposition::Keep;
    }

    match attributes.get("media") {
        Some(media) if !applies_to_screen(media) => Disposition::Keep,
        _ => Disposition::Extract,
    }
}

/// A `media` list applies when any of its entries is `all` or `screen`.
fn applies_to_screen(media: &str) -> bool {
    media.split(',').any(|query| {
        let query = query.trim();
        query.eq_ignore_ascii_case("all") || query.eq_ignore_ascii_case("screen")
    })
}

fn is_stylesheet_link(element: &NodeDataRef<ElementData>) -> bool {
    element
        .attributes
        .borrow()
        .get("rel")
        .is_some_and(|rel| {
            rel.split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case("stylesheet"))
        })
}
