//! Selector classification and matching
//!
//! Before a selector reaches the tree it is screened for pseudo-classes
//! that depend on interaction state. Those selectors are valid CSS but can
//! never apply to a static document, so they match nothing instead of
//! being reported.

use cssparser::{ParseError, Parser, ParserInput, Token};

use super::element::{ElementId, ElementTree};
use crate::utils::DYNAMIC_PSEUDO_CLASSES;

/// How a selector was handled by the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStatus {
    /// Evaluated against the tree.
    Supported,
    /// Uses a dynamic or link pseudo-class; matches nothing by definition.
    Dynamic { pseudo_class: String },
    /// The tree cannot evaluate the selector; the rule must be reported and
    /// left out of the cascade.
    Unsupported,
    /// Not a selector at all (empty, or at-rule text that should have been
    /// stripped by the stylesheet parser).
    Ignored,
}

/// Match result for one selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorMatch {
    pub matched: Vec<ElementId>,
    pub status: MatchStatus,
}

impl SelectorMatch {
    fn empty(status: MatchStatus) -> Self {
        Self {
            matched: Vec::new(),
            status,
        }
    }

    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        self.status == MatchStatus::Unsupported
    }
}

/// Resolves selectors against one element tree.
pub struct SelectorMatcher<'t, T: ElementTree> {
    tree: &'t T,
}

impl<'t, T: ElementTree> SelectorMatcher<'t, T> {
    pub fn new(tree: &'t T) -> Self {
        Self { tree }
    }

    pub fn match_selector(&self, selector: &str) -> SelectorMatch {
        let selector = selector.trim();

        if selector.is_empty() || selector.starts_with('@') {
            log::error!("At-rule or empty selector {selector:?} reached the matcher; ignoring it");
            return SelectorMatch::empty(MatchStatus::Ignored);
        }

        if let Some(pseudo_class) = dynamic_pseudo_class(selector) {
            log::debug!("Selector {selector:?} uses :{pseudo_class}, matching nothing");
            return SelectorMatch::empty(MatchStatus::Dynamic { pseudo_class });
        }

        match self.tree.select(selector) {
            Ok(matched) => {
                log::trace!("Selector {selector:?} matched {} elements", matched.len());
                SelectorMatch {
                    matched,
                    status: MatchStatus::Supported,
                }
            }
            Err(()) => SelectorMatch::empty(MatchStatus::Unsupported),
        }
    }
}

/// Find the first dynamic or link pseudo-class used anywhere in `selector`,
/// including inside functional pseudo-classes such as `:not(:hover)`.
///
/// Returns the pseudo-class name in lowercase.
pub fn dynamic_pseudo_class(selector: &str) -> Option<String> {
    let mut input = ParserInput::new(selector);
    let mut parser = Parser::new(&mut input);
    find_dynamic_pseudo_class(&mut parser)
}

fn find_dynamic_pseudo_class(input: &mut Parser<'_, '_>) -> Option<String> {
    let mut colons = 0u8;
    loop {
        let token = match input.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => return None,
        };

        match token {
            Token::Colon => {
                colons = colons.saturating_add(1);
                continue;
            }
            Token::Ident(name) if colons == 1 && is_dynamic(&name) => {
                return Some(name.to_ascii_lowercase());
            }
            Token::Function(_) => {
                let nested: Result<Option<String>, ParseError<'_, ()>> =
                    input.parse_nested_block(|nested| Ok(find_dynamic_pseudo_class(nested)));
                if let Ok(Some(pseudo_class)) = nested {
                    return Some(pseudo_class);
                }
            }
            _ => {}
        }
        colons = 0;
    }
}

fn is_dynamic(name: &str) -> bool {
    DYNAMIC_PSEUDO_CLASSES
        .iter()
        .any(|dynamic| name.eq_ignore_ascii_case(dynamic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inliner::element::KuchikiTree;
    use kuchiki::traits::*;

    #[test]
    fn test_detects_dynamic_pseudo_classes() {
        for selector in [
            "p:active",
            "p:focus",
            "p:hover",
            "p:link",
            "p:target",
            "p:visited",
            "A:HOVER",
            "ul li:not(:hover)",
        ] {
            assert!(
                dynamic_pseudo_class(selector).is_some(),
                "{selector} should be dynamic"
            );
        }
        assert_eq!(dynamic_pseudo_class("a:Hover").as_deref(), Some("hover"));
    }

    #[test]
    fn test_static_selectors_are_not_dynamic() {
        for selector in [
            "p.active",
            ".hover",
            "#link",
            "p:first-child",
            "p:nth-child(2n)",
            "a[href=\":hover\"]",
            "p::link",
        ] {
            assert_eq!(dynamic_pseudo_class(selector), None, "{selector}");
        }
    }

    #[test]
    fn test_match_statuses() {
        let document = kuchiki::parse_html().one("<p class=active></p><a href=/x>x</a>");
        let tree = KuchikiTree::new(&document);
        let matcher = SelectorMatcher::new(&tree);

        let supported = matcher.match_selector("p.active");
        assert_eq!(supported.status, MatchStatus::Supported);
        assert_eq!(supported.matched.len(), 1);

        let dynamic = matcher.match_selector("a:link");
        assert_eq!(
            dynamic.status,
            MatchStatus::Dynamic {
                pseudo_class: "link".to_string()
            }
        );
        assert!(dynamic.matched.is_empty());

        let unsupported = matcher.match_selector("p[%^=foo]");
        assert!(unsupported.is_unsupported());
        assert!(unsupported.matched.is_empty());

        assert_eq!(matcher.match_selector("@font-face").status, MatchStatus::Ignored);
        assert_eq!(matcher.match_selector("  ").status, MatchStatus::Ignored);
    }
}
