//! The inlining pass
//!
//! One pass walks every rule of every stylesheet in order, records which
//! elements each selector matches, then resolves and writes the `style`
//! attribute of every element that received at least one rule.

use kuchiki::NodeRef;
use smallvec::SmallVec;

use super::cascade::{self, CandidateRule, InlineStylePolicy};
use super::diagnostics::{Diagnostic, Diagnostics};
use super::element::{ElementTree, KuchikiTree, StyleTarget};
use super::matcher::{MatchStatus, SelectorMatcher};
use crate::css::{Stylesheet, serialize_declarations};

/// Outcome of one inlining pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineReport {
    /// Problems found during the pass, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of elements whose `style` attribute was written.
    pub styled_elements: usize,
}

impl InlineReport {
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Applies an ordered set of stylesheets to element trees.
///
/// The inliner borrows its stylesheets, so one set of parsed CSS can be
/// applied to many documents.
#[derive(Debug, Clone)]
pub struct Inliner<'s> {
    stylesheets: &'s [Stylesheet],
    policy: InlineStylePolicy,
}

impl<'s> Inliner<'s> {
    #[must_use]
    pub fn new(stylesheets: &'s [Stylesheet]) -> Self {
        Self {
            stylesheets,
            policy: InlineStylePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: InlineStylePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn policy(&self) -> InlineStylePolicy {
        self.policy
    }

    /// Inline every stylesheet into `tree`.
    pub fn inline<T: ElementTree>(&self, tree: &T) -> InlineReport {
        let mut diagnostics = Diagnostics::new();
        let candidates = self.collect_candidates(tree, &mut diagnostics);

        let mut styled_elements = 0;
        for (element, matched) in tree.elements().iter().zip(&candidates) {
            if matched.is_empty() {
                continue;
            }
            let Some(declarations) =
                cascade::resolve(element, matched, self.policy, &mut diagnostics)
            else {
                continue;
            };
            if declarations.is_empty() {
                continue;
            }
            element.set_attribute("style", serialize_declarations(&declarations));
            styled_elements += 1;
        }

        tracing::debug!(
            stylesheets = self.stylesheets.len(),
            elements = tree.len(),
            styled_elements,
            diagnostics = diagnostics.len(),
            "inlining pass complete"
        );

        InlineReport {
            diagnostics: diagnostics.into_vec(),
            styled_elements,
        }
    }

    /// Inline every stylesheet into a parsed kuchiki document.
    pub fn inline_document(&self, document: &NodeRef) -> InlineReport {
        self.inline(&KuchikiTree::new(document))
    }

    /// Build the list of matched rules for every element, indexed like
    /// `tree.elements()`. Rules are appended in source order.
    fn collect_candidates<T: ElementTree>(
        &self,
        tree: &T,
        diagnostics: &mut Diagnostics,
    ) -> Vec<SmallVec<[CandidateRule<'s>; 4]>> {
        let matcher = SelectorMatcher::new(tree);
        let mut candidates: Vec<SmallVec<[CandidateRule<'s>; 4]>> =
            vec![SmallVec::new(); tree.len()];

        for (sheet_index, stylesheet) in self.stylesheets.iter().enumerate() {
            for rule in stylesheet.rules() {
                let found = matcher.match_selector(rule.selector());
                match found.status {
                    MatchStatus::Supported => {
                        for id in found.matched {
                            if let Some(slot) = candidates.get_mut(id.0) {
                                slot.push(CandidateRule::new(rule, sheet_index));
                            }
                        }
                    }
                    MatchStatus::Unsupported => {
                        diagnostics.push(Diagnostic::UnsupportedSelector {
                            selector: rule.selector().to_string(),
                            stylesheet: stylesheet.name().to_string(),
                        });
                    }
                    MatchStatus::Dynamic { .. } | MatchStatus::Ignored => {}
                }
            }
        }

        candidates
    }
}
