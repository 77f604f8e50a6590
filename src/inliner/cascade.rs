//! Cascade resolution for a single element
//!
//! Matched declarations are ordered lowest precedence first, so that a
//! renderer applying "last one wins" per property reproduces the CSS
//! cascade. Nothing is deduplicated: earlier declarations for the same
//! property stay in the list as fallbacks for clients that reject a later
//! value. The element's own `style` declarations always come last.

use serde::{Deserialize, Serialize};

use super::diagnostics::{Diagnostic, Diagnostics};
use super::element::StyleTarget;
use crate::css::{Declaration, Rule, Specificity, parse_style_attribute};

/// Where a declaration was encountered: stylesheet, rule within the
/// stylesheet, declaration within the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceOrder {
    pub stylesheet: usize,
    pub rule: usize,
    pub declaration: usize,
}

/// Sort key of a collected declaration.
///
/// Fields compare in declaration order: `!important` first, then selector
/// specificity, then source order. The ordering is total, so equal
/// specificity always falls back to document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CascadePriority {
    pub important: bool,
    pub specificity: Specificity,
    pub order: SourceOrder,
}

/// A rule whose selector matched the element being resolved.
#[derive(Debug, Clone, Copy)]
pub struct CandidateRule<'a> {
    pub rule: &'a Rule,
    /// Position of the rule's stylesheet in the pass.
    pub stylesheet: usize,
}

impl<'a> CandidateRule<'a> {
    pub fn new(rule: &'a Rule, stylesheet: usize) -> Self {
        Self { rule, stylesheet }
    }

    fn prioritized(&self) -> impl Iterator<Item = (CascadePriority, &'a Declaration)> + 'a {
        let specificity = self.rule.specificity();
        let stylesheet = self.stylesheet;
        let rule = self.rule.index();
        self.rule
            .declarations()
            .iter()
            .enumerate()
            .map(move |(declaration, decl)| {
                let priority = CascadePriority {
                    important: decl.is_important(),
                    specificity,
                    order: SourceOrder {
                        stylesheet,
                        rule,
                        declaration,
                    },
                };
                (priority, decl)
            })
    }
}

/// What to do with an existing `style` attribute that fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineStylePolicy {
    /// Treat the attribute as empty and log a warning. Declarations that
    /// did parse before the broken part are dropped too.
    #[default]
    Lenient,
    /// Report a diagnostic and leave the element untouched.
    Strict,
}

/// Order the declarations of all candidate rules by ascending precedence.
pub fn cascade(candidates: &[CandidateRule<'_>]) -> Vec<Declaration> {
    let mut collected: Vec<(CascadePriority, &Declaration)> = candidates
        .iter()
        .flat_map(CandidateRule::prioritized)
        .collect();
    collected.sort_by_key(|(priority, _)| *priority);
    collected.into_iter().map(|(_, decl)| decl.clone()).collect()
}

/// Append the element's existing declarations after the cascaded ones.
///
/// Existing declarations keep their relative order and are never replaced
/// by a cascaded declaration for the same property.
pub fn merge(mut cascaded: Vec<Declaration>, existing: Vec<Declaration>) -> Vec<Declaration> {
    cascaded.extend(existing);
    cascaded
}

/// Compute the final declaration list of `element`.
///
/// Returns `None` when the element must be left untouched, which only
/// happens for a malformed `style` attribute under the strict policy.
pub fn resolve<E: StyleTarget + ?Sized>(
    element: &E,
    candidates: &[CandidateRule<'_>],
    policy: InlineStylePolicy,
    diagnostics: &mut Diagnostics,
) -> Option<Vec<Declaration>> {
    let existing = match element.attribute("style") {
        Some(style) => {
            let parsed = parse_style_attribute(&style);
            if parsed.is_malformed() {
                match policy {
                    InlineStylePolicy::Strict => {
                        diagnostics.push(Diagnostic::MalformedInlineStyle {
                            element: element.tag_name(),
                            style,
                        });
                        return None;
                    }
                    InlineStylePolicy::Lenient => {
                        log::warn!(
                            "Ignoring style attribute {style:?} on <{}>: cannot parse {:?}",
                            element.tag_name(),
                            parsed.rejected
                        );
                        return Some(cascade(candidates));
                    }
                }
            }
            parsed.declarations
        }
        None => Vec::new(),
    };

    Some(merge(cascade(candidates), existing))
}
