//! Style rules

use std::sync::Arc;

use super::declaration::Declaration;
use super::specificity::Specificity;

/// One selector with the declarations of its block.
///
/// Grouped selectors (`p, a { .. }`) are split upstream, so every rule has
/// exactly one selector and a single specificity, computed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    selector: String,
    declarations: Arc<[Declaration]>,
    stylesheet: Arc<str>,
    index: usize,
    specificity: Specificity,
}

impl Rule {
    /// Create a rule at position `index` of the stylesheet named `stylesheet`.
    ///
    /// `selector` must be a single selector, not a comma separated group;
    /// [`Stylesheet`](super::Stylesheet) splits groups before calling this.
    pub fn new(
        selector: impl Into<String>,
        declarations: impl Into<Arc<[Declaration]>>,
        stylesheet: impl Into<Arc<str>>,
        index: usize,
    ) -> Self {
        let selector = selector.into();
        let specificity = Specificity::of(&selector);
        Self {
            selector,
            declarations: declarations.into(),
            stylesheet: stylesheet.into(),
            index,
            specificity,
        }
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Declarations in source order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Name of the stylesheet this rule was parsed from.
    #[must_use]
    pub fn stylesheet_name(&self) -> &str {
        &self.stylesheet
    }

    /// Position of the rule within its stylesheet.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.specificity
    }
}
