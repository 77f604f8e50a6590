//! Non-fatal problems found during an inlining pass

use std::fmt;

/// A problem that excluded a rule or an element from the pass without
/// stopping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The matching engine cannot evaluate this selector; its rule was
    /// left out of the cascade.
    UnsupportedSelector { selector: String, stylesheet: String },

    /// An element's existing `style` attribute could not be parsed and
    /// strict mode left the element untouched.
    MalformedInlineStyle { element: String, style: String },
}

impl Diagnostic {
    /// Selector text, for selector diagnostics.
    #[must_use]
    pub fn selector(&self) -> Option<&str> {
        match self {
            Diagnostic::UnsupportedSelector { selector, .. } => Some(selector),
            Diagnostic::MalformedInlineStyle { .. } => None,
        }
    }

    /// Source stylesheet name, for selector diagnostics.
    #[must_use]
    pub fn stylesheet(&self) -> Option<&str> {
        match self {
            Diagnostic::UnsupportedSelector { stylesheet, .. } => Some(stylesheet),
            Diagnostic::MalformedInlineStyle { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedSelector {
                selector,
                stylesheet,
            } => write!(
                f,
                "cannot use {selector:?} (from {stylesheet:?} stylesheet) when inlining stylesheets"
            ),
            Diagnostic::MalformedInlineStyle { element, style } => {
                write!(f, "cannot parse style attribute {style:?} on <{element}>")
            }
        }
    }
}

/// Accumulates diagnostics for one pass.
///
/// Every diagnostic is logged as a warning when it is recorded and
/// returned to the caller once the pass completes.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
