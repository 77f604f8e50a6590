//! Named stylesheets

use std::sync::Arc;

use super::declaration::Declaration;
use super::parser::{parse_rules, split_selector_list};
use super::rule::Rule;

/// An ordered collection of rules parsed from one named CSS source.
///
/// Rule order is parse order; the cascade uses it to break specificity ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    name: Arc<str>,
    rules: Vec<Rule>,
}

impl Stylesheet {
    /// Parse `css` into a stylesheet called `name`.
    ///
    /// At-rules and unparseable rules are skipped. A grouped selector
    /// produces one rule per selector, all sharing the same declarations.
    pub fn new(name: impl Into<String>, css: &str) -> Self {
        let name: Arc<str> = Arc::from(name.into());
        let mut rules = Vec::new();

        for raw in parse_rules(css) {
            let declarations: Arc<[Declaration]> = raw.declarations.into();
            for selector in raw.selectors {
                let index = rules.len();
                rules.push(Rule::new(
                    selector,
                    Arc::clone(&declarations),
                    Arc::clone(&name),
                    index,
                ));
            }
        }

        log::debug!("Parsed {} rules from stylesheet {name:?}", rules.len());
        Self { name, rules }
    }

    /// Build a stylesheet from `(selector, declarations)` pairs that were
    /// parsed elsewhere.
    ///
    /// Grouped selectors are split the same way [`Stylesheet::new`] splits
    /// them.
    pub fn from_rules<I, S>(name: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Declaration>)>,
        S: Into<String>,
    {
        let name: Arc<str> = Arc::from(name.into());
        let mut split = Vec::new();
        for (selectors, declarations) in rules {
            let selectors: String = selectors.into();
            let declarations: Arc<[Declaration]> = declarations.into();
            for selector in split_selector_list(&selectors) {
                let index = split.len();
                split.push(Rule::new(
                    selector,
                    Arc::clone(&declarations),
                    Arc::clone(&name),
                    index,
                ));
            }
        }
        Self {
            name,
            rules: split,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in parse order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Specificity;

    #[test]
    fn test_grouped_selectors_become_separate_rules() {
        let sheet = Stylesheet::new("example", "p, a { color: green; } .tip { float: right }");
        let selectors: Vec<_> = sheet.rules().iter().map(Rule::selector).collect();
        assert_eq!(selectors, vec!["p", "a", ".tip"]);

        let indices: Vec<_> = sheet.rules().iter().map(Rule::index).collect();
        assert_eq!(indices, vec![0, 1, 2]);

        assert_eq!(sheet.rules()[0].declarations(), sheet.rules()[1].declarations());
        assert_eq!(sheet.rules()[2].specificity(), Specificity::new(0, 1, 0));
        assert!(sheet.rules().iter().all(|rule| rule.stylesheet_name() == "example"));
    }

    #[test]
    fn test_empty_and_at_rule_only_sheets() {
        assert!(Stylesheet::new("empty", "").is_empty());
        assert!(Stylesheet::new("media", "@media print { p { color: red } }").is_empty());
    }

    #[test]
    fn test_from_rules() {
        let sheet = Stylesheet::from_rules(
            "manual",
            vec![("p", vec![Declaration::new("color", "red", false)])],
        );
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.name(), "manual");
        assert_eq!(sheet.rules()[0].declarations()[0].value(), "red");
    }

    #[test]
    fn test_from_rules_splits_grouped_selectors() {
        let sheet = Stylesheet::from_rules(
            "manual",
            vec![
                ("p, #intro a", vec![Declaration::new("color", "red", false)]),
                ("em", vec![Declaration::new("color", "blue", false)]),
            ],
        );
        let selectors: Vec<_> = sheet.rules().iter().map(Rule::selector).collect();
        assert_eq!(selectors, vec!["p", "#intro a", "em"]);
        assert_eq!(sheet.rules()[0].specificity(), Specificity::new(0, 0, 1));
        assert_eq!(sheet.rules()[1].specificity(), Specificity::new(1, 0, 1));
        let indices: Vec<_> = sheet.rules().iter().map(Rule::index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
