//! Selector specificity
//!
//! Specificity is computed from the selector text with the `cssparser`
//! tokenizer, so it works for selectors the matching engine cannot
//! evaluate as well. `!important` is not part of this value: it is a flag
//! on each [`Declaration`](super::Declaration) and is compared before
//! specificity by the cascade.

use std::fmt;
use std::num::NonZeroUsize;

use cssparser::{ParseError, Parser, ParserInput, Token};
use lru::LruCache;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::utils::{LEGACY_PSEUDO_ELEMENTS, SPECIFICITY_CACHE_CAPACITY};

/// Specificity triple `(ids, classes, types)`.
///
/// The derived ordering is lexicographic over the fields in declaration
/// order, which is exactly CSS precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    /// ID selectors
    pub ids: u16,
    /// Class selectors, attribute selectors and pseudo-classes
    pub classes: u16,
    /// Type selectors and pseudo-elements
    pub types: u16,
}

impl Specificity {
    pub const ZERO: Specificity = Specificity::new(0, 0, 0);

    #[must_use]
    pub const fn new(ids: u16, classes: u16, types: u16) -> Self {
        Self {
            ids,
            classes,
            types,
        }
    }

    /// Compute the specificity of a selector, using the shared cache.
    #[must_use]
    pub fn of(selector: &str) -> Self {
        SpecificityCache::global().get_or_compute(selector)
    }

    #[must_use]
    fn saturating_add(self, other: Self) -> Self {
        Self {
            ids: self.ids.saturating_add(other.ids),
            classes: self.classes.saturating_add(other.classes),
            types: self.types.saturating_add(other.types),
        }
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.ids, self.classes, self.types)
    }
}

/// Compute the specificity of a selector without touching the cache.
///
/// Universal selectors and combinators weigh nothing. `:not()`, `:is()`
/// and `:has()` take the weight of their most specific argument, `:where()`
/// weighs nothing. A comma separated list yields its most specific member.
#[must_use]
pub fn compute(selector: &str) -> Specificity {
    let mut input = ParserInput::new(selector);
    let mut parser = Parser::new(&mut input);
    selector_list(&mut parser)
}

/// What the previous significant token was, for interpreting an ident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Previous {
    Start,
    Dot,
    Colon,
    DoubleColon,
    Type,
    Pipe { prefix_counted: bool },
    Other,
}

fn selector_list(input: &mut Parser<'_, '_>) -> Specificity {
    let mut most_specific = Specificity::ZERO;
    let mut current = Specificity::ZERO;
    let mut previous = Previous::Start;

    loop {
        let token = match input.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::Comma => {
                most_specific = most_specific.max(current);
                current = Specificity::ZERO;
                previous = Previous::Start;
                continue;
            }
            Token::Delim('.') => {
                previous = Previous::Dot;
                continue;
            }
            Token::Delim('|') => {
                previous = Previous::Pipe {
                    prefix_counted: previous == Previous::Type,
                };
                continue;
            }
            Token::Colon => {
                previous = if previous == Previous::Colon {
                    Previous::DoubleColon
                } else {
                    Previous::Colon
                };
                continue;
            }
            Token::IDHash(_) | Token::Hash(_) => {
                current = current.saturating_add(Specificity::new(1, 0, 0));
            }
            Token::SquareBracketBlock => {
                current = current.saturating_add(Specificity::new(0, 1, 0));
            }
            Token::Ident(name) => {
                let weight = match previous {
                    Previous::Dot => Specificity::new(0, 1, 0),
                    Previous::Colon if is_legacy_pseudo_element(&name) => Specificity::new(0, 0, 1),
                    Previous::Colon => Specificity::new(0, 1, 0),
                    Previous::DoubleColon => Specificity::new(0, 0, 1),
                    // `svg|rect` counts one type, `*|rect` and `|rect` count the name
                    Previous::Pipe { prefix_counted: true } => Specificity::ZERO,
                    Previous::Pipe { prefix_counted: false }
                    | Previous::Start
                    | Previous::Type
                    | Previous::Other => {
                        current = current.saturating_add(Specificity::new(0, 0, 1));
                        previous = Previous::Type;
                        continue;
                    }
                };
                current = current.saturating_add(weight);
            }
            Token::Function(name) => {
                let weight = match previous {
                    Previous::Colon => pseudo_class_function(&name, input),
                    Previous::DoubleColon => Specificity::new(0, 0, 1),
                    _ => Specificity::ZERO,
                };
                current = current.saturating_add(weight);
            }
            // whitespace, combinators, `*`
            _ => {}
        }
        previous = Previous::Other;
    }

    most_specific.max(current)
}

fn pseudo_class_function(name: &str, input: &mut Parser<'_, '_>) -> Specificity {
    if name.eq_ignore_ascii_case("where") {
        return Specificity::ZERO;
    }

    let takes_argument_weight = ["not", "is", "has", "matches", "-webkit-any", "-moz-any"]
        .iter()
        .any(|function| name.eq_ignore_ascii_case(function));
    if !takes_argument_weight {
        // :nth-child(), :lang() and friends count as one pseudo-class
        return Specificity::new(0, 1, 0);
    }

    let nested: Result<Specificity, ParseError<'_, ()>> =
        input.parse_nested_block(|nested| Ok(selector_list(nested)));
    nested.unwrap_or_default()
}

fn is_legacy_pseudo_element(name: &str) -> bool {
    LEGACY_PSEUDO_ELEMENTS
        .iter()
        .any(|legacy| name.eq_ignore_ascii_case(legacy))
}

static GLOBAL_CACHE: Lazy<SpecificityCache> =
    Lazy::new(|| SpecificityCache::with_capacity(SPECIFICITY_CACHE_CAPACITY));

/// Bounded memo of selector specificities
///
/// Specificity is a pure function of the selector text, so one cache is
/// shared by every pass in the process.
pub struct SpecificityCache {
    entries: Mutex<LruCache<String, Specificity>>,
}

impl SpecificityCache {
    /// Create a cache holding at most `capacity` selectors (minimum one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// The process-wide cache used by [`Specificity::of`].
    #[must_use]
    pub fn global() -> &'static SpecificityCache {
        &GLOBAL_CACHE
    }

    pub fn get_or_compute(&self, selector: &str) -> Specificity {
        if let Some(cached) = self.entries.lock().get(selector) {
            return *cached;
        }
        let specificity = compute(selector);
        self.entries.lock().put(selector.to_string(), specificity);
        specificity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl fmt::Debug for SpecificityCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecificityCache")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_selectors() {
        assert_eq!(compute("*"), Specificity::new(0, 0, 0));
        assert_eq!(compute("p"), Specificity::new(0, 0, 1));
        assert_eq!(compute(".safe"), Specificity::new(0, 1, 0));
        assert_eq!(compute("#main"), Specificity::new(1, 0, 0));
        assert_eq!(compute("a[href]"), Specificity::new(0, 1, 1));
        assert_eq!(compute("p.tip.big#x"), Specificity::new(1, 2, 1));
    }

    #[test]
    fn test_combinators_sum_compounds() {
        assert_eq!(compute("ul li"), Specificity::new(0, 0, 2));
        assert_eq!(compute("ul > li + li ~ li"), Specificity::new(0, 0, 4));
        assert_eq!(compute("#nav .item a"), Specificity::new(1, 1, 1));
    }

    #[test]
    fn test_pseudo_classes_and_elements() {
        assert_eq!(compute("p:first-child"), Specificity::new(0, 1, 1));
        assert_eq!(compute("p:nth-child(2n+1)"), Specificity::new(0, 1, 1));
        assert_eq!(compute("p::before"), Specificity::new(0, 0, 2));
        assert_eq!(compute("p:before"), Specificity::new(0, 0, 2));
        assert_eq!(compute("a:hover"), Specificity::new(0, 1, 1));
    }

    #[test]
    fn test_functional_pseudo_classes() {
        assert_eq!(compute("p:not(.x)"), Specificity::new(0, 1, 1));
        assert_eq!(compute(":is(#a, .b)"), Specificity::new(1, 0, 0));
        assert_eq!(compute("p:where(#a)"), Specificity::new(0, 0, 1));
    }

    #[test]
    fn test_namespace_prefix_counts_once() {
        assert_eq!(compute("svg|rect"), Specificity::new(0, 0, 1));
        assert_eq!(compute("*|rect"), Specificity::new(0, 0, 1));
    }

    #[test]
    fn test_ordering() {
        assert!(compute("#id") > compute(".a.b"));
        assert!(compute(".a.b") > compute(".a"));
        assert!(compute(".a") > compute("div"));
        assert!(compute("div") > compute("*"));
        assert_eq!(compute("div.a").cmp(&compute("span.b")), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_cache_memoizes() {
        let cache = SpecificityCache::with_capacity(2);
        assert!(cache.is_empty());
        assert_eq!(cache.get_or_compute("p"), Specificity::new(0, 0, 1));
        assert_eq!(cache.get_or_compute("p"), Specificity::new(0, 0, 1));
        assert_eq!(cache.len(), 1);
        cache.get_or_compute(".a");
        cache.get_or_compute("#b");
        assert_eq!(cache.len(), 2);
    }
}
