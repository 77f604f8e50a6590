//! Shared configuration constants for the inliner
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Attribute that keeps a `<style>` or `<link>` element out of extraction
///
/// Elements carrying it stay in the document untouched (minus the marker
/// itself), which is how callers keep `@media` blocks for clients that
/// honour them.
pub const DEFAULT_IGNORE_ATTRIBUTE: &str = "data-inliner-ignore";

/// Pseudo-classes that depend on user interaction or navigation state
///
/// A static inlining pass has no runtime state, so selectors using any of
/// these never match.
pub const DYNAMIC_PSEUDO_CLASSES: &[&str] = &[
    "hover",
    "focus",
    "focus-within",
    "focus-visible",
    "active",
    "link",
    "any-link",
    "visited",
    "target",
];

/// Pseudo-elements that CSS2 allowed with a single colon
///
/// They count as pseudo-elements (type weight) for specificity even when
/// written as `:before`.
pub const LEGACY_PSEUDO_ELEMENTS: &[&str] = &["before", "after", "first-line", "first-letter"];

/// Specificity cache capacity: 4096 selectors
///
/// 4,096 entries × ~80 bytes ≈ 320 KB. Large enough to hold every selector
/// of typical email framework stylesheets across repeated passes.
pub const SPECIFICITY_CACHE_CAPACITY: usize = 4096;

/// Stylesheet name used for CSS extracted from `<style>` elements
pub const INLINE_STYLE_ELEMENT_NAME: &str = "(inline <style> element)";

/// Stylesheet name used for CSS added by the caller
pub const DOCUMENT_STYLES_NAME: &str = "(document styles)";

/// `http-equiv` value of the charset declaration added to `<head>`
pub const CONTENT_TYPE_HTTP_EQUIV: &str = "Content-Type";

/// `content` value of the charset declaration added to `<head>`
pub const CONTENT_TYPE_VALUE: &str = "text/html; charset=UTF-8";

/// Default protocol for URL options that do not name one
pub const DEFAULT_URL_PROTOCOL: &str = "http";
