pub mod config;
pub mod css;
pub mod document;
pub mod error;
pub mod inliner;
pub mod providers;
pub mod utils;

pub use config::{InlinerConfig, InlinerConfigBuilder, UrlOptions};
pub use css::{
    Declaration, ParsedStyle, Rule, Specificity, SpecificityCache, Stylesheet,
    parse_style_attribute, serialize_declarations,
};
pub use document::{Document, InliningResult, MarkupImprover, UrlRewriter};
pub use error::{InlinerError, InlinerResult};
pub use inliner::{
    Diagnostic, ElementId, ElementTree, InlineReport, InlineStylePolicy, Inliner, KuchikiTree,
    MatchStatus, StyleTarget,
};
pub use providers::{AssetProvider, FilesystemProvider, MemoryProvider, ProviderList};

/// Inline `css` into `html` with default settings and no asset lookup.
///
/// Linked stylesheets in `html` must be resolvable from the working
/// directory; use [`Document`] for anything more involved.
pub fn inline_css(html: &str, css: &str) -> InlinerResult<String> {
    let mut document = Document::new(html);
    document.add_css(css);
    document.transform().map(|result| result.html)
}
