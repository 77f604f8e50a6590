//! Whole-document transformation
//!
//! A [`Document`] owns the source HTML and everything needed to turn it
//! into inlined HTML: caller CSS, asset providers, configuration and the
//! optional callbacks that run around the inlining pass.

pub mod extraction;
pub mod markup_improver;
pub mod url_rewriter;

use std::fmt;

use kuchiki::NodeRef;
use kuchiki::traits::*;

use crate::config::{InlinerConfig, UrlOptions};
use crate::css::Stylesheet;
use crate::error::{InlinerError, InlinerResult};
use crate::inliner::{Diagnostic, Inliner};
use crate::providers::ProviderList;
use crate::utils::DOCUMENT_STYLES_NAME;

pub use extraction::extract_stylesheets;
pub use markup_improver::MarkupImprover;
pub use url_rewriter::UrlRewriter;

/// Hook receiving the parsed document root.
pub type TransformCallback = Box<dyn Fn(&NodeRef)>;

/// Output of [`Document::transform`]
#[derive(Debug, Clone)]
pub struct InliningResult {
    pub html: String,
    /// Number of elements whose `style` attribute was written
    pub styled_elements: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl InliningResult {
    /// Check if any rule or element was skipped
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// An HTML document waiting to be transformed.
pub struct Document {
    html: String,
    css: String,
    asset_providers: ProviderList,
    before_transformation: Option<TransformCallback>,
    after_transformation: Option<TransformCallback>,
    config: InlinerConfig,
}

impl Document {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            css: String::new(),
            asset_providers: ProviderList::default(),
            before_transformation: None,
            after_transformation: None,
            config: InlinerConfig::default(),
        }
    }

    /// The source HTML, as given.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Append CSS that applies after every stylesheet found in the document.
    pub fn add_css(&mut self, css: &str) {
        if !self.css.is_empty() {
            self.css.push('\n');
        }
        self.css.push_str(css);
    }

    #[must_use]
    pub fn asset_providers(&self) -> &ProviderList {
        &self.asset_providers
    }

    pub fn asset_providers_mut(&mut self) -> &mut ProviderList {
        &mut self.asset_providers
    }

    pub fn set_asset_providers(&mut self, providers: impl Into<ProviderList>) {
        self.asset_providers = providers.into();
    }

    pub fn set_before_transformation(&mut self, callback: impl Fn(&NodeRef) + 'static) {
        self.before_transformation = Some(Box::new(callback));
    }

    pub fn set_after_transformation(&mut self, callback: impl Fn(&NodeRef) + 'static) {
        self.after_transformation = Some(Box::new(callback));
    }

    #[must_use]
    pub fn config(&self) -> &InlinerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: InlinerConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn url_options(&self) -> Option<&UrlOptions> {
        self.config.url_options()
    }

    pub fn set_url_options(&mut self, options: UrlOptions) {
        self.config.set_url_options(Some(options));
    }

    /// Run the full pipeline and serialize the result.
    ///
    /// # Errors
    ///
    /// Fails when a linked stylesheet cannot be found or read, when the
    /// URL options are invalid, or when serialization fails. Problems with
    /// single rules or elements are reported in
    /// [`InliningResult::diagnostics`] instead.
    pub fn transform(&self) -> InlinerResult<InliningResult> {
        let dom = kuchiki::parse_html().one(self.html.as_str());

        if self.config.improve_markup() {
            MarkupImprover::new(&dom, &self.html).improve();
        }

        if let Some(callback) = &self.before_transformation {
            callback(&dom);
        }

        let mut stylesheets =
            extract_stylesheets(&dom, self.config.ignore_attribute(), &self.asset_providers)?;
        if !self.css.trim().is_empty() {
            stylesheets.push(Stylesheet::new(DOCUMENT_STYLES_NAME, &self.css));
        }

        let report = Inliner::new(&stylesheets)
            .with_policy(self.config.inline_style_policy())
            .inline_document(&dom);

        if let Some(options) = self.config.url_options() {
            UrlRewriter::new(options.base_url()?).rewrite(&dom);
        }

        if let Some(callback) = &self.after_transformation {
            callback(&dom);
        }

        let html = serialize(&dom)?;
        log::info!(
            "Inlined {} stylesheets into {} elements ({} diagnostics)",
            stylesheets.len(),
            report.styled_elements,
            report.diagnostics.len()
        );

        Ok(InliningResult {
            html,
            styled_elements: report.styled_elements,
            diagnostics: report.diagnostics,
        })
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("html_len", &self.html.len())
            .field("css_len", &self.css.len())
            .field("asset_providers", &self.asset_providers)
            .field("before_transformation", &self.before_transformation.is_some())
            .field("after_transformation", &self.after_transformation.is_some())
            .field("config", &self.config)
            .finish()
    }
}

fn serialize(dom: &NodeRef) -> InlinerResult<String> {
    let mut output = Vec::new();
    dom.serialize(&mut output)
        .map_err(|e| InlinerError::Serialization(e.to_string()))?;
    String::from_utf8(output).map_err(|e| InlinerError::Serialization(e.to_string()))
}
