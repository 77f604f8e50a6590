//! Builder setters

use super::builder::InlinerConfigBuilder;
use super::types::{InlinerConfig, UrlOptions};

impl InlinerConfigBuilder {
    /// Report elements whose `style` attribute cannot be parsed and leave
    /// them untouched.
    ///
    /// By default such an attribute is treated as empty: the element still
    /// receives the matched stylesheet rules and a warning is logged.
    #[must_use]
    pub fn strict_inline_styles(mut self, strict: bool) -> Self {
        self.strict_inline_styles = strict;
        self
    }

    /// Attribute marking `<style>` and `<link>` elements that must stay in
    /// the document, e.g. for media queries an email client evaluates.
    #[must_use]
    pub fn ignore_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.ignore_attribute = attribute.into();
        self
    }

    #[must_use]
    pub fn improve_markup(mut self, improve: bool) -> Self {
        self.improve_markup = improve;
        self
    }

    #[must_use]
    pub fn url_options(mut self, options: UrlOptions) -> Self {
        self.url_options = Some(options);
        self
    }
}

impl InlinerConfig {
    /// Replace the URL options without revalidating the rest.
    pub fn set_url_options(&mut self, options: Option<UrlOptions>) {
        self.url_options = options;
    }

    /// Toggle strict handling of malformed `style` attributes.
    pub fn set_strict_inline_styles(&mut self, strict: bool) {
        self.strict_inline_styles = strict;
    }
}
