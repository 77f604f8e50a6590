//! Getter methods for `InlinerConfig`

use super::types::{InlinerConfig, UrlOptions};

impl InlinerConfig {
    #[must_use]
    pub fn strict_inline_styles(&self) -> bool {
        self.strict_inline_styles
    }

    #[must_use]
    pub fn ignore_attribute(&self) -> &str {
        &self.ignore_attribute
    }

    #[must_use]
    pub fn improve_markup(&self) -> bool {
        self.improve_markup
    }

    #[must_use]
    pub fn url_options(&self) -> Option<&UrlOptions> {
        self.url_options.as_ref()
    }
}
