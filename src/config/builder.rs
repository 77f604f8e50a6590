//! Fluent builder for `InlinerConfig`
//!
//! Setters live in `methods.rs`; this module holds the builder state and
//! the validating `build()`.

use anyhow::{Context, Result, anyhow};

use super::types::{InlinerConfig, UrlOptions};
use crate::utils::DEFAULT_IGNORE_ATTRIBUTE;

pub struct InlinerConfigBuilder {
    pub(crate) strict_inline_styles: bool,
    pub(crate) ignore_attribute: String,
    pub(crate) improve_markup: bool,
    pub(crate) url_options: Option<UrlOptions>,
}

impl Default for InlinerConfigBuilder {
    fn default() -> Self {
        Self {
            strict_inline_styles: false,
            ignore_attribute: DEFAULT_IGNORE_ATTRIBUTE.to_string(),
            improve_markup: true,
            url_options: None,
        }
    }
}

impl InlinerConfig {
    /// Create a builder for configuring an `InlinerConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> InlinerConfigBuilder {
        InlinerConfigBuilder::default()
    }
}

impl InlinerConfigBuilder {
    /// Validate the settings and produce the config.
    ///
    /// # Errors
    ///
    /// Fails when the ignore attribute is empty or contains whitespace,
    /// or when the URL options do not form a valid base URL.
    pub fn build(self) -> Result<InlinerConfig> {
        let ignore_attribute = self.ignore_attribute.trim().to_string();
        if ignore_attribute.is_empty() {
            return Err(anyhow!("ignore_attribute must not be empty"));
        }
        if ignore_attribute.chars().any(char::is_whitespace) {
            return Err(anyhow!(
                "ignore_attribute '{ignore_attribute}' must not contain whitespace"
            ));
        }

        if let Some(url_options) = &self.url_options {
            url_options
                .base_url()
                .with_context(|| format!("Invalid url_options for host '{}'", url_options.host))?;
        }

        Ok(InlinerConfig {
            strict_inline_styles: self.strict_inline_styles,
            ignore_attribute: ignore_attribute.to_ascii_lowercase(),
            improve_markup: self.improve_markup,
            url_options: self.url_options,
        })
    }
}
