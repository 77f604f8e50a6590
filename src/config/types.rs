//! Core configuration types for document transformation

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{InlinerError, InlinerResult};
use crate::inliner::InlineStylePolicy;
use crate::utils::{DEFAULT_IGNORE_ATTRIBUTE, DEFAULT_URL_PROTOCOL};

/// Main configuration struct for a transformation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlinerConfig {
    /// Leave elements with an unparseable `style` attribute untouched and
    /// report them, instead of discarding the attribute's contents.
    pub(crate) strict_inline_styles: bool,

    /// Attribute that marks `<style>` and `<link>` elements to keep in the
    /// document instead of inlining them.
    pub(crate) ignore_attribute: String,

    /// Add a doctype, `<head>` and a charset `<meta>` when missing.
    pub(crate) improve_markup: bool,

    /// Base for absolutizing relative links. `None` leaves links alone.
    pub(crate) url_options: Option<UrlOptions>,
}

impl Default for InlinerConfig {
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
    /// Policy handed to the inlining engine.
    #[must_use]
    pub fn inline_style_policy(&self) -> InlineStylePolicy {
        if self.strict_inline_styles {
            InlineStylePolicy::Strict
        } else {
            InlineStylePolicy::Lenient
        }
    }
}

/// Where the document will be served from.
///
/// Relative links are resolved against
/// `protocol://host[:port]/path/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlOptions {
    pub host: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub path: Option<String>,
}

impl UrlOptions {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            protocol: None,
            port: None,
            path: None,
        }
    }

    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Build the base URL.
    ///
    /// The path always ends in `/`, so `images/a.png` resolves below it.
    pub fn base_url(&self) -> InlinerResult<Url> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(InlinerError::InvalidUrlOptions(
                "host must not be empty".to_string(),
            ));
        }

        let protocol = self
            .protocol
            .as_deref()
            .map(|p| p.trim().trim_end_matches("://").trim_end_matches(':'))
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_URL_PROTOCOL);

        let port = self.port.map(|p| format!(":{p}")).unwrap_or_default();

        let path = self.path.as_deref().unwrap_or("").trim().trim_matches('/');
        let path = if path.is_empty() {
            "/".to_string()
        } else {
            format!("/{path}/")
        };

        let base = format!("{protocol}://{host}{port}{path}");
        Url::parse(&base).map_err(|e| InlinerError::InvalidUrlOptions(format!("{base}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_defaults() {
        let url = UrlOptions::new("example.com").base_url().unwrap();
        assert_eq!(url.as_str(), "http://example.com/");
    }

    #[test]
    fn test_base_url_full() {
        let url = UrlOptions::new("example.com")
            .with_protocol("https://")
            .with_port(8080)
            .with_path("/mail/weekly")
            .base_url()
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com:8080/mail/weekly/");
    }

    #[test]
    fn test_base_url_rejects_empty_host() {
        assert!(matches!(
            UrlOptions::new("  ").base_url(),
            Err(InlinerError::InvalidUrlOptions(_))
        ));
    }

    #[test]
    fn test_policy_follows_strict_flag() {
        let mut config = InlinerConfig::default();
        assert_eq!(config.inline_style_policy(), InlineStylePolicy::Lenient);
        config.strict_inline_styles = true;
        assert_eq!(config.inline_style_policy(), InlineStylePolicy::Strict);
    }
}
