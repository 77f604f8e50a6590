//! Absolutize relative links so the document works outside its origin

use std::borrow::Cow;

use kuchiki::NodeRef;
use kuchiki::traits::*;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use url::Url;

use crate::utils::resolve_url;

/// `url(...)` references inside inline CSS, in any quoting style
static CSS_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"url\(\s*(?:"([^"]*)"|'([^']*)'|([^'")\s]*))\s*\)"#)
        .expect("Invalid CSS url() regex")
});

/// Rewrites `<a href>`, `<img src>` and `url(...)` in `style` attributes
/// against a base URL.
#[derive(Debug, Clone)]
pub struct UrlRewriter {
    base: Url,
}

impl UrlRewriter {
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Rewrite every link below `root`. Returns the number of changed
    /// attributes.
    pub fn rewrite(&self, root: &NodeRef) -> usize {
        let mut rewritten = 0;

        for element in root.descendants().elements() {
            let mut attributes = element.attributes.borrow_mut();

            let link_attribute = match &*element.name.local {
                "a" => Some("href"),
                "img" => Some("src"),
                _ => None,
            };
            if let Some(name) = link_attribute {
                let absolute = attributes
                    .get(name)
                    .and_then(|value| resolve_url(&self.base, value));
                if let Some(absolute) = absolute {
                    attributes.insert(name, absolute);
                    rewritten += 1;
                }
            }

            let updated_style = attributes
                .get("style")
                .and_then(|style| match self.rewrite_css_urls(style) {
                    Cow::Owned(updated) => Some(updated),
                    Cow::Borrowed(_) => None,
                });
            if let Some(updated) = updated_style {
                attributes.insert("style", updated);
                rewritten += 1;
            }
        }

        log::debug!("Absolutized {rewritten} link attributes against {}", self.base);
        rewritten
    }

    /// Rewrite relative `url(...)` references in a CSS snippet.
    ///
    /// Borrowed output means nothing changed.
    pub fn rewrite_css_urls<'a>(&self, css: &'a str) -> Cow<'a, str> {
        let mut changed = false;
        let result = CSS_URL_REGEX.replace_all(css, |caps: &Captures<'_>| {
            let (quote, reference) = if let Some(m) = caps.get(1) {
                ("\"", m.as_str())
            } else if let Some(m) = caps.get(2) {
                ("'", m.as_str())
            } else {
                ("", caps.get(3).map_or("", |m| m.as_str()))
            };

            match resolve_url(&self.base, reference) {
                Some(absolute) => {
                    changed = true;
                    format!("url({quote}{absolute}{quote})")
                }
                None => caps[0].to_string(),
            }
        });

        if changed {
            Cow::Owned(result.into_owned())
        } else {
            Cow::Borrowed(css)
        }
    }
}
