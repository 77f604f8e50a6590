//! URL helpers for link rewriting and asset lookup.

use url::Url;

/// Resolve a potentially relative URL against a base URL
///
/// Returns `None` for references that must be left as written: empty
/// values, fragment-only links (`#top`), and URLs that already carry a
/// scheme (`https:`, `mailto:`, `data:`, `cid:`...).
pub fn resolve_url(base: &Url, reference: &str) -> Option<String> {
    let reference = reference.trim();
    if reference.is_empty() || reference.starts_with('#') || has_scheme(reference) {
        return None;
    }

    match base.join(reference) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(e) => {
            log::warn!("Failed to resolve '{reference}' against base '{base}': {e}");
            None
        }
    }
}

/// Check whether a URL reference starts with a scheme
///
/// `Url::parse` also accepts things like `c:/x` as a scheme, which is the
/// behaviour browsers apply to `href` values too.
pub fn has_scheme(reference: &str) -> bool {
    Url::parse(reference).is_ok()
}

/// Strip any `?query` or `#fragment` suffix from an asset reference
///
/// Cache-busting query strings (`/styles.css?v=3`) are common on `<link>`
/// tags but never part of the file name.
pub fn strip_query_and_fragment(reference: &str) -> &str {
    let end = reference.find(['?', '#']).unwrap_or(reference.len());
    &reference[..end]
}
