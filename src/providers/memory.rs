//! Stylesheets held in memory

use std::collections::HashMap;

use super::AssetProvider;
use crate::css::Stylesheet;
use crate::error::InlinerResult;

/// Maps stylesheet names to CSS text known up front.
#[derive(Clone, Default)]
pub struct MemoryProvider {
    stylesheets: HashMap<String, String>,
}

impl MemoryProvider {
    pub fn new<I, N, C>(stylesheets: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            stylesheets: stylesheets
                .into_iter()
                .map(|(name, css)| (name.into(), css.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, css: impl Into<String>) {
        self.stylesheets.insert(name.into(), css.into());
    }
}

impl AssetProvider for MemoryProvider {
    fn find_stylesheet(&self, name: &str) -> InlinerResult<Option<Stylesheet>> {
        Ok(self
            .stylesheets
            .get(name)
            .map(|css| Stylesheet::new(name, css)))
    }
}

impl std::fmt::Debug for MemoryProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.stylesheets.keys().collect();
        names.sort();
        f.debug_struct("MemoryProvider")
            .field("stylesheets", &names)
            .finish()
    }
}
