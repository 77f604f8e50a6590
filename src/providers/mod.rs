//! Stylesheet lookup for `<link rel="stylesheet">` references
//!
//! A [`ProviderList`] asks each [`AssetProvider`] in turn; the first one
//! that knows the name wins.

pub mod filesystem;
pub mod memory;

use std::fmt;

use crate::css::Stylesheet;
use crate::error::{InlinerError, InlinerResult};

pub use filesystem::FilesystemProvider;
pub use memory::MemoryProvider;

/// Source of stylesheets referenced by name (usually an `href`).
pub trait AssetProvider: fmt::Debug + Send + Sync {
    /// Look up the stylesheet called `name`.
    ///
    /// `Ok(None)` means this provider does not have it and the next one
    /// should be asked. Errors abort the lookup.
    fn find_stylesheet(&self, name: &str) -> InlinerResult<Option<Stylesheet>>;
}

/// Ordered list of providers.
#[derive(Debug)]
pub struct ProviderList {
    providers: Vec<Box<dyn AssetProvider>>,
}

impl ProviderList {
    /// A list with no providers; every lookup misses.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    #[must_use]
    pub fn new(providers: Vec<Box<dyn AssetProvider>>) -> Self {
        Self { providers }
    }

    /// Wrap a single provider.
    #[must_use]
    pub fn wrap(provider: impl AssetProvider + 'static) -> Self {
        Self::new(vec![Box::new(provider)])
    }

    pub fn push(&mut self, provider: impl AssetProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn AssetProvider> {
        self.providers.iter().map(|provider| provider.as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// First stylesheet any provider returns for `name`.
    pub fn find_stylesheet(&self, name: &str) -> InlinerResult<Option<Stylesheet>> {
        for provider in &self.providers {
            if let Some(stylesheet) = provider.find_stylesheet(name)? {
                log::debug!("Resolved stylesheet {name:?} with {provider:?}");
                return Ok(Some(stylesheet));
            }
        }
        Ok(None)
    }

    /// Like [`find_stylesheet`](Self::find_stylesheet), but a miss is an
    /// [`InlinerError::CssNotFound`] naming every provider that was asked.
    pub fn find_stylesheet_or_err(&self, name: &str) -> InlinerResult<Stylesheet> {
        self.find_stylesheet(name)?
            .ok_or_else(|| InlinerError::CssNotFound {
                name: name.to_string(),
                tried: self.describe(),
            })
    }

    fn describe(&self) -> String {
        if self.providers.is_empty() {
            return "no providers".to_string();
        }
        self.providers
            .iter()
            .map(|provider| format!("{provider:?}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ProviderList {
    /// A single filesystem provider rooted at the working directory.
    fn default() -> Self {
        Self::wrap(FilesystemProvider::default())
    }
}

impl From<Vec<Box<dyn AssetProvider>>> for ProviderList {
    fn from(providers: Vec<Box<dyn AssetProvider>>) -> Self {
        Self::new(providers)
    }
}
