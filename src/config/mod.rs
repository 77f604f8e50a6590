//! Configuration for document transformation
//!
//! This module provides the `InlinerConfig` struct, its builder, and the
//! `UrlOptions` used to absolutize links in the output.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::InlinerConfigBuilder;
pub use types::{InlinerConfig, UrlOptions};
