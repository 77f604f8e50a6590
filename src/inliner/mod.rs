//! The core inlining pass
//!
//! Matches stylesheet rules against an element tree, orders the matched
//! declarations by cascade precedence and writes them into each element's
//! `style` attribute. Problems that only affect one rule or one element
//! are collected as [`Diagnostic`]s instead of aborting the pass.

pub mod cascade;
pub mod diagnostics;
pub mod element;
pub mod engine;
pub mod matcher;

pub use cascade::{CandidateRule, CascadePriority, InlineStylePolicy, SourceOrder};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use element::{ElementId, ElementTree, KuchikiTree, StyleTarget};
pub use engine::{InlineReport, Inliner};
pub use matcher::{MatchStatus, SelectorMatch, SelectorMatcher};
