//! Stylesheet data model
//!
//! Declarations, rules and stylesheets as the cascade consumes them, the
//! specificity of selectors, and the `style` attribute format.

pub mod declaration;
mod parser;
pub mod rule;
pub mod specificity;
pub mod style_attribute;
pub mod stylesheet;

pub use declaration::Declaration;
pub use rule::Rule;
pub use specificity::{Specificity, SpecificityCache};
pub use style_attribute::{ParsedStyle, parse_style_attribute, serialize_declarations};
pub use stylesheet::Stylesheet;
