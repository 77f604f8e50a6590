//! A single `property: value [!important]` pair.

use std::fmt;

use cssparser::{Parser, ParserInput};

use super::parser::read_value;

/// One CSS declaration, immutable once constructed.
///
/// Equality is structural: two declarations for the same property with
/// different values are distinct, and the cascade keeps both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    property: String,
    value: String,
    important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>, important: bool) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important,
        }
    }

    /// Build a declaration from a property name and the raw value text that
    /// followed the colon, splitting off a trailing `!important`.
    ///
    /// Returns `None` when the property or the remaining value is empty.
    pub fn from_raw(property: &str, raw_value: &str) -> Option<Self> {
        let mut input = ParserInput::new(raw_value);
        let mut parser = Parser::new(&mut input);
        let (value, important) = read_value(&mut parser);
        Self::from_parts(property, &value, important)
    }

    /// Trimmed constructor that rejects an empty property or value.
    pub fn from_parts(property: &str, value: &str, important: bool) -> Option<Self> {
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self::new(property, value, important))
    }

    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_important(&self) -> bool {
        self.important
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        Ok(())
    }
}
