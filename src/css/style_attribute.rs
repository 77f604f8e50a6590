//! `style` attribute parsing and serialization

use super::declaration::Declaration;
use super::parser::parse_declaration_list;

/// Result of parsing a `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStyle {
    /// Declarations in attribute order.
    pub declarations: Vec<Declaration>,
    /// Source text of the items that could not be parsed.
    pub rejected: Vec<String>,
}

impl ParsedStyle {
    /// Whether any part of the attribute failed to parse.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Parse the text of a `style` attribute into declarations.
pub fn parse_style_attribute(text: &str) -> ParsedStyle {
    let list = parse_declaration_list(text);
    ParsedStyle {
        declarations: list.declarations,
        rejected: list.rejected,
    }
}

/// Render declarations as `style` attribute text.
///
/// Each declaration becomes `property: value` (plus ` !important`), joined
/// with `; ` in list order and without a trailing separator. Parsing the
/// result yields the same list.
pub fn serialize_declarations(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_joins_without_trailing_separator() {
        let declarations = vec![
            Declaration::new("text-transform", "uppercase", false),
            Declaration::new("color", "red", true),
            Declaration::new("color", "green", false),
        ];
        assert_eq!(
            serialize_declarations(&declarations),
            "text-transform: uppercase; color: red !important; color: green"
        );
        assert_eq!(serialize_declarations(&[]), "");
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let parsed = parse_style_attribute("color: red;color:green; ");
        assert!(!parsed.is_malformed());
        assert_eq!(
            parsed.declarations,
            vec![
                Declaration::new("color", "red", false),
                Declaration::new("color", "green", false),
            ]
        );
    }

    #[test]
    fn test_parse_reports_malformed_items() {
        let parsed = parse_style_attribute("color: red; {oops}");
        assert!(parsed.is_malformed());
        assert_eq!(parsed.declarations, vec![Declaration::new("color", "red", false)]);
    }

    #[test]
    fn test_round_trip() {
        let original = "margin: 0 auto; font-family: 'Open Sans', sans-serif; color: #333 !important";
        let parsed = parse_style_attribute(original);
        assert_eq!(serialize_declarations(&parsed.declarations), original);
        assert_eq!(
            parse_style_attribute(&serialize_declarations(&parsed.declarations)),
            parsed
        );
    }
}
