//! `cssparser` glue: stylesheet rules and declaration lists.
//!
//! At-rules are dropped whole, including their blocks, so `@media` and
//! `@keyframes` contents never turn into rules.

use cssparser::{
    AtRuleParser, BasicParseErrorKind, CowRcStr, DeclarationParser, ParseError,
    Parser, ParserInput, ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
    StyleSheetParser, Token, parse_important,
};

use super::declaration::Declaration;

/// A qualified rule before it is split into one rule per selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawRule {
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

/// Declarations parsed from a declaration list, plus the source text of
/// every item that failed to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DeclarationList {
    pub declarations: Vec<Declaration>,
    pub rejected: Vec<String>,
}

/// Parse stylesheet text into qualified rules in source order.
pub(crate) fn parse_rules(css: &str) -> Vec<RawRule> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut top_level = TopLevelParser;
    let mut rules = Vec::new();

    for result in StyleSheetParser::new(&mut parser, &mut top_level) {
        match result {
            Ok(rule) => rules.push(rule),
            Err((error, slice)) => {
                log::debug!("Skipping CSS rule {:?}: {:?}", slice.trim(), error.kind);
            }
        }
    }
    rules
}

/// Parse a bare declaration list, such as the contents of a `style`
/// attribute.
pub(crate) fn parse_declaration_list(text: &str) -> DeclarationList {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    collect_declarations(&mut parser)
}

fn collect_declarations(input: &mut Parser<'_, '_>) -> DeclarationList {
    let mut body = DeclarationListParser;
    let mut list = DeclarationList::default();
    for result in RuleBodyParser::new(input, &mut body) {
        match result {
            Ok(declaration) => list.declarations.push(declaration),
            Err((_, slice)) => {
                let slice = slice.trim().trim_end_matches(';').trim_end();
                if !slice.is_empty() {
                    list.rejected.push(slice.to_string());
                }
            }
        }
    }
    list
}

/// Read a declaration value up to the end of `input`.
///
/// Comments are dropped and a trailing `!important` is split off as a flag.
/// Nested blocks are copied verbatim, so a `!` inside a function or a
/// string never counts.
pub(crate) fn read_value(input: &mut Parser<'_, '_>) -> (String, bool) {
    let mut value = String::new();
    let mut segment_start = input.position();
    loop {
        let before = input.position();
        let important = input
            .try_parse(|input| parse_important(input).and_then(|()| input.expect_exhausted()))
            .is_ok();
        if important {
            push_segment(&mut value, input.slice(segment_start..before));
            return (value.trim().to_string(), true);
        }

        let (is_comment, opens_block) = match input.next_including_whitespace_and_comments() {
            Ok(token) => (
                matches!(token, Token::Comment(_)),
                matches!(
                    token,
                    Token::Function(_)
                        | Token::ParenthesisBlock
                        | Token::SquareBracketBlock
                        | Token::CurlyBracketBlock
                ),
            ),
            Err(_) => break,
        };
        if opens_block {
            skip_block(input);
        }
        if is_comment {
            push_segment(&mut value, input.slice(segment_start..before));
            if !value.is_empty() && !value.ends_with(char::is_whitespace) {
                value.push(' ');
            }
            segment_start = input.position();
        }
    }
    push_segment(&mut value, input.slice_from(segment_start));
    (value.trim().to_string(), false)
}

/// Consume the rest of the block just opened, so the parser position lands
/// after its closing token.
fn skip_block<'i>(input: &mut Parser<'i, '_>) {
    let _ = input.parse_nested_block(|_| Ok::<(), ParseError<'i, ()>>(()));
}

/// Append `segment`, collapsing the whitespace left on both sides of a
/// removed comment.
fn push_segment(value: &mut String, segment: &str) {
    if value.ends_with(char::is_whitespace) {
        value.push_str(segment.trim_start());
    } else {
        value.push_str(segment);
    }
}

/// Split selector list text such as `"p, a:is(.x, .y)"` into its members.
pub(crate) fn split_selector_list(text: &str) -> Vec<String> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    match parse_selector_list(&mut parser) {
        Ok(selectors) => selectors,
        Err(_) => vec![text.trim().to_string()],
    }
}

/// Split a selector list at top level commas. Commas inside functions,
/// attribute selectors or strings do not split.
fn parse_selector_list<'i>(input: &mut Parser<'i, '_>) -> Result<Vec<String>, ParseError<'i, ()>> {
    let selectors: Vec<String> = input.parse_comma_separated(|selector| {
        let start = selector.position();
        while selector.next_including_whitespace_and_comments().is_ok() {}
        Ok::<_, ParseError<'i, ()>>(selector.slice_from(start).trim().to_string())
    })?;

    Ok(selectors
        .into_iter()
        .filter(|selector| !selector.is_empty())
        .collect())
}

struct TopLevelParser;

impl<'i> AtRuleParser<'i> for TopLevelParser {
    type Prelude = ();
    type AtRule = RawRule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        log::debug!("Ignoring @{name} rule");
        Err(input.new_error(BasicParseErrorKind::AtRuleInvalid(name)))
    }
}

impl<'i> QualifiedRuleParser<'i> for TopLevelParser {
    type Prelude = Vec<String>;
    type QualifiedRule = RawRule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        parse_selector_list(input)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let list = collect_declarations(input);
        for rejected in &list.rejected {
            log::debug!("Dropping invalid declaration {rejected:?} in {prelude:?}");
        }
        Ok(RawRule {
            selectors: prelude,
            declarations: list.declarations,
        })
    }
}

struct DeclarationListParser;

impl<'i> DeclarationParser<'i> for DeclarationListParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let (value, important) = read_value(input);
        Declaration::from_parts(&name, &value, important).ok_or_else(|| input.new_custom_error(()))
    }
}

impl<'i> AtRuleParser<'i> for DeclarationListParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationListParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Declaration, ()> for DeclarationListParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}
