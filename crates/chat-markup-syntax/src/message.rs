//! Message-level pipeline: tokenize, parse, normalize, and fall back to
//! plain text when no markup tree can be built.

use crate::ast::AstNode;
use crate::error::Result;
use crate::lexer::tokenize;
use crate::normalize::normalize;
use crate::parser::{TextRuns, parse_with};

/// How a message is turned into nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageOptions {
    /// When false the message is always shown as plain text.
    pub markup_enabled: bool,
    pub text_runs: TextRuns,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self {
            markup_enabled: true,
            text_runs: TextRuns::PerChar,
        }
    }
}

impl MessageOptions {
    pub fn plain() -> Self {
        Self {
            markup_enabled: false,
            ..Self::default()
        }
    }
}

/// Parse a message into its canonical tree.
pub fn parse_message(input: &str, runs: TextRuns) -> Result<Vec<AstNode>> {
    let tokens = tokenize(input);
    let nodes = parse_with(&tokens, runs)?;
    Ok(normalize(nodes))
}

/// Nodes to display for a message. Never fails.
///
/// A disabled or rejected parse yields the raw input as a single `Text` node;
/// an empty message yields no nodes.
pub fn render_message(input: &str, options: &MessageOptions) -> Vec<AstNode> {
    if input.is_empty() {
        return Vec::new();
    }
    if !options.markup_enabled {
        return vec![AstNode::text(input)];
    }

    match parse_message(input, options.text_runs) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::debug!("Showing message as plain text: {e}");
            vec![AstNode::text(input)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("*foo*", AstNode::Italic(vec![AstNode::text("foo")]))]
    #[case("**foo**", AstNode::Bold(vec![AstNode::text("foo")]))]
    #[case("__foo__", AstNode::Bold(vec![AstNode::text("foo")]))]
    #[case("~foo~", AstNode::Strikethrough(vec![AstNode::text("foo")]))]
    #[case("`foo`", AstNode::Code(vec![AstNode::text("foo")]))]
    #[case("[text](url)", AstNode::link("text", "url"))]
    fn single_constructs(#[case] input: &str, #[case] expected: AstNode) {
        assert_eq!(parse_message(input, TextRuns::PerChar).unwrap(), vec![expected.clone()]);
        assert_eq!(parse_message(input, TextRuns::Collapsed).unwrap(), vec![expected]);
    }

    #[rstest]
    #[case("* foo*")]
    #[case("*foo *")]
    #[case("[text](url")]
    #[case("``")]
    #[case("a ** b")]
    fn unmatched_markup_is_literal_text(#[case] input: &str) {
        assert_eq!(
            parse_message(input, TextRuns::PerChar).unwrap(),
            vec![AstNode::text(input)]
        );
    }

    #[test]
    fn double_tilde_leaves_outer_tildes_literal() {
        assert_eq!(
            parse_message("~~a~~", TextRuns::PerChar).unwrap(),
            vec![
                AstNode::text("~"),
                AstNode::Strikethrough(vec![AstNode::text("a")]),
                AstNode::text("~"),
            ]
        );
    }

    #[test]
    fn escapes_are_resolved_in_text() {
        assert_eq!(
            parse_message(r"\*not italic\*", TextRuns::PerChar).unwrap(),
            vec![AstNode::text("*not italic*")]
        );
    }

    #[test]
    fn parse_message_rejects_empty_input() {
        assert_eq!(
            parse_message("", TextRuns::PerChar),
            Err(ParseError::EmptyInput)
        );
    }

    #[test]
    fn render_empty_message() {
        assert_eq!(render_message("", &MessageOptions::default()), vec![]);
    }

    #[test]
    fn render_with_markup_disabled_keeps_raw_text() {
        assert_eq!(
            render_message(r"**hi** \*", &MessageOptions::plain()),
            vec![AstNode::text(r"**hi** \*")]
        );
    }

    #[test]
    fn render_with_markup_enabled() {
        assert_eq!(
            render_message("hi **you**", &MessageOptions::default()),
            vec![
                AstNode::text("hi "),
                AstNode::Bold(vec![AstNode::text("you")]),
            ]
        );
    }

    #[test]
    fn default_options_enable_markup_per_char() {
        let options = MessageOptions::default();
        assert!(options.markup_enabled);
        assert_eq!(options.text_runs, TextRuns::PerChar);
    }
}
