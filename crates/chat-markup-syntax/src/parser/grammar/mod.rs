//! # Grammar Rules
//!
//! Every rule is a plain function `fn(&Parser, cursor) -> MatchResult`.
//! Rules read tokens through the parser and never consume anything when they
//! reject, so alternatives are tried in order with [`Option::or_else`]:
//!
//! ```ignore
//! fn style(p: &Parser<'_>, pos: usize) -> MatchResult {
//!     bold(p, pos).or_else(|| italic(p, pos))
//! }
//! ```
//!
//! ## Module Structure
//!
//! - this module: the top-level driver ([`markdown`]), segment dispatch and
//!   the literal fallback
//! - [`inline`]: styled constructs (bold, italic, strikethrough, code, links)
//!   and the character-level matchers they are built from

pub mod inline;

use super::{Match, MatchResult, Parser};

pub use inline::{
    bold, bold_asterisk, bold_underscore, boundary_char, boundary_style, code, italic,
    italic_asterisk, italic_underscore, link, literal_char, strikethrough,
};

/// Match a whole message: one or more segments followed by the final sentinel.
///
/// The accepted cursor points just past the sentinel.
pub fn markdown(p: &Parser<'_>, pos: usize) -> MatchResult {
    let matched = segments(p, pos);
    if matched.end == pos || !p.at_sentinel(matched.end) {
        return None;
    }
    Some(Match::new(matched.nodes, matched.end + 1))
}

/// Greedily match segments starting at `pos` until one is rejected.
///
/// Each accepted segment advances the cursor by at least one token, and only
/// the sentinel is rejected by [`segment`], so this stops at the first
/// sentinel (real or past the end of the stream).
pub fn segments(p: &Parser<'_>, pos: usize) -> Match {
    let mut nodes = Vec::new();
    let mut i = pos;
    while let Some(segment) = segment(p, i) {
        debug_assert!(segment.end > i, "segment must consume input");
        nodes.extend(segment.nodes);
        i = segment.end;
    }
    Match::new(nodes, i)
}

/// One segment: a styled construct, or failing that a single token as text.
pub fn segment(p: &Parser<'_>, pos: usize) -> MatchResult {
    style(p, pos).or_else(|| any(p, pos))
}

/// Styled constructs in priority order.
pub fn style(p: &Parser<'_>, pos: usize) -> MatchResult {
    bold(p, pos)
        .or_else(|| italic(p, pos))
        .or_else(|| strikethrough(p, pos))
        .or_else(|| code(p, pos))
        .or_else(|| link(p, pos))
}

/// Any token except the sentinel, as its literal text.
///
/// An unmatched `*` becomes the text `"*"`.
pub fn any(p: &Parser<'_>, pos: usize) -> MatchResult {
    let c = p.token(pos).literal()?;
    Some(Match::new(p.text_nodes(c.encode_utf8(&mut [0; 4])), pos + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::AstNode;
    use crate::lexer::tokenize;
    use crate::parser::TextRuns;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn chars(s: &str) -> Vec<AstNode> {
        s.chars().map(|c| AstNode::Text(c.to_string())).collect()
    }

    fn run(rule: fn(&Parser<'_>, usize) -> MatchResult, input: &str) -> MatchResult {
        let tokens = tokenize(input);
        rule(&Parser::new(&tokens, TextRuns::PerChar), 0)
    }

    #[rstest]
    #[case("**foo**", vec![AstNode::Bold(chars("foo"))])]
    #[case("__f__", vec![AstNode::Bold(chars("f"))])]
    #[case("*a*", vec![AstNode::Italic(chars("a"))])]
    #[case("_foo_", vec![AstNode::Italic(chars("foo"))])]
    #[case("~fo~", vec![AstNode::Strikethrough(chars("fo"))])]
    #[case("` foobar `", vec![AstNode::Code(chars(" foobar "))])]
    #[case("` `", vec![AstNode::Code(chars(" "))])]
    #[case("[foo bar](fizz buzz)", vec![AstNode::Link { text: chars("foo bar"), url: chars("fizz buzz") }])]
    fn style_accepts(#[case] input: &str, #[case] expected: Vec<AstNode>) {
        let m = run(style, input).unwrap();
        assert_eq!(m.nodes, expected);
        assert_eq!(m.end, tokenize(input).len() - 1);
    }

    #[rstest]
    #[case("** foo**")]
    #[case("**foo **")]
    #[case("****")]
    #[case("__ __")]
    #[case("* foo*")]
    #[case("*foo *")]
    #[case("_a")]
    #[case("~ ~")]
    #[case("~~a~~")]
    #[case("``")]
    #[case("[]()")]
    #[case("[foo]()")]
    #[case("[](bar)")]
    #[case("[text](url")]
    fn style_rejects(#[case] input: &str) {
        assert_eq!(run(style, input), None);
    }

    #[rstest]
    #[case("** foo**")]
    #[case("*foo *")]
    #[case("~~a~~")]
    #[case("[text](url")]
    #[case("``")]
    fn segment_falls_back_to_first_token_as_text(#[case] input: &str) {
        let first = input.chars().next().unwrap();
        assert_eq!(
            run(segment, input),
            Some(Match::new(chars(&first.to_string()), 1))
        );
    }

    #[test]
    fn segment_rejects_empty_input() {
        assert_eq!(run(segment, ""), None);
    }

    #[test]
    fn any_rejects_only_the_sentinel() {
        for input in ["*", "_", "~", "`", "[", "]", "(", ")", "x", " "] {
            let m = run(any, input).unwrap();
            assert_eq!(m.nodes, chars(input));
            assert_eq!(m.end, 1);
        }
        assert_eq!(run(any, ""), None);
    }

    #[test]
    fn any_keeps_escaped_characters_literal() {
        assert_eq!(run(any, r"\*").unwrap().nodes, chars("*"));
    }

    #[rstest]
    #[case("foo bar *foo bar* foo bar ", {
        let mut v = chars("foo bar ");
        v.push(AstNode::Italic(chars("foo bar")));
        v.extend(chars(" foo bar "));
        v
    })]
    #[case("foo **bar ba** *fo* oobar `ba`", {
        let mut v = chars("foo ");
        v.push(AstNode::Bold(chars("bar ba")));
        v.extend(chars(" "));
        v.push(AstNode::Italic(chars("fo")));
        v.extend(chars(" oobar "));
        v.push(AstNode::Code(chars("ba")));
        v
    })]
    #[case("  aslkdf", chars("  aslkdf"))]
    #[case("** foo**", chars("** foo**"))]
    #[case("*foo *", chars("*foo *"))]
    fn markdown_accepts(#[case] input: &str, #[case] expected: Vec<AstNode>) {
        let m = run(markdown, input).unwrap();
        assert_eq!(m.nodes, expected);
        assert_eq!(m.end, tokenize(input).len());
    }

    #[test]
    fn markdown_rejects_empty_input() {
        assert_eq!(run(markdown, ""), None);
    }

    #[test]
    fn segments_stop_at_the_sentinel() {
        let m = run(|p, pos| Some(segments(p, pos)), "a*b").unwrap();
        assert_eq!(m.end, 3);
        assert_eq!(m.nodes, chars("a*b"));
    }

    #[test]
    fn nested_markers_inside_content_fall_back() {
        // content may only hold literal characters
        let m = run(markdown, "*a_b*").unwrap();
        assert_eq!(m.nodes, chars("*a_b*"));
    }

    #[test]
    fn triple_asterisks_wrap_bold_in_literals() {
        let m = run(markdown, "***a***").unwrap();
        let mut expected = chars("*");
        expected.push(AstNode::Bold(chars("a")));
        expected.extend(chars("*"));
        assert_eq!(m.nodes, expected);
    }
}
