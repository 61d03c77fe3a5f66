//! Inline AST for chat messages.
//!
//! The tree is strictly owned: every node exclusively owns its children and
//! there are no shared or back references. Code spans and link URLs only ever
//! contain [`AstNode::Text`] leaves.

use serde::Serialize;

use crate::lexer::Token;

/// A styled inline node or a run of plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AstNode {
    Bold(Vec<AstNode>),
    Italic(Vec<AstNode>),
    Strikethrough(Vec<AstNode>),
    /// Backtick span. Children are always `Text`.
    Code(Vec<AstNode>),
    /// `[text](url)`. Both halves are always `Text` only.
    Link {
        text: Vec<AstNode>,
        url: Vec<AstNode>,
    },
    Text(String),
}

impl AstNode {
    pub fn text(s: impl Into<String>) -> Self {
        AstNode::Text(s.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        AstNode::Link {
            text: vec![AstNode::text(text)],
            url: vec![AstNode::text(url)],
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, AstNode::Text(_))
    }

    /// Child sequences of this node, in document order.
    ///
    /// Links yield their text children followed by their URL children.
    pub fn children(&self) -> impl Iterator<Item = &AstNode> {
        const NONE: &[AstNode] = &[];
        let (first, second) = match self {
            AstNode::Bold(c) | AstNode::Italic(c) | AstNode::Strikethrough(c) | AstNode::Code(c) => {
                (c.as_slice(), NONE)
            }
            AstNode::Link { text, url } => (text.as_slice(), url.as_slice()),
            AstNode::Text(_) => (NONE, NONE),
        };
        first.iter().chain(second)
    }

    /// Concatenation of every `Text` leaf under this node.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            AstNode::Text(s) => out.push_str(s),
            other => other.children().for_each(|c| c.push_text(out)),
        }
    }
}

/// Concatenation of every `Text` leaf in `nodes`, in document order.
pub fn text_content(nodes: &[AstNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.push_text(&mut out);
    }
    out
}

/// Marker tokens that open and close a boundary-style run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Asterisk,
    Underscore,
    Tilde,
}

impl Delimiter {
    pub fn matches(self, token: Token) -> bool {
        matches!(
            (self, token),
            (Delimiter::Asterisk, Token::Asterisk)
                | (Delimiter::Underscore, Token::Underscore)
                | (Delimiter::Tilde, Token::Tilde)
        )
    }

    /// Wrap `children` in the node a run of `count` delimiters denotes.
    ///
    /// # Panics
    ///
    /// Tildes only come singly, and counts other than 1 or 2 have no meaning.
    /// Asking for either is a bug in the grammar, not a property of the input.
    pub fn wrap(self, count: usize, children: Vec<AstNode>) -> AstNode {
        match (self, count) {
            (Delimiter::Asterisk | Delimiter::Underscore, 1) => AstNode::Italic(children),
            (Delimiter::Asterisk | Delimiter::Underscore, 2) => AstNode::Bold(children),
            (Delimiter::Tilde, 1) => AstNode::Strikethrough(children),
            (delimiter, count) => {
                panic!("no boundary style for {count} x {delimiter:?}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn text_content_walks_in_document_order() {
        let nodes = vec![
            AstNode::text("a "),
            AstNode::Bold(vec![AstNode::text("b"), AstNode::Italic(vec![AstNode::text("c")])]),
            AstNode::link("d", "e"),
            AstNode::Code(vec![AstNode::text("f")]),
        ];
        assert_eq!(text_content(&nodes), "a bcdef");
    }

    #[test]
    fn link_children_are_text_then_url() {
        let link = AstNode::link("here", "http://x");
        let kids: Vec<_> = link.children().cloned().collect();
        assert_eq!(kids, vec![AstNode::text("here"), AstNode::text("http://x")]);
    }

    #[test]
    fn text_has_no_children() {
        assert_eq!(AstNode::text("x").children().count(), 0);
        assert!(AstNode::text("x").is_text());
        assert!(!AstNode::Bold(vec![]).is_text());
    }

    #[rstest]
    #[case(Delimiter::Asterisk, Token::Asterisk, true)]
    #[case(Delimiter::Asterisk, Token::Underscore, false)]
    #[case(Delimiter::Underscore, Token::Underscore, true)]
    #[case(Delimiter::Tilde, Token::Tilde, true)]
    #[case(Delimiter::Tilde, Token::Char('~'), false)]
    fn delimiter_matches(#[case] d: Delimiter, #[case] t: Token, #[case] expected: bool) {
        assert_eq!(d.matches(t), expected);
    }

    #[rstest]
    #[case(Delimiter::Asterisk, 1, AstNode::Italic(vec![]))]
    #[case(Delimiter::Underscore, 1, AstNode::Italic(vec![]))]
    #[case(Delimiter::Asterisk, 2, AstNode::Bold(vec![]))]
    #[case(Delimiter::Underscore, 2, AstNode::Bold(vec![]))]
    #[case(Delimiter::Tilde, 1, AstNode::Strikethrough(vec![]))]
    fn delimiter_wraps(#[case] d: Delimiter, #[case] count: usize, #[case] expected: AstNode) {
        assert_eq!(d.wrap(count, vec![]), expected);
    }

    #[test]
    #[should_panic(expected = "no boundary style")]
    fn double_tilde_is_a_contract_violation() {
        Delimiter::Tilde.wrap(2, vec![]);
    }

    #[test]
    #[should_panic(expected = "no boundary style")]
    fn triple_asterisk_is_a_contract_violation() {
        Delimiter::Asterisk.wrap(3, vec![]);
    }
}
