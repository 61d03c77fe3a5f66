//! # Parser - Recursive-Descent Matching
//!
//! This module turns a token stream into a sequence of [`AstNode`]s.
//!
//! ## Matchers
//!
//! The grammar is a set of small **matchers**. Each one takes the [`Parser`]
//! (read-only access to the tokens) and a cursor, and returns a
//! [`MatchResult`]: either the nodes it produced plus the cursor just past
//! them, or a rejection. Matchers never mutate anything, so backtracking is
//! just "try the next matcher at the same cursor".
//!
//! ## Priority
//!
//! At every position the first acceptor wins:
//!
//! ```text
//! bold (** then __)  →  italic (* then _)  →  strikethrough (~)
//!     →  code (`)  →  link ([..](..))  →  any single token as text
//! ```
//!
//! The last alternative accepts every token except the end sentinel, so the
//! driver always makes progress and always terminates.
//!
//! ## Text Runs
//!
//! [`TextRuns`] controls how consumed characters become `Text` nodes before
//! normalization: one node per character, or one node per run. After
//! [`crate::normalize::normalize`] both produce the same tree.
//!
//! ## Public API
//!
//! ```
//! use chat_markup_syntax::{lexer::tokenize, parser::parse, AstNode};
//!
//! let nodes = parse(&tokenize("`x`")).unwrap();
//! assert_eq!(nodes, vec![AstNode::Code(vec![AstNode::text("x")])]);
//! ```

pub mod grammar;
pub mod result;

use crate::ast::AstNode;
use crate::error::{ParseError, Result};
use crate::lexer::Token;
pub use result::{Match, MatchResult};

/// How characters consumed by a matcher are grouped into `Text` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextRuns {
    /// One `Text` node per source character.
    #[default]
    PerChar,
    /// One `Text` node per consumed run of characters.
    Collapsed,
}

impl From<bool> for TextRuns {
    /// `true` collapses runs.
    fn from(collapse: bool) -> Self {
        if collapse {
            TextRuns::Collapsed
        } else {
            TextRuns::PerChar
        }
    }
}

/// Read-only view over a token stream handed to every matcher.
pub struct Parser<'t> {
    tokens: &'t [Token],
    runs: TextRuns,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], runs: TextRuns) -> Self {
        Self { tokens, runs }
    }

    /// Token at `pos`, or [`Token::End`] past the end of the stream.
    pub fn token(&self, pos: usize) -> Token {
        self.tokens.get(pos).copied().unwrap_or(Token::End)
    }

    /// The literal character at `pos`, if that token is a `Char`.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.token(pos).as_char()
    }

    /// True only when `pos` is the final sentinel actually present in the stream.
    pub fn at_sentinel(&self, pos: usize) -> bool {
        pos + 1 == self.tokens.len() && self.tokens[pos].is_end()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn runs(&self) -> TextRuns {
        self.runs
    }

    /// Build `Text` nodes for a consumed run according to [`TextRuns`].
    pub fn text_nodes(&self, run: &str) -> Vec<AstNode> {
        match self.runs {
            TextRuns::PerChar => run.chars().map(|c| AstNode::Text(c.to_string())).collect(),
            TextRuns::Collapsed if run.is_empty() => Vec::new(),
            TextRuns::Collapsed => vec![AstNode::text(run)],
        }
    }
}

/// Parse a token stream with one `Text` node per character.
///
/// The result is not normalized; see [`crate::normalize::normalize`].
pub fn parse(tokens: &[Token]) -> Result<Vec<AstNode>> {
    parse_with(tokens, TextRuns::PerChar)
}

/// Parse a token stream.
///
/// Fails with [`ParseError::EmptyInput`] when the stream holds nothing but the
/// sentinel, and with [`ParseError::Incomplete`] when matching cannot reach a
/// final sentinel (e.g. a hand-built stream without one).
pub fn parse_with(tokens: &[Token], runs: TextRuns) -> Result<Vec<AstNode>> {
    let p = Parser::new(tokens, runs);
    if p.at_sentinel(0) {
        return Err(ParseError::EmptyInput);
    }

    let segments = grammar::segments(&p, 0);
    if !p.at_sentinel(segments.end) {
        return Err(ParseError::Incomplete {
            cursor: segments.end,
            len: tokens.len(),
        });
    }

    log::trace!(
        "parsed {} tokens into {} top-level nodes",
        tokens.len(),
        segments.nodes.len()
    );
    Ok(segments.nodes)
}
