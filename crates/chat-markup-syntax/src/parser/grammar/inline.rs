//! # Inline Constructs
//!
//! | Opening token | Construct |
//! |---------------|-----------|
//! | `**` / `__` | Bold |
//! | `*` / `_` | Italic |
//! | `~` | Strikethrough |
//! | `` ` `` | Code span |
//! | `[` | Link `[text](url)` |
//!
//! ## Boundary-Style Runs
//!
//! Bold, italic and strikethrough share [`boundary_style`], a simplified
//! flanking rule:
//!
//! - the character right after the opening delimiters must be a non-whitespace
//!   literal (`* foo*` is not italic)
//! - the run only closes after a non-whitespace literal (`*foo *` is not
//!   italic)
//! - only literal characters may appear inside; any other structural token
//!   rejects the run
//!
//! Code spans and links take literal characters only, and need at least one.
//! There are no partial links: `[text](url` is rejected as a whole.

use crate::ast::{AstNode, Delimiter};
use crate::lexer::Token;

use crate::parser::{Match, MatchResult, Parser};

/// A single literal character.
pub fn literal_char(p: &Parser<'_>, pos: usize) -> MatchResult {
    let c = p.char_at(pos)?;
    Some(Match::new(p.text_nodes(c.encode_utf8(&mut [0; 4])), pos + 1))
}

/// A single literal character that is not whitespace.
pub fn boundary_char(p: &Parser<'_>, pos: usize) -> MatchResult {
    let c = p.char_at(pos).filter(|c| !c.is_whitespace())?;
    Some(Match::new(p.text_nodes(c.encode_utf8(&mut [0; 4])), pos + 1))
}

/// Consume literal characters from `pos`, returning the run and the cursor after it.
fn char_run(p: &Parser<'_>, pos: usize) -> (String, usize) {
    let mut run = String::new();
    let mut i = pos;
    while let Some(c) = p.char_at(i) {
        run.push(c);
        i += 1;
    }
    (run, i)
}

/// True when `count` `delimiter` tokens start at `pos`.
fn delimiters_at(p: &Parser<'_>, delimiter: Delimiter, count: usize, pos: usize) -> bool {
    (pos..pos + count).all(|i| delimiter.matches(p.token(i)))
}

/// A run wrapped in `count` `delimiter` tokens on each side.
///
/// # Panics
///
/// If `(delimiter, count)` names no style: tildes only come singly, and the
/// count must be 1 or 2. Grammar rules never ask for anything else.
pub fn boundary_style(
    p: &Parser<'_>,
    delimiter: Delimiter,
    count: usize,
    pos: usize,
) -> MatchResult {
    assert!(
        matches!(
            (delimiter, count),
            (Delimiter::Asterisk | Delimiter::Underscore, 1 | 2) | (Delimiter::Tilde, 1)
        ),
        "no boundary style for {count} x {delimiter:?}"
    );

    if !delimiters_at(p, delimiter, count, pos) {
        return None;
    }

    // left flank
    let mut i = pos + count;
    let mut last = p.char_at(i).filter(|c| !c.is_whitespace())?;
    let mut content = String::from(last);
    i += 1;

    // Each step consumes one literal or rejects, so this is bounded by the
    // tokens left. Closing needs a non-whitespace literal right before it.
    while last.is_whitespace() || !delimiters_at(p, delimiter, count, i) {
        last = p.char_at(i)?;
        content.push(last);
        i += 1;
    }

    let node = delimiter.wrap(count, p.text_nodes(&content));
    Some(Match::single(node, i + count))
}

pub fn bold_asterisk(p: &Parser<'_>, pos: usize) -> MatchResult {
    boundary_style(p, Delimiter::Asterisk, 2, pos)
}

pub fn bold_underscore(p: &Parser<'_>, pos: usize) -> MatchResult {
    boundary_style(p, Delimiter::Underscore, 2, pos)
}

pub fn bold(p: &Parser<'_>, pos: usize) -> MatchResult {
    bold_asterisk(p, pos).or_else(|| bold_underscore(p, pos))
}

pub fn italic_asterisk(p: &Parser<'_>, pos: usize) -> MatchResult {
    boundary_style(p, Delimiter::Asterisk, 1, pos)
}

pub fn italic_underscore(p: &Parser<'_>, pos: usize) -> MatchResult {
    boundary_style(p, Delimiter::Underscore, 1, pos)
}

pub fn italic(p: &Parser<'_>, pos: usize) -> MatchResult {
    italic_asterisk(p, pos).or_else(|| italic_underscore(p, pos))
}

pub fn strikethrough(p: &Parser<'_>, pos: usize) -> MatchResult {
    boundary_style(p, Delimiter::Tilde, 1, pos)
}

/// A backtick span holding one or more literal characters.
pub fn code(p: &Parser<'_>, pos: usize) -> MatchResult {
    if p.token(pos) != Token::Backtick {
        return None;
    }

    let (content, i) = char_run(p, pos + 1);
    if content.is_empty() || p.token(i) != Token::Backtick {
        return None;
    }

    Some(Match::single(AstNode::Code(p.text_nodes(&content)), i + 1))
}

/// `[text](url)` where both halves are non-empty literal runs.
pub fn link(p: &Parser<'_>, pos: usize) -> MatchResult {
    if p.token(pos) != Token::LeftBracket {
        return None;
    }

    let (text, i) = char_run(p, pos + 1);
    if text.is_empty()
        || p.token(i) != Token::RightBracket
        || p.token(i + 1) != Token::LeftParen
    {
        return None;
    }

    let (url, i) = char_run(p, i + 2);
    if url.is_empty() || p.token(i) != Token::RightParen {
        return None;
    }

    let node = AstNode::Link {
        text: p.text_nodes(&text),
        url: p.text_nodes(&url),
    };
    Some(Match::single(node, i + 1))
}
