//! # Lexer - Tokenizing Chat Messages
//!
//! This module provides the first stage of parsing: breaking a message into
//! primitive tokens using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## Token Design
//!
//! Every token is either a **structural marker** with no payload, or a single
//! **literal character**. Unlike a document lexer there are no text runs: the
//! parser decides character by character whether something is markup.
//!
//! | Source | Token |
//! |--------|-------|
//! | `*` | [`Token::Asterisk`] |
//! | `_` | [`Token::Underscore`] |
//! | `~` | [`Token::Tilde`] |
//! | `` ` `` | [`Token::Backtick`] |
//! | `[` `]` | [`Token::LeftBracket`] [`Token::RightBracket`] |
//! | `(` `)` | [`Token::LeftParen`] [`Token::RightParen`] |
//! | `\x` | [`Token::Char`]`('x')` (escape) |
//! | trailing `\` | [`Token::Char`]`('\\')` |
//! | anything else | [`Token::Char`] |
//!
//! The stream always ends with exactly one [`Token::End`].
//!
//! ```
//! use chat_markup_syntax::lexer::{tokenize, Token};
//!
//! let tokens = tokenize(r"\*a*");
//! assert_eq!(
//!     tokens,
//!     vec![Token::Char('*'), Token::Char('a'), Token::Asterisk, Token::End]
//! );
//! ```

use logos::Logos;

/// Raw token kinds recognised by Logos.
///
/// Kept private: escapes are resolved while converting to [`Token`], so the
/// rest of the crate never sees a backslash as anything but a literal.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[token("*")]
    Asterisk,

    #[token("_")]
    Underscore,

    #[token("~")]
    Tilde,

    #[token("`")]
    Backtick,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    /// Backslash followed by any character, newline included
    #[regex(r"\\(.|\n)")]
    Escape,

    /// Backslash with nothing after it
    #[token("\\")]
    Backslash,

    /// Any single character that is not structural
    #[regex(r"[^*_~`\[\]()\\]")]
    Char,
}

impl RawToken {
    fn into_token(self, slice: &str) -> Token {
        match self {
            RawToken::Asterisk => Token::Asterisk,
            RawToken::Underscore => Token::Underscore,
            RawToken::Tilde => Token::Tilde,
            RawToken::Backtick => Token::Backtick,
            RawToken::LBracket => Token::LeftBracket,
            RawToken::RBracket => Token::RightBracket,
            RawToken::LParen => Token::LeftParen,
            RawToken::RParen => Token::RightParen,
            RawToken::Escape => Token::Char(nth_char(slice, 1)),
            RawToken::Backslash => Token::Char('\\'),
            RawToken::Char => Token::Char(nth_char(slice, 0)),
        }
    }
}

// Logos never hands out a shorter slice than its pattern matched.
fn nth_char(slice: &str, n: usize) -> char {
    slice.chars().nth(n).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// A primitive unit of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// One literal character, possibly produced by an escape
    Char(char),
    Asterisk,
    Underscore,
    Tilde,
    Backtick,
    LeftBracket,
    RightBracket,
    LeftParen,
    RightParen,
    /// End-of-input sentinel
    End,
}

impl Token {
    /// The character carried by a [`Token::Char`].
    pub fn as_char(self) -> Option<char> {
        match self {
            Token::Char(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_char(self) -> bool {
        matches!(self, Token::Char(_))
    }

    pub fn is_end(self) -> bool {
        matches!(self, Token::End)
    }

    /// The literal character this token stands for when no markup claims it.
    ///
    /// Returns `None` only for [`Token::End`].
    pub fn literal(self) -> Option<char> {
        match self {
            Token::Char(c) => Some(c),
            Token::Asterisk => Some('*'),
            Token::Underscore => Some('_'),
            Token::Tilde => Some('~'),
            Token::Backtick => Some('`'),
            Token::LeftBracket => Some('['),
            Token::RightBracket => Some(']'),
            Token::LeftParen => Some('('),
            Token::RightParen => Some(')'),
            Token::End => None,
        }
    }
}

/// Tokenize a message.
///
/// Never fails. The returned sequence always ends with a single
/// [`Token::End`], so `tokenize("")` is `[End]`.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(input.len() + 1);
    let mut lexer = RawToken::lexer(input);

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        match result {
            Ok(raw) => tokens.push(raw.into_token(slice)),
            // Unrecognised input is kept verbatim as literal characters
            Err(()) => tokens.extend(slice.chars().map(Token::Char)),
        }
    }

    tokens.push(Token::End);
    log::trace!("tokenized {} bytes into {} tokens", input.len(), tokens.len());
    tokens
}
