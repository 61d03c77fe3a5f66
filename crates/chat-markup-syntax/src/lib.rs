//! # chat-markup-syntax
//!
//! An inline markup engine for chat messages: a [Logos]-based tokenizer and a
//! recursive-descent parser that turn a raw message into a tree of styled
//! inline nodes, plus a normalization pass that merges adjacent text.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## Architecture Overview
//!
//! ```text
//! Message → Lexer → Tokens → Parser → Nodes → Normalizer → Canonical Nodes
//!           (Logos)          (matchers)        (merge text)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Every character becomes one token: structural markers (`* _ ~ `` ` `` [ ] ( )`)
//! get their own variant, everything else is a literal character. A backslash
//! escapes the next character. The stream ends with a single sentinel.
//!
//! ### 2. Parser ([`parser`] module)
//!
//! Small matchers are tried in priority order at each position (bold, italic,
//! strikethrough, code, link). When none applies, the token is kept as
//! literal text, so any non-empty message parses.
//!
//! ### 3. Normalizer ([`normalize`] module)
//!
//! Adjacent `Text` leaves are merged, recursively.
//!
//! ## Supported Syntax
//!
//! | Markup | Node |
//! |--------|------|
//! | `**bold**`, `__bold__` | [`AstNode::Bold`] |
//! | `*italic*`, `_italic_` | [`AstNode::Italic`] |
//! | `~strike~` | [`AstNode::Strikethrough`] |
//! | `` `code` `` | [`AstNode::Code`] |
//! | `[text](url)` | [`AstNode::Link`] |
//!
//! Styles do not nest. Delimiters only count when a non-whitespace character
//! sits on their inner side (`* a*` and `*a *` stay literal).
//!
//! ## Quick Start
//!
//! ```
//! use chat_markup_syntax::{parse_message, AstNode, TextRuns};
//!
//! let nodes = parse_message("see **this**", TextRuns::PerChar).unwrap();
//! assert_eq!(
//!     nodes,
//!     vec![
//!         AstNode::text("see "),
//!         AstNode::Bold(vec![AstNode::text("this")]),
//!     ]
//! );
//! ```
//!
//! Callers that must always show something use [`render_message`], which
//! falls back to the raw message as plain text.
//!
//! ## Module Structure
//!
//! ```text
//! chat-markup-syntax/
//! ├── lib.rs          # This file - public API and end-to-end tests
//! ├── lexer.rs        # Logos-based tokenizer and Token
//! ├── ast.rs          # AstNode, Delimiter
//! ├── parser/
//! │   ├── mod.rs      # Parser view, TextRuns, parse()
//! │   ├── result.rs   # Match / MatchResult
//! │   └── grammar/
//! │       ├── mod.rs  # Driver, segment dispatch, literal fallback
//! │       └── inline.rs # Bold, italic, strikethrough, code, link
//! ├── normalize.rs    # Text merging
//! ├── display.rs      # Debug labels
//! ├── message.rs      # parse_message / render_message
//! └── error.rs        # ParseError
//! ```

pub mod ast;
pub mod display;
pub mod error;
pub mod lexer;
pub mod message;
pub mod normalize;
pub mod parser;

pub use ast::{AstNode, Delimiter, text_content};
pub use display::{describe_nodes, describe_tokens};
pub use error::{ParseError, Result};
pub use lexer::{Token, tokenize};
pub use message::{MessageOptions, parse_message, render_message};
pub use normalize::normalize;
pub use parser::{TextRuns, parse, parse_with};
