//! Human-readable labels for tokens and nodes.
//!
//! Used by tests and the CLI. The format is for people, not for parsing:
//!
//! ```text
//! Char(a)  Char(<space>)  Asterisk  End
//! Bold([Text(foo)])  Link(text=[Text(here)], url=[Text(http://x)])
//! ```

use std::fmt;

use crate::ast::AstNode;
use crate::lexer::Token;

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Char(' ') => f.write_str("Char(<space>)"),
            Token::Char(c) => write!(f, "Char({c})"),
            Token::Asterisk => f.write_str("Asterisk"),
            Token::Underscore => f.write_str("Underscore"),
            Token::Tilde => f.write_str("Tilde"),
            Token::Backtick => f.write_str("Backtick"),
            Token::LeftBracket => f.write_str("LeftBracket"),
            Token::RightBracket => f.write_str("RightBracket"),
            Token::LeftParen => f.write_str("LeftParen"),
            Token::RightParen => f.write_str("RightParen"),
            Token::End => f.write_str("End"),
        }
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Bold(children) => write!(f, "Bold([{}])", Labels(children)),
            AstNode::Italic(children) => write!(f, "Italic([{}])", Labels(children)),
            AstNode::Strikethrough(children) => {
                write!(f, "Strikethrough([{}])", Labels(children))
            }
            AstNode::Code(children) => write!(f, "Code([{}])", Labels(children)),
            AstNode::Link { text, url } => {
                write!(f, "Link(text=[{}], url=[{}])", Labels(text), Labels(url))
            }
            AstNode::Text(s) if s == " " => f.write_str("Text(<space>)"),
            AstNode::Text(s) => write!(f, "Text({s})"),
        }
    }
}

/// Comma-separated labels of a slice.
struct Labels<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for Labels<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

pub fn describe_tokens(tokens: &[Token]) -> String {
    Labels(tokens).to_string()
}

pub fn describe_nodes(nodes: &[AstNode]) -> String {
    Labels(nodes).to_string()
}
