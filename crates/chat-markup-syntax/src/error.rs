/// Reasons a token stream yields no markup tree.
///
/// A rejection is not fatal: callers are expected to show the message as
/// plain text (see [`crate::message::render_message`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Message is empty")]
    EmptyInput,

    #[error("Matching stopped at token {cursor} of {len} without reaching the end of input")]
    Incomplete { cursor: usize, len: usize },
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;
