use crate::ast::AstNode;

/// An accepted match: the nodes produced and the cursor just past them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub nodes: Vec<AstNode>,
    pub end: usize,
}

impl Match {
    pub fn new(nodes: Vec<AstNode>, end: usize) -> Self {
        Self { nodes, end }
    }

    pub fn single(node: AstNode, end: usize) -> Self {
        Self::new(vec![node], end)
    }
}

/// Outcome of a matcher: `Some` when accepted, `None` when rejected.
///
/// Matchers never consume anything on rejection, so ordered alternatives
/// compose with [`Option::or_else`] at the same cursor.
pub type MatchResult = Option<Match>;
