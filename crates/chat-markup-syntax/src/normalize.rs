//! Canonicalization of parsed trees.
//!
//! The parser emits many small `Text` leaves. [`normalize`] merges every run
//! of adjacent `Text` siblings into one node, recursively, so the canonical
//! tree never has two `Text` nodes next to each other. Only the grouping
//! changes: the concatenated text in document order is preserved, and
//! normalizing twice gives the same result as normalizing once.

use crate::ast::AstNode;

/// Merge adjacent `Text` nodes at every level of the tree.
///
/// Empty `Text` leaves disappear.
pub fn normalize(nodes: Vec<AstNode>) -> Vec<AstNode> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut pending = String::new();

    for node in nodes {
        match node {
            AstNode::Text(text) => pending.push_str(&text),
            other => {
                flush(&mut out, &mut pending);
                out.push(normalize_node(other));
            }
        }
    }

    flush(&mut out, &mut pending);
    out
}

fn flush(out: &mut Vec<AstNode>, pending: &mut String) {
    if !pending.is_empty() {
        out.push(AstNode::Text(std::mem::take(pending)));
    }
}

fn normalize_node(node: AstNode) -> AstNode {
    match node {
        AstNode::Bold(children) => AstNode::Bold(normalize(children)),
        AstNode::Italic(children) => AstNode::Italic(normalize(children)),
        AstNode::Strikethrough(children) => AstNode::Strikethrough(normalize(children)),
        AstNode::Code(children) => AstNode::Code(normalize(children)),
        AstNode::Link { text, url } => AstNode::Link {
            text: normalize(text),
            url: normalize(url),
        },
        text @ AstNode::Text(_) => text,
    }
}
