// ABOUTME: Pre-order depth-first traversal over first-child / next-sibling trees.
// ABOUTME: Provides the Descendants iterator plus append_all, find_all and find_node.

use std::iter::FusedIterator;

use tracing::trace;

use crate::node::HtmlNode;

/// Pre-order iterator over a subtree, `root` included.
///
/// Uses an explicit stack instead of recursion. The stack holds at most one
/// pending sibling per level, so memory is bounded by the tree depth.
/// Siblings of `root` are never visited.
#[derive(Debug, Clone)]
pub struct Descendants<N> {
    stack: Vec<N>,
    entered: bool,
}

/// Walks `root` and everything beneath it, parent before children, children
/// left to right.
pub fn descendants<N: HtmlNode>(root: N) -> Descendants<N> {
    Descendants {
        stack: vec![root],
        entered: false,
    }
}

impl<N: HtmlNode> Iterator for Descendants<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.stack.pop()?;

        // The root's siblings lie outside the subtree.
        if self.entered {
            if let Some(sibling) = node.next_sibling() {
                self.stack.push(sibling);
            }
        } else {
            self.entered = true;
        }

        if let Some(child) = node.first_child() {
            self.stack.push(child);
        }

        Some(node)
    }
}

impl<N: HtmlNode> FusedIterator for Descendants<N> {}

/// Appends every node under `root` (inclusive) accepted by `matches` to `dst`,
/// in pre-order, and returns the extended vector.
///
/// Matching nodes do not stop the descent: a match's descendants are searched
/// too. Passing a non-empty `dst` accumulates across several calls.
pub fn append_all<N, F>(mut dst: Vec<N>, root: N, matches: F) -> Vec<N>
where
    N: HtmlNode,
    F: Fn(&N) -> bool,
{
    let before = dst.len();
    let mut visited = 0usize;
    dst.extend(descendants(root).filter(|node| {
        visited += 1;
        matches(node)
    }));
    trace!(visited, matched = dst.len() - before, "append_all");
    dst
}

/// Collects every matching node under `root` into a fresh vector.
pub fn find_all<N, F>(root: N, matches: F) -> Vec<N>
where
    N: HtmlNode,
    F: Fn(&N) -> bool,
{
    append_all(Vec::new(), root, matches)
}

/// Returns the first node, in the same pre-order as [`append_all`], that
/// `matches` accepts.
///
/// For any tree and predicate this equals the first element of
/// `append_all(Vec::new(), root, matches)`.
pub fn find_node<N, F>(root: N, matches: F) -> Option<N>
where
    N: HtmlNode,
    F: Fn(&N) -> bool,
{
    let found = descendants(root).find(|node| matches(node));
    trace!(found = found.is_some(), "find_node");
    found
}
