// ABOUTME: Text extraction over a subtree.
// ABOUTME: Concatenates text node payloads in document order with no separators.

use crate::node::HtmlNode;
use crate::traverse::descendants;

/// Concatenation of every text node under `node` (inclusive), in pre-order.
///
/// Fragments are joined as found: `<p>Hello<b> World</b></p>` gives
/// `"Hello World"` and `<p>a</p><p>b</p>` gives `"ab"`.
pub fn get_data<N: HtmlNode>(node: N) -> String {
    let mut out = String::new();
    for n in descendants(node) {
        if let Some(text) = n.text() {
            out.push_str(text);
        }
    }
    out
}
