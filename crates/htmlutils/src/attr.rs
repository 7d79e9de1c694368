// ABOUTME: Attribute lookup by exact namespace and key.
// ABOUTME: get_attr folds absence into "", lookup_attr keeps it as None.

use crate::node::HtmlNode;

/// Value of the first attribute whose namespace and key both equal the given
/// strings (case-sensitive), or `""` when there is none.
///
/// An absent attribute and an attribute with an empty value look the same
/// here. Use [`lookup_attr`] when the difference matters.
pub fn get_attr<'n, N: HtmlNode>(node: &'n N, namespace: &str, key: &str) -> &'n str {
    lookup_attr(node, namespace, key).unwrap_or("")
}

/// Like [`get_attr`] but returns `None` when no attribute matches.
pub fn lookup_attr<'n, N: HtmlNode>(node: &'n N, namespace: &str, key: &str) -> Option<&'n str> {
    node.attrs()
        .find(|attr| attr.namespace == namespace && attr.key == key)
        .map(|attr| attr.value)
}
