// ABOUTME: Predicate builders for tree searches.
// ABOUTME: match_tag matches by tag name, match_tag_attr adds one attribute value check.

use crate::attr::get_attr;
use crate::node::HtmlNode;

/// Boxed predicate, for when the matcher is chosen at runtime.
pub type MatchFn<'a, N> = Box<dyn Fn(&N) -> bool + Send + Sync + 'a>;

/// Matches nodes whose tag equals `tag`. Nodes without a tag (text, comments,
/// the document itself) never match.
pub fn match_tag<N: HtmlNode>(
    tag: impl Into<String>,
) -> impl Fn(&N) -> bool + Clone + Send + Sync {
    let tag = tag.into();
    move |node: &N| node.tag() == Some(tag.as_str())
}

/// Matches nodes whose tag equals `tag` and whose `(namespace, key)`
/// attribute, as read by [`get_attr`], equals `value`.
///
/// With an empty `value`, elements that lack the attribute match as well.
pub fn match_tag_attr<N: HtmlNode>(
    tag: impl Into<String>,
    namespace: impl Into<String>,
    key: impl Into<String>,
    value: impl Into<String>,
) -> impl Fn(&N) -> bool + Clone + Send + Sync {
    let tag = tag.into();
    let namespace = namespace.into();
    let key = key.into();
    let value = value.into();
    move |node: &N| node.tag() == Some(tag.as_str()) && get_attr(node, &namespace, &key) == value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::find_all;
    use crate::tree::NodeData;
    use ego_tree::{tree, NodeRef, Tree};
    use pretty_assertions::assert_eq;

    fn links() -> Tree<NodeData> {
        tree!(NodeData::Document => {
            NodeData::element("a").with_attr("href", "https://x"),
            NodeData::element("a"),
            NodeData::element("a").with_attr("href", "https://x/"),
            NodeData::element("link").with_attr("href", "https://x"),
            NodeData::element("a").with_attr("href", ""),
        })
    }

    fn hrefs<N: HtmlNode>(nodes: &[N]) -> Vec<Option<String>> {
        nodes
            .iter()
            .map(|n| crate::attr::lookup_attr(n, "", "href").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_match_tag_ignores_non_elements() {
        let doc = tree!(NodeData::Document => {
            NodeData::text("div"),
            NodeData::comment("div"),
            NodeData::element("div"),
        });
        assert_eq!(find_all(doc.root(), match_tag("div")).len(), 1);
    }

    #[test]
    fn test_match_tag_is_case_sensitive() {
        let doc = Tree::new(NodeData::element("DIV"));
        assert!(find_all(doc.root(), match_tag("div")).is_empty());
    }

    #[test]
    fn test_match_tag_attr_exact_value() {
        let doc = links();
        let found = find_all(doc.root(), match_tag_attr("a", "", "href", "https://x"));
        assert_eq!(hrefs(&found), vec![Some("https://x".to_string())]);
    }

    #[test]
    fn test_match_tag_attr_empty_value_matches_missing() {
        let doc = links();
        let found = find_all(doc.root(), match_tag_attr("a", "", "href", ""));
        assert_eq!(hrefs(&found), vec![None, Some(String::new())]);
    }

    #[test]
    fn test_boxed_matchers() {
        let doc = links();
        let matchers: [MatchFn<'_, NodeRef<'_, NodeData>>; 2] = [
            Box::new(match_tag("link")),
            Box::new(match_tag_attr("a", "", "href", "https://x/")),
        ];
        let counts: Vec<usize> = matchers
            .iter()
            .map(|m| find_all(doc.root(), m).len())
            .collect();
        assert_eq!(counts, vec![1, 1]);
    }
}
