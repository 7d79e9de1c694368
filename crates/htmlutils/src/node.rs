// ABOUTME: Node abstraction consumed by the query helpers.
// ABOUTME: Defines HtmlNode, NodeKind, Attr and the adapter for scraper's document tree.

use ego_tree::NodeRef;
use serde::Serialize;

/// Broad category of a node in a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Document,
    Element,
    Text,
    Comment,
    /// Doctypes, processing instructions and anything else a parser emits.
    Other,
}

/// A borrowed `(namespace, key, value)` attribute triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attr<'a> {
    pub namespace: &'a str,
    pub key: &'a str,
    pub value: &'a str,
}

/// Read-only view of a node in a tree encoded as first-child / next-sibling links.
///
/// Implementors are cheap `Copy` handles borrowed from a tree owned elsewhere
/// (for example `ego_tree::NodeRef`). The query helpers never mutate the tree
/// and never hold a handle past the call that received it, except for the
/// handles they return.
///
/// The tree must be finite and acyclic. Handles that form a cycle through
/// `first_child`/`next_sibling` make every traversal loop forever.
pub trait HtmlNode: Copy {
    fn kind(&self) -> NodeKind;

    /// Local tag name for element nodes, `None` for every other kind.
    fn tag(&self) -> Option<&str>;

    /// Character data for text nodes, `None` for every other kind.
    fn text(&self) -> Option<&str>;

    /// Attributes in the order the tree stores them, which is the parser's
    /// choice (scraper keeps them sorted). Empty for non-element nodes.
    fn attrs(&self) -> impl Iterator<Item = Attr<'_>>;

    fn first_child(&self) -> Option<Self>;

    fn next_sibling(&self) -> Option<Self>;
}

/// scraper trees.
///
/// Attribute namespaces are reported by their conventional prefix (`xlink`,
/// `xml`, `xmlns`), so `xlink:href` is `("xlink", "href")` and a plain `href`
/// is `("", "href")`.
impl<'a> HtmlNode for NodeRef<'a, scraper::Node> {
    fn kind(&self) -> NodeKind {
        match self.value() {
            scraper::Node::Document | scraper::Node::Fragment => NodeKind::Document,
            scraper::Node::Element(_) => NodeKind::Element,
            scraper::Node::Text(_) => NodeKind::Text,
            scraper::Node::Comment(_) => NodeKind::Comment,
            _ => NodeKind::Other,
        }
    }

    fn tag(&self) -> Option<&str> {
        self.value().as_element().map(|el| el.name())
    }

    fn text(&self) -> Option<&str> {
        self.value().as_text().map(|text| &**text)
    }

    fn attrs(&self) -> impl Iterator<Item = Attr<'_>> {
        self.value()
            .as_element()
            .into_iter()
            .flat_map(|el| el.attrs.iter())
            .map(|(name, value)| Attr {
                namespace: namespace_prefix(&name.ns),
                key: &name.local,
                value: &**value,
            })
    }

    fn first_child(&self) -> Option<Self> {
        NodeRef::first_child(self)
    }

    fn next_sibling(&self) -> Option<Self> {
        NodeRef::next_sibling(self)
    }
}

/// Short name for an attribute namespace URL. Unknown namespaces are
/// returned as the URL itself.
fn namespace_prefix(ns: &str) -> &str {
    match ns {
        "http://www.w3.org/1999/xlink" => "xlink",
        "http://www.w3.org/XML/1998/namespace" => "xml",
        "http://www.w3.org/2000/xmlns/" => "xmlns",
        other => other,
    }
}
