// ABOUTME: Owned node payload for trees assembled by hand with ego_tree.
// ABOUTME: Keeps attribute namespaces and duplicates exactly as the builder supplied them.

use ego_tree::NodeRef;

use crate::node::{Attr, HtmlNode, NodeKind};

/// An owned `(namespace, key, value)` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub namespace: String,
    pub key: String,
    pub value: String,
}

impl Attribute {
    /// Attribute without a namespace.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::namespaced("", key, value)
    }

    pub fn namespaced(
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Node payload for an `ego_tree::Tree<NodeData>`.
///
/// Useful when the tree comes from somewhere other than scraper, or when a
/// test needs shapes an HTML parser would normalise away (duplicate
/// attributes, text directly under the document, and so on).
///
/// ```
/// use ego_tree::tree;
/// use htmlutils::{find_all, match_tag, NodeData};
///
/// let doc = tree!(NodeData::Document => {
///     NodeData::element("div").with_attr("id", "a"),
///     NodeData::element("div").with_attr("id", "b"),
/// });
/// assert_eq!(find_all(doc.root(), match_tag("div")).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Document,
    Element { tag: String, attrs: Vec<Attribute> },
    Text(String),
    Comment(String),
    Doctype(String),
}

impl NodeData {
    pub fn element(tag: impl Into<String>) -> Self {
        NodeData::Element {
            tag: tag.into(),
            attrs: Vec::new(),
        }
    }

    pub fn text(data: impl Into<String>) -> Self {
        NodeData::Text(data.into())
    }

    pub fn comment(data: impl Into<String>) -> Self {
        NodeData::Comment(data.into())
    }

    /// Appends an un-namespaced attribute. No-op on non-element payloads.
    pub fn with_attr(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_ns_attr("", key, value)
    }

    /// Appends a namespaced attribute. No-op on non-element payloads.
    pub fn with_ns_attr(
        mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        if let NodeData::Element { attrs, .. } = &mut self {
            attrs.push(Attribute::namespaced(namespace, key, value));
        }
        self
    }
}

impl<'a> HtmlNode for NodeRef<'a, NodeData> {
    fn kind(&self) -> NodeKind {
        match self.value() {
            NodeData::Document => NodeKind::Document,
            NodeData::Element { .. } => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
            NodeData::Comment(_) => NodeKind::Comment,
            NodeData::Doctype(_) => NodeKind::Other,
        }
    }

    fn tag(&self) -> Option<&str> {
        match self.value() {
            NodeData::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    fn text(&self) -> Option<&str> {
        match self.value() {
            NodeData::Text(data) => Some(data.as_str()),
            _ => None,
        }
    }

    fn attrs(&self) -> impl Iterator<Item = Attr<'_>> {
        let attrs: &[Attribute] = match self.value() {
            NodeData::Element { attrs, .. } => attrs.as_slice(),
            _ => &[],
        };
        attrs.iter().map(|attr| Attr {
            namespace: &attr.namespace,
            key: &attr.key,
            value: &attr.value,
        })
    }

    fn first_child(&self) -> Option<Self> {
        NodeRef::first_child(self)
    }

    fn next_sibling(&self) -> Option<Self> {
        NodeRef::next_sibling(self)
    }
}
