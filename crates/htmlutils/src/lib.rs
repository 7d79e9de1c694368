// ABOUTME: Query helpers for HTML trees that an external parser has already built.
// ABOUTME: Re-exports traversal, attribute lookup, predicate builders and text extraction.

//! htmlutils - small, read-only queries over parsed HTML trees.
//!
//! The crate never parses markup. It walks a tree produced elsewhere (scraper,
//! or a hand-built `ego_tree::Tree<NodeData>`) through the [`HtmlNode`] trait,
//! in pre-order, without recursion.
//!
//! # Example
//!
//! ```
//! use htmlutils::{find_all, find_node, get_attr, get_data, match_tag, match_tag_attr};
//! use scraper::Html;
//!
//! let doc = Html::parse_document(
//!     r#"<p>Hello<b> World</b></p><a href="https://x">x</a><a>y</a>"#,
//! );
//! let root = doc.tree.root();
//!
//! assert_eq!(get_data(find_node(root, match_tag("p")).unwrap()), "Hello World");
//! assert_eq!(find_all(root, match_tag("a")).len(), 2);
//!
//! let link = find_node(root, match_tag_attr("a", "", "href", "https://x")).unwrap();
//! assert_eq!(get_attr(&link, "", "href"), "https://x");
//! ```
//!
//! All functions are total over finite, acyclic trees. Acyclicity is the
//! caller's responsibility; scraper and ego_tree guarantee it by construction.

pub mod attr;
pub mod error;
pub mod matcher;
pub mod node;
pub mod query;
pub mod text;
pub mod traverse;
pub mod tree;

pub use attr::{get_attr, lookup_attr};
pub use error::QueryError;
pub use matcher::{match_tag, match_tag_attr, MatchFn};
pub use node::{Attr, HtmlNode, NodeKind};
pub use query::{AttrFilter, TagQuery};
pub use text::get_data;
pub use traverse::{append_all, descendants, find_all, find_node, Descendants};
pub use tree::{Attribute, NodeData};
