// ABOUTME: Textual tag queries such as `div`, `a[href=https://x]` or `use[xlink|href=#i]`.
// ABOUTME: Parses into TagQuery and turns it into a match_tag or match_tag_attr predicate.

//! Tag queries.
//!
//! A deliberately small syntax that maps one-to-one onto the two predicate
//! builders:
//!
//! - `tag` builds [`match_tag`].
//! - `tag[key=value]` builds [`match_tag_attr`] with an empty namespace.
//! - `tag[ns|key=value]` builds [`match_tag_attr`] with namespace `ns`.
//!
//! The value may be wrapped in single or double quotes, which are stripped.
//! Everything is compared exactly; there is no case folding.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::QueryError;
use crate::matcher::{match_tag, match_tag_attr, MatchFn};
use crate::node::HtmlNode;

/// Single attribute constraint of a [`TagQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrFilter {
    pub namespace: String,
    pub key: String,
    pub value: String,
}

/// A parsed tag query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagQuery {
    pub tag: String,
    pub attr: Option<AttrFilter>,
}

impl TagQuery {
    /// Query that matches on tag alone.
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attr: None,
        }
    }

    /// Builds the predicate this query describes.
    pub fn matcher<'a, N: HtmlNode + 'a>(&self) -> MatchFn<'a, N> {
        match &self.attr {
            None => Box::new(match_tag(self.tag.clone())),
            Some(filter) => Box::new(match_tag_attr(
                self.tag.clone(),
                filter.namespace.clone(),
                filter.key.clone(),
                filter.value.clone(),
            )),
        }
    }
}

impl FromStr for TagQuery {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(QueryError::Empty);
        }

        let (tag, filter) = match input.split_once('[') {
            Some((tag, rest)) => (tag.trim(), Some(rest)),
            None => (input, None),
        };
        if tag.is_empty() {
            return Err(QueryError::MissingTag(input.to_string()));
        }
        if tag
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ']' | '=' | '|' | '"' | '\''))
        {
            return Err(QueryError::InvalidTag(tag.to_string()));
        }

        let attr = match filter {
            None => None,
            Some(rest) => Some(parse_filter(input, rest)?),
        };

        let query = TagQuery {
            tag: tag.to_string(),
            attr,
        };
        debug!(query = %query, "parsed tag query");
        Ok(query)
    }
}

fn parse_filter(input: &str, rest: &str) -> Result<AttrFilter, QueryError> {
    let body = rest
        .strip_suffix(']')
        .ok_or_else(|| QueryError::Unterminated(input.to_string()))?;
    let (name, value) = body
        .split_once('=')
        .ok_or_else(|| QueryError::MissingValue(input.to_string()))?;
    let (namespace, key) = match name.split_once('|') {
        Some((namespace, key)) => (namespace.trim(), key.trim()),
        None => ("", name.trim()),
    };
    if key.is_empty() {
        return Err(QueryError::EmptyKey(input.to_string()));
    }

    Ok(AttrFilter {
        namespace: namespace.to_string(),
        key: key.to_string(),
        value: unquote(value.trim()).to_string(),
    })
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

impl fmt::Display for TagQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)?;
        if let Some(filter) = &self.attr {
            write!(f, "[")?;
            if !filter.namespace.is_empty() {
                write!(f, "{}|", filter.namespace)?;
            }
            write!(f, "{}=\"{}\"]", filter.key, filter.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::find_all;
    use crate::tree::NodeData;
    use ego_tree::tree;
    use pretty_assertions::assert_eq;

    fn filter(namespace: &str, key: &str, value: &str) -> Option<AttrFilter> {
        Some(AttrFilter {
            namespace: namespace.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    #[test]
    fn test_parse_tag_only() {
        assert_eq!("div".parse::<TagQuery>(), Ok(TagQuery::tag("div")));
        assert_eq!("  span ".parse::<TagQuery>(), Ok(TagQuery::tag("span")));
    }

    #[test]
    fn test_parse_attr_filter() {
        let query: TagQuery = "a[href=https://x]".parse().unwrap();
        assert_eq!(query.tag, "a");
        assert_eq!(query.attr, filter("", "href", "https://x"));
    }

    #[test]
    fn test_parse_namespaced_and_quoted() {
        let query: TagQuery = r##"use[xlink|href="#icon"]"##.parse().unwrap();
        assert_eq!(query.attr, filter("xlink", "href", "#icon"));

        let query: TagQuery = "meta[name='a=b']".parse().unwrap();
        assert_eq!(query.attr, filter("", "name", "a=b"));
    }

    #[test]
    fn test_parse_empty_value() {
        let query: TagQuery = "a[href=]".parse().unwrap();
        assert_eq!(query.attr, filter("", "href", ""));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<TagQuery>(), Err(QueryError::Empty));
        assert_eq!(
            "[href=x]".parse::<TagQuery>(),
            Err(QueryError::MissingTag("[href=x]".to_string()))
        );
        assert_eq!(
            "a b".parse::<TagQuery>(),
            Err(QueryError::InvalidTag("a b".to_string()))
        );
        assert_eq!(
            "a[href=x".parse::<TagQuery>(),
            Err(QueryError::Unterminated("a[href=x".to_string()))
        );
        assert_eq!(
            "a[href]".parse::<TagQuery>(),
            Err(QueryError::MissingValue("a[href]".to_string()))
        );
        assert_eq!(
            "a[ns|=x]".parse::<TagQuery>(),
            Err(QueryError::EmptyKey("a[ns|=x]".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["div", r#"a[href="https://x"]"#, r##"use[xlink|href="#i"]"##] {
            let query: TagQuery = text.parse().unwrap();
            assert_eq!(query.to_string(), text);
        }
    }

    #[test]
    fn test_matcher_follows_query() {
        let doc = tree!(NodeData::Document => {
            NodeData::element("a").with_attr("href", "https://x"),
            NodeData::element("a").with_attr("href", "https://y"),
            NodeData::element("use").with_ns_attr("xlink", "href", "#i"),
        });
        let root = doc.root();

        let count = |q: &str| {
            let query: TagQuery = q.parse().unwrap();
            find_all(root, query.matcher()).len()
        };
        assert_eq!(count("a"), 2);
        assert_eq!(count("a[href=https://y]"), 1);
        assert_eq!(count("use[xlink|href=#i]"), 1);
        assert_eq!(count("use[href=#i]"), 0);
    }
}
