//! Provenance tags.
//!
//! A [`TagPath`] records where an item came from: a generator starts it
//! (`[namespace, key]` or `[index]`) and splitting or merging stages append to
//! it. Paths render as JSON arrays so a persisted line can be read back with
//! its provenance intact.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One provenance identifier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum TagSegment {
    Index(usize),
    Key(String),
}

impl fmt::Display for TagSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagSegment::Index(i) => write!(f, "{i}"),
            TagSegment::Key(k) => f.write_str(k),
        }
    }
}

impl From<usize> for TagSegment {
    fn from(value: usize) -> Self {
        TagSegment::Index(value)
    }
}

impl From<&str> for TagSegment {
    fn from(value: &str) -> Self {
        TagSegment::Key(value.to_string())
    }
}

impl From<String> for TagSegment {
    fn from(value: String) -> Self {
        TagSegment::Key(value)
    }
}

/// Ordered provenance trail of an item.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TagPath(Vec<TagSegment>);

impl TagPath {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Path with a single positional segment.
    pub fn index(index: usize) -> Self {
        Self(vec![TagSegment::Index(index)])
    }

    /// Path identifying a stored object.
    pub fn source(namespace: &str, key: &str) -> Self {
        Self(vec![namespace.into(), key.into()])
    }

    pub fn push(&mut self, segment: impl Into<TagSegment>) {
        self.0.push(segment.into());
    }

    /// Returns the path extended by one segment.
    pub fn with(mut self, segment: impl Into<TagSegment>) -> Self {
        self.push(segment);
        self
    }

    pub fn segments(&self) -> &[TagSegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Segments joined by `;`, the key used for per-tag counting.
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Parses the JSON rendering produced by `Display`.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text.trim()).map_err(|source| Error::MalformedTag {
            text: text.to_string(),
            source,
        })
    }
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl<S: Into<TagSegment>> FromIterator<S> for TagPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A value flowing through a sequence, with its tag when the sequence is tagged.
///
/// The owning [`Sequence`](crate::Sequence) guarantees that `tag` is `Some` for
/// every item of a tagged sequence and `None` for every item of an untagged one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item<T> {
    pub value: T,
    pub tag: Option<TagPath>,
}

impl<T> Item<T> {
    pub fn new(value: T) -> Self {
        Self { value, tag: None }
    }

    pub fn tagged(value: T, tag: TagPath) -> Self {
        Self {
            value,
            tag: Some(tag),
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Replaces the value, keeping the tag.
    pub fn with_value<U>(self, value: U) -> Item<U> {
        Item {
            value,
            tag: self.tag,
        }
    }

    pub fn map<U, F>(self, f: F) -> Item<U>
    where
        F: FnOnce(T) -> U,
    {
        Item {
            value: f(self.value),
            tag: self.tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_and_parse() {
        let tag = TagPath::source("news", "a.txt").with(3usize);
        let rendered = tag.to_string();
        assert_eq!(rendered, r#"["news","a.txt",3]"#);
        assert_eq!(TagPath::parse(&rendered).unwrap(), tag);
    }

    #[test]
    fn test_joined() {
        let tag: TagPath = [TagSegment::from("x"), TagSegment::from(2usize)]
            .into_iter()
            .collect();
        assert_eq!(tag.joined(), "x;2");
        assert_eq!(TagPath::new().joined(), "");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = TagPath::parse("[news").unwrap_err();
        assert!(matches!(err, Error::MalformedTag { .. }));
    }

    #[test]
    fn test_item_map_keeps_tag() {
        let item = Item::tagged(2, TagPath::index(0));
        let mapped = item.map(|v| v * 10);
        assert_eq!(mapped.value, 20);
        assert_eq!(mapped.tag, Some(TagPath::index(0)));
    }
}
