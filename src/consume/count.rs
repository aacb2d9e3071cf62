use std::collections::BTreeMap;

use crate::{error::Result, sequence::Sequence};

use super::{drain_with, Consumer};

/// Counts tokens of token-list items.
///
/// On tagged sequences every `(token, tag)` pair is counted too, with the tag
/// rendered as its segments joined by `;`. Counts accumulate over drains.
///
/// ```rust
/// use restream::prelude::*;
///
/// let mut counter = CountTokens::new();
/// counter.drain(&list(vec![vec!["a", "b"], vec!["a"]])).unwrap();
/// assert_eq!(counter.count("a"), 2);
/// assert_eq!(counter.total(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountTokens {
    tokens: BTreeMap<String, usize>,
    tagged: BTreeMap<(String, String), usize>,
}

impl CountTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, token: &str) -> usize {
        self.tokens.get(token).copied().unwrap_or(0)
    }

    pub fn count_tagged(&self, token: &str, tag: &str) -> usize {
        self.tagged
            .get(&(token.to_string(), tag.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn tokens(&self) -> &BTreeMap<String, usize> {
        &self.tokens
    }

    pub fn tagged_tokens(&self) -> &BTreeMap<(String, String), usize> {
        &self.tagged
    }

    /// Number of tokens counted so far.
    pub fn total(&self) -> usize {
        self.tokens.values().sum()
    }
}

impl<S: AsRef<str> + 'static> Consumer<Vec<S>> for CountTokens {
    /// Tokens counted by this drain.
    type Summary = usize;

    fn drain(&mut self, sequence: &Sequence<Vec<S>>) -> Result<usize> {
        let mut counted = 0;
        let items = drain_with(sequence, |item| {
            let tag = item.tag.map(|tag| tag.joined());
            for token in &item.value {
                let token = token.as_ref();
                *self.tokens.entry(token.to_string()).or_default() += 1;
                if let Some(tag) = &tag {
                    *self
                        .tagged
                        .entry((token.to_string(), tag.clone()))
                        .or_default() += 1;
                }
                counted += 1;
            }
            Ok(())
        })?;
        log::info!("counted {counted} tokens in {items} items");
        Ok(counted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{list, list_tagged};

    #[test]
    fn test_counts_accumulate() {
        let seq = list(vec![vec!["a".to_string(), "b".to_string()]]);
        let mut counter = CountTokens::new();
        assert_eq!(counter.drain(&seq).unwrap(), 2);
        assert_eq!(counter.drain(&seq).unwrap(), 2);
        assert_eq!(counter.count("a"), 2);
        assert_eq!(counter.count("z"), 0);
        assert!(counter.tagged_tokens().is_empty());
    }

    #[test]
    fn test_tagged_counts() {
        let seq = list_tagged(vec![vec!["a", "a"], vec!["a"]]);
        let mut counter = CountTokens::new();
        counter.drain(&seq).unwrap();
        assert_eq!(counter.count("a"), 3);
        assert_eq!(counter.count_tagged("a", "0"), 2);
        assert_eq!(counter.count_tagged("a", "1"), 1);
    }
}
