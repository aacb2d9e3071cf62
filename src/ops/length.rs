use crate::{
    modifier::{apply_to, filter},
    sequence::Sequence,
};

/// Keeps token lists whose length lies within bounds.
///
/// ```rust
/// use restream::prelude::*;
///
/// let seq = list(vec![vec!["a"], vec!["a", "b", "c"], vec![]])
///     .apply_bounds(TokenCount::at_least(1).at_most(2));
/// assert_eq!(seq.values(), vec![vec!["a"]]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCount {
    min: usize,
    max: Option<usize>,
}

impl Default for TokenCount {
    fn default() -> Self {
        Self { min: 1, max: None }
    }
}

impl TokenCount {
    pub fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub fn at_most(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn contains(&self, len: usize) -> bool {
        len >= self.min && self.max.map_or(true, |max| len <= max)
    }

    pub fn apply<S: 'static>(self, sequence: Sequence<Vec<S>>) -> Sequence<Vec<S>> {
        apply_to(
            filter(move |tokens: &Vec<S>| self.contains(tokens.len())),
            sequence,
        )
    }
}

impl<S: 'static> Sequence<Vec<S>> {
    /// Keep items whose token count lies within `bounds`.
    pub fn apply_bounds(self, bounds: TokenCount) -> Sequence<Vec<S>> {
        bounds.apply(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{list, list_tagged};

    #[test]
    fn test_default_drops_empty() {
        let seq = TokenCount::default().apply(list(vec![vec![], vec![1], vec![1, 2]]));
        assert_eq!(seq.values(), vec![vec![1], vec![1, 2]]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = TokenCount::at_least(2).at_most(3);
        assert!(!bounds.contains(1));
        assert!(bounds.contains(2));
        assert!(bounds.contains(3));
        assert!(!bounds.contains(4));
    }

    #[test]
    fn test_keeps_tagging() {
        let seq = TokenCount::at_least(2).apply(list_tagged(vec![vec!['a'], vec!['a', 'b']]));
        assert!(seq.is_tagged());
        assert_eq!(seq.values(), vec![vec!['a', 'b']]);
    }
}
