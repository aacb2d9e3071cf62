//! Iterator adapters for pull sources and sequences.
//!
//! [`SourceIter`] drives a [`PullSource`] through the standard `Iterator`
//! protocol, so any pass over a [`Sequence`](crate::Sequence) can be used with
//! `for` loops, `collect`, `take` and friends.
//!
//! ```rust
//! use restream::prelude::*;
//!
//! let seq = list(vec![1, 2, 3]);
//! let values: Vec<_> = seq.iter().map(|item| item.value).collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```

use std::marker::PhantomData;

use crate::{Pull, PullSource};

/// Iterator adapter for [`PullSource<T>`].
///
/// Once the source reports `End` the adapter is fused: later calls return
/// `None` without touching the source again.
pub struct SourceIter<S, T> {
    source: Option<S>,
    _item: PhantomData<fn() -> T>,
}

impl<S, T> SourceIter<S, T>
where
    S: PullSource<T>,
{
    pub fn new(source: S) -> Self {
        Self {
            source: Some(source),
            _item: PhantomData,
        }
    }

    /// Check if the source has been exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.source.is_none()
    }
}

impl<S, T> Iterator for SourceIter<S, T>
where
    S: PullSource<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source.as_mut()?;
        match source.pull() {
            Pull::Item(item) => Some(item),
            Pull::End => {
                // dropping the source releases whatever it holds open
                self.source = None;
                None
            }
        }
    }
}

impl<S, T> std::iter::FusedIterator for SourceIter<S, T> where S: PullSource<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{from_iter, source_fn};

    #[test]
    fn test_source_iter_collects() {
        let iter = from_iter([1, 2, 3]).into_items();
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_source_iter_is_fused() {
        let mut calls = 0;
        let mut iter = SourceIter::new(source_fn(move || {
            calls += 1;
            assert!(calls <= 2, "source pulled after End");
            if calls == 1 {
                Pull::Item(calls)
            } else {
                Pull::End
            }
        }));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert!(iter.is_exhausted());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_for_loop_with_mut_ref() {
        let mut iter = from_iter(["a", "b"]).into_items();
        let mut values = Vec::new();
        for value in &mut iter {
            values.push(value);
        }
        assert_eq!(values, vec!["a", "b"]);
        assert!(iter.is_exhausted());
    }
}
