//! Restartable sequences.
//!
//! A [`Sequence`] owns no cursor. It holds a factory that builds a fresh
//! [`PullSource`] on every [`restart`](Sequence::restart), plus the `tagged`
//! flag fixed when the sequence was composed. Two passes obtained from two
//! restarts are independent of each other.
//!
//! # Examples
//!
//! ```rust
//! use restream::prelude::*;
//!
//! let seq = list(vec!["a", "b"]);
//! assert_eq!(seq.values(), vec!["a", "b"]);
//! // a second pass replays the same items
//! assert_eq!(seq.values(), vec!["a", "b"]);
//! ```

use std::{fmt, rc::Rc};

use crate::{
    error::Result,
    iter::SourceIter,
    modifier::{apply_to, Modifier},
    ops::{self, Merge, Repeat, Subset},
    source::{BoxSource, PullSource},
    tag::Item,
};

type Factory<T> = Rc<dyn Fn() -> BoxSource<Item<T>>>;

/// A producer of items that can be iterated any number of times.
pub struct Sequence<T> {
    factory: Factory<T>,
    tagged: bool,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Rc::clone(&self.factory),
            tagged: self.tagged,
        }
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("tagged", &self.tagged)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Sequence<T> {
    /// Build a sequence from a factory of sources.
    ///
    /// The factory must produce items whose `tag` agrees with `tagged`.
    pub fn from_factory<F, S>(tagged: bool, factory: F) -> Self
    where
        F: Fn() -> S + 'static,
        S: PullSource<Item<T>> + 'static,
    {
        Self {
            factory: Rc::new(move || factory().boxed()),
            tagged,
        }
    }

    /// Start a fresh pass.
    pub fn restart(&self) -> BoxSource<Item<T>> {
        (self.factory)()
    }

    pub fn is_tagged(&self) -> bool {
        self.tagged
    }

    /// Restart and iterate over the items of one pass.
    pub fn iter(&self) -> SourceIter<BoxSource<Item<T>>, Item<T>> {
        SourceIter::new(self.restart())
    }

    /// Collect the values of one pass, dropping tags.
    pub fn values(&self) -> Vec<T> {
        self.iter().map(Item::into_value).collect()
    }

    /// Lift an elementwise modifier over this sequence.
    pub fn apply<M>(self, modifier: M) -> Sequence<M::Output>
    where
        M: Modifier<T> + 'static,
        M::Output: 'static,
    {
        apply_to(modifier, self)
    }

    /// Positional window over this sequence.
    pub fn subset(self, subset: Subset) -> Result<Sequence<T>> {
        subset.apply(self)
    }

    /// Replay this sequence according to `repeat`.
    pub fn repeat(self, repeat: Repeat) -> Sequence<T> {
        repeat.apply(self)
    }

    /// Strip tags. Fails if the sequence is not tagged.
    pub fn untag(self) -> Result<Sequence<T>> {
        ops::untag(self)
    }

    /// Weighted merge of this sequence with others.
    pub fn merge_with(self, weight: f64, others: Vec<(Sequence<T>, f64)>) -> Result<Sequence<T>> {
        let mut inputs = Vec::with_capacity(others.len() + 1);
        inputs.push((self, weight));
        inputs.extend(others);
        Merge::new().apply(inputs)
    }
}
