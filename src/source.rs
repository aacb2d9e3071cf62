//! Core trait for active cursors.
//!
//! A [`PullSource`] is what a [`Sequence`](crate::Sequence) hands out on every
//! restart: a single pass over the items, advanced one `pull()` at a time.
//! Once a source returns [`Pull::End`] it keeps returning `End`.
//!
//! # Examples
//!
//! ```rust
//! use restream::prelude::*;
//!
//! let mut source = from_iter(vec![1, 2]);
//! assert_eq!(source.pull(), Pull::Item(1));
//! assert_eq!(source.pull(), Pull::Item(2));
//! assert_eq!(source.pull(), Pull::End);
//! ```

use std::marker::PhantomData;

use crate::{iter::SourceIter, pull::Pull};

/// A cursor over one pass of a sequence.
pub trait PullSource<T> {
    /// Produce the next item, or `End` when the pass is over.
    fn pull(&mut self) -> Pull<T>;

    fn boxed(self) -> BoxSource<T>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Transform every pulled item.
    fn map_items<U, F>(self, f: F) -> MapItems<Self, F, T>
    where
        Self: Sized,
        F: FnMut(T) -> U,
    {
        MapItems {
            source: self,
            f,
            _input: PhantomData,
        }
    }

    /// Drive the source as a standard iterator.
    fn into_items(self) -> SourceIter<Self, T>
    where
        Self: Sized,
    {
        SourceIter::new(self)
    }
}

pub type BoxSource<T> = Box<dyn PullSource<T>>;

pub struct MapItems<S, F, T> {
    source: S,
    f: F,
    _input: PhantomData<fn(T)>,
}

impl<T, U, S, F> PullSource<U> for MapItems<S, F, T>
where
    S: PullSource<T>,
    F: FnMut(T) -> U,
{
    fn pull(&mut self) -> Pull<U> {
        self.source.pull().map(&mut self.f)
    }
}

/// Adapts a standard iterator into a source.
pub struct IterSource<I>(I);

/// Create a source from anything iterable.
pub fn from_iter<I: IntoIterator>(iter: I) -> IterSource<I::IntoIter> {
    IterSource(iter.into_iter())
}

impl<I: Iterator> PullSource<I::Item> for IterSource<I> {
    fn pull(&mut self) -> Pull<I::Item> {
        self.0.next().into()
    }
}

pub struct FromFn<F>(F);

/// Create a source from a closure.
///
/// ```rust
/// use restream::prelude::*;
///
/// let mut n = 0;
/// let mut source = source_fn(move || {
///     n += 1;
///     if n <= 2 { Pull::Item(n) } else { Pull::End }
/// });
/// assert_eq!(source.pull(), Pull::Item(1));
/// assert_eq!(source.pull(), Pull::Item(2));
/// assert!(source.pull().is_end());
/// ```
pub fn source_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Pull<T>,
{
    FromFn(f)
}

impl<T, F> PullSource<T> for FromFn<F>
where
    F: FnMut() -> Pull<T>,
{
    fn pull(&mut self) -> Pull<T> {
        (self.0)()
    }
}

impl<T, S> PullSource<T> for Option<S>
where
    S: PullSource<T>,
{
    fn pull(&mut self) -> Pull<T> {
        match self {
            Some(s) => s.pull(),
            None => Pull::End,
        }
    }
}

impl<T, L, R> PullSource<T> for either::Either<L, R>
where
    L: PullSource<T>,
    R: PullSource<T>,
{
    fn pull(&mut self) -> Pull<T> {
        match self {
            either::Either::Left(l) => l.pull(),
            either::Either::Right(r) => r.pull(),
        }
    }
}

impl<T> PullSource<T> for Box<dyn PullSource<T>> {
    fn pull(&mut self) -> Pull<T> {
        (**self).pull()
    }
}
