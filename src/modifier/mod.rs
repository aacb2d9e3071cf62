//! Elementwise modifiers.
//!
//! A [`Modifier`] maps one value to zero or one value. Returning `None` drops
//! the item from the sequence it is applied to. Modifiers compose like
//! functions: `compose(g, f)` applies `f` first, and `f.then(g)` is the same
//! composition written in application order.
//!
//! ```rust
//! use restream::prelude::*;
//!
//! let add_one = map(|x: i32| x + 1);
//! let evens = filter(|x: &i32| x % 2 == 0);
//! let m = add_one.then(evens);
//! assert_eq!(m.apply(3), Some(4));
//! assert_eq!(m.apply(4), None);
//! ```

use std::rc::Rc;

use crate::{
    pull::Pull,
    sequence::Sequence,
    source::{BoxSource, PullSource},
    tag::Item,
};

mod compose;
mod func;
pub mod text;

pub use compose::{compose, Compose};
pub use func::{filter, from_fn, identity, map, Filter, FromFn, Identity, Map};

/// A per-item transform that may drop the item.
pub trait Modifier<A> {
    type Output;

    /// Transform one value, or drop it by returning `None`.
    fn apply(&self, input: A) -> Option<Self::Output>;

    /// Run `next` on whatever this modifier keeps.
    fn then<M>(self, next: M) -> Compose<M, Self>
    where
        Self: Sized,
        M: Modifier<Self::Output>,
    {
        compose(next, self)
    }

    fn boxed(self) -> BoxModifier<A, Self::Output>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

pub type BoxModifier<A, B> = Box<dyn Modifier<A, Output = B>>;

impl<A, B> Modifier<A> for Box<dyn Modifier<A, Output = B>> {
    type Output = B;

    fn apply(&self, input: A) -> Option<B> {
        (**self).apply(input)
    }
}

impl<A, M> Modifier<A> for Rc<M>
where
    M: Modifier<A> + ?Sized,
{
    type Output = M::Output;

    fn apply(&self, input: A) -> Option<Self::Output> {
        (**self).apply(input)
    }
}

/// Lift a modifier over a sequence.
///
/// Only the value of each item reaches the modifier; the tag of a kept item
/// passes through unchanged and a dropped item disappears with its tag.
pub fn apply_to<T, M>(modifier: M, sequence: Sequence<T>) -> Sequence<M::Output>
where
    T: 'static,
    M: Modifier<T> + 'static,
    M::Output: 'static,
{
    let modifier = Rc::new(modifier);
    let tagged = sequence.is_tagged();
    Sequence::from_factory(tagged, move || Modified {
        source: sequence.restart(),
        modifier: Rc::clone(&modifier),
    })
}

struct Modified<T, M> {
    source: BoxSource<Item<T>>,
    modifier: Rc<M>,
}

impl<T, M> PullSource<Item<M::Output>> for Modified<T, M>
where
    M: Modifier<T>,
{
    fn pull(&mut self) -> Pull<Item<M::Output>> {
        loop {
            match self.source.pull() {
                Pull::Item(Item { value, tag }) => {
                    if let Some(value) = self.modifier.apply(value) {
                        return Pull::Item(Item { value, tag });
                    }
                }
                Pull::End => return Pull::End,
            }
        }
    }
}
