//! Consumers: where sequences end.
//!
//! A [`Consumer`] restarts a sequence and pulls it until `End`, doing
//! something with every item on the way.

use crate::{error::Result, pull::Pull, sequence::Sequence, source::PullSource, tag::Item};

mod collect;
mod count;
mod write;

pub use collect::Collect;
pub use count::CountTokens;
pub use write::{Render, WriteLines};

/// Drains a whole pass of a sequence.
pub trait Consumer<T> {
    type Summary;

    /// Restart `sequence` and consume every item of the pass.
    fn drain(&mut self, sequence: &Sequence<T>) -> Result<Self::Summary>;
}

/// Drive one fresh pass of `sequence`, handing each item to `handle`.
///
/// Stops at the first error. Returns the number of items handled.
pub fn drain_with<T, F>(sequence: &Sequence<T>, mut handle: F) -> Result<usize>
where
    T: 'static,
    F: FnMut(Item<T>) -> Result<()>,
{
    let mut source = sequence.restart();
    let mut count = 0;
    loop {
        match source.pull() {
            Pull::Item(item) => {
                handle(item)?;
                count += 1;
            }
            Pull::End => return Ok(count),
        }
    }
}
