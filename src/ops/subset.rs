use crate::{
    error::{Error, Result},
    pull::Pull,
    sequence::Sequence,
    source::{BoxSource, PullSource},
    tag::Item,
};

/// Positional window over a sequence.
///
/// Position `n` counts every input item, emitted or not. Item `n` is emitted
/// when `n % stride == 0` and `n >= start`. The pass stops for good once `n`
/// reaches `end` or the number of emitted items reaches `max_count`; no
/// further input is pulled after that.
///
/// ```rust
/// use restream::prelude::*;
///
/// let seq = list((0..10).collect::<Vec<_>>())
///     .subset(Subset::new().start(3).max_count(2))
///     .unwrap();
/// assert_eq!(seq.values(), vec![3, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subset {
    start: usize,
    end: Option<usize>,
    stride: usize,
    max_count: Option<usize>,
}

impl Default for Subset {
    fn default() -> Self {
        Self {
            start: 0,
            end: None,
            stride: 1,
            max_count: None,
        }
    }
}

impl Subset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Exclusive end position.
    pub fn end(mut self, end: usize) -> Self {
        self.end = Some(end);
        self
    }

    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    pub fn max_count(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    pub fn apply<T: 'static>(self, sequence: Sequence<T>) -> Result<Sequence<T>> {
        if self.stride == 0 {
            return Err(Error::ZeroStride);
        }
        let tagged = sequence.is_tagged();
        Ok(Sequence::from_factory(tagged, move || SubsetSource {
            source: Some(sequence.restart()),
            window: self,
            position: 0,
            emitted: 0,
        }))
    }

    fn finished(&self, position: usize, emitted: usize) -> bool {
        self.end.is_some_and(|end| position >= end)
            || self.max_count.is_some_and(|max| emitted >= max)
    }
}

struct SubsetSource<T> {
    source: Option<BoxSource<Item<T>>>,
    window: Subset,
    position: usize,
    emitted: usize,
}

impl<T> PullSource<Item<T>> for SubsetSource<T> {
    fn pull(&mut self) -> Pull<Item<T>> {
        loop {
            if self.window.finished(self.position, self.emitted) {
                self.source = None;
            }
            let Some(source) = self.source.as_mut() else {
                return Pull::End;
            };
            match source.pull() {
                Pull::Item(item) => {
                    let n = self.position;
                    self.position += 1;
                    if n % self.window.stride == 0 && n >= self.window.start {
                        self.emitted += 1;
                        return Pull::Item(item);
                    }
                }
                Pull::End => {
                    self.source = None;
                }
            }
        }
    }
}
