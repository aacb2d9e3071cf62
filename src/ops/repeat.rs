use either::Either;

use crate::{
    error::{Error, Result},
    pull::Pull,
    sequence::Sequence,
    source::{BoxSource, PullSource},
    tag::Item,
};

/// Replays a sequence by restarting it, never by buffering its items.
///
/// ```rust
/// use restream::prelude::*;
///
/// let seq = list(vec![1, 2, 3]).repeat(Repeat::items(5));
/// assert_eq!(seq.values(), vec![1, 2, 3, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// A fixed number of whole passes.
    Passes(usize),
    /// Exactly this many items; the last pass may be cut short.
    Items(usize),
}

impl Repeat {
    pub fn times(total_repeats: usize) -> Self {
        Repeat::Passes(total_repeats)
    }

    pub fn items(total_items: usize) -> Self {
        Repeat::Items(total_items)
    }

    /// Build from optional settings; `total_items` wins when both are given.
    pub fn new(total_repeats: Option<usize>, total_items: Option<usize>) -> Result<Self> {
        match (total_repeats, total_items) {
            (_, Some(items)) => Ok(Repeat::Items(items)),
            (Some(passes), None) => Ok(Repeat::Passes(passes)),
            (None, None) => Err(Error::RepeatModeMissing),
        }
    }

    pub fn apply<T: 'static>(self, sequence: Sequence<T>) -> Sequence<T> {
        let tagged = sequence.is_tagged();
        Sequence::from_factory(tagged, move || {
            let replay = Replay::new(sequence.clone());
            match self {
                Repeat::Passes(total) => Either::Left(PassesSource { replay, total }),
                Repeat::Items(total) => Either::Right(ItemsSource {
                    replay,
                    total,
                    emitted: 0,
                }),
            }
        })
    }
}

/// Restart bookkeeping shared by both modes.
struct Replay<T> {
    sequence: Sequence<T>,
    current: Option<BoxSource<Item<T>>>,
    passes: usize,
    in_pass: usize,
}

impl<T: 'static> Replay<T> {
    fn new(sequence: Sequence<T>) -> Self {
        Self {
            sequence,
            current: None,
            passes: 0,
            in_pass: 0,
        }
    }

    /// Pull from the current pass, starting one if needed. `End` marks the
    /// end of a single pass, not of the replay.
    fn pull(&mut self) -> Pull<Item<T>> {
        let sequence = &self.sequence;
        let source = self.current.get_or_insert_with(|| sequence.restart());
        match source.pull() {
            Pull::Item(item) => {
                self.in_pass += 1;
                Pull::Item(item)
            }
            Pull::End => {
                self.current = None;
                self.passes += 1;
                self.in_pass = 0;
                Pull::End
            }
        }
    }
}

struct PassesSource<T> {
    replay: Replay<T>,
    total: usize,
}

impl<T: 'static> PullSource<Item<T>> for PassesSource<T> {
    fn pull(&mut self) -> Pull<Item<T>> {
        while self.replay.passes < self.total {
            if let Pull::Item(item) = self.replay.pull() {
                return Pull::Item(item);
            }
            log::debug!("Repeat - repeats={}", self.replay.passes);
        }
        Pull::End
    }
}

struct ItemsSource<T> {
    replay: Replay<T>,
    total: usize,
    emitted: usize,
}

impl<T: 'static> PullSource<Item<T>> for ItemsSource<T> {
    fn pull(&mut self) -> Pull<Item<T>> {
        loop {
            if self.emitted >= self.total {
                self.replay.current = None;
                return Pull::End;
            }
            let had_items = self.replay.in_pass > 0;
            match self.replay.pull() {
                Pull::Item(item) => {
                    self.emitted += 1;
                    return Pull::Item(item);
                }
                Pull::End if !had_items => {
                    log::warn!(
                        "Repeat - a pass produced no items, stopping at {} of {} items",
                        self.emitted,
                        self.total
                    );
                    self.total = self.emitted;
                }
                Pull::End => {
                    log::debug!(
                        "Repeat - repeats={}, items={}",
                        self.replay.passes,
                        self.emitted
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::{
        generate::{list, list_tagged},
        source::from_iter,
        tag::TagPath,
    };

    fn digits() -> Sequence<i32> {
        list((0..10).collect())
    }

    #[test]
    fn test_exact_item_count_truncates_last_pass() {
        let seq = digits().repeat(Repeat::items(13));
        let mut expected: Vec<i32> = (0..10).collect();
        expected.extend([0, 1, 2]);
        assert_eq!(seq.values(), expected);
    }

    #[test]
    fn test_whole_passes() {
        let seq = list(vec!["a", "b"]).repeat(Repeat::times(3));
        assert_eq!(seq.values(), vec!["a", "b", "a", "b", "a", "b"]);
    }

    #[test]
    fn test_zero_repeats_is_empty() {
        assert!(digits().repeat(Repeat::times(0)).values().is_empty());
        assert!(digits().repeat(Repeat::items(0)).values().is_empty());
    }

    #[test]
    fn test_replays_by_restarting() {
        let restarts = Rc::new(Cell::new(0));
        let counter = Rc::clone(&restarts);
        let seq = Sequence::from_factory(false, move || {
            counter.set(counter.get() + 1);
            from_iter(vec![Item::new(1), Item::new(2)])
        });
        let repeated = seq.repeat(Repeat::items(5));
        assert_eq!(repeated.values(), vec![1, 2, 1, 2, 1]);
        assert_eq!(restarts.get(), 3);
    }

    #[test]
    fn test_empty_input_does_not_spin() {
        let seq = list(Vec::<i32>::new()).repeat(Repeat::items(10));
        assert!(seq.values().is_empty());
    }

    #[test]
    fn test_mode_selection() {
        assert!(matches!(Repeat::new(None, None), Err(Error::RepeatModeMissing)));
        assert_eq!(Repeat::new(Some(2), None).unwrap(), Repeat::Passes(2));
        assert_eq!(Repeat::new(Some(2), Some(7)).unwrap(), Repeat::Items(7));
    }

    #[test]
    fn test_repeat_keeps_tags() {
        let seq = list_tagged(vec!["x"]).repeat(Repeat::times(2));
        assert!(seq.is_tagged());
        let tags: Vec<_> = seq.iter().filter_map(|item| item.tag).collect();
        assert_eq!(tags, vec![TagPath::index(0), TagPath::index(0)]);
    }
}
