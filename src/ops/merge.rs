//! Deterministic weighted round-robin merge.
//!
//! Every input carries a cost that starts at its step (`1 / weight`) and grows
//! by that step each time the input yields. Each request goes to the active
//! input with the lowest cost; ties go to the input declared first. An input
//! with weight `w` is therefore picked with long-run frequency proportional to
//! `w`. An exhausted input drops out for the rest of the pass.

use std::rc::Rc;

use crate::{
    error::{Error, Result},
    pull::Pull,
    sequence::Sequence,
    source::{BoxSource, PullSource},
    tag::Item,
};

/// Merge configuration.
///
/// ```rust
/// use restream::prelude::*;
///
/// let merged = Merge::new()
///     .apply(vec![
///         (list(vec![0, 2, 4, 6, 8]), 2.0),
///         (list(vec![-1, -2]), 1.0),
///     ])
///     .unwrap();
/// assert_eq!(merged.values(), vec![0, 2, -1, 4, 6, -2, 8]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Merge {
    append_index_to_tag: bool,
}

impl Merge {
    pub fn new() -> Self {
        Self::default()
    }

    /// On tagged inputs, append the input's position to each item's tag.
    pub fn append_index_to_tag(mut self, append: bool) -> Self {
        self.append_index_to_tag = append;
        self
    }

    /// Validate the inputs and build the merged sequence.
    ///
    /// Fails with a configuration error when there are fewer than two
    /// inputs, a weight is not a positive number, or the inputs disagree on
    /// tagging.
    pub fn apply<T: 'static>(&self, inputs: Vec<(Sequence<T>, f64)>) -> Result<Sequence<T>> {
        if inputs.len() < 2 {
            return Err(Error::TooFewInputs(inputs.len()));
        }
        if let Some((index, &(_, weight))) = inputs
            .iter()
            .enumerate()
            .find(|(_, (_, w))| !(w.is_finite() && *w > 0.0))
        {
            return Err(Error::InvalidWeight { index, weight });
        }

        let tagged: Vec<bool> = inputs.iter().map(|(s, _)| s.is_tagged()).collect();
        let all_tagged = tagged.iter().all(|&t| t);
        if all_tagged != tagged.iter().any(|&t| t) {
            return Err(Error::TagMismatch { tagged });
        }

        let append = all_tagged && self.append_index_to_tag;
        let (sequences, steps): (Vec<_>, Vec<_>) =
            inputs.into_iter().map(|(s, w)| (s, 1.0 / w)).unzip();
        let sequences: Rc<[Sequence<T>]> = sequences.into();
        let steps: Rc<[f64]> = steps.into();

        Ok(Sequence::from_factory(all_tagged, move || {
            MergeSource::start(&sequences, &steps, append)
        }))
    }
}

/// Merge with default settings.
pub fn merge<T: 'static>(inputs: Vec<(Sequence<T>, f64)>) -> Result<Sequence<T>> {
    Merge::new().apply(inputs)
}

struct Lane<T> {
    source: Option<BoxSource<Item<T>>>,
    cost: f64,
    step: f64,
}

struct MergeSource<T> {
    lanes: Vec<Lane<T>>,
    append: bool,
}

impl<T: 'static> MergeSource<T> {
    fn start(sequences: &[Sequence<T>], steps: &[f64], append: bool) -> Self {
        let lanes = sequences
            .iter()
            .zip(steps)
            .map(|(seq, &step)| Lane {
                source: Some(seq.restart()),
                cost: step,
                step,
            })
            .collect();
        Self { lanes, append }
    }
}

impl<T> MergeSource<T> {
    /// Active lane with the smallest cost; the first declared wins ties.
    fn select(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, lane) in self.lanes.iter().enumerate() {
            if lane.source.is_none() {
                continue;
            }
            match best {
                Some((_, cost)) if lane.cost >= cost => {}
                _ => best = Some((index, lane.cost)),
            }
        }
        best.map(|(index, _)| index)
    }
}

impl<T> PullSource<Item<T>> for MergeSource<T> {
    fn pull(&mut self) -> Pull<Item<T>> {
        loop {
            let Some(index) = self.select() else {
                return Pull::End;
            };
            let lane = &mut self.lanes[index];
            let next = match lane.source.as_mut() {
                Some(source) => source.pull(),
                None => Pull::End,
            };
            match next {
                Pull::Item(mut item) => {
                    lane.cost += lane.step;
                    if self.append {
                        if let Some(tag) = item.tag.as_mut() {
                            tag.push(index);
                        }
                    }
                    return Pull::Item(item);
                }
                Pull::End => {
                    log::debug!("merge input {index} exhausted");
                    lane.source = None;
                }
            }
        }
    }
}
