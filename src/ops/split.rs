use std::{collections::VecDeque, rc::Rc, sync::LazyLock};

use regex::Regex;

use crate::{
    error::Result,
    pull::Pull,
    sequence::Sequence,
    source::{BoxSource, PullSource},
    tag::Item,
};

/// At least two newlines, possibly surrounded by other whitespace.
pub const PARAGRAPH_SEPARATOR: &str = r"\s*\n\s*\n\s*";

static PARAGRAPHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PARAGRAPH_SEPARATOR).expect("paragraph separator is a valid regex"));

/// Splits every text into paragraphs.
///
/// Each piece becomes its own item. On tagged sequences the piece's position
/// within its text is appended to the text's tag. Pieces shorter than
/// `min_length` characters are dropped but still counted for positions.
#[derive(Debug, Clone)]
pub struct SplitText {
    separator: Regex,
    min_length: usize,
    trim: bool,
}

impl SplitText {
    pub fn new() -> Self {
        Self {
            separator: PARAGRAPHS.clone(),
            min_length: 0,
            trim: true,
        }
    }

    pub fn with_separator(pattern: &str) -> Result<Self> {
        Ok(Self {
            separator: Regex::new(pattern)?,
            ..Self::new()
        })
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn apply(self, sequence: Sequence<String>) -> Sequence<String> {
        let tagged = sequence.is_tagged();
        let split = Rc::new(self);
        Sequence::from_factory(tagged, move || SplitSource {
            source: sequence.restart(),
            split: Rc::clone(&split),
            pending: VecDeque::new(),
        })
    }

    fn pieces(&self, item: Item<String>) -> impl Iterator<Item = Item<String>> + '_ {
        let Item { value, tag } = item;
        let pieces: Vec<String> = self
            .separator
            .split(value.trim())
            .map(|p| {
                let p = if self.trim { p.trim() } else { p };
                p.to_string()
            })
            .collect();
        pieces
            .into_iter()
            .enumerate()
            .filter(move |(_, p)| p.chars().count() >= self.min_length)
            .map(move |(i, p)| Item {
                value: p,
                tag: tag.clone().map(|t| t.with(i)),
            })
    }
}

impl Default for SplitText {
    fn default() -> Self {
        Self::new()
    }
}

struct SplitSource {
    source: BoxSource<Item<String>>,
    split: Rc<SplitText>,
    pending: VecDeque<Item<String>>,
}

impl PullSource<Item<String>> for SplitSource {
    fn pull(&mut self) -> Pull<Item<String>> {
        loop {
            if let Some(piece) = self.pending.pop_front() {
                return Pull::Item(piece);
            }
            match self.source.pull() {
                Pull::Item(text) => self.pending.extend(self.split.pieces(text)),
                Pull::End => return Pull::End,
            }
        }
    }
}
