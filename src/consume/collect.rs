use crate::{error::Result, sequence::Sequence, tag::Item};

use super::{drain_with, Consumer};

/// Gathers items in memory, tags included.
#[derive(Debug, Clone)]
pub struct Collect<T> {
    items: Vec<Item<T>>,
}

impl<T> Default for Collect<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Collect<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item<T>> {
        self.items
    }

    pub fn into_values(self) -> Vec<T> {
        self.items.into_iter().map(Item::into_value).collect()
    }
}

impl<T: 'static> Consumer<T> for Collect<T> {
    type Summary = usize;

    fn drain(&mut self, sequence: &Sequence<T>) -> Result<usize> {
        let items = &mut self.items;
        drain_with(sequence, |item| {
            items.push(item);
            Ok(())
        })
    }
}
