use std::rc::Rc;

use crate::{
    pull::Pull,
    sequence::Sequence,
    source::PullSource,
    tag::{Item, TagPath},
};

/// An untagged sequence over a fixed list.
///
/// ```rust
/// use restream::prelude::*;
///
/// assert_eq!(list(vec![3, 1, 2]).values(), vec![3, 1, 2]);
/// ```
pub fn list<T: Clone + 'static>(items: Vec<T>) -> Sequence<T> {
    from_list(items, false)
}

/// A tagged sequence over a fixed list. Each item is tagged with its index.
pub fn list_tagged<T: Clone + 'static>(items: Vec<T>) -> Sequence<T> {
    from_list(items, true)
}

fn from_list<T: Clone + 'static>(items: Vec<T>, tagged: bool) -> Sequence<T> {
    let items: Rc<[T]> = items.into();
    Sequence::from_factory(tagged, move || ListSource {
        items: Rc::clone(&items),
        next: 0,
        tagged,
    })
}

struct ListSource<T> {
    items: Rc<[T]>,
    next: usize,
    tagged: bool,
}

impl<T: Clone> PullSource<Item<T>> for ListSource<T> {
    fn pull(&mut self) -> Pull<Item<T>> {
        let Some(value) = self.items.get(self.next) else {
            return Pull::End;
        };
        let item = if self.tagged {
            Item::tagged(value.clone(), TagPath::index(self.next))
        } else {
            Item::new(value.clone())
        };
        self.next += 1;
        Pull::Item(item)
    }
}
