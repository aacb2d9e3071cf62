use crate::{
    error::{Error, Result},
    sequence::Sequence,
    source::PullSource,
    tag::Item,
};

/// Strip the tags of a tagged sequence.
///
/// The result is untagged. Applying this to a sequence that is not tagged is
/// a configuration error.
pub fn untag<T: 'static>(sequence: Sequence<T>) -> Result<Sequence<T>> {
    if !sequence.is_tagged() {
        return Err(Error::NotTagged { operation: "Untag" });
    }
    Ok(Sequence::from_factory(false, move || {
        sequence
            .restart()
            .map_items(|item: Item<T>| Item::new(item.value))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{list, list_tagged};

    #[test]
    fn test_untag_drops_tags() {
        let seq = untag(list_tagged(vec!["a", "b"])).unwrap();
        assert!(!seq.is_tagged());
        assert!(seq.iter().all(|item| item.tag.is_none()));
        assert_eq!(seq.values(), vec!["a", "b"]);
    }

    #[test]
    fn test_untag_untagged_fails() {
        let err = untag(list(vec![1])).unwrap_err();
        assert!(matches!(err, Error::NotTagged { operation: "Untag" }));
    }

    #[test]
    fn test_untag_twice_fails() {
        let once = list_tagged(vec![1]).untag().unwrap();
        assert!(once.untag().is_err());
    }
}
