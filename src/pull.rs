/// Result of pulling from a source: either the next item or the end of the run.
///
/// `Pull` is the return type of [`PullSource::pull`](crate::PullSource::pull), similar to
/// how `Option` represents optional values. `End` is terminal and silent; it never
/// carries an error.
///
/// # Examples
///
/// ```rust
/// use restream::Pull;
///
/// let next: Pull<i32> = Pull::Item(42);
/// assert_eq!(next.map(|x| x * 2), Pull::Item(84));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pull<T> {
    /// The source produced an item
    Item(T),
    /// The source is exhausted
    End,
}

impl<T> Pull<T> {
    /// Returns `true` if the pull produced an item.
    #[inline]
    pub const fn is_item(&self) -> bool {
        matches!(self, Pull::Item(_))
    }

    /// Returns `true` if the source is exhausted.
    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self, Pull::End)
    }

    /// Converts from `Pull<T>` to `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use restream::Pull;
    ///
    /// assert_eq!(Pull::Item(1).item(), Some(1));
    /// assert_eq!(Pull::<i32>::End.item(), None);
    /// ```
    #[inline]
    pub fn item(self) -> Option<T> {
        match self {
            Pull::Item(t) => Some(t),
            Pull::End => None,
        }
    }

    /// Maps a `Pull<T>` to `Pull<U>` by applying a function to the item.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Pull<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Pull::Item(t) => Pull::Item(f(t)),
            Pull::End => Pull::End,
        }
    }

    /// Converts from `&Pull<T>` to `Pull<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Pull<&T> {
        match self {
            Pull::Item(t) => Pull::Item(t),
            Pull::End => Pull::End,
        }
    }

    /// Returns the item or a default.
    #[inline]
    pub fn item_or(self, default: T) -> T {
        match self {
            Pull::Item(t) => t,
            Pull::End => default,
        }
    }

    /// Returns the contained item, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the pull is `End`.
    #[inline]
    #[track_caller]
    pub fn unwrap_item(self) -> T {
        match self {
            Pull::Item(t) => t,
            Pull::End => panic!("called `Pull::unwrap_item()` on an `End` value"),
        }
    }
}

impl<T> From<Option<T>> for Pull<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(t) => Pull::Item(t),
            None => Pull::End,
        }
    }
}

impl<T> From<Pull<T>> for Option<T> {
    fn from(value: Pull<T>) -> Self {
        value.item()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_item_and_is_end() {
        let i: Pull<i32> = Pull::Item(42);
        let e: Pull<i32> = Pull::End;

        assert!(i.is_item());
        assert!(!i.is_end());
        assert!(e.is_end());
        assert!(!e.is_item());
    }

    #[test]
    fn test_map_and_item_or() {
        assert_eq!(Pull::Item(3).map(|v| v * 2), Pull::Item(6));
        assert_eq!(Pull::<i32>::End.map(|v| v * 2), Pull::End);
        assert_eq!(Pull::Item(3).item_or(0), 3);
        assert_eq!(Pull::End.item_or(0), 0);
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Pull::from(Some(1)), Pull::Item(1));
        assert_eq!(Pull::<i32>::from(None), Pull::End);
        assert_eq!(Option::from(Pull::Item("a")), Some("a"));
    }

    #[test]
    fn test_as_ref() {
        let i: Pull<String> = Pull::Item("x".to_string());
        assert_eq!(i.as_ref(), Pull::Item(&"x".to_string()));
    }

    #[test]
    #[should_panic(expected = "called `Pull::unwrap_item()` on an `End` value")]
    fn test_unwrap_item_panics() {
        Pull::<i32>::End.unwrap_item();
    }
}
