use crate::modifier::Modifier;

/// A modifier built from a closure returning `Option`.
pub struct FromFn<F>(F);

impl<A, B, F> Modifier<A> for FromFn<F>
where
    F: Fn(A) -> Option<B>,
{
    type Output = B;

    fn apply(&self, input: A) -> Option<B> {
        (self.0)(input)
    }
}

/// Create a modifier from a closure; returning `None` drops the item.
///
/// ```rust
/// use restream::prelude::*;
///
/// let parse = from_fn(|s: &str| s.parse::<i32>().ok());
/// assert_eq!(parse.apply("12"), Some(12));
/// assert_eq!(parse.apply("x"), None);
/// ```
pub fn from_fn<A, B, F>(f: F) -> FromFn<F>
where
    F: Fn(A) -> Option<B>,
{
    FromFn(f)
}

/// Applies a function to every value and keeps all of them.
pub struct Map<F>(F);

impl<A, B, F> Modifier<A> for Map<F>
where
    F: Fn(A) -> B,
{
    type Output = B;

    fn apply(&self, input: A) -> Option<B> {
        Some((self.0)(input))
    }
}

pub fn map<A, B, F>(f: F) -> Map<F>
where
    F: Fn(A) -> B,
{
    Map(f)
}

/// Keeps values for which the predicate holds.
pub struct Filter<F>(F);

impl<A, F> Modifier<A> for Filter<F>
where
    F: Fn(&A) -> bool,
{
    type Output = A;

    fn apply(&self, input: A) -> Option<A> {
        if (self.0)(&input) {
            Some(input)
        } else {
            None
        }
    }
}

pub fn filter<A, F>(predicate: F) -> Filter<F>
where
    F: Fn(&A) -> bool,
{
    Filter(predicate)
}

/// Passes every value through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<A> Modifier<A> for Identity {
    type Output = A;

    fn apply(&self, input: A) -> Option<A> {
        Some(input)
    }
}

pub fn identity() -> Identity {
    Identity
}
