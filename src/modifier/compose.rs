use crate::modifier::Modifier;

/// Composition of two modifiers: `outer` runs on what `inner` keeps.
///
/// Created via [`compose`] or [`Modifier::then`]. If `inner` drops the value,
/// `outer` is never invoked.
pub struct Compose<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

/// Compose two modifiers as functions: the result maps `x` to `outer(inner(x))`.
///
/// ```rust
/// use restream::prelude::*;
///
/// let double = map(|x: i32| x * 2);
/// let add_one = map(|x: i32| x + 1);
/// assert_eq!(compose(double, add_one).apply(3), Some(8));
/// ```
pub fn compose<A, Outer, Inner>(outer: Outer, inner: Inner) -> Compose<Outer, Inner>
where
    Inner: Modifier<A>,
    Outer: Modifier<Inner::Output>,
{
    Compose { outer, inner }
}

impl<A, Outer, Inner> Modifier<A> for Compose<Outer, Inner>
where
    Inner: Modifier<A>,
    Outer: Modifier<Inner::Output>,
{
    type Output = Outer::Output;

    fn apply(&self, input: A) -> Option<Self::Output> {
        self.inner
            .apply(input)
            .and_then(|value| self.outer.apply(value))
    }
}
