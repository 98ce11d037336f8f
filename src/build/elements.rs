use super::range::{range, Range};
use crate::{Step, Stream};

/// Each element of a slice, by reference, in index order.
///
/// Built from an index [`Range`] and a lookup into the slice, rather than a
/// cursor of its own. Created via [`elements`].
#[derive(Debug, Clone)]
pub struct Elements<'a, T> {
    indices: Range<usize>,
    slice: &'a [T],
}

/// Create a stream over the elements of `slice`.
///
/// ```rust
/// use streams::prelude::*;
///
/// let words = ["x", "y", "z"];
/// assert_eq!(elements(&words).collect(), vec![&"x", &"y", &"z"]);
/// ```
pub fn elements<T>(slice: &[T]) -> Elements<'_, T> {
    Elements {
        indices: indices(slice),
        slice,
    }
}

/// Create a stream of the valid indices of `slice`, `0..slice.len()`.
pub fn indices<T>(slice: &[T]) -> Range<usize> {
    range(0, slice.len())
}

impl<'a, T> Stream for Elements<'a, T> {
    type Item = &'a T;

    fn advance(&mut self) -> Step<&'a T> {
        let slice = self.slice;
        self.indices.advance().and_then(|i| slice.get(i).into())
    }
}
