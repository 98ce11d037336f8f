use super::{map::Map, zip::Pair, zip::Zip};
use crate::build::{elements, indices, Elements, Range};
use crate::Stream;

/// An element together with its position in the source collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Indexed<T> {
    pub index: usize,
    pub value: T,
}

impl<T> From<Pair<usize, T>> for Indexed<T> {
    fn from(pair: Pair<usize, T>) -> Self {
        Indexed {
            index: pair.first,
            value: pair.second,
        }
    }
}

/// Stream returned by [`enumerate`]: the slice's indices zipped with its elements.
pub type Enumerate<'a, T> =
    Map<Zip<Range<usize>, Elements<'a, T>>, fn(Pair<usize, &'a T>) -> Indexed<&'a T>>;

/// Create a stream of each element of `slice` with its index.
///
/// ```
/// use streams::prelude::*;
///
/// let letters = ["x", "y"];
/// let mut s = enumerate(&letters);
/// assert_eq!(s.advance(), Step::More(Indexed { index: 0, value: &"x" }));
/// assert_eq!(s.advance(), Step::More(Indexed { index: 1, value: &"y" }));
/// assert_eq!(s.advance(), Step::Done);
/// ```
pub fn enumerate<'a, T>(slice: &'a [T]) -> Enumerate<'a, T> {
    let into_indexed: fn(Pair<usize, &'a T>) -> Indexed<&'a T> = Indexed::from;
    indices(slice).zip(elements(slice)).map(into_indexed)
}
