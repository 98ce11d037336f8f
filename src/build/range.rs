use num_traits::PrimInt;

use crate::{Step, Stream};

/// Ascending integers from `start` up to, but not including, `end`.
///
/// Created via [`range`].
#[derive(Debug, Clone)]
pub struct Range<T> {
    next: T,
    end: T,
}

/// Create a stream of the integers `start, start + 1, ..., end - 1`.
///
/// Works for every primitive integer type. If `start >= end` the stream is empty.
///
/// ```rust
/// use streams::prelude::*;
///
/// assert_eq!(range(3, 7).collect(), vec![3, 4, 5, 6]);
/// assert_eq!(range(5_u8, 2).collect(), Vec::<u8>::new());
/// ```
pub fn range<T: PrimInt>(start: T, end: T) -> Range<T> {
    Range { next: start, end }
}

impl<T: PrimInt> Stream for Range<T> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        if self.next >= self.end {
            return Step::Done;
        }
        let value = self.next;
        // value < end <= T::max_value(), so this never overflows
        self.next = value + T::one();
        Step::More(value)
    }
}
