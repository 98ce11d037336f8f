//! Transforming produced values.

use crate::{Step, Stream};

/// Applies a function to every value of the wrapped stream.
///
/// The function runs exactly once per produced value, in upstream order, and
/// never runs after the upstream is exhausted.
#[derive(Clone)]
pub struct Map<S, F> {
    stream: S,
    f: F,
}

/// Create a stream that transforms each value of `stream` with `f`.
///
/// # Examples
///
/// ```
/// use streams::prelude::*;
///
/// let upper = map(range('a' as u32, 'd' as u32), |c| c - 'a' as u32 + 'A' as u32);
/// assert_eq!(upper.collect(), vec!['A' as u32, 'B' as u32, 'C' as u32]);
/// ```
pub fn map<S, U, F>(stream: S, f: F) -> Map<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> U,
{
    Map { stream, f }
}

impl<S, U, F> Stream for Map<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> Step<U> {
        self.stream.advance().map(&mut self.f)
    }
}
